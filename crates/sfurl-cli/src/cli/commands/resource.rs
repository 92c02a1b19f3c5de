//! `sfurl category|product|search` – logical resource paths.

use sfurl_core::{category_url_builder, product_url_builder, search_url_builder, Category, Product};

pub fn run_category(id: &str) {
    println!("{}", category_url_builder(&Category::new(id)));
}

pub fn run_product(id: &str) {
    println!("{}", product_url_builder(&Product::new(id)));
}

pub fn run_search(term: &str) {
    println!("{}", search_url_builder(term));
}
