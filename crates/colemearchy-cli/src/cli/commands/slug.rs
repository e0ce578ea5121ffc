//! `colemearchy slug` – print a URL slug for a title.

use colemearchy_core::text::generate_slug;

pub fn run_slug(title: &str, max_length: usize) {
    println!("{}", generate_slug(title, max_length));
}
