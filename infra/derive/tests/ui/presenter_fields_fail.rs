#![allow(dead_code)]

pub struct Book;

#[vitrine_kernel::presenter(model = Book)]
pub struct BookPresenter(String);

fn main() {}
