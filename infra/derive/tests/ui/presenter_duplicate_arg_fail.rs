#![allow(dead_code)]

pub struct Book;

#[vitrine_kernel::presenter(model = Book, model = Book)]
pub struct BookPresenter;

fn main() {}
