#![allow(dead_code)]

pub struct Book;

#[vitrine_kernel::presenter(model = Book)]
pub struct BookPresenter<T>;

fn main() {}
