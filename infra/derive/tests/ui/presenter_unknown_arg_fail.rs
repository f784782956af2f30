#![allow(dead_code)]

pub struct Book;

#[vitrine_kernel::presenter(model = Book, skin = true)]
pub struct BookPresenter;

fn main() {}
