#![allow(dead_code)]

pub struct Book;

#[vitrine_kernel::presenter(impl_presenter = false)]
pub struct BookPresenter;

fn main() {}
