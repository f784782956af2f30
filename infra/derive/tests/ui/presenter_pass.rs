use std::sync::Arc;
use vitrine_kernel::prelude::*;

#[derive(Debug, Model)]
pub struct Book {
    pub title: String,
    pub pages: u32,
}

impl Book {
    pub fn is_long(&self) -> bool {
        self.pages > 500
    }
}

/// Shows a book as-is.
#[presenter(model = Book)]
pub struct BookPresenter;

fn main() {
    let book = Arc::new(Book { title: "Dune".to_owned(), pages: 412 });
    let presenter = BookPresenter::make(Arc::clone(&book));

    assert_eq!(presenter.title, "Dune");
    assert!(!presenter.is_long());
    assert!(Arc::ptr_eq(presenter.get_model(), &book));
    assert_eq!(presenter.to_array(), book.to_array());

    let cloned = presenter.clone();
    assert!(Arc::ptr_eq(cloned.get_model(), &book));

    let from_model: BookPresenter = Book { title: "Emma".to_owned(), pages: 474 }.into();
    assert_eq!(from_model.pages, 474);
}
