use vitrine_kernel::prelude::*;

#[derive(Debug, Model)]
pub struct Book {
    pub title: String,
    pub pages: u32,
}

#[presenter(model = Book, impl_presenter = false)]
#[derive(Debug)]
pub struct SpinePresenter {}

impl Presenter for SpinePresenter {
    fn to_array(&self) -> Record {
        let mut record = Record::new();
        record.insert("spine".to_owned(), Value::from(self.title.to_uppercase()));
        record
    }
}

fn main() {
    let presented = SpinePresenter::collection(vec![
        Book { title: "Dune".to_owned(), pages: 412 },
        Book { title: "Emma".to_owned(), pages: 474 },
    ]);

    let records = presented.to_array();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["spine"], "DUNE");
    assert_eq!(records[1]["spine"], "EMMA");
}
