use serde::Serialize;
use vitrine_domain::{Paginator, Record, Value};

/// Position of a presented page within the whole result set, copied from the paginator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub current_page: u64,
    pub from: Option<u64>,
    pub last_page: u64,
    pub path: String,
    pub per_page: u64,
    pub to: Option<u64>,
    pub total: u64,
}

impl PageMeta {
    pub(crate) fn of<P: Paginator + ?Sized>(paginator: &P) -> Self {
        Self {
            current_page: paginator.current_page(),
            from: paginator.from(),
            last_page: paginator.last_page(),
            path: paginator.path().to_owned(),
            per_page: paginator.per_page(),
            to: paginator.to(),
            total: paginator.total(),
        }
    }

    #[must_use]
    pub fn to_array(&self) -> Record {
        let mut record = Record::new();
        record.insert("current_page".to_owned(), Value::from(self.current_page));
        record.insert("from".to_owned(), Value::from(self.from));
        record.insert("last_page".to_owned(), Value::from(self.last_page));
        record.insert("path".to_owned(), Value::from(self.path.as_str()));
        record.insert("per_page".to_owned(), Value::from(self.per_page));
        record.insert("to".to_owned(), Value::from(self.to));
        record.insert("total".to_owned(), Value::from(self.total));
        record
    }
}
