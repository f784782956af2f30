use serde::Serialize;
use vitrine_domain::{Record, Value};

/// Navigation links of a presented page.
///
/// `first`, `last` and `prev` are full URLs; `next` is the bare number of the following
/// page. Clients depend on that asymmetry, so it stays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub first: String,
    pub last: String,
    pub prev: Option<String>,
    pub next: Option<u64>,
}

impl PageLinks {
    pub(crate) fn new(path: &str, page_name: &str, current_page: u64, last_page: u64) -> Self {
        let url = |page: u64| page_url(path, page_name, page);

        Self {
            first: url(1),
            last: url(last_page),
            prev: (current_page > 1).then(|| url(current_page - 1)),
            next: (current_page < last_page).then(|| current_page + 1),
        }
    }

    #[must_use]
    pub fn to_array(&self) -> Record {
        let mut record = Record::new();
        record.insert("first".to_owned(), Value::from(self.first.as_str()));
        record.insert("last".to_owned(), Value::from(self.last.as_str()));
        record.insert("prev".to_owned(), Value::from(self.prev.clone()));
        record.insert("next".to_owned(), Value::from(self.next));
        record
    }
}

/// `path` with the page parameter appended, joining with `&` when `path` already has a query.
///
/// A `#fragment` stays at the end, after the query.
pub(crate) fn page_url(path: &str, page_name: &str, page: u64) -> String {
    let (base, fragment) = path.split_once('#').map_or((path, None), |(b, f)| (b, Some(f)));
    let separator = if base.contains('?') { '&' } else { '?' };

    match fragment {
        Some(fragment) => format!("{base}{separator}{page_name}={page}#{fragment}"),
        None => format!("{base}{separator}{page_name}={page}"),
    }
}
