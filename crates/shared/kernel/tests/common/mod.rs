#![allow(dead_code, unreachable_pub)]

use std::sync::Arc;
use vitrine_kernel::prelude::*;

#[derive(Debug, PartialEq, Eq, Model)]
pub struct User {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownInitial(pub usize);

impl User {
    pub fn fullname(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    pub fn initials(&self, separator: &str, upper: bool) -> String {
        let initials = [&self.firstname, &self.lastname]
            .iter()
            .filter_map(|name| name.chars().next())
            .map(String::from)
            .collect::<Vec<_>>()
            .join(separator);
        if upper { initials.to_uppercase() } else { initials }
    }

    pub fn initial_at(&self, index: usize) -> Result<char, UnknownInitial> {
        self.initials("", false).chars().nth(index).ok_or(UnknownInitial(index))
    }
}

#[presenter(model = User)]
pub struct UserPresenter;

/// Shows only the full name and e-mail address.
#[presenter(model = User, impl_presenter = false)]
pub struct ContactPresenter;

impl Presenter for ContactPresenter {
    fn to_array(&self) -> Record {
        let mut record = Record::new();
        record.insert("fullname".to_owned(), Value::from(self.fullname()));
        record.insert("email".to_owned(), Value::from(self.email.as_str()));
        record
    }
}

pub fn user(n: usize) -> User {
    User {
        firstname: format!("Jane{n}"),
        lastname: format!("Doe{n}"),
        email: format!("jane{n}@example.com"),
    }
}

pub fn users(count: usize) -> Vec<Arc<User>> {
    (1..=count).map(|n| Arc::new(user(n))).collect()
}

/// Paginator with fixed bookkeeping, independent of how many items it holds.
#[derive(Debug, Clone)]
pub struct FixedPaginator {
    pub items: Vec<Arc<User>>,
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
    pub total: u64,
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub path: String,
}

impl FixedPaginator {
    /// current_page=1, last_page=100, per_page=15, total=10, from=1, to=10.
    pub fn example(items: Vec<Arc<User>>) -> Self {
        Self {
            items,
            current_page: 1,
            last_page: 100,
            per_page: 15,
            total: 10,
            from: Some(1),
            to: Some(10),
            path: "http://example.com/pagination".to_owned(),
        }
    }
}

impl Paginator for FixedPaginator {
    type Model = User;

    fn items(&self) -> Vec<Arc<User>> {
        self.items.clone()
    }

    fn current_page(&self) -> u64 {
        self.current_page
    }

    fn last_page(&self) -> u64 {
        self.last_page
    }

    fn per_page(&self) -> u64 {
        self.per_page
    }

    fn total(&self) -> u64 {
        self.total
    }

    fn from(&self) -> Option<u64> {
        self.from
    }

    fn to(&self) -> Option<u64> {
        self.to
    }

    fn path(&self) -> &str {
        &self.path
    }
}
