#![allow(dead_code)]

#[derive(vitrine_kernel::Model)]
pub struct Account {
    #[model(rename = "mail", rename = "email")]
    pub email: String,
}

fn main() {}
