#![allow(dead_code)]

#[vitrine_kernel::vitrine_error]
pub enum LoadError {
    Io { source: std::io::Error, context: String },
}

fn main() {}
