#![allow(dead_code)]

#[vitrine_kernel::vitrine_error]
pub enum LoadError {
    Io(std::io::Error),
}

fn main() {}
