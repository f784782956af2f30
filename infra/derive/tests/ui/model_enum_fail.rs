#![allow(dead_code)]

#[derive(vitrine_kernel::Model)]
pub enum Shape {
    Circle,
}

fn main() {}
