#![allow(dead_code)]

#[derive(vitrine_kernel::Model)]
pub struct Point(u32, u32);

fn main() {}
