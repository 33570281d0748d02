//! Test unknown field attribute error.

use spread::Reflect;

#[derive(Reflect)]
pub struct Test {
    #[spread(rename = "other")]
    pub value: i32,
}

fn main() {}
