//! Test duplicate property names.

use spread::Reflect;

#[derive(Reflect)]
pub struct Test {
    pub value: i32,
    #[spread(name = "value")]
    pub other: i32,
}

fn main() {}
