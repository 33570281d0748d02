//! Test deriving on a tuple struct.

use spread::Reflect;

#[derive(Reflect)]
pub struct Pair(pub i32, pub i32);

fn main() {}
