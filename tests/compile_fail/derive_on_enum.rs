//! Test deriving on an enum.

use spread::Reflect;

#[derive(Reflect)]
pub enum Mode {
    Fast,
    Slow,
}

fn main() {}
