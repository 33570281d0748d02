//! Test renaming a private field without exposing it.

use spread::Reflect;

#[derive(Reflect)]
pub struct Secret {
    #[spread(name = "token")]
    value: String,
}

fn main() {
    let _ = Secret { value: String::new() }.value;
}
