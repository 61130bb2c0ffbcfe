//! Domain types.

mod assignment;
mod category;
mod reference;
mod value;

pub use assignment::EnvAssignment;
pub use category::Category;
pub use reference::{JsonKeySecretReference, SecretReference};
pub use value::SecretValue;
