//! Domain ports for the hexagonal boundary.

mod user_registry;

pub use user_registry::UserRegistry;
