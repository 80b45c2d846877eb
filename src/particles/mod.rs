//! Ambient particle field drawn behind the flowers

pub mod fireflies;

pub use fireflies::{Firefly, FireflySystem};
