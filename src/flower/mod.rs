//! Flower records and their construction

pub mod entity;
pub mod factory;

pub use entity::{Flower, FlowerPhase, Petal, Sway};
pub use factory::create_flower;
