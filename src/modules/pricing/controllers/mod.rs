pub mod shopping_controller;

pub use shopping_controller::{configure, ReferenceClock, ShoppingState};
