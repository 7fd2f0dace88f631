pub mod menu;

pub use menu::{Menu, Outcome};
