pub mod menu;

pub use menu::{fare_class_from_code, Menu};
