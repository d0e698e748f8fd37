pub mod cheese;
pub mod polygon;

pub use cheese::{Cheese, Platter};
pub use polygon::Polygon;
