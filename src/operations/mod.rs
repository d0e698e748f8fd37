pub mod extract;
pub mod transform;

pub use extract::{ExtractCheese, ExtractParams, ExtractPlatter};
pub use transform::{OffsetMode, OffsetPolygon, ScaleCenter, ScalePolygon};
