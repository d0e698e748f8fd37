mod offset;
mod scale;

pub use offset::{OffsetMode, OffsetPolygon};
pub use scale::{ScaleCenter, ScalePolygon};
