/// Detected circle
pub mod circle;
/// Floating point pixel position
pub mod point;
/// Physical and pixel size ranges
pub mod range;

pub use circle::Circle;
pub use point::Point;
pub use range::{RadiusRange, SizeRange};
