pub mod color;
pub mod domain;
pub mod encode;
pub mod markers;
pub mod normalize;
pub mod segment;
pub mod types;

pub use color::Rgb;
pub use markers::MarkerGroup;
pub use normalize::LinearMap;
pub use segment::Segment;
pub use types::{ChannelValue, LogRow};
