pub mod family;
pub mod registry;

pub use family::TrackFamily;
pub use registry::{ConfigRegistry, TrackConfig, palette};
