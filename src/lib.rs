//! wellplot-rs: well-log track composition engine.
//!
//! This crate turns depth-indexed well-log measurements into a
//! renderer-agnostic figure specification: trace descriptors, a typed axis
//! map, and positioned annotations. Painting pixels from that specification
//! is the host application's concern.

pub mod compose;
pub mod config;
pub mod core;
pub mod error;
pub mod telemetry;

pub use compose::{CompositionState, FigureBuilder, FigureSpec, TrackComposer, TrackSlot};
pub use config::{ConfigRegistry, TrackConfig, TrackFamily};
pub use error::{PlotError, PlotResult};
