//! Sight reduction: observers, sights and lines of position

pub mod lop;
pub mod observer;
pub mod sight;

pub use lop::{LineOfPosition, VesselRun};
pub use observer::Observer;
pub use sight::{InterceptDirection, Sight};
