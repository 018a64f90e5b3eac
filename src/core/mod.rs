//! Core types and constants for sight reduction

pub mod angle;
pub mod body;
pub mod constants;
pub mod error;

pub use angle::*;
pub use body::*;
pub use constants::*;
pub use error::*;
