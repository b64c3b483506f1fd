//! Decoded video frames for the benchmark.
//!
//! `FrameSource` hands out borrowed frames one at a time; the OpenCV
//! file backend lives behind the `opencv` feature.

pub mod error;
pub mod frame;
pub mod source;

#[cfg(feature = "opencv")]
pub mod file;

pub use error::VideoError;
pub use frame::{Frame, FrameSize};
pub use source::FrameSource;

#[cfg(feature = "opencv")]
pub use file::VideoFile;
