pub mod args;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod throughput;

pub use args::{Action, BenchArgs, parse_args};
pub use config::{BenchConfig, FRAME_SIZE, VIDEO_PATH};
pub use error::BenchError;
pub use report::{format_devices, write_average, write_devices, write_model_info, write_settings, write_streams};
pub use runner::{FrameInference, measure};
pub use throughput::Throughput;
