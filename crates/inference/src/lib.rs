pub mod error;
pub mod framemodel;
pub mod inference;

pub use error::InferError;
pub use framemodel::{CompiledInfo, FrameModel, ModelInfo};
pub use inference::Inference;
