//! Bindings to the OpenVINO 2.0 C API (`libopenvino_c`).
//!
//! Covers what a frame benchmark needs: device discovery, model reading,
//! input preprocessing, compilation with performance hints and
//! synchronous inference on caller-owned buffers.

pub mod compiled;
pub mod error;
pub mod ffi;
pub mod model;
pub mod preprocess;
pub mod runtime;
pub mod tensor;
pub mod types;
pub mod version;

pub use compiled::{CompiledModel, InferRequest};
pub use error::{OvError, Result, Status};
pub use model::{Model, PortInfo};
pub use preprocess::{InputInfo, InputModelInfo, InputTensorInfo, PrePostProcessor, PreprocessSteps};
pub use runtime::Core;
pub use tensor::{Tensor, expected_byte_len};
pub use types::{ColorFormat, Dimension, ElementType, PartialShape, PerformanceMode, ResizeAlgorithm};
pub use version::version;

/// Compiled-model property holding the number of execution streams.
pub const NUM_STREAMS: &str = "NUM_STREAMS";

/// Compiled-model property holding the optimal number of parallel requests.
pub const OPTIMAL_NUMBER_OF_INFER_REQUESTS: &str = "OPTIMAL_NUMBER_OF_INFER_REQUESTS";
