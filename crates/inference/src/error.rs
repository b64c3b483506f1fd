use std::fmt;

#[derive(Debug)]
pub enum InferError {
    OpenVino(openvino::OvError),
    Video(video::VideoError),
    Shape(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::OpenVino(err) => write!(f, "openvino: {err}"),
            InferError::Video(err) => write!(f, "video: {err}"),
            InferError::Shape(msg) => write!(f, "shape error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InferError::OpenVino(err) => Some(err),
            InferError::Video(err) => Some(err),
            _ => None,
        }
    }
}

impl From<openvino::OvError> for InferError {
    fn from(err: openvino::OvError) -> Self {
        InferError::OpenVino(err)
    }
}

impl From<video::VideoError> for InferError {
    fn from(err: video::VideoError) -> Self {
        InferError::Video(err)
    }
}
