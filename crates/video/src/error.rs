use {crate::FrameSize, std::fmt};

#[derive(Debug)]
pub enum VideoError {
    Backend(String),
    Format(String),
    Size { expected: FrameSize, actual: FrameSize },
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Backend(msg) => write!(f, "backend error: {msg}"),
            VideoError::Format(msg) => write!(f, "format error: {msg}"),
            VideoError::Size { expected, actual } => {
                write!(f, "frame size mismatch: expected {expected}, decoded {actual}")
            }
        }
    }
}

impl std::error::Error for VideoError {}

#[cfg(feature = "opencv")]
impl From<opencv::Error> for VideoError {
    fn from(err: opencv::Error) -> Self {
        VideoError::Backend(err.to_string())
    }
}
