use {std::fmt, video::VideoError};

#[derive(Debug)]
pub enum BenchError {
    #[cfg(feature = "runtime")]
    Infer(inference::InferError),
    Video(VideoError),
    Io(std::io::Error),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "runtime")]
            BenchError::Infer(err) => write!(f, "inference error: {err}"),
            BenchError::Video(err) => write!(f, "video error: {err}"),
            BenchError::Io(err) => write!(f, "io error: {err}"),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "runtime")]
            BenchError::Infer(err) => Some(err),
            BenchError::Video(err) => Some(err),
            BenchError::Io(err) => Some(err),
        }
    }
}

#[cfg(feature = "runtime")]
impl From<inference::InferError> for BenchError {
    fn from(err: inference::InferError) -> Self {
        BenchError::Infer(err)
    }
}

impl From<VideoError> for BenchError {
    fn from(err: VideoError) -> Self {
        BenchError::Video(err)
    }
}

impl From<std::io::Error> for BenchError {
    fn from(err: std::io::Error) -> Self {
        BenchError::Io(err)
    }
}
