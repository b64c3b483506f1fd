use crate::*;

/// Sequential frame producer.
pub trait FrameSource {
    /// Decode the next frame into the source's buffer. `Ok(None)` marks the
    /// end of the stream.
    fn next_frame(&mut self) -> Result<Option<Frame<'_>>, VideoError>;
}
