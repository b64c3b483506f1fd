use {crate::VideoError, std::fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSize {
    pub width: usize,
    pub height: usize,
}

impl FrameSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for FrameSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Interleaved 8-bit frame (BGR for decoded video), borrowed from the
/// source's buffer. The borrow ends before the source can decode again.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    data: &'a [u8],
    size: FrameSize,
    channels: usize,
}

impl<'a> Frame<'a> {
    pub fn new(data: &'a [u8], size: FrameSize, channels: usize) -> Result<Self, VideoError> {
        let expected = size.width * size.height * channels;
        if data.len() != expected {
            return Err(VideoError::Format(format!(
                "{} bytes for a {} frame with {} channels, expected {}",
                data.len(),
                size,
                channels,
                expected
            )));
        }
        Ok(Self { data, size, channels })
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    pub fn size(&self) -> FrameSize {
        self.size
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Fail unless the frame has exactly this size and channel count.
    pub fn expect_shape(&self, size: FrameSize, channels: usize) -> Result<(), VideoError> {
        if self.size != size {
            return Err(VideoError::Size {
                expected: size,
                actual: self.size,
            });
        }
        if self.channels != channels {
            return Err(VideoError::Format(format!(
                "expected {} channels, decoded {}",
                channels, self.channels
            )));
        }
        Ok(())
    }
}
