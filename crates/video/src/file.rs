use {
    crate::*,
    opencv::{
        core::{CV_8UC3, Mat},
        prelude::*,
        videoio::{CAP_ANY, VideoCapture},
    },
    std::path::{Path, PathBuf},
};

/// Video file decoded with OpenCV. Every read overwrites the same `Mat`.
pub struct VideoFile {
    path: PathBuf,
    capture: VideoCapture,
    frame: Mat,
    opened: bool,
}

impl VideoFile {
    /// Open `path` for decoding.
    ///
    /// A missing or unreadable file is not an error: it yields no frames,
    /// and a warning is logged. Only failures inside OpenCV itself are
    /// returned.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, VideoError> {
        let path = path.as_ref().to_path_buf();
        let path_str = path
            .to_str()
            .ok_or_else(|| VideoError::Backend(format!("non UTF-8 video path {:?}", path)))?;
        let capture = VideoCapture::from_file(path_str, CAP_ANY)?;
        let opened = capture.is_opened()?;
        if opened {
            log::info!("video: opened {}", path.display());
        } else {
            log::warn!("video: could not open {}, no frames will be read", path.display());
        }
        Ok(Self {
            path,
            capture,
            frame: Mat::default(),
            opened,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_opened(&self) -> bool {
        self.opened
    }
}

impl FrameSource for VideoFile {
    fn next_frame(&mut self) -> Result<Option<Frame<'_>>, VideoError> {
        if !self.opened || !self.capture.read(&mut self.frame)? || self.frame.empty() {
            return Ok(None);
        }
        if self.frame.typ() != CV_8UC3 {
            return Err(VideoError::Format(format!(
                "decoded frame has OpenCV type {}, expected 8-bit 3-channel",
                self.frame.typ()
            )));
        }
        if !self.frame.is_continuous() {
            return Err(VideoError::Format("decoded frame is not contiguous".to_string()));
        }
        let size = FrameSize::new(self.frame.cols() as usize, self.frame.rows() as usize);
        let data = self.frame.data_bytes()?;
        Frame::new(data, size, 3).map(Some)
    }
}
