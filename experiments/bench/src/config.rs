use {std::path::PathBuf, video::FrameSize};

/// Video decoded for every run, relative to the working directory.
pub const VIDEO_PATH: &str = "video.avi";

/// Frame size fed to the model. Frames of any other size abort the run.
pub const FRAME_SIZE: FrameSize = FrameSize::new(1280, 1024);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub model_path: PathBuf,
    pub device: String,
    pub log_dir: Option<PathBuf>,
    pub video_path: PathBuf,
    pub frame_size: FrameSize,
}

impl BenchConfig {
    pub fn new(model_path: PathBuf, device: String, log_dir: Option<PathBuf>) -> Self {
        Self {
            model_path,
            device,
            log_dir,
            video_path: PathBuf::from(VIDEO_PATH),
            frame_size: FRAME_SIZE,
        }
    }
}
