use {
    bench::{BenchError, FRAME_SIZE, FrameInference, measure},
    std::time::Duration,
    video::{Frame, FrameSize, FrameSource, VideoError},
};

/// Produces `remaining` frames of `size` from one reused buffer.
struct FakeVideo {
    buffer: Vec<u8>,
    size: FrameSize,
    remaining: usize,
}

impl FakeVideo {
    fn new(size: FrameSize, frames: usize) -> Self {
        Self {
            buffer: vec![0u8; size.width * size.height * 3],
            size,
            remaining: frames,
        }
    }
}

impl FrameSource for FakeVideo {
    fn next_frame(&mut self) -> Result<Option<Frame<'_>>, VideoError> {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        self.buffer[0] = self.buffer[0].wrapping_add(1);
        Frame::new(&self.buffer, self.size, 3).map(Some)
    }
}

struct FailingVideo;

impl FrameSource for FailingVideo {
    fn next_frame(&mut self) -> Result<Option<Frame<'_>>, VideoError> {
        Err(VideoError::Backend("decoder crashed".to_string()))
    }
}

/// Checks frame shape the way the compiled model does and counts calls.
struct FakeModel {
    size: FrameSize,
    calls: usize,
    pause: Duration,
}

impl FakeModel {
    fn new(size: FrameSize) -> Self {
        Self {
            size,
            calls: 0,
            pause: Duration::ZERO,
        }
    }
}

impl FrameInference for FakeModel {
    type Error = VideoError;

    fn infer_frame(&mut self, frame: &Frame<'_>) -> Result<(), VideoError> {
        frame.expect_shape(self.size, 3)?;
        self.calls += 1;
        if !self.pause.is_zero() {
            std::thread::sleep(self.pause);
        }
        Ok(())
    }
}

#[test]
fn test_every_frame_is_counted() {
    let size = FrameSize::new(16, 8);
    let mut video = FakeVideo::new(size, 7);
    let mut model = FakeModel::new(size);
    let throughput = measure(&mut video, &mut model).unwrap();
    assert_eq!(throughput.frames(), 7);
    assert_eq!(model.calls, 7);
}

#[test]
fn test_empty_video_reports_no_frames() {
    let size = FrameSize::new(16, 8);
    let mut video = FakeVideo::new(size, 0);
    let mut model = FakeModel::new(size);
    let throughput = measure(&mut video, &mut model).unwrap();
    assert_eq!(throughput.frames(), 0);
    assert_eq!(model.calls, 0);
    assert_eq!(throughput.to_string(), "average: no frames processed");
}

#[test]
fn test_configured_frame_size_is_accepted() {
    let mut video = FakeVideo::new(FRAME_SIZE, 2);
    let mut model = FakeModel::new(FRAME_SIZE);
    assert_eq!(measure(&mut video, &mut model).unwrap().frames(), 2);
}

#[test]
fn test_frame_size_mismatch_aborts() {
    let mut video = FakeVideo::new(FrameSize::new(640, 480), 3);
    let mut model = FakeModel::new(FRAME_SIZE);
    match measure(&mut video, &mut model) {
        Err(BenchError::Video(VideoError::Size { expected, actual })) => {
            assert_eq!(expected, FRAME_SIZE);
            assert_eq!(actual, FrameSize::new(640, 480));
        }
        other => panic!("Expected a size mismatch, got {:?}", other),
    }
    assert_eq!(model.calls, 0);
}

#[test]
fn test_decode_failure_aborts() {
    let mut model = FakeModel::new(FRAME_SIZE);
    match measure(&mut FailingVideo, &mut model) {
        Err(BenchError::Video(VideoError::Backend(msg))) => assert_eq!(msg, "decoder crashed"),
        other => panic!("Expected a backend error, got {:?}", other),
    }
}

#[test]
fn test_only_inference_time_is_accumulated() {
    let size = FrameSize::new(4, 4);
    let mut video = FakeVideo::new(size, 3);
    let mut model = FakeModel::new(size);
    model.pause = Duration::from_millis(5);
    let throughput = measure(&mut video, &mut model).unwrap();
    assert_eq!(throughput.frames(), 3);
    assert!(throughput.total() >= Duration::from_millis(15));
    let fps = throughput.average_fps().unwrap();
    assert!(fps > 0.0 && fps <= 200.0);
}
