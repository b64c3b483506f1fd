use video::{Frame, FrameSize, VideoError};

#[test]
fn test_frame_wraps_exact_buffer() {
    let data = vec![0u8; 4 * 2 * 3];
    let frame = Frame::new(&data, FrameSize::new(4, 2), 3).expect("valid frame");
    assert_eq!(frame.data().len(), 24);
    assert_eq!(frame.size(), FrameSize::new(4, 2));
    assert_eq!(frame.channels(), 3);
}

#[test]
fn test_frame_rejects_short_buffer() {
    let data = vec![0u8; 4 * 2 * 3 - 1];
    match Frame::new(&data, FrameSize::new(4, 2), 3) {
        Err(VideoError::Format(msg)) => assert!(msg.contains("expected 24")),
        other => panic!("Expected VideoError::Format, got {:?}", other),
    }
}

#[test]
fn test_frame_rejects_padded_buffer() {
    let data = vec![0u8; 4 * 2 * 3 + 3];
    assert!(Frame::new(&data, FrameSize::new(4, 2), 3).is_err());
}

#[test]
fn test_expect_shape_accepts_configured_size() {
    let data = vec![0u8; 1280 * 1024 * 3];
    let frame = Frame::new(&data, FrameSize::new(1280, 1024), 3).unwrap();
    assert!(frame.expect_shape(FrameSize::new(1280, 1024), 3).is_ok());
}

#[test]
fn test_expect_shape_reports_size_mismatch() {
    let data = vec![0u8; 640 * 480 * 3];
    let frame = Frame::new(&data, FrameSize::new(640, 480), 3).unwrap();
    match frame.expect_shape(FrameSize::new(1280, 1024), 3) {
        Err(VideoError::Size { expected, actual }) => {
            assert_eq!(expected, FrameSize::new(1280, 1024));
            assert_eq!(actual, FrameSize::new(640, 480));
        }
        other => panic!("Expected VideoError::Size, got {:?}", other),
    }
}

#[test]
fn test_expect_shape_reports_channel_mismatch() {
    let data = vec![0u8; 2 * 2];
    let frame = Frame::new(&data, FrameSize::new(2, 2), 1).unwrap();
    assert!(matches!(frame.expect_shape(FrameSize::new(2, 2), 3), Err(VideoError::Format(_))));
}

#[test]
fn test_size_error_display() {
    let error = VideoError::Size {
        expected: FrameSize::new(1280, 1024),
        actual: FrameSize::new(640, 480),
    };
    assert_eq!(error.to_string(), "frame size mismatch: expected 1280x1024, decoded 640x480");
}
