use {
    inference::{FrameModel, InferError, Inference},
    video::{Frame, FrameSize, VideoError},
};

const FRAME_SIZE: FrameSize = FrameSize::new(1280, 1024);

// f32 [1,3,32,32] input multiplied by a constant
const GAIN_MODEL: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/frame_gain.xml");

fn runtime() -> Option<Inference> {
    match Inference::new() {
        Ok(inference) => Some(inference),
        Err(err) => {
            eprintln!("OpenVINO runtime unavailable, skipping: {}", err);
            None
        }
    }
}

fn gain_model_on_cpu() -> Option<(Inference, FrameModel)> {
    let inference = runtime()?;
    if !inference.available_devices().expect("device query").iter().any(|device| device == "CPU") {
        eprintln!("CPU plugin unavailable, skipping");
        return None;
    }
    let model = inference.use_frame_model(GAIN_MODEL, "CPU", FRAME_SIZE).expect("gain model compiles");
    Some((inference, model))
}

#[test]
fn test_frame_model_reports_model_as_read() {
    let Some((_inference, model)) = gain_model_on_cpu() else { return };
    let info = model.info();
    assert_eq!(info.name, "frame_gain");
    assert_eq!(info.inputs.len(), 1);
    assert_eq!(info.inputs[0].element_type.to_string(), "f32");
    assert_eq!(info.inputs[0].shape.to_string(), "[1,3,32,32]");
    assert_eq!(info.outputs.len(), 1);
    assert_eq!(info.outputs[0].shape.to_string(), "[1,3,32,32]");
}

#[test]
fn test_frame_model_reads_back_stream_properties() {
    let Some((_inference, model)) = gain_model_on_cpu() else { return };
    let compiled = model.compiled_info();
    assert!(!compiled.num_streams.is_empty());
    assert!(!compiled.optimal_infer_requests.is_empty());
    assert!(compiled.num_streams.parse::<u32>().is_ok(), "num_streams: {}", compiled.num_streams);
}

#[test]
fn test_frame_model_infers_configured_frames() {
    let Some((_inference, model)) = gain_model_on_cpu() else { return };
    let data = vec![128u8; FRAME_SIZE.width * FRAME_SIZE.height * 3];
    let frame = Frame::new(&data, FRAME_SIZE, 3).unwrap();
    model.infer(&frame).expect("first frame");
    model.infer(&frame).expect("second frame");
}

#[test]
fn test_frame_model_rejects_other_frame_sizes() {
    let Some((_inference, model)) = gain_model_on_cpu() else { return };
    let data = vec![0u8; 640 * 480 * 3];
    let frame = Frame::new(&data, FrameSize::new(640, 480), 3).unwrap();
    match model.infer(&frame) {
        Err(InferError::Video(VideoError::Size { expected, actual })) => {
            assert_eq!(expected, FRAME_SIZE);
            assert_eq!(actual, FrameSize::new(640, 480));
        }
        Err(other) => panic!("Expected a size mismatch, got {}", other),
        Ok(()) => panic!("640x480 frame must be rejected"),
    }
}

#[test]
fn test_available_devices_are_named() {
    let Some(inference) = runtime() else { return };
    let devices = inference.available_devices().expect("device query");
    assert!(devices.iter().all(|device| !device.is_empty()));
}

#[test]
fn test_missing_model_is_an_openvino_error() {
    let Some(inference) = runtime() else { return };
    let result = inference.use_frame_model("nonexistent_model.xml", "CPU", FrameSize::new(1280, 1024));
    match result {
        Err(InferError::OpenVino(_)) => {}
        Err(other) => panic!("Expected InferError::OpenVino, got {}", other),
        Ok(_) => panic!("Reading a missing model must fail"),
    }
}

#[test]
fn test_infererror_openvino_display() {
    let data = [0u8; 5];
    let Err(ov_err) = openvino::Tensor::from_slice(openvino::ElementType::U8, &[1, 2, 2, 3], &data) else {
        panic!("short data must be rejected");
    };
    let display = InferError::from(ov_err).to_string();
    assert!(display.starts_with("openvino: "));
    assert!(display.contains("needs 12"));
}
