// These tests need libopenvino_c at link and run time.
use openvino::{Core, ElementType, Status, Tensor};

#[test]
fn test_read_model_nonexistent_file() {
    if let Ok(core) = Core::new() {
        let result = core.read_model("/nonexistent/model.xml");
        assert!(result.is_err(), "Should error for non-existent file");
    }
}

#[test]
fn test_available_devices_are_named() {
    if let Ok(core) = Core::new() {
        let devices = core.available_devices().expect("device query");
        assert!(devices.iter().all(|name| !name.is_empty()));
    }
}

#[test]
fn test_tensor_wraps_exact_frame() {
    let frame = vec![7u8; 4 * 5 * 3];
    assert!(Tensor::from_slice(ElementType::U8, &[1, 4, 5, 3], &frame).is_ok());
}

#[test]
fn test_tensor_rejects_mismatched_frame() {
    let frame = vec![0u8; 4 * 5 * 3];
    match Tensor::from_slice(ElementType::U8, &[1, 5, 4, 4], &frame) {
        Err(error) => {
            assert_eq!(error.status(), Status::InvalidArgument);
            assert!(error.message().contains("needs 80"));
        }
        Ok(_) => panic!("mismatched frame must not be wrapped"),
    }
}

#[test]
fn test_linked_runtime_reports_release() {
    let build_number = openvino::version().expect("version query");
    assert!(
        openvino::version::release_of(&build_number).is_some(),
        "unrecognized OpenVINO build number {}",
        build_number
    );
}
