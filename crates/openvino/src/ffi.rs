#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_float, c_int, c_void};

#[repr(C)]
pub struct OvCore {
    _private: [u8; 0],
}

#[repr(C)]
pub struct OvModel {
    _private: [u8; 0],
}

#[repr(C)]
pub struct OvCompiledModel {
    _private: [u8; 0],
}

#[repr(C)]
pub struct OvInferRequest {
    _private: [u8; 0],
}

#[repr(C)]
pub struct OvTensor {
    _private: [u8; 0],
}

#[repr(C)]
pub struct OvOutputConstPort {
    _private: [u8; 0],
}

#[repr(C)]
pub struct OvLayout {
    _private: [u8; 0],
}

#[repr(C)]
pub struct OvPrePostProcessor {
    _private: [u8; 0],
}

#[repr(C)]
pub struct OvInputInfo {
    _private: [u8; 0],
}

#[repr(C)]
pub struct OvInputTensorInfo {
    _private: [u8; 0],
}

#[repr(C)]
pub struct OvInputModelInfo {
    _private: [u8; 0],
}

#[repr(C)]
pub struct OvPreprocessSteps {
    _private: [u8; 0],
}

/// `ov_shape_t`: a static shape, `dims` owned by the runtime.
#[repr(C)]
#[derive(Debug)]
pub struct OvShape {
    pub rank: i64,
    pub dims: *mut i64,
}

/// `ov_dimension_t`: `min == max` for static dimensions, `max == -1` for unbounded.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OvDimension {
    pub min: i64,
    pub max: i64,
}

/// `ov_partial_shape_t`
#[repr(C)]
#[derive(Debug)]
pub struct OvPartialShape {
    pub rank: OvDimension,
    pub dims: *mut OvDimension,
}

/// `ov_available_devices_t`
#[repr(C)]
#[derive(Debug)]
pub struct OvAvailableDevices {
    pub devices: *mut *mut c_char,
    pub size: usize,
}

#[repr(C)]
pub struct OvVersion {
    pub build_number: *const c_char,
    pub description: *const c_char,
}

/// `ov_status_e` is returned as a plain int so unknown codes never produce
/// an invalid enum value on the Rust side.
pub type OvStatus = c_int;

pub const OV_STATUS_OK: OvStatus = 0;

// ov_element_type_e, as laid out in ov_common.h of releases 2023.0 through
// 2024.x (see `version::SUPPORTED_RELEASES`). Other releases may renumber it;
// `version::is_supported` gates on the build number at runtime.
pub const OV_ELEMENT_UNDEFINED: c_int = 0;
pub const OV_ELEMENT_DYNAMIC: c_int = 1;
pub const OV_ELEMENT_BOOLEAN: c_int = 2;
pub const OV_ELEMENT_BF16: c_int = 3;
pub const OV_ELEMENT_F16: c_int = 4;
pub const OV_ELEMENT_F32: c_int = 5;
pub const OV_ELEMENT_F64: c_int = 6;
pub const OV_ELEMENT_I4: c_int = 7;
pub const OV_ELEMENT_I8: c_int = 8;
pub const OV_ELEMENT_I16: c_int = 9;
pub const OV_ELEMENT_I32: c_int = 10;
pub const OV_ELEMENT_I64: c_int = 11;
pub const OV_ELEMENT_U1: c_int = 12;
pub const OV_ELEMENT_U4: c_int = 13;
pub const OV_ELEMENT_U8: c_int = 14;
pub const OV_ELEMENT_U16: c_int = 15;
pub const OV_ELEMENT_U32: c_int = 16;
pub const OV_ELEMENT_U64: c_int = 17;

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvColorFormat {
    Undefined = 0,
    Nv12SinglePlane = 1,
    Nv12TwoPlanes = 2,
    I420SinglePlane = 3,
    I420ThreePlanes = 4,
    Rgb = 5,
    Bgr = 6,
    Gray = 7,
    Rgbx = 8,
    Bgrx = 9,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OvResizeAlgorithm {
    Linear = 0,
    Cubic = 1,
    Nearest = 2,
    BilinearPillow = 3,
    BicubicPillow = 4,
}

unsafe extern "C" {
    // errors and memory
    pub fn ov_get_error_info(status: OvStatus) -> *const c_char;
    pub fn ov_get_last_err_msg() -> *const c_char;
    pub fn ov_free(content: *const c_char);
    pub fn ov_get_openvino_version(version: *mut OvVersion) -> OvStatus;
    pub fn ov_version_free(version: *mut OvVersion);

    // core
    pub fn ov_core_create(core: *mut *mut OvCore) -> OvStatus;
    pub fn ov_core_free(core: *mut OvCore);
    pub fn ov_core_get_available_devices(
        core: *const OvCore,
        devices: *mut OvAvailableDevices,
    ) -> OvStatus;
    pub fn ov_available_devices_free(devices: *mut OvAvailableDevices);
    pub fn ov_core_read_model(
        core: *const OvCore,
        model_path: *const c_char,
        bin_path: *const c_char,
        model: *mut *mut OvModel,
    ) -> OvStatus;
    /// Trailing variadic arguments are `property_args_size` C strings,
    /// alternating key and value.
    pub fn ov_core_compile_model(
        core: *const OvCore,
        model: *const OvModel,
        device_name: *const c_char,
        property_args_size: usize,
        compiled_model: *mut *mut OvCompiledModel,
        ...
    ) -> OvStatus;

    // model
    pub fn ov_model_free(model: *mut OvModel);
    pub fn ov_model_get_friendly_name(model: *const OvModel, friendly_name: *mut *mut c_char) -> OvStatus;
    pub fn ov_model_inputs_size(model: *const OvModel, input_size: *mut usize) -> OvStatus;
    pub fn ov_model_outputs_size(model: *const OvModel, output_size: *mut usize) -> OvStatus;
    pub fn ov_model_const_input_by_index(
        model: *const OvModel,
        index: usize,
        input_port: *mut *mut OvOutputConstPort,
    ) -> OvStatus;
    pub fn ov_model_const_output_by_index(
        model: *const OvModel,
        index: usize,
        output_port: *mut *mut OvOutputConstPort,
    ) -> OvStatus;

    // ports and shapes
    pub fn ov_output_const_port_free(port: *mut OvOutputConstPort);
    pub fn ov_port_get_element_type(port: *const OvOutputConstPort, tensor_type: *mut c_int) -> OvStatus;
    pub fn ov_port_get_partial_shape(
        port: *const OvOutputConstPort,
        partial_shape: *mut OvPartialShape,
    ) -> OvStatus;
    pub fn ov_const_port_get_shape(port: *const OvOutputConstPort, tensor_shape: *mut OvShape) -> OvStatus;
    pub fn ov_partial_shape_free(partial_shape: *mut OvPartialShape);
    pub fn ov_shape_create(rank: i64, dims: *const i64, shape: *mut OvShape) -> OvStatus;
    pub fn ov_shape_free(shape: *mut OvShape) -> OvStatus;

    // layout
    pub fn ov_layout_create(layout_desc: *const c_char, layout: *mut *mut OvLayout) -> OvStatus;
    pub fn ov_layout_free(layout: *mut OvLayout);

    // preprocessing
    pub fn ov_preprocess_prepostprocessor_create(
        model: *const OvModel,
        preprocess: *mut *mut OvPrePostProcessor,
    ) -> OvStatus;
    pub fn ov_preprocess_prepostprocessor_free(preprocess: *mut OvPrePostProcessor);
    pub fn ov_preprocess_prepostprocessor_get_input_info(
        preprocess: *const OvPrePostProcessor,
        input_info: *mut *mut OvInputInfo,
    ) -> OvStatus;
    pub fn ov_preprocess_prepostprocessor_build(
        preprocess: *const OvPrePostProcessor,
        model: *mut *mut OvModel,
    ) -> OvStatus;
    pub fn ov_preprocess_input_info_free(input_info: *mut OvInputInfo);
    pub fn ov_preprocess_input_info_get_tensor_info(
        input_info: *const OvInputInfo,
        tensor_info: *mut *mut OvInputTensorInfo,
    ) -> OvStatus;
    pub fn ov_preprocess_input_info_get_model_info(
        input_info: *const OvInputInfo,
        model_info: *mut *mut OvInputModelInfo,
    ) -> OvStatus;
    pub fn ov_preprocess_input_info_get_preprocess_steps(
        input_info: *const OvInputInfo,
        steps: *mut *mut OvPreprocessSteps,
    ) -> OvStatus;
    pub fn ov_preprocess_input_tensor_info_free(tensor_info: *mut OvInputTensorInfo);
    pub fn ov_preprocess_input_tensor_info_set_from(
        tensor_info: *mut OvInputTensorInfo,
        tensor: *const OvTensor,
    ) -> OvStatus;
    pub fn ov_preprocess_input_tensor_info_set_layout(
        tensor_info: *mut OvInputTensorInfo,
        layout: *mut OvLayout,
    ) -> OvStatus;
    pub fn ov_preprocess_input_tensor_info_set_color_format(
        tensor_info: *mut OvInputTensorInfo,
        color_format: OvColorFormat,
    ) -> OvStatus;
    pub fn ov_preprocess_input_model_info_free(model_info: *mut OvInputModelInfo);
    pub fn ov_preprocess_input_model_info_set_layout(
        model_info: *mut OvInputModelInfo,
        layout: *mut OvLayout,
    ) -> OvStatus;
    pub fn ov_preprocess_preprocess_steps_free(steps: *mut OvPreprocessSteps);
    pub fn ov_preprocess_preprocess_steps_convert_element_type(
        steps: *mut OvPreprocessSteps,
        element_type: c_int,
    ) -> OvStatus;
    pub fn ov_preprocess_preprocess_steps_convert_color(
        steps: *mut OvPreprocessSteps,
        color_format: OvColorFormat,
    ) -> OvStatus;
    pub fn ov_preprocess_preprocess_steps_resize(
        steps: *mut OvPreprocessSteps,
        resize_algorithm: OvResizeAlgorithm,
    ) -> OvStatus;
    pub fn ov_preprocess_preprocess_steps_scale(steps: *mut OvPreprocessSteps, value: c_float) -> OvStatus;

    // compiled model
    pub fn ov_compiled_model_free(compiled_model: *mut OvCompiledModel);
    pub fn ov_compiled_model_input(
        compiled_model: *const OvCompiledModel,
        input_port: *mut *mut OvOutputConstPort,
    ) -> OvStatus;
    pub fn ov_compiled_model_get_property(
        compiled_model: *const OvCompiledModel,
        property_key: *const c_char,
        property_value: *mut *mut c_char,
    ) -> OvStatus;
    pub fn ov_compiled_model_create_infer_request(
        compiled_model: *const OvCompiledModel,
        infer_request: *mut *mut OvInferRequest,
    ) -> OvStatus;

    // infer request
    pub fn ov_infer_request_free(infer_request: *mut OvInferRequest);
    pub fn ov_infer_request_set_input_tensor(
        infer_request: *mut OvInferRequest,
        tensor: *const OvTensor,
    ) -> OvStatus;
    pub fn ov_infer_request_infer(infer_request: *mut OvInferRequest) -> OvStatus;

    // tensor
    pub fn ov_tensor_create(element_type: c_int, shape: OvShape, tensor: *mut *mut OvTensor) -> OvStatus;
    pub fn ov_tensor_create_from_host_ptr(
        element_type: c_int,
        shape: OvShape,
        host_ptr: *mut c_void,
        tensor: *mut *mut OvTensor,
    ) -> OvStatus;
    pub fn ov_tensor_free(tensor: *mut OvTensor);
}
