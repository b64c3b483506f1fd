use {
    crate::*,
    std::{
        ffi::{CStr, CString},
        ptr::null_mut,
    },
};

/// A model compiled for one device.
pub struct CompiledModel {
    compiled: *mut ffi::OvCompiledModel,
}

// compiled models are thread-safe in the runtime
unsafe impl Send for CompiledModel {}
unsafe impl Sync for CompiledModel {}

impl CompiledModel {
    pub(crate) fn from_raw(compiled: *mut ffi::OvCompiledModel) -> Self {
        Self { compiled }
    }

    /// Element type and static shape of the single input, after preprocessing.
    pub fn input(&self) -> Result<(ElementType, Vec<usize>)> {
        let mut port: *mut ffi::OvOutputConstPort = null_mut();
        let status = unsafe { ffi::ov_compiled_model_input(self.compiled, &mut port as *mut _) };
        error::check(status)?;
        let port = model::ConstPort { port };
        Ok((port.element_type()?, port.shape()?))
    }

    /// Read a property such as `NUM_STREAMS` as the runtime formats it.
    pub fn property(&self, key: &str) -> Result<String> {
        let c_key = CString::new(key).map_err(|_| OvError::invalid_argument("Null byte in property key"))?;
        let mut value: *mut std::ffi::c_char = null_mut();
        let status = unsafe { ffi::ov_compiled_model_get_property(self.compiled, c_key.as_ptr(), &mut value as *mut _) };
        error::check(status)?;
        if value.is_null() {
            return Ok(String::new());
        }
        let property = unsafe { CStr::from_ptr(value) }.to_string_lossy().into_owned();
        unsafe { ffi::ov_free(value) };
        Ok(property)
    }

    pub fn create_infer_request(&self) -> Result<InferRequest> {
        let mut request: *mut ffi::OvInferRequest = null_mut();
        let status = unsafe { ffi::ov_compiled_model_create_infer_request(self.compiled, &mut request as *mut _) };
        error::check(status)?;
        Ok(InferRequest { request })
    }
}

impl Drop for CompiledModel {
    fn drop(&mut self) {
        if !self.compiled.is_null() {
            unsafe { ffi::ov_compiled_model_free(self.compiled) };
        }
    }
}

pub struct InferRequest {
    request: *mut ffi::OvInferRequest,
}

impl InferRequest {
    /// Bind `input` and run synchronously.
    ///
    /// The request keeps a reference to the tensor after returning, so the
    /// input is bound again on every call and never read outside it.
    pub fn infer(&mut self, input: &Tensor<'_>) -> Result<()> {
        let status = unsafe { ffi::ov_infer_request_set_input_tensor(self.request, input.tensor) };
        error::check(status)?;
        let status = unsafe { ffi::ov_infer_request_infer(self.request) };
        error::check(status)
    }
}

impl Drop for InferRequest {
    fn drop(&mut self) {
        if !self.request.is_null() {
            unsafe { ffi::ov_infer_request_free(self.request) };
        }
    }
}
