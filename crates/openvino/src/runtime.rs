use {
    crate::*,
    std::{
        ffi::{CStr, CString},
        path::Path,
        ptr::null_mut,
    },
};

/// Entry point into the OpenVINO runtime.
pub struct Core {
    core: *mut ffi::OvCore,
}

impl Core {
    pub fn new() -> Result<Self> {
        let mut core: *mut ffi::OvCore = null_mut();
        let status = unsafe { ffi::ov_core_create(&mut core as *mut _) };
        error::check(status)?;
        Ok(Self { core })
    }

    /// Device names in the order the runtime reports them.
    pub fn available_devices(&self) -> Result<Vec<String>> {
        let mut devices = ffi::OvAvailableDevices {
            devices: null_mut(),
            size: 0,
        };
        let status = unsafe { ffi::ov_core_get_available_devices(self.core, &mut devices as *mut _) };
        error::check(status)?;
        let names = if devices.devices.is_null() {
            Vec::new()
        } else {
            let entries = unsafe { std::slice::from_raw_parts(devices.devices, devices.size) };
            entries
                .iter()
                .filter(|entry| !entry.is_null())
                .map(|&entry| unsafe { CStr::from_ptr(entry) }.to_string_lossy().into_owned())
                .collect()
        };
        unsafe { ffi::ov_available_devices_free(&mut devices as *mut _) };
        Ok(names)
    }

    /// Read a model from disk. The weights file is located by the runtime
    /// (for IR models, the `.bin` next to the `.xml`).
    pub fn read_model(&self, model_path: impl AsRef<Path>) -> Result<Model> {
        let path_str = model_path
            .as_ref()
            .to_str()
            .ok_or_else(|| OvError::invalid_argument("Invalid UTF-8 in model path"))?;
        let c_path = CString::new(path_str).map_err(|_| OvError::invalid_argument("Null byte in model path"))?;
        let mut model: *mut ffi::OvModel = null_mut();
        let status = unsafe { ffi::ov_core_read_model(self.core, c_path.as_ptr(), std::ptr::null(), &mut model as *mut _) };
        error::check(status)?;
        Ok(Model::from_raw(model))
    }

    /// Compile `model` for `device`, optionally with a performance hint.
    pub fn compile_model(
        &self,
        model: &Model,
        device: &str,
        performance_mode: Option<PerformanceMode>,
    ) -> Result<CompiledModel> {
        let c_device = CString::new(device).map_err(|_| OvError::invalid_argument("Null byte in device name"))?;
        let mut compiled: *mut ffi::OvCompiledModel = null_mut();
        let status = match performance_mode {
            None => unsafe {
                ffi::ov_core_compile_model(self.core, model.as_ptr(), c_device.as_ptr(), 0, &mut compiled as *mut _)
            },
            Some(mode) => {
                let key = c"PERFORMANCE_HINT";
                let value = CString::new(mode.as_str()).map_err(|_| OvError::invalid_argument("Null byte in hint"))?;
                unsafe {
                    ffi::ov_core_compile_model(
                        self.core,
                        model.as_ptr(),
                        c_device.as_ptr(),
                        2,
                        &mut compiled as *mut _,
                        key.as_ptr(),
                        value.as_ptr(),
                    )
                }
            }
        };
        error::check(status)?;
        Ok(CompiledModel::from_raw(compiled))
    }
}

impl Drop for Core {
    fn drop(&mut self) {
        if !self.core.is_null() {
            unsafe { ffi::ov_core_free(self.core) };
        }
    }
}
