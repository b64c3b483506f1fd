use {
    crate::*,
    std::{ffi::CStr, ptr::null_mut},
};

/// Element type and shape of one model input or output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortInfo {
    pub element_type: ElementType,
    pub shape: PartialShape,
}

/// Owned handle to a const port, freed on drop.
pub(crate) struct ConstPort {
    pub(crate) port: *mut ffi::OvOutputConstPort,
}

impl ConstPort {
    pub(crate) fn element_type(&self) -> Result<ElementType> {
        let mut raw = 0;
        let status = unsafe { ffi::ov_port_get_element_type(self.port, &mut raw as *mut _) };
        error::check(status)?;
        ElementType::from_raw(raw)
            .ok_or_else(|| OvError::invalid_argument(format!("unsupported element type {}", raw)))
    }

    pub(crate) fn partial_shape(&self) -> Result<PartialShape> {
        let mut raw = ffi::OvPartialShape {
            rank: ffi::OvDimension { min: 0, max: 0 },
            dims: null_mut(),
        };
        let status = unsafe { ffi::ov_port_get_partial_shape(self.port, &mut raw as *mut _) };
        error::check(status)?;
        let shape = if raw.rank.min != raw.rank.max || raw.rank.max < 0 {
            PartialShape::dynamic_rank()
        } else if raw.dims.is_null() || raw.rank.max == 0 {
            PartialShape::new(Vec::new())
        } else {
            let dims = unsafe { std::slice::from_raw_parts(raw.dims, raw.rank.max as usize) };
            PartialShape::new(dims.iter().map(|&dim| Dimension::from_ffi(dim)).collect())
        };
        unsafe { ffi::ov_partial_shape_free(&mut raw as *mut _) };
        Ok(shape)
    }

    /// Static shape; fails for ports with dynamic dimensions.
    pub(crate) fn shape(&self) -> Result<Vec<usize>> {
        let mut raw = ffi::OvShape {
            rank: 0,
            dims: null_mut(),
        };
        let status = unsafe { ffi::ov_const_port_get_shape(self.port, &mut raw as *mut _) };
        error::check(status)?;
        let dims = tensor::Shape::dims_of(&raw);
        unsafe { ffi::ov_shape_free(&mut raw as *mut _) };
        dims
    }

    pub(crate) fn info(&self) -> Result<PortInfo> {
        Ok(PortInfo {
            element_type: self.element_type()?,
            shape: self.partial_shape()?,
        })
    }
}

impl Drop for ConstPort {
    fn drop(&mut self) {
        if !self.port.is_null() {
            unsafe { ffi::ov_output_const_port_free(self.port) };
        }
    }
}

/// A model read from disk or produced by a `PrePostProcessor`.
pub struct Model {
    model: *mut ffi::OvModel,
}

impl Model {
    pub(crate) fn from_raw(model: *mut ffi::OvModel) -> Self {
        Self { model }
    }

    pub(crate) fn as_ptr(&self) -> *const ffi::OvModel {
        self.model
    }

    pub fn friendly_name(&self) -> Result<String> {
        let mut name: *mut std::ffi::c_char = null_mut();
        let status = unsafe { ffi::ov_model_get_friendly_name(self.model, &mut name as *mut _) };
        error::check(status)?;
        if name.is_null() {
            return Ok(String::new());
        }
        let friendly_name = unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned();
        unsafe { ffi::ov_free(name) };
        Ok(friendly_name)
    }

    pub fn inputs(&self) -> Result<Vec<PortInfo>> {
        let mut count = 0usize;
        let status = unsafe { ffi::ov_model_inputs_size(self.model, &mut count as *mut _) };
        error::check(status)?;
        (0..count)
            .map(|index| {
                let mut port: *mut ffi::OvOutputConstPort = null_mut();
                let status = unsafe { ffi::ov_model_const_input_by_index(self.model, index, &mut port as *mut _) };
                error::check(status)?;
                ConstPort { port }.info()
            })
            .collect()
    }

    pub fn outputs(&self) -> Result<Vec<PortInfo>> {
        let mut count = 0usize;
        let status = unsafe { ffi::ov_model_outputs_size(self.model, &mut count as *mut _) };
        error::check(status)?;
        (0..count)
            .map(|index| {
                let mut port: *mut ffi::OvOutputConstPort = null_mut();
                let status = unsafe { ffi::ov_model_const_output_by_index(self.model, index, &mut port as *mut _) };
                error::check(status)?;
                ConstPort { port }.info()
            })
            .collect()
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        if !self.model.is_null() {
            unsafe { ffi::ov_model_free(self.model) };
        }
    }
}
