use {
    crate::*,
    std::{ffi::CString, marker::PhantomData, ptr::null_mut},
};

/// Layout string such as `NHWC`, freed on drop.
struct Layout {
    layout: *mut ffi::OvLayout,
}

impl Layout {
    fn new(desc: &str) -> Result<Self> {
        let c_desc = CString::new(desc).map_err(|_| OvError::invalid_argument("Null byte in layout"))?;
        let mut layout: *mut ffi::OvLayout = null_mut();
        let status = unsafe { ffi::ov_layout_create(c_desc.as_ptr(), &mut layout as *mut _) };
        error::check(status)?;
        Ok(Self { layout })
    }
}

impl Drop for Layout {
    fn drop(&mut self) {
        if !self.layout.is_null() {
            unsafe { ffi::ov_layout_free(self.layout) };
        }
    }
}

/// Builds a new model with preprocessing folded into its graph.
pub struct PrePostProcessor<'m> {
    ppp: *mut ffi::OvPrePostProcessor,
    _model: PhantomData<&'m Model>,
}

impl<'m> PrePostProcessor<'m> {
    pub fn new(model: &'m Model) -> Result<Self> {
        let mut ppp: *mut ffi::OvPrePostProcessor = null_mut();
        let status = unsafe { ffi::ov_preprocess_prepostprocessor_create(model.as_ptr(), &mut ppp as *mut _) };
        error::check(status)?;
        Ok(Self {
            ppp,
            _model: PhantomData,
        })
    }

    /// The model's only input. Fails for models with several inputs.
    pub fn input(&self) -> Result<InputInfo<'_>> {
        let mut info: *mut ffi::OvInputInfo = null_mut();
        let status = unsafe { ffi::ov_preprocess_prepostprocessor_get_input_info(self.ppp, &mut info as *mut _) };
        error::check(status)?;
        Ok(InputInfo {
            info,
            _ppp: PhantomData,
        })
    }

    pub fn build(self) -> Result<Model> {
        let mut model: *mut ffi::OvModel = null_mut();
        let status = unsafe { ffi::ov_preprocess_prepostprocessor_build(self.ppp, &mut model as *mut _) };
        error::check(status)?;
        Ok(Model::from_raw(model))
    }
}

impl Drop for PrePostProcessor<'_> {
    fn drop(&mut self) {
        if !self.ppp.is_null() {
            unsafe { ffi::ov_preprocess_prepostprocessor_free(self.ppp) };
        }
    }
}

pub struct InputInfo<'p> {
    info: *mut ffi::OvInputInfo,
    _ppp: PhantomData<&'p ()>,
}

impl<'p> InputInfo<'p> {
    /// Describes the tensor the caller will feed.
    pub fn tensor(&self) -> Result<InputTensorInfo<'p>> {
        let mut tensor_info: *mut ffi::OvInputTensorInfo = null_mut();
        let status = unsafe { ffi::ov_preprocess_input_info_get_tensor_info(self.info, &mut tensor_info as *mut _) };
        error::check(status)?;
        Ok(InputTensorInfo {
            tensor_info,
            _ppp: PhantomData,
        })
    }

    /// Describes the input the model was built with.
    pub fn model(&self) -> Result<InputModelInfo<'p>> {
        let mut model_info: *mut ffi::OvInputModelInfo = null_mut();
        let status = unsafe { ffi::ov_preprocess_input_info_get_model_info(self.info, &mut model_info as *mut _) };
        error::check(status)?;
        Ok(InputModelInfo {
            model_info,
            _ppp: PhantomData,
        })
    }

    /// Conversion steps from the tensor description to the model's input.
    pub fn preprocess(&self) -> Result<PreprocessSteps<'p>> {
        let mut steps: *mut ffi::OvPreprocessSteps = null_mut();
        let status = unsafe { ffi::ov_preprocess_input_info_get_preprocess_steps(self.info, &mut steps as *mut _) };
        error::check(status)?;
        Ok(PreprocessSteps {
            steps,
            _ppp: PhantomData,
        })
    }
}

impl Drop for InputInfo<'_> {
    fn drop(&mut self) {
        if !self.info.is_null() {
            unsafe { ffi::ov_preprocess_input_info_free(self.info) };
        }
    }
}

pub struct InputTensorInfo<'p> {
    tensor_info: *mut ffi::OvInputTensorInfo,
    _ppp: PhantomData<&'p ()>,
}

impl InputTensorInfo<'_> {
    /// Take element type and static shape from a template tensor.
    pub fn set_shape(&mut self, element_type: ElementType, shape: &[usize]) -> Result<&mut Self> {
        let template = Tensor::new(element_type, shape)?;
        let status = unsafe { ffi::ov_preprocess_input_tensor_info_set_from(self.tensor_info, template.tensor) };
        error::check(status)?;
        Ok(self)
    }

    pub fn set_layout(&mut self, layout: &str) -> Result<&mut Self> {
        let layout = Layout::new(layout)?;
        let status = unsafe { ffi::ov_preprocess_input_tensor_info_set_layout(self.tensor_info, layout.layout) };
        error::check(status)?;
        Ok(self)
    }

    pub fn set_color_format(&mut self, color_format: ColorFormat) -> Result<&mut Self> {
        let status =
            unsafe { ffi::ov_preprocess_input_tensor_info_set_color_format(self.tensor_info, color_format.to_ffi()) };
        error::check(status)?;
        Ok(self)
    }
}

impl Drop for InputTensorInfo<'_> {
    fn drop(&mut self) {
        if !self.tensor_info.is_null() {
            unsafe { ffi::ov_preprocess_input_tensor_info_free(self.tensor_info) };
        }
    }
}

pub struct InputModelInfo<'p> {
    model_info: *mut ffi::OvInputModelInfo,
    _ppp: PhantomData<&'p ()>,
}

impl InputModelInfo<'_> {
    pub fn set_layout(&mut self, layout: &str) -> Result<&mut Self> {
        let layout = Layout::new(layout)?;
        let status = unsafe { ffi::ov_preprocess_input_model_info_set_layout(self.model_info, layout.layout) };
        error::check(status)?;
        Ok(self)
    }
}

impl Drop for InputModelInfo<'_> {
    fn drop(&mut self) {
        if !self.model_info.is_null() {
            unsafe { ffi::ov_preprocess_input_model_info_free(self.model_info) };
        }
    }
}

pub struct PreprocessSteps<'p> {
    steps: *mut ffi::OvPreprocessSteps,
    _ppp: PhantomData<&'p ()>,
}

impl PreprocessSteps<'_> {
    pub fn convert_element_type(&mut self, element_type: ElementType) -> Result<&mut Self> {
        let status =
            unsafe { ffi::ov_preprocess_preprocess_steps_convert_element_type(self.steps, element_type.to_raw()) };
        error::check(status)?;
        Ok(self)
    }

    pub fn convert_color(&mut self, color_format: ColorFormat) -> Result<&mut Self> {
        let status = unsafe { ffi::ov_preprocess_preprocess_steps_convert_color(self.steps, color_format.to_ffi()) };
        error::check(status)?;
        Ok(self)
    }

    /// Resize from the tensor's spatial size to the model's.
    pub fn resize(&mut self, algorithm: ResizeAlgorithm) -> Result<&mut Self> {
        let status = unsafe { ffi::ov_preprocess_preprocess_steps_resize(self.steps, algorithm.to_ffi()) };
        error::check(status)?;
        Ok(self)
    }

    /// Divide every element by `value`.
    pub fn scale(&mut self, value: f32) -> Result<&mut Self> {
        let status = unsafe { ffi::ov_preprocess_preprocess_steps_scale(self.steps, value) };
        error::check(status)?;
        Ok(self)
    }
}

impl Drop for PreprocessSteps<'_> {
    fn drop(&mut self) {
        if !self.steps.is_null() {
            unsafe { ffi::ov_preprocess_preprocess_steps_free(self.steps) };
        }
    }
}
