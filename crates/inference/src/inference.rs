use {
    crate::*,
    openvino::Core,
    std::path::Path,
    video::FrameSize,
};

/// Handle on the OpenVINO runtime. Models are read and compiled through it.
pub struct Inference {
    core: Core,
}

impl Inference {
    pub fn new() -> Result<Self, InferError> {
        let core = Core::new()?;
        let build_number = openvino::version()?;
        log::info!("Inference runtime: OpenVINO {}", build_number);
        if !openvino::version::is_supported(&build_number) {
            log::warn!(
                "OpenVINO {} is outside the supported releases {:?}, element types may be misread",
                build_number,
                openvino::version::SUPPORTED_RELEASES
            );
        }
        Ok(Self { core })
    }

    /// Device names in the order the runtime reports them.
    pub fn available_devices(&self) -> Result<Vec<String>, InferError> {
        Ok(self.core.available_devices()?)
    }

    /// Load a model that takes whole BGR video frames of `frame_size`.
    pub fn use_frame_model(
        &self,
        model_path: impl AsRef<Path>,
        device: &str,
        frame_size: FrameSize,
    ) -> Result<FrameModel, InferError> {
        FrameModel::new(&self.core, model_path, device, frame_size)
    }
}
