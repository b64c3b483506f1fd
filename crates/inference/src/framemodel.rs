use {
    crate::*,
    openvino::{
        ColorFormat, CompiledModel, Core, ElementType, PerformanceMode, PortInfo, PrePostProcessor,
        ResizeAlgorithm, Tensor,
    },
    std::{fmt, path::Path},
    video::{Frame, FrameSize},
};

const FRAME_CHANNELS: usize = 3;

/// Ports of the model as read from disk, before preprocessing is attached.
#[derive(Debug, Clone)]
pub struct ModelInfo {
    pub name: String,
    pub inputs: Vec<PortInfo>,
    pub outputs: Vec<PortInfo>,
}

fn write_ports(f: &mut fmt::Formatter<'_>, label: &str, ports: &[PortInfo]) -> fmt::Result {
    write!(f, "  {}:", label)?;
    for port in ports {
        write!(f, " {} {}", port.element_type, port.shape)?;
    }
    Ok(())
}

impl fmt::Display for ModelInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "model name: {}", self.name)?;
        write_ports(f, "inputs", &self.inputs)?;
        writeln!(f)?;
        write_ports(f, "outputs", &self.outputs)
    }
}

/// Properties read back from the compiled model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledInfo {
    pub num_streams: String,
    pub optimal_infer_requests: String,
}

/// Compiled model fed with raw BGR frames of a fixed size.
///
/// The runtime converts u8 NHWC BGR input into the f32 NCHW RGB layout the
/// network expects, resizing to its native resolution and scaling by 255.
pub struct FrameModel {
    compiled: CompiledModel,
    frame_size: FrameSize,
    info: ModelInfo,
    compiled_info: CompiledInfo,
    input_type: ElementType,
    input_shape: Vec<usize>,
}

impl FrameModel {
    pub(crate) fn new(
        core: &Core,
        model_path: impl AsRef<Path>,
        device: &str,
        frame_size: FrameSize,
    ) -> Result<Self, InferError> {
        let model_path = model_path.as_ref();
        log::info!("Reading model {}", model_path.display());
        let model = core.read_model(model_path)?;
        let info = ModelInfo {
            name: model.friendly_name()?,
            inputs: model.inputs()?,
            outputs: model.outputs()?,
        };
        if info.inputs.len() != 1 {
            return Err(InferError::Shape(format!(
                "model {} has {} inputs, frame models take exactly one",
                info.name,
                info.inputs.len()
            )));
        }

        let model = {
            let ppp = PrePostProcessor::new(&model)?;
            let input = ppp.input()?;
            input
                .tensor()?
                .set_shape(ElementType::U8, &[1, frame_size.height, frame_size.width, FRAME_CHANNELS])?
                .set_layout("NHWC")?
                .set_color_format(ColorFormat::Bgr)?;
            input.model()?.set_layout("NCHW")?;
            input
                .preprocess()?
                .convert_element_type(ElementType::F32)?
                .convert_color(ColorFormat::Rgb)?
                .resize(ResizeAlgorithm::Linear)?
                .scale(255.0)?;
            drop(input);
            ppp.build()?
        };

        log::info!("Compiling {} for {}", info.name, device);
        let compiled = core.compile_model(&model, device, Some(PerformanceMode::Throughput))?;
        let compiled_info = CompiledInfo {
            num_streams: compiled.property(openvino::NUM_STREAMS)?,
            optimal_infer_requests: compiled.property(openvino::OPTIMAL_NUMBER_OF_INFER_REQUESTS)?,
        };
        let (input_type, input_shape) = compiled.input()?;
        let expected = [1, frame_size.height, frame_size.width, FRAME_CHANNELS];
        if input_type != ElementType::U8 || input_shape != expected {
            return Err(InferError::Shape(format!(
                "compiled input is {} {:?}, expected u8 {:?}",
                input_type, input_shape, expected
            )));
        }
        log::info!(
            "Compiled {}: {} streams, {} optimal requests",
            info.name,
            compiled_info.num_streams,
            compiled_info.optimal_infer_requests
        );

        Ok(Self {
            compiled,
            frame_size,
            info,
            compiled_info,
            input_type,
            input_shape,
        })
    }

    pub fn info(&self) -> &ModelInfo {
        &self.info
    }

    pub fn compiled_info(&self) -> &CompiledInfo {
        &self.compiled_info
    }

    /// Run one synchronous inference on `frame`. Outputs are discarded.
    ///
    /// The input tensor aliases the frame's bytes; a fresh request is created
    /// per call and dropped before the frame can be overwritten.
    pub fn infer(&self, frame: &Frame<'_>) -> Result<(), InferError> {
        frame.expect_shape(self.frame_size, FRAME_CHANNELS)?;
        let tensor = Tensor::from_slice(self.input_type, &self.input_shape, frame.data())?;
        let mut request = self.compiled.create_infer_request()?;
        request.infer(&tensor)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        openvino::{Dimension, PartialShape},
    };

    #[test]
    fn test_model_info_display() {
        let info = ModelInfo {
            name: "torch-jit-export".to_string(),
            inputs: vec![PortInfo {
                element_type: ElementType::F32,
                shape: PartialShape::new(vec![
                    Dimension::Static(1),
                    Dimension::Static(3),
                    Dimension::Static(640),
                    Dimension::Static(640),
                ]),
            }],
            outputs: vec![
                PortInfo {
                    element_type: ElementType::F32,
                    shape: PartialShape::new(vec![Dimension::Static(1), Dimension::Dynamic { min: 0, max: None }]),
                },
                PortInfo {
                    element_type: ElementType::I64,
                    shape: PartialShape::dynamic_rank(),
                },
            ],
        };
        assert_eq!(
            info.to_string(),
            "model name: torch-jit-export\n  inputs: f32 [1,3,640,640]\n  outputs: f32 [1,?] i64 [...]"
        );
    }
}
