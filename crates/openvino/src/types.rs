use {crate::ffi, std::ffi::c_int, std::fmt};

/// Tensor element types understood by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Undefined,
    Dynamic,
    Boolean,
    Bf16,
    F16,
    F32,
    F64,
    I4,
    I8,
    I16,
    I32,
    I64,
    U1,
    U4,
    U8,
    U16,
    U32,
    U64,
}

impl ElementType {
    pub(crate) fn from_raw(raw: c_int) -> Option<Self> {
        Some(match raw {
            ffi::OV_ELEMENT_UNDEFINED => ElementType::Undefined,
            ffi::OV_ELEMENT_DYNAMIC => ElementType::Dynamic,
            ffi::OV_ELEMENT_BOOLEAN => ElementType::Boolean,
            ffi::OV_ELEMENT_BF16 => ElementType::Bf16,
            ffi::OV_ELEMENT_F16 => ElementType::F16,
            ffi::OV_ELEMENT_F32 => ElementType::F32,
            ffi::OV_ELEMENT_F64 => ElementType::F64,
            ffi::OV_ELEMENT_I4 => ElementType::I4,
            ffi::OV_ELEMENT_I8 => ElementType::I8,
            ffi::OV_ELEMENT_I16 => ElementType::I16,
            ffi::OV_ELEMENT_I32 => ElementType::I32,
            ffi::OV_ELEMENT_I64 => ElementType::I64,
            ffi::OV_ELEMENT_U1 => ElementType::U1,
            ffi::OV_ELEMENT_U4 => ElementType::U4,
            ffi::OV_ELEMENT_U8 => ElementType::U8,
            ffi::OV_ELEMENT_U16 => ElementType::U16,
            ffi::OV_ELEMENT_U32 => ElementType::U32,
            ffi::OV_ELEMENT_U64 => ElementType::U64,
            _ => return None,
        })
    }

    pub(crate) fn to_raw(self) -> c_int {
        match self {
            ElementType::Undefined => ffi::OV_ELEMENT_UNDEFINED,
            ElementType::Dynamic => ffi::OV_ELEMENT_DYNAMIC,
            ElementType::Boolean => ffi::OV_ELEMENT_BOOLEAN,
            ElementType::Bf16 => ffi::OV_ELEMENT_BF16,
            ElementType::F16 => ffi::OV_ELEMENT_F16,
            ElementType::F32 => ffi::OV_ELEMENT_F32,
            ElementType::F64 => ffi::OV_ELEMENT_F64,
            ElementType::I4 => ffi::OV_ELEMENT_I4,
            ElementType::I8 => ffi::OV_ELEMENT_I8,
            ElementType::I16 => ffi::OV_ELEMENT_I16,
            ElementType::I32 => ffi::OV_ELEMENT_I32,
            ElementType::I64 => ffi::OV_ELEMENT_I64,
            ElementType::U1 => ffi::OV_ELEMENT_U1,
            ElementType::U4 => ffi::OV_ELEMENT_U4,
            ElementType::U8 => ffi::OV_ELEMENT_U8,
            ElementType::U16 => ffi::OV_ELEMENT_U16,
            ElementType::U32 => ffi::OV_ELEMENT_U32,
            ElementType::U64 => ffi::OV_ELEMENT_U64,
        }
    }

    /// Bytes per element, `None` for sub-byte and shapeless types.
    pub fn byte_size(self) -> Option<usize> {
        match self {
            ElementType::Boolean | ElementType::I8 | ElementType::U8 => Some(1),
            ElementType::Bf16 | ElementType::F16 | ElementType::I16 | ElementType::U16 => Some(2),
            ElementType::F32 | ElementType::I32 | ElementType::U32 => Some(4),
            ElementType::F64 | ElementType::I64 | ElementType::U64 => Some(8),
            ElementType::Undefined
            | ElementType::Dynamic
            | ElementType::I4
            | ElementType::U1
            | ElementType::U4 => None,
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ElementType::Undefined => "undefined",
            ElementType::Dynamic => "dynamic",
            ElementType::Boolean => "boolean",
            ElementType::Bf16 => "bf16",
            ElementType::F16 => "f16",
            ElementType::F32 => "f32",
            ElementType::F64 => "f64",
            ElementType::I4 => "i4",
            ElementType::I8 => "i8",
            ElementType::I16 => "i16",
            ElementType::I32 => "i32",
            ElementType::I64 => "i64",
            ElementType::U1 => "u1",
            ElementType::U4 => "u4",
            ElementType::U8 => "u8",
            ElementType::U16 => "u16",
            ElementType::U32 => "u32",
            ElementType::U64 => "u64",
        };
        write!(f, "{}", name)
    }
}

/// One dimension of a possibly dynamic shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Static(i64),
    /// Bounded or unbounded range, `max` is `None` when unbounded.
    Dynamic { min: i64, max: Option<i64> },
}

impl Dimension {
    pub(crate) fn from_ffi(dim: ffi::OvDimension) -> Self {
        if dim.min == dim.max && dim.min >= 0 {
            Dimension::Static(dim.min)
        } else {
            Dimension::Dynamic {
                min: dim.min.max(0),
                max: if dim.max < 0 { None } else { Some(dim.max) },
            }
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Static(value) => write!(f, "{}", value),
            Dimension::Dynamic { min: 0, max: None } => write!(f, "?"),
            Dimension::Dynamic { min, max: None } => write!(f, "{}..", min),
            Dimension::Dynamic { min, max: Some(max) } => write!(f, "{}..{}", min, max),
        }
    }
}

/// Shape of a model port. `None` dims mean the rank itself is dynamic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialShape {
    pub dims: Option<Vec<Dimension>>,
}

impl PartialShape {
    pub fn new(dims: Vec<Dimension>) -> Self {
        Self { dims: Some(dims) }
    }

    pub fn dynamic_rank() -> Self {
        Self { dims: None }
    }
}

impl fmt::Display for PartialShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.dims {
            None => write!(f, "[...]"),
            Some(dims) => {
                write!(f, "[")?;
                for (i, dim) in dims.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", dim)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorFormat {
    Rgb,
    Bgr,
    Gray,
}

impl ColorFormat {
    pub(crate) fn to_ffi(self) -> ffi::OvColorFormat {
        match self {
            ColorFormat::Rgb => ffi::OvColorFormat::Rgb,
            ColorFormat::Bgr => ffi::OvColorFormat::Bgr,
            ColorFormat::Gray => ffi::OvColorFormat::Gray,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAlgorithm {
    Linear,
    Cubic,
    Nearest,
}

impl ResizeAlgorithm {
    pub(crate) fn to_ffi(self) -> ffi::OvResizeAlgorithm {
        match self {
            ResizeAlgorithm::Linear => ffi::OvResizeAlgorithm::Linear,
            ResizeAlgorithm::Cubic => ffi::OvResizeAlgorithm::Cubic,
            ResizeAlgorithm::Nearest => ffi::OvResizeAlgorithm::Nearest,
        }
    }
}

/// Value of the `PERFORMANCE_HINT` compile property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PerformanceMode {
    Latency,
    Throughput,
    CumulativeThroughput,
}

impl PerformanceMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PerformanceMode::Latency => "LATENCY",
            PerformanceMode::Throughput => "THROUGHPUT",
            PerformanceMode::CumulativeThroughput => "CUMULATIVE_THROUGHPUT",
        }
    }
}
