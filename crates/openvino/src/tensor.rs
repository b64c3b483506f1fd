use {
    crate::*,
    std::{ffi::c_void, marker::PhantomData, ptr::null_mut},
};

/// Runtime-owned copy of a static shape, freed on drop.
pub(crate) struct Shape {
    pub(crate) raw: ffi::OvShape,
}

impl Shape {
    pub(crate) fn new(dims: &[usize]) -> Result<Self> {
        let dims: Vec<i64> = dims
            .iter()
            .map(|&dim| {
                i64::try_from(dim).map_err(|_| OvError::invalid_argument(format!("dimension {} out of range", dim)))
            })
            .collect::<Result<_>>()?;
        let mut raw = ffi::OvShape {
            rank: 0,
            dims: null_mut(),
        };
        let status = unsafe { ffi::ov_shape_create(dims.len() as i64, dims.as_ptr(), &mut raw as *mut _) };
        error::check(status)?;
        Ok(Self { raw })
    }

    /// Copy `ov_shape_t` dims into a vector. Negative dims are rejected.
    pub(crate) fn dims_of(raw: &ffi::OvShape) -> Result<Vec<usize>> {
        if raw.rank <= 0 || raw.dims.is_null() {
            return Ok(Vec::new());
        }
        let dims = unsafe { std::slice::from_raw_parts(raw.dims, raw.rank as usize) };
        dims.iter()
            .map(|&dim| usize::try_from(dim).map_err(|_| OvError::invalid_argument(format!("negative dimension {}", dim))))
            .collect()
    }

    /// Pass the shape by value, as the C API expects. The runtime copies
    /// the dims, so `self` still owns and frees them.
    fn by_value(&self) -> ffi::OvShape {
        ffi::OvShape {
            rank: self.raw.rank,
            dims: self.raw.dims,
        }
    }
}

impl Drop for Shape {
    fn drop(&mut self) {
        unsafe {
            ffi::ov_shape_free(&mut self.raw as *mut _);
        }
    }
}

/// Number of bytes a dense tensor of this type and shape occupies.
pub fn expected_byte_len(element_type: ElementType, shape: &[usize]) -> Option<usize> {
    let element_size = element_type.byte_size()?;
    shape
        .iter()
        .try_fold(element_size, |acc, &dim| acc.checked_mul(dim))
}

/// OpenVINO tensor. Tensors built with `from_slice` alias the caller's
/// memory and cannot outlive it.
pub struct Tensor<'a> {
    pub(crate) tensor: *mut ffi::OvTensor,
    _data: PhantomData<&'a [u8]>,
}

impl Tensor<'static> {
    /// Allocate a zeroed tensor owned by the runtime.
    pub fn new(element_type: ElementType, shape: &[usize]) -> Result<Self> {
        let shape = Shape::new(shape)?;
        let mut tensor: *mut ffi::OvTensor = null_mut();
        let status = unsafe { ffi::ov_tensor_create(element_type.to_raw(), shape.by_value(), &mut tensor as *mut _) };
        error::check(status)?;
        Ok(Self {
            tensor,
            _data: PhantomData,
        })
    }
}

impl<'a> Tensor<'a> {
    /// Wrap `data` without copying.
    ///
    /// The byte length must match the shape exactly; frames that are
    /// too short or too long are rejected rather than truncated or padded.
    pub fn from_slice(element_type: ElementType, shape: &[usize], data: &'a [u8]) -> Result<Self> {
        let expected = expected_byte_len(element_type, shape).ok_or_else(|| {
            OvError::invalid_argument(format!("cannot size a {} tensor of shape {:?}", element_type, shape))
        })?;
        if data.len() != expected {
            return Err(OvError::invalid_argument(format!(
                "data holds {} bytes but a {} tensor of shape {:?} needs {}",
                data.len(),
                element_type,
                shape,
                expected
            )));
        }
        let shape = Shape::new(shape)?;
        let mut tensor: *mut ffi::OvTensor = null_mut();

        // input tensors are only read by the runtime
        let host_ptr = data.as_ptr() as *mut c_void;
        let status = unsafe {
            ffi::ov_tensor_create_from_host_ptr(
                element_type.to_raw(),
                shape.by_value(),
                host_ptr,
                &mut tensor as *mut _,
            )
        };
        error::check(status)?;
        Ok(Self {
            tensor,
            _data: PhantomData,
        })
    }
}

impl Drop for Tensor<'_> {
    fn drop(&mut self) {
        if !self.tensor.is_null() {
            unsafe { ffi::ov_tensor_free(self.tensor) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_byte_len() {
        assert_eq!(expected_byte_len(ElementType::U8, &[1, 1024, 1280, 3]), Some(1024 * 1280 * 3));
        assert_eq!(expected_byte_len(ElementType::F32, &[1, 3, 2, 2]), Some(48));
        assert_eq!(expected_byte_len(ElementType::U8, &[]), Some(1));
        assert_eq!(expected_byte_len(ElementType::U4, &[2, 2]), None);
        assert_eq!(expected_byte_len(ElementType::U64, &[usize::MAX, 2]), None);
    }

    #[test]
    fn test_from_slice_rejects_short_data() {
        let data = vec![0u8; 2 * 2 * 3 - 1];
        let result = Tensor::from_slice(ElementType::U8, &[1, 2, 2, 3], &data);
        match result {
            Err(error) => assert_eq!(error.status(), Status::InvalidArgument),
            Ok(_) => panic!("short data must be rejected"),
        }
    }

    #[test]
    fn test_from_slice_rejects_long_data() {
        let data = vec![0u8; 2 * 2 * 3 + 3];
        assert!(Tensor::from_slice(ElementType::U8, &[1, 2, 2, 3], &data).is_err());
    }
}
