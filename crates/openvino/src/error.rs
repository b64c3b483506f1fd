use crate::ffi;
use std::ffi::CStr;
use std::fmt;

/// `ov_status_e` codes reported by the C API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    GeneralError,
    NotImplemented,
    NetworkNotLoaded,
    ParameterMismatch,
    NotFound,
    OutOfBounds,
    Unexpected,
    RequestBusy,
    ResultNotReady,
    NotAllocated,
    InferNotStarted,
    NetworkNotRead,
    InferCancelled,
    InvalidCParam,
    UnknownCError,
    NotImplementCMethod,
    UnknownException,
    /// Raised on the Rust side before reaching the runtime.
    InvalidArgument,
    Other(i32),
}

impl Status {
    pub fn from_raw(status: ffi::OvStatus) -> Self {
        match status {
            -1 => Status::GeneralError,
            -2 => Status::NotImplemented,
            -3 => Status::NetworkNotLoaded,
            -4 => Status::ParameterMismatch,
            -5 => Status::NotFound,
            -6 => Status::OutOfBounds,
            -7 => Status::Unexpected,
            -8 => Status::RequestBusy,
            -9 => Status::ResultNotReady,
            -10 => Status::NotAllocated,
            -11 => Status::InferNotStarted,
            -12 => Status::NetworkNotRead,
            -13 => Status::InferCancelled,
            -14 => Status::InvalidCParam,
            -15 => Status::UnknownCError,
            -16 => Status::NotImplementCMethod,
            -17 => Status::UnknownException,
            other => Status::Other(other),
        }
    }
}

/// Error type for OpenVINO operations
#[derive(Debug, Clone)]
pub struct OvError {
    status: Status,
    message: String,
}

impl OvError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        OvError {
            status: Status::InvalidArgument,
            message: message.into(),
        }
    }

    /// Build an error from a non-OK status, preferring the runtime's last
    /// error message over the generic description of the code.
    pub(crate) fn from_status(status: ffi::OvStatus) -> Self {
        let message = unsafe {
            let last = ffi::ov_get_last_err_msg();
            let last = if last.is_null() {
                String::new()
            } else {
                CStr::from_ptr(last).to_string_lossy().trim().to_string()
            };
            if !last.is_empty() {
                last
            } else {
                let info = ffi::ov_get_error_info(status);
                if info.is_null() {
                    String::from("unknown error")
                } else {
                    CStr::from_ptr(info).to_string_lossy().into_owned()
                }
            }
        };
        OvError {
            status: Status::from_raw(status),
            message,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for OvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpenVINO error ({:?}): {}", self.status, self.message)
    }
}

impl std::error::Error for OvError {}

/// Result type for OpenVINO operations
pub type Result<T> = std::result::Result<T, OvError>;

/// Convert a returned `ov_status_e` into a `Result`.
pub(crate) fn check(status: ffi::OvStatus) -> Result<()> {
    if status == ffi::OV_STATUS_OK {
        Ok(())
    } else {
        Err(OvError::from_status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_raw() {
        assert_eq!(Status::from_raw(-1), Status::GeneralError);
        assert_eq!(Status::from_raw(-5), Status::NotFound);
        assert_eq!(Status::from_raw(-17), Status::UnknownException);
        assert_eq!(Status::from_raw(-99), Status::Other(-99));
    }

    #[test]
    fn test_error_display() {
        let err = OvError::invalid_argument("frame holds 12 bytes, tensor needs 9");
        let display = format!("{}", err);
        assert!(display.contains("InvalidArgument"));
        assert!(display.contains("tensor needs 9"));
    }

    #[test]
    fn test_error_implements_error_trait() {
        fn assert_error<T: std::error::Error>(_: &T) {}
        assert_error(&OvError::invalid_argument("x"));
    }
}
