use {
    crate::*,
    std::{ffi::CStr, ptr::null},
};

/// Releases whose C headers match the layouts in `ffi`, as
/// `(first, last)` inclusive `(year, minor)` pairs.
pub const SUPPORTED_RELEASES: ((u32, u32), (u32, u32)) = ((2023, 0), (2024, 99));

/// Build number of the loaded runtime, e.g. `2024.4.0-16579-c3152d32c9c-releases/2024/4`.
pub fn version() -> Result<String> {
    let mut raw = ffi::OvVersion {
        build_number: null(),
        description: null(),
    };
    let status = unsafe { ffi::ov_get_openvino_version(&mut raw as *mut _) };
    error::check(status)?;
    let build_number = if raw.build_number.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(raw.build_number) }.to_string_lossy().into_owned()
    };
    unsafe { ffi::ov_version_free(&mut raw as *mut _) };
    Ok(build_number)
}

/// `(year, minor)` at the start of a build number.
pub fn release_of(build_number: &str) -> Option<(u32, u32)> {
    let mut parts = build_number.split(|c: char| !c.is_ascii_digit());
    let year = parts.next()?.parse().ok()?;
    let minor = parts.next()?.parse().ok()?;
    Some((year, minor))
}

pub fn is_supported(build_number: &str) -> bool {
    let (first, last) = SUPPORTED_RELEASES;
    release_of(build_number).is_some_and(|release| release >= first && release <= last)
}
