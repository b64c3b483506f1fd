use std::{env, path::PathBuf};

fn main() {
    println!("cargo:rustc-link-lib=openvino_c");
    println!("cargo:rerun-if-env-changed=OPENVINO_DIR");
    println!("cargo:rerun-if-env-changed=INTEL_OPENVINO_DIR");
    println!("cargo:rerun-if-env-changed=OPENVINO_LIB_DIR");

    warn_on_unsupported_release();

    // Search order:
    // 1. OPENVINO_LIB_DIR
    // 2. OPENVINO_DIR or INTEL_OPENVINO_DIR (archive layout: runtime/lib/<arch>)
    // 3. pkg-config
    // 4. common system paths

    if let Ok(lib_dir) = env::var("OPENVINO_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", lib_dir);
        println!("cargo:warning=Using OPENVINO_LIB_DIR: {}", lib_dir);
        return;
    }

    for var in ["OPENVINO_DIR", "INTEL_OPENVINO_DIR"] {
        if let Ok(dir) = env::var(var) {
            let root = PathBuf::from(dir);
            let candidates = [
                root.join("runtime/lib/intel64"),
                root.join("runtime/lib/aarch64"),
                root.join("runtime/lib/arm64"),
                root.join("lib"),
            ];
            for lib_path in candidates.iter().filter(|path| path.exists()) {
                println!("cargo:rustc-link-search=native={}", lib_path.display());
                println!("cargo:warning=Using {}: {}", var, lib_path.display());
                return;
            }
        }
    }

    if let Ok(output) = std::process::Command::new("pkg-config")
        .args(["--libs-only-L", "openvino"])
        .output()
    {
        if output.status.success() {
            if let Ok(libs) = String::from_utf8(output.stdout) {
                for lib in libs.split_whitespace() {
                    if let Some(path) = lib.strip_prefix("-L") {
                        println!("cargo:rustc-link-search=native={}", path);
                        println!("cargo:warning=Using pkg-config path: {}", path);
                        return;
                    }
                }
            }
        }
    }

    let system_paths = [
        "/opt/intel/openvino/runtime/lib/intel64",
        "/usr/local/lib",
        "/usr/lib",
        "/usr/lib/x86_64-linux-gnu",
        "/usr/lib/aarch64-linux-gnu",
    ];
    for path in &system_paths {
        if PathBuf::from(path).join("libopenvino_c.so").exists() {
            println!("cargo:rustc-link-search=native={}", path);
            println!("cargo:warning=Found libopenvino_c.so in system path: {}", path);
            return;
        }
    }

    println!(
        "cargo:warning=Could not find libopenvino_c.so. Set OPENVINO_DIR or OPENVINO_LIB_DIR environment variable."
    );
}

// Keep in step with `version::SUPPORTED_RELEASES`.
const SUPPORTED_YEARS: std::ops::RangeInclusive<u32> = 2023..=2024;

fn warn_on_unsupported_release() {
    let Ok(output) = std::process::Command::new("pkg-config")
        .args(["--modversion", "openvino"])
        .output()
    else {
        return;
    };
    if !output.status.success() {
        return;
    }
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let year = version.split('.').next().and_then(|year| year.parse::<u32>().ok());
    match year {
        Some(year) if SUPPORTED_YEARS.contains(&year) => {}
        _ => println!(
            "cargo:warning=OpenVINO {} found by pkg-config; bindings are laid out for releases 2023.0 through 2024.x",
            version
        ),
    }
}
