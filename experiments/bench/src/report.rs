use {
    crate::*,
    std::{fmt::Display, io::Write},
};

/// `devices:` line listing device names exactly as given.
pub fn format_devices(devices: &[String]) -> String {
    let mut line = String::from("devices:");
    for device in devices {
        line.push(' ');
        line.push_str(device);
    }
    line
}

/// Echo the resolved run settings before anything is loaded.
pub fn write_settings(out: &mut impl Write, config: &BenchConfig) -> std::io::Result<()> {
    writeln!(out, "model_path: {}", config.model_path.display())?;
    writeln!(out, "device: {}", config.device)
}

pub fn write_devices(out: &mut impl Write, devices: &[String]) -> std::io::Result<()> {
    writeln!(out, "{}", format_devices(devices))
}

/// Model name and port listing, already rendered by the model type.
pub fn write_model_info(out: &mut impl Write, info: &impl Display) -> std::io::Result<()> {
    writeln!(out, "{}", info)
}

pub fn write_streams(out: &mut impl Write, num_streams: &str, optimal_infer_requests: &str) -> std::io::Result<()> {
    writeln!(out, "num_streams: {}", num_streams)?;
    writeln!(out, "optimal_number_of_infer_requests: {}", optimal_infer_requests)
}

pub fn write_average(out: &mut impl Write, throughput: &Throughput) -> std::io::Result<()> {
    writeln!(out, "{}", throughput)?;
    out.flush()
}
