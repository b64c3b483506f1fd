use {
    crate::*,
    clap::{ArgAction, CommandFactory, Parser, error::ErrorKind},
    std::{ffi::OsString, path::PathBuf},
};

/// Measure OpenVINO inference throughput on the frames of `video.avi`.
#[derive(Debug, Parser)]
#[command(name = "bench", disable_help_flag = true)]
pub struct BenchArgs {
    /// Model to load (OpenVINO IR `.xml` or ONNX).
    #[arg(value_name = "MODEL_PATH")]
    pub model_path: Option<PathBuf>,

    /// Device to compile the model for.
    #[arg(short, long, default_value = "CPU")]
    pub device: String,

    /// Write logs to daily files in this directory instead of stderr.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Print help.
    #[arg(short = 'h', long, short_alias = '?', action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

/// What `main` should do after parsing the command line.
#[derive(Debug)]
pub enum Action {
    /// Print this usage text and exit successfully.
    Usage(String),
    Run(BenchConfig),
}

pub fn usage() -> String {
    BenchArgs::command().render_help().to_string()
}

/// Parse the command line. Help requests and a missing model path are not
/// errors; they produce `Action::Usage`. Other clap errors are returned.
pub fn parse_args<I, T>(args: I) -> Result<Action, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match BenchArgs::try_parse_from(args) {
        Ok(BenchArgs {
            model_path: Some(model_path),
            device,
            log_dir,
            ..
        }) => Ok(Action::Run(BenchConfig::new(model_path, device, log_dir))),
        Ok(_) => Ok(Action::Usage(usage())),
        Err(err) if err.kind() == ErrorKind::DisplayHelp => Ok(Action::Usage(usage())),
        Err(err) => Err(err),
    }
}
