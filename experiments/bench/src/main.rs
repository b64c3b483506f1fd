use {
    bench::*,
    inference::Inference,
    std::io::{self, Write},
    video::VideoFile,
};

fn run(config: &BenchConfig) -> Result<(), BenchError> {
    let mut out = io::stdout().lock();
    write_settings(&mut out, config)?;

    let inference = Inference::new()?;
    write_devices(&mut out, &inference.available_devices()?)?;

    let mut model = inference.use_frame_model(&config.model_path, &config.device, config.frame_size)?;
    write_model_info(&mut out, model.info())?;
    let compiled_info = model.compiled_info();
    write_streams(&mut out, &compiled_info.num_streams, &compiled_info.optimal_infer_requests)?;
    out.flush()?;

    let mut video = VideoFile::open(&config.video_path)?;
    log::info!("Measuring frames from {}", video.path().display());
    let throughput = measure(&mut video, &mut model)?;
    write_average(&mut out, &throughput)?;
    Ok(())
}

fn main() {
    let config = match parse_args(std::env::args_os()) {
        Ok(Action::Usage(usage)) => {
            let mut out = io::stdout().lock();
            let _ = out.write_all(usage.as_bytes()).and_then(|_| out.flush());
            return;
        }
        Ok(Action::Run(config)) => config,
        Err(err) => err.exit(),
    };

    match &config.log_dir {
        Some(dir) => {
            if let Err(err) = base::init_file_logger(dir) {
                base::log_fatal!("cannot log to {}: {}", dir.display(), err);
            }
        }
        None => base::init_stderr_logger(),
    }

    if let Err(err) = run(&config) {
        base::log_fatal!("{}", err);
    }
}
