use {
    crate::*,
    std::time::Instant,
    video::{Frame, FrameSource},
};

/// One synchronous inference on a borrowed frame.
pub trait FrameInference {
    type Error: Into<BenchError>;

    fn infer_frame(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error>;
}

#[cfg(feature = "runtime")]
impl FrameInference for inference::FrameModel {
    type Error = inference::InferError;

    fn infer_frame(&mut self, frame: &Frame<'_>) -> Result<(), Self::Error> {
        self.infer(frame)
    }
}

/// Run `model` on every frame of `source` until the stream ends.
///
/// Only the inference call is timed; decoding is excluded. The first
/// failure aborts the run.
pub fn measure<S, M>(source: &mut S, model: &mut M) -> Result<Throughput, BenchError>
where
    S: FrameSource + ?Sized,
    M: FrameInference + ?Sized,
{
    let mut throughput = Throughput::new();
    while let Some(frame) = source.next_frame()? {
        let start = Instant::now();
        if let Err(err) = model.infer_frame(&frame) {
            return Err(err.into());
        }
        let elapsed = start.elapsed();
        throughput.record(elapsed);
        log::debug!(
            "frame {}: {:.3} ms",
            throughput.frames(),
            elapsed.as_secs_f64() * 1000.0
        );
    }
    log::info!(
        "Processed {} frames in {:.3} s",
        throughput.frames(),
        throughput.total().as_secs_f64()
    );
    Ok(throughput)
}
