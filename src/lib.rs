pub mod data;
pub mod error;
pub mod harness;
pub mod inference;
pub mod processing;
pub mod remote;
mod utils;

use crate::data::ModelConfig;
use crate::harness::TimingHarness;
use crate::inference::OrtBackend;

pub type Result<T, E = error::DetectError> = std::result::Result<T, E>;

/// Builds the ONNX backend once and wraps it in a timing harness. The
/// session is reused across every image of the run.
pub fn init_harness(config: &ModelConfig) -> anyhow::Result<TimingHarness> {
    log::info!(
        "Initializing ORT session with ({}) execution provider",
        config.device.as_str()
    );
    let backend = OrtBackend::new(config)?;
    Ok(TimingHarness::new(Box::new(backend), config))
}
