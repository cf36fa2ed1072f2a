use ndarray::{Array4, ArrayD};

/// Capability seam for the opaque inference runtime.
///
/// The pre/post-processing pipeline only ever talks to this trait, so an
/// alternate runtime or hardware target can be substituted without touching
/// it. Implementations are not assumed reentrant: callers must serialize
/// access to one instance or pool independent instances.
pub trait InferenceBackend {
    /// Runs the model on one preprocessed `(1, 3, H, W)` batch and returns
    /// the raw output tensor.
    fn infer(&mut self, input: Array4<f32>) -> anyhow::Result<ArrayD<f32>>;

    /// Class names, when the backend knows them.
    fn class_names(&self) -> Option<&[String]> {
        None
    }
}
