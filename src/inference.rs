mod backend;
mod ort_backend;

pub use backend::InferenceBackend;
pub use ort_backend::OrtBackend;
