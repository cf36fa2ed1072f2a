mod det_box;
mod detection;
mod device_type;
mod exp_config;
mod latency;
mod model_config;

pub use det_box::DetBox;
pub use detection::Detection;
pub use device_type::DeviceType;
pub use exp_config::ExpConfig;
pub use latency::LatencyReport;
pub use model_config::ModelConfig;
