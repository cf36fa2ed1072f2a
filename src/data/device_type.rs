use std::str::FromStr;

/// Execution provider used by the ONNX Runtime session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    #[default] CPU,
    CUDA,
    TensorRT,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::CPU => "CPU",
            DeviceType::CUDA => "CUDA",
            DeviceType::TensorRT => "TensorRT",
        }
    }

    pub fn as_str_lowercase(&self) -> &'static str {
        match self {
            DeviceType::CPU => "cpu",
            DeviceType::CUDA => "cuda",
            DeviceType::TensorRT => "tensorrt",
        }
    }
}

impl FromStr for DeviceType {
    type Err = String;

    fn from_str(device: &str) -> Result<Self, Self::Err> {
        match device.to_lowercase().as_str() {
            "cpu" => Ok(DeviceType::CPU),
            "cuda" => Ok(DeviceType::CUDA),
            "tensorrt" => Ok(DeviceType::TensorRT),
            other => Err(format!("unknown device type: {other}")),
        }
    }
}
