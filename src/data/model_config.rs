use crate::data::DeviceType;

/// Runtime settings for one exported model.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub model_path: String,
    /// Dynamic onnxruntime library. Falls back to `ORT_DYLIB_PATH` when unset.
    pub ort_lib_path: Option<String>,
    /// Optional labels file, one class name per line.
    pub labels_path: Option<String>,
    pub device: DeviceType,
    pub input_width: u32,
    pub input_height: u32,
    /// Class count used when neither labels file nor model metadata names it.
    pub num_classes: usize,
    pub score_thr: f32,
    pub nms_thr: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_path: String::new(),
            ort_lib_path: None,
            labels_path: None,
            device: DeviceType::CPU,
            input_width: 640,
            input_height: 640,
            num_classes: 80,
            score_thr: 0.3,
            nms_thr: 0.45,
        }
    }
}

impl ModelConfig {
    pub fn new(model_path: &str) -> Self {
        Self {
            model_path: model_path.to_string(),
            ..Default::default()
        }
    }

    pub fn with_ort_lib(mut self, path: &str) -> Self {
        self.ort_lib_path = Some(path.to_string());
        self
    }

    pub fn with_labels(mut self, path: &str) -> Self {
        self.labels_path = Some(path.to_string());
        self
    }

    pub fn with_device(mut self, device: DeviceType) -> Self {
        self.device = device;
        self
    }

    pub fn with_input_size(mut self, width: u32, height: u32) -> Self {
        self.input_width = width;
        self.input_height = height;
        self
    }

    pub fn with_num_classes(mut self, num_classes: usize) -> Self {
        self.num_classes = num_classes;
        self
    }

    pub fn with_score_thr(mut self, score_thr: f32) -> Self {
        self.score_thr = score_thr;
        self
    }

    pub fn with_nms_thr(mut self, nms_thr: f32) -> Self {
        self.nms_thr = nms_thr;
        self
    }

    pub fn summary(&self) -> String {
        format!("Model: {}\nDevice (execution provider): {}\nModel input resolution: {}x{}\nScore threshold: {} | NMS threshold: {}",
                self.model_path, self.device.as_str(), self.input_width, self.input_height,
                self.score_thr, self.nms_thr)
    }
}
