use serde::{Deserialize, Serialize};
use crate::data::DetBox;
use crate::processing::nms::Nms;

/// A single filtered detection: box in original-image coordinates, combined
/// confidence (objectness x best class score) and class index.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub class_id: usize,
    pub bbox: DetBox,
    pub label: Option<String>,
    pub confidence: f32,
}

impl Nms for Detection {
    fn iou(&self, other: &Self) -> f32 {
        self.bbox.intersect(&other.bbox) / self.bbox.union(&other.bbox)
    }

    fn confidence(&self) -> f32 {
        self.confidence
    }
}

impl Detection {
    pub fn new(class_id: usize, bbox: DetBox, confidence: f32) -> Self {
        Self {
            class_id,
            bbox,
            label: None,
            confidence,
        }
    }

    pub fn with_label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    pub fn get_label(&self) -> String {
        self.label.clone().unwrap_or("Unknown".to_string())
    }
}
