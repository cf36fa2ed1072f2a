//! End-to-end latency measurement over a directory of images.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;
use image::DynamicImage;
use ndarray::Axis;

use crate::data::{Detection, LatencyReport, ModelConfig};
use crate::error::DetectError;
use crate::inference::InferenceBackend;
use crate::processing::{corner_boxes, decode_predictions, multiclass_nms, preprocess, score_matrix};
use crate::utils;

/// Sequential measure-and-accumulate loop around one inference backend.
///
/// One image is fully processed (load, preprocess, infer, postprocess, NMS)
/// before the next begins; the backend is created once and reused.
pub struct TimingHarness {
    backend: Box<dyn InferenceBackend>,
    input_width: u32,
    input_height: u32,
    num_classes: usize,
    score_thr: f32,
    nms_thr: f32,
}

impl TimingHarness {
    pub fn new(backend: Box<dyn InferenceBackend>, config: &ModelConfig) -> Self {
        let num_classes = backend
            .class_names()
            .map(|names| names.len())
            .unwrap_or(config.num_classes);
        Self {
            backend,
            input_width: config.input_width,
            input_height: config.input_height,
            num_classes,
            score_thr: config.score_thr,
            nms_thr: config.nms_thr,
        }
    }

    /// Runs the full detection pipeline on one image. `None` means nothing
    /// survived score/NMS thresholding, which is a normal outcome.
    pub fn detect(&mut self, image: &DynamicImage) -> Result<Option<Vec<Detection>>> {
        let (tensor, ratio) = preprocess(image, self.input_height, self.input_width)?;
        let input = tensor.insert_axis(Axis(0));

        let raw = self.backend.infer(input)?;

        let preds = decode_predictions(raw, self.input_height as usize, self.input_width as usize)?;
        let boxes = corner_boxes(&preds, ratio);
        let scores = score_matrix(&preds, self.num_classes)?;

        let mut detections = multiclass_nms(&boxes, &scores, self.nms_thr, self.score_thr);

        if let (Some(dets), Some(names)) = (detections.as_mut(), self.backend.class_names()) {
            for det in dets.iter_mut() {
                if let Some(name) = names.get(det.class_id) {
                    det.label = Some(name.clone());
                }
            }
        }

        Ok(detections)
    }

    /// One measured pass over a single image file. The wall clock covers
    /// load, preprocessing, inference, postprocessing and NMS.
    pub fn measure_file(&mut self, path: &Path) -> Result<(Duration, Option<Vec<Detection>>)> {
        let start = Instant::now();
        let image = image::open(path)
            .map_err(|e| DetectError::InvalidInput(format!("{}: {e}", path.display())))?;
        let detections = self.detect(&image)?;
        Ok((start.elapsed(), detections))
    }

    /// Measures the first `limit` files of `dir` (non-recursive, directory
    /// order). A failure in any stage aborts only that image: it is logged,
    /// counted in the report, and the run continues.
    pub fn measure_directory(&mut self, dir: &Path, limit: usize) -> Result<LatencyReport> {
        let files = utils::list_files(dir, limit)?;
        let mut report = LatencyReport::default();

        for path in files {
            match self.measure_file(&path) {
                Ok((elapsed, detections)) => {
                    report.record(elapsed);
                    match detections {
                        Some(dets) => {
                            log::debug!("{}: {} detections in {elapsed:?}", path.display(), dets.len());
                        }
                        None => {
                            report.record_empty();
                            log::debug!("{}: no detections above threshold", path.display());
                        }
                    }
                }
                Err(err) => {
                    report.record_failure();
                    log::error!("skipping {}: {err:#}", path.display());
                }
            }
        }

        Ok(report)
    }
}
