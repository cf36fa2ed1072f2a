//! Class-wise non-max suppression.

use ndarray::Array2;

use crate::data::{DetBox, Detection};

pub trait Nms {
    fn iou(&self, other: &Self) -> f32;
    fn confidence(&self) -> f32;
}

/// Greedy suppression: keeps the highest-confidence box and drops any later
/// box whose IoU with an already-kept box exceeds `iou_threshold`.
pub fn nms<T: Nms>(boxes: &mut Vec<T>, iou_threshold: f32) {
    boxes.sort_by(|b1, b2| {
        b2.confidence()
            .partial_cmp(&b1.confidence())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let mut current_index = 0;
    for index in 0..boxes.len() {
        let mut drop = false;
        for prev_index in 0..current_index {
            let iou = boxes[prev_index].iou(&boxes[index]);
            if iou > iou_threshold {
                drop = true;
                break;
            }
        }
        if !drop {
            boxes.swap(current_index, index);
            current_index += 1;
        }
    }
    boxes.truncate(current_index);
}

/// Runs NMS per class independently over `boxes` with a `(N, C)` score
/// matrix, keeping boxes whose score strictly exceeds `score_thr`. Results
/// are unioned across classes; there is no cross-class suppression.
///
/// Returns `None` when no detection survives thresholding, so callers must
/// check before indexing into the result.
pub fn multiclass_nms(
    boxes: &[DetBox],
    scores: &Array2<f32>,
    nms_thr: f32,
    score_thr: f32,
) -> Option<Vec<Detection>> {
    let mut kept: Vec<Detection> = Vec::new();

    for class_id in 0..scores.ncols() {
        let mut candidates: Vec<Detection> = scores
            .column(class_id)
            .iter()
            .enumerate()
            .filter(|(_, &score)| score > score_thr)
            .map(|(i, &score)| Detection::new(class_id, boxes[i], score))
            .collect();
        if candidates.is_empty() {
            continue;
        }
        nms(&mut candidates, nms_thr);
        kept.extend(candidates);
    }

    if kept.is_empty() {
        None
    } else {
        Some(kept)
    }
}
