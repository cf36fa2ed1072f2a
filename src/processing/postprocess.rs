//! Grid/stride decoding of raw anchor-free detection output.

use ndarray::{s, Array2, ArrayD, Axis, Ix2};

use crate::data::DetBox;
use crate::error::DetectError;

/// Feature-map strides the model was exported with. The decode below must
/// match the export-time encoding exactly.
pub const STRIDES: [usize; 3] = [8, 16, 32];

/// Decodes raw predictions shaped `(1, N, 5+C)` or `(N, 5+C)` into absolute
/// pixel coordinates relative to the model input.
///
/// Per feature-map level the grid is walked row-major; cell offsets are added
/// to the center coordinates and width/height are exp-decoded, all scaled by
/// the level stride. N must equal the total cell count over [`STRIDES`].
pub fn decode_predictions(
    raw: ArrayD<f32>,
    input_h: usize,
    input_w: usize,
) -> Result<Array2<f32>, DetectError> {
    let raw = match raw.ndim() {
        2 => raw,
        3 if raw.shape()[0] == 1 => raw.index_axis_move(Axis(0), 0),
        _ => {
            return Err(DetectError::OutputShape(format!(
                "expected (N, 5+C) or (1, N, 5+C), got {:?}",
                raw.shape()
            )))
        }
    };
    let mut preds = raw
        .into_dimensionality::<Ix2>()
        .map_err(|e| DetectError::OutputShape(e.to_string()))?;

    if preds.ncols() < 6 {
        return Err(DetectError::OutputShape(format!(
            "prediction rows need at least 6 columns, got {}",
            preds.ncols()
        )));
    }

    let expected: usize = STRIDES
        .iter()
        .map(|s| (input_h / s) * (input_w / s))
        .sum();
    if preds.nrows() != expected {
        return Err(DetectError::OutputShape(format!(
            "{} anchors for input {}x{}, expected {}",
            preds.nrows(),
            input_h,
            input_w,
            expected
        )));
    }

    let mut row = 0;
    for stride in STRIDES {
        let hsize = input_h / stride;
        let wsize = input_w / stride;
        let s = stride as f32;
        for gy in 0..hsize {
            for gx in 0..wsize {
                preds[[row, 0]] = (preds[[row, 0]] + gx as f32) * s;
                preds[[row, 1]] = (preds[[row, 1]] + gy as f32) * s;
                preds[[row, 2]] = preds[[row, 2]].exp() * s;
                preds[[row, 3]] = preds[[row, 3]].exp() * s;
                row += 1;
            }
        }
    }

    Ok(preds)
}

/// Converts decoded center-form rows to corner-form boxes in original-image
/// coordinates, undoing the preprocessing scale via `ratio`.
pub fn corner_boxes(preds: &Array2<f32>, ratio: f32) -> Vec<DetBox> {
    preds
        .outer_iter()
        .map(|row| {
            let (cx, cy, w, h) = (row[0], row[1], row[2], row[3]);
            DetBox::new(
                (cx - w / 2.) / ratio,
                (cy - h / 2.) / ratio,
                (cx + w / 2.) / ratio,
                (cy + h / 2.) / ratio,
            )
        })
        .collect()
}

/// Per-box per-class scores: objectness times each class score.
pub fn score_matrix(preds: &Array2<f32>, num_classes: usize) -> Result<Array2<f32>, DetectError> {
    if preds.ncols() != 5 + num_classes {
        return Err(DetectError::OutputShape(format!(
            "{} columns for {} classes, expected {}",
            preds.ncols(),
            num_classes,
            5 + num_classes
        )));
    }

    let mut scores = preds.slice(s![.., 5..]).to_owned();
    let objectness = preds.slice(s![.., 4]);
    for (mut row, &obj) in scores.outer_iter_mut().zip(objectness.iter()) {
        row.mapv_inplace(|cls| cls * obj);
    }
    Ok(scores)
}
