use ndarray::Array2;

use lat_detect::data::{DetBox, Detection};
use lat_detect::processing::{multiclass_nms, Nms};

/// Three boxes: the first two heavily overlap, the third is far away.
fn sample_boxes() -> Vec<DetBox> {
    vec![
        DetBox::new(0.0, 0.0, 10.0, 10.0),
        DetBox::new(1.0, 1.0, 11.0, 11.0),
        DetBox::new(100.0, 100.0, 120.0, 120.0),
    ]
}

fn score_column(scores: &[f32], num_classes: usize, class_id: usize) -> Array2<f32> {
    let mut matrix = Array2::zeros((scores.len(), num_classes));
    for (i, &score) in scores.iter().enumerate() {
        matrix[[i, class_id]] = score;
    }
    matrix
}

fn rebuild(dets: &[Detection], num_classes: usize) -> (Vec<DetBox>, Array2<f32>) {
    let boxes: Vec<DetBox> = dets.iter().map(|d| d.bbox).collect();
    let mut scores = Array2::zeros((dets.len(), num_classes));
    for (i, det) in dets.iter().enumerate() {
        scores[[i, det.class_id]] = det.confidence;
    }
    (boxes, scores)
}

#[test]
fn suppresses_overlapping_boxes_of_one_class() {
    let boxes = sample_boxes();
    let scores = score_column(&[0.9, 0.8, 0.7], 2, 0);

    let dets = multiclass_nms(&boxes, &scores, 0.45, 0.1).unwrap();

    assert_eq!(dets.len(), 2);
    assert_eq!(dets[0].confidence, 0.9);
    assert_eq!(dets[0].bbox, boxes[0]);
    assert_eq!(dets[1].bbox, boxes[2]);
}

#[test]
fn no_cross_class_suppression() {
    // Identical boxes scored under different classes both survive.
    let boxes = vec![
        DetBox::new(0.0, 0.0, 10.0, 10.0),
        DetBox::new(0.0, 0.0, 10.0, 10.0),
    ];
    let mut scores = Array2::zeros((2, 2));
    scores[[0, 0]] = 0.9;
    scores[[1, 1]] = 0.8;

    let dets = multiclass_nms(&boxes, &scores, 0.45, 0.1).unwrap();

    assert_eq!(dets.len(), 2);
    let mut class_ids: Vec<usize> = dets.iter().map(|d| d.class_id).collect();
    class_ids.sort();
    assert_eq!(class_ids, vec![0, 1]);
}

#[test]
fn score_threshold_one_yields_none() {
    // No score can exceed 1.0 under normalized scoring.
    let boxes = sample_boxes();
    let scores = score_column(&[1.0, 0.9, 0.8], 2, 0);

    assert!(multiclass_nms(&boxes, &scores, 0.45, 1.0).is_none());
}

#[test]
fn surviving_pairs_stay_below_iou_threshold() {
    let boxes = vec![
        DetBox::new(0.0, 0.0, 10.0, 10.0),
        DetBox::new(2.0, 2.0, 12.0, 12.0),
        DetBox::new(4.0, 4.0, 14.0, 14.0),
        DetBox::new(30.0, 30.0, 40.0, 40.0),
        DetBox::new(31.0, 31.0, 41.0, 41.0),
    ];
    let scores = score_column(&[0.9, 0.85, 0.8, 0.75, 0.7], 1, 0);
    let nms_thr = 0.45;

    let dets = multiclass_nms(&boxes, &scores, nms_thr, 0.1).unwrap();

    for i in 0..dets.len() {
        for j in (i + 1)..dets.len() {
            assert!(dets[i].iou(&dets[j]) <= nms_thr);
        }
    }
}

#[test]
fn idempotent_on_own_output() {
    let boxes = sample_boxes();
    let scores = score_column(&[0.9, 0.8, 0.7], 2, 0);

    let first = multiclass_nms(&boxes, &scores, 0.45, 0.1).unwrap();
    let (boxes2, scores2) = rebuild(&first, 2);
    let second = multiclass_nms(&boxes2, &scores2, 0.45, 0.1).unwrap();

    assert_eq!(first, second);
}
