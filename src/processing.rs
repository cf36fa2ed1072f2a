pub mod nms;
pub mod postprocess;
pub mod preprocess;

pub use nms::{multiclass_nms, Nms};
pub use postprocess::{corner_boxes, decode_predictions, score_matrix, STRIDES};
pub use preprocess::{preprocess, PAD_VALUE};
