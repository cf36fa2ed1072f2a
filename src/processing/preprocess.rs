//! Letterbox preprocessing for a fixed-size detection model input.

use fast_image_resize::{
    images::{CroppedImageMut, Image as FirImage},
    pixels::PixelType,
    FilterType, ResizeAlg, ResizeOptions, Resizer,
};
use image::DynamicImage;
use ndarray::Array3;

use crate::error::DetectError;

/// Neutral fill for the letterbox padding, matching the export-time value.
pub const PAD_VALUE: u8 = 114;

/// Resizes `image` into a `(3, target_h, target_w)` float tensor, preserving
/// aspect ratio and padding the remainder with [`PAD_VALUE`].
///
/// Channel planes are emitted in BGR order and values stay in the raw 0-255
/// range: the model was exported against cv2-loaded input with no mean/std
/// scaling, and the decode is silently wrong if this does not match.
///
/// Returns the tensor together with `ratio = min(target_h/h, target_w/w)`,
/// which callers must use to map decoded boxes back into original-image
/// coordinates.
pub fn preprocess(
    image: &DynamicImage,
    target_h: u32,
    target_w: u32,
) -> Result<(Array3<f32>, f32), DetectError> {
    if image.color().channel_count() < 3 {
        return Err(DetectError::InvalidInput(format!(
            "expected at least 3 channels, got {:?}",
            image.color()
        )));
    }

    let rgb = image.to_rgb8();
    let (w0, h0) = rgb.dimensions();
    if w0 == 0 || h0 == 0 {
        return Err(DetectError::InvalidInput(format!(
            "empty image ({w0}x{h0})"
        )));
    }

    let ratio = (target_w as f32 / w0 as f32).min(target_h as f32 / h0 as f32);
    let new_w = ((w0 as f32 * ratio).round().max(1.0) as u32).min(target_w);
    let new_h = ((h0 as f32 * ratio).round().max(1.0) as u32).min(target_h);

    let src = FirImage::from_vec_u8(w0, h0, rgb.into_raw(), PixelType::U8x3)
        .map_err(|e| DetectError::Processing(e.to_string()))?;

    let mut padded = FirImage::from_vec_u8(
        target_w,
        target_h,
        vec![PAD_VALUE; (target_w * target_h * 3) as usize],
        PixelType::U8x3,
    )
    .map_err(|e| DetectError::Processing(e.to_string()))?;

    // Resized content sits at the top-left corner, padding fills the rest.
    {
        let mut region = CroppedImageMut::new(&mut padded, 0, 0, new_w, new_h)
            .map_err(|e| DetectError::Processing(e.to_string()))?;
        let mut resizer = Resizer::new();
        let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear));
        resizer
            .resize(&src, &mut region, &options)
            .map_err(|e| DetectError::Processing(e.to_string()))?;
    }

    let buf = padded.buffer();
    let (h, w) = (target_h as usize, target_w as usize);
    let hw = h * w;
    let mut out = vec![0.0f32; 3 * hw];
    for i in 0..hw {
        let r = buf[3 * i] as f32;
        let g = buf[3 * i + 1] as f32;
        let b = buf[3 * i + 2] as f32;

        out[i] = b;
        out[i + hw] = g;
        out[i + 2 * hw] = r;
    }

    let tensor = Array3::from_shape_vec((3, h, w), out)
        .map_err(|e| DetectError::Processing(e.to_string()))?;

    Ok((tensor, ratio))
}
