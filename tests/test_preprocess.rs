use image::{DynamicImage, GrayImage, Rgb, RgbImage};

use lat_detect::error::DetectError;
use lat_detect::processing::{preprocess, PAD_VALUE};

#[test]
fn letterbox_ratio_and_shape() {
    // 1280x720 into 640x640 scales by half and pads the bottom strip.
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(1280, 720, Rgb([10, 20, 30])));

    let (tensor, ratio) = preprocess(&image, 640, 640).unwrap();

    assert_eq!(ratio, 0.5);
    assert_eq!(tensor.shape(), &[3, 640, 640]);

    // Content occupies rows 0..360; everything below is padding.
    for channel in 0..3 {
        assert_eq!(tensor[[channel, 400, 0]], PAD_VALUE as f32);
        assert_eq!(tensor[[channel, 639, 639]], PAD_VALUE as f32);
    }

    // Planes are BGR and values stay in the raw 0-255 range.
    assert_eq!(tensor[[0, 100, 100]], 30.0);
    assert_eq!(tensor[[1, 100, 100]], 20.0);
    assert_eq!(tensor[[2, 100, 100]], 10.0);
}

#[test]
fn ratio_bounded_for_larger_sources() {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(1920, 1080, Rgb([0, 0, 0])));

    let (tensor, ratio) = preprocess(&image, 640, 640).unwrap();

    assert!(ratio > 0.0 && ratio <= 1.0);
    assert_eq!(tensor.shape(), &[3, 640, 640]);
}

#[test]
fn upscales_smaller_sources() {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(64, 48, Rgb([5, 5, 5])));

    let (tensor, ratio) = preprocess(&image, 640, 640).unwrap();

    assert_eq!(ratio, 10.0);
    assert_eq!(tensor.shape(), &[3, 640, 640]);
}

#[test]
fn rejects_empty_image() {
    let image = DynamicImage::ImageRgb8(RgbImage::new(0, 0));

    let err = preprocess(&image, 640, 640).unwrap_err();

    assert!(matches!(err, DetectError::InvalidInput(_)));
}

#[test]
fn rejects_single_channel_image() {
    let image = DynamicImage::ImageLuma8(GrayImage::new(32, 32));

    let err = preprocess(&image, 640, 640).unwrap_err();

    assert!(matches!(err, DetectError::InvalidInput(_)));
}
