use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use lat_detect::data::{DeviceType, ModelConfig};

/// End-to-end inference latency measurement for an exported ONNX detection
/// model against a local image directory.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input onnx model
    #[arg(short, long, default_value = "yolox.onnx", value_name = "FILE")]
    model: String,

    /// Directory of input images; the first N entries form the sample batch
    #[arg(short, long, value_name = "DIR")]
    image_dir: PathBuf,

    /// Output directory (created if missing)
    #[arg(short, long, default_value = "demo_output", value_name = "DIR")]
    output_dir: PathBuf,

    /// Score threshold to filter the result
    #[arg(short, long, default_value = "0.3")]
    score_thr: f32,

    /// NMS IoU threshold
    #[arg(long, default_value = "0.45")]
    nms_thr: f32,

    /// Input shape for inference, as "H,W"
    #[arg(long, default_value = "640,640", value_name = "H,W")]
    input_shape: String,

    /// Execution provider (cpu, cuda, tensorrt)
    #[arg(long, default_value = "cpu")]
    device: DeviceType,

    /// onnxruntime dynamic library (falls back to ORT_DYLIB_PATH)
    #[arg(long, value_name = "FILE")]
    ort_lib: Option<String>,

    /// Labels file, one class name per line
    #[arg(long, value_name = "FILE")]
    labels: Option<String>,

    /// Class count when neither labels nor model metadata provide names
    #[arg(long, default_value = "80")]
    num_classes: usize,

    /// Sample batch size taken from the image directory
    #[arg(long, default_value = "10")]
    limit: usize,
}

fn parse_input_shape(shape: &str) -> Result<(u32, u32)> {
    let parts: Vec<&str> = shape.split(',').collect();
    ensure!(parts.len() == 2, "input shape must be \"H,W\", got {shape:?}");
    let height = parts[0].trim().parse().context("parsing input height")?;
    let width = parts[1].trim().parse().context("parsing input width")?;
    Ok((height, width))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let (height, width) = parse_input_shape(&args.input_shape)?;

    std::fs::create_dir_all(&args.output_dir)
        .with_context(|| format!("creating output directory {}", args.output_dir.display()))?;

    let mut config = ModelConfig::new(&args.model)
        .with_device(args.device)
        .with_input_size(width, height)
        .with_score_thr(args.score_thr)
        .with_nms_thr(args.nms_thr)
        .with_num_classes(args.num_classes);
    if let Some(path) = &args.ort_lib {
        config = config.with_ort_lib(path);
    }
    if let Some(path) = &args.labels {
        config = config.with_labels(path);
    }

    println!("{}", config.summary());

    let mut harness = lat_detect::init_harness(&config)?;
    let report = harness.measure_directory(&args.image_dir, args.limit)?;

    println!(
        "Total time for inference on {} images: {:.4} seconds",
        report.images(),
        report.total().as_secs_f64()
    );
    if report.images() > 0 {
        println!("Average per image: {:.2?}", report.avg());
    }
    if report.empty() > 0 {
        println!("Images with no detections above threshold: {}", report.empty());
    }
    if report.failures() > 0 {
        println!("Images skipped due to errors: {}", report.failures());
    }

    Ok(())
}
