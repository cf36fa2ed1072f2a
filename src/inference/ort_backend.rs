use anyhow::Result;
use ndarray::{Array4, ArrayD};
use ort::{inputs, CUDAExecutionProvider, ExecutionProvider, Session, TensorRTExecutionProvider};
use regex::Regex;

use crate::data::{DeviceType, ModelConfig};
use crate::inference::InferenceBackend;
use crate::utils;

/// ONNX Runtime session wrapper. Built once per run and reused read-only
/// across all images.
pub struct OrtBackend {
    session: Session,
    input_name: String,
    output_name: String,
    names: Vec<String>,
}

impl OrtBackend {
    pub fn new(config: &ModelConfig) -> Result<Self> {
        match &config.ort_lib_path {
            Some(path) => ort::init_from(path).commit()?,
            None => ort::init().commit()?,
        };

        let session_builder = Session::builder()?;

        match config.device {
            DeviceType::CPU => {}
            DeviceType::CUDA => {
                let cuda = CUDAExecutionProvider::default();
                match cuda.register(&session_builder) {
                    Ok(_) => log::info!("CUDA device successfully registered"),
                    Err(e) => anyhow::bail!("failed to register CUDA device: {e}"),
                }
            }
            DeviceType::TensorRT => {
                let tensor_rt = TensorRTExecutionProvider::default();
                match tensor_rt.register(&session_builder) {
                    Ok(_) => log::info!("TensorRT device successfully registered"),
                    Err(e) => anyhow::bail!("failed to register TensorRT device: {e}"),
                }
            }
        }

        let session = session_builder.commit_from_file(&config.model_path)?;

        let input_name = session.inputs[0].name.clone();
        let output_name = session.outputs[0].name.clone();

        // Class names: labels file, then onnx metadata, then placeholders.
        let names = match &config.labels_path {
            Some(path) => utils::file_to_vec(path.to_string())?,
            None => Self::fetch_names(&session).unwrap_or_else(|| Self::n2s(config.num_classes)),
        };

        log::info!(
            "ORT session ready: input `{}`, output `{}`, {} classes",
            input_name,
            output_name,
            names.len()
        );

        Ok(Self {
            session,
            input_name,
            output_name,
            names,
        })
    }

    /// Parses class names from the onnx `names` metadata entry.
    /// String format: `{0: 'person', 1: 'bicycle', ...}`
    fn fetch_names(session: &Session) -> Option<Vec<String>> {
        let names = session.metadata().ok()?.custom("names").ok().flatten()?;
        let re = Regex::new(r#"(['"])([-()\w '"]+)(['"])"#).unwrap();
        let mut names_ = vec![];
        for (_, [_, name, _]) in re.captures_iter(&names).map(|x| x.extract()) {
            names_.push(name.to_string());
        }
        Some(names_)
    }

    fn n2s(n: usize) -> Vec<String> {
        (0..n).map(|x| format!("# {}", x)).collect::<Vec<String>>()
    }
}

impl InferenceBackend for OrtBackend {
    fn infer(&mut self, input: Array4<f32>) -> Result<ArrayD<f32>> {
        let outputs = self
            .session
            .run(inputs![self.input_name.as_str() => input.view()]?)?;
        let output = outputs[self.output_name.as_str()]
            .try_extract_tensor::<f32>()?
            .into_owned();
        Ok(output)
    }

    fn class_names(&self) -> Option<&[String]> {
        Some(&self.names)
    }
}
