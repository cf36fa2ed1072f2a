use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// Experiment configuration for a detection training setup.
///
/// Every hyperparameter the experiment overrides is an explicit named field
/// with a `validate()` pass, rather than an override of an opaque base
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpConfig {
    pub exp_name: String,

    /// Backbone depth multiplier.
    pub depth: f32,
    /// Backbone width multiplier.
    pub width: f32,
    pub num_classes: usize,

    pub data_dir: String,
    pub train_ann: String,
    pub val_ann: String,

    pub max_epoch: usize,
    pub data_num_workers: usize,
    pub eval_interval: usize,

    /// Training input resolution `(height, width)`.
    pub input_size: (u32, u32),
    /// Evaluation input resolution `(height, width)`.
    pub test_size: (u32, u32),
}

impl Default for ExpConfig {
    fn default() -> Self {
        Self {
            exp_name: "yolox_m".to_string(),
            depth: 0.67,
            width: 0.75,
            num_classes: 10,
            data_dir: "datasets/3k_dataset".to_string(),
            train_ann: "train.json".to_string(),
            val_ann: "val.json".to_string(),
            max_epoch: 15,
            data_num_workers: 4,
            eval_interval: 1,
            input_size: (800, 800),
            test_size: (800, 800),
        }
    }
}

impl ExpConfig {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_exp_name(mut self, name: &str) -> Self {
        self.exp_name = name.to_string();
        self
    }

    pub fn with_depth(mut self, depth: f32) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_num_classes(mut self, num_classes: usize) -> Self {
        self.num_classes = num_classes;
        self
    }

    pub fn with_data_dir(mut self, data_dir: &str) -> Self {
        self.data_dir = data_dir.to_string();
        self
    }

    pub fn with_max_epoch(mut self, max_epoch: usize) -> Self {
        self.max_epoch = max_epoch;
        self
    }

    pub fn with_input_size(mut self, height: u32, width: u32) -> Self {
        self.input_size = (height, width);
        self
    }

    pub fn with_test_size(mut self, height: u32, width: u32) -> Self {
        self.test_size = (height, width);
        self
    }

    /// Rejects configurations the training framework would choke on later.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.depth > 0.0, "depth must be positive, got {}", self.depth);
        ensure!(self.width > 0.0, "width must be positive, got {}", self.width);
        ensure!(self.num_classes > 0, "num_classes must be at least 1");
        ensure!(self.max_epoch >= 1, "max_epoch must be at least 1");
        ensure!(self.eval_interval >= 1, "eval_interval must be at least 1");
        ensure!(
            self.input_size.0 > 0 && self.input_size.1 > 0,
            "input_size must be non-zero, got {:?}",
            self.input_size
        );
        ensure!(
            self.test_size.0 > 0 && self.test_size.1 > 0,
            "test_size must be non-zero, got {:?}",
            self.test_size
        );
        Ok(())
    }
}
