// src/config.rs

//! Configuration structures for the `pixfn` engine and its demo driver.
//!
//! Every struct can be deserialized from JSON. Missing fields fall back to
//! their defaults, so an empty object `{}` is a valid configuration.

use crate::color;
use crate::engine::DEFAULT_THREAD_NAME;
use crate::transform::{chain, identity, BoxedTransform};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

// --- Top-Level Configuration Structure ---

/// Root configuration: how to dispatch work and which transforms to run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Worker dispatch settings.
    pub engine: EngineConfig,
    /// The transforms applied to each pixel, in order.
    pub pipeline: PipelineConfig,
}

impl Config {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse pixfn configuration")
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }
}

// --- Engine Configuration ---

/// Settings for [`crate::engine::ParallelMap`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of workers per call. `None` uses the hardware concurrency.
    pub workers: Option<usize>,
    /// Elements per row. When set, partitions fall on row boundaries.
    pub row_pitch: Option<usize>,
    /// Stack size for worker threads in bytes. `None` keeps the platform default.
    pub stack_size: Option<usize>,
    /// Prefix for worker thread names; the partition index is appended.
    pub thread_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            workers: None,
            row_pitch: None,
            stack_size: None,
            thread_name: DEFAULT_THREAD_NAME.to_string(),
        }
    }
}

// --- Pipeline Configuration ---

/// A named pixel transform that can appear in a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Identity,
    Invert,
    Red,
    Green,
    Blue,
}

impl Step {
    pub fn transform(self) -> BoxedTransform {
        match self {
            Step::Identity => Box::new(identity()),
            Step::Invert => Box::new(color::invert),
            Step::Red => Box::new(color::red),
            Step::Green => Box::new(color::green),
            Step::Blue => Box::new(color::blue),
        }
    }
}

/// An ordered list of steps composed into a single transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub steps: Vec<Step>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        // Negative, then keep only blue.
        PipelineConfig {
            steps: vec![Step::Invert, Step::Blue],
        }
    }
}

impl PipelineConfig {
    /// Composes the steps, first step applied first.
    pub fn build(&self) -> BoxedTransform {
        chain(self.steps.iter().map(|step| step.transform()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_empty_object_is_default() {
        let config = Config::from_json_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.engine.thread_name, DEFAULT_THREAD_NAME);
        assert_eq!(config.pipeline.steps, vec![Step::Invert, Step::Blue]);
    }

    #[test]
    fn test_partial_engine_section() {
        let config = Config::from_json_str(r#"{ "engine": { "workers": 2, "row_pitch": 320 } }"#).unwrap();
        assert_eq!(config.engine.workers, Some(2));
        assert_eq!(config.engine.row_pitch, Some(320));
        assert_eq!(config.engine.stack_size, None);
    }

    #[test]
    fn test_pipeline_steps_are_lowercase() {
        let config = Config::from_json_str(r#"{ "pipeline": { "steps": ["red", "invert"] } }"#).unwrap();
        let f = config.pipeline.build();
        // red first: 0xFF112233 -> 0xFF110000, then invert -> 0xFFEEFFFF
        assert_eq!(f(0xFF112233), 0xFFEEFFFF);
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = PipelineConfig { steps: Vec::new() };
        assert_eq!(pipeline.build()(0x12345678), 0x12345678);
    }

    #[test]
    fn test_unknown_step_is_rejected() {
        let err = Config::from_json_str(r#"{ "pipeline": { "steps": ["sepia"] } }"#).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse pixfn configuration"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = Config::load(Path::new("/nonexistent/pixfn.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/pixfn.json"));
    }
}
