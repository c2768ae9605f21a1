//! Pipeline orchestration
//!
//! This module wires the stages together and exposes observer hooks at
//! every stage boundary.

pub mod observer;
pub mod runner;

pub use observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use runner::{extract_top_phrases, Pipeline};
