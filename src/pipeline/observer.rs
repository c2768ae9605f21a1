//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling
//! to stage logic. Use cases include timing stages, capturing
//! intermediate artifacts, and emitting structured telemetry.

use std::time::{Duration, Instant};

use crate::mining::miner::CandidateMap;
use crate::score::scorer::ScoredPhrase;
use crate::select::threshold::SelectedPhrase;
use crate::types::Document;

/// Stage name: document normalization.
pub const STAGE_NORMALIZE: &str = "normalize";
/// Stage name: n-gram mining and filtering.
pub const STAGE_MINE: &str = "mine";
/// Stage name: adaptive threshold selection.
pub const STAGE_SELECT: &str = "select";
/// Stage name: relevance/position scoring.
pub const STAGE_SCORE: &str = "score";
/// Stage name: final ranking.
pub const STAGE_RANK: &str = "rank";

/// Monotonic clock for timing one stage.
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    /// Start timing.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Elapsed time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Per-stage metrics handed to the observer when a stage ends.
#[derive(Debug, Clone, Copy)]
pub struct StageReport {
    elapsed: Duration,
    items: Option<usize>,
}

impl StageReport {
    /// Report with timing only.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            items: None,
        }
    }

    /// Attach an item count (documents, candidates, phrases).
    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    /// Wall time the stage took.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Item count produced by the stage, when the stage reports one.
    pub fn items(&self) -> Option<usize> {
        self.items
    }
}

/// Callbacks fired at stage boundaries. All methods default to no-ops,
/// so implementors override only what they need.
pub trait PipelineObserver {
    /// A stage is about to run.
    fn on_stage_start(&mut self, _stage: &'static str) {}
    /// A stage finished.
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}
    /// The cleaned document batch.
    fn on_documents(&mut self, _documents: &[Document]) {}
    /// The mined candidate map.
    fn on_candidates(&mut self, _candidates: &CandidateMap) {}
    /// The accepted phrase set, in production order.
    fn on_selection(&mut self, _selection: &[SelectedPhrase]) {}
    /// The scored phrases, still in selection order.
    fn on_scores(&mut self, _scores: &[ScoredPhrase]) {}
}

/// Observer that ignores everything; zero overhead.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Observer that records every stage report in order.
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an empty timing observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The collected `(stage, report)` pairs, in execution order.
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, *report));
    }
}
