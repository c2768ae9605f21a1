//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! [`Pipeline::run`] executes the five stages in order — normalize,
//! mine, select, score, rank — threading artifacts between them and
//! notifying a [`PipelineObserver`] at each boundary. When selection
//! accepts nothing, the scorer and ranker are skipped and the outcome
//! carries the raw-word fallback instead.

use std::sync::Arc;

use crate::error::ConfigError;
use crate::mining::filter::CandidateFilter;
use crate::mining::miner::NGramMiner;
use crate::nlp::normalizer::TextNormalizer;
use crate::nlp::stopwords::Lexicon;
use crate::pipeline::observer::{
    PipelineObserver, StageClock, StageReport, STAGE_MINE, STAGE_NORMALIZE, STAGE_RANK,
    STAGE_SCORE, STAGE_SELECT,
};
use crate::rank::ranker::PhraseRanker;
use crate::score::scorer::RelevancePositionScorer;
use crate::select::threshold::{fallback_words, AdaptiveThresholdSelector};
use crate::types::{Document, MiningOutcome, RankedPhrase, SalienceConfig};

/// Enter a tracing span for a pipeline stage (when the `tracing`
/// feature is enabled). When disabled, this is a no-op and the
/// compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// The full phrase-mining pipeline.
///
/// Holds the configuration and all stage components, including the
/// instance-owned token cache, so parallel pipelines never share
/// mutable state.
#[derive(Debug)]
pub struct Pipeline {
    config: SalienceConfig,
    normalizer: TextNormalizer,
    miner: NGramMiner,
    selector: AdaptiveThresholdSelector,
    scorer: RelevancePositionScorer,
    ranker: PhraseRanker,
}

impl Pipeline {
    /// Build a pipeline, rejecting invalid configuration up front.
    pub fn new(config: SalienceConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lexicon = Arc::new(Lexicon::english());
        let filter = CandidateFilter::new(Arc::clone(&lexicon), &config);
        Ok(Self {
            normalizer: TextNormalizer::new(),
            miner: NGramMiner::new(config.ngram_limit, filter),
            selector: AdaptiveThresholdSelector::new(config.top_n),
            scorer: RelevancePositionScorer::new(config.alpha),
            ranker: PhraseRanker::new(config.top_n, lexicon),
            config,
        })
    }

    /// The validated configuration this pipeline runs with.
    pub fn config(&self) -> &SalienceConfig {
        &self.config
    }

    /// Run the pipeline over a document batch.
    ///
    /// An empty batch yields an empty outcome (the boundary maps that
    /// to a not-found condition). A batch where no phrase clears
    /// selection yields the raw-word fallback with zero scores.
    pub fn run(
        &self,
        mut documents: Vec<Document>,
        observer: &mut impl PipelineObserver,
    ) -> MiningOutcome {
        // Stage 1: normalize documents in place.
        trace_stage!(STAGE_NORMALIZE);
        observer.on_stage_start(STAGE_NORMALIZE);
        let clock = StageClock::start();
        self.normalizer.normalize_documents(&mut documents);
        let report = StageReport::new(clock.elapsed()).with_items(documents.len());
        observer.on_stage_end(STAGE_NORMALIZE, &report);
        observer.on_documents(&documents);

        // Stage 2: mine filtered n-gram candidates.
        trace_stage!(STAGE_MINE);
        observer.on_stage_start(STAGE_MINE);
        let clock = StageClock::start();
        let candidates = self.miner.mine(&documents, &self.normalizer);
        let report = StageReport::new(clock.elapsed()).with_items(candidates.len());
        observer.on_stage_end(STAGE_MINE, &report);
        observer.on_candidates(&candidates);

        // Stage 3: adaptive threshold selection.
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selection = self.selector.select(&candidates, documents.len());
        let report = StageReport::new(clock.elapsed()).with_items(selection.len());
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_selection(&selection);

        if selection.is_empty() {
            // Raw-word fallback: unranked, bypasses scorer and ranker.
            let phrases = fallback_words(&documents, self.config.top_n)
                .into_iter()
                .map(|word| RankedPhrase {
                    phrase: word,
                    score: 0.0,
                    weight: 0,
                })
                .collect();
            return MiningOutcome {
                phrases,
                requested: self.config.top_n,
                fallback: true,
            };
        }

        // Stage 4: relevance/position scoring.
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        let scored = self.scorer.score(&selection, &documents);
        let report = StageReport::new(clock.elapsed()).with_items(scored.len());
        observer.on_stage_end(STAGE_SCORE, &report);
        observer.on_scores(&scored);

        // Stage 5: rank, dedup, backfill.
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let phrases = self.ranker.rank(scored);
        let report = StageReport::new(clock.elapsed()).with_items(phrases.len());
        observer.on_stage_end(STAGE_RANK, &report);

        MiningOutcome {
            phrases,
            requested: self.config.top_n,
            fallback: false,
        }
    }
}

/// Convenience entry point: validate the config, build a pipeline, and
/// run it once with no observer.
pub fn extract_top_phrases(
    documents: Vec<Document>,
    config: &SalienceConfig,
) -> Result<MiningOutcome, ConfigError> {
    let pipeline = Pipeline::new(config.clone())?;
    let mut observer = crate::pipeline::observer::NoopObserver;
    Ok(pipeline.run(documents, &mut observer))
}
