//! Text-processing pipeline for Narrative.
//!
//! This module provides the normalization, tokenization and token filtering
//! stages, the linguistic resources they share, and the [`pipeline`] that
//! sequences them.

pub mod char_filter;
pub mod normalize;
pub mod pipeline;
pub mod resources;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use pipeline::{PipelineConfig, TextPipeline};
pub use resources::LinguisticResources;
