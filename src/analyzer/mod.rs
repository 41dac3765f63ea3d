//! Analyzer module - quote scoring engine

pub mod engine;
pub mod rules;
pub mod scoring;

pub use engine::QuoteAnalyzer;
pub use scoring::ScoreCalculator;
