//! Core library for prosemeter.
//!
//! This crate provides the foundational types and functionality used by the
//! `prosemeter` CLI and any downstream consumers.
//!
//! # Modules
//!
//! - [`analysis`] - Full-pipeline orchestration and report assembly
//! - [`config`] - Configuration loading and management
//! - [`dictionaries`] - Abbreviation and syllable lookup tables
//! - [`document`] - Segmented text structures
//! - [`error`] - Error types and result aliases
//! - [`frequency`] - Word frequency, lexical diversity, and set similarity
//! - [`markdown`] - Markdown-to-prose stripping
//! - [`metrics`] - Document counts and averages
//! - [`readability`] - Readability formulas and the consensus grade
//! - [`reading_time`] - Reading time estimation
//! - [`segment`] - Paragraph, sentence, and word segmentation
//! - [`word_lists`] - Built-in stop words and cue word sets
//!
//! # Quick Start
//!
//! ```
//! use prosemeter_core::{AnalysisOptions, analyze};
//!
//! let report = analyze(
//!     "The quick brown fox jumps over the lazy dog.",
//!     &AnalysisOptions::default(),
//! )
//! .expect("default options are valid");
//!
//! println!("{} words", report.metrics.word_count);
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod config;

pub mod dictionaries;

pub mod document;

pub mod error;

pub mod frequency;

pub mod markdown;

pub mod metrics;

pub mod readability;

pub mod reading_time;

pub mod segment;

pub mod word_lists;

pub use analysis::{AnalysisOptions, FrequencyReport, Report, analyze};

pub use config::{Config, ConfigLoader, DEFAULT_MAX_INPUT_BYTES, LogLevel};

pub use document::{Document, Paragraph, Sentence, SentenceKind, Token};

pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};

pub use metrics::MetricsSnapshot;
