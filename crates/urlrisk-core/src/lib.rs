//! Explainable heuristic risk scoring for URLs.
//!
//! ```no_run
//! # async fn demo() -> Result<(), urlrisk_core::EvaluateError> {
//! let engine = urlrisk_core::Engine::default();
//! let result = engine.evaluate("http://192.168.1.1/login").await?;
//! println!("{} (score {})", result.verdict, result.score);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod logging;

pub mod checks;
pub mod engine;
pub mod error;
pub mod score;
pub mod url_model;
pub mod verdict;

pub use checks::{CheckId, CheckKind, CheckResult, Heuristics};
pub use engine::{Engine, EvaluationResult};
pub use error::EvaluateError;
pub use verdict::{classify, Thresholds, Verdict};
