pub mod config;
pub mod error;
pub mod eval;
pub mod ranking;
pub mod similarity;

pub use config::EvalConfig;
pub use error::{RankevalError, Result};
pub use eval::{evaluate, EvalCase, EvalReport};
