pub mod classifiers;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod persistence;
pub mod streams;
pub mod tasks;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;
pub mod ui;
pub mod utils;

pub use error::{BayesError, Result};
