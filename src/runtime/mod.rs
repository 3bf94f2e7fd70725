//! Runtime execution for calclang programs

mod environment;
mod evaluator;
mod value;

pub use environment::Environment;
pub use evaluator::{evaluate, Evaluator};
pub use value::Value;
