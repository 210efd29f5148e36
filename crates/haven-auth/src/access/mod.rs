//! Access control evaluation.
//!
//! The evaluator is the single place where role and ownership rules
//! live. Operation guards call into it; nothing else hand-rolls
//! permission checks.

pub mod actor;
pub mod evaluator;

pub use actor::Actor;
pub use evaluator::AccessEvaluator;
