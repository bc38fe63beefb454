//! Computation of the extensions of Abstract Argumentation frameworks.
//!
//! The [`SemanticsEngine`] enumerates the extensions of a framework for the conflict-free, admissible, complete, preferred, stable and grounded semantics.
//! It may report its reasoning steps as [`NarrationEvent`]s.

mod acceptance;

mod config;
pub use config::EngineConfig;
pub use config::DEFAULT_MAX_ARGUMENTS;
pub use config::MAX_ENUMERABLE_ARGUMENTS;

mod engine;
pub use engine::Evaluation;
pub use engine::SemanticsEngine;

mod narration;
pub use narration::Emphasis;
pub use narration::Highlight;
pub use narration::NarrationEvent;
pub use narration::NarrationListener;
