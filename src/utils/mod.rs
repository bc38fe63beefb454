//! Miscellaneous components used in the library.

mod grounded_fixpoint;
pub use grounded_fixpoint::grounded_fixpoint;
