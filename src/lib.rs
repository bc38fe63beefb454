//! Crustext is an extension enumerator for Dung's abstract argumentation frameworks.
//!
//! Frameworks are made of arguments named by single letters, each one coming with a statement and the set of arguments it attacks.
//! The [`SemanticsEngine`](semantics::SemanticsEngine) computes their conflict-free sets
//! and their admissible, complete, preferred, stable and grounded extensions.

#![warn(missing_docs)]

pub mod aa;

mod error;
pub use error::Error;
pub use error::ErrorKind;
pub use error::Result;

pub mod io;

pub mod semantics;

pub mod utils;
