//! This module contains the main material used to define Abstract Argumentation frameworks and their extensions.

mod arguments;
pub use arguments::read_argument_name;
pub use arguments::read_attack_string;
pub use arguments::Argument;
pub use arguments::ArgumentSet;

mod extension;
pub use extension::Extension;

mod framework;
pub use framework::Attack;
pub use framework::Framework;

pub(crate) mod framework_builder;
pub use framework_builder::FrameworkBuilder;

mod problem;
pub use problem::read_problem_string;
pub use problem::Query;
pub use problem::Semantics;
