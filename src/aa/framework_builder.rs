use super::{read_argument_name, read_attack_string, ArgumentSet, Framework};
use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// An object used to build [`Framework`] objects.
///
/// Arguments are declared with their name, statement and attacks.
/// Attacks may refer to arguments declared later; their endpoints are checked when the framework is built.
///
/// # Example
///
/// ```
/// # use crustext::aa::FrameworkBuilder;
/// let mut builder = FrameworkBuilder::default();
/// builder.new_argument("a", "the sky is blue", "b").unwrap();
/// builder.new_argument("b", "the sky is grey", "").unwrap();
/// builder.new_attack_from_label("ba").unwrap();
/// let framework = builder.build().unwrap();
/// assert_eq!(2, framework.n_arguments());
/// assert_eq!(2, framework.n_attacks());
/// ```
#[derive(Default)]
pub struct FrameworkBuilder {
    arguments: Vec<(char, String, BTreeSet<char>)>,
}

impl FrameworkBuilder {
    /// Builds a builder initialized with the arguments of an existing framework.
    pub fn from_framework(framework: &Framework) -> Self {
        FrameworkBuilder {
            arguments: framework
                .iter_arguments()
                .map(|a| {
                    (
                        a.name(),
                        a.statement().to_string(),
                        a.attacked_names().clone(),
                    )
                })
                .collect(),
        }
    }

    /// Declares a new argument.
    ///
    /// The name must be made of exactly one letter; it is case-insensitive.
    /// The attacks are given as a string containing the names of the attacked arguments (see [`read_attack_string`]).
    ///
    /// An error is returned if the name or the attack string is malformed, or if an argument with the same name is already declared.
    pub fn new_argument(&mut self, name: &str, statement: &str, attacks: &str) -> Result<()> {
        let name = read_argument_name(name)?;
        if self.position(name).is_some() {
            return Err(Error::DuplicateArgument(name));
        }
        let attacks = read_attack_string(name, attacks)?;
        self.arguments
            .push((name, statement.trim().to_string(), attacks));
        Ok(())
    }

    /// Adds an attack between two declared arguments.
    ///
    /// The attacker must already be declared.
    /// Since the attacked argument may be declared later, its existence is checked by [`build`](Self::build).
    pub fn new_attack(&mut self, from: &str, to: &str) -> Result<()> {
        let from = read_argument_name(from)?;
        let to = read_argument_name(to)?;
        match self.position(from) {
            Some(i) => {
                self.arguments[i].2.insert(to);
                Ok(())
            }
            None => Err(Error::UnknownAttackEndpoint(from, to, from)),
        }
    }

    /// Adds an attack given by a directional edge label.
    ///
    /// The label must be made of exactly two letters, the first one being the name of the attacker
    /// and the second one the name of the attacked argument.
    pub fn new_attack_from_label(&mut self, label: &str) -> Result<()> {
        let trimmed = label.trim();
        let letters = trimmed.chars().collect::<Vec<char>>();
        if letters.len() != 2 || letters.iter().any(|c| !c.is_ascii_alphabetic()) {
            return Err(Error::InvalidEdgeLabel(label.to_string()));
        }
        self.new_attack(&trimmed[0..1], &trimmed[1..2])
    }

    /// Returns the number of arguments declared so far.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of distinct attacks declared so far.
    pub fn n_attacks(&self) -> usize {
        self.arguments.iter().map(|(_, _, attacks)| attacks.len()).sum()
    }

    /// Builds the framework.
    ///
    /// An error is returned if an attack refers to an argument that was never declared.
    pub fn build(self) -> Result<Framework> {
        let mut arguments = ArgumentSet::default();
        for (name, _, attacks) in self.arguments.iter() {
            if let Some(unknown) = attacks.iter().find(|a| self.position(**a).is_none()) {
                return Err(Error::UnknownAttackEndpoint(*name, *unknown, *unknown));
            }
        }
        for (name, statement, attacks) in self.arguments {
            arguments.new_argument(name, statement, attacks)?;
        }
        Ok(Framework::new_with_argument_set(arguments))
    }

    fn position(&self, name: char) -> Option<usize> {
        self.arguments.iter().position(|(n, _, _)| *n == name)
    }
}

// Builds a framework from couples of argument names and attack strings.
#[cfg(test)]
pub(crate) fn framework_from_attacks(arguments: &[(&str, &str)]) -> Framework {
    let mut builder = FrameworkBuilder::default();
    for (name, attacks) in arguments {
        builder.new_argument(name, "", attacks).unwrap();
    }
    builder.build().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        let mut builder = FrameworkBuilder::default();
        builder.new_argument("a", " statement ", "b").unwrap();
        builder.new_argument("B", "", "a").unwrap();
        assert_eq!(2, builder.n_arguments());
        let af = builder.build().unwrap();
        assert_eq!("statement", af.argument('A').unwrap().statement());
        assert_eq!(2, af.n_attacks());
    }

    #[test]
    fn test_forward_reference() {
        let mut builder = FrameworkBuilder::default();
        builder.new_argument("a", "", "b").unwrap();
        builder.new_argument("b", "", "").unwrap();
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_unknown_attacked() {
        let mut builder = FrameworkBuilder::default();
        builder.new_argument("a", "", "bc").unwrap();
        builder.new_argument("b", "", "").unwrap();
        assert_eq!(
            Error::UnknownAttackEndpoint('A', 'C', 'C'),
            builder.build().unwrap_err()
        );
    }

    #[test]
    fn test_invalid_name() {
        let mut builder = FrameworkBuilder::default();
        assert_eq!(
            Error::InvalidArgumentName("ab".to_string()),
            builder.new_argument("ab", "", "").unwrap_err()
        );
        assert_eq!(0, builder.n_arguments());
    }

    #[test]
    fn test_duplicate_name() {
        let mut builder = FrameworkBuilder::default();
        builder.new_argument("a", "", "").unwrap();
        assert_eq!(
            Error::DuplicateArgument('A'),
            builder.new_argument("A", "", "").unwrap_err()
        );
    }

    #[test]
    fn test_new_attack() {
        let mut builder = FrameworkBuilder::default();
        builder.new_argument("a", "", "").unwrap();
        builder.new_argument("b", "", "").unwrap();
        builder.new_attack("a", "b").unwrap();
        builder.new_attack("a", "b").unwrap();
        let af = builder.build().unwrap();
        assert_eq!(1, af.n_attacks());
        assert!(af.argument('a').unwrap().attacks_name('b'));
    }

    #[test]
    fn test_new_attack_unknown_attacker() {
        let mut builder = FrameworkBuilder::default();
        builder.new_argument("a", "", "").unwrap();
        assert_eq!(
            Error::UnknownAttackEndpoint('Z', 'A', 'Z'),
            builder.new_attack("z", "a").unwrap_err()
        );
    }

    #[test]
    fn test_edge_labels() {
        let mut builder = FrameworkBuilder::default();
        builder.new_argument("a", "", "").unwrap();
        builder.new_argument("b", "", "").unwrap();
        builder.new_attack_from_label(" ab ").unwrap();
        builder.new_attack_from_label("BB").unwrap();
        for label in ["a", "abc", "a1", "", "a b"] {
            assert_eq!(
                Error::InvalidEdgeLabel(label.to_string()),
                builder.new_attack_from_label(label).unwrap_err()
            );
        }
        let af = builder.build().unwrap();
        assert_eq!(2, af.n_attacks());
    }

    #[test]
    fn test_from_framework() {
        let af = framework_from_attacks(&[("a", "b"), ("b", "")]);
        let builder = FrameworkBuilder::from_framework(&af);
        assert_eq!(2, builder.n_arguments());
        let rebuilt = builder.build().unwrap();
        assert!(rebuilt.is_expansion_of(&af));
        assert!(af.is_expansion_of(&rebuilt));
    }
}
