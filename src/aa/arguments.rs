use crate::error::{Error, Result};
use std::collections::{BTreeSet, HashMap};
use std::fmt::Display;

/// Reads an argument name.
///
/// Names are made of exactly one ASCII letter, surrounding spaces excepted.
/// They are case-insensitive; the returned name is normalized to upper case.
///
/// # Example
///
/// ```
/// # use crustext::aa::read_argument_name;
/// assert_eq!('A', read_argument_name("a").unwrap());
/// assert_eq!('B', read_argument_name(" B ").unwrap());
/// assert!(read_argument_name("AB").is_err());
/// assert!(read_argument_name("1").is_err());
/// ```
pub fn read_argument_name(name: &str) -> Result<char> {
    let mut chars = name.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase()),
        _ => Err(Error::InvalidArgumentName(name.to_string())),
    }
}

/// Reads the names of the arguments attacked by the argument named `attacker`.
///
/// Each letter of the string is the name of an attacked argument.
/// Whitespaces and commas are considered as separators and ignored; any other non-letter character is an error.
/// Repeated names are merged.
pub fn read_attack_string(attacker: char, attacks: &str) -> Result<BTreeSet<char>> {
    attacks
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| {
            if c.is_ascii_alphabetic() {
                Ok(c.to_ascii_uppercase())
            } else {
                Err(Error::InvalidAttackString(attacker, c))
            }
        })
        .collect()
}

/// Handles a single argument.
///
/// An argument has a name, which is unique in its framework, a statement,
/// and the set of names of the arguments it attacks.
/// Each argument also has an identifier which is its index in the framework.
///
/// Arguments are built by [`Framework`](crate::aa::Framework) objects.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    id: usize,
    name: char,
    statement: String,
    attacks: BTreeSet<char>,
}

impl Argument {
    pub(crate) fn new(id: usize, name: char, statement: String, attacks: BTreeSet<char>) -> Self {
        Argument {
            id,
            name,
            statement,
            attacks,
        }
    }

    /// Returns the name of the argument.
    ///
    /// Example
    ///
    /// ```
    /// # use crustext::aa::Argument;
    /// fn describe_argument(a: &Argument) {
    ///     println!("argument {} states \"{}\"", a.name(), a.statement());
    /// }
    /// ```
    pub fn name(&self) -> char {
        self.name
    }

    /// Returns the statement of the argument.
    pub fn statement(&self) -> &str {
        &self.statement
    }

    /// Returns the id of the argument, that is its index in the framework.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the names of the arguments attacked by this one.
    pub fn attacked_names(&self) -> &BTreeSet<char> {
        &self.attacks
    }

    /// Returns `true` iff this argument attacks the argument with the given name.
    pub fn attacks_name(&self, name: char) -> bool {
        self.attacks.contains(&name.to_ascii_uppercase())
    }
}

impl Display for Argument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Handles the set of arguments of a framework.
///
/// Arguments are indexed by their names.
#[derive(Default, Debug, Clone)]
pub struct ArgumentSet {
    arguments: Vec<Argument>,
    name_to_id: HashMap<char, usize>,
}

impl ArgumentSet {
    /// Adds a new argument to this set.
    ///
    /// The id of the new argument is the number of arguments previously in the set.
    /// If an argument with the same name is already defined, an error is returned.
    pub(crate) fn new_argument(
        &mut self,
        name: char,
        statement: String,
        attacks: BTreeSet<char>,
    ) -> Result<()> {
        if self.name_to_id.contains_key(&name) {
            return Err(Error::DuplicateArgument(name));
        }
        let id = self.arguments.len();
        self.arguments
            .push(Argument::new(id, name, statement, attacks));
        self.name_to_id.insert(name, id);
        Ok(())
    }

    /// Returns the number of arguments in the set.
    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    /// Returns `true` iff the set has no argument.
    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// Returns the argument with the given name, if any.
    ///
    /// The name is case-insensitive.
    pub fn get_argument(&self, name: char) -> Option<&Argument> {
        self.name_to_id
            .get(&name.to_ascii_uppercase())
            .map(|i| &self.arguments[*i])
    }

    /// Returns the argument with the corresponding id.
    ///
    /// # Panics
    ///
    /// Panics if no argument has such id.
    pub fn get_argument_by_id(&self, id: usize) -> &Argument {
        &self.arguments[id]
    }

    /// Returns an iterator to the arguments, in the order of their ids.
    pub fn iter(&self) -> impl Iterator<Item = &Argument> + '_ {
        self.arguments.iter()
    }

    /// Returns the names of the arguments, in the order of their ids.
    pub fn names(&self) -> impl Iterator<Item = char> + '_ {
        self.arguments.iter().map(|a| a.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_argument_name() {
        assert_eq!('A', read_argument_name("a").unwrap());
        assert_eq!('Z', read_argument_name("Z").unwrap());
        assert_eq!('C', read_argument_name("  c\t").unwrap());
    }

    #[test]
    fn test_read_argument_name_errors() {
        for name in ["", " ", "ab", "1", "_", "é", "a b"] {
            assert_eq!(
                Error::InvalidArgumentName(name.to_string()),
                read_argument_name(name).unwrap_err()
            );
        }
    }

    #[test]
    fn test_read_attack_string() {
        let attacks = read_attack_string('A', "bC, d b").unwrap();
        assert_eq!(vec!['B', 'C', 'D'], attacks.into_iter().collect::<Vec<char>>());
        assert!(read_attack_string('A', "").unwrap().is_empty());
    }

    #[test]
    fn test_read_attack_string_error() {
        assert_eq!(
            Error::InvalidAttackString('A', '3'),
            read_attack_string('A', "B3").unwrap_err()
        );
    }

    #[test]
    fn test_new_argument() {
        let mut args = ArgumentSet::default();
        assert!(args.is_empty());
        args.new_argument('A', "a statement".to_string(), BTreeSet::from(['B']))
            .unwrap();
        args.new_argument('B', "another one".to_string(), BTreeSet::new())
            .unwrap();
        assert_eq!(2, args.len());
        let a = args.get_argument('a').unwrap();
        assert_eq!(0, a.id());
        assert_eq!("a statement", a.statement());
        assert!(a.attacks_name('b'));
        assert!(!a.attacks_name('A'));
        assert_eq!('B', args.get_argument_by_id(1).name());
        assert!(args.get_argument('C').is_none());
    }

    #[test]
    fn test_duplicate_argument() {
        let mut args = ArgumentSet::default();
        args.new_argument('A', String::new(), BTreeSet::new())
            .unwrap();
        assert_eq!(
            Error::DuplicateArgument('A'),
            args.new_argument('A', String::new(), BTreeSet::new())
                .unwrap_err()
        );
        assert_eq!(1, args.len());
    }

    #[test]
    fn test_names() {
        let mut args = ArgumentSet::default();
        for name in ['C', 'A', 'B'] {
            args.new_argument(name, String::new(), BTreeSet::new())
                .unwrap();
        }
        assert_eq!(vec!['C', 'A', 'B'], args.names().collect::<Vec<char>>());
        assert_eq!("C", args.iter().next().unwrap().to_string());
    }
}
