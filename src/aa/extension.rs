use super::{Argument, Attack, Framework};
use crate::error::{Error, Result};
use std::collections::BTreeSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A set of arguments of a framework.
///
/// Extensions are values: operations that add arguments return new extensions.
/// Two extensions are equal iff their arguments have the same names.
///
/// This struct provides the predicates used to check the semantics of a set of arguments.
///
/// # Example
///
/// ```
/// # use crustext::aa::{Extension, FrameworkBuilder};
/// let mut builder = FrameworkBuilder::default();
/// builder.new_argument("a", "", "b").unwrap();
/// builder.new_argument("b", "", "").unwrap();
/// let af = builder.build().unwrap();
/// let ext = Extension::new(&af, &['A']).unwrap();
/// assert!(ext.is_admissible());
/// assert!(ext.is_stable());
/// assert!(!ext.with_argument('B').unwrap().is_conflict_free());
/// ```
#[derive(Clone)]
pub struct Extension<'a> {
    af: &'a Framework,
    members: BTreeSet<usize>,
}

impl<'a> Extension<'a> {
    /// Builds the empty extension of a framework.
    pub fn empty(af: &'a Framework) -> Self {
        Extension {
            af,
            members: BTreeSet::new(),
        }
    }

    /// Builds an extension given the names of its arguments.
    ///
    /// An error is returned if one of the names does not belong to the framework.
    pub fn new(af: &'a Framework, names: &[char]) -> Result<Self> {
        let members = names
            .iter()
            .map(|n| {
                af.argument(*n)
                    .map(|a| a.id())
                    .ok_or(Error::ForeignArgument(n.to_ascii_uppercase()))
            })
            .collect::<Result<BTreeSet<usize>>>()?;
        Ok(Extension { af, members })
    }

    pub(crate) fn from_ids<I>(af: &'a Framework, ids: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Extension {
            af,
            members: ids.into_iter().collect(),
        }
    }

    /// Returns a new extension made of the arguments of this one and the argument with the given name.
    ///
    /// An error is returned if the framework has no such argument.
    pub fn with_argument(&self, name: char) -> Result<Self> {
        let arg = self
            .af
            .argument(name)
            .ok_or(Error::ForeignArgument(name.to_ascii_uppercase()))?;
        let mut members = self.members.clone();
        members.insert(arg.id());
        Ok(Extension {
            af: self.af,
            members,
        })
    }

    /// Returns the framework this extension is built on.
    pub fn framework(&self) -> &'a Framework {
        self.af
    }

    /// Returns the number of arguments in this extension.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` iff this extension has no argument.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` iff the argument with the given name belongs to this extension.
    pub fn contains(&self, name: char) -> bool {
        self.af
            .argument(name)
            .is_some_and(|a| self.members.contains(&a.id()))
    }

    /// Provides an iterator to the arguments of this extension, in the order of their ids.
    pub fn iter(&self) -> impl Iterator<Item = &'a Argument> + '_ {
        let af = self.af;
        self.members
            .iter()
            .map(move |id| af.argument_set().get_argument_by_id(*id))
    }

    /// Returns the names of the arguments of this extension.
    pub fn names(&self) -> BTreeSet<char> {
        self.iter().map(|a| a.name()).collect()
    }

    /// Returns the arguments of the framework that do not belong to this extension.
    pub fn outsiders(&self) -> impl Iterator<Item = &'a Argument> + '_ {
        self.af
            .iter_arguments()
            .filter(|a| !self.members.contains(&a.id()))
    }

    /// Returns `true` iff no argument of this extension attacks an argument of this extension.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustext::aa::{Extension, FrameworkBuilder};
    /// let mut builder = FrameworkBuilder::default();
    /// builder.new_argument("a", "", "a").unwrap();
    /// builder.new_argument("b", "", "").unwrap();
    /// let af = builder.build().unwrap();
    /// assert!(Extension::new(&af, &['B']).unwrap().is_conflict_free());
    /// assert!(!Extension::new(&af, &['A']).unwrap().is_conflict_free());
    /// ```
    pub fn is_conflict_free(&self) -> bool {
        self.iter().all(|a| {
            self.af
                .iter_attacks_from(a)
                .all(|att| !self.members.contains(&att.attacked().id()))
        })
    }

    /// Returns the attacks whose both endpoints belong to this extension.
    pub fn conflicts(&self) -> Vec<Attack<'a>> {
        let af = self.af;
        self.iter()
            .flat_map(|a| af.iter_attacks_from(a))
            .filter(|att| self.members.contains(&att.attacked().id()))
            .collect()
    }

    /// Returns the names of the arguments attacked by at least one argument of this extension.
    pub fn attacked_names(&self) -> BTreeSet<char> {
        self.iter()
            .flat_map(|a| a.attacked_names().iter().copied())
            .collect()
    }

    /// Returns `true` iff this extension defends the argument with the given name,
    /// that is iff each attacker of this argument is attacked by an argument of this extension.
    ///
    /// An argument without attackers is defended by any extension.
    /// If the framework has no such argument, `false` is returned.
    pub fn defends(&self, name: char) -> bool {
        match self.af.argument(name) {
            Some(arg) => {
                let attacked = self.attacked_names();
                self.af
                    .iter_attacks_to(arg)
                    .all(|att| attacked.contains(&att.attacker().name()))
            }
            None => false,
        }
    }

    /// Returns the attacks against arguments of this extension whose attackers are not attacked by this extension.
    pub fn undefended_attacks(&self) -> Vec<Attack<'a>> {
        let af = self.af;
        let attacked = self.attacked_names();
        self.iter()
            .flat_map(|a| af.iter_attacks_to(a))
            .filter(|att| !attacked.contains(&att.attacker().name()))
            .collect()
    }

    /// Returns `true` iff this extension is conflict-free and defends all its arguments.
    pub fn is_admissible(&self) -> bool {
        self.is_conflict_free() && self.undefended_attacks().is_empty()
    }

    /// Returns the arguments that do not belong to this extension but are defended by it.
    ///
    /// An admissible extension is complete iff this set is empty.
    pub fn defended_outsiders(&self) -> Vec<&'a Argument> {
        self.outsiders().filter(|a| self.defends(a.name())).collect()
    }

    /// Returns `true` iff this extension is conflict-free and attacks exactly the arguments that do not belong to it.
    pub fn is_stable(&self) -> bool {
        self.is_conflict_free()
            && self.attacked_names() == self.outsiders().map(|a| a.name()).collect::<BTreeSet<char>>()
    }

    /// Returns `true` iff no other admissible extension among the candidates is a strict superset of this one.
    pub fn is_preferred(&self, candidates: &[Extension]) -> bool {
        !candidates
            .iter()
            .any(|c| self.is_strict_subset_of(c) && c.is_admissible())
    }

    /// Returns `true` iff all the arguments of this extension belong to the other one.
    pub fn is_subset_of(&self, other: &Extension) -> bool {
        if std::ptr::eq(self.af, other.af) {
            self.members.is_subset(&other.members)
        } else {
            self.names().is_subset(&other.names())
        }
    }

    /// Returns `true` iff this extension is a subset of the other one and the other one has more arguments.
    pub fn is_strict_subset_of(&self, other: &Extension) -> bool {
        self.len() < other.len() && self.is_subset_of(other)
    }

    /// Returns the extension made of the arguments belonging to both this extension and the other one.
    ///
    /// The returned extension is built on the framework of this one.
    pub fn intersection(&self, other: &Extension) -> Extension<'a> {
        if std::ptr::eq(self.af, other.af) {
            return Extension::from_ids(self.af, self.members.intersection(&other.members).copied());
        }
        let other_names = other.names();
        Extension::from_ids(
            self.af,
            self.iter()
                .filter(|a| other_names.contains(&a.name()))
                .map(|a| a.id()),
        )
    }
}

impl PartialEq for Extension<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.names() == other.names()
    }
}

impl Eq for Extension<'_> {}

impl Hash for Extension<'_> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.names().hash(state)
    }
}

impl Display for Extension<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names().iter().map(|c| c.to_string()).collect::<Vec<String>>();
        write!(f, "{{{}}}", names.join(","))
    }
}

impl Debug for Extension<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Extension{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::framework_builder::framework_from_attacks;

    fn ext<'a>(af: &'a Framework, names: &str) -> Extension<'a> {
        Extension::new(af, &names.chars().collect::<Vec<char>>()).unwrap()
    }

    #[test]
    fn test_new_foreign_argument() {
        let af = framework_from_attacks(&[("a", "")]);
        assert_eq!(
            Error::ForeignArgument('B'),
            Extension::new(&af, &['A', 'B']).unwrap_err()
        );
        assert_eq!(
            Error::ForeignArgument('B'),
            Extension::new(&af, &['a', 'b']).unwrap_err()
        );
    }

    #[test]
    fn test_with_argument_is_a_new_value() {
        let af = framework_from_attacks(&[("a", ""), ("b", "")]);
        let base = Extension::empty(&af);
        let with_a = base.with_argument('a').unwrap();
        let with_b = base.with_argument('b').unwrap();
        assert!(base.is_empty());
        assert_eq!(ext(&af, "A"), with_a);
        assert_eq!(ext(&af, "B"), with_b);
        assert_eq!(
            Error::ForeignArgument('C'),
            base.with_argument('c').unwrap_err()
        );
    }

    #[test]
    fn test_equality_ignores_order_and_framework() {
        let af1 = framework_from_attacks(&[("a", ""), ("b", "")]);
        let af2 = framework_from_attacks(&[("b", "a"), ("a", "")]);
        assert_eq!(ext(&af1, "AB"), ext(&af2, "BA"));
        assert_ne!(ext(&af1, "A"), ext(&af2, "B"));
    }

    #[test]
    fn test_display() {
        let af = framework_from_attacks(&[("a", ""), ("b", ""), ("c", "")]);
        assert_eq!("{A,C}", ext(&af, "CA").to_string());
        assert_eq!("{}", Extension::empty(&af).to_string());
        assert_eq!("Extension{B}", format!("{:?}", ext(&af, "B")));
    }

    #[test]
    fn test_conflict_free() {
        let af = framework_from_attacks(&[("a", "b"), ("b", ""), ("c", "")]);
        assert!(Extension::empty(&af).is_conflict_free());
        assert!(ext(&af, "AC").is_conflict_free());
        assert!(ext(&af, "BC").is_conflict_free());
        assert!(!ext(&af, "AB").is_conflict_free());
        assert_eq!(1, ext(&af, "ABC").conflicts().len());
        assert!(ext(&af, "AC").conflicts().is_empty());
    }

    #[test]
    fn test_attacked_names() {
        let af = framework_from_attacks(&[("a", "bc"), ("b", "c"), ("c", "")]);
        assert_eq!(BTreeSet::from(['B', 'C']), ext(&af, "AB").attacked_names());
        assert!(ext(&af, "C").attacked_names().is_empty());
    }

    #[test]
    fn test_admissible() {
        let af = framework_from_attacks(&[("a", "b"), ("b", "c"), ("c", "")]);
        assert!(Extension::empty(&af).is_admissible());
        assert!(ext(&af, "A").is_admissible());
        assert!(ext(&af, "AC").is_admissible());
        assert!(!ext(&af, "C").is_admissible());
        assert!(!ext(&af, "B").is_admissible());
        assert_eq!(1, ext(&af, "C").undefended_attacks().len());
    }

    #[test]
    fn test_defends() {
        let af = framework_from_attacks(&[("a", "b"), ("b", "c"), ("c", "")]);
        let a = ext(&af, "A");
        assert!(a.defends('A'));
        assert!(a.defends('C'));
        assert!(!a.defends('B'));
        assert!(!a.defends('Z'));
        assert_eq!(
            vec!['C'],
            a.defended_outsiders()
                .iter()
                .map(|a| a.name())
                .collect::<Vec<char>>()
        );
    }

    #[test]
    fn test_stable() {
        let af = framework_from_attacks(&[("a", "b"), ("b", "a"), ("c", "")]);
        assert!(ext(&af, "AC").is_stable());
        assert!(ext(&af, "BC").is_stable());
        assert!(!ext(&af, "A").is_stable());
        assert!(!ext(&af, "C").is_stable());
        assert!(!ext(&af, "ABC").is_stable());
    }

    #[test]
    fn test_stable_self_attack() {
        let af = framework_from_attacks(&[("a", "a"), ("b", "")]);
        assert!(!ext(&af, "B").is_stable());
        assert!(!ext(&af, "AB").is_stable());
    }

    #[test]
    fn test_subsets() {
        let af = framework_from_attacks(&[("a", ""), ("b", "")]);
        assert!(ext(&af, "A").is_subset_of(&ext(&af, "AB")));
        assert!(ext(&af, "A").is_strict_subset_of(&ext(&af, "AB")));
        assert!(ext(&af, "A").is_subset_of(&ext(&af, "A")));
        assert!(!ext(&af, "A").is_strict_subset_of(&ext(&af, "A")));
        assert!(!ext(&af, "AB").is_subset_of(&ext(&af, "B")));
    }

    #[test]
    fn test_subsets_across_frameworks() {
        let af1 = framework_from_attacks(&[("a", ""), ("b", "")]);
        let af2 = framework_from_attacks(&[("b", ""), ("a", ""), ("c", "")]);
        assert!(ext(&af1, "A").is_strict_subset_of(&ext(&af2, "AC")));
        assert!(!ext(&af1, "AB").is_subset_of(&ext(&af2, "AC")));
        assert_eq!(ext(&af1, "A"), ext(&af1, "AB").intersection(&ext(&af2, "AC")));
    }

    #[test]
    fn test_preferred() {
        let af = framework_from_attacks(&[("a", "b"), ("b", "a"), ("c", "")]);
        let candidates = vec![
            Extension::empty(&af),
            ext(&af, "A"),
            ext(&af, "B"),
            ext(&af, "C"),
            ext(&af, "AC"),
            ext(&af, "BC"),
        ];
        assert!(ext(&af, "AC").is_preferred(&candidates));
        assert!(ext(&af, "BC").is_preferred(&candidates));
        assert!(!ext(&af, "A").is_preferred(&candidates));
        assert!(!Extension::empty(&af).is_preferred(&candidates));
    }

    #[test]
    fn test_preferred_ignores_non_admissible_supersets() {
        let af = framework_from_attacks(&[("a", ""), ("b", "b")]);
        let candidates = vec![ext(&af, "A"), ext(&af, "AB")];
        assert!(ext(&af, "A").is_preferred(&candidates));
    }

    #[test]
    fn test_intersection() {
        let af = framework_from_attacks(&[("a", ""), ("b", ""), ("c", "")]);
        assert_eq!(ext(&af, "B"), ext(&af, "AB").intersection(&ext(&af, "BC")));
        assert!(ext(&af, "A").intersection(&ext(&af, "C")).is_empty());
    }
}
