use super::{Argument, ArgumentSet, FrameworkBuilder};
use crate::error::Result;
use std::fmt::Display;

/// An Abstract Argumentation framework as defined in Dung semantics.
///
/// Frameworks are built by [`FrameworkBuilder`] objects and cannot be modified afterwards.
/// The attack relation is derived from the sets of names attacked by each argument.
#[derive(Default, Debug, Clone)]
pub struct Framework {
    arguments: ArgumentSet,
    attacks: Vec<(usize, usize)>,
    attacks_from: Vec<Vec<usize>>,
    attacks_to: Vec<Vec<usize>>,
}

/// An attack, represented as a couple of two arguments.
///
/// Two attacks are equal iff their attackers and their attacked arguments have the same names.
///
/// Attacks are built by [`Framework`] objects.
#[derive(Debug, Clone, Copy)]
pub struct Attack<'a>(&'a Argument, &'a Argument);

impl<'a> Attack<'a> {
    /// Returns the attacker.
    ///
    /// Example
    ///
    /// ```
    /// # use crustext::aa::Attack;
    /// fn describe_attack(attack: &Attack) {
    ///     println!("{} attacks {}", attack.attacker(), attack.attacked());
    /// }
    /// ```
    pub fn attacker(&self) -> &'a Argument {
        self.0
    }

    /// Returns the attacked argument.
    pub fn attacked(&self) -> &'a Argument {
        self.1
    }

    /// Returns the names of the attacker and the attacked argument.
    pub fn names(&self) -> (char, char) {
        (self.0.name(), self.1.name())
    }
}

impl PartialEq for Attack<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.names() == other.names()
    }
}

impl Eq for Attack<'_> {}

impl Display for Attack<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}->{}", self.0, self.1)
    }
}

impl Framework {
    // Attack endpoints must have been checked by the builder.
    pub(crate) fn new_with_argument_set(arguments: ArgumentSet) -> Self {
        let mut attacks = vec![];
        let mut attacks_from = vec![vec![]; arguments.len()];
        let mut attacks_to = vec![vec![]; arguments.len()];
        for attacker in arguments.iter() {
            for attacked_name in attacker.attacked_names() {
                if let Some(attacked) = arguments.get_argument(*attacked_name) {
                    attacks_from[attacker.id()].push(attacks.len());
                    attacks_to[attacked.id()].push(attacks.len());
                    attacks.push((attacker.id(), attacked.id()));
                }
            }
        }
        Framework {
            arguments,
            attacks,
            attacks_from,
            attacks_to,
        }
    }

    /// Returns the argument set of the framework.
    pub fn argument_set(&self) -> &ArgumentSet {
        &self.arguments
    }

    /// Returns the argument with the given name, if any.
    ///
    /// The name is case-insensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustext::aa::FrameworkBuilder;
    /// let mut builder = FrameworkBuilder::default();
    /// builder.new_argument("a", "birds fly", "b").unwrap();
    /// builder.new_argument("b", "penguins are birds", "").unwrap();
    /// let framework = builder.build().unwrap();
    /// assert_eq!("birds fly", framework.argument('a').unwrap().statement());
    /// assert!(framework.argument('c').is_none());
    /// ```
    pub fn argument(&self, name: char) -> Option<&Argument> {
        self.arguments.get_argument(name)
    }

    /// Returns the arguments attacking the argument with the given name.
    ///
    /// If there is no such argument, the returned vector is empty.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustext::aa::FrameworkBuilder;
    /// let mut builder = FrameworkBuilder::default();
    /// builder.new_argument("a", "", "b").unwrap();
    /// builder.new_argument("b", "", "").unwrap();
    /// let framework = builder.build().unwrap();
    /// assert_eq!('A', framework.attackers('B')[0].name());
    /// assert!(framework.attackers('A').is_empty());
    /// ```
    pub fn attackers(&self, name: char) -> Vec<&Argument> {
        self.argument(name)
            .map(|a| self.iter_attacks_to(a).map(|att| att.attacker()).collect())
            .unwrap_or_default()
    }

    /// Returns the arguments attacked by the argument with the given name.
    ///
    /// If there is no such argument, the returned vector is empty.
    pub fn attacks(&self, name: char) -> Vec<&Argument> {
        self.argument(name)
            .map(|a| self.iter_attacks_from(a).map(|att| att.attacked()).collect())
            .unwrap_or_default()
    }

    /// Returns `true` iff this framework has an argument with the same name than the given one.
    pub fn contains_argument(&self, argument: &Argument) -> bool {
        self.argument(argument.name()).is_some()
    }

    /// Returns `true` iff this framework has an attack between arguments with the same names than the given one.
    pub fn contains_attack(&self, attack: &Attack) -> bool {
        self.argument(attack.attacker().name())
            .is_some_and(|a| a.attacks_name(attack.attacked().name()))
    }

    /// Returns `true` iff all the arguments and attacks of `other` belong to this framework.
    ///
    /// A framework is an expansion of itself.
    pub fn is_expansion_of(&self, other: &Framework) -> bool {
        other.arguments.iter().all(|a| self.contains_argument(a))
            && other.iter_attacks().all(|att| self.contains_attack(&att))
    }

    /// Builds a new framework made of the arguments of this one and new arguments.
    ///
    /// The new arguments are given by their name, statement, and attacked names, as in [`FrameworkBuilder::new_argument`].
    /// They may attack the arguments of this framework, but the attacks of the arguments already present are left untouched.
    /// If a new argument has the same name than an existing one, an error is returned.
    ///
    /// This framework is not modified.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustext::aa::FrameworkBuilder;
    /// let mut builder = FrameworkBuilder::default();
    /// builder.new_argument("a", "", "").unwrap();
    /// let framework = builder.build().unwrap();
    /// let expanded = framework.expansion([("b", "", "a")]).unwrap();
    /// assert_eq!(1, framework.n_arguments());
    /// assert_eq!(2, expanded.n_arguments());
    /// assert!(expanded.is_expansion_of(&framework));
    /// ```
    pub fn expansion<'s, I>(&self, new_arguments: I) -> Result<Framework>
    where
        I: IntoIterator<Item = (&'s str, &'s str, &'s str)>,
    {
        let mut builder = FrameworkBuilder::from_framework(self);
        for (name, statement, attacks) in new_arguments {
            builder.new_argument(name, statement, attacks)?;
        }
        builder.build()
    }

    /// Provides an iterator to the arguments.
    pub fn iter_arguments(&self) -> impl Iterator<Item = &Argument> + '_ {
        self.arguments.iter()
    }

    /// Provides an iterator to the attacks.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustext::aa::FrameworkBuilder;
    /// let mut builder = FrameworkBuilder::default();
    /// builder.new_argument("a", "", "ab").unwrap();
    /// builder.new_argument("b", "", "").unwrap();
    /// let framework = builder.build().unwrap();
    /// assert_eq!(2, framework.iter_attacks().count());
    /// ```
    pub fn iter_attacks(&self) -> impl Iterator<Item = Attack<'_>> + '_ {
        self.attacks.iter().map(|(a, b)| self.attack_by_ids(*a, *b))
    }

    /// Provides an iterator to the attacks that have the given argument as attacker.
    pub fn iter_attacks_from(&self, arg: &Argument) -> impl Iterator<Item = Attack<'_>> + '_ {
        self.attacks_from[arg.id()].iter().map(|i| {
            let (a, b) = self.attacks[*i];
            self.attack_by_ids(a, b)
        })
    }

    /// Provides an iterator to the attacks that have the given argument as attacked.
    pub fn iter_attacks_to(&self, arg: &Argument) -> impl Iterator<Item = Attack<'_>> + '_ {
        self.attacks_to[arg.id()].iter().map(|i| {
            let (a, b) = self.attacks[*i];
            self.attack_by_ids(a, b)
        })
    }

    fn attack_by_ids(&self, attacker_id: usize, attacked_id: usize) -> Attack<'_> {
        Attack(
            self.arguments.get_argument_by_id(attacker_id),
            self.arguments.get_argument_by_id(attacked_id),
        )
    }

    /// Returns the number of arguments in this framework.
    pub fn n_arguments(&self) -> usize {
        self.arguments.len()
    }

    /// Returns the number of attacks in this framework.
    pub fn n_attacks(&self) -> usize {
        self.attacks.len()
    }
}
