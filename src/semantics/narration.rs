use crate::aa::{Attack, Extension};
use std::collections::BTreeMap;
use std::fmt::Display;

/// The way an element of a framework is highlighted in a narration event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    /// The element is under consideration
    Focus,
    /// The element is part of an accepted candidate
    Accepted,
    /// The element is part of a rejected candidate
    Rejected,
    /// The element is involved in an attack causing a rejection
    Attacker,
    /// The element defends a candidate
    Defender,
}

/// The elements of a framework highlighted by a narration event.
///
/// Nodes are identified by argument names, edges by couples (attacker, attacked).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Highlight {
    nodes: BTreeMap<char, Emphasis>,
    edges: BTreeMap<(char, char), Emphasis>,
}

impl Highlight {
    /// Highlights an argument.
    pub fn with_node(mut self, name: char, emphasis: Emphasis) -> Self {
        self.nodes.insert(name, emphasis);
        self
    }

    /// Highlights all the arguments of an extension.
    pub fn with_extension(mut self, extension: &Extension, emphasis: Emphasis) -> Self {
        extension.iter().for_each(|a| {
            self.nodes.insert(a.name(), emphasis);
        });
        self
    }

    /// Highlights an attack.
    pub fn with_edge(mut self, attack: &Attack, emphasis: Emphasis) -> Self {
        self.edges.insert(attack.names(), emphasis);
        self
    }

    /// Highlights some attacks.
    pub fn with_edges(mut self, attacks: &[Attack], emphasis: Emphasis) -> Self {
        attacks.iter().for_each(|att| {
            self.edges.insert(att.names(), emphasis);
        });
        self
    }

    /// Returns the highlighted arguments.
    pub fn nodes(&self) -> &BTreeMap<char, Emphasis> {
        &self.nodes
    }

    /// Returns the highlighted attacks.
    pub fn edges(&self) -> &BTreeMap<(char, char), Emphasis> {
        &self.edges
    }

    /// Returns `true` iff nothing is highlighted.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// A reasoning step reported by a [`SemanticsEngine`](crate::semantics::SemanticsEngine).
///
/// Events are made of a message and of the framework elements a presentation layer may highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationEvent {
    message: String,
    highlight: Highlight,
}

impl NarrationEvent {
    /// Builds an event without highlighted elements.
    pub fn new<S: Into<String>>(message: S) -> Self {
        NarrationEvent {
            message: message.into(),
            highlight: Highlight::default(),
        }
    }

    /// Sets the highlighted elements of this event.
    pub fn with_highlight(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    /// Returns the message of this event.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the highlighted elements of this event.
    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }
}

impl Display for NarrationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// A trait for objects receiving the narration events of an engine as soon as they are produced.
pub trait NarrationListener {
    /// Called for each narration event.
    fn on_event(&self, event: &NarrationEvent);
}
