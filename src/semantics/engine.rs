use super::{Emphasis, EngineConfig, Highlight, NarrationEvent, NarrationListener};
use crate::aa::{Extension, Framework, Semantics};
use crate::error::{Error, Result};
use log::{debug, trace};
use std::collections::HashMap;

/// The result of a computation, together with the narration events produced while computing it.
///
/// Narration events are only recorded if the engine was configured to do so.
#[derive(Debug, Clone)]
pub struct Evaluation<T> {
    result: T,
    narration: Vec<NarrationEvent>,
}

impl<T> Evaluation<T> {
    /// Returns the result of the computation.
    pub fn result(&self) -> &T {
        &self.result
    }

    /// Returns the narration events produced by the computation.
    pub fn narration(&self) -> &[NarrationEvent] {
        &self.narration
    }

    /// Consumes this object, returning the result of the computation.
    pub fn into_result(self) -> T {
        self.result
    }

    /// Consumes this object, returning both the result and the narration events.
    pub fn into_parts(self) -> (T, Vec<NarrationEvent>) {
        (self.result, self.narration)
    }
}

/// An engine computing the extensions of a framework for the conflict-free, admissible, complete, preferred, stable and grounded semantics.
///
/// Extensions are computed by enumerating the subsets of arguments, which takes a time exponential in the number of arguments.
/// This engine is intended for small frameworks;
/// requests on frameworks larger than [`EngineConfig::max_arguments`] fail with an [`Error::TooManyArguments`] error.
///
/// Each semantics is computed from another one:
/// the admissible extensions and the stable extensions are filtered from the conflict-free sets,
/// the complete and preferred extensions from the admissible ones,
/// and the grounded extension is computed from the complete ones.
/// Each computed family of extensions is stored in a cache.
/// When a method is called with `use_previous` set to `true`, the family it is computed from is taken from this cache if it is present.
/// The cache is never invalidated.
///
/// Families with no extension are not errors: an empty vector is returned.
///
/// # Example
///
/// ```
/// # use crustext::aa::FrameworkBuilder;
/// # use crustext::semantics::SemanticsEngine;
/// let mut builder = FrameworkBuilder::default();
/// builder.new_argument("a", "", "b").unwrap();
/// builder.new_argument("b", "", "").unwrap();
/// let af = builder.build().unwrap();
/// let mut engine = SemanticsEngine::new(&af);
/// let preferred = engine.compute_preferred_extensions(false).unwrap().into_result();
/// assert_eq!(1, preferred.len());
/// assert!(preferred[0].contains('A'));
/// let grounded = engine.compute_grounded_extension(true).unwrap().into_result();
/// assert_eq!(preferred[0], grounded);
/// ```
pub struct SemanticsEngine<'a> {
    af: &'a Framework,
    config: EngineConfig,
    cache: HashMap<Semantics, Vec<Extension<'a>>>,
    listeners: Vec<Box<dyn NarrationListener + 'a>>,
    events: Vec<NarrationEvent>,
}

impl<'a> SemanticsEngine<'a> {
    /// Builds a new engine for a framework, using the default configuration.
    pub fn new(af: &'a Framework) -> Self {
        Self::new_with_config(af, EngineConfig::default())
    }

    /// Builds a new engine for a framework.
    pub fn new_with_config(af: &'a Framework, config: EngineConfig) -> Self {
        SemanticsEngine {
            af,
            config,
            cache: HashMap::new(),
            listeners: vec![],
            events: vec![],
        }
    }

    /// Adds a listener that receives the narration events as soon as they are produced.
    ///
    /// Registering a listener enables the production of narration events,
    /// even if the configuration does not require them.
    pub fn add_narration_listener(&mut self, listener: Box<dyn NarrationListener + 'a>) {
        self.listeners.push(listener);
    }

    /// Returns the framework under consideration.
    pub fn framework(&self) -> &'a Framework {
        self.af
    }

    /// Returns the configuration of this engine.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the previously computed extensions for a semantics, if any.
    pub fn cached(&self, semantics: Semantics) -> Option<&[Extension<'a>]> {
        self.cache.get(&semantics).map(|v| v.as_slice())
    }

    /// Removes all the previously computed extensions.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Computes the conflict-free sets of the framework.
    ///
    /// All the subsets of arguments are enumerated.
    pub fn compute_conflict_free_sets(&mut self) -> Result<Evaluation<Vec<Extension<'a>>>> {
        self.evaluate(|engine| engine.compute_level(Semantics::CF, false))
    }

    /// Computes the admissible extensions of the framework.
    pub fn compute_admissible_extensions(
        &mut self,
        use_previous: bool,
    ) -> Result<Evaluation<Vec<Extension<'a>>>> {
        self.evaluate(|engine| engine.compute_level(Semantics::AD, use_previous))
    }

    /// Computes the complete extensions of the framework.
    pub fn compute_complete_extensions(
        &mut self,
        use_previous: bool,
    ) -> Result<Evaluation<Vec<Extension<'a>>>> {
        self.evaluate(|engine| engine.compute_level(Semantics::CO, use_previous))
    }

    /// Computes the preferred extensions of the framework.
    pub fn compute_preferred_extensions(
        &mut self,
        use_previous: bool,
    ) -> Result<Evaluation<Vec<Extension<'a>>>> {
        self.evaluate(|engine| engine.compute_level(Semantics::PR, use_previous))
    }

    /// Computes the stable extensions of the framework.
    pub fn compute_stable_extensions(
        &mut self,
        use_previous: bool,
    ) -> Result<Evaluation<Vec<Extension<'a>>>> {
        self.evaluate(|engine| engine.compute_level(Semantics::ST, use_previous))
    }

    /// Computes the grounded extension of the framework.
    ///
    /// If there is a single complete extension, it is the grounded one.
    /// Else, if one of the complete extensions is empty, the grounded extension is empty.
    /// Else, the grounded extension is the intersection of all the complete extensions.
    pub fn compute_grounded_extension(
        &mut self,
        use_previous: bool,
    ) -> Result<Evaluation<Extension<'a>>> {
        self.evaluate(|engine| {
            let af = engine.af;
            let mut extensions = engine.compute_level(Semantics::GR, use_previous)?;
            Ok(extensions.pop().unwrap_or_else(|| Extension::empty(af)))
        })
    }

    /// Computes the extensions of the framework for the given semantics.
    ///
    /// For the grounded semantics, the returned vector contains exactly one extension.
    pub fn compute(
        &mut self,
        semantics: Semantics,
        use_previous: bool,
    ) -> Result<Evaluation<Vec<Extension<'a>>>> {
        self.evaluate(|engine| engine.compute_level(semantics, use_previous))
    }

    /// Computes the extensions of the framework for the semantics given by a numeric selector.
    ///
    /// See [`Semantics::from_selector`] for the meaning of selectors.
    /// An error is returned if the selector is out of range.
    pub fn compute_by_selector(
        &mut self,
        selector: usize,
        use_previous: bool,
    ) -> Result<Evaluation<Vec<Extension<'a>>>> {
        let semantics = Semantics::from_selector(selector)?;
        self.compute(semantics, use_previous)
    }

    pub(crate) fn evaluate<T, F>(&mut self, f: F) -> Result<Evaluation<T>>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        self.events.clear();
        let result = f(self);
        let narration = std::mem::take(&mut self.events);
        result.map(|result| Evaluation { result, narration })
    }

    fn narrate<F>(&mut self, event: F)
    where
        F: FnOnce() -> NarrationEvent,
    {
        if !self.config.narrate() && self.listeners.is_empty() {
            return;
        }
        let event = event();
        self.listeners.iter().for_each(|l| l.on_event(&event));
        self.events.push(event);
    }

    pub(crate) fn lower_level(
        &mut self,
        semantics: Semantics,
        use_previous: bool,
    ) -> Result<Vec<Extension<'a>>> {
        if use_previous {
            if let Some(cached) = self.cache.get(&semantics).cloned() {
                debug!("reusing {} previously computed {} extension(s)", cached.len(), semantics);
                self.narrate(|| {
                    NarrationEvent::new(format!(
                        "reusing the {} previously computed {} extension(s)",
                        cached.len(),
                        semantics
                    ))
                });
                return Ok(cached);
            }
        }
        self.compute_level(semantics, use_previous)
    }

    fn compute_level(
        &mut self,
        semantics: Semantics,
        use_previous: bool,
    ) -> Result<Vec<Extension<'a>>> {
        let extensions = match semantics {
            Semantics::CF => self.conflict_free_sets()?,
            Semantics::AD => self.admissible_extensions(use_previous)?,
            Semantics::CO => self.complete_extensions(use_previous)?,
            Semantics::PR => self.preferred_extensions(use_previous)?,
            Semantics::ST => self.stable_extensions(use_previous)?,
            Semantics::GR => vec![self.grounded_extension(use_previous)?],
        };
        debug!("found {} {} extension(s)", extensions.len(), semantics);
        if extensions.is_empty() {
            self.narrate(|| NarrationEvent::new(format!("there is no {} extension", semantics)));
        }
        self.cache.insert(semantics, extensions.clone());
        Ok(extensions)
    }

    fn conflict_free_sets(&mut self) -> Result<Vec<Extension<'a>>> {
        let af = self.af;
        let n = af.n_arguments();
        if n > self.config.max_arguments() {
            return Err(Error::TooManyArguments(n, self.config.max_arguments()));
        }
        debug!("enumerating the {} subset(s) of arguments", 1u64 << n);
        let mut result = vec![];
        for mask in 0..(1u64 << n) {
            let candidate = Extension::from_ids(af, (0..n).filter(|i| mask & (1u64 << i) != 0));
            if candidate.is_conflict_free() {
                trace!("{} is conflict-free", candidate);
                self.narrate(|| {
                    NarrationEvent::new(format!("{} is conflict-free", candidate)).with_highlight(
                        Highlight::default().with_extension(&candidate, Emphasis::Accepted),
                    )
                });
                result.push(candidate);
            } else {
                trace!("{} is not conflict-free", candidate);
                self.narrate(|| {
                    let conflicts = candidate.conflicts();
                    let message = match conflicts.first() {
                        Some(att) => format!(
                            "{} is not conflict-free: {} attacks {}",
                            candidate,
                            att.attacker(),
                            att.attacked()
                        ),
                        None => format!("{} is not conflict-free", candidate),
                    };
                    NarrationEvent::new(message).with_highlight(
                        Highlight::default()
                            .with_extension(&candidate, Emphasis::Rejected)
                            .with_edges(&conflicts, Emphasis::Attacker),
                    )
                });
            }
        }
        Ok(result)
    }

    fn admissible_extensions(&mut self, use_previous: bool) -> Result<Vec<Extension<'a>>> {
        let conflict_free = self.lower_level(Semantics::CF, use_previous)?;
        let mut result = vec![];
        for candidate in conflict_free {
            if candidate.is_admissible() {
                self.narrate(|| {
                    NarrationEvent::new(format!("{} defends all its arguments", candidate))
                        .with_highlight(
                            Highlight::default().with_extension(&candidate, Emphasis::Accepted),
                        )
                });
                result.push(candidate);
            } else {
                self.narrate(|| {
                    let undefended = candidate.undefended_attacks();
                    let message = match undefended.first() {
                        Some(att) => format!(
                            "{} is not admissible: {} attacks {} and is not attacked by the set",
                            candidate,
                            att.attacker(),
                            att.attacked()
                        ),
                        None => format!("{} is not admissible", candidate),
                    };
                    let mut highlight =
                        Highlight::default().with_extension(&candidate, Emphasis::Rejected);
                    for att in undefended.iter() {
                        highlight = highlight
                            .with_edge(att, Emphasis::Attacker)
                            .with_node(att.attacker().name(), Emphasis::Attacker);
                    }
                    NarrationEvent::new(message).with_highlight(highlight)
                });
            }
        }
        Ok(result)
    }

    fn complete_extensions(&mut self, use_previous: bool) -> Result<Vec<Extension<'a>>> {
        let admissible = self.lower_level(Semantics::AD, use_previous)?;
        let mut result = vec![];
        for candidate in admissible {
            let defended = candidate.defended_outsiders();
            if defended.is_empty() {
                self.narrate(|| {
                    NarrationEvent::new(format!(
                        "{} contains all the arguments it defends",
                        candidate
                    ))
                    .with_highlight(
                        Highlight::default().with_extension(&candidate, Emphasis::Accepted),
                    )
                });
                result.push(candidate);
            } else {
                self.narrate(|| {
                    let names = defended
                        .iter()
                        .map(|a| a.to_string())
                        .collect::<Vec<String>>()
                        .join(", ");
                    let mut highlight =
                        Highlight::default().with_extension(&candidate, Emphasis::Defender);
                    for arg in defended.iter() {
                        highlight = highlight.with_node(arg.name(), Emphasis::Focus);
                    }
                    NarrationEvent::new(format!(
                        "{} is not complete: it defends {} without containing it",
                        candidate, names
                    ))
                    .with_highlight(highlight)
                });
            }
        }
        Ok(result)
    }

    fn preferred_extensions(&mut self, use_previous: bool) -> Result<Vec<Extension<'a>>> {
        let admissible = self.lower_level(Semantics::AD, use_previous)?;
        let supersets = maximal_supersets(&admissible);
        let mut result = vec![];
        for (candidate, superset) in admissible.iter().zip(supersets) {
            match superset {
                None => {
                    self.narrate(|| {
                        NarrationEvent::new(format!(
                            "{} is not included in another admissible extension",
                            candidate
                        ))
                        .with_highlight(
                            Highlight::default().with_extension(candidate, Emphasis::Accepted),
                        )
                    });
                    result.push(candidate.clone());
                }
                Some(i) => {
                    self.narrate(|| {
                        NarrationEvent::new(format!(
                            "{} is not preferred: it is strictly included in {}",
                            candidate, admissible[i]
                        ))
                        .with_highlight(
                            Highlight::default()
                                .with_extension(&admissible[i], Emphasis::Focus)
                                .with_extension(candidate, Emphasis::Rejected),
                        )
                    });
                }
            }
        }
        Ok(result)
    }

    fn stable_extensions(&mut self, use_previous: bool) -> Result<Vec<Extension<'a>>> {
        let conflict_free = self.lower_level(Semantics::CF, use_previous)?;
        let mut result = vec![];
        for candidate in conflict_free {
            if candidate.is_stable() {
                self.narrate(|| {
                    NarrationEvent::new(format!(
                        "{} attacks all the arguments it does not contain",
                        candidate
                    ))
                    .with_highlight(
                        Highlight::default().with_extension(&candidate, Emphasis::Accepted),
                    )
                });
                result.push(candidate);
            } else {
                self.narrate(|| {
                    let attacked = candidate.attacked_names();
                    let unattacked = candidate
                        .outsiders()
                        .filter(|a| !attacked.contains(&a.name()))
                        .collect::<Vec<_>>();
                    let names = unattacked
                        .iter()
                        .map(|a| a.to_string())
                        .collect::<Vec<String>>()
                        .join(", ");
                    let mut highlight =
                        Highlight::default().with_extension(&candidate, Emphasis::Rejected);
                    for arg in unattacked.iter() {
                        highlight = highlight.with_node(arg.name(), Emphasis::Focus);
                    }
                    NarrationEvent::new(format!(
                        "{} is not stable: it does not attack {}",
                        candidate, names
                    ))
                    .with_highlight(highlight)
                });
            }
        }
        Ok(result)
    }

    fn grounded_extension(&mut self, use_previous: bool) -> Result<Extension<'a>> {
        let complete = self.lower_level(Semantics::CO, use_previous)?;
        let grounded = match complete.as_slice() {
            [] => {
                self.narrate(|| {
                    NarrationEvent::new("there is no complete extension, so the grounded extension is empty")
                });
                Extension::empty(self.af)
            }
            [unique] => {
                self.narrate(|| {
                    NarrationEvent::new(format!(
                        "{} is the only complete extension, so it is the grounded extension",
                        unique
                    ))
                    .with_highlight(Highlight::default().with_extension(unique, Emphasis::Accepted))
                });
                unique.clone()
            }
            [first, rest @ ..] => {
                if complete.iter().any(|e| e.is_empty()) {
                    self.narrate(|| {
                        NarrationEvent::new(
                            "the empty set is a complete extension, so the grounded extension is empty",
                        )
                    });
                    Extension::empty(self.af)
                } else {
                    let intersection = rest.iter().fold(first.clone(), |acc, e| acc.intersection(e));
                    self.narrate(|| {
                        NarrationEvent::new(format!(
                            "the grounded extension {} is the intersection of the {} complete extensions",
                            intersection,
                            complete.len()
                        ))
                        .with_highlight(
                            Highlight::default().with_extension(&intersection, Emphasis::Accepted),
                        )
                    });
                    intersection
                }
            }
        };
        Ok(grounded)
    }
}

/// For each extension of the family, returns the index of a subset-maximal member strictly including it, if any.
///
/// Extensions are visited by decreasing size, so each one only has to be compared to the maximal ones found so far.
fn maximal_supersets(family: &[Extension]) -> Vec<Option<usize>> {
    let mut by_size = (0..family.len()).collect::<Vec<usize>>();
    by_size.sort_by_key(|i| std::cmp::Reverse(family[*i].len()));
    let mut maximal: Vec<usize> = vec![];
    let mut supersets = vec![None; family.len()];
    for i in by_size {
        match maximal
            .iter()
            .find(|j| family[i].is_strict_subset_of(&family[**j]))
        {
            Some(j) => supersets[i] = Some(*j),
            None => maximal.push(i),
        }
    }
    supersets
}
