use crate::error::{Error, Result};
use std::fmt::Display;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter};

/// The semantics associated with a problem.
///
/// The order of the variants is the order of the numeric selectors accepted by [`Semantics::from_selector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, EnumIter)]
pub enum Semantics {
    /// The conflict-free sets
    CF,
    /// The admissible semantics
    AD,
    /// The complete semantics
    CO,
    /// The preferred semantics
    PR,
    /// The stable semantics
    ST,
    /// The grounded semantics
    GR,
}

impl Semantics {
    /// Returns the semantics associated with a numeric selector.
    ///
    /// Selectors start at 0 for the conflict-free sets and follow the declaration order of the variants.
    ///
    /// # Example
    ///
    /// ```
    /// # use crustext::aa::Semantics;
    /// assert_eq!(Semantics::CF, Semantics::from_selector(0).unwrap());
    /// assert_eq!(Semantics::GR, Semantics::from_selector(5).unwrap());
    /// assert!(Semantics::from_selector(6).is_err());
    /// ```
    pub fn from_selector(selector: usize) -> Result<Self> {
        Semantics::iter()
            .nth(selector)
            .ok_or_else(|| Error::UnsupportedSemantics(selector.to_string()))
    }

    /// Returns the full name of the semantics.
    pub fn name(&self) -> &'static str {
        match self {
            Semantics::CF => "conflict-free",
            Semantics::AD => "admissible",
            Semantics::CO => "complete",
            Semantics::PR => "preferred",
            Semantics::ST => "stable",
            Semantics::GR => "grounded",
        }
    }
}

impl Display for Semantics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<&str> for Semantics {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let lower = value.trim().to_ascii_lowercase();
        Semantics::iter()
            .find(|s| s.as_ref().to_ascii_lowercase() == lower || s.name() == lower)
            .ok_or_else(|| Error::UnsupportedSemantics(value.to_string()))
    }
}

/// The query to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
pub enum Query {
    /// Compute a single extension
    SE,
    /// Enumerate all the extensions
    EE,
    /// Count the extensions
    CE,
    /// Check credulous acceptance
    DC,
    /// Check skeptical acceptance
    DS,
}

impl Query {
    /// Returns `true` iff the query requires an argument.
    pub fn requires_argument(&self) -> bool {
        matches!(self, Query::DC | Query::DS)
    }

    /// Iterates over the problem strings this library can handle.
    ///
    /// Problem strings follow the `QUERY-SEMANTICS` pattern, like `EE-PR`.
    pub fn iter_problem_strings() -> impl Iterator<Item = String> {
        Query::iter().flat_map(|q| {
            Semantics::iter().map(move |s| format!("{}-{}", q.as_ref(), s.as_ref()))
        })
    }
}

impl TryFrom<&str> for Query {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        let lower = value.trim().to_ascii_lowercase();
        Query::iter()
            .find(|q| q.as_ref().to_ascii_lowercase() == lower)
            .ok_or_else(|| Error::UndefinedQuery(value.to_string()))
    }
}

/// Reads a string depicting a problem with an XX-YY pattern.
///
/// The string is split at the first hyphen found in it.
/// The substring before this hyphen is considered as the query, while the substring after it is considered as the semantics.
///
/// In case there is no hyphen, an error is returned.
///
/// # Example
///
/// ```
/// # use crustext::aa::{read_problem_string, Query, Semantics};
/// assert_eq!((Query::EE, Semantics::PR), read_problem_string("EE-PR").unwrap());
/// assert!(read_problem_string("EE-SST").is_err());
/// ```
pub fn read_problem_string(problem: &str) -> Result<(Query, Semantics)> {
    match problem.find('-') {
        Some(n) => {
            let query = Query::try_from(&problem[0..n])?;
            let semantics = Semantics::try_from(&problem[1 + n..])?;
            Ok((query, semantics))
        }
        None => Err(Error::InvalidProblemString(problem.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_read_problem_ok() {
        assert_eq!(
            (Query::SE, Semantics::ST),
            read_problem_string("SE-ST").unwrap()
        );
        assert_eq!(
            (Query::DS, Semantics::GR),
            read_problem_string("ds-gr").unwrap()
        );
        assert_eq!(
            (Query::CE, Semantics::CF),
            read_problem_string("CE-CF").unwrap()
        );
    }

    #[test]
    fn test_read_problem_unknown_query() {
        assert_eq!(
            Error::UndefinedQuery("foo".to_string()),
            read_problem_string("foo-ST").unwrap_err()
        );
    }

    #[test]
    fn test_read_problem_unknown_semantics() {
        let err = read_problem_string("SE-SST").unwrap_err();
        assert_eq!(Error::UnsupportedSemantics("SST".to_string()), err);
        assert_eq!(ErrorKind::InvalidRequest, err.kind());
    }

    #[test]
    fn test_read_problem_no_hyphen() {
        assert_eq!(
            Error::InvalidProblemString("SEST".to_string()),
            read_problem_string("SEST").unwrap_err()
        );
    }

    #[test]
    fn test_semantics_from_long_name() {
        assert_eq!(Semantics::PR, Semantics::try_from("Preferred").unwrap());
        assert_eq!(Semantics::CF, Semantics::try_from("conflict-free").unwrap());
        assert!(Semantics::try_from("semi-stable").is_err());
    }

    #[test]
    fn test_selectors() {
        for (i, s) in Semantics::iter().enumerate() {
            assert_eq!(s, Semantics::from_selector(i).unwrap());
        }
        assert_eq!(
            Error::UnsupportedSemantics("42".to_string()),
            Semantics::from_selector(42).unwrap_err()
        );
    }

    #[test]
    fn test_iter_problem_strings() {
        let problems = Query::iter_problem_strings().collect::<Vec<String>>();
        assert_eq!(30, problems.len());
        assert_eq!("SE-CF", problems[0]);
        assert!(problems.contains(&"DS-GR".to_string()));
    }

    #[test]
    fn test_requires_argument() {
        assert!(Query::DC.requires_argument());
        assert!(!Query::EE.requires_argument());
    }
}
