use super::SemanticsEngine;
use crate::aa::{Extension, Semantics};
use crate::error::{Error, Result};
use log::debug;

impl<'a> SemanticsEngine<'a> {
    fn extensions(&mut self, semantics: Semantics) -> Result<Vec<Extension<'a>>> {
        self.evaluate(|engine| engine.lower_level(semantics, true))
            .map(|e| e.into_result())
    }

    fn argument_name(&self, name: char) -> Result<char> {
        self.framework()
            .argument(name)
            .map(|a| a.name())
            .ok_or(Error::ForeignArgument(name.to_ascii_uppercase()))
    }

    /// Computes an extension of the framework for the given semantics.
    ///
    /// The first extension found in the enumeration order is returned.
    /// If the semantics admits no extension, `None` is returned.
    /// Previously computed extensions are reused.
    pub fn compute_one_extension(&mut self, semantics: Semantics) -> Result<Option<Extension<'a>>> {
        Ok(self.extensions(semantics)?.into_iter().next())
    }

    /// Checks whether an argument belongs to at least one extension of the given semantics.
    ///
    /// An error is returned if the argument does not belong to the framework.
    pub fn is_credulously_accepted(&mut self, semantics: Semantics, name: char) -> Result<bool> {
        self.is_credulously_accepted_with_certificate(semantics, name)
            .map(|(status, _)| status)
    }

    /// Checks whether an argument belongs to at least one extension of the given semantics.
    ///
    /// In case the argument is accepted, an extension containing it is returned.
    pub fn is_credulously_accepted_with_certificate(
        &mut self,
        semantics: Semantics,
        name: char,
    ) -> Result<(bool, Option<Extension<'a>>)> {
        let name = self.argument_name(name)?;
        let witness = self
            .extensions(semantics)?
            .into_iter()
            .find(|e| e.contains(name));
        debug!(
            "argument {} is {}credulously accepted under the {} semantics",
            name,
            if witness.is_some() { "" } else { "not " },
            semantics
        );
        Ok((witness.is_some(), witness))
    }

    /// Checks whether an argument belongs to all the extensions of the given semantics.
    ///
    /// If the semantics admits no extension, the argument is considered as skeptically accepted.
    /// An error is returned if the argument does not belong to the framework.
    pub fn is_skeptically_accepted(&mut self, semantics: Semantics, name: char) -> Result<bool> {
        self.is_skeptically_accepted_with_certificate(semantics, name)
            .map(|(status, _)| status)
    }

    /// Checks whether an argument belongs to all the extensions of the given semantics.
    ///
    /// In case the argument is not accepted, an extension that does not contain it is returned.
    pub fn is_skeptically_accepted_with_certificate(
        &mut self,
        semantics: Semantics,
        name: char,
    ) -> Result<(bool, Option<Extension<'a>>)> {
        let name = self.argument_name(name)?;
        let counter_example = self
            .extensions(semantics)?
            .into_iter()
            .find(|e| !e.contains(name));
        debug!(
            "argument {} is {}skeptically accepted under the {} semantics",
            name,
            if counter_example.is_none() { "" } else { "not " },
            semantics
        );
        Ok((counter_example.is_none(), counter_example))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::framework_builder::framework_from_attacks;
    use crate::io::{AspartixReader, EdgeListReader, InstanceReader, StatementReader};

    #[test]
    fn test_one_extension() {
        let af = framework_from_attacks(&[("a", "b"), ("b", "a")]);
        let mut engine = SemanticsEngine::new(&af);
        let ext = engine.compute_one_extension(Semantics::PR).unwrap().unwrap();
        assert_eq!("{A}", ext.to_string());
    }

    #[test]
    fn test_one_extension_none() {
        let af = framework_from_attacks(&[("a", "a")]);
        let mut engine = SemanticsEngine::new(&af);
        assert!(engine.compute_one_extension(Semantics::ST).unwrap().is_none());
    }

    #[test]
    fn test_credulous() {
        let af = framework_from_attacks(&[("a", "b"), ("b", "a"), ("c", "b")]);
        let mut engine = SemanticsEngine::new(&af);
        assert!(engine.is_credulously_accepted(Semantics::PR, 'a').unwrap());
        let (status, witness) = engine
            .is_credulously_accepted_with_certificate(Semantics::PR, 'B')
            .unwrap();
        assert!(!status);
        assert!(witness.is_none());
    }

    #[test]
    fn test_skeptical() {
        let af = framework_from_attacks(&[("a", "b"), ("b", "a"), ("c", "")]);
        let mut engine = SemanticsEngine::new(&af);
        assert!(engine.is_skeptically_accepted(Semantics::PR, 'C').unwrap());
        let (status, counter_example) = engine
            .is_skeptically_accepted_with_certificate(Semantics::PR, 'A')
            .unwrap();
        assert!(!status);
        assert!(!counter_example.unwrap().contains('A'));
    }

    #[test]
    fn test_skeptical_no_extension() {
        let af = framework_from_attacks(&[("a", "a")]);
        let mut engine = SemanticsEngine::new(&af);
        assert!(engine.is_skeptically_accepted(Semantics::ST, 'A').unwrap());
        assert!(!engine.is_credulously_accepted(Semantics::ST, 'A').unwrap());
    }

    macro_rules! test_for_reader {
        ($reader:expr, $instance:expr, $suffix:literal) => {
            paste::item! {
    #[test]
    fn [< test_acceptance_ $suffix >] () {
        let af = $reader.read(&mut $instance.as_bytes()).unwrap();
        let mut engine = SemanticsEngine::new(&af);
        assert!(engine.is_credulously_accepted(Semantics::CO, 'A').unwrap());
        assert!(!engine.is_credulously_accepted(Semantics::CO, 'B').unwrap());
        assert!(engine.is_skeptically_accepted(Semantics::PR, 'C').unwrap());
        assert!(engine.is_skeptically_accepted(Semantics::ST, 'A').unwrap());
        assert!(!engine.is_skeptically_accepted(Semantics::AD, 'A').unwrap());
    }

    #[test]
    fn [< test_one_extension_ $suffix >] () {
        let af = $reader.read(&mut $instance.as_bytes()).unwrap();
        let mut engine = SemanticsEngine::new(&af);
        let ext = engine.compute_one_extension(Semantics::GR).unwrap().unwrap();
        assert_eq!("{A,C}", ext.to_string());
        assert!(engine.compute_one_extension(Semantics::AD).unwrap().unwrap().is_empty());
    }
            }
        };
    }

    test_for_reader!(
        AspartixReader::default(),
        "arg(a).\narg(b).\narg(c).\natt(a,b).\natt(b,a).\natt(c,b).\n",
        "apx"
    );

    test_for_reader!(
        StatementReader::default(),
        "A | first | B\nB | second | A\nC | third | B\n",
        "statements"
    );

    test_for_reader!(
        EdgeListReader::default(),
        "A B C\nAB\nBA\nCB\n",
        "edges"
    );

    #[test]
    fn test_unknown_argument() {
        let af = framework_from_attacks(&[("a", "")]);
        let mut engine = SemanticsEngine::new(&af);
        assert_eq!(
            Error::ForeignArgument('Z'),
            engine.is_credulously_accepted(Semantics::GR, 'Z').unwrap_err()
        );
        assert_eq!(
            Error::ForeignArgument('Z'),
            engine
                .is_skeptically_accepted_with_certificate(Semantics::PR, 'z')
                .unwrap_err()
        );
    }
}
