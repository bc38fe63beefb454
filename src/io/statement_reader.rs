use super::{specs, InstanceReader, WarningHandler};
use crate::aa::{Framework, FrameworkBuilder};
use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, BufReader, Read};

/// A reader for frameworks given as lists of arguments with their statements.
///
/// Each non-empty line declares an argument with three fields separated by vertical bars:
/// the name of the argument (a single letter), its statement, and the names of the arguments it attacks.
/// The statement may be empty and may itself contain vertical bars.
/// Lines beginning with a `#` are comments.
///
/// ```text
/// # a small debate
/// A | The road should be closed | B
/// B | The road is needed by the residents | A, C
/// C | The residents have another road |
/// ```
///
/// # Example
///
/// ```
/// # use crustext::io::{InstanceReader, StatementReader};
/// let reader = StatementReader::default();
/// let af = reader.read(&mut "A | a | B\nB | b |".as_bytes()).unwrap();
/// assert_eq!(2, af.n_arguments());
/// assert_eq!(1, af.n_attacks());
/// ```
#[derive(Default)]
pub struct StatementReader {
    warning_handlers: Vec<WarningHandler>,
}

fn split_line(l: &str) -> Option<(&str, &str, &str)> {
    let (name, rest) = l.split_once('|')?;
    let (statement, attacks) = rest.rsplit_once('|')?;
    Some((name, statement, attacks))
}

impl InstanceReader for StatementReader {
    fn read(&self, reader: &mut dyn Read) -> Result<Framework> {
        let mut builder = FrameworkBuilder::default();
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = line.with_context(context)?;
            let trimmed = l.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let (name, statement, attacks) = split_line(trimmed)
                .ok_or_else(|| anyhow!("syntax error in line \"{}\"", l))
                .with_context(context)?;
            if statement.trim().is_empty() {
                self.warning_handlers.iter().for_each(|h| {
                    (h)(
                        1 + i,
                        format!("argument {} has an empty statement", name.trim()),
                    )
                });
            }
            builder
                .new_argument(name, statement, attacks)
                .with_context(context)?;
        }
        let af = builder.build().context("while building the framework")?;
        specs::log_framework_size(&af);
        Ok(af)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_read_ok() {
        let instance = "# comment\nA | first | B\n\nB | second | a, c\nc | third|\n";
        let af = StatementReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        assert_eq!(3, af.n_arguments());
        assert_eq!(
            vec!["A->B", "B->A", "B->C"],
            af.iter_attacks().map(|a| a.to_string()).collect::<Vec<String>>()
        );
        assert_eq!("second", af.argument('B').unwrap().statement());
    }

    #[test]
    fn test_statement_with_bars() {
        let instance = "A | either | or |\n";
        let af = StatementReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        assert_eq!("either | or", af.argument('A').unwrap().statement());
    }

    #[test]
    fn test_missing_field() {
        let instance = "A | B\n";
        assert!(StatementReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
    }

    #[test]
    fn test_unknown_attacked() {
        let instance = "A | first | Z\n";
        assert!(StatementReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
    }

    #[test]
    fn test_invalid_attack_string() {
        let instance = "A | first | B1\nB | second |\n";
        assert!(StatementReader::default()
            .read(&mut instance.as_bytes())
            .is_err());
    }

    #[test]
    fn test_warn_empty_statement() {
        let instance = "A | first | B\nB | |\n";
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let closure = Box::new(move |i, w| warnings_clone.borrow_mut().push((i, w)));
        let mut reader = StatementReader::default();
        reader.add_warning_handler(closure);
        reader.read(&mut instance.as_bytes()).unwrap();
        assert_eq!(
            warnings.borrow().clone(),
            vec![(2, "argument B has an empty statement".to_string())]
        );
    }
}
