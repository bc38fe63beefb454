use super::{specs, InstanceReader, WarningHandler};
use crate::aa::{Framework, FrameworkBuilder};
use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, BufReader, Read};

/// A reader for frameworks given by directional edge labels.
///
/// The first non-empty line lists the names of the arguments, possibly separated by spaces or commas.
/// Each following non-empty line contains a two-letter label, the first letter being the attacker and the second one the attacked argument.
///
/// ```text
/// A B C
/// AB
/// BA
/// CB
/// ```
///
/// # Example
///
/// ```
/// # use crustext::io::{EdgeListReader, InstanceReader};
/// let reader = EdgeListReader::default();
/// let af = reader.read(&mut "A,B\nAB\n".as_bytes()).unwrap();
/// assert_eq!(2, af.n_arguments());
/// assert_eq!(1, af.n_attacks());
/// ```
#[derive(Default)]
pub struct EdgeListReader {
    warning_handlers: Vec<WarningHandler>,
}

impl InstanceReader for EdgeListReader {
    fn read(&self, reader: &mut dyn Read) -> Result<Framework> {
        let mut builder = None;
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = line.with_context(context)?;
            if l.trim().is_empty() {
                continue;
            }
            match builder.as_mut() {
                None => {
                    let mut b = FrameworkBuilder::default();
                    for c in l.chars().filter(|c| !c.is_whitespace() && *c != ',') {
                        b.new_argument(&c.to_string(), "", "")
                            .with_context(context)?;
                    }
                    builder = Some(b);
                }
                Some(b) => {
                    let n_attacks_before = b.n_attacks();
                    b.new_attack_from_label(&l).with_context(context)?;
                    if b.n_attacks() == n_attacks_before {
                        self.warning_handlers.iter().for_each(|h| {
                            (h)(1 + i, format!("attack {} is declared more than once", l.trim()))
                        });
                    }
                }
            }
        }
        let builder = builder.ok_or_else(|| anyhow!("missing the list of arguments"))?;
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
        let instance = "A B C\nAB\n\nba\nCB\n";
        let af = EdgeListReader::default()
            .read(&mut instance.as_bytes())
            .unwrap();
        assert_eq!(3, af.n_arguments());
        assert_eq!(
            vec!["A->B", "B->A", "C->B"],
            af.iter_attacks().map(|a| a.to_string()).collect::<Vec<String>>()
        );
    }

    #[test]
    fn test_read_empty() {
        assert!(EdgeListReader::default()
            .read(&mut "\n".as_bytes())
            .is_err());
    }

    #[test]
    fn test_no_attack() {
        let af = EdgeListReader::default()
            .read(&mut "A,B".as_bytes())
            .unwrap();
        assert_eq!(2, af.n_arguments());
        assert_eq!(0, af.n_attacks());
    }

    #[test]
    fn test_invalid_label() {
        ["A B\nABA\n", "A B\nA\n", "A B\nA1\n"].iter().for_each(|i| {
            assert!(EdgeListReader::default().read(&mut i.as_bytes()).is_err());
        });
    }

    #[test]
    fn test_unknown_endpoint() {
        ["A B\nAC\n", "A B\nCA\n"].iter().for_each(|i| {
            assert!(EdgeListReader::default().read(&mut i.as_bytes()).is_err());
        });
    }

    #[test]
    fn test_invalid_argument_list() {
        assert!(EdgeListReader::default()
            .read(&mut "A 1\n".as_bytes())
            .is_err());
    }

    #[test]
    fn test_warn_duplicate_attack() {
        let warnings = Rc::new(RefCell::new(vec![]));
        let warnings_clone = Rc::clone(&warnings);
        let closure = Box::new(move |i, w| warnings_clone.borrow_mut().push((i, w)));
        let mut reader = EdgeListReader::default();
        reader.add_warning_handler(closure);
        reader.read(&mut "A B\nAB\nAB\n".as_bytes()).unwrap();
        assert_eq!(
            warnings.borrow().clone(),
            vec![(3, "attack AB is declared more than once".to_string())]
        );
    }
}
