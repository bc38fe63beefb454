use super::{specs, InstanceReader, WarningHandler};
use crate::aa::{Framework, FrameworkBuilder};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::io::{BufRead, BufReader, Read};

const ARG_AND_SPACE_PATTERN: &str = r"\s*[_[:alpha:]][_[:alpha:]\d]*\s*";

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*arg\([^)]+\).\s*$").unwrap();
    static ref ARG_LINE_ARG_NAME_PATTERN: Regex =
        Regex::new(&format!(r"^\s*arg\(({})\).\s*$", ARG_AND_SPACE_PATTERN)).unwrap();
    static ref ATT_LINE_PATTERN: Regex = Regex::new(r"^\s*att\([^,]+,[^)]+\).\s*$").unwrap();
    static ref ATT_LINE_ARG_NAMES_PATTERN: Regex = Regex::new(&format!(
        r"^\s*att\(({}),({})\).\s*$",
        ARG_AND_SPACE_PATTERN, ARG_AND_SPACE_PATTERN,
    ))
    .unwrap();
}

const SPACES_WARNING: &str = "argument names beginning or ending by spaces may be ambiguous";

// Returns the trimmed argument and whether trimming changed it.
fn captured_arg<'a>(c: &Captures<'a>, i: usize) -> (&'a str, bool) {
    match c.get(i) {
        Some(m) => {
            let trimmed = m.as_str().trim();
            (trimmed, trimmed.len() != m.as_str().len())
        }
        None => ("", false),
    }
}

fn try_read_arg_line(l: &str) -> Result<Option<(&str, bool)>> {
    if ARG_LINE_PATTERN.is_match(l) {
        match ARG_LINE_ARG_NAME_PATTERN.captures(l) {
            Some(c) => Ok(Some(captured_arg(&c, 1))),
            None => Err(anyhow!("invalid argument name in {}", l.trim())),
        }
    } else {
        Ok(None)
    }
}

fn try_read_att_line(l: &str) -> Result<Option<((&str, &str), bool)>> {
    if ATT_LINE_PATTERN.is_match(l) {
        match ATT_LINE_ARG_NAMES_PATTERN.captures(l) {
            Some(c) => {
                let (a, warn_a) = captured_arg(&c, 1);
                let (b, warn_b) = captured_arg(&c, 2);
                Ok(Some(((a, b), warn_a || warn_b)))
            }
            None => Err(anyhow!("invalid argument names in {}", l.trim())),
        }
    } else {
        Ok(None)
    }
}

/// A reader for the Aspartix format.
///
/// This object is used to read a [`Framework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// Since arguments are named by letters, each argument name must be made of exactly one letter.
/// Arguments must be declared before the attacks.
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments named `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// # Example
///
/// ```
/// # use crustext::aa::Framework;
/// # use crustext::io::{AspartixReader, InstanceReader};
/// fn read_af_from_str(s: &str) -> Framework {
///     let reader = AspartixReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid Aspartix AF")
/// }
/// # read_af_from_str("arg(a).");
/// ```
#[derive(Default)]
pub struct AspartixReader {
    warning_handlers: Vec<WarningHandler>,
}

impl AspartixReader {
    fn warn(&self, line: usize, warning: &str) {
        self.warning_handlers
            .iter()
            .for_each(|h| (h)(line, warning.to_string()));
    }
}

impl InstanceReader for AspartixReader {
    fn read(&self, reader: &mut dyn Read) -> Result<Framework> {
        let mut builder = FrameworkBuilder::default();
        let mut reading_attacks = false;
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = &line.with_context(context)?;
            if l.trim().is_empty() {
                continue;
            }
            if let Some((a, warned)) = try_read_arg_line(l).with_context(context)? {
                if reading_attacks {
                    return Err(anyhow!("found an argument declaration after an attack"))
                        .with_context(context);
                }
                if warned {
                    self.warn(1 + i, SPACES_WARNING);
                }
                builder.new_argument(a, "", "").with_context(context)?;
                continue;
            }
            if let Some(((a, b), warned)) = try_read_att_line(l).with_context(context)? {
                reading_attacks = true;
                if warned {
                    self.warn(1 + i, SPACES_WARNING);
                }
                builder.new_attack(a, b).with_context(context)?;
                continue;
            }
            return Err(anyhow!("syntax error in line \"{}\"", l)).with_context(context);
        }
        let af = builder.build().context("while building the framework")?;
        specs::log_framework_size(&af);
        Ok(af)
    }

    fn add_warning_handler(&mut self, h: WarningHandler) {
        self.warning_handlers.push(h);
    }
}
