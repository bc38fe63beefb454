use super::ResponseWriter;
use crate::aa::{Extension, Framework};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Aspartix format.
///
/// This object is used to write a [`Framework`] using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html),
/// and to write the answers to problems.
/// Extensions are written as lists of argument names between square brackets, like `[A,C]`.
///
/// # Example
///
/// The following example writes an AF to the standard output using the Aspartix format.
///
/// ```
/// # use crustext::aa::{Framework, FrameworkBuilder};
/// # use crustext::io::AspartixWriter;
/// # use anyhow::Result;
/// fn write_af_to_stdout(af: &Framework) -> Result<()> {
///     let writer = AspartixWriter::default();
///     writer.write_framework(af, &mut std::io::stdout())
/// }
/// # write_af_to_stdout(&FrameworkBuilder::default().build().unwrap());
/// ```
#[derive(Default)]
pub struct AspartixWriter {}

impl AspartixWriter {
    /// Writes a framework using the Aspartix format to the provided writer.
    pub fn write_framework(&self, framework: &Framework, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing a framework";
        for arg in framework.iter_arguments() {
            writeln!(writer, "arg({}).", arg).context(context)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(writer, "att({},{}).", attack.attacker(), attack.attacked()).context(context)?;
        }
        writer.flush().context(context)
    }
}

fn extension_to_string(extension: &Extension) -> String {
    let names = extension
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<String>>();
    format!("[{}]", names.join(","))
}

impl ResponseWriter for AspartixWriter {
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        super::specs::write_no_extension(writer)
    }

    fn write_single_extension(&self, writer: &mut dyn Write, extension: &Extension) -> Result<()> {
        let context = "while writing an extension";
        writeln!(writer, "{}", extension_to_string(extension)).context(context)?;
        writer.flush().context(context)
    }

    fn write_extensions(&self, writer: &mut dyn Write, extensions: &[Extension]) -> Result<()> {
        let context = "while writing extensions";
        let all = extensions
            .iter()
            .map(extension_to_string)
            .collect::<Vec<String>>();
        writeln!(writer, "[{}]", all.join(",")).context(context)?;
        writer.flush().context(context)
    }

    fn write_count(&self, writer: &mut dyn Write, count: usize) -> Result<()> {
        super::specs::write_count(writer, count)
    }

    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        super::specs::write_acceptance_status(writer, acceptance_status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::framework_builder::framework_from_attacks;
    use std::io::BufWriter;

    fn written<F>(f: F) -> String
    where
        F: FnOnce(&AspartixWriter, &mut dyn Write),
    {
        let mut buffer = BufWriter::new(Vec::new());
        f(&AspartixWriter::default(), &mut buffer);
        String::from_utf8(buffer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_write_af() {
        let af = framework_from_attacks(&[("a", "a"), ("b", "c"), ("c", "")]);
        assert_eq!(
            "arg(A).\narg(B).\narg(C).\natt(A,A).\natt(B,C).\n",
            written(|w, b| w.write_framework(&af, b).unwrap())
        )
    }

    #[test]
    fn test_write_single_extension() {
        let af = framework_from_attacks(&[("a", ""), ("b", ""), ("c", "")]);
        let ext = Extension::new(&af, &['C', 'A']).unwrap();
        assert_eq!(
            "[A,C]\n",
            written(|w, b| w.write_single_extension(b, &ext).unwrap())
        );
    }

    #[test]
    fn test_write_empty_extension() {
        let af = framework_from_attacks(&[("a", "")]);
        let ext = Extension::empty(&af);
        assert_eq!(
            "[]\n",
            written(|w, b| w.write_single_extension(b, &ext).unwrap())
        );
    }

    #[test]
    fn test_write_extensions() {
        let af = framework_from_attacks(&[("a", ""), ("b", "")]);
        let extensions = vec![
            Extension::empty(&af),
            Extension::new(&af, &['A']).unwrap(),
            Extension::new(&af, &['A', 'B']).unwrap(),
        ];
        assert_eq!(
            "[[],[A],[A,B]]\n",
            written(|w, b| w.write_extensions(b, &extensions).unwrap())
        );
        assert_eq!("[]\n", written(|w, b| w.write_extensions(b, &[]).unwrap()));
    }

    #[test]
    fn test_write_count() {
        assert_eq!("3\n", written(|w, b| w.write_count(b, 3).unwrap()));
    }

    #[test]
    fn test_write_no_extension() {
        assert_eq!("NO\n", written(|w, b| w.write_no_extension(b).unwrap()));
    }

    #[test]
    fn test_write_acceptance_status() {
        assert_eq!(
            "YES\n",
            written(|w, b| w.write_acceptance_status(b, true).unwrap())
        );
        assert_eq!(
            "NO\n",
            written(|w, b| w.write_acceptance_status(b, false).unwrap())
        );
    }
}
