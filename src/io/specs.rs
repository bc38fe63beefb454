use crate::aa::{read_argument_name, Argument, Extension, Framework};
use crate::error::Error;
use anyhow::{Context, Result};
use log::info;
use std::io::{Read, Write};

/// The type of callback functions to call when warnings are raised while parsing an AF.
pub type WarningHandler = Box<dyn Fn(usize, String)>;

/// A trait implemented by objects able to read Argumentation Frameworks.
pub trait InstanceReader {
    /// Reads a [`Framework`].
    ///
    /// In case warnings are raised, the callback functions registered by [add_warning_handler](Self::add_warning_handler) are triggered.
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
    fn read(&self, reader: &mut dyn Read) -> Result<Framework>;

    /// Reads an argument from a string.
    fn read_arg_from_str<'a>(&self, af: &'a Framework, arg: &str) -> Result<&'a Argument> {
        find_argument(af, arg)
    }

    /// Adds a callback function to call when warnings are raised while parsing an AF.
    fn add_warning_handler(&mut self, h: WarningHandler);
}

/// A trait implemented by objects that write responses to problems.
pub trait ResponseWriter {
    /// Writes the text associated with the fact the problem has no extension.
    fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()>;

    /// Writes a single extension.
    fn write_single_extension(&self, writer: &mut dyn Write, extension: &Extension) -> Result<()>;

    /// Writes a family of extensions.
    fn write_extensions(&self, writer: &mut dyn Write, extensions: &[Extension]) -> Result<()>;

    /// Writes a number of extensions.
    fn write_count(&self, writer: &mut dyn Write, count: usize) -> Result<()>;

    /// Writes an acceptance status.
    fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()>;
}

pub(crate) fn find_argument<'a>(af: &'a Framework, arg: &str) -> Result<&'a Argument> {
    let name = read_argument_name(arg)?;
    af.argument(name)
        .ok_or_else(|| Error::ForeignArgument(name).into())
}

pub(crate) fn log_framework_size(af: &Framework) {
    info!(
        "read a framework with {} argument(s) and {} attack(s)",
        af.n_arguments(),
        af.n_attacks()
    );
}

pub(crate) fn write_no_extension(writer: &mut dyn Write) -> Result<()> {
    let context = "while writing problem has no extension";
    writeln!(writer, "NO").context(context)?;
    writer.flush().context(context)
}

pub(crate) fn write_count(writer: &mut dyn Write, count: usize) -> Result<()> {
    let context = "while writing an extension count";
    writeln!(writer, "{}", count).context(context)?;
    writer.flush().context(context)
}

pub(crate) fn write_acceptance_status(
    writer: &mut dyn Write,
    acceptance_status: bool,
) -> Result<()> {
    let context = "while writing an acceptance_status";
    writeln!(writer, "{}", if acceptance_status { "YES" } else { "NO" }).context(context)?;
    writer.flush().context(context)
}
