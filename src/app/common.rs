use super::{
    app_helper::AppHelper, command::Command, AuthorsCommand, CheckCommand, ProblemsCommand,
    SolveCommand,
};
use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches};
use crustext::{
    aa::Framework,
    io::{AspartixReader, EdgeListReader, InstanceReader, StatementReader},
    semantics::{EngineConfig, NarrationEvent, NarrationListener, DEFAULT_MAX_ARGUMENTS},
};
use log::{info, warn};
use std::{
    fs::{self, File},
    io::BufReader,
    path::PathBuf,
};

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let authors = option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        authors,
        "Crustext, an extension enumerator for abstract argumentation frameworks.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, authors)),
        Box::new(CheckCommand::new()),
        Box::new(ProblemsCommand::new()),
        Box::new(SolveCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_INPUT: &str = "INPUT";

pub(crate) fn input_args() -> Arg<'static, 'static> {
    Arg::with_name(ARG_INPUT)
        .short("f")
        .empty_values(false)
        .multiple(false)
        .help("the input file that contains the AF")
        .required(true)
}

pub(crate) const ARG_READER: &str = "READER";

pub(crate) fn reader_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_READER)
        .short("r")
        .long("reader")
        .empty_values(false)
        .multiple(false)
        .possible_values(&["apx", "statements", "edges"])
        .default_value("apx")
        .help("the input file format")
        .required(false)
}

pub(crate) fn create_reader(arg_matches: &ArgMatches<'_>) -> Result<Box<dyn InstanceReader>> {
    match arg_matches.value_of(ARG_READER) {
        Some("apx") | None => Ok(Box::<AspartixReader>::default()),
        Some("statements") => Ok(Box::<StatementReader>::default()),
        Some("edges") => Ok(Box::<EdgeListReader>::default()),
        Some(r) => Err(anyhow!(r#"unknown reader "{}""#, r)),
    }
}

const ARG_MAX_ARGUMENTS: &str = "MAX_ARGUMENTS";
const ARG_NARRATE: &str = "NARRATE";

pub(crate) fn engine_args() -> Vec<Arg<'static, 'static>> {
    vec![
        Arg::with_name(ARG_MAX_ARGUMENTS)
            .long("max-arguments")
            .empty_values(false)
            .multiple(false)
            .help("the maximal number of arguments of the frameworks to solve (default: 16, at most 63)")
            .required(false),
        Arg::with_name(ARG_NARRATE)
            .long("narrate")
            .takes_value(false)
            .help("logs the reasoning steps of the solver")
            .required(false),
    ]
}

pub(crate) fn create_engine_config(arg_matches: &ArgMatches<'_>) -> Result<EngineConfig> {
    let max_arguments = match arg_matches.value_of(ARG_MAX_ARGUMENTS) {
        Some(n) => n
            .parse::<usize>()
            .with_context(|| format!(r#"invalid value "{}" for --max-arguments"#, n))?,
        None => DEFAULT_MAX_ARGUMENTS,
    };
    Ok(EngineConfig::default()
        .with_max_arguments(max_arguments)
        .with_narration(arg_matches.is_present(ARG_NARRATE)))
}

pub(crate) fn read_file_path(file_path: &str, reader: &mut dyn InstanceReader) -> Result<Framework> {
    reader.add_warning_handler(Box::new(|line, msg| warn!("at line {}: {}", line, msg)));
    let canonicalized = canonicalize_file_path(file_path)?;
    info!("reading input file {:?}", canonicalized);
    let file = File::open(&canonicalized)
        .with_context(|| format!(r#"while opening file "{}""#, file_path))?;
    let mut file_reader = BufReader::new(file);
    reader
        .read(&mut file_reader)
        .with_context(|| format!(r#"while reading file "{}""#, file_path))
}

/// Canonicalize a path given by the user.
pub(crate) fn canonicalize_file_path(file_path: &str) -> Result<PathBuf> {
    fs::canonicalize(PathBuf::from(file_path))
        .with_context(|| format!(r#"while opening file "{}""#, file_path))
}

/// Forwards the reasoning steps of the engine to the logger.
pub(crate) struct NarrationLogger;

impl NarrationListener for NarrationLogger {
    fn on_event(&self, event: &NarrationEvent) {
        info!("{}", event);
    }
}
