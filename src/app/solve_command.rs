use super::{cli_manager, command::Command, common};
use anyhow::{anyhow, Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use crustext::{
    aa::{read_problem_string, Argument, Extension, Query, Semantics},
    io::{AspartixWriter, ResponseWriter},
    semantics::SemanticsEngine,
};
use log::{info, warn};

const CMD_NAME: &str = "solve";

const ARG_PROBLEM: &str = "PROBLEM";
const ARG_ARG: &str = "ARG";
const ARG_CERTIFICATE: &str = "CERTIFICATE";

pub(crate) struct SolveCommand;

impl SolveCommand {
    pub(crate) fn new() -> Self {
        SolveCommand
    }
}

impl<'a> Command<'a> for SolveCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Solves an argumentation framework problem")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::reader_arg())
            .arg(
                Arg::with_name(ARG_PROBLEM)
                    .short("p")
                    .empty_values(false)
                    .multiple(false)
                    .help("the problem to solve")
                    .required(true),
            )
            .arg(
                Arg::with_name(ARG_ARG)
                    .short("a")
                    .empty_values(false)
                    .multiple(false)
                    .help("the argument (for DC/DS queries)")
                    .required(false),
            )
            .arg(
                Arg::with_name(ARG_CERTIFICATE)
                    .long("with-certificate")
                    .takes_value(false)
                    .help("writes an extension justifying the answer of DC/DS queries, if any")
                    .required(false),
            )
            .args(&common::engine_args())
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let (query, semantics) = read_problem_string(arg_matches.value_of(ARG_PROBLEM).unwrap())?;
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let mut reader = common::create_reader(arg_matches)?;
        let af = common::read_file_path(file, reader.as_mut())?;
        let arg = arg_matches
            .value_of(ARG_ARG)
            .map(|a| reader.read_arg_from_str(&af, a))
            .transpose()
            .context("while parsing the argument passed to the command line")?;
        check_arg_definition(query, &arg)?;
        let config = common::create_engine_config(arg_matches)?;
        let mut engine = SemanticsEngine::new_with_config(&af, config);
        if config.narrate() {
            engine.add_narration_listener(Box::new(common::NarrationLogger));
        }
        let with_certificate = arg_matches.is_present(ARG_CERTIFICATE);
        info!("solving {}-{}", query.as_ref(), semantics.as_ref());
        match (query, arg) {
            (Query::SE, _) => compute_one_extension(&mut engine, semantics),
            (Query::EE, _) => enumerate_extensions(&mut engine, semantics),
            (Query::CE, _) => count_extensions(&mut engine, semantics),
            (Query::DC, Some(a)) => {
                check_credulous_acceptance(&mut engine, semantics, a, with_certificate)
            }
            (Query::DS, Some(a)) => {
                check_skeptical_acceptance(&mut engine, semantics, a, with_certificate)
            }
            (Query::DC | Query::DS, None) => Err(missing_arg_error(query)),
        }
    }
}

fn check_arg_definition(query: Query, arg: &Option<&Argument>) -> Result<()> {
    if query.requires_argument() {
        if arg.is_none() {
            return Err(missing_arg_error(query));
        }
    } else if arg.is_some() {
        warn!(
            "unexpected argument on the command line (useless for query {})",
            query.as_ref()
        );
    }
    Ok(())
}

fn missing_arg_error(query: Query) -> anyhow::Error {
    anyhow!(
        "missing argument on the command line (required for query {})",
        query.as_ref()
    )
}

fn compute_one_extension(engine: &mut SemanticsEngine, semantics: Semantics) -> Result<()> {
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    match engine.compute_one_extension(semantics)? {
        Some(ext) => writer.write_single_extension(&mut out, &ext),
        None => writer.write_no_extension(&mut out),
    }
}

fn enumerate_extensions(engine: &mut SemanticsEngine, semantics: Semantics) -> Result<()> {
    let extensions = engine.compute(semantics, true)?.into_result();
    info!("found {} extension(s)", extensions.len());
    AspartixWriter::default().write_extensions(&mut std::io::stdout(), &extensions)
}

fn count_extensions(engine: &mut SemanticsEngine, semantics: Semantics) -> Result<()> {
    let count = engine.compute(semantics, true)?.result().len();
    AspartixWriter::default().write_count(&mut std::io::stdout(), count)
}

fn check_credulous_acceptance(
    engine: &mut SemanticsEngine,
    semantics: Semantics,
    arg: &Argument,
    with_certificate: bool,
) -> Result<()> {
    let (status, certificate) =
        engine.is_credulously_accepted_with_certificate(semantics, arg.name())?;
    write_acceptance_status(status, certificate, with_certificate)
}

fn check_skeptical_acceptance(
    engine: &mut SemanticsEngine,
    semantics: Semantics,
    arg: &Argument,
    with_certificate: bool,
) -> Result<()> {
    let (status, certificate) =
        engine.is_skeptically_accepted_with_certificate(semantics, arg.name())?;
    write_acceptance_status(status, certificate, with_certificate)
}

fn write_acceptance_status(
    status: bool,
    certificate: Option<Extension>,
    with_certificate: bool,
) -> Result<()> {
    let writer = AspartixWriter::default();
    let mut out = std::io::stdout();
    writer.write_acceptance_status(&mut out, status)?;
    match certificate {
        Some(ext) if with_certificate => writer.write_single_extension(&mut out, &ext),
        _ => Ok(()),
    }
}
