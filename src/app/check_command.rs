use super::{cli_manager, command::Command, common};
use anyhow::Result;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use crustext::{io::AspartixWriter, utils::grounded_fixpoint};
use log::info;

const CMD_NAME: &str = "check";

const ARG_PRINT: &str = "PRINT";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks input AF files for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::reader_arg())
            .arg(
                Arg::with_name(ARG_PRINT)
                    .long("print")
                    .takes_value(false)
                    .help("writes the framework to the standard output using the Aspartix format")
                    .required(false),
            )
            .arg(cli_manager::logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let mut reader = common::create_reader(arg_matches)?;
        let af = common::read_file_path(file, reader.as_mut())?;
        let grounded = grounded_fixpoint(&af);
        info!("the grounded extension is {}", grounded);
        if arg_matches.is_present(ARG_PRINT) {
            AspartixWriter::default().write_framework(&af, &mut std::io::stdout())?;
        }
        Ok(())
    }
}
