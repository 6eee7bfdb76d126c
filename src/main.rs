use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use semantic_versioning::cli::orchestration::{run_increment, IncrementArgs};
use semantic_versioning::{config, ui};

#[derive(clap::Parser)]
#[command(
    name = "increment_version",
    version,
    about = "Print the next Semantic Versioning string for an increment policy"
)]
struct Args {
    #[arg(help = "Field to advance: major, minor or patch")]
    policy: String,

    #[arg(
        value_name = "VERSION",
        help = "Version to bump, e.g. 1.2.3-rc.1+build.5"
    )]
    current: String,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Also print the bumped version's fields as TOML")]
    fields: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version land here too and go to stdout
            e.print().ok();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    let request = IncrementArgs {
        policy: args.policy,
        version: args.current,
        fields: args.fields,
    };
    let outcome = run_increment(&request, &config)?;

    ui::display_version(&outcome.rendered);
    if let Some(table) = &outcome.fields {
        ui::display_fields(table);
    }
    Ok(())
}
