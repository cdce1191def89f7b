use anyhow::Context;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use win_tools::cli::Cli;
use win_tools::config::Settings;
use win_tools::console::{banner, Log, Prompt};
use win_tools::repositories::elevation;
use win_tools::repositories::registry::SystemRegistry;
use win_tools::repositories::shell::SystemRunner;
use win_tools::services::Ctx;
use win_tools::{commands, logging};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too
            let code = if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            if let Err(print_err) = e.print() {
                Log::error(format!("{e}\n(failed to write usage: {print_err})"));
            }
            return code;
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            Log::error(format!("\n{e:#}\n"));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    logging::init_tracing(cli.global.verbose)?;

    if !cli.global.no_banner {
        banner::print();
    }

    let Some(command) = cli.command else {
        Cli::command()
            .print_help()
            .context("Failed to print help")?;
        println!();
        return Ok(ExitCode::SUCCESS);
    };

    let elevated = elevation::is_admin();
    if cli.global.elevate && !elevated {
        elevation::run_as_admin(&elevation::relaunch_args(std::env::args().skip(1)))
            .context("Failed to restart as administrator")?;
        Log::info("Continuing in the elevated window.");
        return Ok(ExitCode::SUCCESS);
    }

    let settings = Settings::resolve(cli.global.assets_dir, cli.global.shell);
    tracing::debug!(
        assets = %settings.assets_dir.display(),
        shell = settings.powershell.program(),
        elevated,
        "resolved settings"
    );

    let mut prompt = Prompt::stdio();
    let mut ctx = Ctx {
        settings: &settings,
        runner: &SystemRunner,
        registry: &SystemRegistry,
        prompt: &mut prompt,
        elevated,
    };

    commands::run(command, &mut ctx)?;
    Ok(ExitCode::SUCCESS)
}
