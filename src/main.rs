mod cli;
mod db;
mod error;
mod fmt;
mod loader;
mod logging;
mod models;
mod parser;
mod pipeline;
mod reader;
mod reports;
mod settings;

use clap::Parser;
use colored::Colorize;
use tracing::debug;

use cli::{Cli, Commands};
use error::{EXIT_OK, EXIT_USAGE};
use reports::DebtFilter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(EXIT_USAGE);
        }
    };

    logging::setup_logging(cli.verbose, cli.quiet);

    let result = cli.settings().and_then(|settings| {
        debug!(?settings, "resolved settings");
        match cli.command {
            None => cli::load::run(&settings, false),
            Some(Commands::Load { dry_run }) => cli::load::run(&settings, dry_run),
            Some(Commands::Init) => cli::init::run(&settings),
            Some(Commands::List {
                cliente,
                vence,
                format,
            }) => cli::list::run(
                &settings,
                DebtFilter {
                    client_id: cliente,
                    due_date: vence,
                },
                format,
            ),
            Some(Commands::Show { id_deuda }) => cli::show::run(&settings, &id_deuda),
            Some(Commands::Add { record }) => cli::edit::add(&settings, &record),
            Some(Commands::Update { record }) => cli::edit::update(&settings, &record),
            Some(Commands::Delete { id_deuda }) => cli::edit::delete(&settings, &id_deuda),
        }
    });

    match result {
        Ok(()) => std::process::exit(EXIT_OK),
        Err(e) => {
            println!("{} {e}", format!("{}:", e.label()).red().bold());
            std::process::exit(e.exit_code());
        }
    }
}
