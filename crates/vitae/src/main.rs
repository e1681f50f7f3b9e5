mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            resume,
            layout,
            template,
            output,
        } => commands::render::run(resume, layout, template, output),
        Commands::Check { template, json } => commands::check::run(template, json),
        Commands::Layouts { json } => commands::layouts::run(json, cli.verbose),
        Commands::Locate {
            document,
            section,
            json,
        } => commands::locate::run(document, section.into(), json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}
