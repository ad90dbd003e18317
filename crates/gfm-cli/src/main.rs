//! gfm CLI - Git Flow feature and hotfix branches across all your repositories.

use clap::Parser;

mod commands;
mod launcher;
mod logging;
mod output;
mod services;

use commands::create::CreateArgs;
use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    output::set_quiet(cli.quiet);
    logging::init(cli.verbose);

    let dir = cli.dir.as_deref();
    let result = match cli.command {
        Commands::List { json } => commands::list::run(dir, json),
        Commands::Prepare { repo } => commands::prepare::run(dir, &repo),
        Commands::Create {
            repo,
            kind,
            issue,
            name,
            no_prepare,
            dry_run,
            no_open,
        } => commands::create::run(
            dir,
            CreateArgs {
                repo,
                kind: kind.map(Into::into),
                issue,
                name,
                no_prepare,
                dry_run,
                no_open,
            },
        ),
        Commands::Preview { kind, issue, name } => {
            commands::preview::run(kind.into(), &issue, &name)
        }
        Commands::Config { action } => commands::config::run(&action),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
