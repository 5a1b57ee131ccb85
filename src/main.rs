use clap::Parser;
use diaryseal::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Setup { force } => diaryseal::cli::commands::setup::execute(&cli, force),
        Commands::Build => diaryseal::cli::commands::build::execute(&cli),
        Commands::Unlock { json, full } => {
            diaryseal::cli::commands::unlock::execute(&cli, json, full)
        }
        Commands::Deploy {
            ref remote,
            ref branch,
            ref submodule,
            no_push,
        } => diaryseal::cli::commands::deploy::execute(&cli, remote, branch, submodule, no_push),
        Commands::Version => diaryseal::cli::commands::version::execute(),
        Commands::Completions { shell } => diaryseal::cli::commands::completions::execute(shell),
    };

    if let Err(e) = result {
        diaryseal::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
