//! noti CLI entry point.

use clap::Parser;
use noti::cli::args::{Cli, Commands};
use noti::cli::output::Output;
use noti::cli::{create, delete, find, folders, git, init, list, logging, search, show, tags};
use noti::config::Config;
use noti::error::NotiError;
use noti::store::NoteStore;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.quiet {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn run(cli: &Cli) -> Result<(), NotiError> {
    let config = Config::load(cli.config.as_deref())?;
    logging::init(&config.log_level, cli.verbose);

    let output = Output::new(cli.output_format(), cli.quiet);

    // init creates the notes directory, so it runs before the store is opened
    if let Commands::Init(args) = &cli.command {
        return init::run(
            config,
            cli.config.as_deref(),
            cli.notes_dir.as_deref(),
            args,
            &output,
        );
    }

    let notes_dir = config.resolve_notes_dir(cli.notes_dir.as_deref())?;
    let store = NoteStore::new(notes_dir)?;

    match &cli.command {
        Commands::Init(_) => Ok(()),
        Commands::New(args) => create::run(&store, &config, args, &output),
        Commands::List(args) => list::run(&store, args, &output),
        Commands::Show(args) => show::run(&store, args, &output),
        Commands::Delete(args) => delete::run(&store, &config, args, &output),
        Commands::Search(args) => search::run(&store, args, &output),
        Commands::Find(args) => find::run(&store, args, &output),
        Commands::Folders(args) => folders::run(&store, args, &output),
        Commands::Tags(args) => tags::run(&store, args, &output),
        Commands::Git(args) => git::run(&store, args, &output),
    }
}
