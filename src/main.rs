use std::process::ExitCode;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use foldernav::config::{Args, Config};
use foldernav::loaders::{FixedLoader, JsonFileLoader};
use foldernav::{
    AddOutcome, Command, ConsoleSink, NavError, NavResult, Outcome, Session, SessionHandle,
};

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::from_args(Args::parse());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: Config) -> NavResult<()> {
    config.validate()?;

    let sink =
        ConsoleSink::new(std::io::stdout(), config.format).clear_on_scroll(config.clear_screen);
    let depth = config.queue_depth;
    let session = match &config.tree_path {
        Some(path) => Session::spawn_with_depth(JsonFileLoader::new(path), sink, depth),
        None => Session::spawn_with_depth(FixedLoader::sample()?, sink, depth),
    };

    // surfaces a failed load before the prompt loop starts
    session.view().await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim_end();
        if matches!(line.trim(), "quit" | "exit" | "q") {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => report(&session, command).await?,
            Err(e) => eprintln!("{}", e),
        }
    }

    Ok(())
}

/// Print what a command did; the view itself is printed by the sink.
async fn report(session: &SessionHandle, command: Command) -> NavResult<()> {
    let is_jump = matches!(command, Command::Jump(_));
    match session.execute(command).await {
        Ok(Outcome::Added(AddOutcome::Rejected(reason))) => eprintln!("not created: {}", reason),
        Ok(Outcome::Moved(false)) if is_jump => {
            eprintln!("moved up one level; jump again to continue")
        }
        Ok(Outcome::Moved(false)) => eprintln!("already at the top"),
        Ok(_) => {}
        Err(NavError::InvalidTarget(msg)) => eprintln!("{}", msg),
        Err(e) => return Err(e),
    }
    Ok(())
}
