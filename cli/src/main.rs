use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use petstore_core::{ClientConfig, PetstoreClient};
use petstore_cli::{render_app, Command, Flow, Shell, UreqTransport, HELP};

#[derive(Parser, Debug)]
#[command(name = "petstore")]
#[command(author, version, about = "Browse and edit the petstore catalog", long_about = None)]
struct Args {
    /// Backend base path, e.g. http://localhost:8080
    #[arg(short = 'b', long, value_name = "URL")]
    base_path: Option<String>,

    /// TOML configuration file
    #[arg(short = 'c', long, env = "PETSTORE_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ClientConfig::from_env(),
    }
    .with_override(args.base_path);
    tracing::info!(base_path = %config.base_path, "starting");

    let mut shell = Shell::start(PetstoreClient::from_config(&config), UreqTransport::default());
    println!("{}", render_app(shell.app()));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    prompt(&mut stdout)?;
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if line.trim().is_empty() {
            prompt(&mut stdout)?;
            continue;
        }
        match line.parse::<Command>() {
            Ok(command) => match shell.handle(command) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Help) => println!("{HELP}"),
                Ok(Flow::Continue) => println!("{}", render_app(shell.app())),
                Err(err) => eprintln!("{err}"),
            },
            Err(err) => eprintln!("{err} (type `help`)"),
        }
        prompt(&mut stdout)?;
    }
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()
}
