use std::path::PathBuf;
use std::process::ExitCode;

use asciisnap::platform::{LogNotifier, PresetDialogs};
use asciisnap::{Session, SnapConfig};
use clap::Parser;

/// Render a text file to a PNG with each line centered.
#[derive(Parser, Debug)]
#[command(name = "asciisnap", version, about)]
struct Cli {
    /// Text file to render
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Where to save the PNG (defaults to the configured output name)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Transparent background instead of white
    #[arg(short, long)]
    transparent: bool,

    /// JSON configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn run(cli: Cli) -> anyhow::Result<bool> {
    let config = match &cli.config {
        Some(path) => SnapConfig::from_json_file(path)?,
        None => SnapConfig::default(),
    };
    let transparent = cli.transparent || config.transparent;

    let mut session = Session::with_system_font(config)?;
    let mut dialogs = PresetDialogs::new(cli.input, cli.output);
    dialogs.save_to_default = true;

    session.choose_input(&mut dialogs);
    let notice = session.convert_and_notify(transparent, &mut dialogs, &mut LogNotifier);
    Ok(!notice.is_error())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("asciisnap: {}", e);
            ExitCode::FAILURE
        }
    }
}
