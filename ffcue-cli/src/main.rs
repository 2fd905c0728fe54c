use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use ffcue::Direction;

#[derive(Parser, Debug)]
#[command(name = "ffcue", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the ffmpeg encode command line from host configuration.
    Encode(EncodeArgs),
    /// Generate the ffmpeg decode command line from host configuration.
    Decode(DecodeArgs),
}

#[derive(Parser, Debug)]
struct EncodeArgs {
    /// Host (system) parameters JSON.
    #[arg(long)]
    system: PathBuf,

    /// Optional user overrides JSON.
    #[arg(long)]
    user: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DecodeArgs {
    /// Host (system) parameters JSON.
    #[arg(long)]
    system: PathBuf,
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let outcome = match cli.cmd {
        Command::Encode(args) => ffcue::compile_encode(&args.system, args.user.as_deref())
            .map(|cmd| ffcue::host_line(Direction::Encode, &cmd)),
        Command::Decode(args) => {
            ffcue::compile_decode(&args.system).map(|cmd| ffcue::host_line(Direction::Decode, &cmd))
        }
    };

    match outcome {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            // The host reads stdout: a line without the command header is,
            // by protocol, the complete error report.
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Diagnostics go to stderr so the host-monitored stdout stays single-line.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
