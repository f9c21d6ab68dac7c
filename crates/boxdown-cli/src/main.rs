//! boxdown CLI - renders a markup file as a boxed comment header.
//!
//! Reads the input named by the single positional argument (`-` for
//! standard input), renders it through the comment-box renderer, and writes
//! the result to standard output followed by a trailing newline.
//!
//! Exit codes: 0 on success, 5 when the input cannot be read, 1 on
//! malformed markup.

use std::{
    fs::File,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
};

use boxdown::{ByteBuffer, CommentBox, Document};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Exit code reserved for I/O failures while reading or writing.
const IO_FAILURE: u8 = 5;

/// Boxdown - boxed comment header generator.
#[derive(Parser)]
#[command(name = "boxdown", version, about)]
struct Cli {
    /// Input file path, or `-` to read from standard input.
    input: PathBuf,

    /// Width of the rendered comment box in columns.
    #[arg(long, default_value_t = 100)]
    width: usize,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Render(#[from] boxdown::RenderError),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ CliError::Io(_)) => {
            eprintln!("{err}");
            ExitCode::from(IO_FAILURE)
        }
        Err(err @ CliError::Render(_)) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    tracing::info!(input = %cli.input.display(), "parsing");

    let mut ib = ByteBuffer::with_capacity(1024);
    if cli.input.as_os_str() == "-" {
        ib.read_from(&mut io::stdin().lock())?;
    } else {
        ib.read_from(&mut File::open(&cli.input)?)?;
    }
    tracing::debug!(bytes = ib.len(), "input loaded");

    let mut doc = Document::new();
    let out = doc.render(&mut CommentBox::with_width(cli.width), ib.as_bytes())?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.write_all(b"\n")?;
    Ok(())
}
