use clap::{error::ErrorKind, CommandFactory, Parser};
use miette::{NamedSource, Report};
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};
use tracing::debug;
use vbscan_tokenizer::{join_lines, tokenize, Token};

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    help_template = "{name}
{tab}{about-with-newline}
{tab}{author-with-newline}
{usage-heading} {usage}

{all-args}"
)]
struct Args {
    /// Path to the VBA file to scan.
    #[arg(short, long)]
    path: PathBuf,

    /// Print the logical lines of the file.
    #[arg(short, long)]
    logical: bool,

    /// Don't list the line continuations.
    #[arg(short, long)]
    quiet: bool,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Stay silent unless asked.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

/// The 1-based line and character column of the byte `offset`.
fn location(source: &str, offset: usize) -> (usize, usize) {
    let before = &source[..offset];

    // `\r\n` counts once, a lone `\r` is a line break of its own.
    let line = before.matches('\n').count() + before.matches('\r').count()
        - before.matches("\r\n").count()
        + 1;
    let line_start = before
        .rfind(|c: char| matches!(c, '\n' | '\r'))
        .map_or(0, |idx| idx + 1);

    (line, before[line_start..].chars().count() + 1)
}

fn run(args: &Args, file_path: &str, source: String, out: &mut impl Write) -> io::Result<()> {
    let (tokens, diags) = tokenize(&source);
    debug!(file_path, tokens = tokens.len(), "scanned file");

    if !args.quiet {
        for token in tokens
            .iter()
            .filter(|token| token.token() == &Token::LineContinuation)
        {
            let (line, column) = location(&source, token.span().start());
            writeln!(out, "{}:{} line continuation", line, column)?;
        }
    }

    if args.logical {
        for line in join_lines(&source, &tokens) {
            let (number, _) = location(&source, line.span().start());
            writeln!(out, "{:>4} | {}", number, line.text())?;
        }
    }

    for diag in diags {
        let report =
            Report::new(diag).with_source_code(NamedSource::new(file_path, source.clone()));
        writeln!(out, "{:?}", report)?;
    }

    Ok(())
}

fn main() {
    init_tracing();
    let args = Args::parse();

    let file_path = args.path.to_string_lossy();
    let result = fs::read_to_string(&args.path)
        .and_then(|source| run(&args, &file_path, source, &mut io::stdout().lock()));

    if let Err(err) = result {
        let mut cmd = Args::command();
        cmd.error(ErrorKind::Io, format!("{} - {}", file_path, err))
            .exit();
    }
}
