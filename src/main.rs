use anyhow::{Context, Result};
use clap::{Parser as _, Subcommand};
use std::io::{Read, Write};
use std::process::ExitCode;
use tapescript::report::{self, Format};
use tapescript::{ParseOutput, Parser, Vocabulary, parse_file};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(clap::Parser, Debug)]
#[command(
    name = "tapescript",
    about = "Parse and check terminal-recording scripts",
    version
)]
struct Args {
    /// Extra option name accepted after `set` (repeatable)
    #[arg(long = "option", value_name = "NAME", global = true)]
    options: Vec<String>,

    /// Increase log verbosity (-v, -vv, -vvv); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Report every malformed line in a script
    Check {
        /// Path to the script file, or `-` for stdin
        script: String,
    },
    /// Print the parsed commands
    Print {
        /// Path to the script file, or `-` for stdin
        script: String,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List the keywords in match order and the options accepted after `set`
    Vocab,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let vocabulary = Vocabulary::default()
        .with_options(args.options.iter().cloned())
        .context("Invalid --option value")?;
    let parser = Parser::new(vocabulary);

    match &args.command {
        Cmd::Check { script } => {
            let out = read_and_parse(&parser, script)?;
            if report_errors(&out)? {
                return Ok(ExitCode::FAILURE);
            }
            println!("ok: {} commands", out.commands.len());
        }
        Cmd::Print { script, format } => {
            let out = read_and_parse(&parser, script)?;
            let failed = report_errors(&out)?;
            print!("{}", report::render(&out, *format)?);
            std::io::stdout().flush()?;
            if failed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Cmd::Vocab => print!("{}", report::render_vocabulary(parser.vocabulary())),
    }
    Ok(ExitCode::SUCCESS)
}

fn read_and_parse(parser: &Parser, script: &str) -> Result<ParseOutput> {
    let out = if script == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read script from stdin")?;
        parser.parse(&content)
    } else {
        parse_file(parser, script)?
    };
    info!(
        script,
        commands = out.commands.len(),
        errors = out.errors.len(),
        "parsed script"
    );
    Ok(out)
}

/// Write error reports to stderr; returns whether there were any.
fn report_errors(out: &ParseOutput) -> Result<bool> {
    if out.is_ok() {
        return Ok(false);
    }
    let mut stderr = std::io::stderr().lock();
    stderr.write_all(report::render_errors(out).as_bytes())?;
    stderr.flush()?;
    Ok(true)
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
