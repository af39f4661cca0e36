use std::{path::{PathBuf, Path}, fs::read_to_string, io::{self, Write, BufRead}};

use anyhow::{Context, Result, bail};
use command::parse_line;
use session::Session;
use structopt::StructOpt;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod command;
mod session;
mod stack;
mod suite;


#[derive(Debug, StructOpt)]
#[structopt(about = "A fixed-capacity LIFO stack of integers")]
struct Options {
    /// Maximum number of elements the stack holds
    #[structopt(short, long, default_value = "3")]
    capacity: usize,

    /// Log every command together with the stack contents
    #[structopt(short, long)]
    trace: bool,

    /// Run the built-in check suite and exit
    #[structopt(short, long)]
    suite: bool,

    /// Script of commands, interactive prompt if not present
    #[structopt(parse(from_os_str))]
    script: Option<PathBuf>
}

fn main() -> Result<()> {
    let options = Options::from_args();
    init_logging(options.trace);

    match options {
        Options { suite: true, .. } => run_suite(),
        Options { script: Some(script), capacity, trace, .. } => run_file(&script, capacity, trace),
        Options { capacity, trace, .. } => run_prompt(capacity, trace),
    }
}

fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_suite() -> Result<()> {
    let report = suite::run_suite();
    println!("{}", report);

    if !report.all_passed() {
        bail!("Check suite failed");
    }

    Ok(())
}

fn run_file(script: &Path, capacity: usize, trace: bool) -> Result<()> {
    let source = read_to_string(script).context("Failed to read script file")?;
    let mut session = Session::new(capacity, trace);

    for outcome in session.run_source(&source)? {
        println!("{}", outcome);
    }
    info!(contents = ?session.stack().display(), "script finished");

    Ok(())
}

fn run_prompt(capacity: usize, trace: bool) -> Result<()> {
    let mut session = Session::new(capacity, trace);
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;
        let mut line = String::new();
        let read = stdin.lock().read_line(&mut line).context("stdin failed")?;
        if read == 0 {
            println!("");
            return Ok(());
        }

        match parse_line(&line) {
            Ok(Some(command)) => println!("{}", session.execute(&command)),
            Ok(None) => {},
            Err(e) => println!("Error: {}", e),
        }
    }
}
