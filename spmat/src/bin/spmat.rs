use clap::Parser;
use spmat::{
    load_matrix, write_matrix, EngineConfig, Error, ErrorCategory, MatrixView, Operation,
    SpmatError,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Add, subtract or multiply sparse integer matrices stored as text")]
struct Cli {
    /// Operation to apply: add, subtract or multiply (prompted if omitted)
    operation: Option<String>,

    /// Path to matrix A (prompted if omitted)
    matrix_a: Option<PathBuf>,

    /// Path to matrix B (prompted if omitted)
    matrix_b: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "output")]
    json: bool,

    /// Allow row-parallel multiplication
    #[arg(long)]
    parallel: bool,

    /// Non-zeros in matrix A needed before multiplying in parallel
    #[arg(long, default_value_t = EngineConfig::DEFAULT_PARALLEL_THRESHOLD)]
    parallel_threshold: usize,

    /// Worker threads for parallel multiplication
    #[arg(long)]
    threads: Option<usize>,

    /// Write the result to this file instead of printing it
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum Failure {
    #[error("Error loading matrices: {0}")]
    Load(Error),
    #[error("Invalid operation selected.")]
    InvalidOperation,
    #[error("Operation error: {0}")]
    Operation(Error),
    #[error("Error writing result: {0}")]
    Output(Error),
    #[error("Error encoding result: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Console error: {0}")]
    Console(#[from] io::Error),
}

impl From<Error> for Failure {
    fn from(err: Error) -> Self {
        match err.as_matrix_error().copied() {
            Some(SpmatError::UnknownOperation) => Failure::InvalidOperation,
            Some(matrix_err) if matrix_err.category() == ErrorCategory::Operation => {
                Failure::Operation(err)
            }
            Some(_) => Failure::Load(err),
            None if matches!(err, Error::ThreadPool(_)) => Failure::Operation(err),
            None => Failure::Load(err),
        }
    }
}

fn main() -> ExitCode {
    // Respects RUST_LOG, quiet by default
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let status = execute(
        Cli::parse(),
        &mut io::stdin().lock(),
        &mut io::stdout(),
        &mut io::stderr(),
    );
    ExitCode::from(status)
}

/// Run the shell and report a failure on `err`, returning the exit status
fn execute<R, W, E>(cli: Cli, input: &mut R, out: &mut W, err: &mut E) -> u8
where
    R: BufRead,
    W: Write,
    E: Write,
{
    match run(cli, input, out) {
        Ok(()) => 0,
        Err(failure) => {
            // Nothing left to report to if stderr itself fails
            let _ = writeln!(err, "{failure}");
            1
        }
    }
}

fn run<R: BufRead, W: Write>(cli: Cli, input: &mut R, out: &mut W) -> Result<(), Failure> {
    let mut config = EngineConfig::default()
        .with_parallel(cli.parallel)
        .with_parallel_threshold(cli.parallel_threshold);
    if let Some(threads) = cli.threads {
        config = config.with_threads(threads);
    }

    let selector = match cli.operation {
        Some(selector) => selector,
        None => {
            writeln!(out, "Select operation:")?;
            for (index, op) in Operation::ALL.iter().enumerate() {
                writeln!(out, "{}. {op}", index + 1)?;
            }
            prompt(input, out, "Enter operation: ")?
        }
    };
    let path_a = match cli.matrix_a {
        Some(path) => path,
        None => PathBuf::from(prompt(input, out, "Enter path for matrix A: ")?),
    };
    let path_b = match cli.matrix_b {
        Some(path) => path,
        None => PathBuf::from(prompt(input, out, "Enter path for matrix B: ")?),
    };

    // Both files load before the selector is looked at
    let a = load_matrix(&path_a)?;
    let b = load_matrix(&path_b)?;

    let operation: Operation = selector.parse().map_err(Error::from)?;
    let result = operation.apply_with(&a, &b, &config)?;

    debug!(
        op = %operation,
        rows = result.num_rows(),
        cols = result.num_cols(),
        nnz = result.nnz(),
        density = result.density(),
        "operation complete"
    );

    if let Some(path) = cli.output {
        write_matrix(&path, &result).map_err(Failure::Output)?;
        writeln!(out, "Result written to {}", path.display())?;
    } else if cli.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        writeln!(out, "\nResultant Matrix:")?;
        write!(out, "{}", result.render())?;
    }

    Ok(())
}

/// Print `label` and read one trimmed line
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> io::Result<String> {
    write!(out, "{label}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
