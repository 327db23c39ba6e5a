use std::{
    fs,
    io::{self, BufRead, IsTerminal, Write},
    process::ExitCode,
};

use arithmos::{
    diagnostics::classify_all,
    error::Error,
    evaluate_matrix, evaluate_rational, evaluate_scalar, evaluate_str, evaluate_value,
    evaluate_vector,
    report::{Report, ReportConfig, Reporter, Role},
};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

/// arithmos evaluates arithmetic over scalars, exact rationals, vectors and
/// matrices.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells arithmos to read expressions from a file, one per line.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// The type every expression is evaluated into.
    #[arg(short, long, value_enum, default_value_t = Mode::Value)]
    mode: Mode,

    /// Use 64-bit integer elements instead of floating point.
    #[arg(long)]
    integer: bool,

    /// Only look for unbalanced brackets and unknown type words.
    #[arg(long)]
    check: bool,

    /// Disable colored output. Setting `NO_COLOR` has the same effect.
    #[arg(long)]
    no_color: bool,

    /// Log filter such as `debug` or `arithmos=trace`. Falls back to
    /// `RUST_LOG`, then to `warn`.
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// An expression, or a path when `--file` is given. Without it, expressions
    /// are read from standard input.
    contents: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Plain numbers.
    Scalar,
    /// Numbers, vector literals and matrix literals mixed.
    Value,
    /// Vector literals only.
    Vector,
    /// Matrix literals only.
    Matrix,
    /// Exact fractions.
    Rational,
}

/// Installs the stderr log subscriber.
///
/// The filter comes from `--log-level`, then `RUST_LOG`, then `warn`.
///
/// # Errors
/// Fails if a global subscriber is already installed.
fn init_logging(level: Option<&str>) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = level.map_or_else(|| {
                                       EnvFilter::try_from_default_env()
                                           .unwrap_or_else(|_| EnvFilter::new("warn"))
                                   },
                                   EnvFilter::new);

    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .with_target(false)
                             .try_init()
}

fn evaluate(line: &str, mode: Mode, integer: bool) -> Result<String, Error> {
    Ok(match (mode, integer) {
        (Mode::Scalar, false) => evaluate_str(line)?.to_string(),
        (Mode::Scalar, true) => evaluate_scalar::<i64>(line)?.to_string(),
        (Mode::Rational, _) => evaluate_rational(line)?.to_string(),
        (Mode::Vector, false) => evaluate_vector::<f64>(line)?.to_string(),
        (Mode::Vector, true) => evaluate_vector::<i64>(line)?.to_string(),
        (Mode::Matrix, false) => evaluate_matrix::<f64>(line)?.to_string(),
        (Mode::Matrix, true) => evaluate_matrix::<i64>(line)?.to_string(),
        (Mode::Value, false) => evaluate_value::<f64>(line)?.to_string(),
        (Mode::Value, true) => evaluate_value::<i64>(line)?.to_string(),
    })
}

struct Session {
    mode:     Mode,
    integer:  bool,
    check:    bool,
    reporter: Reporter,
}

impl Session {
    /// Runs one line and prints its outcome. Returns whether it succeeded.
    fn run_line(&self, line: &str) -> bool {
        if self.check {
            let defects = classify_all(line);
            for defect in &defects {
                eprintln!("{}", self.reporter.render(&Report::from_diagnostic(line, defect)));
            }
            if defects.is_empty() {
                println!("{}", self.reporter.paint("OK", Role::Success));
            }
            return defects.is_empty();
        }

        match evaluate(line, self.mode, self.integer) {
            Ok(result) => {
                println!("{}", self.reporter.render_value(&result));
                true
            },
            Err(e) => {
                eprintln!("{}", self.reporter.render(&Report::from_error(line, &e)));
                false
            },
        }
    }

    fn run_file(&self, path: &str) -> ExitCode {
        let Ok(script) = fs::read_to_string(path) else {
            eprintln!("Failed to read the input file '{path}'. Perhaps this file does not exist?");
            return ExitCode::FAILURE;
        };

        let mut succeeded = true;
        for line in script.lines().map(str::trim).filter(|l| !l.is_empty()) {
            succeeded &= self.run_line(line);
        }

        if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE }
    }

    /// Reads lines from stdin until end of input or `exit`. Errors are shown
    /// and the loop goes on.
    fn repl(&self) -> io::Result<()> {
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();
        let mut stdout = io::stdout();
        let mut buffer = String::new();

        loop {
            if interactive {
                write!(stdout, "> ")?;
                stdout.flush()?;
            }

            buffer.clear();
            if stdin.lock().read_line(&mut buffer)? == 0 {
                return Ok(());
            }

            match buffer.trim() {
                "" => {},
                "exit" | "quit" => return Ok(()),
                line => {
                    self.run_line(line);
                },
            }
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logging(args.log_level.as_deref()) {
        eprintln!("Failed to install the log subscriber: {e}");
    }

    let color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
    let session = Session { mode:     args.mode,
                            integer:  args.integer,
                            check:    args.check,
                            reporter: Reporter::new(ReportConfig { color,
                                                                   ..ReportConfig::default() }), };

    match args.contents {
        Some(path) if args.file => session.run_file(&path),
        Some(expression) => {
            if session.run_line(&expression) { ExitCode::SUCCESS } else { ExitCode::FAILURE }
        },
        None => match session.repl() {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Failed to read from standard input: {e}");
                ExitCode::FAILURE
            },
        },
    }
}
