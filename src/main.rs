//! Frontle: dealership quote screw-score CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use frontle::analyzer::QuoteAnalyzer;
use frontle::config::{default_config_json, load_config, CONFIG_FILENAME};
use frontle::reporter::{dealer_message, ConsoleReporter, JsonReporter};
use frontle::ScrewScore;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Frontle: dealership quote screw-score analyzer
#[derive(Parser, Debug)]
#[command(name = "frontle")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quote text to analyze; use - to read stdin (omit when using a subcommand)
    #[arg(required = true)]
    quote: Option<String>,

    /// Treat the quote argument as a file path
    #[arg(long, short)]
    file: bool,

    /// Output the verdict as JSON
    #[arg(long, short)]
    json: bool,

    /// Print the composed message to send to the dealer
    #[arg(long, short)]
    message: bool,

    /// Quiet mode (one-line verdict)
    #[arg(long, short)]
    quiet: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit 1 when the verdict is at or above this severity
    #[arg(long, value_enum, value_name = "SEVERITY")]
    fail_on: Option<FailOn>,

    /// Path to config file (default: search .frontlerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server (POST /analyzeQuote, GET /hello)
    Serve {
        /// Address to bind
        #[arg(long, default_value = frontle::server::DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(long, short, default_value_t = frontle::server::DEFAULT_PORT)]
        port: u16,

        /// Path to config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create .frontlerc.json with default thresholds and keywords
    Init {
        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

/// Severity gate for CI-style usage
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FailOn {
    Yellow,
    Red,
}

impl FailOn {
    fn tripped_by(self, score: ScrewScore) -> bool {
        match self {
            FailOn::Yellow => score >= ScrewScore::Yellow,
            FailOn::Red => score >= ScrewScore::Red,
        }
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(cmd) = args.command {
        return match cmd {
            Commands::Serve { host, port, config } => run_serve(&host, port, config.as_deref()),
            Commands::Init { dir } => run_init(dir.as_deref()),
        };
    }

    let input = args
        .quote
        .clone()
        .expect("quote required when not using subcommand");
    let text = read_quote(&input, args.file)?;

    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(&work_dir, args.config.as_deref())?;
    let analyzer = QuoteAnalyzer::with_config(config);
    let verdict = analyzer.analyze(&text);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        println!("{}", reporter.report(&verdict));
    } else if args.message {
        println!("{}", dealer_message(&verdict));
    } else if args.quiet {
        ConsoleReporter::new().report_quiet(&verdict);
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.no_color {
            reporter = reporter.without_colors();
        }
        reporter.report(&verdict);
    }

    if let Some(gate) = args.fail_on {
        if gate.tripped_by(verdict.screw_score) {
            return Ok(ExitCode::from(1));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Resolve the quote input: inline text, stdin (-), or a file with --file
fn read_quote(input: &str, as_file: bool) -> Result<String> {
    if as_file {
        std::fs::read_to_string(input)
            .with_context(|| format!("failed to read quote file {input}"))
    } else if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read quote from stdin")?;
        Ok(buf)
    } else {
        Ok(input.to_string())
    }
}

fn run_serve(host: &str, port: u16, config_path: Option<&Path>) -> Result<ExitCode> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let work_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = load_config(&work_dir, config_path)?;
    let analyzer = QuoteAnalyzer::with_config(config);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    runtime.block_on(frontle::server::start_server(host, port, analyzer))?;
    Ok(ExitCode::SUCCESS)
}

fn run_init(dir: Option<&Path>) -> Result<ExitCode> {
    let dir = dir.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));
    let path = dir.join(CONFIG_FILENAME);
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }
    std::fs::write(&path, default_config_json())
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(ExitCode::SUCCESS)
}
