use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use exprtree::{
    ExpressionError, ExpressionNode, ExpressionTree, batch_lines, validate_expression_input,
};
use log::{info, warn};
use rayon::prelude::*;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// exprtree - Evaluate arithmetic through a binary expression tree
#[derive(Parser, Debug)]
#[command(name = "exprtree")]
#[command(
    about = "Build a binary expression tree from a fully parenthesized expression and evaluate it"
)]
#[command(version)]
pub struct CliArgs {
    /// Expression to evaluate, e.g. "((2+3)*4)". Read from stdin when omitted
    pub expression: Option<String>,

    /// Evaluate every non-empty line of FILE instead of a single expression
    #[arg(short, long, value_name = "FILE", conflicts_with = "expression")]
    pub batch: Option<PathBuf>,

    /// Also print the tree in infix form and its traversal orders
    #[arg(short = 't', long)]
    pub show_tree: bool,

    /// Also print the tree rendered as LaTeX
    #[arg(long)]
    pub latex: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Where expressions come from
#[derive(Debug, PartialEq)]
pub enum InputSource {
    Argument(String),
    Stdin,
    Batch(PathBuf),
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub input: InputSource,
    pub show_tree: bool,
    pub latex: bool,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

pub fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let input = match (args.expression, args.batch) {
        (Some(expression), _) => {
            let line = validate_expression_input(&expression).context("Invalid expression")?;
            InputSource::Argument(line.to_string())
        }
        (None, Some(path)) => InputSource::Batch(path),
        (None, None) => InputSource::Stdin,
    };

    Ok(CliConfig {
        input,
        show_tree: args.show_tree,
        latex: args.latex,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

fn join_values(nodes: Vec<&ExpressionNode>) -> String {
    nodes
        .iter()
        .map(|node| node.value().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build and evaluate one expression, returning the text to print for it
pub fn evaluate_report(source: &str, config: &CliConfig) -> Result<String, ExpressionError> {
    let tree = ExpressionTree::build(source)?;
    let value = tree.evaluate()?;

    let mut report = format!(
        "The result of the expression {} is {}",
        tree.source(),
        value
    );

    if config.show_tree {
        report.push_str(&format!("\nTree: {}", tree));
        report.push_str(&format!("\nPreorder: {}", join_values(tree.preorder())));
        report.push_str(&format!("\nInorder: {}", join_values(tree.inorder())));
        report.push_str(&format!("\nPostorder: {}", join_values(tree.postorder())));
    }

    if config.latex {
        report.push_str(&format!("\nLaTeX: {}", tree.to_latex()));
    }

    Ok(report)
}

fn read_stdin_line() -> Result<String> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        eprint!("Enter the expression to evaluate: ");
        io::stderr().flush().context("Failed to write prompt")?;
    }

    let mut line = String::new();
    stdin
        .read_line(&mut line)
        .context("Failed to read expression from stdin")?;

    let line = validate_expression_input(&line).context("Invalid expression")?;
    Ok(line.to_string())
}

fn run_single(source: &str, config: &CliConfig) -> Result<()> {
    info!("Evaluating expression '{}'", source);

    let report = evaluate_report(source, config)
        .with_context(|| format!("Failed to evaluate '{}'", source))?;
    println!("{}", report);
    Ok(())
}

fn run_batch(path: &Path, config: &CliConfig) -> Result<()> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read batch file {}", path.display()))?;
    let lines = batch_lines(&contents);

    info!(
        "Evaluating {} expressions from {}",
        lines.len(),
        path.display()
    );

    // Order of results follows the file, not completion.
    let reports: Vec<_> = lines
        .par_iter()
        .map(|&(number, source)| (number, source, evaluate_report(source, config)))
        .collect();

    let mut failures = 0;
    for (number, source, report) in reports {
        match report {
            Ok(report) => println!("{}", report),
            Err(e) => {
                failures += 1;
                warn!("Line {} failed: {}", number, e);
                eprintln!("Line {}: {}: {}", number, source, e);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} expressions failed", failures, lines.len());
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    match &config.input {
        InputSource::Argument(source) => run_single(source, &config),
        InputSource::Stdin => {
            let source = read_stdin_line()?;
            run_single(&source, &config)
        }
        InputSource::Batch(path) => run_batch(path, &config),
    }
}
