use anyhow::{Context, Result, bail};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use log::{Level, debug, info, warn};
use serde::Serialize;
use simple_logger::init_with_level;
use splicescan::{
    HeuristicClassifier, SAMPLES, about, export,
    input::{read_sequence, read_sequence_file},
    sequence::{DEFAULT_LINE_WIDTH, format_sequence, normalize, validate_alphabet},
};
use std::{fs, io, path::PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "splicescan",
    about = "Classify short DNA sequences and list splice-site candidates",
    disable_version_flag = true
)]
struct Cli {
    #[arg(short = 'V', long = "version", help = "Print version information")]
    version: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        global = true,
        conflicts_with = "quiet",
        help = "Log debug output"
    )]
    verbose: bool,

    #[arg(short = 'q', long = "quiet", global = true, help = "Only log warnings and errors")]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze one sequence (stdin when no source is given)
    Analyze(AnalyzeArgs),
    /// List the bundled sample sequences
    Samples,
    /// Report the fixed training metrics
    Train,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Csv,
    Text,
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    #[arg(
        short = 's',
        long = "sequence",
        value_name = "SEQ",
        conflicts_with_all = ["file", "sample"],
        help = "Sequence given inline"
    )]
    sequence: Option<String>,

    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        conflicts_with = "sample",
        help = "Plain or FASTA file to read"
    )]
    file: Option<PathBuf>,

    #[arg(long = "sample", value_name = "NAME", help = "Name of a bundled sample")]
    sample: Option<String>,

    #[arg(
        short = 'F',
        long = "format",
        value_enum,
        default_value_t = Format::Json,
        help = "Output format"
    )]
    format: Format,

    #[arg(short = 'o', long = "output", value_name = "PATH", help = "Write output here instead of stdout")]
    output: Option<PathBuf>,

    #[arg(long = "strict", help = "Reject symbols other than A, C, G, T, N")]
    strict: bool,
}

#[derive(Serialize)]
struct SampleSummary<'a> {
    name: &'a str,
    length: usize,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    if cli.version {
        println!("{}", about::version_cli_text());
        return Ok(());
    }

    let level = match (cli.verbose, cli.quiet) {
        (true, _) => Level::Debug,
        (_, true) => Level::Warn,
        _ => Level::Info,
    };
    init_with_level(level).context("Could not initialize logging")?;

    match cli.command {
        Some(Command::Analyze(args)) => analyze(args),
        Some(Command::Samples) => {
            let summaries: Vec<SampleSummary> = SAMPLES
                .all()
                .iter()
                .map(|s| SampleSummary {
                    name: &s.name,
                    length: s.sequence.len(),
                })
                .collect();
            print_json(&summaries)
        }
        Some(Command::Train) => print_json(&HeuristicClassifier::new().train()),
        None => {
            Cli::command().print_help()?;
            bail!("Missing command")
        }
    }
}

fn load_input(args: &AnalyzeArgs) -> Result<String> {
    if let Some(sequence) = &args.sequence {
        return Ok(sequence.clone());
    }
    if let Some(path) = &args.file {
        return read_sequence_file(path)
            .with_context(|| format!("Could not read sequence file '{}'", path.display()));
    }
    if let Some(name) = &args.sample {
        return Ok(SAMPLES.sequence(name)?.to_string());
    }
    info!("Reading sequence from stdin");
    Ok(read_sequence(io::stdin().lock())?)
}

fn analyze(args: AnalyzeArgs) -> Result<()> {
    let mut raw = load_input(&args)?;
    if args.strict {
        raw = validate_alphabet(&raw)?;
        let kept = normalize(&raw).len();
        if kept < raw.len() {
            warn!(
                "{} N symbols are ignored by the classifier",
                raw.len() - kept
            );
        }
    }

    let result = HeuristicClassifier::new().analyze(&raw)?;
    info!(
        "{} bp classified as {} ({:.1}%)",
        result.length, result.overall_prediction, result.overall_confidence
    );
    debug!(
        "Analyzed sequence:\n{}",
        format_sequence(&normalize(&raw), DEFAULT_LINE_WIDTH)
    );

    let rendered = match args.format {
        Format::Json => export::to_json(&result)?,
        Format::Csv => export::summary_csv(&result)?,
        Format::Text => export::render_text(&result),
    };
    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Could not write output '{}'", path.display()))?;
            info!("Wrote result to '{}'", path.display());
        }
        None => println!("{}", rendered.trim_end()),
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text =
        serde_json::to_string_pretty(value).context("Could not serialize JSON output")?;
    println!("{text}");
    Ok(())
}
