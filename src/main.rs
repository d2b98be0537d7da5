mod config_cmd;

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use reflow::files::{default_output_path, expand_path, read_input, write_output};
use reflow::{compose, segment, AppConfig, ReflowStats};
use std::path::PathBuf;

const PREVIEW_CHARS: usize = 500;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Transcript file to reflow (reads stdin when omitted)
    input: Option<String>,

    /// Output file (defaults to <stem>_pp.<ext> next to the input)
    #[arg(short, long)]
    output: Option<String>,

    /// Write to stdout even when an input file is given
    #[arg(long, default_value_t = false)]
    stdout: bool,

    /// Sentences per paragraph
    #[arg(short, long = "sentences")]
    sentences_per_paragraph: Option<usize>,

    /// Target line width in characters
    #[arg(short = 'w', long = "width")]
    line_width: Option<usize>,

    /// Config file to use instead of the default location
    #[arg(long)]
    config: Option<String>,

    /// Read at most this many characters of input
    #[arg(long)]
    max_chars: Option<usize>,

    /// Dry run - don't write files
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Print formatting statistics
    #[arg(long, default_value_t = false)]
    stats: bool,

    /// Verbose output
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: config_cmd::ConfigAction,
    },
}

fn load_config(args: &Args) -> anyhow::Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load_from(&expand_path(path))?,
        None => AppConfig::load()?,
    };
    config.apply_overrides(args.sentences_per_paragraph, args.line_width, args.max_chars);
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }

    if let Some(Command::Config { action }) = &args.command {
        let config_path = args.config.as_deref().map(expand_path);
        return config_cmd::run(action, config_path.as_deref());
    }

    let config = load_config(&args)?;

    // Fail on bad options before reading anything
    config.reflow.validate()?;

    let input_path = args.input.as_deref().map(expand_path);
    let raw = read_input(input_path.as_deref(), config.max_input_chars).with_context(|| {
        match &input_path {
            Some(path) => format!("Failed to read {}", path.display()),
            None => "Failed to read stdin".to_string(),
        }
    })?;

    let units = segment(&raw);
    let formatted = compose(&units, &config.reflow)?;

    let output_path: Option<PathBuf> = match (&args.output, &input_path) {
        (Some(output), _) => Some(expand_path(output)),
        (None, Some(input)) if !args.stdout => {
            Some(default_output_path(input, &config.output_suffix))
        }
        _ => None,
    };

    if args.dry_run {
        match &output_path {
            Some(path) => eprintln!("Dry run - would save to: {}", path.display()),
            None => eprintln!("Dry run - would write to stdout"),
        }
        let preview: String = formatted.chars().take(PREVIEW_CHARS).collect();
        eprintln!("Preview (first {} chars):\n{}", PREVIEW_CHARS, preview);
    } else if let Some(path) = &output_path {
        write_output(path, &formatted)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        eprintln!(
            "{} Processed {} characters",
            style("✓").green(),
            raw.chars().count()
        );
        eprintln!(
            "Saved as: {}",
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string())
        );
    } else if !formatted.is_empty() {
        println!("{}", formatted);
    }

    if args.stats {
        let stats = ReflowStats::collect(&units, &formatted);
        eprintln!("{}", style("Formatting statistics:").bold());
        eprintln!(
            "  - Paragraph length: {} sentences",
            config.reflow.sentences_per_paragraph
        );
        eprintln!("  - Line width: {}", config.reflow.line_width);
        eprintln!("  - Sentence count: {}", stats.units);
        eprintln!("  - Paragraph count: {}", stats.paragraphs);
        eprintln!("  - Line count: {}", stats.lines);
        eprintln!("  - Word count: {}", stats.words);
        eprintln!("  - Character count: {}", stats.chars);
    }

    Ok(())
}
