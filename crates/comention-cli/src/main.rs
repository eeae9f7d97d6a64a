//! comention: tag a text corpus against entity dictionaries and report
//! mention, co-mention and relatedness statistics.
//!
//! The report goes to stdout; logs and the error line go to stderr.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use comention_analysis::{create_reporter, Lexicon, StatisticsEngine, StreamAggregator};
use comention_core::config::{CliOverrides, ComentionConfig, OutputMode, ReportFormat};
use comention_core::errors::{ComentionErrorCode, PipelineError, ReportError, ScanError};
use comention_core::events::types::{ChunkMergedEvent, ErrorEvent};
use comention_core::events::{ComentionEventHandler, EventDispatcher};
use comention_core::tracing::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "comention", version, about = "Dictionary-based entity co-mention statistics")]
struct Args {
    /// Dictionary matched case-insensitively (repeatable)
    #[arg(short = 'i', long = "case-insensitive", value_name = "FILE")]
    case_insensitive: Vec<PathBuf>,

    /// Dictionary matched case-sensitively (repeatable)
    #[arg(short = 's', long = "case-sensitive", value_name = "FILE")]
    case_sensitive: Vec<PathBuf>,

    /// Worker threads (0 = one per CPU)
    #[arg(short = 'p', long)]
    workers: Option<usize>,

    /// Lines handed to a worker at a time
    #[arg(long)]
    chunk_lines: Option<usize>,

    /// Report mode: mention, comention, pairs or implicit
    #[arg(long)]
    mode: Option<OutputMode>,

    /// Keep rows below the cutoffs (implicit mode: also pairs never co-mentioned)
    #[arg(short = 'a', long)]
    output_all: bool,

    /// Minimum likelihood for the pairs table
    #[arg(short = 'l', long)]
    likelihood_cutoff: Option<f64>,

    /// Minimum mutual information for the pairs table
    #[arg(short = 'm', long)]
    mi_cutoff: Option<f64>,

    /// Likelihood above which two entities are linked in the relation graph
    #[arg(long)]
    edge_likelihood: Option<f64>,

    /// Report format: tsv or jsonl
    #[arg(long)]
    format: Option<ReportFormat>,

    /// Config file to use instead of ./comention.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Accept matches anywhere, not only on word boundaries
    #[arg(long)]
    no_word_boundaries: bool,

    /// Do not rewrite defined acronyms to their long forms
    #[arg(long)]
    no_acronyms: bool,

    /// Corpus file, one document per line; stdin when absent or "-"
    corpus: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            case_insensitive: self.case_insensitive.clone(),
            case_sensitive: self.case_sensitive.clone(),
            no_word_boundaries: self.no_word_boundaries,
            no_acronyms: self.no_acronyms,
            workers: self.workers,
            chunk_lines: self.chunk_lines,
            mode: self.mode,
            output_all: self.output_all,
            likelihood_cutoff: self.likelihood_cutoff,
            mi_cutoff: self.mi_cutoff,
            edge_likelihood: self.edge_likelihood,
            format: self.format,
        }
    }

    fn corpus_path(&self) -> Option<&Path> {
        self.corpus.as_deref().filter(|p| *p != Path::new("-"))
    }
}

/// Reports the cumulative line count after every merged chunk.
struct ProgressLogger;

impl ComentionEventHandler for ProgressLogger {
    fn on_chunk_merged(&self, event: &ChunkMergedEvent) {
        tracing::info!(
            chunk = event.chunk_index,
            lines = event.lines_processed,
            "lines processed"
        );
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.tagged_message());
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn run(args: &Args) -> Result<(), PipelineError> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = ComentionConfig::load(&cwd, args.config.as_deref(), Some(&args.overrides()))?;

    let workers = config.scan.effective_workers();
    if let Err(err) = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build_global()
    {
        tracing::debug!(%err, "rayon pool already initialized");
    }

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(ProgressLogger));

    let result = execute(args, &config, &dispatcher);
    if let Err(err) = &result {
        dispatcher.emit_error(&ErrorEvent {
            message: err.to_string(),
            error_code: err.error_code().to_string(),
        });
    }
    result
}

fn execute(
    args: &Args,
    config: &ComentionConfig,
    dispatcher: &EventDispatcher,
) -> Result<(), PipelineError> {
    let lexicon = Lexicon::load(&config.dictionaries, dispatcher)?;
    let aggregator =
        StreamAggregator::from_config(lexicon.tagger(), &config.scan).with_events(dispatcher);

    let (state, _summary) = match args.corpus_path() {
        Some(path) => {
            let file = File::open(path).map_err(|source| ScanError::OpenFailed {
                path: path.to_path_buf(),
                source,
            })?;
            aggregator.run(BufReader::new(file))?
        }
        None => aggregator.run(io::stdin().lock())?,
    };

    let report = StatisticsEngine::from_config(&config.statistics).compute(&state, lexicon.registry());

    let reporter = create_reporter(config.output.effective_format());
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    reporter.write(&report, &mut out)?;
    out.flush().map_err(ReportError::from)?;
    Ok(())
}
