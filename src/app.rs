// src/app.rs
use std::io::{self, Write};

use anyhow::{Context, Result};
use char_freq_domain::value_objects::FrequencyValue;
use char_freq_infra::{FsSourceProvider, RandomSampleWriter};
use char_freq_ports::source::SourceRequest;
use char_freq_usecase::{AnalysisReport, AnalyzeSource, GenerateSample};
use log::LevelFilter;

use crate::{
    config::{AnalysisMode, Config},
    output,
};

/// What a run produced besides its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub analyzed: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// `-v` の回数でログレベルを決める。`RUST_LOG` が設定されていればそちらを優先。
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Runs the configured analysis and writes the report to stdout.
pub fn run(config: &Config) -> Result<RunSummary> {
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    run_with(config, &mut out)
}

/// Same as [`run`] with an explicit writer.
pub fn run_with(config: &Config, out: &mut impl Write) -> Result<RunSummary> {
    let mut inputs = config.inputs.clone();
    if let Some(sample) = &config.sample {
        let sink = match sample.seed {
            Some(seed) => RandomSampleWriter::new().with_seed(seed),
            None => RandomSampleWriter::new(),
        };
        let request = GenerateSample::new(&sink)
            .run(&sample.path, sample.len)
            .with_context(|| format!("failed to create sample '{}'", sample.path.display()))?;
        inputs.push(request);
    }

    let provider = FsSourceProvider::new().with_parent_fallback(config.parent_fallback);
    let analyzer = AnalyzeSource::new(&provider).sorted_by(config.sort.clone()).top(config.top);

    match config.mode {
        AnalysisMode::Count => {
            let (reports, summary) = collect(&inputs, |req| analyzer.counts(req, &config.policy));
            output::emit(&reports, config.format, config.mode, out).context("failed to emit output")?;
            Ok(summary)
        }
        AnalysisMode::Rank => {
            let (reports, summary) = collect(&inputs, |req| analyzer.ranks(req, &config.policy));
            output::emit(&reports, config.format, config.mode, out).context("failed to emit output")?;
            Ok(summary)
        }
    }
}

/// Failed sources are reported on stderr and skipped.
fn collect<V, F>(inputs: &[SourceRequest], mut analyze: F) -> (Vec<AnalysisReport<V>>, RunSummary)
where
    V: FrequencyValue,
    F: FnMut(&SourceRequest) -> char_freq_shared_kernel::Result<AnalysisReport<V>>,
{
    let mut reports = Vec::with_capacity(inputs.len());
    let mut summary = RunSummary::default();
    for request in inputs {
        match analyze(request) {
            Ok(report) => {
                log::info!("{}: {} distinct characters", report.source, report.rows.len());
                summary.analyzed += 1;
                reports.push(report);
            }
            Err(e) => {
                eprintln!("Error processing {}: {e}", request.label());
                summary.failed += 1;
            }
        }
    }
    (reports, summary)
}
