use std::path::{Path, PathBuf};

use char_freq_domain::{
    ClassificationPolicy, ResultSequence, SortStrategy, Source, analyze_counts, analyze_ranks,
    value_objects::FrequencyValue,
};
use char_freq_ports::{
    sample::SampleSink,
    source::{OpenedSource, SourceProvider, SourceRequest},
};
use char_freq_shared_kernel::{ApplicationError, CharFreqError, DomainResult, ErrorContext, Result};

use crate::dto::{AnalysisReport, CountReport, RankReport};

/// Resolves a source through a provider and runs the engine over it.
pub struct AnalyzeSource<'a> {
    provider: &'a dyn SourceProvider,
    strategy: SortStrategy,
    top: Option<usize>,
}

impl<'a> AnalyzeSource<'a> {
    pub fn new(provider: &'a dyn SourceProvider) -> Self {
        Self { provider, strategy: SortStrategy::none(), top: None }
    }

    /// Ordering applied to every report before it is returned.
    #[must_use]
    pub fn sorted_by(mut self, strategy: SortStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Keeps only the first `n` rows after sorting.
    #[must_use]
    pub fn top(mut self, n: Option<usize>) -> Self {
        self.top = n;
        self
    }

    pub fn counts(&self, request: &SourceRequest, policy: &ClassificationPolicy) -> Result<CountReport> {
        self.run(request, policy, analyze_counts)
    }

    pub fn ranks(&self, request: &SourceRequest, policy: &ClassificationPolicy) -> Result<RankReport> {
        self.run(request, policy, analyze_ranks)
    }

    fn run<V, F>(&self, request: &SourceRequest, policy: &ClassificationPolicy, analyze: F) -> Result<AnalysisReport<V>>
    where
        V: FrequencyValue,
        F: FnOnce(Source<'_>, &ClassificationPolicy) -> DomainResult<ResultSequence<V>>,
    {
        let opened = self.provider.open(request)?;
        let label = opened.label().to_string();
        log::debug!("analyzing '{label}' with {policy:?}");

        // The opened stream is dropped at the end of this match, closing it.
        let analyzed = match opened {
            OpenedSource::Memory { bytes, .. } => analyze(Source::Text(&bytes), policy),
            OpenedSource::Stream { mut stream, .. } => analyze(Source::Stream(&mut stream), policy),
        };

        let mut rows = analyzed.map_err(|err| ApplicationError::AnalysisFailed {
            label: label.clone(),
            reason: err.to_string(),
            source: Some(Box::new(CharFreqError::from(err))),
        })?;

        let total = rows.total();
        rows.sort_with(&self.strategy);
        if let Some(n) = self.top {
            rows.truncate(n);
        }

        Ok(AnalysisReport { source: label, policy: *policy, rows, total })
    }
}

/// Writes a sample input file through a [`SampleSink`].
pub struct GenerateSample<'a> {
    sink: &'a dyn SampleSink,
}

impl<'a> GenerateSample<'a> {
    pub fn new(sink: &'a dyn SampleSink) -> Self {
        Self { sink }
    }

    /// Returns a request pointing at the written file.
    pub fn run(&self, path: &Path, len: usize) -> Result<SourceRequest> {
        let written: PathBuf = self
            .sink
            .write_sample(path, len)
            .with_context(|| format!("cannot generate a {len}-byte sample"))?;
        Ok(SourceRequest::Path(written))
    }
}

#[cfg(test)]
mod tests {
    use std::{io::Cursor, sync::Mutex};

    use char_freq_domain::{ByteScreen, CharClass, SortMethod, value_objects::RankFraction};
    use char_freq_shared_kernel::InfrastructureError;

    use super::*;

    struct StubProvider;

    impl SourceProvider for StubProvider {
        fn open(&self, request: &SourceRequest) -> Result<OpenedSource> {
            match request {
                SourceRequest::Text(text) => {
                    Ok(OpenedSource::Memory { label: request.label(), bytes: text.clone().into_bytes() })
                }
                SourceRequest::Path(path) if path.ends_with("stream.txt") => Ok(OpenedSource::Stream {
                    label: request.label(),
                    stream: Box::new(Cursor::new(b"zzz yy x".to_vec())),
                }),
                SourceRequest::Path(path) => Err(InfrastructureError::SourceNotFound { path: path.clone() }.into()),
                SourceRequest::Stdin => Ok(OpenedSource::Memory { label: request.label(), bytes: Vec::new() }),
            }
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<(PathBuf, usize)>>,
    }

    impl SampleSink for RecordingSink {
        fn write_sample(&self, path: &Path, len: usize) -> Result<PathBuf> {
            self.calls.lock().unwrap().push((path.to_path_buf(), len));
            Ok(path.to_path_buf())
        }
    }

    fn alpha() -> ClassificationPolicy {
        ClassificationPolicy::new(CharClass::Alpha, ByteScreen::Legacy)
    }

    #[test]
    fn counts_are_sorted_by_strategy() {
        let usecase = AnalyzeSource::new(&StubProvider).sorted_by(SortMethod::CharAscending.into());
        let report = usecase.counts(&SourceRequest::Text("cba".into()), &alpha()).unwrap();

        assert_eq!(report.source, "<text>");
        let chars: Vec<u8> = report.rows.iter().map(|(s, _)| s.byte()).collect();
        assert_eq!(chars, b"ABC");
    }

    #[test]
    fn ranks_from_stream_with_top() {
        let usecase = AnalyzeSource::new(&StubProvider)
            .sorted_by(SortMethod::ValueDescending.into())
            .top(Some(1));
        let report = usecase.ranks(&SourceRequest::Path("stream.txt".into()), &alpha()).unwrap();

        assert_eq!(report.rows.len(), 1);
        let (symbol, rank) = report.rows.rows()[0];
        assert_eq!(symbol.byte(), b'Z');
        assert_eq!(rank, RankFraction::new(0.5));
        assert!((report.total.value() - 1.0).abs() < 1e-9, "total covers truncated rows");
    }

    #[test]
    fn missing_source_propagates_before_analysis() {
        let err = AnalyzeSource::new(&StubProvider)
            .counts(&SourceRequest::Path("missing.txt".into()), &alpha())
            .unwrap_err();
        assert!(matches!(err, CharFreqError::Infrastructure(InfrastructureError::SourceNotFound { .. })));
    }

    #[test]
    fn empty_stdin_gives_empty_report() {
        let report = AnalyzeSource::new(&StubProvider).ranks(&SourceRequest::Stdin, &alpha()).unwrap();
        assert!(report.rows.is_empty());
    }

    #[test]
    fn report_serializes_policy_and_rows() {
        let report = AnalyzeSource::new(&StubProvider)
            .sorted_by(SortMethod::CharAscending.into())
            .counts(&SourceRequest::Text("ab".into()), &alpha())
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["policy"]["class"], "alpha");
        assert_eq!(json["policy"]["screen"], "legacy");
        assert_eq!(json["rows"][1]["char"], "B");
    }

    #[test]
    fn generate_sample_returns_path_request() {
        let sink = RecordingSink::default();
        let request = GenerateSample::new(&sink).run(Path::new("test.cfa"), 10).unwrap();
        assert_eq!(request, SourceRequest::Path("test.cfa".into()));
        assert_eq!(sink.calls.lock().unwrap().as_slice(), &[(PathBuf::from("test.cfa"), 10)]);
    }

    struct FailingSink;

    impl SampleSink for FailingSink {
        fn write_sample(&self, path: &Path, _len: usize) -> Result<PathBuf> {
            Err(InfrastructureError::FileWrite {
                path: path.to_path_buf(),
                source: std::io::Error::other("read-only"),
            }
            .into())
        }
    }

    #[test]
    fn generate_sample_failure_carries_context() {
        let err = GenerateSample::new(&FailingSink).run(Path::new("test.cfa"), 10).unwrap_err();
        assert!(matches!(err, CharFreqError::Context { .. }));
        let message = err.to_string();
        assert!(message.contains("10-byte sample"));
        assert!(message.contains("read-only"));
    }
}
