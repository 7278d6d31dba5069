//! Reporting run: fetch -> aggregate -> render -> publish.
//!
//! - Pulls the locale's dataset from ExposureSource
//! - Computes statistics and orders of magnitude (fails on empty/zero data)
//! - Formats the bar-chart report against the max count
//! - Hands the report to SnippetPublisher, no retry

use crate::domain::{
    DomainError, ReportLayout, RunSummary, aggregate, format_report, orders_of_magnitude,
};
use crate::ports::{ExposureSource, SnippetPublisher};
use std::sync::Arc;
use tracing::info;

/// Title under which a locale's report is published.
pub fn report_title(locale: &str) -> String {
    format!("Shodan.io Port Usage - {}", locale)
}

/// Report service. Coordinates the single-pass pipeline.
pub struct ReportService {
    source: Arc<dyn ExposureSource>,
    publisher: Arc<dyn SnippetPublisher>,
    layout: ReportLayout,
}

impl ReportService {
    pub fn new(source: Arc<dyn ExposureSource>, publisher: Arc<dyn SnippetPublisher>) -> Self {
        Self {
            source,
            publisher,
            layout: ReportLayout::default(),
        }
    }

    pub fn with_layout(mut self, layout: ReportLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Fetch and render the report for `locale` without publishing it.
    pub async fn prepare(&self, locale: &str) -> Result<RunSummary, DomainError> {
        let dataset = self.source.fetch(locale).await?;
        let stats = aggregate(&dataset)?;
        let magnitudes = orders_of_magnitude(&stats)?;
        let report = format_report(&dataset, stats.max_count, &self.layout)?;

        info!(
            locale,
            ports = dataset.len(),
            min = stats.min_count,
            max = stats.max_count,
            total = stats.total_count,
            "report rendered"
        );

        Ok(RunSummary {
            locale: locale.to_string(),
            stats,
            magnitudes,
            title: report_title(locale),
            report,
            published: false,
        })
    }

    /// Push a prepared report to the snippet store.
    pub async fn publish(&self, summary: &mut RunSummary) -> Result<(), DomainError> {
        self.publisher
            .publish(&summary.title, &summary.report)
            .await?;
        summary.published = true;
        info!(locale = %summary.locale, title = %summary.title, "report published");
        Ok(())
    }

    /// Prepare and publish in one call.
    pub async fn run(&self, locale: &str) -> Result<RunSummary, DomainError> {
        let mut summary = self.prepare(locale).await?;
        self.publish(&mut summary).await?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ExposureDataset, PortEntry};
    use std::sync::Mutex;

    struct FixedSource(Vec<(&'static str, u64)>);

    #[async_trait::async_trait]
    impl ExposureSource for FixedSource {
        async fn fetch(&self, locale: &str) -> Result<ExposureDataset, DomainError> {
            Ok(ExposureDataset::new(
                locale,
                self.0.iter().map(|(l, c)| PortEntry::new(*l, *c)).collect(),
            ))
        }
    }

    struct FailingSource;

    #[async_trait::async_trait]
    impl ExposureSource for FailingSource {
        async fn fetch(&self, _locale: &str) -> Result<ExposureDataset, DomainError> {
            Err(DomainError::Fetch("connection refused".into()))
        }
    }

    #[derive(Default)]
    struct RecordingPublisher {
        calls: Mutex<Vec<(String, String)>>,
    }

    #[async_trait::async_trait]
    impl SnippetPublisher for RecordingPublisher {
        async fn publish(&self, title: &str, content: &str) -> Result<(), DomainError> {
            self.calls
                .lock()
                .unwrap()
                .push((title.to_string(), content.to_string()));
            Ok(())
        }
    }

    struct RejectingPublisher;

    #[async_trait::async_trait]
    impl SnippetPublisher for RejectingPublisher {
        async fn publish(&self, _title: &str, _content: &str) -> Result<(), DomainError> {
            Err(DomainError::Publish("403 Forbidden".into()))
        }
    }

    fn sample() -> FixedSource {
        FixedSource(vec![("80", 123), ("443", 456), ("22", 789)])
    }

    #[tokio::test]
    async fn test_run_publishes_report() {
        let publisher = Arc::new(RecordingPublisher::default());
        let service = ReportService::new(Arc::new(sample()), publisher.clone());

        let summary = service.run("US").await.unwrap();

        assert!(summary.published);
        assert_eq!(summary.stats.min_count, 123);
        assert_eq!(summary.stats.max_count, 789);
        assert_eq!(summary.stats.total_count, 1368);
        assert_eq!(summary.magnitudes.min, 100);
        assert_eq!(summary.magnitudes.max, 100);

        let calls = publisher.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "Shodan.io Port Usage - US");
        assert_eq!(
            calls[0].1,
            "Port 80    │ ████▌░░░░░░░░░░░░░░░░░░░░░░░░ │      123\n\
             Port 443   │ ████████████████▊░░░░░░░░░░░░ │      456\n\
             Port 22    │ █████████████████████████████ │      789"
        );
    }

    #[tokio::test]
    async fn test_prepare_does_not_publish() {
        let publisher = Arc::new(RecordingPublisher::default());
        let service = ReportService::new(Arc::new(sample()), publisher.clone());

        let summary = service.prepare("DE").await.unwrap();

        assert!(!summary.published);
        assert_eq!(summary.title, "Shodan.io Port Usage - DE");
        assert!(publisher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_dataset_aborts() {
        let publisher = Arc::new(RecordingPublisher::default());
        let service = ReportService::new(Arc::new(FixedSource(vec![])), publisher.clone());

        let err = service.run("US").await.unwrap_err();

        assert!(matches!(err, DomainError::EmptyDataset));
        assert!(publisher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_zero_min_count_aborts() {
        let publisher = Arc::new(RecordingPublisher::default());
        let source = FixedSource(vec![("80", 0), ("443", 10)]);
        let service = ReportService::new(Arc::new(source), publisher.clone());

        let err = service.run("US").await.unwrap_err();

        assert!(matches!(err, DomainError::NonPositiveCount { value: 0, .. }));
        assert!(publisher.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let publisher = Arc::new(RecordingPublisher::default());
        let service = ReportService::new(Arc::new(FailingSource), publisher);

        let err = service.run("US").await.unwrap_err();
        assert!(matches!(err, DomainError::Fetch(_)));
    }

    #[tokio::test]
    async fn test_publish_failure_propagates() {
        let service = ReportService::new(Arc::new(sample()), Arc::new(RejectingPublisher));

        let mut summary = service.prepare("US").await.unwrap();
        let err = service.publish(&mut summary).await.unwrap_err();

        assert!(matches!(err, DomainError::Publish(_)));
        assert!(!summary.published);
    }

    #[tokio::test]
    async fn test_custom_layout() {
        let layout = ReportLayout {
            line_length: 20,
            prefix: "",
            label_width: 3,
            count_width: 3,
            separator: " ",
        };
        let service = ReportService::new(
            Arc::new(FixedSource(vec![("22", 10), ("80", 20)])),
            Arc::new(RecordingPublisher::default()),
        )
        .with_layout(layout);

        let summary = service.prepare("US").await.unwrap();
        assert_eq!(summary.report, "22  ██████░░░░░░  10\n80  ████████████  20");
    }
}
