use checker_core::{InspectionResult, RunReport};
use check_logging::check_info;

use crate::inspector::Inspect;
use crate::pacing::Pacer;

/// Progress notification emitted by the run loop. Indices are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckEvent {
    Started {
        index: usize,
        total: usize,
        url: String,
    },
    Completed {
        index: usize,
        total: usize,
        url: String,
        result: InspectionResult,
    },
}

/// Receives run-loop progress; backed by a terminal progress bar in the
/// application and by plain vectors in tests.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: CheckEvent);
}

/// Sink that discards all events.
pub struct NullProgressSink;

impl ProgressSink for NullProgressSink {
    fn emit(&self, _event: CheckEvent) {}
}

/// Check every URL sequentially against the given property.
///
/// One inspection call per URL, pacing applied between successive calls
/// but not after the last one. A failed inspection is recorded in the
/// report and never aborts the remaining URLs.
pub async fn run_checks(
    inspector: &dyn Inspect,
    urls: &[String],
    property: &str,
    pacer: &dyn Pacer,
    sink: &dyn ProgressSink,
) -> RunReport {
    let total = urls.len();
    let mut report = RunReport::new();

    for (position, url) in urls.iter().enumerate() {
        let index = position + 1;
        check_info!("Checking {}/{}: {}", index, total, url);
        sink.emit(CheckEvent::Started {
            index,
            total,
            url: url.clone(),
        });

        let result = inspector.inspect(url, property).await;
        report.record(url.clone(), result.clone());
        sink.emit(CheckEvent::Completed {
            index,
            total,
            url: url.clone(),
            result,
        });

        if index < total {
            pacer.pause().await;
        }
    }

    let summary = report.summary();
    check_info!(
        "Run finished: {} of {} indexed",
        summary.indexed,
        summary.total
    );
    report
}
