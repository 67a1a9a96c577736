use crate::InspectionResult;

/// Ordered accumulation of per-URL results for one run.
///
/// Entries keep the order the URLs were checked in; re-recording a URL
/// replaces its earlier result so a finished run holds exactly one entry
/// per input URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    entries: Vec<(String, InspectionResult)>,
}

/// Pass/fail counts derived from a finished report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub indexed: usize,
    pub total: usize,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result for one URL, replacing any earlier entry for it.
    pub fn record(&mut self, url: impl Into<String>, result: InspectionResult) {
        let url = url.into();
        if let Some(entry) = self.entries.iter_mut().find(|(u, _)| *u == url) {
            entry.1 = result;
        } else {
            self.entries.push((url, result));
        }
    }

    pub fn get(&self, url: &str) -> Option<&InspectionResult> {
        self.entries
            .iter()
            .find(|(u, _)| u == url)
            .map(|(_, r)| r)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in the order the URLs were checked.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InspectionResult)> {
        self.entries.iter().map(|(u, r)| (u.as_str(), r))
    }

    pub fn summary(&self) -> Summary {
        Summary {
            indexed: self.entries.iter().filter(|(_, r)| r.indexed).count(),
            total: self.entries.len(),
        }
    }
}

impl Summary {
    /// Indexed share as a percentage string with one decimal, `"0.0%"` for
    /// an empty report.
    pub fn percent(&self) -> String {
        if self.total == 0 {
            return "0.0%".to_string();
        }
        format!("{:.1}%", self.indexed as f64 / self.total as f64 * 100.0)
    }

    /// Metric line shown after a run, e.g. `3 из 4 (75.0%)`.
    pub fn metric_text(&self) -> String {
        format!("{} из {} ({})", self.indexed, self.total, self.percent())
    }
}
