use checker_engine::{CheckEvent, ProgressSink};
use indicatif::{ProgressBar, ProgressStyle};

/// Terminal progress bar fed by run-loop events.
pub struct IndicatifProgressSink {
    bar: ProgressBar,
}

impl IndicatifProgressSink {
    pub fn new(total: u64) -> Self {
        let bar = ProgressBar::new(total);
        bar.set_style(
            ProgressStyle::with_template("[{bar:40.cyan/blue}] {pos}/{len} {wide_msg}")
                .expect("static progress template")
                .progress_chars("=> "),
        );
        Self { bar }
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Проверка завершена");
    }
}

impl ProgressSink for IndicatifProgressSink {
    fn emit(&self, event: CheckEvent) {
        match event {
            CheckEvent::Started { index, total, url } => {
                self.bar
                    .set_message(format!("Проверка {index}/{total}: {url}"));
            }
            CheckEvent::Completed { .. } => {
                self.bar.inc(1);
            }
        }
    }
}
