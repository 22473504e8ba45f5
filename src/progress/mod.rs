use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Trait for progress reporting
pub trait ProgressReporter: Send + Sync {
    fn set_message(&self, msg: &str);
    fn finish(&self);
}

/// Indicatif spinner for operations with no measurable progress
pub struct IndicatifProgress {
    bar: ProgressBar,
}

impl IndicatifProgress {
    pub fn spinner() -> Self {
        let bar = ProgressBar::new_spinner();
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} ({elapsed})")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        bar.set_style(style);
        bar.enable_steady_tick(Duration::from_millis(100));

        Self { bar }
    }
}

impl ProgressReporter for IndicatifProgress {
    fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// No-op progress reporter for when progress reporting is disabled
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    fn set_message(&self, _msg: &str) {}
    fn finish(&self) {}
}

/// Hands out spinners, or no-ops when output is quiet or machine-readable
pub struct ProgressFactory {
    enabled: bool,
}

impl ProgressFactory {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Spinner for a long-running bridge call
    pub fn command(&self, message: &str) -> Box<dyn ProgressReporter> {
        if !self.enabled {
            return Box::new(NoOpProgress);
        }

        let progress = IndicatifProgress::spinner();
        progress.set_message(message);
        Box::new(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_factory_hands_out_noop() {
        let factory = ProgressFactory::new(false);
        let progress = factory.command("Waiting for device");
        progress.set_message("still waiting");
        progress.finish();
    }
}
