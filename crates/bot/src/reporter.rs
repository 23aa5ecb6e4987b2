//! Message sink that forwards controller diagnostics to `tracing`.

use game_core::MessageReporter;

/// Emits every reported message as an `info` event under the given source.
#[derive(Clone, Copy, Debug)]
pub struct TracingReporter {
    source: &'static str,
}

impl TracingReporter {
    pub const fn new(source: &'static str) -> Self {
        Self { source }
    }
}

impl Default for TracingReporter {
    fn default() -> Self {
        Self::new("bot")
    }
}

impl MessageReporter for TracingReporter {
    fn report(&mut self, message: &str) {
        tracing::info!(source = self.source, "{message}");
    }
}
