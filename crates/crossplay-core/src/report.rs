//! Diagnostics emitted while building a grid.
//!
//! Building never writes to a global logger. Callers pass a [`Reporter`] and
//! decide where diagnostics go; [`LogReporter`] forwards them to the `log`
//! facade for applications that have a logger installed.

/// A non-fatal observation made during construction.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum Diagnostic {
    /// The clue-text list has more entries than the grid has words.
    #[display("{used} of {available} clue texts were assigned to words; the rest are unused")]
    UnusedClueTexts {
        /// Entries consumed by word starts.
        used: usize,
        /// Entries supplied.
        available: usize,
    },
}

/// Receives diagnostics from the grid builder.
pub trait Reporter {
    /// Handles one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&mut self, _diagnostic: Diagnostic) {}
}

/// Forwards diagnostics to the `log` facade at warning level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

/// Keeps every diagnostic in order of arrival.
#[derive(Debug, Clone, Default)]
pub struct CollectingReporter {
    diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collected diagnostics.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
