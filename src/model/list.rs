//! Per-kind list run state for the line scanner.

use serde::{Deserialize, Serialize};

/// The three list kinds tracked independently by the block scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    /// `* item` (rewritten to `%item` during normalization)
    Unordered,
    /// `# item`
    Ordered,
    /// `; term` / `: definition`
    Description,
}

impl ListKind {
    /// Opening wrapper tag.
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "<ul>",
            ListKind::Ordered => "<ol>",
            ListKind::Description => "<dl>",
        }
    }

    /// Closing wrapper tag.
    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "</ul>",
            ListKind::Ordered => "</ol>",
            ListKind::Description => "</dl>",
        }
    }
}

/// Outcome of feeding one line to a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStep {
    /// The line starts a new run; the opening tag goes on this line.
    Opened,
    /// The line extends the open run.
    Continued,
    /// The line ends the open run; the closing tag goes on the previous line.
    Closed,
    /// No run is open and the line does not start one.
    Idle,
}

/// Run state for one list kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListRun {
    open: bool,
    lines: usize,
}

impl ListRun {
    /// Create a closed run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the run by one line.
    pub fn advance(&mut self, matched: bool) -> RunStep {
        match (matched, self.open) {
            (true, false) => {
                self.open = true;
                self.lines = 1;
                RunStep::Opened
            }
            (true, true) => {
                self.lines += 1;
                RunStep::Continued
            }
            (false, true) => {
                self.open = false;
                self.lines = 0;
                RunStep::Closed
            }
            (false, false) => RunStep::Idle,
        }
    }

    /// Close the run at end of document. Returns `true` if it was open.
    pub fn finish(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        self.lines = 0;
        was_open
    }

    /// Whether a run is currently open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Lines consumed by the current run.
    pub fn lines(&self) -> usize {
        self.lines
    }
}

/// Classification of a line for description lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionLine {
    /// `;term:definition` on one line, rendered as its own `<dl>`
    SingleLine,
    /// `;term`
    Term,
    /// `:definition`
    Definition,
    /// Anything else
    Other,
}

/// Description list run: definition lines only count while a term run is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DescriptionListRun {
    run: ListRun,
}

impl DescriptionListRun {
    /// Create a closed run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the run by one classified line.
    pub fn advance(&mut self, line: DescriptionLine) -> RunStep {
        match line {
            DescriptionLine::Term => self.run.advance(true),
            DescriptionLine::Definition if self.run.is_open() => self.run.advance(true),
            // A single-line entry neither extends nor breaks an open run.
            DescriptionLine::SingleLine if self.run.is_open() => RunStep::Continued,
            DescriptionLine::SingleLine => RunStep::Idle,
            DescriptionLine::Definition | DescriptionLine::Other => self.run.advance(false),
        }
    }

    /// Close the run at end of document. Returns `true` if it was open.
    pub fn finish(&mut self) -> bool {
        self.run.finish()
    }

    /// Whether a term run is currently open.
    pub fn is_open(&self) -> bool {
        self.run.is_open()
    }
}
