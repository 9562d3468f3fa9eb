use std::fmt;

use serde::Serialize;

/// Counters from one extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractionStats {
    /// Lines read from the input
    pub lines_read: usize,
    /// Lines that matched the layout prefix
    pub lines_matched: usize,
    /// Records produced
    pub records_extracted: usize,
    /// Matching lines dropped as malformed
    pub lines_skipped: usize,
}

impl fmt::Display for ExtractionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Extracted {} records from {} matching lines ({} skipped, {} lines read)",
            self.records_extracted, self.lines_matched, self.lines_skipped, self.lines_read
        )
    }
}
