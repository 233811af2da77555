//! Line-oriented output sinks for inventory operations.

/// Receives the observable output of the inventory, one line at a time.
///
/// Sinks cannot fail; inventory operations always succeed.
pub trait Report {
    fn line(&mut self, line: &str);
}

impl<R> Report for &mut R
where
    R: Report + ?Sized,
{
    fn line(&mut self, line: &str) {
        (**self).line(line)
    }
}

/// Prints every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReport;

impl Report for StdoutReport {
    fn line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Collects lines in memory, for tests and embedding.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryReport {
    lines: Vec<String>,
}

impl MemoryReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Drain everything collected so far.
    pub fn take(&mut self) -> Vec<String> {
        core::mem::take(&mut self.lines)
    }
}

impl Report for MemoryReport {
    fn line(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}
