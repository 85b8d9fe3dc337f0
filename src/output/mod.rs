/// Finding ordering and emission in the selected output format.
pub mod formatter;
/// Builds a Markdown summary of findings.
pub mod report;
