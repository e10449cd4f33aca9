//! Scan report output port trait.

use crate::domain::error::SigscanError;
use crate::domain::report::ScanReport;
use std::path::Path;

/// Port for rendering and writing scan reports.
pub trait ReportPort {
    fn render(&self, report: &ScanReport) -> String;

    /// Default implementation: render and write to a file.
    fn write(&self, report: &ScanReport, output_path: &Path) -> Result<(), SigscanError> {
        std::fs::write(output_path, self.render(report))?;
        Ok(())
    }
}
