use std::io::Write;

use crate::api::report_dto::RouterReportDto;
use crate::domain::routing_view::RouterReport;
use crate::domain::simulation::ReportSink;
use crate::error::Result;

/// Writes one JSON object per report, each on its own line.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        JsonLinesRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportSink for JsonLinesRenderer<W> {
    fn emit(&mut self, report: &RouterReport) -> Result<()> {
        serde_json::to_writer(&mut self.out, &RouterReportDto::from(report))?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
