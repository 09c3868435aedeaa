use std::io::Write;

use crate::domain::routing_view::RouterReport;
use crate::domain::simulation::ReportSink;
use crate::error::Result;

/// Writes reports in the plain text layout:
///
/// ```text
/// A Neighbour Table:
/// B|3
///
/// A LSDB:
/// A|B|3
///
/// A Routing Table:
/// B|B|3
///
/// ```
/// Empty blocks keep their header line.
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        TextRenderer { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_block<I, R>(&mut self, router: &str, title: &str, rows: I) -> Result<()>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator,
        R::Item: AsRef<[u8]>,
    {
        writeln!(self.out, "{} {}:", router, title)?;

        let mut row_writer = csv::WriterBuilder::new()
            .delimiter(b'|')
            .quote_style(csv::QuoteStyle::Never)
            .terminator(csv::Terminator::Any(b'\n'))
            .flexible(true)
            .has_headers(false)
            .from_writer(&mut self.out);

        for row in rows {
            row_writer.write_record(row)?;
        }
        row_writer.flush()?;
        drop(row_writer);

        writeln!(self.out)?;
        Ok(())
    }
}

impl<W: Write> ReportSink for TextRenderer<W> {
    fn emit(&mut self, report: &RouterReport) -> Result<()> {
        let router = report.router.as_str();

        self.write_block(router, "Neighbour Table", report.neighbours.iter().map(|entry| [entry.neighbour.to_string(), entry.cost.to_string()]))?;

        self.write_block(
            router,
            "LSDB",
            report.lsdb.iter().map(|record| [record.lesser.to_string(), record.greater.to_string(), record.cost.to_string()]),
        )?;

        self.write_block(
            router,
            "Routing Table",
            report.routing_table.iter().map(|route| [route.destination.to_string(), route.first_hop.to_string(), route.cost.to_string()]),
        )?;

        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::routing_view::{LinkStateRecord, NeighbourEntry, RoutingEntry};
    use crate::domain::utils::id::RouterId;

    #[test]
    fn test_empty_report_prints_headers_only() {
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.emit(&RouterReport::empty(RouterId::new("Q"))).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "Q Neighbour Table:\n\nQ LSDB:\n\nQ Routing Table:\n\n");
    }

    #[test]
    fn test_router_names_are_written_verbatim() {
        let report = RouterReport {
            router: RouterId::new("r\"1"),
            neighbours: vec![NeighbourEntry { neighbour: RouterId::new("r,2"), cost: 0 }],
            lsdb: vec![LinkStateRecord { lesser: RouterId::new("r\"1"), greater: RouterId::new("r,2"), cost: 0 }],
            routing_table: vec![RoutingEntry { destination: RouterId::new("r,2"), first_hop: RouterId::new("r,2"), cost: 0 }],
        };
        let mut renderer = TextRenderer::new(Vec::new());
        renderer.emit(&report).unwrap();

        let text = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(text, "r\"1 Neighbour Table:\nr,2|0\n\nr\"1 LSDB:\nr\"1|r,2|0\n\nr\"1 Routing Table:\nr,2|r,2|0\n\n");
    }
}
