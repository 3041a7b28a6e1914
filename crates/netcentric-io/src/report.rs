//! Tab-separated metrics report.

use std::io::{self, Write};

use netcentric_algo::MetricsRow;

/// Column header, one per [`MetricsRow`] field.
pub const HEADER: &str =
    "file\tnumber of subnetwork\tnumber_subnetworks\tnumber_nodes\tnumber_edges\taverage_closeness";

/// Write the header plus one line per row; returns the number of data rows.
pub fn write_report<W: Write>(writer: &mut W, rows: &[MetricsRow]) -> io::Result<usize> {
    writeln!(writer, "{HEADER}")?;
    for row in rows {
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}",
            row.source,
            row.subnetwork,
            row.component_count,
            row.node_count,
            row.edge_count,
            row.average_closeness,
        )?;
    }
    Ok(rows.len())
}
