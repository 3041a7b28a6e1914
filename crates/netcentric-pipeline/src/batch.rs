//! Per-graph metrics pipeline and batch driver.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use netcentric_algo::{
    average_closeness, closeness_centrality, connected_components, summarize, MetricsRow,
};
use netcentric_graph::Graph;
use netcentric_io::{load_network, write_report};

use crate::error::PipelineError;

// ─────────────────────────────────────────────
// Per-graph metrics
// ─────────────────────────────────────────────

/// Metrics rows for one undirected graph.
///
/// Row order is a contract, not an implementation detail: the
/// `whole_network` row comes first, then one `subnetwork_<i>` row per
/// connected component in discovery order. Downstream consumers rely on
/// row position.
pub fn process_graph(graph: &Graph, source: &str) -> Result<Vec<MetricsRow>, PipelineError> {
    let components = connected_components(graph);
    let mut rows = Vec::with_capacity(components.len() + 1);
    rows.push(metrics_row(graph, source, "whole_network")?);
    for (i, members) in components.iter().enumerate() {
        let sub = graph.induced_subgraph(members)?;
        rows.push(metrics_row(&sub, source, &format!("subnetwork_{i}"))?);
    }
    Ok(rows)
}

fn metrics_row(graph: &Graph, source: &str, subnetwork: &str) -> Result<MetricsRow, PipelineError> {
    let summary = summarize(graph);
    let scores = closeness_centrality(graph);
    let average = average_closeness(&scores)?;
    Ok(MetricsRow {
        source: source.to_string(),
        subnetwork: subnetwork.to_string(),
        component_count: summary.components,
        node_count: summary.nodes,
        edge_count: summary.edges,
        average_closeness: average,
    })
}

// ─────────────────────────────────────────────
// Per-source pipeline
// ─────────────────────────────────────────────

/// A successfully processed source.
#[derive(Debug, Clone)]
pub struct SourceOutcome {
    pub source: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
}

/// A source that failed; the batch keeps going.
#[derive(Debug, Clone)]
pub struct SourceFailure {
    pub source: PathBuf,
    pub reason: String,
}

/// Everything a batch run produced.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub processed: Vec<SourceOutcome>,
    pub failures: Vec<SourceFailure>,
}

/// Default report destination: `<input>.closeness.csv` next to the input.
pub fn default_output_path(input: &Path) -> PathBuf {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{name}.closeness.csv"))
}

/// Run the full pipeline for one source file: load, undirect, score the
/// whole network and every component, write the report to `output`.
pub fn process_source(input: &Path, output: &Path) -> Result<SourceOutcome, PipelineError> {
    info!(source = %input.display(), "processing");

    let graph = load_network(input)?.into_undirected();
    let rows = process_graph(&graph, &input.display().to_string())?;

    let mut writer = BufWriter::new(File::create(output)?);
    let written = write_report(&mut writer, &rows)?;
    writer.flush()?;

    info!(source = %input.display(), output = %output.display(), rows = written, "finished processing");
    Ok(SourceOutcome {
        source: input.to_path_buf(),
        output: output.to_path_buf(),
        rows: written,
    })
}

/// Run [`process_source`] for every source, each writing its default
/// output path. Sources are visited in sorted order so a batch is
/// deterministic regardless of directory listing order; a failure is
/// recorded and the batch continues with the next source.
pub fn process_batch(sources: &[PathBuf]) -> BatchReport {
    let mut sorted: Vec<&PathBuf> = sources.iter().collect();
    sorted.sort();

    let mut report = BatchReport::default();
    for source in sorted {
        match process_source(source, &default_output_path(source)) {
            Ok(outcome) => report.processed.push(outcome),
            Err(e) => {
                warn!(source = %source.display(), error = %e, "skipping source");
                report.failures.push(SourceFailure {
                    source: source.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }
    report
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use netcentric_graph::{NodeId, RawNetwork};

    fn graph_of(links: &[(&str, &str)]) -> Graph {
        let mut raw = RawNetwork::new();
        for (a, b) in links {
            raw.add_link(NodeId::from(*a), NodeId::from(*b));
        }
        raw.into_undirected()
    }

    #[test]
    fn whole_network_row_comes_first() {
        let rows = process_graph(&graph_of(&[("a", "b"), ("c", "d")]), "x.gml").unwrap();
        let labels: Vec<&str> = rows.iter().map(|r| r.subnetwork.as_str()).collect();
        assert_eq!(labels, vec!["whole_network", "subnetwork_0", "subnetwork_1"]);
    }

    #[test]
    fn four_node_path_whole_network_row() {
        let rows = process_graph(&graph_of(&[("a", "b"), ("b", "c"), ("c", "d")]), "x.gml").unwrap();
        let whole = &rows[0];
        assert_eq!(whole.component_count, 1);
        assert_eq!(whole.node_count, 4);
        assert_eq!(whole.edge_count, 3);
        assert!((whole.average_closeness - 0.625).abs() < 1e-12);
        // One component: its subnetwork row repeats the whole-network metrics.
        assert_eq!(rows.len(), 2);
        assert!((rows[1].average_closeness - 0.625).abs() < 1e-12);
    }

    #[test]
    fn disjoint_edges_split_into_unit_closeness_subnetworks() {
        let rows = process_graph(&graph_of(&[("a", "b"), ("c", "d")]), "x.gml").unwrap();
        let whole = &rows[0];
        assert_eq!(whole.component_count, 2);
        assert_eq!(whole.average_closeness, 1.0);
        for sub in &rows[1..] {
            assert_eq!(sub.component_count, 1);
            assert_eq!(sub.node_count, 2);
            assert_eq!(sub.edge_count, 1);
            assert_eq!(sub.average_closeness, 1.0);
        }
    }

    #[test]
    fn empty_graph_fails_instead_of_emitting_nan() {
        let err = process_graph(&graph_of(&[]), "x.gml").unwrap_err();
        assert!(matches!(err, PipelineError::Metrics(_)));
    }

    #[test]
    fn default_output_appends_suffix() {
        assert_eq!(
            default_output_path(Path::new("/data/net.gml")),
            PathBuf::from("/data/net.gml.closeness.csv")
        );
    }
}
