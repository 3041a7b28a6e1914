use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("empty graph: average closeness is undefined over zero nodes")]
    EmptyGraph,

    #[error("graph error: {0}")]
    Graph(#[from] netcentric_graph::GraphError),
}
