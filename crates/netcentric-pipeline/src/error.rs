use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("load error: {0}")]
    Load(#[from] netcentric_io::LoadError),

    #[error("metrics error: {0}")]
    Metrics(#[from] netcentric_algo::MetricsError),

    #[error("graph error: {0}")]
    Graph(#[from] netcentric_graph::GraphError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
