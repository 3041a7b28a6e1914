//! Graph metrics for the netcentric engine.
//!
//! - **Components**: connected components via BFS sweep, discovery order
//! - **Centrality**: unweighted closeness per node (no Wasserman–Faust
//!   rescaling — components are meant to be scored independently)
//! - **Aggregation**: per-(sub)graph summary and average closeness

pub mod aggregate;
pub mod centrality;
pub mod components;
pub mod error;

pub use aggregate::{average_closeness, summarize, GraphSummary, MetricsRow};
pub use centrality::closeness_centrality;
pub use components::connected_components;
pub use error::MetricsError;
