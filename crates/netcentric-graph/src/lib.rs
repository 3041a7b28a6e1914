//! # netcentric-graph
//!
//! Undirected graph model for the netcentric metrics engine.
//!
//! Provides the read-only structure the algorithms run over:
//! - [`model::NodeId`]     — opaque textual node identifier
//! - [`model::RawNetwork`] — loader output, possibly directed and duplicated
//! - [`model::Graph`]      — immutable undirected graph with dense adjacency

pub mod error;
pub mod model;

pub use error::GraphError;
pub use model::{Graph, NodeId, RawNetwork};
