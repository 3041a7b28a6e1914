//! File formats for the netcentric engine.
//!
//! Loaders turn a `.gml` / `.xgmml` file into a [`netcentric_graph::RawNetwork`];
//! [`report`] writes the tab-separated metrics table. Everything else about
//! the files (visual attributes, nested metadata) is skipped, not rejected.

pub mod error;
pub mod gml;
pub mod loader;
pub mod report;
pub mod xgmml;

pub use error::LoadError;
pub use loader::{is_network_file, load_network};
pub use report::write_report;
