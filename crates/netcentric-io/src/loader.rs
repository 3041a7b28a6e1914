//! Extension dispatch for network files.

use std::fs;
use std::path::Path;

use netcentric_graph::RawNetwork;

use crate::error::LoadError;
use crate::{gml, xgmml};

/// True when the file name has a recognized network extension.
pub fn is_network_file(path: &Path) -> bool {
    matches!(extension_of(path).as_deref(), Some("gml") | Some("xgmml"))
}

/// Load a network file, dispatching on its extension.
///
/// `.gml` and `.xgmml` are recognized (case-insensitive); anything else is
/// [`LoadError::UnsupportedFormat`] without touching the filesystem.
pub fn load_network(path: &Path) -> Result<RawNetwork, LoadError> {
    match extension_of(path).as_deref() {
        Some("gml") => gml::parse(&fs::read_to_string(path)?),
        Some("xgmml") => xgmml::parse(&fs::read_to_string(path)?),
        _ => Err(LoadError::UnsupportedFormat { path: path.to_path_buf() }),
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn recognizes_network_extensions() {
        assert!(is_network_file(Path::new("net.gml")));
        assert!(is_network_file(Path::new("net.xgmml")));
        assert!(is_network_file(Path::new("NET.GML")));
        assert!(!is_network_file(Path::new("net.txt")));
        assert!(!is_network_file(Path::new("gml"))); // no extension
    }

    #[test]
    fn unknown_extension_is_unsupported_before_any_io() {
        // The path does not exist; dispatch must reject it on extension alone.
        let err = load_network(Path::new("missing.csv")).unwrap_err();
        match err {
            LoadError::UnsupportedFormat { path } => {
                assert_eq!(path, PathBuf::from("missing.csv"));
            }
            other => panic!("expected UnsupportedFormat, got {other}"),
        }
    }

    #[test]
    fn missing_gml_file_is_an_io_error() {
        assert!(matches!(
            load_network(Path::new("does_not_exist.gml")),
            Err(LoadError::Io(_))
        ));
    }
}
