//! XGMML loader.
//!
//! Event-driven parse of the XGMML subset Cytoscape and friends emit:
//! a `<graph>` element containing `<node id label>` and
//! `<edge source target>` children. `<att>` payloads and any other elements
//! are skipped. As with GML, nodes are keyed by label when present and by
//! raw id otherwise; edges reference nodes by id.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use netcentric_graph::{NodeId, RawNetwork};

use crate::error::LoadError;

/// Parse XGMML text into a [`RawNetwork`].
pub fn parse(input: &str) -> Result<RawNetwork, LoadError> {
    let mut reader = Reader::from_str(input);

    let mut saw_graph = false;
    let mut nodes: Vec<(String, NodeId)> = Vec::new();
    let mut links: Vec<(String, String)> = Vec::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                match e.local_name().as_ref() {
                    b"graph" => saw_graph = true,
                    b"node" => nodes.push(parse_node(&e)?),
                    b"edge" => links.push(parse_edge(&e)?),
                    _ => {} // <att>, <graphics>, ...
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(LoadError::Parse(e.to_string())),
        }
    }

    if !saw_graph {
        return Err(LoadError::Parse("no <graph> element found".into()));
    }

    let by_id: HashMap<String, NodeId> = nodes
        .iter()
        .map(|(id, key)| (id.clone(), key.clone()))
        .collect();

    let mut raw = RawNetwork::new();
    for (_, key) in nodes {
        raw.add_node(key);
    }
    for (source, target) in links {
        let from = by_id.get(&source).cloned().unwrap_or_else(|| NodeId::new(source));
        let to = by_id.get(&target).cloned().unwrap_or_else(|| NodeId::new(target));
        raw.add_link(from, to);
    }
    Ok(raw)
}

fn parse_node(e: &BytesStart<'_>) -> Result<(String, NodeId), LoadError> {
    let mut id = None;
    let mut label = None;
    for attr in e.attributes() {
        let attr = attr.map_err(|e| LoadError::Parse(e.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| LoadError::Parse(e.to_string()))?
            .into_owned();
        match attr.key.as_ref() {
            b"id" => id = Some(value),
            b"label" => label = Some(value),
            _ => {}
        }
    }
    let id = id.ok_or_else(|| LoadError::Parse("<node> without id attribute".into()))?;
    let key = NodeId::new(label.unwrap_or_else(|| id.clone()));
    Ok((id, key))
}

fn parse_edge(e: &BytesStart<'_>) -> Result<(String, String), LoadError> {
    let mut source = None;
    let mut target = None;
    for attr in e.attributes() {
        let attr = attr.map_err(|e| LoadError::Parse(e.to_string()))?;
        let value = attr
            .unescape_value()
            .map_err(|e| LoadError::Parse(e.to_string()))?
            .into_owned();
        match attr.key.as_ref() {
            b"source" => source = Some(value),
            b"target" => target = Some(value),
            _ => {}
        }
    }
    match (source, target) {
        (Some(s), Some(t)) => Ok((s, t)),
        _ => Err(LoadError::Parse("<edge> without source/target".into())),
    }
}
