//! GML loader.
//!
//! Parses the GML subset that network tools emit: a top-level `graph [ ... ]`
//! block with `node [ id ... label "..." ]` and `edge [ source ... target ... ]`
//! children. Unknown keys and nested blocks (`graphics`, `Creator`, ...) are
//! skipped. Nodes are keyed by their label when present, by their raw id
//! otherwise; edges reference nodes by id.

use std::collections::HashMap;

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use netcentric_graph::{NodeId, RawNetwork};

use crate::error::LoadError;

// ── Pest parser derive ─────────────────────────────────────

#[derive(Parser)]
#[grammar = "src/gml.pest"]
pub struct GmlParser;

// ── Public entry point ────────────────────────────────────

/// Parse GML text into a [`RawNetwork`].
pub fn parse(input: &str) -> Result<RawNetwork, LoadError> {
    let pairs = GmlParser::parse(Rule::document, input)?;
    let document = pairs
        .into_iter()
        .next()
        .ok_or_else(|| LoadError::Parse("empty input".into()))?;

    for pair in document.into_inner() {
        if pair.as_rule() != Rule::pair {
            continue; // EOI
        }
        let (key, value) = split_pair(pair)?;
        if key == "graph" {
            if value.as_rule() != Rule::block {
                return Err(LoadError::Parse("'graph' must be a block".into()));
            }
            return parse_graph_block(value);
        }
    }
    Err(LoadError::Parse("no 'graph' block found".into()))
}

// ── Graph block ───────────────────────────────────────────

fn parse_graph_block(block: Pair<Rule>) -> Result<RawNetwork, LoadError> {
    // (id text, node key) in document order; links still carry raw ids.
    let mut nodes: Vec<(String, NodeId)> = Vec::new();
    let mut links: Vec<(String, String)> = Vec::new();

    for pair in block.into_inner() {
        let (key, value) = split_pair(pair)?;
        match (key.as_str(), value.as_rule()) {
            ("node", Rule::block) => nodes.push(parse_node_block(value)?),
            ("edge", Rule::block) => links.push(parse_edge_block(value)?),
            // `directed`, `label`, `Creator`, nested blocks, ... — skipped.
            _ => {}
        }
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
        let from = resolve(&by_id, source);
        let to = resolve(&by_id, target);
        raw.add_link(from, to);
    }
    Ok(raw)
}

fn parse_node_block(block: Pair<Rule>) -> Result<(String, NodeId), LoadError> {
    let mut id = None;
    let mut label = None;
    for pair in block.into_inner() {
        let (key, value) = split_pair(pair)?;
        match key.as_str() {
            "id" => id = scalar_text(value),
            "label" => label = scalar_text(value),
            _ => {}
        }
    }
    let id = id.ok_or_else(|| LoadError::Parse("node without 'id'".into()))?;
    let key = NodeId::new(label.unwrap_or_else(|| id.clone()));
    Ok((id, key))
}

fn parse_edge_block(block: Pair<Rule>) -> Result<(String, String), LoadError> {
    let mut source = None;
    let mut target = None;
    for pair in block.into_inner() {
        let (key, value) = split_pair(pair)?;
        match key.as_str() {
            "source" => source = scalar_text(value),
            "target" => target = scalar_text(value),
            _ => {}
        }
    }
    match (source, target) {
        (Some(s), Some(t)) => Ok((s, t)),
        _ => Err(LoadError::Parse("edge without 'source'/'target'".into())),
    }
}

// ── Helpers ───────────────────────────────────────────────

fn split_pair(pair: Pair<Rule>) -> Result<(String, Pair<Rule>), LoadError> {
    let mut inner = pair.into_inner();
    let key = inner
        .next()
        .ok_or_else(|| LoadError::Parse("pair missing key".into()))?
        .as_str()
        .to_string();
    let value = inner
        .next()
        .and_then(|v| v.into_inner().next())
        .ok_or_else(|| LoadError::Parse(format!("'{key}' missing value")))?;
    Ok((key, value))
}

/// Text of a scalar value: quoted strings are unquoted, numbers kept as
/// written (so ids like `1` and `1.5` round-trip exactly). Blocks are not
/// scalars.
fn scalar_text(value: Pair<Rule>) -> Option<String> {
    match value.as_rule() {
        Rule::string => {
            let s = value.as_str();
            Some(s[1..s.len() - 1].to_string())
        }
        Rule::number => Some(value.as_str().to_string()),
        _ => None,
    }
}

fn resolve(by_id: &HashMap<String, NodeId>, id: String) -> NodeId {
    by_id.get(&id).cloned().unwrap_or_else(|| NodeId::new(id))
}

// ── Tests ─────────────────────────────────────────────────
