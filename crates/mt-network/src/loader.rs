//! SUMO network loader.
//!
//! # What is loaded
//!
//! Every `<edge>` element anywhere in the document becomes a [`Road`] unless
//! its `id` is missing/empty or starts with [`INTERNAL_PREFIX`].  Per road:
//!
//! | Field    | Source                                                        |
//! |----------|---------------------------------------------------------------|
//! | `from`   | `from` attribute, else `"unknown"`                            |
//! | `to`     | `to` attribute, else `"unknown"`                              |
//! | `shape`  | `shape` of the first `<lane>` child; empty if absent/malformed |
//! | `length` | see below                                                     |
//!
//! Length resolution, first match wins:
//!
//! 1. the edge's `length` attribute, if it parses as a finite float `> 0`;
//! 2. the arc length of the lane shape, if it parsed and is `> 0`;
//! 3. `PipelineConfig::default_length_m`.
//!
//! Per-element problems never abort the load; they are logged with
//! `tracing::warn!` and degrade that one road.  Only an unparsable document,
//! a document without `<edge>` elements, or one without usable roads is an
//! error.

use std::path::Path;

use roxmltree::{Document, Node};
use tracing::{debug, info, warn};

use mt_core::{PipelineConfig, parse_shape, polyline_length};

use crate::road::{INTERNAL_PREFIX, LengthSource, Road};
use crate::{NetworkError, NetworkResult, NetworkSummary, RoadNetwork};

// ── Public entry points ───────────────────────────────────────────────────────

/// Load and rank the roads of a network file.
///
/// # Errors
///
/// [`NetworkError::Io`] if the file cannot be read, otherwise as
/// [`load_network_str`].
pub fn load_network_file(path: &Path, config: &PipelineConfig) -> NetworkResult<RoadNetwork> {
    let text = std::fs::read_to_string(path)?;
    load_network_str(&text, config)
}

/// Like [`load_network_file`] but parses an in-memory document.
///
/// # Errors
///
/// - [`NetworkError::Unreadable`] — not well-formed XML.
/// - [`NetworkError::NoEdges`]    — no `<edge>` element at all.
/// - [`NetworkError::NoRoads`]    — every edge was internal or had no id.
pub fn load_network_str(text: &str, config: &PipelineConfig) -> NetworkResult<RoadNetwork> {
    let doc = Document::parse(text).map_err(|e| NetworkError::Unreadable(e.to_string()))?;

    let mut summary = NetworkSummary {
        root_tag: doc.root_element().tag_name().name().to_owned(),
        ..NetworkSummary::default()
    };
    let mut roads = Vec::new();

    for node in doc.descendants().filter(Node::is_element) {
        match node.tag_name().name() {
            "junction" => summary.junction_elements += 1,
            "edge" => {
                summary.edge_elements += 1;
                match read_road(node, config.default_length_m) {
                    Some(road) => roads.push(road),
                    None => summary.skipped_edges += 1,
                }
            }
            _ => {}
        }
    }

    info!(
        root = %summary.root_tag,
        edges = summary.edge_elements,
        junctions = summary.junction_elements,
        "network document parsed"
    );

    if summary.edge_elements == 0 {
        return Err(NetworkError::NoEdges);
    }
    if roads.is_empty() {
        return Err(NetworkError::NoRoads);
    }

    let network = RoadNetwork::new(roads, summary);
    debug!(
        roads = network.len(),
        skipped = network.summary().skipped_edges,
        "roads ranked by length"
    );
    Ok(network)
}

// ── Per-element helpers ───────────────────────────────────────────────────────

/// Build a road from one `<edge>` element, or `None` for internal / id-less
/// edges.
fn read_road(edge: Node<'_, '_>, default_length_m: f64) -> Option<Road> {
    let id = edge.attribute("id").filter(|id| !id.is_empty())?;
    if id.starts_with(INTERNAL_PREFIX) {
        return None;
    }

    let endpoint = |attr: &str| {
        edge.attribute(attr)
            .filter(|v| !v.is_empty())
            .unwrap_or(Road::UNKNOWN_NODE)
            .to_owned()
    };

    let shape = match first_lane_shape(edge) {
        None => Vec::new(),
        Some(raw) => parse_shape(raw).unwrap_or_else(|e| {
            warn!(edge = id, error = %e, "malformed lane shape; geometry dropped");
            Vec::new()
        }),
    };

    let (length_m, length_source) = resolve_length(edge.attribute("length"), &shape, default_length_m);
    if length_source == LengthSource::Fallback {
        debug!(edge = id, length_m, "no usable length; using fallback");
    }

    Some(Road {
        id: id.to_owned(),
        from: endpoint("from"),
        to: endpoint("to"),
        length_m,
        length_source,
        shape,
    })
}

/// `shape` attribute of the first `<lane>` child, if present and non-blank.
fn first_lane_shape<'a>(edge: Node<'a, '_>) -> Option<&'a str> {
    edge.children()
        .find(|n| n.has_tag_name("lane"))
        .and_then(|lane| lane.attribute("shape"))
        .filter(|s| !s.trim().is_empty())
}

/// Apply the attribute → shape → fallback length rule.
pub(crate) fn resolve_length(
    attribute:        Option<&str>,
    shape:            &[mt_core::Point],
    default_length_m: f64,
) -> (f64, LengthSource) {
    let explicit = attribute
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|l| l.is_finite() && *l > 0.0);
    if let Some(length) = explicit {
        return (length, LengthSource::Attribute);
    }

    let arc = polyline_length(shape);
    if arc.is_finite() && arc > 0.0 {
        return (arc, LengthSource::Shape);
    }

    (default_length_m, LengthSource::Fallback)
}
