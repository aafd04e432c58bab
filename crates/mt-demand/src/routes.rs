//! SUMO route-demand file (`.rou.xml`) writer and reader.
//!
//! # Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <routes>
//!     <vType id="manet_vehicle" accel="2.0" decel="4.0" sigma="0.3"
//!            length="4.5" width="1.8" maxSpeed="13.89" speedFactor="0.9"/>
//!     <vehicle id="vehicle_0000" type="manet_vehicle" depart="0.00">
//!         <route edges="R1"/>
//!     </vehicle>
//! </routes>
//! ```
//!
//! Departure times are truncated (not rounded) to two decimals, so a
//! departure generated before the horizon still reads back before it.  The
//! whole document is rendered in memory and written in one call, so a failed
//! run never leaves a truncated file behind.
//!
//! The reader accepts any document with `<vehicle>` elements carrying an
//! `id`, a numeric `depart`, and a nested `<route edges="…">`.  Vehicles
//! missing any of those are skipped.

use std::fmt;
use std::path::Path;

use roxmltree::{Document, Node};
use tracing::{info, warn};

use mt_core::floor2;

use crate::{DemandError, DemandResult, DepartureEvent, VehicleType};

// ── Writer ────────────────────────────────────────────────────────────────────

/// Render the route document for `events`.
///
/// # Errors
///
/// [`DemandError::Render`] if formatting fails.
pub fn render_routes(events: &[DepartureEvent], vtype: &VehicleType) -> DemandResult<String> {
    let mut out = String::with_capacity(256 + events.len() * 128);
    write_document(&mut out, events, vtype)?;
    Ok(out)
}

fn write_document(out: &mut impl fmt::Write, events: &[DepartureEvent], vtype: &VehicleType) -> fmt::Result {
    let type_id = escape_attr(&vtype.id);

    writeln!(out, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
    writeln!(out, "<routes>")?;
    writeln!(
        out,
        "    <vType id=\"{type_id}\" accel=\"{:.1}\" decel=\"{:.1}\" sigma=\"{}\"",
        vtype.accel, vtype.decel, vtype.sigma,
    )?;
    writeln!(
        out,
        "           length=\"{}\" width=\"{}\" maxSpeed=\"{}\" speedFactor=\"{}\"/>",
        vtype.length, vtype.width, vtype.max_speed, vtype.speed_factor,
    )?;
    writeln!(out)?;

    for e in events {
        writeln!(
            out,
            "    <vehicle id=\"{}\" type=\"{type_id}\" depart=\"{:.2}\">",
            e.vehicle,
            floor2(e.depart_secs),
        )?;
        writeln!(out, "        <route edges=\"{}\"/>", escape_attr(&e.edge))?;
        writeln!(out, "    </vehicle>")?;
    }

    writeln!(out, "</routes>")
}

/// Render and write the route document to `path`.
///
/// # Errors
///
/// [`DemandError::NoVehicles`] for an empty `events` slice (no file is
/// created or truncated), [`DemandError::Io`] on write failure.
pub fn write_routes_file(path: &Path, events: &[DepartureEvent], vtype: &VehicleType) -> DemandResult<()> {
    if events.is_empty() {
        return Err(DemandError::NoVehicles);
    }
    std::fs::write(path, render_routes(events, vtype)?)?;
    info!(path = %path.display(), vehicles = events.len(), "route file written");
    Ok(())
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

// ── Reader ────────────────────────────────────────────────────────────────────

/// One vehicle read back from a route document.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteRecord {
    pub vehicle_id:  String,
    pub depart_secs: f64,
    /// Ordered edge ids of the route.
    pub edges:       Vec<String>,
}

/// Load every usable vehicle from a route file.
pub fn load_routes_file(path: &Path) -> DemandResult<Vec<RouteRecord>> {
    let text = std::fs::read_to_string(path)?;
    load_routes_str(&text)
}

/// Like [`load_routes_file`] but parses an in-memory document.
///
/// # Errors
///
/// - [`DemandError::Unreadable`] — not well-formed XML.
/// - [`DemandError::NoVehicles`] — no usable `<vehicle>` element.
pub fn load_routes_str(text: &str) -> DemandResult<Vec<RouteRecord>> {
    let doc = Document::parse(text).map_err(|e| DemandError::Unreadable(e.to_string()))?;

    let records: Vec<RouteRecord> = doc
        .descendants()
        .filter(|n| n.has_tag_name("vehicle"))
        .filter_map(read_vehicle)
        .collect();

    if records.is_empty() {
        return Err(DemandError::NoVehicles);
    }
    info!(vehicles = records.len(), "route file read");
    Ok(records)
}

fn read_vehicle(vehicle: Node<'_, '_>) -> Option<RouteRecord> {
    let id = vehicle.attribute("id").filter(|s| !s.is_empty())?;
    let depart = vehicle.attribute("depart").filter(|s| !s.is_empty())?;
    let Some(depart_secs) = depart.trim().parse::<f64>().ok().filter(|d| d.is_finite()) else {
        warn!(vehicle = id, depart, "invalid departure time; vehicle skipped");
        return None;
    };

    let edges: Vec<String> = vehicle
        .children()
        .find(|n| n.has_tag_name("route"))?
        .attribute("edges")?
        .split_whitespace()
        .map(str::to_owned)
        .collect();
    if edges.is_empty() {
        return None;
    }

    Some(RouteRecord {
        vehicle_id: id.to_owned(),
        depart_secs,
        edges,
    })
}
