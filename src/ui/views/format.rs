//! Enum-to-label and value formatting shared by the sections.

use crate::domain::{
    AuthorizationAccuracy, AuthorizationStatus, BeaconReading, Coordinate, Heading, Position,
    RegionEvent, RegionState, Visit,
};
use chrono::{DateTime, Utc};

pub const UNKNOWN: &str = "Unknown";

pub fn authorization_status(status: AuthorizationStatus) -> &'static str {
    match status {
        AuthorizationStatus::NotDetermined => "Not Determined",
        AuthorizationStatus::Denied => "Denied",
        AuthorizationStatus::Restricted => "Restricted",
        AuthorizationStatus::AuthorizedWhenInUse => "When In Use",
        AuthorizationStatus::AuthorizedAlways => "Always",
    }
}

pub fn authorization_accuracy(accuracy: AuthorizationAccuracy) -> &'static str {
    match accuracy {
        AuthorizationAccuracy::Full => "Full",
        AuthorizationAccuracy::Reduced => "Reduced",
        AuthorizationAccuracy::None => "None",
    }
}

pub fn coordinate(coordinate: &Coordinate) -> String {
    format!(
        "Lat: {:.5}, Lon: {:.5}",
        coordinate.latitude, coordinate.longitude
    )
}

pub fn position(position: Option<&Position>) -> String {
    position
        .map(|p| coordinate(&p.coordinate))
        .unwrap_or_else(|| UNKNOWN.to_string())
}

pub fn heading(heading: Option<&Heading>) -> String {
    match heading {
        Some(h) => format!("{:.1}° (±{:.1}°)", h.direction, h.accuracy),
        None => UNKNOWN.to_string(),
    }
}

pub fn region_event(event: Option<&RegionEvent>) -> String {
    let Some(event) = event else {
        return UNKNOWN.to_string();
    };
    let state = match event.state {
        RegionState::Inside => "inside",
        RegionState::Outside => "outside",
        RegionState::Unknown => "unknown",
    };
    format!("{} ({state})", event.region_id)
}

pub fn beacons(beacons: &[BeaconReading]) -> String {
    if beacons.is_empty() {
        return "None in range".to_string();
    }
    beacons
        .iter()
        .map(|b| format!("{} ({} dBm)", b.id, b.rssi))
        .collect::<Vec<_>>()
        .join(", ")
}

fn time(timestamp: Option<&DateTime<Utc>>) -> String {
    timestamp
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn visit(visit: Option<&Visit>) -> String {
    match visit {
        Some(v) => format!(
            "arrived {}, departed {}, {}",
            time(v.arrival.as_ref()),
            time(v.departure.as_ref()),
            coordinate(&v.coordinate)
        ),
        None => UNKNOWN.to_string(),
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
