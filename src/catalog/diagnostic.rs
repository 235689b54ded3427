//! Canned diagnostic records for named vehicle subsystems.
//!
//! These are static reports, not derived from scans: the dashboard and the
//! `diagnostic` subcommand read them as-is. `lookup` is total; an id the
//! catalog does not know resolves to a fixed fallback record.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    Normal,
    Warning,
}

impl SystemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemStatus::Normal => "normal",
            SystemStatus::Warning => "warning",
        }
    }
}

/// A single named reading inside a diagnostic record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub name: String,
    pub value: String,
    pub status: SystemStatus,
}

/// Static report for one vehicle subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    pub id: String,
    pub system: String,
    pub status: SystemStatus,
    pub message: String,
    pub details: Vec<Reading>,
    pub description: String,
}

/// Canned live readings shown on the status card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleStatus {
    pub engine_rpm: u32,
    pub temperature_c: u32,
    pub oil_level_pct: u32,
    pub battery_voltage: f64,
}

/// Subsystem ids the catalog has full records for, in dashboard order.
pub const KNOWN_SYSTEMS: &[&str] = &["engine-performance", "brake-system"];

fn reading(name: &str, value: &str, status: SystemStatus) -> Reading {
    Reading {
        name: name.to_string(),
        value: value.to_string(),
        status,
    }
}

/// Resolve a subsystem id to its diagnostic record. Never fails: empty or
/// unrecognized ids get the fallback record.
pub fn lookup(id: &str) -> DiagnosticRecord {
    match id {
        "engine-performance" => DiagnosticRecord {
            id: "engine-performance".to_string(),
            system: "Engine Performance".to_string(),
            status: SystemStatus::Normal,
            message: "Operating within normal parameters".to_string(),
            details: vec![
                reading("Engine RPM", "2500 rpm", SystemStatus::Normal),
                reading("Fuel Efficiency", "28 mpg", SystemStatus::Normal),
                reading("Engine Temperature", "82\u{b0}C", SystemStatus::Normal),
                reading("Throttle Response", "Optimal", SystemStatus::Normal),
                reading("Air Flow", "14.2 g/s", SystemStatus::Normal),
            ],
            description: "The engine is functioning optimally with all parameters within \
                          normal operating ranges. Regular maintenance has been performed \
                          according to schedule."
                .to_string(),
        },
        "brake-system" => DiagnosticRecord {
            id: "brake-system".to_string(),
            system: "Brake System".to_string(),
            status: SystemStatus::Warning,
            message: "Brake pad replacement recommended".to_string(),
            details: vec![
                reading("Front Brake Pads", "15% remaining", SystemStatus::Warning),
                reading("Rear Brake Pads", "42% remaining", SystemStatus::Normal),
                reading("Brake Fluid", "Level OK", SystemStatus::Normal),
                reading("ABS System", "Functioning", SystemStatus::Normal),
                reading("Brake Lines", "No leaks detected", SystemStatus::Normal),
            ],
            description: "The front brake pads are showing significant wear and should be \
                          replaced soon. Estimated life remaining: 1,500 miles. Rear brake \
                          pads and other brake components are functioning normally."
                .to_string(),
        },
        _ => DiagnosticRecord {
            id: "unknown".to_string(),
            system: "Unknown System".to_string(),
            status: SystemStatus::Normal,
            message: "No information available".to_string(),
            details: Vec::new(),
            description: "No detailed information is available for this system.".to_string(),
        },
    }
}

/// Canned vehicle status readings for the status card.
pub fn vehicle_status() -> VehicleStatus {
    VehicleStatus {
        engine_rpm: 2500,
        temperature_c: 82,
        oil_level_pct: 85,
        battery_voltage: 12.6,
    }
}
