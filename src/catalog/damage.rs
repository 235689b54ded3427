//! Catalog of recognizable vehicle damage types.
//!
//! The analyzer synthesizes findings by drawing from this list. Entries are
//! fixed at build time; nothing mutates the catalog at runtime.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

/// One damage finding as it appears in a scan result. Catalog entries are
/// the templates; the analyzer clones them into results unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedDamage {
    pub id: String,
    pub name: String,
    pub description: String,
    pub repair_suggestion: String,
    pub severity: Severity,
    pub estimated_cost: String,
}

struct DamageKind {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    repair_suggestion: &'static str,
    severity: Severity,
    estimated_cost: &'static str,
}

const DAMAGE_KINDS: &[DamageKind] = &[
    DamageKind {
        id: "scratch",
        name: "Surface Scratch",
        description: "Light surface damage affecting only the clear coat or paint",
        repair_suggestion: "Polishing or touch-up paint application",
        severity: Severity::Low,
        estimated_cost: "$100-$300",
    },
    DamageKind {
        id: "dent",
        name: "Minor Dent",
        description: "Small depression in the panel without paint damage",
        repair_suggestion: "Paintless dent repair (PDR)",
        severity: Severity::Low,
        estimated_cost: "$150-$400",
    },
    DamageKind {
        id: "cracked-bumper",
        name: "Cracked Bumper",
        description: "Structural damage to the front or rear bumper",
        repair_suggestion: "Bumper replacement or plastic welding repair",
        severity: Severity::Medium,
        estimated_cost: "$400-$900",
    },
    DamageKind {
        id: "broken-light",
        name: "Broken Headlight/Taillight",
        description: "Damage to lighting components",
        repair_suggestion: "Light assembly replacement",
        severity: Severity::Medium,
        estimated_cost: "$200-$600",
    },
    DamageKind {
        id: "windshield-crack",
        name: "Windshield Crack",
        description: "Crack or chip in the windshield glass",
        repair_suggestion: "Glass repair or windshield replacement",
        severity: Severity::Medium,
        estimated_cost: "$300-$1000",
    },
];

/// All damage types the analyzer can report, in catalog order.
pub fn catalog() -> Vec<DetectedDamage> {
    DAMAGE_KINDS
        .iter()
        .map(|kind| DetectedDamage {
            id: kind.id.to_string(),
            name: kind.name.to_string(),
            description: kind.description.to_string(),
            repair_suggestion: kind.repair_suggestion.to_string(),
            severity: kind.severity,
            estimated_cost: kind.estimated_cost.to_string(),
        })
        .collect()
}
