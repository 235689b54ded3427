//! Terminal table rendering.
//!
//! Formats scan results, the history list, diagnostic records and the
//! status card as plain text:
//! - one severity marker per finding
//! - history rows carry a rollup assessment of their findings
//! - dates shown as local-free UTC timestamps

use crate::analyzer::ScanResult;
use crate::catalog::damage::{DetectedDamage, Severity};
use crate::catalog::diagnostic::{DiagnosticRecord, VehicleStatus};
use crate::catalog::vehicle::VehicleInfo;

pub fn render_scan(result: &ScanResult) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Scan {} ({})\n",
        result.scan_id,
        format_date(&result.timestamp)
    ));
    output.push_str(&format!("image: {}\n", result.image_url));
    output.push_str(&format!("confidence: {}%\n", result.confidence));

    output.push_str("\nDetected damage\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');

    if result.detected_damages.is_empty() {
        output.push_str("  none\n");
        return output;
    }

    for damage in &result.detected_damages {
        output.push_str(&format!(
            "  [{}] {}\n",
            damage.severity.as_str(),
            damage.name
        ));
        output.push_str(&format!("      {}\n", damage.description));
        output.push_str(&format!("      repair: {}\n", damage.repair_suggestion));
        output.push_str(&format!(
            "      estimated cost: {}\n",
            damage.estimated_cost
        ));
    }

    output
}

pub fn render_history(scans: &[ScanResult]) -> String {
    if scans.is_empty() {
        return String::from("No scan history yet. Run 'autodiag scan <image>' to create one.\n");
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<16} {:<20} {:<8} {}\n",
        "ID", "Date", "Issues", "Assessment"
    ));
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for scan in scans {
        output.push_str(&format!(
            "{:<16} {:<20} {:<8} {}\n",
            scan.scan_id,
            format_date(&scan.timestamp),
            scan.detected_damages.len(),
            assessment(&scan.detected_damages)
        ));
    }

    output
}

pub fn render_diagnostic(record: &DiagnosticRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} [{}]\n",
        record.system,
        record.status.as_str()
    ));
    output.push_str(&format!("{}\n", record.message));

    if !record.details.is_empty() {
        output.push('\n');
        for detail in &record.details {
            output.push_str(&format!(
                "  {:<22} {:<20} [{}]\n",
                detail.name,
                detail.value,
                detail.status.as_str()
            ));
        }
    }

    output.push_str(&format!("\n{}\n", record.description));
    output
}

pub fn render_status(status: &VehicleStatus, summaries: &[DiagnosticRecord]) -> String {
    let mut output = String::new();

    output.push_str("Vehicle Status\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!("  {:<22} {} RPM\n", "Engine Speed", status.engine_rpm));
    output.push_str(&format!(
        "  {:<22} {}\u{b0}C\n",
        "Temperature", status.temperature_c
    ));
    output.push_str(&format!("  {:<22} {}%\n", "Oil Level", status.oil_level_pct));
    output.push_str(&format!(
        "  {:<22} {} V\n",
        "Battery", status.battery_voltage
    ));

    output.push_str("\nDiagnostics\n");
    output.push_str(&"-".repeat(40));
    output.push('\n');
    for record in summaries {
        output.push_str(&format!(
            "  [{}] {}: {}\n",
            record.status.as_str(),
            record.system,
            record.message
        ));
    }

    output
}

pub fn render_vehicle(info: &VehicleInfo) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n", info.model, info.body_type));
    output.push_str(&"-".repeat(40));
    output.push('\n');
    output.push_str(&format!("  {:<22} {}\n", "Owner", info.owner));
    output.push_str(&format!("  {:<22} {}\n", "License Plate", info.license_plate));
    output.push_str(&format!("  {:<22} {}\n", "Production Year", info.production_year));
    output.push_str(&format!("  {:<22} {}\n", "Engine", info.engine));
    output.push_str(&format!("  {:<22} {}\n", "Last Service", info.last_service));
    output.push_str(&format!("  {:<22} {}\n", "Next Service", info.next_service));

    output
}

/// Rollup text for a set of findings, mirroring the history view: any high
/// severity is critical, anything else present is minor.
fn assessment(damages: &[DetectedDamage]) -> &'static str {
    if damages.is_empty() {
        return "No issues found";
    }
    if damages.iter().any(|d| d.severity == Severity::High) {
        return "Critical issues found";
    }
    "Minor issues found"
}

fn format_date(timestamp: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|_| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::damage;
    use crate::catalog::diagnostic;

    fn sample_scan() -> ScanResult {
        ScanResult {
            scan_id: "1754300000000".to_string(),
            timestamp: "2026-08-04T10:15:00.000Z".to_string(),
            image_url: "bumper.jpg".to_string(),
            detected_damages: damage::catalog().into_iter().take(2).collect(),
            confidence: 91,
        }
    }

    #[test]
    fn scan_table_shows_findings() {
        let rendered = render_scan(&sample_scan());

        assert!(rendered.contains("Scan 1754300000000"));
        assert!(rendered.contains("2026-08-04 10:15:00"));
        assert!(rendered.contains("confidence: 91%"));
        assert!(rendered.contains("[low] Surface Scratch"));
        assert!(rendered.contains("estimated cost: $100-$300"));
    }

    #[test]
    fn scan_table_handles_no_findings() {
        let mut scan = sample_scan();
        scan.detected_damages.clear();

        let rendered = render_scan(&scan);
        assert!(rendered.contains("none"));
    }

    #[test]
    fn history_table_rolls_up_severity() {
        let with_findings = sample_scan();
        let mut clean = sample_scan();
        clean.scan_id = "2".to_string();
        clean.detected_damages.clear();

        let rendered = render_history(&[with_findings, clean]);
        assert!(rendered.contains("Minor issues found"));
        assert!(rendered.contains("No issues found"));
    }

    #[test]
    fn high_severity_reads_as_critical() {
        let mut scan = sample_scan();
        scan.detected_damages[0].severity = Severity::High;

        let rendered = render_history(std::slice::from_ref(&scan));
        assert!(rendered.contains("Critical issues found"));
    }

    #[test]
    fn empty_history_prompts_for_a_scan() {
        let rendered = render_history(&[]);
        assert!(rendered.contains("No scan history yet"));
    }

    #[test]
    fn diagnostic_table_lists_readings() {
        let rendered = render_diagnostic(&diagnostic::lookup("brake-system"));

        assert!(rendered.contains("Brake System [warning]"));
        assert!(rendered.contains("Front Brake Pads"));
        assert!(rendered.contains("15% remaining"));
    }

    #[test]
    fn vehicle_card_shows_profile() {
        let rendered = render_vehicle(&crate::catalog::vehicle::vehicle_info());

        assert!(rendered.contains("Fortuner GR (SUV)"));
        assert!(rendered.contains("RJ 09 AB 1234"));
        assert!(rendered.contains("Next Service"));
    }

    #[test]
    fn status_card_shows_readings_and_summaries() {
        let summaries: Vec<_> = diagnostic::KNOWN_SYSTEMS
            .iter()
            .map(|id| diagnostic::lookup(id))
            .collect();
        let rendered = render_status(&diagnostic::vehicle_status(), &summaries);

        assert!(rendered.contains("2500 RPM"));
        assert!(rendered.contains("12.6 V"));
        assert!(rendered.contains("[warning] Brake System"));
    }
}
