pub mod json;
pub mod table;

use crate::analyzer::ScanResult;
use crate::catalog::diagnostic::{DiagnosticRecord, VehicleStatus};
use crate::catalog::vehicle::VehicleInfo;
use crate::config::Config;

pub fn print_scan(result: &ScanResult, config: &Config) {
    if config.json_output {
        println!("{}", json::render(result));
    } else {
        print!("{}", table::render_scan(result));
    }
}

pub fn print_history(scans: &[ScanResult], config: &Config) {
    if config.json_output {
        println!("{}", json::render(&scans));
    } else {
        print!("{}", table::render_history(scans));
    }
}

pub fn print_diagnostic(record: &DiagnosticRecord, json_output: bool) {
    if json_output {
        println!("{}", json::render(record));
    } else {
        print!("{}", table::render_diagnostic(record));
    }
}

pub fn print_vehicle(info: &VehicleInfo, json_output: bool) {
    if json_output {
        println!("{}", json::render(info));
    } else {
        print!("{}", table::render_vehicle(info));
    }
}

pub fn print_status(status: &VehicleStatus, summaries: &[DiagnosticRecord], json_output: bool) {
    if json_output {
        println!(
            "{}",
            json::render(&serde_json::json!({
                "vehicleStatus": status,
                "diagnostics": summaries,
            }))
        );
    } else {
        print!("{}", table::render_status(status, summaries));
    }
}
