//! Canned vehicle profile shown by the `vehicle` subcommand.

use serde::{Deserialize, Serialize};

/// Static identity and service card for the vehicle on file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleInfo {
    pub owner: String,
    pub model: String,
    pub license_plate: String,
    pub production_year: String,
    pub engine: String,
    pub body_type: String,
    pub last_service: String,
    pub next_service: String,
}

pub fn vehicle_info() -> VehicleInfo {
    VehicleInfo {
        owner: "Tanish Khan".to_string(),
        model: "Fortuner GR".to_string(),
        license_plate: "RJ 09 AB 1234".to_string(),
        production_year: "2019".to_string(),
        engine: "BS-6".to_string(),
        body_type: "SUV".to_string(),
        last_service: "10/03/2023".to_string(),
        next_service: "10/09/2023".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_serializes_with_camel_case_fields() {
        let json = serde_json::to_string(&vehicle_info()).unwrap();
        assert!(json.contains(r#""licensePlate""#));
        assert!(json.contains(r#""nextService""#));
    }
}
