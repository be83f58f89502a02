//! Built-in fixture template for the health score API.

use serde_json::{json, Value};

/// File name suggested for bulk exports.
pub const DEFAULT_EXPORT_FILE: &str = "health_score_test_cases.json";

/// The request shape accepted by the health score API, with every field blank.
///
/// Callers with a different API pass their own template to
/// [`crate::FixtureSet::new`]; this one is the default for the CLI.
pub fn health_score_template() -> Value {
    json!({
        "patient_id": "",
        "age": null,
        "gender": "",
        "weight": null,
        "height": null,
        "blood_pressure_systolic": null,
        "blood_pressure_diastolic": null,
        "heart_rate": null,
        "cholesterol_total": null,
        "cholesterol_hdl": null,
        "cholesterol_ldl": null,
        "glucose_level": null,
        "bmi": null,
        "smoking_status": "",
        "exercise_frequency": null,
        "medical_history": [],
        "medications": [],
        "lab_results": {
            "hemoglobin": null,
            "white_blood_cells": null,
            "platelets": null,
            "creatinine": null
        },
        "risk_factors": []
    })
}
