//! Display types produced by the rule tables. Opaque text to this core,
//! carried here so responses can be localized field by field.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifferentialDiagnosis {
    pub condition: String,
    pub confidence: u8,
    pub reasoning: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreatmentProtocol {
    pub medications: Option<Vec<Medication>>,
    pub procedures: Option<Vec<String>>,
    pub lifestyle: Option<Vec<String>>,
}

/// Rule-table output for one request, before localization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicalAssessment {
    pub primary_diagnosis: String,
    pub differential_diagnoses: Vec<DifferentialDiagnosis>,
    pub treatment_protocol: Option<TreatmentProtocol>,
    pub requires_referral: bool,
    pub referral_reason: Option<String>,
}
