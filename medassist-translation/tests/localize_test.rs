use std::sync::Mutex;

use medassist_core::models::{
    ClinicalAssessment, DifferentialDiagnosis, Medication, Snippet, TreatmentProtocol,
};
use medassist_core::traits::ITranslator;
use medassist_translation::{Localize, TranslationGateway};

/// Uppercases and remembers every field it was asked to translate.
#[derive(Default)]
struct RecordingTranslator {
    seen: Mutex<Vec<String>>,
}

impl ITranslator for RecordingTranslator {
    fn translate(&self, text: &str, target_lang: &str) -> String {
        self.seen.lock().unwrap().push(text.to_string());
        format!("{}:{}", target_lang, text.to_uppercase())
    }
}

fn snippet() -> Snippet {
    Snippet {
        id: "kb-fever-01".to_string(),
        title: "Managing simple fever".to_string(),
        content: "Encourage oral fluids.".to_string(),
        source: "Primary care guideline".to_string(),
        score: 0.82,
    }
}

fn assessment() -> ClinicalAssessment {
    ClinicalAssessment {
        primary_diagnosis: "Viral fever".to_string(),
        differential_diagnoses: vec![
            DifferentialDiagnosis {
                condition: "Dengue".to_string(),
                confidence: 30,
                reasoning: Some("Endemic area".to_string()),
            },
            DifferentialDiagnosis {
                condition: "Malaria".to_string(),
                confidence: 20,
                reasoning: None,
            },
        ],
        treatment_protocol: Some(TreatmentProtocol {
            medications: Some(vec![Medication {
                name: "Paracetamol".to_string(),
                dosage: "500 mg".to_string(),
                frequency: "every 6 hours".to_string(),
                duration: "3 days".to_string(),
            }]),
            procedures: None,
            lifestyle: Some(vec!["Rest".to_string(), "Fluids".to_string()]),
        }),
        requires_referral: true,
        referral_reason: Some("Persistent fever".to_string()),
    }
}

#[test]
fn snippet_text_fields_are_translated_one_call_each() {
    let translator = RecordingTranslator::default();
    let original = snippet();
    let localized = original.localize(&translator, "hi");

    assert_eq!(localized.id, "kb-fever-01");
    assert_eq!(localized.score, 0.82);
    assert_eq!(localized.title, "hi:MANAGING SIMPLE FEVER");
    assert_eq!(localized.content, "hi:ENCOURAGE ORAL FLUIDS.");
    assert_eq!(localized.source, "hi:PRIMARY CARE GUIDELINE");
    assert_eq!(translator.seen.lock().unwrap().len(), 3);
    // The input is untouched.
    assert_eq!(original, snippet());
}

#[test]
fn assessment_translates_every_display_field() {
    let translator = RecordingTranslator::default();
    let localized = assessment().localize(&translator, "ta");

    assert_eq!(localized.primary_diagnosis, "ta:VIRAL FEVER");
    assert_eq!(localized.differential_diagnoses[0].condition, "ta:DENGUE");
    assert_eq!(localized.differential_diagnoses[0].confidence, 30);
    assert_eq!(
        localized.differential_diagnoses[0].reasoning.as_deref(),
        Some("ta:ENDEMIC AREA")
    );
    assert_eq!(localized.differential_diagnoses[1].reasoning, None);
    assert!(localized.requires_referral);
    assert_eq!(localized.referral_reason.as_deref(), Some("ta:PERSISTENT FEVER"));

    let protocol = localized.treatment_protocol.unwrap();
    let med = &protocol.medications.unwrap()[0];
    assert_eq!(med.name, "ta:PARACETAMOL");
    assert_eq!(med.dosage, "ta:500 MG");
    assert_eq!(med.frequency, "ta:EVERY 6 HOURS");
    assert_eq!(med.duration, "ta:3 DAYS");
    assert_eq!(protocol.procedures, None);
    assert_eq!(protocol.lifestyle.unwrap(), vec!["ta:REST", "ta:FLUIDS"]);

    // diagnosis, 2 conditions, 1 reasoning, 4 medication fields, 2 lifestyle items, referral
    assert_eq!(translator.seen.lock().unwrap().len(), 11);
}

#[test]
fn disabled_gateway_localizes_to_identical_copy() {
    let gateway = TranslationGateway::disabled();
    assert_eq!(assessment().localize(&gateway, "hi"), assessment());
    assert_eq!(vec![snippet()].localize(&gateway, "bn"), vec![snippet()]);
}
