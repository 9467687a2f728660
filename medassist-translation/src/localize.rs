//! Field-by-field localization of display types.
//!
//! Every text field is an independent translator call. Ids, scores,
//! confidences and flags are copied as they are. Localizing always builds a
//! new value and leaves the input untouched.

use medassist_core::models::{
    ClinicalAssessment, DifferentialDiagnosis, Medication, Snippet, TreatmentProtocol,
};
use medassist_core::traits::ITranslator;

/// Produce a copy with display text translated into `target_lang`.
pub trait Localize: Sized {
    fn localize(&self, translator: &dyn ITranslator, target_lang: &str) -> Self;
}

impl Localize for String {
    fn localize(&self, translator: &dyn ITranslator, target_lang: &str) -> Self {
        translator.translate(self, target_lang)
    }
}

impl<T: Localize> Localize for Option<T> {
    fn localize(&self, translator: &dyn ITranslator, target_lang: &str) -> Self {
        self.as_ref().map(|v| v.localize(translator, target_lang))
    }
}

impl<T: Localize> Localize for Vec<T> {
    fn localize(&self, translator: &dyn ITranslator, target_lang: &str) -> Self {
        self.iter()
            .map(|v| v.localize(translator, target_lang))
            .collect()
    }
}

impl Localize for Snippet {
    fn localize(&self, translator: &dyn ITranslator, target_lang: &str) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.localize(translator, target_lang),
            content: self.content.localize(translator, target_lang),
            source: self.source.localize(translator, target_lang),
            score: self.score,
        }
    }
}

impl Localize for DifferentialDiagnosis {
    fn localize(&self, translator: &dyn ITranslator, target_lang: &str) -> Self {
        Self {
            condition: self.condition.localize(translator, target_lang),
            confidence: self.confidence,
            reasoning: self.reasoning.localize(translator, target_lang),
        }
    }
}

impl Localize for Medication {
    fn localize(&self, translator: &dyn ITranslator, target_lang: &str) -> Self {
        Self {
            name: self.name.localize(translator, target_lang),
            dosage: self.dosage.localize(translator, target_lang),
            frequency: self.frequency.localize(translator, target_lang),
            duration: self.duration.localize(translator, target_lang),
        }
    }
}

impl Localize for TreatmentProtocol {
    fn localize(&self, translator: &dyn ITranslator, target_lang: &str) -> Self {
        Self {
            medications: self.medications.localize(translator, target_lang),
            procedures: self.procedures.localize(translator, target_lang),
            lifestyle: self.lifestyle.localize(translator, target_lang),
        }
    }
}

impl Localize for ClinicalAssessment {
    fn localize(&self, translator: &dyn ITranslator, target_lang: &str) -> Self {
        Self {
            primary_diagnosis: self.primary_diagnosis.localize(translator, target_lang),
            differential_diagnoses: self.differential_diagnoses.localize(translator, target_lang),
            treatment_protocol: self.treatment_protocol.localize(translator, target_lang),
            requires_referral: self.requires_referral,
            referral_reason: self.referral_reason.localize(translator, target_lang),
        }
    }
}
