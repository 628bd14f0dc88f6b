// ABOUTME: Consultation data model shared by the intake wizard and the API client
// Mirrors the backend's request/result contract; the result types are decoded, never validated

use serde::{Deserialize, Serialize};
use std::fmt;

/// Residency status of the applicant in their current country
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ResidencyStatus {
    #[default]
    Citizen,
    PermanentResident,
    TemporaryWorker,
    Student,
    Other,
}

impl ResidencyStatus {
    pub fn all() -> &'static [ResidencyStatus] {
        &[
            Self::Citizen,
            Self::PermanentResident,
            Self::TemporaryWorker,
            Self::Student,
            Self::Other,
        ]
    }

    /// Wire value as sent to the backend
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Citizen => "citizen",
            Self::PermanentResident => "permanent_resident",
            Self::TemporaryWorker => "temporary_worker",
            Self::Student => "student",
            Self::Other => "other",
        }
    }

    /// Label shown in the wizard's option list
    pub fn label(&self) -> &'static str {
        match self {
            Self::Citizen => "Citizen",
            Self::PermanentResident => "Permanent Resident (Green Card/PR)",
            Self::TemporaryWorker => "Temporary Worker (H1B, L1, etc.)",
            Self::Student => "Student (F1, J1, etc.)",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ResidencyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Purpose of the planned trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TravelPurpose {
    #[default]
    Tourism,
    Business,
    Work,
    Study,
    Transit,
    FamilyVisit,
    Other,
}

impl TravelPurpose {
    pub fn all() -> &'static [TravelPurpose] {
        &[
            Self::Tourism,
            Self::Business,
            Self::Work,
            Self::Study,
            Self::Transit,
            Self::FamilyVisit,
            Self::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tourism => "tourism",
            Self::Business => "business",
            Self::Work => "work",
            Self::Study => "study",
            Self::Transit => "transit",
            Self::FamilyVisit => "family_visit",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Tourism => "Tourism/Vacation",
            Self::Business => "Business",
            Self::Work => "Work",
            Self::Study => "Study",
            Self::Transit => "Transit",
            Self::FamilyVisit => "Visiting Family/Friends",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for TravelPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applicant's answers, filled in step by step by the intake wizard.
///
/// While the wizard is running the required string fields may still be empty;
/// the value is serialized as-is when submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConsultationRequest {
    /// Primary nationality (passport country)
    #[serde(default)]
    pub nationality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dual_citizenship: Option<String>,

    /// Country the applicant currently lives in
    #[serde(default)]
    pub current_country: String,
    #[serde(default)]
    pub residency_status: ResidencyStatus,
    /// Free-form status, only collected when `residency_status` is `Other`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residency_details: Option<String>,

    #[serde(default)]
    pub destination_country: String,
    #[serde(default)]
    pub travel_purpose: TravelPurpose,
    /// Free text, e.g. "March 2025" or "Flexible"
    #[serde(default)]
    pub travel_dates: String,
    #[serde(default)]
    pub duration: String,

    #[serde(default)]
    pub previous_rejections: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,

    /// Delivery address for the finished consultation
    #[serde(default)]
    pub email: String,
}

/// Priority tier of a required document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentPriority {
    High,
    Medium,
    Low,
}

impl DocumentPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentItem {
    pub name: String,
    pub priority: DocumentPriority,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Finished consultation as produced by the backend after payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationResult {
    pub consultation_id: String,
    pub risk_assessment: String,
    /// 1-100
    pub confidence_score: u8,
    pub documents_required: Vec<DocumentItem>,
    pub cover_letter: String,
    pub strategic_notes: Vec<String>,
    pub sources: Vec<String>,
    pub estimated_processing_time: String,
}

impl ConsultationResult {
    /// Extract the result from an analyze response envelope (`{"result": {...}}`),
    /// or from a bare result object.
    pub fn from_analysis(value: &serde_json::Value) -> Option<Self> {
        let candidate = value.get("result").unwrap_or(value);
        serde_json::from_value(candidate.clone()).ok()
    }
}
