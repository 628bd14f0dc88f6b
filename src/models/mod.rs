// ABOUTME: Core data models for visa consultations

pub mod consultation;

pub use consultation::{
    ConsultationRequest, ConsultationResult, DocumentItem, DocumentPriority, ResidencyStatus,
    TravelPurpose,
};
