// ABOUTME: Client for the consultation/payment HTTP API

pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, RequestOptions};
pub use error::{ApiError, GENERIC_API_ERROR};
pub use types::{CheckoutRequest, CheckoutSession, HealthStatus, VerifyPaymentRequest};
