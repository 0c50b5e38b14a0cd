mod http;
mod types;

pub use http::{BackendClient, HttpBackendClient};
pub use types::{ClassId, PredictRequest, PredictionResponse, Query};
