use super::types::*;
use crate::{Error, Result, config::ServiceConfig};
use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info, warn};

#[async_trait]
pub trait PredictionClient: Send + Sync {
    /// Probes the service. Failures are logged and reported as `false`.
    async fn check_health(&self) -> bool;

    /// One attempt, no retries.
    async fn predict(&self, request: PredictionRequest) -> Result<PredictionResponse>;

    async fn symptom_catalog(&self) -> Result<SymptomCatalog>;
}

pub struct HttpPredictionClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpPredictionClient {
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();

        debug!("Creating prediction client for: {}", base_url);

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_body(response: reqwest::Response) -> Result<(StatusCode, String)> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::network(format!("Failed to read response body: {}", e)))?;
        Ok((status, body))
    }

    fn service_error(status: StatusCode, body: &str) -> Error {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = parsed
            .error
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| "Prediction failed".to_string());
        Error::service(status.as_u16(), message, parsed.suggestion)
    }
}

#[async_trait]
impl PredictionClient for HttpPredictionClient {
    async fn check_health(&self) -> bool {
        let response = match self.client.get(self.url("/api/health")).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Prediction service not available: {}", e);
                return false;
            }
        };

        if !response.status().is_success() {
            warn!(
                "Prediction service health probe returned HTTP {}",
                response.status()
            );
            return false;
        }

        match response.json::<HealthStatus>().await {
            Ok(health) => {
                info!(
                    "Prediction service health: status={}, model_loaded={:?}, symptoms={:?}, diseases={:?}",
                    health.status, health.model_loaded, health.total_symptoms, health.total_diseases
                );
            }
            Err(e) => debug!("Health probe body was not a status document: {}", e),
        }
        true
    }

    async fn predict(&self, request: PredictionRequest) -> Result<PredictionResponse> {
        debug!(
            "Requesting prediction for {} symptoms (age={}, weight={})",
            request.symptoms.len(),
            request.age,
            request.weight
        );

        let response = self
            .client
            .post(self.url("/api/predict"))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::network(format!("Failed to send prediction request: {}", e)))?;

        let (status, body) = Self::read_body(response).await?;

        if !status.is_success() {
            let err = Self::service_error(status, &body);
            warn!("Prediction service rejected request: {}", err);
            return Err(err);
        }

        let prediction: PredictionResponse = serde_json::from_str(&body)
            .map_err(|e| Error::malformed(format!("Failed to parse prediction response: {}", e)))?;
        prediction.validate()?;

        debug!(
            "Received prediction '{}' ({:.1}%) with {} ranked candidates",
            prediction.primary_prediction.disease,
            prediction.primary_prediction.confidence,
            prediction.top_predictions.len()
        );

        Ok(prediction)
    }

    async fn symptom_catalog(&self) -> Result<SymptomCatalog> {
        debug!("Fetching symptom catalog");

        let response = self
            .client
            .get(self.url("/api/symptoms"))
            .send()
            .await
            .map_err(|e| Error::network(format!("Failed to fetch symptom catalog: {}", e)))?;

        let (status, body) = Self::read_body(response).await?;

        if !status.is_success() {
            return Err(Self::service_error(status, &body));
        }

        let catalog: SymptomCatalog = serde_json::from_str(&body)
            .map_err(|e| Error::malformed(format!("Failed to parse symptom catalog: {}", e)))?;

        debug!(
            "Symptom catalog has {} symptoms in {} categories",
            catalog.total_count,
            catalog.categories.len()
        );
        Ok(catalog)
    }
}
