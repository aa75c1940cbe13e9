use crate::errors::BoletoError;
use serde_json::Value;
use std::time::Duration;

/// Production endpoint of the PagSeguro web-service API.
pub const DEFAULT_BASE_URL: &str = "https://ws.pagseguro.uol.com.br";

/// Content type required by the recurring-payment endpoint. The charset is
/// part of the contract; the gateway answers 500 to plain
/// `application/json`.
const BOLETO_CONTENT_TYPE: &str = "application/json;charset=ISO-8859-1";

/// HTTP client for the PagSeguro recurring-payment API.
#[derive(Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// Creates a client against the production gateway.
    pub fn new() -> Result<Self, BoletoError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against an alternative base URL (sandbox, mock
    /// server in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, BoletoError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                BoletoError::Transport(format!("Failed to create gateway client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Submits one boleto creation request.
    ///
    /// Credentials travel as query parameters, the boleto as the JSON body.
    /// The gateway's reply is returned as-is; a non-success status maps to
    /// [`BoletoError::Gateway`] carrying the raw body. No retries.
    pub async fn submit_boleto(
        &self,
        email: &str,
        token: &str,
        body: &Value,
    ) -> Result<Value, BoletoError> {
        let url = reqwest::Url::parse_with_params(
            &format!("{}/recurring-payment/boletos", self.base_url),
            &[("email", email), ("token", token)],
        )
        .map_err(|e| BoletoError::Transport(format!("Failed to build URL: {}", e)))?;

        tracing::info!("Submitting recurring boleto to PagSeguro");
        // Redact token from logs to prevent credential exposure
        tracing::debug!(
            "Gateway URL: {}/recurring-payment/boletos?email={}&token=[REDACTED]",
            self.base_url,
            email
        );

        let payload = serde_json::to_string(body)
            .map_err(|e| BoletoError::Transport(format!("Failed to serialize body: {}", e)))?;

        let response = self
            .client
            .post(url)
            .header("Content-Type", BOLETO_CONTENT_TYPE)
            .header("Accept", BOLETO_CONTENT_TYPE)
            .body(payload)
            .send()
            .await
            .map_err(|e| BoletoError::Transport(format!("Gateway request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("Gateway returned error {}: {}", status, error_text);
            return Err(BoletoError::Gateway {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let data = response.json().await.map_err(|e| {
            BoletoError::Transport(format!("Failed to parse gateway response: {}", e))
        })?;

        tracing::info!("Boleto submitted successfully");
        Ok(data)
    }
}
