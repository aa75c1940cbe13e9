use serde::Deserialize;

/// PagSeguro account credentials, sent as query parameters on every call.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    email: String,
    token: String,
}

impl Config {
    /// Creates a config from explicit credentials.
    pub fn new(email: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: token.into(),
        }
    }

    /// Loads credentials from `PAGSEGURO_EMAIL` / `PAGSEGURO_TOKEN`.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            email: std::env::var("PAGSEGURO_EMAIL")
                .map_err(|_| anyhow::anyhow!("PAGSEGURO_EMAIL environment variable required"))
                .and_then(|email| {
                    if email.trim().is_empty() {
                        anyhow::bail!("PAGSEGURO_EMAIL cannot be empty");
                    }
                    Ok(email)
                })?,
            token: std::env::var("PAGSEGURO_TOKEN")
                .map_err(|_| anyhow::anyhow!("PAGSEGURO_TOKEN environment variable required"))
                .and_then(|token| {
                    if token.trim().is_empty() {
                        anyhow::bail!("PAGSEGURO_TOKEN cannot be empty");
                    }
                    Ok(token)
                })?,
        };

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Account email: {}", config.email);

        Ok(config)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }
}
