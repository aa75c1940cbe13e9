use crate::builder::BoletoBuilder;
use crate::client::GatewayClient;
use crate::config::Config;
use crate::errors::BoletoError;
use crate::models::Customer;
use chrono::{DateTime, Duration, Local};
use serde::Serialize;
use serde_json::Value;

/// Source of "now" for default values, injectable so the generated
/// reference and due date are deterministic under test.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// Process-wide clock used outside of tests.
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// JSON body of the boleto creation request, keys exactly as the gateway
/// expects them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BoletoPayload {
    customer: Customer,
    reference: Option<String>,
    first_due_date: Option<String>,
    number_of_payments: Option<u32>,
    amount: Option<f64>,
    description: Option<String>,
    instructions: Option<String>,
    #[serde(rename = "notificationURL")]
    notification_url: Option<String>,
    periodicity: Option<String>,
}

/// Submits one recurring boleto built by a [`BoletoBuilder`].
///
/// Consumes the builder: required-field checks and default fill happen at
/// send time, then exactly one POST goes out. Transport failures propagate
/// unchanged; there are no retries.
pub struct Boleto {
    client: GatewayClient,
    config: Config,
    builder: BoletoBuilder,
    clock: Box<dyn Clock>,
}

impl Boleto {
    /// Creates a submitter using the system clock for default values.
    pub fn new(client: GatewayClient, config: Config, builder: BoletoBuilder) -> Self {
        Self::with_clock(client, config, builder, Box::new(SystemClock))
    }

    /// Creates a submitter with an explicit clock.
    pub fn with_clock(
        client: GatewayClient,
        config: Config,
        builder: BoletoBuilder,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            client,
            config,
            builder,
            clock,
        }
    }

    /// Validates required fields, fills defaults for the optional ones and
    /// issues the request. Returns the gateway's reply as raw JSON.
    pub async fn send(self) -> Result<Value, BoletoError> {
        let body = self.prepare_body()?;

        self.client
            .submit_boleto(self.config.email(), self.config.token(), &body)
            .await
    }

    /// Assembles the final JSON body: builder values, required-field
    /// checks, then defaults.
    fn prepare_body(&self) -> Result<Value, BoletoError> {
        let mut payload = self.prepare_post();
        Self::required_fields(&payload)?;
        self.required_fields_but_not(&mut payload);

        serde_json::to_value(&payload)
            .map_err(|e| BoletoError::Transport(format!("Failed to serialize body: {}", e)))
    }

    /// Copies the builder's accumulated values into the wire shape.
    fn prepare_post(&self) -> BoletoPayload {
        BoletoPayload {
            customer: self.builder.customer().clone(),
            reference: self.builder.reference().map(str::to_string),
            first_due_date: self.builder.first_due_date().map(str::to_string),
            number_of_payments: self.builder.number_of_payments(),
            amount: self.builder.amount(),
            description: self.builder.description().map(str::to_string),
            instructions: self.builder.instructions().map(str::to_string),
            notification_url: self.builder.notification_url().map(str::to_string),
            periodicity: None,
        }
    }

    /// Gateway-mandatory fields, checked in a fixed order so the first
    /// unmet requirement is always the one reported.
    ///
    /// The gateway also rejects a document without a `type` member (an
    /// unset type crashes it with a 500); here the typed
    /// [`Document`](crate::models::Document) makes that state impossible,
    /// so only presence of the document and a non-empty value are checked.
    /// An empty value can still arrive through the trusted bulk
    /// [`set_customer`](BoletoBuilder::set_customer) load.
    fn required_fields(payload: &BoletoPayload) -> Result<(), BoletoError> {
        if payload.amount.is_none() {
            // gateway error code 1040
            return Err(BoletoError::MissingField("amount"));
        }
        if payload.description.is_none() {
            // gateway error code 1060
            return Err(BoletoError::MissingField("description"));
        }
        match &payload.customer.document {
            None => {
                // gateway error code 1110
                return Err(BoletoError::MissingField("customer.document"));
            }
            Some(document) if document.value.is_empty() => {
                // gateway error code 1113
                return Err(BoletoError::MissingField("customer.document.value"));
            }
            Some(_) => {}
        }
        if payload.customer.name.is_none() {
            // gateway error code 1120
            return Err(BoletoError::MissingField("customer.name"));
        }
        if payload.customer.email.is_none() {
            // gateway error code 1130
            return Err(BoletoError::MissingField("customer.email"));
        }
        if payload.customer.phone.is_none() {
            // gateway error code 1140
            return Err(BoletoError::MissingField("customer.phone"));
        }
        Ok(())
    }

    /// Fills gateway-expected defaults for fields the caller never set.
    /// The filled values go into the submitted body, not a scratch copy.
    fn required_fields_but_not(&self, payload: &mut BoletoPayload) {
        let now = self.clock.now();

        if payload.periodicity.is_none() {
            payload.periodicity = Some("monthly".to_string());
        }
        if payload.number_of_payments.is_none() {
            payload.number_of_payments = Some(1);
        }
        if payload.reference.is_none() {
            payload.reference = Some(format!("generated automatically in: {}", now.to_rfc2822()));
        }
        if payload.first_due_date.is_none() {
            payload.first_due_date = Some((now + Duration::days(3)).format("%Y-%m-%d").to_string());
        }
    }
}
