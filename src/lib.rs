//! PagSeguro Recurring-Boleto Client
//!
//! This library builds, validates and submits recurring "boleto" billing
//! instructions to the PagSeguro payment gateway. All documented field
//! constraints (CPF checksum, lengths, numeric ranges, required fields)
//! are enforced before any network I/O happens.
//!
//! # Modules
//!
//! - `boleto`: Request submitter and clock abstraction.
//! - `builder`: Field-by-field request accumulation and validation.
//! - `client`: HTTP transport to the gateway.
//! - `config`: Account credentials.
//! - `errors`: Error handling types.
//! - `models`: Wire data model (document, phone, address, customer).
//! - `validation`: Shared validation helpers (CPF, email, URL, digits).
//!
//! # Usage
//!
//! ```no_run
//! use pagseguro_boleto::{Boleto, BoletoBuilder, Config, GatewayClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let mut builder = BoletoBuilder::new();
//! builder.set_customer_document("CPF", "529.982.247-25")?;
//! builder.set_customer_name("João da Silva")?;
//! builder.set_customer_email("joao@example.com")?;
//! builder.set_customer_phone("(11)", "91234-5678")?;
//! builder.set_amount(99.90)?;
//! builder.set_description("Mensalidade")?;
//!
//! let config = Config::new("merchant@example.com", "API_TOKEN");
//! let boleto = Boleto::new(GatewayClient::new()?, config, builder);
//! let response = boleto.send().await?;
//! println!("{}", response);
//! # Ok(())
//! # }
//! ```

pub mod boleto;
pub mod builder;
pub mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod validation;

pub use boleto::{Boleto, Clock, SystemClock};
pub use builder::BoletoBuilder;
pub use client::{GatewayClient, DEFAULT_BASE_URL};
pub use config::Config;
pub use errors::BoletoError;
pub use models::{Address, Customer, Document, DocumentType, Phone};
