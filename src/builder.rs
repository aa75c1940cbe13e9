use crate::errors::BoletoError;
use crate::models::{Customer, Document, DocumentType, Phone};
use crate::validation::{is_valid_cpf, is_valid_email, is_valid_url, only_digits};

/// Accumulates and validates the fields of one recurring boleto request.
///
/// Every setter validates its input synchronously and returns
/// `Err(BoletoError::InvalidField)` on violation without touching the
/// stored value, so a field never holds data that failed its own check.
/// Setters may be called in any order and any number of times; the last
/// successful write wins. The builder does no I/O — it is consumed
/// read-only by [`Boleto::send`](crate::boleto::Boleto::send).
#[derive(Debug, Clone, Default)]
pub struct BoletoBuilder {
    customer: Customer,
    reference: Option<String>,
    first_due_date: Option<String>,
    number_of_payments: Option<u32>,
    amount: Option<f64>,
    description: Option<String>,
    instructions: Option<String>,
    notification_url: Option<String>,
}

impl BoletoBuilder {
    /// Creates a builder with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the customer document after stripping non-digits.
    ///
    /// `document_type` must be `"CPF"` or `"CNPJ"`. A CPF must pass the
    /// mod-11 checksum; a CNPJ must be exactly 14 digits after stripping.
    pub fn set_customer_document(
        &mut self,
        document_type: &str,
        document_number: &str,
    ) -> Result<(), BoletoError> {
        let digits = only_digits(document_number);

        let parsed_type = match document_type {
            "CPF" => DocumentType::Cpf,
            "CNPJ" => DocumentType::Cnpj,
            _ => {
                return Err(BoletoError::invalid(
                    "customer.document",
                    digits,
                    "it must be a valid CPF or CNPJ",
                ));
            }
        };

        if parsed_type == DocumentType::Cpf && !is_valid_cpf(&digits) {
            // gateway error code 1114
            return Err(BoletoError::invalid(
                "customer.document",
                digits,
                "it must be a valid CPF",
            ));
        }

        if parsed_type == DocumentType::Cnpj && digits.len() != 14 {
            // gateway error code 1115
            return Err(BoletoError::invalid(
                "customer.document",
                digits,
                "it must be a valid CNPJ",
            ));
        }

        self.customer.document = Some(Document {
            document_type: parsed_type,
            value: digits,
        });
        Ok(())
    }

    /// Sets the customer name. Maximum 50 characters.
    pub fn set_customer_name(&mut self, name: &str) -> Result<(), BoletoError> {
        if name.len() > 50 {
            // gateway error code 1121
            return Err(BoletoError::invalid(
                "customer.name",
                name,
                "the maximum size is 50 characters",
            ));
        }
        self.customer.name = Some(name.to_string());
        Ok(())
    }

    /// Sets the customer email. Must be a valid address of at most 60
    /// characters; both checks are independent.
    pub fn set_customer_email(&mut self, email: &str) -> Result<(), BoletoError> {
        if !is_valid_email(email) {
            // gateway error code 1132
            return Err(BoletoError::invalid(
                "customer.email",
                email,
                "it must be a valid format e-mail",
            ));
        }
        if email.len() > 60 {
            // gateway error code 1131
            return Err(BoletoError::invalid(
                "customer.email",
                email,
                "the maximum size is 60 characters",
            ));
        }
        self.customer.email = Some(email.to_string());
        Ok(())
    }

    /// Sets the customer phone.
    ///
    /// Both parts are digit-stripped and truncated (area code to 2 chars,
    /// number to 9) before validation, so over-long formatted input is
    /// clipped rather than rejected. After truncation the area code must be
    /// exactly 2 digits and the number 8 or 9 digits.
    pub fn set_customer_phone(&mut self, area_code: &str, number: &str) -> Result<(), BoletoError> {
        let mut area_code = only_digits(area_code);
        area_code.truncate(2);

        let mut number = only_digits(number);
        number.truncate(9);

        if area_code.len() != 2 {
            // gateway error code 1151
            return Err(BoletoError::invalid(
                "customer.phone.areaCode",
                area_code,
                "it must be 2 digits",
            ));
        }

        if number.len() < 8 || number.len() > 9 {
            // gateway error code 1161
            return Err(BoletoError::invalid(
                "customer.phone.number",
                number,
                "it must be 8 or 9 digits without separator",
            ));
        }

        self.customer.phone = Some(Phone { area_code, number });
        Ok(())
    }

    /// Sets the merchant reference. Maximum 200 characters.
    pub fn set_reference(&mut self, reference: &str) -> Result<(), BoletoError> {
        if reference.len() > 200 {
            // gateway error code 1001
            return Err(BoletoError::invalid(
                "reference",
                reference,
                "the maximum size is 200 characters",
            ));
        }
        self.reference = Some(reference.to_string());
        Ok(())
    }

    /// Sets the first due date, stored verbatim. The gateway expects
    /// `YYYY-MM-DD` but does its own validation.
    pub fn set_first_due_date(&mut self, date: &str) {
        self.first_due_date = Some(date.to_string());
    }

    /// Sets the number of payments after stripping non-digits. The parsed
    /// value must be between 1 and 12.
    pub fn set_number_of_payments(&mut self, data: &str) -> Result<(), BoletoError> {
        let digits = only_digits(data);

        let parsed = digits.parse::<u32>().ok();
        match parsed {
            Some(n) if (1..=12).contains(&n) => {
                self.number_of_payments = Some(n);
                Ok(())
            }
            _ => {
                // gateway error code 1021
                Err(BoletoError::invalid(
                    "numberOfPayments",
                    digits,
                    "it must have only numbers (0-9) and value between 1 to 12",
                ))
            }
        }
    }

    /// Sets the charge amount. Allowed range is 5.00 to 1000000.00,
    /// inclusive on both ends.
    pub fn set_amount(&mut self, amount: f64) -> Result<(), BoletoError> {
        if !(5.0..=1_000_000.0).contains(&amount) {
            // gateway error code 1041
            return Err(BoletoError::invalid(
                "amount",
                amount.to_string(),
                "it is allowed value between 5.00 to 1000000.00",
            ));
        }
        self.amount = Some(amount);
        Ok(())
    }

    /// Sets the charge description. Maximum 100 characters.
    pub fn set_description(&mut self, description: &str) -> Result<(), BoletoError> {
        if description.len() > 100 {
            // gateway error code 1061
            return Err(BoletoError::invalid(
                "description",
                description,
                "the maximum size is 100 characters",
            ));
        }
        self.description = Some(description.to_string());
        Ok(())
    }

    /// Sets the boleto instructions line. Maximum 100 characters.
    pub fn set_instructions(&mut self, instructions: &str) -> Result<(), BoletoError> {
        if instructions.len() > 100 {
            // gateway error code 1050
            return Err(BoletoError::invalid(
                "instructions",
                instructions,
                "the maximum size is 100 characters",
            ));
        }
        self.instructions = Some(instructions.to_string());
        Ok(())
    }

    /// Sets the payment notification URL. Maximum 255 characters and must
    /// be a syntactically valid http/https URL.
    pub fn set_notification_url(&mut self, url: &str) -> Result<(), BoletoError> {
        if url.len() > 255 || !is_valid_url(url) {
            // gateway error code 1070
            return Err(BoletoError::invalid(
                "notificationURL",
                url,
                "the maximum size is 255 characters and should be a valid url",
            ));
        }
        self.notification_url = Some(url.to_string());
        Ok(())
    }

    // TODO: the gateway documentation does not list address constraints;
    // confirm limits with support before tightening these setters.

    /// Sets the address street, stored verbatim.
    pub fn set_customer_address_street(&mut self, street: &str) {
        self.customer.address.street = Some(street.to_string());
    }

    /// Sets the address number, stored verbatim.
    pub fn set_customer_address_number(&mut self, number: &str) {
        self.customer.address.number = Some(number.to_string());
    }

    /// Sets the address district, stored verbatim.
    pub fn set_customer_address_district(&mut self, district: &str) {
        self.customer.address.district = Some(district.to_string());
    }

    /// Sets the address postal code, stored after digit-stripping with no
    /// length check.
    pub fn set_customer_address_postal_code(&mut self, postal_code: &str) {
        self.customer.address.postal_code = Some(only_digits(postal_code));
    }

    /// Sets the address city, stored verbatim.
    pub fn set_customer_address_city(&mut self, city: &str) {
        self.customer.address.city = Some(city.to_string());
    }

    /// Sets the address state (UF), uppercased.
    ///
    /// Unlike every other setter this one does not error on bad input:
    /// anything that is not exactly 2 characters after uppercasing is
    /// silently dropped and the previously stored value stays in place.
    pub fn set_customer_address_state(&mut self, state: &str) {
        let state = state.to_uppercase();
        if state.len() == 2 {
            self.customer.address.state = Some(state);
        } else {
            tracing::warn!("Ignoring address state with wrong length: {}", state);
        }
    }

    /// Replaces the whole customer block without running any per-field
    /// validation. Trusted bulk load: the caller is responsible for the
    /// validity of every member, including the document checksum.
    pub fn set_customer(&mut self, customer: Customer) {
        self.customer = customer;
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    pub fn first_due_date(&self) -> Option<&str> {
        self.first_due_date.as_deref()
    }

    pub fn number_of_payments(&self) -> Option<u32> {
        self.number_of_payments
    }

    pub fn amount(&self) -> Option<f64> {
        self.amount
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn instructions(&self) -> Option<&str> {
        self.instructions.as_deref()
    }

    pub fn notification_url(&self) -> Option<&str> {
        self.notification_url.as_deref()
    }
}
