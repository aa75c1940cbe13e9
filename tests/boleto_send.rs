/// Integration tests with a mocked PagSeguro gateway.
/// Exercises the complete send flow without hitting the real service.
use chrono::{DateTime, Local, TimeZone};
use pagseguro_boleto::boleto::Clock;
use pagseguro_boleto::{Boleto, BoletoBuilder, BoletoError, Config, GatewayClient};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct FixedClock(DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

fn test_config() -> Config {
    Config::new("merchant@example.com", "TOKEN123")
}

fn full_builder() -> BoletoBuilder {
    let mut builder = BoletoBuilder::new();
    builder.set_customer_document("CPF", "529.982.247-25").unwrap();
    builder.set_customer_name("João da Silva").unwrap();
    builder.set_customer_email("joao@example.com").unwrap();
    builder.set_customer_phone("(11)", "91234-5678").unwrap();
    builder.set_amount(99.90).unwrap();
    builder.set_description("Mensalidade do clube").unwrap();
    builder
}

fn boleto_against(mock_server: &MockServer, builder: BoletoBuilder) -> Boleto {
    let client = GatewayClient::with_base_url(mock_server.uri()).unwrap();
    let clock = FixedClock(Local.with_ymd_and_hms(2026, 8, 29, 12, 0, 0).unwrap());
    Boleto::with_clock(client, test_config(), builder, Box::new(clock))
}

#[tokio::test]
async fn test_send_posts_credentials_headers_and_body() {
    let mock_server = MockServer::start().await;

    let gateway_reply = serde_json::json!({
        "boletos": [{ "code": "8CF4BE7DCECEF0F004A6DFA0A8243412" }]
    });

    Mock::given(method("POST"))
        .and(path("/recurring-payment/boletos"))
        .and(query_param("email", "merchant@example.com"))
        .and(query_param("token", "TOKEN123"))
        .and(header("Content-Type", "application/json;charset=ISO-8859-1"))
        .and(header("Accept", "application/json;charset=ISO-8859-1"))
        .and(body_partial_json(serde_json::json!({
            "customer": {
                "document": { "type": "CPF", "value": "52998224725" },
                "name": "João da Silva",
                "email": "joao@example.com",
                "phone": { "areaCode": "11", "number": "912345678" }
            },
            "amount": 99.90,
            "description": "Mensalidade do clube"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&gateway_reply))
        .expect(1)
        .mount(&mock_server)
        .await;

    let boleto = boleto_against(&mock_server, full_builder());
    let response = boleto.send().await.unwrap();

    assert_eq!(response, gateway_reply);
}

#[tokio::test]
async fn test_send_fills_defaults_into_submitted_body() {
    let mock_server = MockServer::start().await;

    // fixed clock: 2026-08-29, so the default due date is +3 days
    Mock::given(method("POST"))
        .and(path("/recurring-payment/boletos"))
        .and(body_partial_json(serde_json::json!({
            "periodicity": "monthly",
            "numberOfPayments": 1,
            "firstDueDate": "2026-09-01"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let boleto = boleto_against(&mock_server, full_builder());
    boleto.send().await.unwrap();

    // the generated reference embeds the clock's timestamp
    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let reference = body["reference"].as_str().unwrap();
    assert!(reference.starts_with("generated automatically in: "));
    assert!(reference.contains("29 Aug 2026"));
}

#[tokio::test]
async fn test_explicit_values_not_overridden_by_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recurring-payment/boletos"))
        .and(body_partial_json(serde_json::json!({
            "reference": "pedido-42",
            "firstDueDate": "2026-12-01",
            "numberOfPayments": 6
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut builder = full_builder();
    builder.set_reference("pedido-42").unwrap();
    builder.set_first_due_date("2026-12-01");
    builder.set_number_of_payments("6").unwrap();

    boleto_against(&mock_server, builder).send().await.unwrap();
}

#[tokio::test]
async fn test_missing_required_field_sends_nothing() {
    let mock_server = MockServer::start().await;

    // no email set: validation must fail before any HTTP traffic
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut builder = BoletoBuilder::new();
    builder.set_customer_document("CPF", "52998224725").unwrap();
    builder.set_customer_name("João da Silva").unwrap();
    builder.set_customer_phone("11", "912345678").unwrap();
    builder.set_amount(100.0).unwrap();
    builder.set_description("Mensalidade").unwrap();

    let err = boleto_against(&mock_server, builder).send().await.unwrap_err();
    assert!(matches!(err, BoletoError::MissingField("customer.email")));
}

#[tokio::test]
async fn test_gateway_error_status_propagates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recurring-payment/boletos"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    let err = boleto_against(&mock_server, full_builder())
        .send()
        .await
        .unwrap_err();

    match err {
        BoletoError::Gateway { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "Unauthorized");
        }
        other => panic!("expected Gateway error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_gateway_validation_error_carries_body() {
    let mock_server = MockServer::start().await;

    let error_body = serde_json::json!({
        "errors": [{ "code": 1114, "message": "customer document value is invalid" }]
    });

    Mock::given(method("POST"))
        .and(path("/recurring-payment/boletos"))
        .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
        .mount(&mock_server)
        .await;

    let err = boleto_against(&mock_server, full_builder())
        .send()
        .await
        .unwrap_err();

    match err {
        BoletoError::Gateway { status, body } => {
            assert_eq!(status, 400);
            assert!(body.contains("1114"));
        }
        other => panic!("expected Gateway error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_address_travels_in_customer_block() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/recurring-payment/boletos"))
        .and(body_partial_json(serde_json::json!({
            "customer": {
                "address": {
                    "street": "Av. Paulista",
                    "number": "1000",
                    "district": "Bela Vista",
                    "postalCode": "01310100",
                    "city": "São Paulo",
                    "state": "SP"
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut builder = full_builder();
    builder.set_customer_address_street("Av. Paulista");
    builder.set_customer_address_number("1000");
    builder.set_customer_address_district("Bela Vista");
    builder.set_customer_address_postal_code("01310-100");
    builder.set_customer_address_city("São Paulo");
    builder.set_customer_address_state("sp");

    boleto_against(&mock_server, builder).send().await.unwrap();
}
