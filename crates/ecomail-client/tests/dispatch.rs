/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Dispatcher behaviour against a mock Ecomail server

use ecomail_client::{Config, EcomailClient, Error, HttpMethod, TransportFault};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, key: &str) -> EcomailClient {
  let config = Config::new(key).unwrap().with_base_url(server.uri()).unwrap();
  EcomailClient::with_config(config).unwrap()
}

#[tokio::test]
async fn success_statuses_return_decoded_value() {
  // 204 cannot carry a body over HTTP; it is covered by empty_no_content_decodes_to_null
  for status in [200u16, 201] {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/lists"))
      .respond_with(ResponseTemplate::new(status).set_body_string(r#"[{"id":1,"name":"Newsletter"}]"#))
      .mount(&server)
      .await;

    let client = client_for(&server, "abc123");
    let value = client.lists().all().await.unwrap();

    assert_eq!(value, json!([{"id": 1, "name": "Newsletter"}]));
    assert_eq!(client.last_status_code(), Some(status));
    assert!(client.is_last_response_ok());
    assert_eq!(client.last_response(), Some(value));
  }
}

#[tokio::test]
async fn empty_no_content_decodes_to_null() {
  let server = MockServer::start().await;
  Mock::given(method("DELETE"))
    .and(path("/domains/3"))
    .respond_with(ResponseTemplate::new(204))
    .mount(&server)
    .await;

  let client = client_for(&server, "abc123");
  assert_eq!(client.domains().delete(3).await.unwrap(), Value::Null);
  assert_eq!(client.last_status_code(), Some(204));
}

#[tokio::test]
async fn success_with_non_json_body_is_invalid_response() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/lists"))
    .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
    .mount(&server)
    .await;

  let client = client_for(&server, "abc123");
  let err = client.lists().all().await.unwrap_err();

  assert!(matches!(err, Error::InvalidResponse { status: 200, .. }));
  assert_eq!(err.to_string(), "response is not valid JSON");

  let record = client.last_call().unwrap();
  assert_eq!(record.response_text(), Some("<html>maintenance</html>"));
  assert!(record.response.is_none());
}

#[tokio::test]
async fn unauthorized_never_echoes_body() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/lists/1"))
    .respond_with(ResponseTemplate::new(401).set_body_string("key abc123 is not valid for account 77"))
    .mount(&server)
    .await;

  let client = client_for(&server, "abc123");
  let err = client.lists().show("1").await.unwrap_err();

  assert!(matches!(err, Error::InvalidCredentials));
  assert_eq!(err.code(), Some(401));
  assert_eq!(err.to_string(), "invalid credentials");
  assert!(!format!("{:?}", err).contains("abc123"));

  // the raw body is still available for diagnostics
  assert_eq!(client.last_status_code(), Some(401));
  assert!(client.last_call().unwrap().response_text().unwrap().contains("not valid"));
}

#[tokio::test]
async fn not_found_plain_text_becomes_message() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/lists/999"))
    .respond_with(ResponseTemplate::new(404).set_body_string("List not found"))
    .mount(&server)
    .await;

  let client = client_for(&server, "abc123");
  let err = client.lists().show("999").await.unwrap_err();

  match &err {
    Error::NotFound { message } => assert_eq!(message, "List not found"),
    other => panic!("Expected NotFound, got {:?}", other),
  }
  assert_eq!(err.code(), Some(404));
  assert_eq!(client.last_status_code(), Some(404));
}

#[tokio::test]
async fn not_found_binary_body_gives_empty_message() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/lists/5"))
    .respond_with(ResponseTemplate::new(404).set_body_bytes(vec![0xff, 0xfe, 0x00, 0x9f]))
    .mount(&server)
    .await;

  let client = client_for(&server, "abc123");
  match client.lists().show("5").await.unwrap_err() {
    Error::NotFound { message } => assert!(message.is_empty()),
    other => panic!("Expected NotFound, got {:?}", other),
  }
}

#[tokio::test]
async fn bad_request_message_is_raw_body() {
  let server = MockServer::start().await;
  let raw = r#"{"message":"The given data was invalid.","errors":{"email":["required"]}}"#;
  Mock::given(method("POST"))
    .and(path("/lists/42/subscribe"))
    .respond_with(ResponseTemplate::new(400).set_body_string(raw))
    .mount(&server)
    .await;

  let client = client_for(&server, "abc123");
  let err = client.lists().subscribe("42", &json!({"subscriber_data": {}})).await.unwrap_err();

  match &err {
    Error::BadRequest { message } => assert_eq!(message, raw),
    other => panic!("Expected BadRequest, got {:?}", other),
  }
  assert_eq!(err.code(), Some(400));
}

#[tokio::test]
async fn unknown_statuses_keep_exact_code() {
  for status in [202u16, 403, 409, 422, 429, 500, 503] {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/automation"))
      .respond_with(ResponseTemplate::new(status).set_body_string("{}"))
      .mount(&server)
      .await;

    let client = client_for(&server, "abc123");
    let err = client.automations().all().await.unwrap_err();

    assert!(matches!(err, Error::UnknownResponse { status: s } if s == status), "status {}", status);
    assert_eq!(err.to_string(), "unknown response code");
    assert_eq!(client.last_status_code(), Some(status));
  }
}

#[tokio::test]
async fn redirects_are_classified_not_followed() {
  let elsewhere = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/landing"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"redirected": true})))
    .expect(0)
    .mount(&elsewhere)
    .await;

  for status in [301u16, 302, 307, 308] {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/lists"))
      .respond_with(
        ResponseTemplate::new(status).insert_header("Location", format!("{}/landing", elsewhere.uri()).as_str()),
      )
      .mount(&server)
      .await;

    let client = client_for(&server, "abc123");
    let err = client.lists().all().await.unwrap_err();

    assert!(matches!(err, Error::UnknownResponse { status: s } if s == status), "status {}", status);

    let record = client.last_call().unwrap();
    assert_eq!(record.url, format!("{}/lists", server.uri()));
    assert_eq!(record.status, Some(status));
    assert!(record.response.is_none());
  }
}

#[tokio::test]
async fn every_request_carries_the_three_headers() {
  let server = MockServer::start().await;
  Mock::given(method("PUT"))
    .and(path("/lists/7"))
    .and(header("content-type", "application/json"))
    .and(header("accept", "application/json"))
    .and(header("key", "abc123"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 7})))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server, "abc123");
  client.lists().update("7", &json!({"name": "Renamed"})).await.unwrap();

  let headers = client.last_headers().unwrap();
  assert_eq!(headers.len(), 3);
  assert_eq!(headers["key"], "abc123");
  assert!(headers["key"].is_sensitive());
}

#[tokio::test]
async fn record_round_trips_body_on_success_and_failure() {
  let server = MockServer::start().await;
  Mock::given(method("PUT"))
    .and(path("/lists/1/update-subscriber"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
    .mount(&server)
    .await;
  Mock::given(method("PUT"))
    .and(path("/lists/2/update-subscriber"))
    .respond_with(ResponseTemplate::new(500))
    .mount(&server)
    .await;

  let client = client_for(&server, "abc123");
  let body = json!({"email": "a@b.com", "subscriber_data": {"name": "Jan", "tags": ["vip", "eu"]}});

  client.lists().update_subscriber("1", &body).await.unwrap();
  let sent: Value = serde_json::from_str(&client.last_called_body_json().unwrap()).unwrap();
  assert_eq!(sent, body);
  assert_eq!(client.last_called_body(), Some(body.clone()));

  client.lists().update_subscriber("2", &body).await.unwrap_err();
  let sent: Value = serde_json::from_str(&client.last_called_body_json().unwrap()).unwrap();
  assert_eq!(sent, body);
  assert_eq!(client.last_status_code(), Some(500));
}

#[tokio::test]
async fn record_is_replaced_by_each_call() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/template"))
    .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 11})))
    .mount(&server)
    .await;
  Mock::given(method("GET"))
    .and(path("/domains"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
    .mount(&server)
    .await;

  let client = client_for(&server, "abc123");
  client.templates().create(&json!({"name": "t", "html": "<p/>"})).await.unwrap();
  assert!(client.last_called_body().is_some());

  client.domains().all().await.unwrap();
  let record = client.last_call().unwrap();
  assert_eq!(record.method, HttpMethod::Get);
  assert_eq!(record.url, format!("{}/domains", server.uri()));
  assert!(record.body.is_none());
  assert!(record.body_json.is_none());
  assert_eq!(record.status, Some(200));
}

#[tokio::test]
async fn exchange_returns_record_with_outcome() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/tracker/transaction"))
    .respond_with(ResponseTemplate::new(400).set_body_string("missing order_id"))
    .mount(&server)
    .await;

  let client = client_for(&server, "abc123");
  let body = json!({"transaction": {"email": "a@b.com"}});
  let exchange = client.exchange(HttpMethod::Post, "tracker/transaction", None, Some(body.clone())).await;

  assert!(matches!(exchange.outcome, Err(Error::BadRequest { .. })));
  assert_eq!(exchange.record.status, Some(400));
  assert_eq!(exchange.record.body, Some(body));
  assert_eq!(exchange.record.response_text(), Some("missing order_id"));
  assert!(!exchange.record.is_ok());
}

#[tokio::test]
async fn transport_fault_is_typed_and_recorded() {
  // nothing listens on port 1
  let config = Config::new("abc123").unwrap().with_base_url("http://127.0.0.1:1").unwrap();
  let client = EcomailClient::with_config(config).unwrap();

  let body = json!({"subscriber_data": {"email": "a@b.com"}});
  let err = client.lists().subscribe("42", &body).await.unwrap_err();

  match &err {
    Error::Transport { kind, .. } => assert_eq!(*kind, TransportFault::Connect),
    other => panic!("Expected Transport, got {:?}", other),
  }
  assert!(err.is_transport());

  let record = client.last_call().unwrap();
  assert_eq!(record.url, "http://127.0.0.1:1/lists/42/subscribe");
  assert_eq!(record.body, Some(body));
  assert_eq!(record.headers.len(), 3);
  assert!(record.status.is_none());
  assert!(record.response_raw.is_none());
}

#[tokio::test]
async fn query_string_follows_insertion_order() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/lists/3/subscribers"))
    .and(query_param("page", "2"))
    .and(query_param("per_page", "25"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
    .mount(&server)
    .await;

  let client = client_for(&server, "abc123");
  client
    .dispatch(HttpMethod::Get, "lists/3/subscribers", Some(&[("page", "2"), ("per_page", "25")]), None)
    .await
    .unwrap();

  assert_eq!(client.last_called_url().unwrap(), format!("{}/lists/3/subscribers?page=2&per_page=25", server.uri()));
}

#[tokio::test]
async fn scenario_add_subscriber() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/lists/42/subscribe"))
    .and(header("key", "abc123"))
    .and(body_json(json!({"email": "a@b.com"})))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server, "abc123");
  let response = client.lists().subscribe("42", &json!({"email": "a@b.com"})).await.unwrap();

  assert_eq!(response, json!({"status": "success"}));
  assert_eq!(client.last_status_code(), Some(200));
}
