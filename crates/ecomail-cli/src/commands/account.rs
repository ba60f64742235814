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

use anyhow::{Context, Result};
use clap::Args;
use ecomail_client::EcomailClient;
use serde_json::Value;

#[derive(Args, Debug)]
pub struct CampaignsCommand {
  /// Raw filter expression passed through as the `filters` query parameter
  #[arg(short, long)]
  pub filters: Option<String>,
}

#[derive(Args, Debug)]
pub struct AutomationsCommand {}

#[derive(Args, Debug)]
pub struct DomainsCommand {}

pub async fn execute_campaigns(cmd: CampaignsCommand, client: &EcomailClient) -> Result<Value> {
  client.campaigns().all(cmd.filters.as_deref()).await.context("Failed to fetch campaigns")
}

pub async fn execute_automations(_cmd: AutomationsCommand, client: &EcomailClient) -> Result<Value> {
  client.automations().all().await.context("Failed to fetch automations")
}

pub async fn execute_domains(_cmd: DomainsCommand, client: &EcomailClient) -> Result<Value> {
  client.domains().all().await.context("Failed to fetch domains")
}

#[cfg(test)]
mod tests {
  use super::*;
  use ecomail_client::Config;
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  #[tokio::test]
  async fn test_campaign_filters_forwarded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/campaigns"))
      .and(query_param("filters", "status=draft"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}])))
      .expect(1)
      .mount(&server)
      .await;

    let config = Config::new("abc123").unwrap().with_base_url(server.uri()).unwrap();
    let client = EcomailClient::with_config(config).unwrap();

    let cmd = CampaignsCommand { filters: Some("status=draft".to_string()) };
    assert_eq!(execute_campaigns(cmd, &client).await.unwrap(), json!([{"id": 1}]));
  }

  #[tokio::test]
  async fn test_domains_failure_has_context() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/domains"))
      .respond_with(ResponseTemplate::new(500))
      .mount(&server)
      .await;

    let config = Config::new("abc123").unwrap().with_base_url(server.uri()).unwrap();
    let client = EcomailClient::with_config(config).unwrap();

    let err = execute_domains(DomainsCommand {}, &client).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to fetch domains");
    assert_eq!(err.root_cause().to_string(), "unknown response code");
  }
}
