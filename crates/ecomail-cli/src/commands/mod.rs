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

pub mod account;
pub mod lists;

use anyhow::{bail, Result};
use clap::Subcommand;
use ecomail_client::{CallRecord, EcomailClient};
use serde_json::{json, Value};
use tracing::info;

use account::{AutomationsCommand, CampaignsCommand, DomainsCommand};
use lists::{ListsCommand, SubscribersCommand};

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Check that the API key is accepted
  Ping,
  /// Show all contact lists, or one list with --id
  Lists(ListsCommand),
  /// Show subscribers of a list
  Subscribers(SubscribersCommand),
  /// Show campaigns
  Campaigns(CampaignsCommand),
  /// Show automations
  Automations(AutomationsCommand),
  /// Show sending domains
  Domains(DomainsCommand),
}

/// Run one command and return the decoded response
pub async fn execute(cmd: Commands, client: &EcomailClient) -> Result<Value> {
  match cmd {
    Commands::Ping => ping(client).await,
    Commands::Lists(cmd) => lists::execute_lists(cmd, client).await,
    Commands::Subscribers(cmd) => lists::execute_subscribers(cmd, client).await,
    Commands::Campaigns(cmd) => account::execute_campaigns(cmd, client).await,
    Commands::Automations(cmd) => account::execute_automations(cmd, client).await,
    Commands::Domains(cmd) => account::execute_domains(cmd, client).await,
  }
}

async fn ping(client: &EcomailClient) -> Result<Value> {
  if !client.ping().await? {
    bail!("API key was rejected");
  }
  info!("API key accepted");
  Ok(json!({ "reachable": true }))
}

pub fn print_json(value: &Value) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

/// One-line summary of a call: method, URL and status
pub fn trace_line(record: &CallRecord) -> String {
  let status = record.status.map_or_else(|| "no response".to_string(), |s| s.to_string());
  format!("{} {} -> {}", record.method, record.url, status)
}

pub fn print_trace(client: &EcomailClient) {
  match client.last_call() {
    Some(record) => eprintln!("{}", trace_line(&record)),
    None => eprintln!("no request was sent"),
  }
}
