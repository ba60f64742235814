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
use ecomail_models::SubscriberQuery;
use serde_json::Value;
use tracing::debug;

#[derive(Args, Debug)]
pub struct ListsCommand {
  /// Show a single list
  #[arg(short, long)]
  pub id: Option<String>,
}

#[derive(Args, Debug)]
pub struct SubscribersCommand {
  /// List id
  pub list: String,

  /// Look up one subscriber by email instead of paging
  #[arg(short, long)]
  pub email: Option<String>,

  #[arg(long)]
  pub page: Option<u32>,

  #[arg(long)]
  pub per_page: Option<u32>,
}

pub async fn execute_lists(cmd: ListsCommand, client: &EcomailClient) -> Result<Value> {
  match cmd.id {
    Some(id) => client.lists().show(&id).await.with_context(|| format!("Failed to fetch list {}", id)),
    None => client.lists().all().await.context("Failed to fetch lists"),
  }
}

pub async fn execute_subscribers(cmd: SubscribersCommand, client: &EcomailClient) -> Result<Value> {
  if let Some(email) = cmd.email {
    return client
      .lists()
      .subscriber(&cmd.list, &email)
      .await
      .with_context(|| format!("Failed to fetch subscriber {} of list {}", email, cmd.list));
  }

  let query = SubscriberQuery { page: cmd.page, per_page: cmd.per_page, status: None };
  debug!("Fetching subscribers of list {} with {:?}", cmd.list, query);

  client
    .lists()
    .subscribers(&cmd.list, &query)
    .await
    .with_context(|| format!("Failed to fetch subscribers of list {}", cmd.list))
}
