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

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use ecomail_client::EcomailClient;

mod commands;
use commands::Commands;

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "ecomail")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Print method, URL and status of the request after the command
  #[arg(long, global = true)]
  trace: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  let cli = Cli::parse();

  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let config = config::Config::from_env()?;
  let client = EcomailClient::with_config(config.api_config)?;

  let outcome = commands::execute(cli.command, &client).await;

  if cli.trace {
    commands::print_trace(&client);
  }

  commands::print_json(&outcome?)
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::CommandFactory;

  #[test]
  fn test_cli_definition_is_valid() {
    Cli::command().debug_assert();
  }

  #[test]
  fn test_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["ecomail", "lists", "--id", "7", "--trace", "-v"]).unwrap();
    assert!(cli.trace);
    assert!(cli.verbose);
    match cli.command {
      Commands::Lists(cmd) => assert_eq!(cmd.id.as_deref(), Some("7")),
      other => panic!("Expected Lists, got {:?}", other),
    }
  }

  #[test]
  fn test_subscribers_requires_list() {
    assert!(Cli::try_parse_from(["ecomail", "subscribers"]).is_err());

    let cli =
      Cli::try_parse_from(["ecomail", "subscribers", "42", "--page", "2", "--per-page", "100"]).unwrap();
    match cli.command {
      Commands::Subscribers(cmd) => {
        assert_eq!(cmd.list, "42");
        assert_eq!(cmd.page, Some(2));
        assert_eq!(cmd.per_page, Some(100));
        assert!(cmd.email.is_none());
      }
      other => panic!("Expected Subscribers, got {:?}", other),
    }
  }

  #[test]
  fn test_campaign_filters_flag() {
    let cli = Cli::try_parse_from(["ecomail", "campaigns", "--filters", "status=sent"]).unwrap();
    match cli.command {
      Commands::Campaigns(cmd) => assert_eq!(cmd.filters.as_deref(), Some("status=sent")),
      other => panic!("Expected Campaigns, got {:?}", other),
    }
  }
}
