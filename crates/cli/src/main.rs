//! Sleepwell CLI - Command-line client for the Sleepwell quotes server

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tabled::{Table, Tabled};

const DEFAULT_RPC_URL: &str = "http://127.0.0.1:9528";

#[derive(Parser)]
#[command(name = "sleepwell")]
#[command(about = "Sleepwell quotes CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// RPC server URL
    #[arg(long, env = "SLEEPWELL_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Get an inspirational quote
    Quote {
        /// Category (e.g., sleep_hygiene, science, mindfulness)
        #[arg(short, long)]
        category: Option<String>,

        /// Mood (calm, motivational, peaceful, reflective, educational)
        #[arg(short, long)]
        mood: Option<String>,

        /// Pick for the current time of day (ignores category and mood)
        #[arg(short, long)]
        time_based: bool,
    },

    /// Get a sleep hygiene tip
    Tip,

    /// Search quotes by keyword
    Search {
        /// Keyword matched against text and author
        query: String,

        /// Maximum number of results
        #[arg(short = 'n', long, default_value = "5")]
        limit: u32,
    },

    /// Quote of the day for the current period
    Wisdom {
        /// Leave out the practical tip
        #[arg(long)]
        no_tip: bool,
    },

    /// Bedtime routine reminder
    Bedtime {
        /// Bedtime as HH:MM
        #[arg(short, long, default_value = "22:00")]
        at: String,

        /// Reminder type (preparation, relaxation, environment, mindfulness)
        #[arg(short = 't', long = "type", default_value = "preparation")]
        reminder_type: String,
    },

    /// List quote categories
    Categories,

    /// Quote counts per category, time of day and mood
    Stats,

    /// Show server status and available operations
    Status,
}

#[derive(Serialize)]
struct JsonRpcRequest {
    jsonrpc: String,
    method: String,
    params: Value,
    id: u64,
}

#[derive(Deserialize)]
struct JsonRpcResponse {
    #[allow(dead_code)]
    jsonrpc: String,
    #[allow(dead_code)]
    id: u64,
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[derive(Deserialize)]
struct JsonRpcError {
    code: i32,
    message: String,
}

#[derive(Deserialize)]
struct Quote {
    id: u32,
    text: String,
    author: Option<String>,
    category: String,
    time_of_day: String,
    mood: String,
}

impl Quote {
    fn author(&self) -> &str {
        self.author.as_deref().unwrap_or("Anonymous")
    }
}

#[derive(Tabled)]
struct QuoteRow {
    id: u32,
    text: String,
    author: String,
    category: String,
    mood: String,
}

impl From<&Quote> for QuoteRow {
    fn from(q: &Quote) -> Self {
        Self {
            id: q.id,
            text: q.text.clone(),
            author: q.author().to_string(),
            category: q.category.clone(),
            mood: q.mood.clone(),
        }
    }
}

#[derive(Tabled)]
struct CountRow {
    field: &'static str,
    value: String,
    count: u64,
}

#[derive(Tabled)]
struct OperationRow {
    rpc_method: String,
    rest_route: String,
    summary: String,
}

async fn call_rpc(url: &str, method: &str, params: Value) -> Result<Value> {
    let request = JsonRpcRequest {
        jsonrpc: "2.0".to_string(),
        method: method.to_string(),
        params,
        id: 1,
    };

    let client = reqwest::Client::new();
    let response: JsonRpcResponse = client
        .post(url)
        .json(&request)
        .send()
        .await
        .context("Failed to connect to server")?
        .json()
        .await
        .context("Failed to parse response")?;

    if let Some(error) = response.error {
        anyhow::bail!("RPC error ({}): {}", error.code, error.message);
    }

    response
        .result
        .ok_or_else(|| anyhow::anyhow!("No result in response"))
}

fn print_quote(quote: &Quote) {
    println!("  {}", format!("\"{}\"", quote.text).italic());
    println!("    - {}", quote.author().bold());
    println!(
        "  {}",
        format!("#{} {} / {} / {}", quote.id, quote.category, quote.time_of_day, quote.mood)
            .dimmed()
    );
}

fn quote_params(category: Option<String>, mood: Option<String>, time_based: bool) -> Value {
    let mut params = json!({ "time_based": time_based });
    if let Some(category) = category {
        params["category"] = json!(category);
    }
    if let Some(mood) = mood {
        params["mood"] = json!(mood);
    }
    params
}

fn count_rows(stats: &Value) -> Vec<CountRow> {
    let mut rows = Vec::new();
    for (field, key) in [
        ("category", "categories"),
        ("time of day", "time_periods"),
        ("mood", "moods"),
    ] {
        if let Some(counts) = stats[key].as_object() {
            for (value, count) in counts {
                rows.push(CountRow {
                    field,
                    value: value.clone(),
                    count: count.as_u64().unwrap_or(0),
                });
            }
        }
    }
    rows
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Quote {
            category,
            mood,
            time_based,
        } => {
            let params = quote_params(category, mood, time_based);
            let result = call_rpc(&cli.rpc_url, "get_inspirational_quote", params).await?;
            let quote: Quote = serde_json::from_value(result["quote"].clone())?;

            if result["matched_filters"].as_bool() == Some(false) {
                println!("{}", "⚠ No quote matched, showing a random one".yellow());
            }
            println!();
            print_quote(&quote);
        }

        Commands::Tip => {
            let result = call_rpc(&cli.rpc_url, "get_sleep_hygiene_tip", json!({})).await?;
            let tip: Quote = serde_json::from_value(result["tip"].clone())?;

            println!("{}", "Sleep hygiene tip".cyan().bold());
            println!();
            print_quote(&tip);
        }

        Commands::Search { query, limit } => {
            let params = json!({ "query": query, "limit": limit });
            let result = call_rpc(&cli.rpc_url, "search_sleep_quotes", params).await?;
            let quotes: Vec<Quote> = serde_json::from_value(result["results"].clone())?;

            if quotes.is_empty() {
                println!("{}", result["message"].as_str().unwrap_or("No results").yellow());
            } else {
                println!("{}", format!("✓ {} result(s) for \"{}\"", quotes.len(), query).green().bold());
                println!();
                let rows: Vec<QuoteRow> = quotes.iter().map(QuoteRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Wisdom { no_tip } => {
            let params = json!({ "include_tip": !no_tip });
            let result = call_rpc(&cli.rpc_url, "get_daily_sleep_wisdom", params).await?;
            let quote: Quote = serde_json::from_value(result["quote"].clone())?;

            println!(
                "{}",
                format!("Sleep wisdom for the {}", result["period"].as_str().unwrap_or("day"))
                    .cyan()
                    .bold()
            );
            println!();
            print_quote(&quote);

            if !result["tip"].is_null() {
                let tip: Quote = serde_json::from_value(result["tip"].clone())?;
                println!();
                println!("{}", "Practical tip".bold());
                print_quote(&tip);
            }
        }

        Commands::Bedtime { at, reminder_type } => {
            let params = json!({ "user_bedtime": at, "reminder_type": reminder_type });
            let result = call_rpc(&cli.rpc_url, "get_bedtime_routine_reminder", params).await?;

            println!("{}", result["message"].as_str().unwrap_or_default().cyan().bold());
            println!();
            for line in result["rendered"].as_array().into_iter().flatten() {
                println!("  {} {}", "•".bold(), line.as_str().unwrap_or_default());
            }
            println!();
            println!(
                "  {}",
                format!("\"{}\"", result["closing_quote"].as_str().unwrap_or_default()).italic()
            );
            println!("    - {}", result["closing_author"].as_str().unwrap_or_default());
        }

        Commands::Categories => {
            let result = call_rpc(&cli.rpc_url, "list_quote_categories", json!({})).await?;

            println!(
                "{}",
                format!("{} categories", result["total_categories"]).cyan().bold()
            );
            for category in result["categories"].as_array().into_iter().flatten() {
                println!("  {} {}", "•".bold(), category.as_str().unwrap_or_default());
            }
        }

        Commands::Stats => {
            let stats = call_rpc(&cli.rpc_url, "get_quote_statistics", json!({})).await?;

            println!(
                "{} {}",
                "Total quotes:".bold(),
                stats["total_quotes"].as_u64().unwrap_or(0)
            );
            println!();
            println!("{}", Table::new(count_rows(&stats)));
        }

        Commands::Status => {
            println!("{}", "Server Status".cyan().bold());
            println!();

            match call_rpc(&cli.rpc_url, "list_operations", json!({})).await {
                Ok(catalog) => {
                    println!("  {} {}", "RPC URL:".bold(), cli.rpc_url);
                    println!("  {} {}", "Status:".bold(), "ONLINE".green());
                    println!(
                        "  {} {}",
                        "Version:".bold(),
                        catalog["version"].as_str().unwrap_or("unknown")
                    );
                    println!();

                    let rows: Vec<OperationRow> = catalog["operations"]
                        .as_array()
                        .into_iter()
                        .flatten()
                        .map(|op| OperationRow {
                            rpc_method: op["rpc_method"].as_str().unwrap_or_default().to_string(),
                            rest_route: op["rest"]["path"].as_str().unwrap_or_default().to_string(),
                            summary: op["summary"].as_str().unwrap_or_default().to_string(),
                        })
                        .collect();
                    println!("{}", Table::new(rows));
                }
                Err(e) => {
                    println!("  {} {}", "Status:".bold(), "ERROR".red());
                    println!("  {} {}", "Error:".bold(), e);
                }
            }
        }
    }

    Ok(())
}
