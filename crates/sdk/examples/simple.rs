//! Simple SDK Example
//!
//! Demonstrates basic usage of the Sleepwell SDK.
//!
//! # Usage
//!
//! 1. Start the server:
//!    ```bash
//!    cargo run --package sleepwell-daemon
//!    ```
//!
//! 2. Run this example:
//!    ```bash
//!    cargo run --package sleepwell-sdk --example simple
//!    ```

use sleepwell_sdk::{BedtimeParams, Mood, QuoteParams, ReminderType, SearchParams, SleepwellClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Sleepwell SDK - Simple Example");
    println!("==============================\n");

    // 1. Connect to server
    println!("1. Connecting to server...");
    let client = SleepwellClient::connect("http://127.0.0.1:9528").await?;
    println!("   ✓ Connected\n");

    // 2. Calm quote
    println!("2. Asking for a calm quote...");
    let quote = client
        .get_quote(QuoteParams {
            mood: Some(Mood::Calm),
            ..Default::default()
        })
        .await?;
    println!("   \"{}\"", quote.quote.text);
    println!("     - {}\n", quote.quote.attribution());

    // 3. Search
    println!("3. Searching for \"brain\"...");
    let search = client.search(SearchParams::new("brain")).await?;
    println!("   ✓ {}", search.message);
    for result in &search.results {
        println!("     #{} {}", result.id, result.text);
    }
    println!();

    // 4. Bedtime routine
    println!("4. Building a relaxation routine for 23:00...");
    let routine = client
        .bedtime_reminder(BedtimeParams {
            user_bedtime: "23:00".to_string(),
            reminder_type: ReminderType::Relaxation,
        })
        .await?;
    for line in &routine.rendered {
        println!("     {}", line);
    }
    println!("   \"{}\" - {}", routine.routine.closing_quote, routine.routine.closing_author);

    println!("\n✓ Example completed successfully!");

    Ok(())
}
