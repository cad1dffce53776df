use anyhow::Result;
use backpack::{BuyOrder, Config, HttpClient, CONFIG_FILE};
use std::io::{self, Write};
use std::path::Path;
use std::process::exit;

#[tokio::main]
async fn main() -> Result<()> {
    common::setup_env();

    println!("=== backpack.tf Buy Order Creator ===\n");

    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        println!("Configuration file doesn't exist.");
        Config::write_example(path)?;
        println!("Created example config file: {CONFIG_FILE}");
        println!("Please edit it with your access token and desired buy orders!");
        return Ok(());
    }

    let config = match Config::load(path) {
        Ok(config) => config,
        Err(e) => {
            println!("Error loading configuration: {e}");
            println!("Please check the file format.");
            exit(1);
        }
    };

    if !config.has_usable_token() {
        println!("Please set your access token in {CONFIG_FILE}!");
        println!("Get it from: https://backpack.tf/settings (Advanced section)");
        exit(1);
    }

    if config.buy_orders.is_empty() {
        println!("No buy orders found in config!");
        exit(1);
    }

    print_summary(&config.buy_orders);

    if !confirm()? {
        println!("Cancelled.");
        return Ok(());
    }

    println!("Creating buy orders...");
    let client = HttpClient::new(&config.access_token)?;
    match client.create_listings(&config.buy_orders).await {
        Ok(_) => println!("✓ Buy orders created successfully!"),
        Err(e) => {
            println!("✗ Failed to create buy orders");
            let error = e.to_string();
            println!("Error: {error}");
            if let Some(hint) = failure_hint(&error) {
                println!("\nTip: {hint}");
            }
            exit(1);
        }
    }

    Ok(())
}

fn print_summary(orders: &[BuyOrder]) {
    println!("Found {} buy order(s) to create:", orders.len());
    for (i, order) in orders.iter().enumerate() {
        let comment = order.comment.as_deref().unwrap_or("No comment");
        println!("  {}. {} - {}", i + 1, comment, order.price_summary());
    }
    println!("\nReady to create {} buy order(s).", orders.len());
    println!("⚠️  Make sure you have enough currency in your TF2 backpack!");
}

fn confirm() -> io::Result<bool> {
    print!("Continue? (y/N): ");
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(is_affirmative(&input))
}

fn is_affirmative(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}

/// Hints keyed on substrings of the server message. Brittle, but the API
/// offers no structured error codes to match on instead.
fn failure_hint(error: &str) -> Option<&'static str> {
    let error = error.to_lowercase();
    if error.contains("zero") {
        Some("Make sure you have enough keys/metal in your TF2 backpack!")
    } else if error.contains("unauthorized") {
        Some("Check your access token in buy_orders.json")
    } else {
        None
    }
}
