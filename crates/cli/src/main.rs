//! Waitline CLI - Operator console for the Waitline daemon

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tabled::{Table, Tabled};
use tokio::time::{sleep, Duration};
use waitline_sdk::{CustomerStatus, Queue, WaitlineClient};

const DEFAULT_API_URL: &str = "http://127.0.0.1:8080";

// Matches the polling cadence of the web UI
const WATCH_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Parser)]
#[command(name = "waitline")]
#[command(about = "Waitline queue management CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// API server URL
    #[arg(long, env = "WAITLINE_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new queue
    Create {
        /// Queue display name
        name: String,
    },

    /// Show a queue and its customers
    Show {
        /// Queue ID
        queue_id: String,

        /// Keep refreshing every 5 seconds
        #[arg(long)]
        watch: bool,
    },

    /// Join a queue as a customer
    Join {
        /// Queue ID
        queue_id: String,

        /// Customer display name
        name: String,
    },

    /// Mark a customer as served
    Serve {
        /// Queue ID
        queue_id: String,

        /// Customer ID
        customer_id: String,
    },

    /// Remove a customer from a queue
    Remove {
        /// Queue ID
        queue_id: String,

        /// Customer ID
        customer_id: String,
    },

    /// Delete a queue and all its customers
    Delete {
        /// Queue ID
        queue_id: String,
    },
}

#[derive(Tabled)]
struct CustomerRow {
    #[tabled(rename = "POSITION")]
    position: String,
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "STATUS")]
    status: String,
    #[tabled(rename = "JOINED")]
    joined: String,
    #[tabled(rename = "ID")]
    id: String,
}

fn print_queue(queue: &Queue) {
    let waiting = queue
        .customers
        .iter()
        .filter(|c| c.status == CustomerStatus::Waiting)
        .count();

    println!(
        "{} {} ({}) - {} waiting",
        "Queue:".bold(),
        queue.name,
        queue.id,
        waiting
    );

    if queue.customers.is_empty() {
        println!("  (no customers)");
        return;
    }

    let rows: Vec<CustomerRow> = queue
        .customers
        .iter()
        .map(|c| CustomerRow {
            position: queue
                .waiting_position(&c.id)
                .map(|p| p.to_string())
                .unwrap_or_else(|| "-".to_string()),
            name: c.name.clone(),
            status: match c.status {
                CustomerStatus::Waiting => "waiting".yellow().to_string(),
                CustomerStatus::Served => "served".green().to_string(),
            },
            joined: c.joined_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            id: c.id.clone(),
        })
        .collect();

    println!("{}", Table::new(rows));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = WaitlineClient::new(&cli.api_url).context("Failed to build API client")?;

    match cli.command {
        Commands::Create { name } => {
            let queue = client.create_queue(&name).await?;
            println!("{} Queue {} created", "✓".green(), queue.name.bold());
            println!("  id: {}", queue.id);
        }

        Commands::Show { queue_id, watch } => loop {
            let queue = client.queue(&queue_id).await?;
            print_queue(&queue);
            if !watch {
                break;
            }
            sleep(WATCH_INTERVAL).await;
        },

        Commands::Join { queue_id, name } => {
            let customer = client.join(&queue_id, &name).await?;
            let queue = client.queue(&queue_id).await?;
            println!("{} {} joined the queue", "✓".green(), customer.name.bold());
            println!("  id: {}", customer.id);
            if let Some(position) = queue.waiting_position(&customer.id) {
                println!("  position: {position}");
            }
        }

        Commands::Serve {
            queue_id,
            customer_id,
        } => {
            client.serve(&queue_id, &customer_id).await?;
            println!("{} Customer {} served", "✓".green(), customer_id);
        }

        Commands::Remove {
            queue_id,
            customer_id,
        } => {
            client.remove(&queue_id, &customer_id).await?;
            println!("{} Customer {} removed", "✓".green(), customer_id);
        }

        Commands::Delete { queue_id } => {
            client.delete_queue(&queue_id).await?;
            println!("{} Queue {} deleted", "✓".green(), queue_id);
        }
    }

    Ok(())
}
