use anyhow::{Context, Result};
use clap::Parser;
use futures::future::join_all;
use rand::{distr::Alphanumeric, rngs::StdRng, Rng, SeedableRng};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use library_server::library::{Book, BookRequest, Operation};

/// Fires random catalog operations at a running library server.
#[derive(Parser, Debug)]
struct CliArgs {
    /// Base URL of the library server.
    #[clap(long, default_value = "http://127.0.0.1:50051")]
    pub url: String,

    /// Number of concurrent clients.
    #[clap(short, long, default_value_t = 5)]
    pub clients: usize,

    /// Number of operations performed by each client.
    #[clap(short, long, default_value_t = 10)]
    pub operations: usize,

    /// Upper bound of the random pause between two operations, in milliseconds.
    #[clap(long, default_value_t = 1000)]
    pub max_pause_ms: u64,

    /// Book ids are drawn from 0..id_range, small ranges produce more conflicts.
    #[clap(long, default_value_t = 10)]
    pub id_range: i32,
}

#[derive(Default, Debug, Clone, Copy)]
struct Tally {
    ok: u64,
    failed: u64,
}

type Summary = HashMap<Operation, Tally>;

fn random_string(rng: &mut StdRng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

fn random_book(rng: &mut StdRng, id_range: i32) -> Book {
    Book {
        id: rng.random_range(0..id_range),
        title: random_string(rng, 20),
        author: random_string(rng, 15),
        isbn: random_string(rng, 15),
        publication_year: rng.random_range(1900..2023),
        genre: random_string(rng, 10),
    }
}

async fn perform(
    client: &reqwest::Client,
    url: &str,
    operation: Operation,
    book: &Book,
) -> reqwest::Result<reqwest::Response> {
    let request = match operation {
        Operation::CreateBook => client.post(format!("{url}/v1/books")).json(&BookRequest {
            book: book.clone(),
        }),
        Operation::GetBook => client.get(format!("{url}/v1/books/{}", book.id)),
        Operation::UpdateBook => client.put(format!("{url}/v1/books")).json(&BookRequest {
            book: book.clone(),
        }),
        Operation::DeleteBook => client.delete(format!("{url}/v1/books/{}", book.id)),
        Operation::ListBooks => client.get(format!("{url}/v1/books")),
    };
    request.send().await
}

async fn run_client(
    client_id: usize,
    client: reqwest::Client,
    args: &CliArgs,
) -> Summary {
    let mut rng = StdRng::from_os_rng();
    let mut summary = Summary::new();
    let choices = [
        Operation::CreateBook,
        Operation::GetBook,
        Operation::UpdateBook,
        Operation::DeleteBook,
    ];

    for _ in 0..args.operations {
        let operation = choices[rng.random_range(0..choices.len())];
        let book = random_book(&mut rng, args.id_range);

        let tally = summary.entry(operation).or_default();
        match perform(&client, &args.url, operation, &book).await {
            Ok(response) if response.status().is_success() => {
                tally.ok += 1;
                info!("[client {}] {} {} ok", client_id, operation, book.id);
            }
            Ok(response) => {
                tally.failed += 1;
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                info!(
                    "[client {}] {} {} failed: {} {}",
                    client_id, operation, book.id, status, body
                );
            }
            Err(e) => {
                tally.failed += 1;
                warn!("[client {}] {} request error: {}", client_id, operation, e);
            }
        }

        if args.max_pause_ms > 0 {
            let pause = Duration::from_millis(rng.random_range(0..args.max_pause_ms));
            tokio::time::sleep(pause).await;
        }
    }

    summary
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()?;

    if args.id_range <= 0 {
        anyhow::bail!("--id-range must be positive");
    }

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .context("Failed to build HTTP client")?;

    info!(
        "Running {} clients x {} operations against {}",
        args.clients, args.operations, args.url
    );

    let args = std::sync::Arc::new(args);
    let handles = (0..args.clients).map(|client_id| {
        let client = client.clone();
        let args = args.clone();
        tokio::spawn(async move { run_client(client_id, client, &args).await })
    });

    let mut total = Summary::new();
    for result in join_all(handles).await {
        let summary = result.context("Load client task panicked")?;
        for (operation, tally) in summary {
            let entry = total.entry(operation).or_default();
            entry.ok += tally.ok;
            entry.failed += tally.failed;
        }
    }

    info!("Load testing completed.");
    for operation in Operation::ALL {
        if let Some(tally) = total.get(&operation) {
            println!(
                "{:<12} ok: {:>5}  failed: {:>5}",
                operation.name(),
                tally.ok,
                tally.failed
            );
        }
    }

    Ok(())
}
