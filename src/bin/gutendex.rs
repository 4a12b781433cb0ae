//! Gutendex CLI binary.
//!
//! A command-line interface for browsing the Gutendex book catalog.

use clap::Parser;
use gutendex::cli::{Cli, Command, ListArgs};
use gutendex::output::{page_summary, PrettyPrint};
use gutendex::{Book, ClientConfig, Get, GutendexClient, GutendexError, List, Page};
use std::error::Error;
use std::process::ExitCode;
use tabled::{Table, Tabled};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "gutendex=info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::default()
        .with_base_url(cli.base_url.as_str())
        .with_verbose(cli.verbose);

    let client = match GutendexClient::with_config(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Check --base-url or GUTENDEX_API_URL");
            return ExitCode::FAILURE;
        }
    };

    let outcome = run(&client, cli).await;
    client.shutdown();

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(status) = e
                .downcast_ref::<GutendexError>()
                .and_then(GutendexError::status_code)
            {
                eprintln!("HTTP status: {status}");
            }
            ExitCode::FAILURE
        }
    }
}

type CliResult<T> = Result<T, Box<dyn Error>>;

async fn run(client: &GutendexClient, cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Get { id } => {
            let book = Book::get(client, id).await?;
            if cli.json {
                print_json(&book)?;
            } else {
                println!("{}", book.pretty_print());
            }
        }
        Command::List(args) => {
            let page = fetch_page(client, &args).await?;
            output_page(&page, cli.json)?;
        }
    }
    Ok(())
}

async fn fetch_page(client: &GutendexClient, args: &ListArgs) -> gutendex::Result<Page<Book>> {
    match args.page_url {
        Some(ref url) => Book::list_from_url(client, url).await,
        None => Book::list(client, &args.to_query()).await,
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn output_page(page: &Page<Book>, json: bool) -> CliResult<()> {
    if json {
        print_json(page)?;
    } else {
        let rows: Vec<BookRow> = page.iter().map(BookRow::from).collect();
        println!("{}", Table::new(rows));
        println!("\n{}", page_summary(page));
    }
    Ok(())
}

// Table row type for non-JSON output

#[derive(Tabled)]
struct BookRow {
    id: u64,
    title: String,
    authors: String,
    languages: String,
    downloads: u64,
}

impl From<&Book> for BookRow {
    fn from(b: &Book) -> Self {
        Self {
            id: b.id,
            title: b.title.clone(),
            authors: b.author_names().join("; "),
            languages: b.languages.join(","),
            downloads: b.download_count,
        }
    }
}
