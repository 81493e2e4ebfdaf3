use chrono::Utc;
use clap::Parser;
use nd_client::{NewsApiClient, NewsSource, ProxyClient, SearchRequest};
use nd_core::{Result, TOPICS};
use nd_rank::{build_front_page, no_results_message, suggest_correction};
use nd_web::AppState;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod render;
mod session;

use session::{FetchOutcome, ReaderSession};

#[derive(Parser, Debug)]
#[command(name = "newsdeck", version, about = "Search, rank and read the news")]
struct Cli {
    /// Fetch through a running newsdeck proxy instead of NewsAPI
    /// directly (e.g. http://127.0.0.1:3000).
    #[arg(long)]
    proxy: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Search for news and print the ranked front page.
    Search {
        #[arg(required = true)]
        terms: Vec<String>,
    },
    /// Browse a topic (no relevance filtering, keyword-bucket cards).
    Topic { name: String },
    /// List the browsable topics.
    Topics,
    /// Run the fetch proxy.
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

fn news_source(proxy: Option<&str>) -> Result<Arc<dyn NewsSource>> {
    match proxy {
        Some(base_url) => Ok(Arc::new(ProxyClient::new(base_url)?)),
        None => Ok(Arc::new(NewsApiClient::from_env()?)),
    }
}

/// One fetch-rank-render cycle for the session's current query.
async fn run_fetch(source: &dyn NewsSource, session: &mut ReaderSession) {
    let token = session.begin_fetch();
    let upstream_query = session.upstream_query().to_string();
    let ranking_query = session.ranking_query().to_string();

    let request = SearchRequest::for_query(&upstream_query);
    let outcome = match source.search(&request).await {
        Ok(response) if response.articles.is_empty() => {
            let suggestion = suggest_correction(&upstream_query);
            FetchOutcome::Empty {
                message: no_results_message(&upstream_query, suggestion.as_deref()),
                suggestion,
            }
        }
        Ok(response) => {
            let page = build_front_page(response.articles, &ranking_query, Utc::now());
            FetchOutcome::Results(page)
        }
        Err(err) => FetchOutcome::Failed(err.to_string()),
    };

    session.complete_fetch(token, outcome);
    println!("{}", render::render_view(session.view()));
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search { terms } => {
            let source = news_source(cli.proxy.as_deref())?;
            let mut session = ReaderSession::new();
            session.submit_search(&terms.join(" "));
            info!("🔍 Searching for \"{}\"", session.upstream_query());
            run_fetch(source.as_ref(), &mut session).await;
        }
        Commands::Topic { name } => {
            let source = news_source(cli.proxy.as_deref())?;
            let mut session = ReaderSession::new();
            session.select_topic(&name);
            info!("🗞️ Browsing topic \"{}\"", session.upstream_query());
            run_fetch(source.as_ref(), &mut session).await;
        }
        Commands::Topics => {
            for topic in TOPICS {
                println!("{}", topic);
            }
        }
        Commands::Serve { addr } => {
            let client = NewsApiClient::from_env()?;
            let state = AppState {
                source: Arc::new(client),
            };
            nd_web::serve(state, addr).await?;
        }
    }

    Ok(())
}
