//! Plain-text rendering of the reader view: featured K/Q/J cards first,
//! then the remaining grid.

use chrono::{DateTime, Utc};
use nd_core::Article;
use nd_rank::FrontPage;

use crate::session::ViewState;

pub fn render_view(state: &ViewState) -> String {
    match state {
        ViewState::Idle => "Nothing fetched yet.".to_string(),
        ViewState::Loading => "Loading news...".to_string(),
        ViewState::Loaded(page) => render_front_page(page),
        ViewState::Empty {
            message,
            suggestion,
        } => match suggestion {
            Some(corrected) => format!("{}\nTry this instead: {}", message, corrected),
            None => message.clone(),
        },
        ViewState::Failed(message) => format!("Error: {}", message),
    }
}

fn render_front_page(page: &FrontPage) -> String {
    let mut out = String::new();

    if !page.featured.is_empty() {
        out.push_str("Top Stories\n");
        for (role, article) in page.featured.roles() {
            out.push_str(&card(role.initial(), role.label(), article));
        }
    }

    if !page.remaining.is_empty() {
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str("More Stories\n");
        for article in &page.remaining {
            out.push_str(&format!(
                "  - {} ({})\n",
                article.title,
                byline(article)
            ));
        }
    }

    if out.is_empty() {
        out.push_str("No articles to show.");
    }
    out
}

fn card(initial: char, label: &str, article: &Article) -> String {
    format!(
        "  [{}] {:<5} {}\n        {}\n        {}\n",
        initial,
        label,
        article.title,
        byline(article),
        article.description
    )
}

fn byline(article: &Article) -> String {
    let date = format_date(article.published_at);
    if article.source.name.is_empty() {
        date
    } else {
        format!("{} · {}", article.source.name, date)
    }
}

/// `MMM d, yyyy`, the card byline format.
fn format_date(published_at: Option<DateTime<Utc>>) -> String {
    match published_at {
        Some(ts) => ts.format("%b %-d, %Y").to_string(),
        None => "undated".to_string(),
    }
}
