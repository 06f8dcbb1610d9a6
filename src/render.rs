//! Text rendering of applications and list state

use crate::feed::{ListSnapshot, ListStatus};
use crate::format::{format_currency, format_date};
use crate::types::Application;
use std::fmt::Write as _;

/// Shown while the first page is loading
pub const LOADING_MESSAGE: &str = "Loading applications...";

/// Hint shown under the list when another page exists
pub const LOAD_MORE_HINT: &str = "Load more";

/// Hint shown while a further page is loading
pub const LOADING_MORE_HINT: &str = "Loading...";

/// Label column width for card fields
const LABEL_WIDTH: usize = 18;

/// Render one application as a labelled card
pub fn render_application(app: &Application) -> String {
    let fields = [
        ("Company", app.company.clone()),
        ("Name", app.full_name()),
        ("Email", app.email.clone()),
        ("Loan amount", format_currency(app.loan_amount)),
        ("Application date", format_date(&app.date_created)),
        ("Expiry date", format_date(&app.expiry_date)),
    ];

    let mut out = format!("Application {}: {}\n", app.id, app.company);
    for (label, value) in fields {
        let _ = writeln!(out, "  {label:<LABEL_WIDTH$} {value}");
    }
    out
}

/// Render the whole list for its current status
pub fn render_list(snapshot: &ListSnapshot) -> String {
    match snapshot.status {
        ListStatus::IdleInitial | ListStatus::LoadingInitial => format!("{LOADING_MESSAGE}\n"),
        ListStatus::Error if snapshot.items.is_empty() => render_error(snapshot),
        _ => {
            let mut out = snapshot
                .items
                .iter()
                .map(render_application)
                .collect::<Vec<_>>()
                .join("\n");

            match snapshot.status {
                ListStatus::Error => {
                    out.push('\n');
                    out.push_str(&render_error(snapshot));
                }
                ListStatus::LoadingMore => {
                    let _ = writeln!(out, "\n[{LOADING_MORE_HINT}]");
                }
                _ if snapshot.has_next_page => {
                    let _ = writeln!(out, "\n[{LOAD_MORE_HINT}]");
                }
                _ => {}
            }
            out
        }
    }
}

fn render_error(snapshot: &ListSnapshot) -> String {
    format!(
        "Error loading applications: {}\n",
        snapshot.error.as_deref().unwrap_or("Unknown error occurred")
    )
}
