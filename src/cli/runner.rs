//! CLI runner - executes commands

use crate::api::{ApplicationsApi, PageFetcher};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::feed::{page_stream, FetchOutcome, InfiniteList, ListStatus};
use crate::pagination::{PageRequest, PageResponse};
use crate::render::{render_application, render_list};
use crate::types::Application;
use futures::{StreamExt, TryStreamExt};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.load_config()?;
        let api = Arc::new(ApplicationsApi::with_config(config.http_config())?);
        info!("Using endpoint {}", api.endpoint());

        match &self.cli.command {
            Commands::Page { page, limit } => {
                let limit = limit.unwrap_or(config.page_size);
                self.page(api.as_ref(), *page, limit).await
            }
            Commands::List { limit, pages, all } => {
                let limit = limit.unwrap_or(config.page_size);
                let max_pages = if *all { None } else { Some(*pages) };
                self.list(api, limit, max_pages).await
            }
            Commands::Browse { limit } => {
                let limit = limit.unwrap_or(config.page_size);
                self.browse(api, limit).await
            }
        }
    }

    /// Resolve config file and command-line overrides
    fn load_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        config.validate()?;
        Ok(config)
    }

    /// Fetch and print one page
    async fn page(&self, api: &ApplicationsApi, page: u32, limit: u32) -> Result<()> {
        let response = api
            .fetch_page(PageRequest::new(page).with_limit(limit))
            .await?;

        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&response)?),
            OutputFormat::Pretty => {
                self.print_items(&response.items)?;
                println!(
                    "Page {page}: {} application(s), next page: {}",
                    response.items.len(),
                    if response.has_next_page() { "yes" } else { "no" }
                );
            }
        }
        Ok(())
    }

    /// Walk pages in order and print every application as it arrives
    async fn list(
        &self,
        api: Arc<ApplicationsApi>,
        limit: u32,
        max_pages: Option<usize>,
    ) -> Result<()> {
        let fetcher: Arc<dyn PageFetcher> = api;
        let stream = page_stream(fetcher, limit).take(max_pages.unwrap_or(usize::MAX));
        futures::pin_mut!(stream);

        let mut last: Option<PageResponse> = None;
        let mut total = 0;
        while let Some(page) = stream.try_next().await? {
            total += page.items.len();
            self.print_items(&page.items)?;
            last = Some(page);
        }

        if self.cli.format == OutputFormat::Pretty {
            let more = last.as_ref().is_some_and(PageResponse::has_next_page);
            println!(
                "{total} application(s){}",
                if more { ", more available" } else { "" }
            );
        }
        Ok(())
    }

    /// Interactive infinite list: one page per confirmation
    async fn browse(&self, api: Arc<ApplicationsApi>, limit: u32) -> Result<()> {
        let list = InfiniteList::new(api, limit);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut printed = 0;

        if self.cli.format == OutputFormat::Pretty {
            println!("{}", render_list(&list.snapshot().await).trim_end());
        }
        let mut outcome = list.fetch_next().await;

        loop {
            let snapshot = list.snapshot().await;
            self.print_items(&snapshot.items[printed..])?;
            printed = snapshot.items.len();

            let prompt = match (&outcome, snapshot.status) {
                (FetchOutcome::Failed(message), _) => {
                    eprintln!("Error loading applications: {message}");
                    "Retry? [y/N] "
                }
                (_, ListStatus::Ready) if snapshot.has_next_page => "Load more? [y/N] ",
                _ => break,
            };

            if !confirm(&mut lines, prompt).await? {
                break;
            }
            outcome = list.fetch_next().await;
        }

        if self.cli.format == OutputFormat::Pretty {
            println!("{printed} application(s) loaded");
        }
        Ok(())
    }

    fn print_items(&self, items: &[Application]) -> Result<()> {
        for app in items {
            match self.cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string(app)?),
                OutputFormat::Pretty => println!("{}", render_application(app)),
            }
        }
        Ok(())
    }
}

/// Ask a yes/no question on stdin; end of input counts as no
async fn confirm<R>(lines: &mut tokio::io::Lines<R>, prompt: &str) -> Result<bool>
where
    R: tokio::io::AsyncBufRead + Unpin,
{
    let mut stdout = tokio::io::stdout();
    stdout.write_all(prompt.as_bytes()).await?;
    stdout.flush().await?;

    let answer = lines.next_line().await.map_err(Error::Io)?;
    Ok(answer.is_some_and(|a| matches!(a.trim().to_ascii_lowercase().as_str(), "y" | "yes")))
}
