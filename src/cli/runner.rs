//! CLI runner - renders pages and drives navigation

use crate::cli::commands::{Cli, Commands};
use crate::error::{Error, Result};
use crate::fetch::{PageFetcher, TodoClient};
use crate::http::{HttpClient, HttpClientConfig};
use crate::pagination::PaginationController;
use crate::types::{Todo, PAGE_SIZE};
use crate::view::ViewState;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

const TITLE_WIDTH: usize = 50;

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
        let client = self.build_client()?;
        match self.cli.command.as_ref().unwrap_or(&Commands::Browse) {
            Commands::Browse => self.browse(client).await,
            Commands::Fetch { page } => self.fetch_once(client, *page).await,
        }
    }

    fn build_client(&self) -> Result<TodoClient> {
        url::Url::parse(&self.cli.base_url)?;
        let config = HttpClientConfig::builder()
            .base_url(self.cli.base_url.as_str())
            .timeout(Duration::from_secs(self.cli.timeout_secs))
            .build();
        Ok(TodoClient::with_http(HttpClient::with_config(config)))
    }

    async fn browse(&self, client: TodoClient) -> Result<()> {
        let mut controller = PaginationController::new(Arc::new(client));
        controller.reload().await;
        render(&ViewState::derive(controller.state()));

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            println!();
            println!("[n] next  [p] previous  [q] quit");
            let Some(line) = lines.next_line().await? else {
                break;
            };

            match line.trim() {
                "n" => {
                    if controller.next() {
                        controller.reload().await;
                    } else {
                        println!("Already at the last page.");
                        continue;
                    }
                }
                "p" => {
                    if controller.previous() {
                        controller.reload().await;
                    } else {
                        println!("Already at the first page.");
                        continue;
                    }
                }
                "q" => break,
                "" => continue,
                other => {
                    println!("Unknown command: {other}");
                    continue;
                }
            }

            render(&ViewState::derive(controller.state()));
        }

        Ok(())
    }

    async fn fetch_once(&self, client: TodoClient, page: u32) -> Result<()> {
        if page == 0 {
            return Err(Error::config("page numbers start at 1"));
        }

        let fetch = client.fetch_page(page, PAGE_SIZE).await?;
        if fetch.records.is_empty() {
            println!("No more posts available.");
        } else {
            print_table(&fetch.records);
        }
        if let Some(total) = fetch.total_count {
            println!("Total records: {total}");
        }
        Ok(())
    }
}

fn render(view: &ViewState<'_>) {
    if view.show_table {
        print_table(view.rows);
    } else if view.show_placeholder {
        println!("No more posts available.");
    }
    if view.show_spinner {
        println!("Loading...");
    }
    println!("{}", view.page_indicator);
}

fn print_table(rows: &[Todo]) {
    println!(
        "{:>6}  {:>4}  {:<TITLE_WIDTH$}  {}",
        "UserId", "ID", "Title", "Completed"
    );
    for todo in rows {
        println!(
            "{:>6}  {:>4}  {:<TITLE_WIDTH$}  {}",
            todo.user_id,
            todo.id,
            truncate(&todo.title, TITLE_WIDTH),
            todo.completed
        );
    }
}

/// Truncate on a character boundary so wide titles keep the table aligned
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}
