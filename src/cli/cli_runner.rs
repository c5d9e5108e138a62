use std::env;
use std::path::PathBuf;

use clap::Parser;

use crate::cli::cli_args::CliArgs;
use crate::client::{SearchClient, SearchProvider};
use crate::presenter::ResultPresenter;
use crate::utils::config::API_KEY_ENV;
use crate::utils::error::{QuakeError, QuakeResult};

/// Main CLI runner that wires a search provider to the presenter
pub struct CliRunner {
    provider: Box<dyn SearchProvider>,
    presenter: ResultPresenter,
}

impl CliRunner {
    /// Create a runner with the default presenter
    pub fn new(provider: Box<dyn SearchProvider>) -> Self {
        Self {
            provider,
            presenter: ResultPresenter::new(),
        }
    }

    /// Replace the presenter (used by tests to redirect exports)
    pub fn with_presenter(mut self, presenter: ResultPresenter) -> Self {
        self.presenter = presenter;
        self
    }

    /// Run one search: fetch a single page, display it, optionally export it.
    /// Returns the export path when a file was written.
    pub async fn run_search(
        &self,
        query: &str,
        size: u32,
        page: u32,
        export: bool,
        verbose: bool,
    ) -> QuakeResult<Option<PathBuf>> {
        if verbose {
            eprintln!(
                "{}",
                ResultPresenter::format_info(&format!(
                    "Searching for: {} (size {}, page {})",
                    query, size, page
                ))
            );
        }

        let response = self.provider.perform_search(query, size, page).await?;

        if verbose {
            let count = response.items().map(|items| items.len()).unwrap_or(0);
            eprintln!(
                "{}",
                ResultPresenter::format_info(&format!("Received {} result(s)", count))
            );
        }

        self.presenter.display(&response, query)?;

        if !export {
            return Ok(None);
        }

        let path = self.presenter.export(&response, query)?;
        println!(
            "{}",
            ResultPresenter::format_success(&format!("Results exported to {}", path.display()))
        );
        Ok(Some(path))
    }
}

/// Main entry point for CLI execution
pub async fn run_cli() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let Some(query) = args.search else {
        // Matches the original tool: a missing search term prints a usage
        // hint and exits normally.
        println!("\nUsage: quake-query -h, --help to show usage information");
        return Ok(());
    };

    let api_key = match env::var(API_KEY_ENV) {
        Ok(key) if !key.is_empty() => key,
        _ => {
            let error = QuakeError::Configuration(format!(
                "missing {} environment variable",
                API_KEY_ENV
            ));
            eprintln!("{}", ResultPresenter::format_error(&error));
            std::process::exit(1);
        }
    };

    let client = match SearchClient::new(api_key) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}", ResultPresenter::format_error(&e));
            std::process::exit(1);
        }
    };

    let runner = CliRunner::new(Box::new(client));
    if let Err(e) = runner
        .run_search(&query, args.size, args.page, args.export, args.verbose)
        .await
    {
        eprintln!("{}", ResultPresenter::format_error(&e));
        std::process::exit(1);
    }

    Ok(())
}
