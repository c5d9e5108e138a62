use std::path::PathBuf;

use colored::*;

use crate::utils::{
    error::{ExportError, QuakeError, QuakeResult},
    types::{ExportRecord, Pagination, ResultItem, SearchResponse},
};

/// Fixed prefix of exported spreadsheet files
pub const EXPORT_FILE_PREFIX: &str = "quake_results_";

/// Extension of exported spreadsheet files
pub const EXPORT_FILE_EXTENSION: &str = "csv";

/// Table and export column headers
const TABLE_HEADERS: [&str; 4] = ["index", "host", "ip", "port"];

/// Renders a search response for a human and optionally persists it
pub struct ResultPresenter {
    output_dir: PathBuf,
}

impl ResultPresenter {
    /// Create a presenter that exports to the current working directory
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from("."),
        }
    }

    /// Override the export directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Print the pagination summary, the query term, and the result table.
    ///
    /// Items without an HTTP sub-structure are skipped with one warning per
    /// item on stderr; a single malformed item never aborts the display.
    pub fn display(&self, response: &SearchResponse, query_term: &str) -> QuakeResult<()> {
        let pagination = response.pagination()?;
        let items = response.items()?;

        println!();
        println!("{}", Self::format_summary(pagination, query_term));

        let (rows, warnings) = Self::collect_display_rows(items);
        for warning in &warnings {
            eprintln!("{}", Self::format_warning(warning));
        }

        println!("{}", Self::format_table(&rows));
        Ok(())
    }

    /// Build the table rows for the display pass, plus one warning message
    /// per item skipped for lacking an HTTP sub-structure
    pub fn collect_display_rows(items: &[ResultItem]) -> (Vec<[String; 4]>, Vec<String>) {
        let mut rows = Vec::new();
        let mut warnings = Vec::new();

        for (position, item) in items.iter().enumerate() {
            let index = position + 1;
            match item.http_host() {
                Some(host) => rows.push([
                    index.to_string(),
                    host.to_string(),
                    item.ip.clone(),
                    item.port.to_string(),
                ]),
                None => warnings.push(format!(
                    "result {} has no 'http' entry under 'service', skipping it",
                    index
                )),
            }
        }

        (rows, warnings)
    }

    /// Export the retained results to a CSV spreadsheet and return its path.
    ///
    /// Applies the same skip-on-missing-HTTP policy as `display`, in an
    /// independent pass over the data. Overwrites silently if a file with
    /// the derived name already exists.
    pub fn export(&self, response: &SearchResponse, query_term: &str) -> QuakeResult<PathBuf> {
        let records = Self::build_export_records(response)?;
        let path = self.output_dir.join(Self::export_file_name(query_term));

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .map_err(|e| ExportError::FileCreate {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        // Header row is written explicitly so an empty result set still
        // produces a well-formed sheet.
        writer
            .write_record(TABLE_HEADERS)
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        for record in &records {
            writer
                .serialize(record)
                .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
        }

        writer
            .flush()
            .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

        Ok(path)
    }

    /// Flatten the response into 1-indexed export records, skipping items
    /// without an HTTP sub-structure
    pub fn build_export_records(response: &SearchResponse) -> QuakeResult<Vec<ExportRecord>> {
        let items = response.items()?;

        Ok(items
            .iter()
            .enumerate()
            .filter_map(|(position, item)| Self::export_record(position + 1, item))
            .collect())
    }

    fn export_record(index: usize, item: &ResultItem) -> Option<ExportRecord> {
        let host = item.http_host()?;
        Some(ExportRecord {
            index,
            host: host.to_string(),
            ip: item.ip.clone(),
            port: item.port,
        })
    }

    /// Summary lines printed above the table
    pub fn format_summary(pagination: &Pagination, query_term: &str) -> String {
        format!(
            "Page {} (page size {}), {} total results\nQuery: {}",
            pagination.page_index, pagination.page_size, pagination.total, query_term
        )
    }

    /// Format retained rows as a bordered table
    pub fn format_table(rows: &[[String; 4]]) -> String {
        if rows.is_empty() {
            return "No results found.".dimmed().to_string();
        }

        // Calculate column widths from headers and data
        let mut col_widths: Vec<usize> = TABLE_HEADERS.iter().map(|h| h.len()).collect();
        for row in rows {
            for (i, value) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(value.len());
            }
        }

        let mut output = String::new();
        output.push_str(&Self::format_table_separator(&col_widths));

        output.push('|');
        for (i, header) in TABLE_HEADERS.iter().enumerate() {
            // Pad before colorizing so the ANSI escapes don't count
            // against the cell width.
            let padded = format!("{:<width$}", header, width = col_widths[i]);
            output.push_str(&format!(" {} |", padded.bold().cyan()));
        }
        output.push('\n');
        output.push_str(&Self::format_table_separator(&col_widths));

        for row in rows {
            output.push('|');
            for (i, value) in row.iter().enumerate() {
                output.push_str(&format!(" {:<width$} |", value, width = col_widths[i]));
            }
            output.push('\n');
        }

        output.push_str(&Self::format_table_separator(&col_widths));
        output
    }

    /// Format table border line
    fn format_table_separator(col_widths: &[usize]) -> String {
        let mut separator = String::new();
        separator.push('+');
        for &width in col_widths {
            separator.push_str(&"-".repeat(width + 2));
            separator.push('+');
        }
        separator.push('\n');
        separator
    }

    /// Derive the export file name from the query term
    pub fn export_file_name(query_term: &str) -> String {
        format!(
            "{}{}.{}",
            EXPORT_FILE_PREFIX,
            Self::sanitize_query_term(query_term),
            EXPORT_FILE_EXTENSION
        )
    }

    /// Replace spaces with underscores and strip colons and double quotes
    pub fn sanitize_query_term(query_term: &str) -> String {
        query_term
            .replace(' ', "_")
            .replace(':', "")
            .replace('"', "")
    }

    /// Format error message for CLI display
    pub fn format_error(error: &QuakeError) -> String {
        format!("{} {}", "Error:".red().bold(), error.to_string().red())
    }

    /// Format warning message for CLI display
    pub fn format_warning(message: &str) -> String {
        format!("{} {}", "Warning:".yellow().bold(), message)
    }

    /// Format info message for CLI display
    pub fn format_info(message: &str) -> String {
        format!("{} {}", "Info:".blue().bold(), message)
    }

    /// Format success message for CLI display
    pub fn format_success(message: &str) -> String {
        format!("{} {}", "Success:".green().bold(), message)
    }
}

impl Default for ResultPresenter {
    fn default() -> Self {
        Self::new()
    }
}
