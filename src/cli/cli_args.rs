use clap::Parser;

/// quake-query CLI - search the 360 Quake internet-asset index
#[derive(Parser, Debug, Clone)]
#[command(name = "quake-query")]
#[command(about = "Search the 360 Quake internet-asset index from the command line")]
#[command(version)]
pub struct CliArgs {
    /// Search keyword or filter expression (e.g. "domain=xx.com" or "city=Beijing")
    #[arg(short = 'S', long)]
    pub search: Option<String>,

    /// Number of results per page
    #[arg(long, default_value_t = 100)]
    pub size: u32,

    /// Result page to fetch
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Export the displayed results to a CSV spreadsheet in the current directory
    #[arg(long)]
    pub export: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_args_defaults() {
        let args = CliArgs::parse_from(["quake-query", "--search", "city=Beijing"]);

        assert_eq!(args.search.as_deref(), Some("city=Beijing"));
        assert_eq!(args.size, 100);
        assert_eq!(args.page, 1);
        assert!(!args.export);
        assert!(!args.verbose);
    }

    #[test]
    fn test_cli_args_short_search_flag() {
        let args = CliArgs::parse_from(["quake-query", "-S", "domain=xx.com"]);
        assert_eq!(args.search.as_deref(), Some("domain=xx.com"));
    }

    #[test]
    fn test_cli_args_full_invocation() {
        let args = CliArgs::parse_from([
            "quake-query",
            "--search",
            "city=Beijing",
            "--size",
            "2",
            "--page",
            "3",
            "--export",
            "--verbose",
        ]);

        assert_eq!(args.size, 2);
        assert_eq!(args.page, 3);
        assert!(args.export);
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_args_search_is_optional() {
        let args = CliArgs::parse_from(["quake-query"]);
        assert!(args.search.is_none());
    }
}
