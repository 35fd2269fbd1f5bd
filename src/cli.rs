use chrono::NaiveDate;
use clap::Parser;

use ytgrep::matcher;
use ytgrep::youtube::SortOrder;

/// CLI wrapper for SortOrder (needed for clap ValueEnum)
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[value(rename_all = "camelCase")]
pub enum CliSortOrder {
    Date,
    Rating,
    Relevance,
    Title,
    VideoCount,
    ViewCount,
}

impl From<CliSortOrder> for SortOrder {
    fn from(cli: CliSortOrder) -> Self {
        match cli {
            CliSortOrder::Date => SortOrder::Date,
            CliSortOrder::Rating => SortOrder::Rating,
            CliSortOrder::Relevance => SortOrder::Relevance,
            CliSortOrder::Title => SortOrder::Title,
            CliSortOrder::VideoCount => SortOrder::VideoCount,
            CliSortOrder::ViewCount => SortOrder::ViewCount,
        }
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid date {s:?}, expected YYYY-MM-DD: {e}"))
}

#[derive(Parser)]
#[command(
    name = "ytgrep",
    about = "Search YouTube video transcripts for keywords",
    version = env!("GIT_DESCRIBE"),
)]
pub struct Cli {
    /// Search query for videos
    #[arg(short, long)]
    pub query: Option<String>,

    /// Keywords to look for in transcripts (one or more)
    #[arg(short, long, num_args = 1.., required_unless_present = "search_channel")]
    pub keywords: Vec<String>,

    /// Caption language code (default: en, or config default_language)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Maximum number of search results (default: 10)
    #[arg(short, long)]
    pub max_results: Option<u32>,

    /// Restrict the search to one channel ID
    #[arg(short, long)]
    pub channel_id: Option<String>,

    /// Look up a channel ID by channel name and exit
    #[arg(short, long)]
    pub search_channel: Option<String>,

    /// Sort order for search results
    #[arg(short = 'd', long, value_enum, default_value_t = CliSortOrder::Relevance)]
    pub sort_by: CliSortOrder,

    /// Only videos published after this date (YYYY-MM-DD)
    #[arg(short = 'a', long, value_parser = parse_date)]
    pub published_after: Option<NaiveDate>,

    /// Only videos published before this date (YYYY-MM-DD)
    #[arg(short = 'b', long, value_parser = parse_date)]
    pub published_before: Option<NaiveDate>,

    /// Treat keywords as regular expressions
    #[arg(short = 'r', long)]
    pub use_regex: bool,

    /// Caption lines of context around each match
    #[arg(short = 'n', long, default_value_t = matcher::DEFAULT_CONTEXT)]
    pub context: usize,

    /// Show search details on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_valid() {
        assert_eq!(
            parse_date("2024-03-07").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_other_formats() {
        assert!(parse_date("07/03/2024").is_err());
        assert!(parse_date("2024-3-7x").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_sort_order_conversion() {
        assert_eq!(SortOrder::from(CliSortOrder::ViewCount), SortOrder::ViewCount);
        assert_eq!(SortOrder::from(CliSortOrder::Relevance), SortOrder::Relevance);
    }
}
