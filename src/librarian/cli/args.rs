use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "librarian", version)]
#[command(about = "Interactive book inventory manager", long_about = None)]
pub struct Cli {
    /// Path to the library data file (defaults to the configured one)
    #[arg(long, env = "LIBRARIAN_DATA")]
    pub data_file: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_data_file_and_verbose() {
        let cli = Cli::try_parse_from(["librarian", "--data-file", "books.json", "-v"]).unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("books.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["librarian", "list"]).is_err());
    }
}
