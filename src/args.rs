use std::path::PathBuf;

use clap::Parser;

use crate::board::DEFAULT_GRID_SIZE;

#[derive(Parser, Debug)]
#[command(name = "grid-tac-toe")]
#[command(about = "Tic-tac-toe on an N×N grid with move history", long_about = None)]
#[command(version)]
pub struct Args {
    /// Initial grid size (clamped to 3..=10)
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: usize,

    /// Directory for the log file (defaults to the platform data directory)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Play these comma-separated cell indices without the UI and print the result
    #[arg(long, value_delimiter = ',', value_name = "INDEX,...")]
    pub moves: Option<Vec<usize>>,

    /// Print the headless result as JSON
    #[arg(long, requires = "moves")]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["grid-tac-toe"]).unwrap();
        assert_eq!(args.grid_size, 3);
        assert_eq!(args.log_level, "info");
        assert!(args.log_dir.is_none());
        assert!(args.moves.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_moves_list() {
        let args =
            Args::try_parse_from(["grid-tac-toe", "--grid-size", "4", "--moves", "0,5,10", "--json"])
                .unwrap();
        assert_eq!(args.grid_size, 4);
        assert_eq!(args.moves, Some(vec![0, 5, 10]));
        assert!(args.json);
    }

    #[test]
    fn test_json_requires_moves() {
        assert!(Args::try_parse_from(["grid-tac-toe", "--json"]).is_err());
    }

    #[test]
    fn test_rejects_non_numeric_moves() {
        assert!(Args::try_parse_from(["grid-tac-toe", "--moves", "a,b"]).is_err());
    }
}
