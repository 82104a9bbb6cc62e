use clap::Parser;
use std::path::PathBuf;

/// Command-line flags. Every flag overrides the matching config file value.
#[derive(Debug, Default, Parser)]
#[command(name = "tileboard", version)]
#[command(about = "A terminal security dashboard of chart widgets you can add and remove")]
pub struct Cli {
    /// Read configuration from this TOML file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (no logs are written otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `tileboard_core=trace`
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Frames per second for redraws
    #[arg(long)]
    pub fps: Option<u32>,

    /// Number of card columns in the grid
    #[arg(long)]
    pub columns: Option<u16>,

    /// Draw inline instead of on the alternate screen
    #[arg(long)]
    pub inline: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_means_no_overrides() {
        let cli = Cli::try_parse_from(["tileboard"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.fps.is_none());
        assert!(!cli.inline);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "tileboard",
            "--config",
            "board.toml",
            "--log-file",
            "/tmp/tb.log",
            "--log-level",
            "debug",
            "--fps",
            "30",
            "--columns",
            "3",
            "--inline",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("board.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/tb.log")));
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert_eq!(cli.fps, Some(30));
        assert_eq!(cli.columns, Some(3));
        assert!(cli.inline);
    }

    #[test]
    fn rejects_non_numeric_columns() {
        assert!(Cli::try_parse_from(["tileboard", "--columns", "two"]).is_err());
    }
}
