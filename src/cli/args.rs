use clap::Parser;

/// Pass the revolver around until one player is left standing
#[derive(Parser, Debug)]
#[command(name = "revolver", version)]
pub struct Args {
    /// Seed for the random number generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Player name, repeat once per seat. Without any the game asks.
    #[arg(short = 'p', long = "player", value_name = "NAME")]
    pub players: Vec<String>,

    /// Log every draw
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Log filter used when `RUST_LOG` is not set
    pub fn default_log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seed_and_players() {
        let args = Args::parse_from(["revolver", "-s", "42", "-p", "Alice", "--player", "Bob"]);
        assert_eq!(args.seed, Some(42));
        assert_eq!(args.players, ["Alice", "Bob"]);
        assert_eq!(args.default_log_level(), "warn");
    }

    #[test]
    fn defaults_are_empty() {
        let args = Args::parse_from(["revolver", "-v"]);
        assert_eq!(args.seed, None);
        assert!(args.players.is_empty());
        assert_eq!(args.default_log_level(), "debug");
    }

    #[test]
    fn rejects_non_numeric_seed() {
        assert!(Args::try_parse_from(["revolver", "--seed", "abc"]).is_err());
    }
}
