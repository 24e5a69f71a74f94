use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the packager
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Path to the project directory or its package.json
    pub path: Option<PathBuf>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(Self::command().get_matches())
    }

    fn command() -> Command {
        Command::new("ukg-pack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Package the UKG Schedule Sync extension into a versioned zip archive")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Path to package.json or the project directory containing it")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
    }

    fn from_matches(matches: clap::ArgMatches) -> Self {
        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_from(argv: &[&str]) -> Args {
        Args::from_matches(Args::command().get_matches_from(argv))
    }

    #[test]
    fn test_no_arguments() {
        let args = parse_from(&["ukg-pack"]);
        assert!(!args.verbose);
        assert!(args.path.is_none());
    }

    #[test]
    fn test_path_and_verbose() {
        let args = parse_from(&["ukg-pack", "-v", "--path", "ext/package.json"]);
        assert!(args.verbose);
        assert_eq!(args.path, Some(PathBuf::from("ext/package.json")));
    }
}
