//! Tests for command-line parsing and run orchestration

#[cfg(test)]
mod tests {
    use brickwall::WallError;
    use brickwall::io::cli::{Cli, Outcome, WallChecker};
    use brickwall::io::configuration::{EXIT_DUPLICATE_BRICK_LENGTH, EXIT_MISSING_ARGUMENT};
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;
    use tracing::Level;

    fn checker_for(path: &Path) -> WallChecker {
        let args = vec!["program", path.to_str().unwrap()];
        WallChecker::new(Cli::parse_from(args))
    }

    // Tests CLI parsing with only the input path
    // Verified by defaulting verbose to true
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(vec!["program", "wall.txt"]);

        assert_eq!(cli.input, Some(PathBuf::from("wall.txt")));
        assert!(!cli.verbose);
        assert_eq!(cli.log_level(), Level::WARN);
    }

    // Tests verbose flag in short and long form
    // Verified by mapping verbose to INFO
    #[test]
    fn test_cli_verbose_flag() {
        let short = Cli::parse_from(vec!["program", "-v", "wall.txt"]);
        let long = Cli::parse_from(vec!["program", "wall.txt", "--verbose"]);

        assert!(short.verbose);
        assert!(long.verbose);
        assert_eq!(long.log_level(), Level::DEBUG);
    }

    // Tests a missing path parses and reports MissingArgument
    // Verified by making the input argument required
    #[test]
    fn test_missing_input_path() {
        let cli = Cli::try_parse_from(vec!["program"]).unwrap();
        assert_eq!(cli.input, None);

        let checker = WallChecker::new(cli);
        assert!(matches!(
            checker.input_path(),
            Err(WallError::MissingArgument)
        ));

        let outcome = Outcome::from_result(&checker.check());
        assert!(outcome.line.starts_with("ERROR: "));
        assert_eq!(outcome.exit_code, EXIT_MISSING_ARGUMENT);
    }

    // Tests a feasible wall renders as "yes" with exit code zero
    // Verified by inverting the report verdict
    #[test]
    fn test_check_feasible_wall() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wall.txt");
        fs::write(&path, "3 2\n111\n111\n1\n3 2\n").unwrap();

        let checker = checker_for(&path);
        let report = checker.check().unwrap();
        assert_eq!(report.bricks_placed(), 2);

        let outcome = Outcome::from_result(&Ok(report));
        assert_eq!(
            outcome,
            Outcome {
                line: "yes".to_string(),
                exit_code: 0
            }
        );
    }

    // Tests an infeasible wall still exits with code zero
    // Verified by returning a non-zero code for "no"
    #[test]
    fn test_check_infeasible_wall() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wall.txt");
        fs::write(&path, "4 1\n1111\n1\n3 1\n").unwrap();

        let outcome = Outcome::from_result(&checker_for(&path).check());
        assert_eq!(outcome.line, "no");
        assert_eq!(outcome.exit_code, 0);
    }

    // Tests input errors render with the ERROR prefix and their exit code
    // Verified by printing the error without prefix
    #[test]
    fn test_check_duplicate_length() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("wall.txt");
        fs::write(&path, "4 1\n1111\n2\n3 1\n3 2\n").unwrap();

        let outcome = Outcome::from_result(&checker_for(&path).check());
        assert!(outcome.line.starts_with("ERROR: "));
        assert!(outcome.line.contains("length 3"));
        assert_eq!(outcome.exit_code, EXIT_DUPLICATE_BRICK_LENGTH);
    }
}
