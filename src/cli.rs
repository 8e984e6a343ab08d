// File: ./src/cli.rs
//! Command-line argument handling and usage text.
use crate::error::UsageError;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Prompt for the date, then for events until a blank line.
    Interactive,
    /// Read the date from the first line of the file and one event per line after it.
    File(PathBuf),
}

/// Parses the arguments that follow the program name.
/// Anything after `-f <path>` is ignored.
pub fn parse_args<I, S>(args: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    match args.next() {
        None => Ok(Command::Interactive),
        Some(flag) if flag == "-f" => args
            .next()
            .map(|path| Command::File(PathBuf::from(path)))
            .ok_or(UsageError::MissingFileName),
        Some(other) => Err(UsageError::InvalidFlag(other)),
    }
}

pub fn usage(binary_name: &str) -> String {
    format!(
        "\
USAGE:
    {bin}              Enter events interactively
    {bin} -f <file>    Read events from <file>

EVENT FORMAT:
    [start time (e.g. 3:00pm)] [end time] [name]

INPUT FILE:
    The first line is the date: today, tomorrow or MM-DD-YYYY.
    Every following line is one event, for example:
        tomorrow
        9:00am 9:30am Stand-up
        3:00pm 4:00pm Team Meeting",
        bin = binary_name
    )
}

pub fn print_usage(binary_name: &str) {
    eprintln!(
        "Quickics v{} - short-hand events to .ics",
        env!("CARGO_PKG_VERSION")
    );
    eprintln!();
    eprintln!("{}", usage(binary_name));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_is_interactive() {
        assert_eq!(parse_args(Vec::<String>::new()), Ok(Command::Interactive));
    }

    #[test]
    fn test_file_flag_takes_path() {
        assert_eq!(
            parse_args(["-f", "day.txt", "ignored"]),
            Ok(Command::File(PathBuf::from("day.txt")))
        );
    }

    #[test]
    fn test_usage_errors() {
        assert_eq!(parse_args(["-f"]), Err(UsageError::MissingFileName));
        assert_eq!(
            parse_args(["--file", "day.txt"]),
            Err(UsageError::InvalidFlag("--file".to_string()))
        );
        assert_eq!(
            parse_args(["day.txt"]),
            Err(UsageError::InvalidFlag("day.txt".to_string()))
        );
    }
}
