use anyhow::Result;
use quickics::cli::{self, Command};
use quickics::config::Config;
use quickics::context::StandardContext;
use quickics::session::Session;
use quickics::storage::LocalStorage;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::env;
use std::io;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let binary_name = args.first().map(String::as_str).unwrap_or("quickics");

    // Usage errors abort before anything is read or written.
    let command = match cli::parse_args(args.iter().skip(1).cloned()) {
        Ok(command) => command,
        Err(e) => {
            cli::print_usage(binary_name);
            return Err(e.into());
        }
    };

    let ctx = StandardContext::from_env();
    let config = Config::load(&ctx)?;

    if let Err(e) = TermLogger::init(
        config.level_filter()?,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let session = Session::new(config.parse_settings()?);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let book = match command {
        Command::File(path) => session.collect_from_file(&path, &mut out)?,
        Command::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            session.collect_interactive(&mut input, &mut out)?
        }
    };

    LocalStorage::write_calendar(
        &config.output_path(),
        &book,
        config.calendar_name.as_deref(),
    )
}
