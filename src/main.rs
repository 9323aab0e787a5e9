//! main.rs
//! Entry point for lsgrid

use lsgrid::app::Lister;
use lsgrid::config::{Config, ListOptions};
use lsgrid::core::SystemOwners;
use lsgrid::utils::cli::{CliAction, handle_args};
use lsgrid::utils::terminal_width;

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let (flags, paths) = match handle_args(std::env::args().skip(1)) {
        Ok(CliAction::List { flags, paths }) => (flags, paths),
        Ok(CliAction::Exit) => return ExitCode::SUCCESS,
        Err(e) => {
            if e.is_option_error() {
                println!("{}", e);
            } else {
                eprintln!("{}", e);
            }
            return ExitCode::from(e.exit_code());
        }
    };

    let config = Config::load();
    let opts = ListOptions::new(&config, &flags, terminal_width());

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("ls: cannot determine the current directory: {}", e);
            return ExitCode::from(1);
        }
    };

    let owners = SystemOwners::new();
    let now = chrono::Utc::now().timestamp();
    let lister = Lister::new(&opts, &owners, cwd, now);

    let mut out = BufWriter::new(io::stdout().lock());
    let result = lister.run(&paths, &mut out, &mut io::stderr());
    let flushed = out.flush();

    match (result, flushed) {
        (Ok(()), Ok(())) => ExitCode::SUCCESS,
        (Err(e), _) => {
            if e.is_option_error() {
                println!("{}", e);
            } else {
                eprintln!("{}", e);
            }
            ExitCode::from(e.exit_code())
        }
        (Ok(()), Err(e)) => {
            eprintln!("ls: write error: {}", e);
            ExitCode::from(1)
        }
    }
}
