use anyhow::Result;
use clap::Parser;
use kilo::session::report_fatal;
use kilo::{RawModeGuard, StdTty};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "kilo", version, about = "Minimal terminal screen controller")]
struct Args {
    /// Print the raw bytes of each keypress instead of running the editor
    #[arg(long)]
    dump_keys: bool,

    /// Write a log to this file (the terminal itself is never logged to)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level: off, error, warn, info, debug or trace
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

        match File::create(path) {
            Ok(log_file) => {
                if let Err(e) = WriteLogger::init(args.log_level, log_config, log_file) {
                    eprintln!("kilo: cannot start logger: {}", e);
                }
            }
            Err(e) => eprintln!("kilo: cannot open log file {}: {}", path.display(), e),
        }
    }

    log::info!("kilo {} starting", kilo::renderer::VERSION);

    let result = if args.dump_keys {
        dump_keys()
    } else {
        kilo::run(StdTty::new())
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{:#}", e);
            // Raw mode is already released by the time the error gets here
            if report_fatal(&mut std::io::stdout(), &mut std::io::stderr(), &e).is_err() {
                eprintln!("{:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn dump_keys() -> Result<()> {
    let mut terminal = RawModeGuard::acquire(StdTty::new())?;
    let outcome = kilo::dump_bytes(terminal.tty_mut());
    let released = terminal.release();
    outcome.and(released)
}
