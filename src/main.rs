//! list_files - print `<subfolder>/<file>.wav` for each WAV one level below a root

use clap::Parser;
use std::process;
use wavlist::{init_logging, Args, Config, ListError};

fn main() {
    let args = Args::parse();

    let config = match Config::from_args_and_config(args) {
        Ok(config) => config,
        Err(e) => exit_with(e),
    };

    init_logging(config.verbose());
    log::debug!("{}", wavlist::get_library_info());

    if let Err(e) = wavlist::run(&config) {
        if e.is_broken_pipe() {
            process::exit(0);
        }
        exit_with(e);
    }
}

fn exit_with(e: ListError) -> ! {
    match e {
        ListError::Usage { .. } => eprintln!("{}", e),
        _ => eprintln!("Error: {}", e),
    }
    process::exit(e.exit_code());
}
