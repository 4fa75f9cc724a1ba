use std::path::Path;
use std::process;
use log::{error, LevelFilter};

use roiprofile::commands::{build_cli, Command, ProfileCommand};
use roiprofile::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_file = matches.get_one::<String>("log-file").map(Path::new);

    if let Err(e) = Logger::init_global_logger(log_file, level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let result = ProfileCommand::new(&matches).and_then(|command| command.execute());

    if let Err(e) = result {
        error!("{}", e);
        let category = e.category();
        eprintln!("{}: {}", category.label(), e);
        eprintln!("{}", category.hint());
        process::exit(1);
    }
}
