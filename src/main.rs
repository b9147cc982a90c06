use std::process;
use log::{error, LevelFilter};

use polylinekit::commands::{build_cli, CommandFactory, PolylineCommandFactory};
use polylinekit::config::PolylineConfig;
use polylinekit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let mut config = match matches.get_one::<String>("config") {
        Some(path) => match PolylineConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading configuration: {}", e);
                process::exit(1);
            }
        },
        None => PolylineConfig::defaults(),
    };
    if matches.get_flag("verbose") {
        config.log_level = LevelFilter::Debug;
    }

    let logger = match config.log_file.as_deref() {
        Some(path) => match Logger::new(path) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error initializing logger: {}", e);
                process::exit(1);
            }
        },
        None => Logger::without_file(),
    };

    match config.global_log_file.as_deref() {
        Some(path) => {
            if let Err(e) = Logger::init_global_logger(path, config.log_level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => {
            env_logger::Builder::new()
                .filter_level(config.log_level)
                .parse_default_env()
                .init();
        }
    }

    let factory = PolylineCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
