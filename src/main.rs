use branchenv::cli::{Cli, Subcommands};
use branchenv::config::Conf;
use branchenv::config_error::{handle_config_load_error, ConfigErrorReport};
use branchenv::error::ApiError;
use branchenv::report::render_api_error;
use branchenv::settings::Settings;
use clap::Parser;
use log::debug;
use std::process::exit;

fn load_config(cli: &Cli) -> Conf {
    let conf = Conf::load(&cli.config).unwrap_or_else(|err| handle_config_load_error(err));
    if let Err(message) = conf.is_valid() {
        let location = format!("{} or environment overrides", cli.config.display());
        eprintln!("{}", ConfigErrorReport::invalid_value(&location, message));
        exit(1);
    }
    conf
}

fn find(cli: &Cli, conf: &Conf) {
    let settings = match Settings::resolve(cli) {
        Ok(settings) => settings,
        Err(err) => {
            eprintln!("{}", err);
            exit(1);
        }
    };

    match branchenv::run(&settings, conf) {
        Ok(outcome) => {
            debug!(
                "{} exact and {} partial match(es)",
                outcome.exact, outcome.partial
            );
            print!("{}", outcome.report);
        }
        Err(err) => {
            match err.downcast_ref::<ApiError>() {
                Some(api) => {
                    eprintln!("{}", err);
                    eprint!("{}", render_api_error(api));
                }
                None => eprintln!("Error: {:#}", err),
            }
            exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match &cli.subcommand {
        Some(Subcommands::Defaultconfig) => {
            let toml = confique::toml::template::<Conf>(confique::toml::FormatOptions::default());
            println!("{}", toml);
        }
        Some(Subcommands::Config) => match serde_json::to_string_pretty(&load_config(&cli)) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("Error: {}", err);
                exit(1);
            }
        },
        Some(Subcommands::Find) | None => find(&cli, &load_config(&cli)),
    }
}
