use std::env;
use std::path::Path;
use std::process::ExitCode;

use bubblewrap::commands::{config, doctor, psi};
use bubblewrap::config::ConfigPaths;
use tracing_subscriber::EnvFilter;

fn usage() {
    println!("Usage:");
    println!("  bubblewrap config          # load, migrate or create the config");
    println!("  bubblewrap config path     # print where the config lives");
    println!("  bubblewrap config show     # print the stored config");
    println!("  bubblewrap doctor          # re-check the stored JDK and Android SDK");
    println!("  bubblewrap psi <file.json> # summarize a saved PageSpeed Insights result");
}

fn run(args: &[String]) -> anyhow::Result<bool> {
    let paths = ConfigPaths::from_home();

    match (args.get(1).map(String::as_str), args.get(2).map(String::as_str)) {
        (Some("config"), None) => {
            let cfg = config::ensure(&paths)?;
            config::print_config(&cfg);
        }
        (Some("config"), Some("path")) => println!("{}", paths.config_file().display()),
        (Some("config"), Some("show")) => config::show(&paths)?,
        (Some("doctor"), _) => return doctor::doctor(&paths),
        (Some("psi"), Some(file)) => psi::summarize(Path::new(file))?,
        (Some("psi"), None) => {
            println!("Usage: bubblewrap psi <file.json>");
            return Ok(false);
        }
        (Some("help"), _) | (Some("--help"), _) | (Some("-h"), _) => usage(),
        _ => {
            println!("Usage: bubblewrap [config|doctor|psi|help]");
            return Ok(false);
        }
    }
    Ok(true)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
