use std::{env, path::PathBuf};

use getopts::Options;

use crate::{config::CONFIG_FILE, error::AppError};

#[derive(Clone, Debug, Default)]
pub struct Args {
    pub cfg_file: PathBuf,
    /// JSON planning input, stdin when absent
    pub input: Option<PathBuf>,
    pub log_level: Option<String>,
    // test helper
    pub cfg_str: Option<String>,
}

fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("i", "input", "JSON file with initial moisture and forecast", "FILE");
    opts.optopt("l", "log-level", "log level (error, warn, info, debug, trace)", "LEVEL");
    opts.optflag("h", "help", "print this help");
    opts
}

pub fn print_usage(program: &str, opts: &Options) {
    let brief = format!("Usage: {} [options] [config_file]", program);
    print!("{}", opts.usage(&brief));
}

pub fn get_args() -> Result<Option<Args>, AppError> {
    let args: Vec<String> = env::args().collect();
    parse_args(&args)
}

/// Parses `argv` (program name first). Returns `None` when help was requested.
/// Runs before logging is up, so problems go to stderr.
pub fn parse_args(argv: &[String]) -> Result<Option<Args>, AppError> {
    let program = argv.first().map(String::as_str).unwrap_or("irriplan");
    let opts = options();

    let default_args = Args { cfg_file: default_cfg_file(), ..Default::default() };
    let matches = match opts.parse(argv.iter().skip(1)) {
        Ok(m) => m,
        Err(f) => {
            eprintln!("Warning: error parsing arguments: {}. Proceeding with defaults.", f);
            print_usage(program, &opts);
            return Ok(Some(default_args));
        }
    };
    if matches.opt_present("h") {
        print_usage(program, &opts);
        return Ok(None);
    }

    let input = matches.opt_str("i").map(PathBuf::from);
    let log_level = matches.opt_str("l");

    let Some(config_file_path) = matches.free.first() else {
        return Ok(Some(Args { input, log_level, ..default_args }));
    };
    let path = PathBuf::from(config_file_path);
    if !path.exists() {
        return Err(AppError::MissingConfigFile(path));
    }

    Ok(Some(Args { cfg_file: path, input, log_level, cfg_str: None }))
}

pub fn default_cfg_file() -> PathBuf {
    env::current_dir().unwrap_or_default().join(CONFIG_FILE)
}
