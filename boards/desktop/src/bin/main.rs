#[macro_use]
extern crate log;

use std::io::{BufRead, BufReader, Read};

use desktop::Replay;
use env_logger::Env;
use simple_altimeter::config::Config;

fn load_config(path: Option<&str>) -> Result<Config, String> {
    let path = match path {
        Some(path) => path,
        None => return Ok(Config::default()),
    };
    let mut file =
        std::fs::File::open(path).map_err(|e| format!("Read config file {} failed: {}", path, e))?;
    let mut buffer = String::new();
    file.read_to_string(&mut buffer).map_err(|_| "Unable to read config-file")?;
    let config: Config =
        serde_json::from_str(&buffer).map_err(|e| format!("Malformed config: {}", e))?;
    config.validate().map_err(|e| format!("Invalid config: {}", e))?;
    Ok(config)
}

fn run<'a>(matches: &'a clap::ArgMatches<'a>) -> Result<(), String> {
    let config = load_config(matches.value_of("config"))?;
    let replay = Replay::new(&config);
    let input: Box<dyn BufRead> = match matches.value_of("input") {
        Some(path) => {
            let file = std::fs::File::open(path)
                .map_err(|e| format!("Open input file {} failed: {}", path, e))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(BufReader::new(std::io::stdin())),
    };
    let summary = matches.is_present("summary");
    for (index, line) in input.lines().enumerate() {
        let line = line.map_err(|e| format!("Read input failed: {}", e))?;
        if let Err(e) = replay.feed(&line) {
            warn!("Skip line {}: {}", index + 1, e);
            continue;
        }
        if !summary {
            println!("{}", replay.collect());
        }
    }
    if summary {
        println!("{}", replay.collect());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let matches = clap::App::new("desktop")
        .version("0.1")
        .author("qiuchengxuan")
        .about("Replays recorded sensor events through the altimeter dashboard")
        .arg(clap::Arg::with_name("config").long("config").help("Config file").takes_value(true))
        .arg(clap::Arg::with_name("input").long("input").help("Event file").takes_value(true))
        .arg(clap::Arg::with_name("summary").long("summary").help("Print only the final state"))
        .get_matches();
    info!("Start replaying");
    if let Err(error) = run(&matches) {
        println!("{}", error);
        std::process::exit(1);
    }
}
