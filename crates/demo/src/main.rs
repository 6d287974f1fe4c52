use anyhow::Result;
use cliflag::{FlagSet, ParseError, usage};
use serde::Serialize;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    port: i64,
    debug: bool,
    ratio: f64,
    mode: String,
    set_by_user: Vec<String>,
    positional: Vec<String>,
}

fn main() -> ExitCode {
    init_tracing();

    let mut flags = FlagSet::new(
        "cliflag-demo",
        "Exercises the cliflag declaration and parse API",
    );
    flags.int("port", 8080, "port to listen on", Some('p'));
    flags.bool("debug", false, "enable debug logging", Some('d'));
    flags.float("ratio", 1.0, "ratio for calculation", None);
    flags.string("mode", "fast", "running mode", Some('m'));
    flags.bool("json", false, "emit the report as JSON", None);

    match flags.parse(std::env::args()) {
        Ok(()) => {}
        Err(ParseError::HelpRequested) => {
            print!("{}", usage::render(&flags));
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{}", usage::render_error(&err));
            eprint!("{}", usage::render(&flags));
            return ExitCode::from(2);
        }
    }

    match report(&flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn report(flags: &FlagSet) -> Result<()> {
    tracing::debug!("rendering final configuration");

    let report = Report {
        port: flags.get("port")?,
        debug: flags.get("debug")?,
        ratio: flags.get("ratio")?,
        mode: flags.get("mode")?,
        set_by_user: ["port", "debug", "ratio", "mode"]
            .into_iter()
            .filter(|name| flags.is_set(name))
            .map(str::to_string)
            .collect(),
        positional: flags.positional().to_vec(),
    };

    if flags.get::<bool>("json")? {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("=== Final Configuration ===");
    println!("port  = {}", report.port);
    println!("debug = {}", report.debug);
    println!("ratio = {}", report.ratio);
    println!("mode  = {}", report.mode);
    println!("Which were set by user?");
    for name in ["port", "debug", "ratio", "mode"] {
        let origin = if flags.is_set(name) { "user" } else { "default" };
        println!("  {name}: {origin}");
    }
    if report.positional.is_empty() {
        println!("No positional arguments");
    } else {
        println!("Positional arguments:");
        for arg in &report.positional {
            println!("  - {arg}");
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
