use celnav::api::{CsvFormatter, JsonFormatter, ReductionReport, SightSession, TextFormatter};
use celnav::utils::{ConfigurationManager, OutputFormat};
use log::{error, info};

struct CliArgs {
    session_path: String,
    config_path: Option<String>,
    format: Option<OutputFormat>,
    least_squares: bool,
}

fn usage(program: &str) {
    eprintln!(
        "Usage: {} <session.json> [--config <file>] [--format text|json|csv] [--least-squares]",
        program
    );
}

fn parse_args(args: &[String]) -> Result<CliArgs, Box<dyn std::error::Error>> {
    let mut session_path = None;
    let mut config_path = None;
    let mut format = None;
    let mut least_squares = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("--config needs a file")?;
                config_path = Some(path.clone());
            }
            "--format" => {
                let value = iter.next().ok_or("--format needs text, json or csv")?;
                format = Some(value.parse::<OutputFormat>()?);
            }
            "--least-squares" => least_squares = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{}'", other).into());
            }
            other => {
                if session_path.is_some() {
                    return Err("only one session file may be given".into());
                }
                session_path = Some(other.to_string());
            }
        }
    }

    Ok(CliArgs {
        session_path: session_path.ok_or("missing session file")?,
        config_path,
        format,
        least_squares,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map_or("celnav", |s| s.as_str());

    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e);
            usage(program);
            return Err("Invalid arguments".into());
        }
    };

    let manager = match &cli.config_path {
        Some(path) => ConfigurationManager::from_file(path)?,
        None => ConfigurationManager::new(),
    };
    let config = manager.get_config().clone();

    let default_level = if config.debug_logging { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let session = SightSession::from_file(&cli.session_path)?;
    let (mut fix, ephemeris) = session.build(&config)?;
    info!(
        "working fix for {} with {} LOPs from '{}'",
        fix.ut,
        fix.lops.len(),
        cli.session_path
    );

    fix.reduce_lops(&ephemeris)?;

    let solved = if cli.least_squares {
        fix.solve_least_squares_fix()
    } else {
        fix.solve_two_lop_fix()
    };
    let (report, failure) = match solved {
        Ok(solution) => (ReductionReport::new(&fix, Some(solution)), None),
        Err(e) => {
            error!("no fix: {}", e);
            (ReductionReport::new(&fix, None).with_error(&e), Some(e))
        }
    };

    let output = match cli.format.unwrap_or(config.output.format) {
        OutputFormat::Text => TextFormatter::new()
            .with_precision(config.output.precision)
            .format_text(&report),
        OutputFormat::Json => JsonFormatter::pretty().format_json(&report)?,
        OutputFormat::Csv => CsvFormatter::new().format_csv(&report),
    };
    println!("{}", output);

    match failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}
