use parliament_chart::api::{ChartEngine, ChartEngineConfig, ValidatedChart, parse_chart_document};
use parliament_chart::api::samples::{SAMPLE_NAMES, load_sample};
use parliament_chart::render::SvgRenderer;
use parliament_chart::telemetry::init_default_tracing;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

const USAGE: &str = "usage: parliament_svg (--input <path> | --sample <name>) [--output <path>] [--config <path>] [--json]";

#[derive(Debug)]
enum Source {
    File(PathBuf),
    Sample(String),
}

#[derive(Debug)]
struct CliArgs {
    source: Source,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    json: bool,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = read_file(path)?;
            ChartEngineConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartEngineConfig::default(),
    };

    let validated: ValidatedChart = match &args.source {
        Source::File(path) => {
            let raw = read_file(path)?;
            parse_chart_document(&raw).map_err(|err| err.to_string())?
        }
        Source::Sample(name) => load_sample(name).map_err(|err| err.to_string())?,
    };

    let mut engine =
        ChartEngine::new(SvgRenderer::new(), config).map_err(|err| err.to_string())?;
    engine.load(validated);

    let payload = if args.json {
        engine
            .snapshot_json_contract_v1_pretty()
            .map_err(|err| err.to_string())?
            .ok_or_else(|| "no chart loaded".to_owned())?
    } else {
        engine.render().map_err(|err| err.to_string())?;
        engine.into_renderer().into_document()
    };

    match &args.output {
        Some(path) => fs::write(path, payload)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{payload}").map_err(|err| format!("failed to write stdout: {err}"))
        }
    }
}

fn read_file(path: &PathBuf) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut source = None::<Source>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut json = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                source = Some(Source::File(PathBuf::from(value)));
            }
            "--sample" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --sample".to_owned())?;
                if !SAMPLE_NAMES.contains(&value.as_str()) {
                    return Err(format!(
                        "unknown sample `{value}` (expected one of: {})",
                        SAMPLE_NAMES.join(", ")
                    ));
                }
                source = Some(Source::Sample(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--json" => json = true,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let source = source.ok_or_else(|| USAGE.to_owned())?;
    Ok(CliArgs {
        source,
        output,
        config,
        json,
    })
}
