use anyhow::Result;
use clap::Parser;
use tracepaths::cli::{Cli, OutputFormat};
use tracepaths::csv_output::CsvOutput;
use tracepaths::json_output::JsonOutput;
use tracepaths::size::{FsProbe, NoProbe, SizeProbe};
use tracepaths::{categorize, extract, filter, input, report};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Render the report in the requested format
fn render(args: &Cli, report: &categorize::CategorizedReport) -> Result<String> {
    let probe: &dyn SizeProbe = if args.no_stat { &NoProbe } else { &FsProbe };

    let output = match args.format {
        OutputFormat::Text => report::render_text(report, &args.target, probe),
        OutputFormat::Json => {
            JsonOutput::from_report(report, &args.target, probe).to_json()? + "\n"
        }
        OutputFormat::Csv => CsvOutput::from_report(report, probe).to_csv(),
    };
    Ok(output)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    // Parse filter expression if provided
    let filter = if let Some(expr) = &args.filter {
        filter::SyscallFilter::from_expr(expr)?
    } else {
        filter::SyscallFilter::all()
    };
    let extractor = extract::PathExtractor::from_filter(&filter)?;

    let trace_text = input::read_trace(args.input.as_deref())?;
    let paths = extractor.extract(&trace_text);
    tracing::debug!(unique_paths = paths.len(), "categorizing paths");

    let report = categorize::categorize(&paths);
    print!("{}", render(&args, &report)?);

    Ok(())
}
