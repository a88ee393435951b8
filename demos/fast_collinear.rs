use std::path::PathBuf;

use clap::Parser;
use collinear::{parse_points, FastCollinear, Options};

#[derive(Parser)]
struct Cli {
    /// A file with a point count, then one `x y` pair per line.
    input: PathBuf,

    /// The smallest number of collinear points to report.
    #[arg(long)]
    min_points: Option<usize>,

    /// Log the search to stderr.
    #[arg(long)]
    verbose: bool,
}

pub fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let input = std::fs::read_to_string(&args.input)?;
    let points = parse_points(&input)?;

    let mut options = Options::default();
    if let Some(min_points) = args.min_points {
        options = options.with_min_points(min_points);
    }
    let found = FastCollinear::with_options(&points, &options)?;

    found.print_line_segments();
    println!("{}", found.number_of_segments());
    Ok(())
}
