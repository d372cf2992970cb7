use std::error::Error;
use std::io::{self, Write};

use clap::Parser;
use cli::{Cli, OutputFormat};
use log::debug;
use report::CavityReport;

mod cli;
mod render;
mod report;

fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<(), Box<dyn Error>> {
    let search = cli.search();
    let targets = cli.targets()?;
    debug!("searching {} cavities with {:?}", targets.len(), search);

    let reports = targets
        .iter()
        .map(|target| CavityReport::build(target, &search, cli.modes))
        .collect::<Result<Vec<CavityReport>, _>>()?;
    match cli.format {
        OutputFormat::Text => report::write_text(out, &reports)?,
        OutputFormat::Json => report::write_json(out, &reports)?,
    }

    if let (Some(path), Some(first)) = (&cli.render, reports.first()) {
        render::render_to_wav(&first.frequencies, path, &cli.chord_settings())?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let stdout = io::stdout();
    run(&cli, &mut stdout.lock())
}
