mod cli;
mod config;
mod report;

use anyhow::Context;
use clap::Parser;
use log::info;
use std::fs;
use std::process;

use cli::Cli;
use report::ImportSummary;
use texture_material::io::ArchiveExtractor;
use texture_material::{ImportResult, ImportService};

fn run(cli: &Cli) -> anyhow::Result<ImportResult> {
    let mut import_config = config::load_config(cli.config.as_deref());
    cli.overrides.apply(&mut import_config);
    import_config
        .validate()
        .context("Invalid import settings")?;

    if cli.save_config {
        config::save_config(&import_config, cli.config.as_deref())?;
    }

    let service = ImportService::new(ArchiveExtractor::new(&cli.unpacker));
    let result = if cli.from_dir {
        let name = cli.name.clone().unwrap_or_else(|| {
            cli.input
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "Material".to_string())
        });
        service.import_directory(&name, &cli.input, &import_config)?
    } else {
        // Removed again when dropped.
        let workdir = tempfile::Builder::new()
            .prefix("texture-import")
            .tempdir()
            .context("Failed to create a temporary directory")?;
        match &cli.name {
            Some(name) => {
                service.import_archive_as(name, &cli.input, workdir.path(), &import_config)?
            }
            None => service.import_archive(&cli.input, workdir.path(), &import_config)?,
        }
    };

    if let Some(path) = &cli.output {
        fs::write(path, result.material.to_json()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Material written to {}", path.display());
    }
    Ok(result)
}

fn report(cli: &Cli, result: &ImportResult) -> anyhow::Result<()> {
    let summary = ImportSummary::from_result(result);
    if cli.json {
        println!("{}", summary.to_json()?);
    } else {
        summary.print();
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli).and_then(|result| report(&cli, &result)) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
