use crate::cli::SimulateArgs;
use crate::config::builder::build_config;
use crate::error::{CliError, Result};
use crate::utils::progress::CliProgressHandler;
use slfsim::{
    core::io::{
        peak_list::PeakListFile,
        traits::SpectrumFile,
        ucsf::{UcsfFile, UcsfMetadata},
    },
    engine::progress::ProgressReporter,
    workflows,
};
use std::path::Path;
use tracing::{info, warn};

const UCSF_OWNER: &str = "user";

pub fn run(args: SimulateArgs, quiet: bool) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let app = build_config(&args)?;
    ensure_distinct_paths(&app.input_path, &app.output_path)?;

    info!("Loading peak list from {:?}", &app.input_path);
    let peaks =
        PeakListFile::read_from_path(&app.input_path).map_err(|e| CliError::FileParsing {
            path: app.input_path.clone(),
            source: e.into(),
        })?;

    if peaks.is_empty() {
        warn!("Peak list contains no peaks; the spectrum will be empty.");
    }

    let progress_handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    if !quiet {
        println!("Simulating spectrum from {} peak(s)...", peaks.len());
    }
    info!("Invoking the core simulation workflow...");
    let spectrum = workflows::simulate::run(&peaks, &app.core_config, &reporter)?;

    let comment = format!(
        "slfsim {} from {}",
        env!("CARGO_PKG_VERSION"),
        file_name(&app.input_path)
    );
    let metadata = UcsfMetadata::now(UCSF_OWNER, &comment);

    info!("Writing spectrum to {:?}", &app.output_path);
    UcsfFile::write_to_path(&spectrum, &metadata, &app.output_path).map_err(|e| {
        CliError::FileWriting {
            path: app.output_path.clone(),
            source: e.into(),
        }
    })?;

    if !quiet {
        let (rows, cols) = spectrum.grid().shape();
        println!(
            "✓ Spectrum ({} x {} points) written to: {}",
            rows,
            cols,
            app.output_path.display()
        );
    }
    Ok(())
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub(crate) fn ensure_distinct_paths(input: &Path, output: &Path) -> Result<()> {
    if input == output {
        return Err(CliError::Argument(format!(
            "Input and output must be different files: {}",
            input.display()
        )));
    }
    Ok(())
}
