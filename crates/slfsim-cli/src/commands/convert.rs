use super::simulate::ensure_distinct_paths;
use crate::cli::ConvertArgs;
use crate::config::builder::build_conversion_config;
use crate::error::{CliError, Result};
use slfsim::{
    core::io::{peak_list::PeakListFile, residue_table::ResidueTableFile},
    workflows,
};
use tracing::info;

pub fn run(args: ConvertArgs) -> Result<()> {
    ensure_distinct_paths(&args.input, &args.output)?;
    let config = build_conversion_config(&args);

    info!("Loading residue table from {:?}", &args.input);
    let records =
        ResidueTableFile::read_from_path(&args.input).map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;

    let peaks = workflows::convert::run(&records, &config)?;

    info!("Writing {} peak(s) to {:?}", peaks.len(), &args.output);
    PeakListFile::write_to_path(&peaks, &args.output).map_err(|e| CliError::FileWriting {
        path: args.output.clone(),
        source: e.into(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use slfsim::engine::error::EngineError;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn converts_table_to_peak_list_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("table.txt");
        let output = dir.path().join("peaks.list");
        fs::write(&input, "ALA 5 10.5 12.3\n").unwrap();

        run(ConvertArgs {
            input,
            output: output.clone(),
            negative: true,
            renumber: Some(100),
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "      Assignment         w1         w2  \n\n          A105H-N      -12.3       10.5 \n"
        );
    }

    #[test]
    fn unknown_residue_fails_without_touching_existing_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("table.txt");
        let output = dir.path().join("peaks.list");
        fs::write(&input, "ALA 1 120.0 1.0\nXXX 2 120.0 1.0\n").unwrap();
        fs::write(&output, "previous").unwrap();

        let result = run(ConvertArgs {
            input,
            output: output.clone(),
            negative: false,
            renumber: None,
        });

        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::UnknownResidue { line: 2, .. }))
        ));
        assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
    }

    #[test]
    fn malformed_table_reports_file_parsing_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("table.txt");
        fs::write(&input, "ALA five 1.0 1.0\n").unwrap();

        let result = run(ConvertArgs {
            input: input.clone(),
            output: dir.path().join("peaks.list"),
            negative: false,
            renumber: None,
        });

        match result {
            Err(CliError::FileParsing { path, source }) => {
                assert_eq!(path, input);
                assert!(source.to_string().contains("line 1"));
            }
            other => panic!("expected FileParsing error, got {other:?}"),
        }
    }
}
