use crate::core::models::peak::PeakRecord;
use crate::core::models::residue::ResidueRecord;
use crate::engine::config::ConversionConfig;
use crate::engine::error::EngineError;
use crate::engine::tasks::assign::assign_residue;
use tracing::{info, instrument};

/// Converts residue rows into peak-list rows, preserving input order.
///
/// The first unknown residue code aborts the conversion.
#[instrument(skip_all, name = "conversion_workflow")]
pub fn run(
    records: &[ResidueRecord],
    config: &ConversionConfig,
) -> Result<Vec<PeakRecord>, EngineError> {
    let peaks = records
        .iter()
        .map(|record| assign_residue(record, config))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        residues = peaks.len(),
        negative = config.negative_couplings,
        offset = config.residue_offset,
        "Converted residue table."
    );
    Ok(peaks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::io::peak_list::PeakListFile;
    use crate::core::io::residue_table::ResidueTableFile;
    use std::io::Cursor;

    #[test]
    fn converts_table_into_sparky_peak_list() {
        let table = "ALA 5 10.5 12.3\n";
        let records = ResidueTableFile::read_from(&mut Cursor::new(table)).unwrap();
        let config = ConversionConfig {
            negative_couplings: true,
            residue_offset: 100,
        };

        let peaks = run(&records, &config).unwrap();
        let mut output = Vec::new();
        PeakListFile::write_to(&peaks, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "      Assignment         w1         w2  \n\n          A105H-N      -12.3       10.5 \n"
        );
    }

    #[test]
    fn converted_list_feeds_the_simulator_reader() {
        let table = "# id shift coupling\nGLY 2 108.0 -3.0\nHSD 3 119.5 7.25\n";
        let records = ResidueTableFile::read_from(&mut Cursor::new(table)).unwrap();
        let peaks = run(&records, &ConversionConfig::default()).unwrap();

        let mut output = Vec::new();
        PeakListFile::write_to(&peaks, &mut output).unwrap();
        let reread = PeakListFile::read_from(&mut Cursor::new(output)).unwrap();

        assert_eq!(reread, peaks);
        assert_eq!(reread[1], PeakRecord::new("H3H-N", 7.25, 119.5));
    }

    #[test]
    fn long_decimal_values_survive_the_round_trip() {
        let table = "SER 12 118.23456789012 -4.123456789\n";
        let records = ResidueTableFile::read_from(&mut Cursor::new(table)).unwrap();
        let peaks = run(&records, &ConversionConfig::default()).unwrap();

        let mut output = Vec::new();
        PeakListFile::write_to(&peaks, &mut output).unwrap();
        let reread = PeakListFile::read_from(&mut Cursor::new(output)).unwrap();

        assert_eq!(
            reread,
            vec![PeakRecord::new("S12H-N", -4.123456789, 118.23456789012)]
        );
    }

    #[test]
    fn unknown_residue_aborts_with_its_line() {
        let table = "ALA 1 100.0 1.0\n\nFOO 2 100.0 1.0\n";
        let records = ResidueTableFile::read_from(&mut Cursor::new(table)).unwrap();
        let err = run(&records, &ConversionConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            EngineError::UnknownResidue { ref code, line: 3 } if code == "FOO"
        ));
    }
}
