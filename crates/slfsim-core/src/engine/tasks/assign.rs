use crate::core::models::peak::PeakRecord;
use crate::core::models::residue::ResidueRecord;
use crate::engine::config::ConversionConfig;
use crate::engine::error::EngineError;

/// Turns one residue row into a peak-list row labelled `<code><id>H-N`.
///
/// The coupling becomes the `w1` value and the shift the `w2` value.
pub fn assign_residue(
    record: &ResidueRecord,
    config: &ConversionConfig,
) -> Result<PeakRecord, EngineError> {
    let code = record
        .one_letter_code()
        .ok_or_else(|| EngineError::UnknownResidue {
            code: record.name.clone(),
            line: record.line,
        })?;

    let id = record
        .id
        .checked_add(config.residue_offset)
        .ok_or(EngineError::ResidueIdOverflow {
            id: record.id,
            offset: config.residue_offset,
            line: record.line,
        })?;

    let coupling = if config.negative_couplings {
        -record.coupling.abs()
    } else {
        record.coupling
    };

    Ok(PeakRecord::new(
        &format!("{}{}H-N", code, id),
        coupling,
        record.shift,
    ))
}
