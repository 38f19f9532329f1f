use phf::{Map, phf_map};

static ONE_LETTER_CODES: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "CYS" => 'C',
    "GLN" => 'Q', "GLU" => 'E', "GLY" => 'G',
    // Histidine protonation variants all collapse to H
    "HIS" => 'H', "HSE" => 'H', "HID" => 'H', "HSD" => 'H', "HSP" => 'H',
    "ILE" => 'I', "LEU" => 'L', "LYS" => 'K', "MET" => 'M', "PHE" => 'F',
    "PRO" => 'P', "SER" => 'S', "THR" => 'T', "TRP" => 'W', "TYR" => 'Y',
    "VAL" => 'V',
    // Ambiguous codes
    "ASX" => 'B', "GLX" => 'Z',
};

/// Maps a three-letter residue name to its one-letter code.
///
/// Matching is case-sensitive; surrounding whitespace is ignored.
pub fn one_letter_code(residue_name: &str) -> Option<char> {
    ONE_LETTER_CODES.get(residue_name.trim()).copied()
}

pub fn known_residue_names() -> impl Iterator<Item = &'static str> {
    ONE_LETTER_CODES.keys().copied()
}
