use crate::core::utils::identifiers;

/// One row of a per-residue shift/coupling table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueRecord {
    pub name: String,   // Three-letter residue name (e.g., "ALA", "HSD")
    pub id: i64,        // Residue sequence number
    pub shift: f64,     // 15N chemical shift, in ppm
    pub coupling: f64,  // 15N-1H dipolar coupling, in kHz
    pub line: usize,    // 1-based line number in the source table
}

impl ResidueRecord {
    pub fn new(name: &str, id: i64, shift: f64, coupling: f64) -> Self {
        Self {
            name: name.to_string(),
            id,
            shift,
            coupling,
            line: 0,
        }
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }

    pub fn one_letter_code(&self) -> Option<char> {
        identifiers::one_letter_code(&self.name)
    }
}
