use std::fmt;

use crate::{code_table::CodeTable, frequency::FrequencyTable};

/// Size of one uncompressed symbol, in bits.
pub const BITS_PER_SYMBOL: u64 = 8;

/// How much smaller the Huffman encoding is than the raw input.
///
/// The compressed size counts the payload plus a model of storing the code
/// table alongside it: for each distinct symbol, the symbol itself (8 bits)
/// and its code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub original_bits: u64,
    pub payload_bits: u64,
    pub table_bits: u64,
}

impl Report {
    pub fn new(freq: &FrequencyTable, codes: &CodeTable) -> Self {
        let mut payload_bits = 0;
        let mut table_bits = 0;

        for (symbol, count) in freq.iter() {
            let code_len = codes.get(symbol).map_or(0, |code| code.len() as u64);
            payload_bits += count * code_len;
            table_bits += BITS_PER_SYMBOL + code_len;
        }

        Self {
            original_bits: BITS_PER_SYMBOL * freq.total(),
            payload_bits,
            table_bits,
        }
    }

    pub fn compressed_bits(&self) -> u64 {
        self.payload_bits + self.table_bits
    }

    /// Percentage saved, truncated toward zero. Negative when the encoding
    /// is larger than the input.
    ///
    /// `None` for empty input.
    pub fn effectiveness(&self) -> Option<i64> {
        if self.original_bits == 0 {
            return None;
        }

        let original = i128::from(self.original_bits);
        let saved = original - i128::from(self.compressed_bits());
        Some((saved * 100 / original) as i64)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original size:   {} bits", self.original_bits)?;
        writeln!(
            f,
            "Compressed size: {} bits ({} payload + {} code table)",
            self.compressed_bits(),
            self.payload_bits,
            self.table_bits
        )?;
        match self.effectiveness() {
            Some(percent) => write!(f, "Effectiveness:   {percent}%"),
            None => write!(f, "Effectiveness:   n/a (empty input)"),
        }
    }
}
