/// Occurrence counts for each distinct byte of an input.
///
/// Entries are kept in order of first appearance. Tree construction uses that
/// order to break ties between equal weights, so the same input always yields
/// the same code assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(u8, u64)>,
}

impl FrequencyTable {
    pub fn from_bytes(input: &[u8]) -> Self {
        // Position of each byte in `entries`, if seen yet.
        let mut slots: [Option<usize>; 256] = [None; 256];
        let mut entries: Vec<(u8, u64)> = Vec::new();

        for &symbol in input {
            match slots[symbol as usize] {
                Some(i) => entries[i].1 += 1,
                None => {
                    slots[symbol as usize] = Some(entries.len());
                    entries.push((symbol, 1));
                }
            }
        }

        Self { entries }
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, symbol: u8) -> Option<u64> {
        self.entries
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, count)| count)
    }

    /// `(symbol, count)` pairs, in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u64)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of all counts, i.e. the length of the input.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|&(_, count)| count).sum()
    }
}
