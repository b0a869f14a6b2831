/// An error encountered while building a [`HuffmanTree`].
///
/// Everything downstream of a successfully built tree is total: missing codes
/// are programming errors (they panic) and malformed bit sequences are
/// truncated, not reported.
///
/// [`HuffmanTree`]: crate::HuffmanTree
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// There are no symbols to build a tree over.
    ///
    /// Callers starting from raw input should short-circuit on empty input
    /// before getting here.
    #[error("cannot build a huffman tree from an empty frequency table")]
    EmptyFrequencyTable,
}
