//! Huffman coding over byte sequences.
//!
//! The pipeline runs one way: [`FrequencyTable`] → [`HuffmanTree`] →
//! [`CodeTable`] → [`encode`], and back again with [`decode`]. [`round_trip`]
//! runs all of it and logs a size [`Report`].
//!
//! ```
//! let input = b"BCCABBDDAECCBBAEDDCC";
//! assert_eq!(huffman::round_trip(input), input);
//! ```

mod code_table;
mod codec;
mod errors;
mod frequency;
mod tree;

pub use crate::code_table::{bit_string, Code, CodeTable};
pub use crate::codec::{decode, encode, report::Report, round_trip, Compressed};
pub use crate::errors::BuildError;
pub use crate::frequency::FrequencyTable;
pub use crate::tree::{HuffmanTree, Node, NodeId};
