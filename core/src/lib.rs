pub mod index;
pub mod search;
pub mod tokenizer;

pub use index::{DocId, Entry, InvertedIndex};
pub use search::{RelativeIndex, SearchServer};
