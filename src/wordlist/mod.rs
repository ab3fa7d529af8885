// Tokenize, normalize, deduplicate, rank and write
pub mod normalizer;
pub mod ranker;
pub mod sink;
pub mod tokenizer;

pub use normalizer::normalize;
pub use ranker::{RankedList, TokenSet};
pub use sink::{check_destination, write_ranked};
pub use tokenizer::{bigrams, tokenize, words};
