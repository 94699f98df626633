pub mod corpus;
pub mod language;
pub mod preprocess;

pub use corpus::{Corpus, Document};
pub use language::{Token, TokenizeError, Tokenizer};
pub use preprocess::normalize;
