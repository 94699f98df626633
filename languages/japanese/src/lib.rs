pub mod lexicon;
pub mod script;
pub mod tokenizer;

pub use lexicon::{LexEntry, Lexicon};
pub use script::Script;
pub use tokenizer::JapaneseTokenizer;
