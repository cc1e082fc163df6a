extern crate lexers;

pub use parser::Recognizer;
pub use parser::Verdict;
pub use parser::DEFAULT_MAX_DEPTH;
pub use parser::MAX_DEPTH;
pub use tokenprint::TokenList;

pub use lexers::{Span, Token, TokenKind};

pub mod parser;

mod tokenprint;

/// Check `input` with the default limits, dropping the tokens.
pub fn evaluate(input: &str) -> bool {
    Recognizer::new().evaluate(input).is_valid()
}
