#![deny(warnings)]

use crate::char_class::{belongs_to, CharClass};
use crate::token::{Span, Token, TokenKind};

/// A bounded view `[start, end)` over a source string. Consuming or trimming
/// only ever shrinks the view, offsets always refer to the original source.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Cursor{src, start: 0, end: src.len()}
    }

    pub fn start(&self) -> usize { self.start }
    pub fn end(&self) -> usize { self.end }
    pub fn len(&self) -> usize { self.end - self.start }
    pub fn is_empty(&self) -> bool { self.start == self.end }

    pub fn rest(&self) -> &'a str {
        &self.src[self.start..self.end]
    }

    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn peek_is(&self, class: CharClass) -> bool {
        self.peek().map_or(false, |c| belongs_to(c, class))
    }

    pub fn starts_with(&self, pat: &str) -> bool {
        self.rest().starts_with(pat)
    }

    // drop whitespace on both ends of the view
    pub fn trim(&mut self) {
        let is_white = |c: char| belongs_to(c, CharClass::Whitespace);
        let rest = self.rest();
        self.start += rest.len() - rest.trim_start_matches(is_white).len();
        let rest = self.rest();
        self.end -= rest.len() - rest.trim_end_matches(is_white).len();
    }

    /// Consume `len` bytes from the front of the view as a token.
    /// Never reads past the end of the view.
    pub fn take(&mut self, len: usize, kind: TokenKind) -> Token<'a> {
        let end = self.start + len.min(self.len());
        let token = Token::new(self.src, Span{start: self.start, end}, kind);
        self.start = end;
        token
    }

    /// Split off the first `len` bytes as their own bounded cursor. `self`
    /// resumes right after them.
    pub fn split_to(&mut self, len: usize) -> Cursor<'a> {
        let mid = self.start + len.min(self.len());
        let head = Cursor{src: self.src, start: self.start, end: mid};
        self.start = mid;
        head
    }
}
