use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    AddOp,
    MulOp,
    Minus, // unary
    Integer,
    Dot,
    Fraction,
    Identifier,
    OParen,
    CParen,
}

/// Byte offsets into the original input, end exclusive.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Token<'a> {
    text: &'a str,
    span: Span,
    kind: TokenKind,
}

impl<'a> Token<'a> {
    pub(crate) fn new(src: &'a str, span: Span, kind: TokenKind) -> Self {
        Token{text: &src[span.start..span.end], span, kind}
    }

    pub fn text(&self) -> &'a str { self.text }
    pub fn span(&self) -> Span { self.span }
    pub fn kind(&self) -> TokenKind { self.kind }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
