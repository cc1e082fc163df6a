use crate::tokenprint::TokenList;
use lexers::{scan_float, scan_group, scan_identifier, scan_integer};
use lexers::{CharClass, Cursor, Token, TokenKind};
use log::{debug, trace};

/// Hard ceiling on nesting, deeper limits would overflow a 2 MiB stack.
pub const MAX_DEPTH: usize = 256;

/// Groups and unary minus chains allowed to nest before giving up.
pub const DEFAULT_MAX_DEPTH: usize = MAX_DEPTH;

#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub(crate) enum Mismatch {
    #[error("syntax mismatch")]
    Syntax,
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
}

type Match = Result<(), Mismatch>;

/// Outcome of checking one line: whether it's an expression and the tokens
/// consumed on the way. Tokens read before a failure are kept.
#[derive(Clone, PartialEq, Debug)]
pub struct Verdict<'a> {
    valid: bool,
    tokens: TokenList<'a>,
}

impl<'a> Verdict<'a> {
    pub fn is_valid(&self) -> bool { self.valid }
    pub fn tokens(&self) -> &TokenList<'a> { &self.tokens }
    pub fn into_tokens(self) -> TokenList<'a> { self.tokens }
}

/// Recognizer for
///
/// ```text
/// <expr>   -> <term> { <addop> <term> }
/// <term>   -> <factor> { <mulop> <factor> }
/// <factor> -> <integer> | <float> | <id> | '(' <expr> ')' | [-] <factor>
/// ```
///
/// Holds configuration only, every call to `evaluate` gets its own cursor
/// and token list so a recognizer can be shared freely.
#[derive(Clone, Copy, Debug)]
pub struct Recognizer {
    max_depth: usize,
}

impl Default for Recognizer {
    fn default() -> Self { Recognizer::new() }
}

impl Recognizer {
    pub fn new() -> Self {
        Recognizer{max_depth: DEFAULT_MAX_DEPTH}
    }

    /// Limits above `MAX_DEPTH` are clamped to it.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Recognizer{max_depth: max_depth.min(MAX_DEPTH)}
    }

    pub fn max_depth(&self) -> usize { self.max_depth }

    pub fn evaluate<'a>(&self, input: &'a str) -> Verdict<'a> {
        let mut cursor = Cursor::new(input);
        cursor.trim();
        let mut pass = Pass{tokens: Vec::new(), depth: 0, max_depth: self.max_depth};
        let outcome = pass.expression(&mut cursor);
        match outcome {
            Ok(()) => debug!("accepted {:?} ({} tokens)", input, pass.tokens.len()),
            Err(e) => debug!("rejected {:?}: {}", input, e),
        }
        Verdict{valid: outcome.is_ok(), tokens: TokenList(pass.tokens)}
    }
}

// State of a single recognition pass
struct Pass<'a> {
    tokens: Vec<Token<'a>>,
    depth: usize,
    max_depth: usize,
}

impl<'a> Pass<'a> {
    fn push(&mut self, cur: &mut Cursor<'a>, len: usize, kind: TokenKind) {
        let token = cur.take(len, kind);
        trace!("token {:?} {:?} at {}..{}",
               kind, token.text(), token.span().start, token.span().end);
        self.tokens.push(token);
    }

    fn nested<F>(&mut self, cur: &mut Cursor<'a>, inner: F) -> Match
        where F: FnOnce(&mut Self, &mut Cursor<'a>) -> Match
    {
        if self.depth >= self.max_depth {
            return Err(Mismatch::TooDeep(self.max_depth));
        }
        self.depth += 1;
        let outcome = inner(self, cur);
        self.depth -= 1;
        outcome
    }

    fn expression(&mut self, cur: &mut Cursor<'a>) -> Match {
        trace!("expression {:?}", cur.rest());
        cur.trim();
        self.term(cur)?;
        cur.trim();
        while cur.peek_is(CharClass::AddOp) {
            self.push(cur, 1, TokenKind::AddOp);
            cur.trim();
            // an empty group right after an addop is rejected on the spot,
            // its parens still go into the token list
            if cur.starts_with("()") {
                self.push(cur, 1, TokenKind::OParen);
                self.push(cur, 1, TokenKind::CParen);
                return Err(Mismatch::Syntax);
            }
            self.term(cur)?;
            cur.trim();
        }
        if !cur.is_empty() {
            return Err(Mismatch::Syntax);
        }
        Ok(())
    }

    fn term(&mut self, cur: &mut Cursor<'a>) -> Match {
        trace!("term {:?}", cur.rest());
        cur.trim();
        self.factor(cur)?;
        cur.trim();
        while cur.peek_is(CharClass::MulOp) {
            self.push(cur, 1, TokenKind::MulOp);
            cur.trim();
            self.factor(cur)?;
            cur.trim();
        }
        Ok(())
    }

    fn factor(&mut self, cur: &mut Cursor<'a>) -> Match {
        trace!("factor {:?}", cur.rest());
        if cur.peek_is(CharClass::Digit) {
            if let Some(float) = scan_float(cur.rest()) {
                self.push(cur, float.dot, TokenKind::Integer);
                self.push(cur, 1, TokenKind::Dot);
                self.push(cur, float.end - float.dot - 1, TokenKind::Fraction);
            } else {
                let len = scan_integer(cur.rest()).ok_or(Mismatch::Syntax)?;
                self.push(cur, len, TokenKind::Integer);
            }
            Ok(())
        } else if cur.peek_is(CharClass::IdentStart) {
            let len = scan_identifier(cur.rest()).ok_or(Mismatch::Syntax)?;
            self.push(cur, len, TokenKind::Identifier);
            Ok(())
        } else if cur.peek_is(CharClass::OParen) {
            self.nested(cur, Self::group)
        } else if cur.peek_is(CharClass::Minus) {
            self.nested(cur, |pass, cur| {
                pass.push(cur, 1, TokenKind::Minus);
                cur.trim();
                pass.factor(cur)
            })
        } else {
            Err(Mismatch::Syntax)
        }
    }

    // '(' <expr> ')' where the inner expression gets a view bounded by the
    // matching paren and has to consume all of it
    fn group(&mut self, cur: &mut Cursor<'a>) -> Match {
        self.push(cur, 1, TokenKind::OParen);
        let close = scan_group(cur.rest()).ok_or(Mismatch::Syntax)?;
        let mut inner = cur.split_to(close);
        self.expression(&mut inner)?;
        self.push(cur, 1, TokenKind::CParen);
        Ok(())
    }
}
