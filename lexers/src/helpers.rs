#![deny(warnings)]

use crate::char_class::{belongs_to, CharClass};

/*
 * Scanners only look at the front of the view they're handed. They return
 * the byte length of the literal starting at offset 0, or None when the view
 * doesn't start with one. The caller is expected to trim whitespace first.
 */

// length of the leading run of chars in 'class'
fn run_length(src: &str, class: CharClass) -> usize {
    src.find(|c: char| !belongs_to(c, class)).unwrap_or(src.len())
}

// scan [0-9]+
pub fn scan_integer(src: &str) -> Option<usize> {
    match run_length(src, CharClass::Digit) {
        0 => None,
        n => Some(n),
    }
}

/// Where a float literal splits: `src[..dot]` is the integer part and
/// `src[dot + 1..end]` the fraction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FloatSpan {
    pub dot: usize,
    pub end: usize,
}

// scan [0-9]*\.[0-9]+ where the dot is the first one in the view
pub fn scan_float(src: &str) -> Option<FloatSpan> {
    let dot = src.find('.')?;
    if !src[..dot].chars().all(|c| belongs_to(c, CharClass::Digit)) {
        return None;
    }
    let fraction = scan_integer(&src[dot + 1..])?;
    Some(FloatSpan{dot, end: dot + 1 + fraction})
}

// scan [a-zA-Z_][a-zA-Z0-9_]*
pub fn scan_identifier(src: &str) -> Option<usize> {
    let first = src.chars().next()?;
    if !belongs_to(first, CharClass::IdentStart) {
        return None;
    }
    Some(run_length(src, CharClass::IdentContinue))
}

// 'src' starts right after an opening paren, find the offset of its match
pub fn scan_group(src: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, c) in src.char_indices() {
        if belongs_to(c, CharClass::OParen) { depth += 1; }
        if belongs_to(c, CharClass::CParen) { depth -= 1; }
        if depth == 0 { return Some(i); }
    }
    None
}

///////////////////////////////////////////////////////////////////////////////
