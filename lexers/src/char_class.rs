#![deny(warnings)]

/// Named sets of characters the scanners and the grammar peek against.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CharClass {
    Digit,
    IdentStart,
    IdentContinue,
    AddOp,
    MulOp,
    OParen,
    CParen,
    Minus,
    Dot,
    // anything at or below U+0020, same set String::trim strips on the JVM
    Whitespace,
}

impl CharClass {
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::IdentStart => c.is_ascii_alphabetic() || c == '_',
            CharClass::IdentContinue => c.is_ascii_alphanumeric() || c == '_',
            CharClass::AddOp => matches!(c, '+' | '-'),
            CharClass::MulOp => matches!(c, '*' | '/' | '%'),
            CharClass::OParen => c == '(',
            CharClass::CParen => c == ')',
            CharClass::Minus => c == '-',
            CharClass::Dot => c == '.',
            CharClass::Whitespace => c <= ' ',
        }
    }
}

pub fn belongs_to(c: char, class: CharClass) -> bool {
    class.contains(c)
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{belongs_to, CharClass};

    #[test]
    fn digits() {
        for c in "0123456789".chars() {
            assert!(belongs_to(c, CharClass::Digit));
            assert!(belongs_to(c, CharClass::IdentContinue));
            assert!(!belongs_to(c, CharClass::IdentStart));
        }
        for c in "a.-x _٣".chars() {
            assert!(!belongs_to(c, CharClass::Digit));
        }
    }

    #[test]
    fn letters_ignore_case() {
        for c in "abcxyzABCXYZ_".chars() {
            assert!(belongs_to(c, CharClass::IdentStart));
            assert!(belongs_to(c, CharClass::IdentContinue));
        }
        for c in "é$.( ".chars() {
            assert!(!belongs_to(c, CharClass::IdentStart));
            assert!(!belongs_to(c, CharClass::IdentContinue));
        }
    }

    #[test]
    fn operators() {
        assert!(belongs_to('+', CharClass::AddOp));
        assert!(belongs_to('-', CharClass::AddOp));
        assert!(!belongs_to('*', CharClass::AddOp));
        for c in "*/%".chars() {
            assert!(belongs_to(c, CharClass::MulOp));
        }
        assert!(!belongs_to('^', CharClass::MulOp));
        assert!(belongs_to('-', CharClass::Minus));
        assert!(!belongs_to('+', CharClass::Minus));
        assert!(belongs_to('(', CharClass::OParen));
        assert!(!belongs_to(')', CharClass::OParen));
        assert!(belongs_to(')', CharClass::CParen));
        assert!(belongs_to('.', CharClass::Dot));
    }

    #[test]
    fn whitespace() {
        for c in [' ', '\t', '\n', '\r', '\u{0}', '\u{b}'] {
            assert!(belongs_to(c, CharClass::Whitespace));
        }
        for c in ['!', 'a', '\u{a0}', '\u{2003}'] {
            assert!(!belongs_to(c, CharClass::Whitespace));
        }
    }
}
