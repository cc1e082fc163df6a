use lexers::Token;
use std::fmt;

/// Tokens consumed by one pass, in input order.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TokenList<'a>(pub Vec<Token<'a>>);

impl<'a> TokenList<'a> {
    pub fn iter(&self) -> std::slice::Iter<'_, Token<'a>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize { self.0.len() }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn texts(&self) -> Vec<&'a str> {
        self.0.iter().map(|t| t.text()).collect()
    }
}

impl<'a> std::ops::Index<usize> for TokenList<'a> {
    type Output = Token<'a>;
    fn index(&self, i: usize) -> &Self::Output { &self.0[i] }
}

impl fmt::Display for TokenList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let texts = self.0.iter()
            .map(|t| t.text())
            .collect::<Vec<&str>>()
            .join(", ");
        write!(f, "{}", texts)
    }
}

///////////////////////////////////////////////////////////////////////////////
