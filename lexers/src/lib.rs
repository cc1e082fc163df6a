mod char_class;
mod cursor;
mod helpers;
mod token;

pub use char_class::{belongs_to, CharClass};
pub use cursor::Cursor;
pub use token::{Span, Token, TokenKind};

pub use helpers::scan_float;
pub use helpers::scan_group;
pub use helpers::scan_identifier;
pub use helpers::scan_integer;
pub use helpers::FloatSpan;
