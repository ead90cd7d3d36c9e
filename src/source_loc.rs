use crate::token::Token;

// Position of a token in the input: the 1-based index of its word.
// Dropped words still count, so positions line up with what the user typed.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SourceLoc {
    pub word: u32,
}

impl SourceLoc {
    pub fn new(word: u32) -> SourceLoc {
        SourceLoc {
            word,
        }
    }
}

impl Default for SourceLoc {
    fn default() -> SourceLoc {
        SourceLoc {
            word: 1,
        }
    }
}

impl<'a> From<&Token<'a>> for SourceLoc {
    fn from(token: &Token<'a>) -> SourceLoc {
        token.loc
    }
}
