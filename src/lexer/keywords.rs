use lazy_static::lazy_static;
use std::collections::HashMap;

use super::tokens::TypeTag;

lazy_static! {
    /// Default table shared by every [`Lexer`](super::lexer::Lexer) built with `Lexer::new`.
    pub static ref KEYWORDS: KeywordTable = KeywordTable::new();
}

/// Reserved type names and the tag each one resolves to.
///
/// Built once and read-only afterwards. Both classification and display go
/// through the tag stored on the token, so there is no second copy to drift.
#[derive(Debug, Clone)]
pub struct KeywordTable {
    lookup: HashMap<&'static str, TypeTag>,
}

impl KeywordTable {
    pub fn new() -> Self {
        let mut map = HashMap::new();
        map.insert("int8", TypeTag::Int8);
        map.insert("char", TypeTag::Int8);
        map.insert("u_int8", TypeTag::UInt8);
        map.insert("int32", TypeTag::Int32);
        map.insert("u_int32", TypeTag::UInt32);
        map.insert("double", TypeTag::DoubleLiteral);
        map.insert("void", TypeTag::Void);
        map.insert("struct", TypeTag::Struct);

        KeywordTable { lookup: map }
    }

    pub fn lookup(&self, text: &str) -> Option<TypeTag> {
        self.lookup.get(text).copied()
    }

    pub fn contains(&self, text: &str) -> bool {
        self.lookup.contains_key(text)
    }

    pub fn len(&self) -> usize {
        self.lookup.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lookup.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, TypeTag)> + '_ {
        self.lookup.iter().map(|(name, tag)| (*name, *tag))
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new()
    }
}
