//! Token categories: the stable, consumer-facing classification vocabulary.
//!
//! Categories are a flat `#[repr(u8)]` enum so tokens stay small and cheap to
//! compare. The two-level hierarchy that renderers expect (`Name` vs.
//! `Name.Function`) is recovered through [`Category::group()`] rather than by
//! nesting types.
//!
//! # Naming
//!
//! Every category has two stable spellings:
//! - [`Category::dotted_name()`]: `Group.Sub` form (`"Name.Function"`),
//!   used in CLI output and filters.
//! - [`Category::short_name()`]: conventional short CSS class used by HTML
//!   highlighters (`"nf"`).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification label attached to every emitted token.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    // === Trivia: 0-15 ===
    /// Spaces, tabs and newlines.
    Whitespace = 0,
    /// `// ...` to end of line.
    CommentSingle = 1,
    /// `/* ... */`, first `*/` closes.
    CommentMultiline = 2,

    // === Keywords: 16-31 ===
    /// General keyword (`let`, `fn`, `while`).
    Keyword = 16,
    /// Reserved for future use, not implemented by the language.
    KeywordReserved = 17,
    /// `true` / `false`.
    KeywordConstant = 18,

    // === Types: 32-47 ===
    /// Builtin scalar type name (`int`, `u8`, `str`).
    TypeBuiltin = 32,
    /// Reserved type name (`f128`, `m64`).
    TypeReserved = 33,

    // === Names: 48-63 ===
    /// Plain identifier.
    Name = 48,
    /// Identifier following `fn`.
    NameFunction = 49,
    /// Identifier following `const`.
    NameConstant = 50,
    /// Identifier following a type-introducing keyword or `impl`.
    NameClass = 51,
    /// Module path following `use` / `import`.
    NameNamespace = 52,
    /// Attribute name or attribute delimiter inside `#[...]`.
    NameAttribute = 53,

    // === Strings: 64-79 ===
    /// String literal delimiters and content.
    String = 64,
    /// Escape sequence inside a string or character literal.
    StringEscape = 65,
    /// Character literal delimiters and content.
    StringChar = 66,

    // === Numbers: 80-95 ===
    /// Decimal integer.
    NumberInteger = 80,
    /// `0x` integer.
    NumberHex = 81,
    /// `0b` integer.
    NumberBin = 82,
    /// Float with fraction, exponent or float suffix.
    NumberFloat = 83,

    // === Operators: 96-111 ===
    /// `!`, `~`, `@`.
    OperatorUnary = 96,
    /// Arithmetic and plain assignment.
    OperatorBinary = 97,
    /// `&`, `|`, `^` and shifts.
    OperatorBitwise = 98,
    /// `&&`, `||`.
    OperatorLogical = 99,
    /// `==`, `!=`, `<`, `<=`, `>`, `>=`.
    OperatorComparison = 100,
    /// `<-`.
    OperatorMove = 101,
    /// `<->`.
    OperatorSwap = 102,
    /// `+=`, `>>>=` and friends.
    OperatorCompoundAssign = 103,

    // === Punctuation: 112 ===
    /// Brackets, separators, `::` and `->`.
    Punctuation = 112,

    // === Fallback: 255 ===
    /// Input no rule matched. Always exactly one character wide.
    Unclassified = 255,
}

/// Top-level category group, the first segment of the dotted name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    Whitespace,
    Comment,
    Keyword,
    Type,
    Name,
    String,
    Number,
    Operator,
    Punctuation,
    Unclassified,
}

impl Category {
    /// Every category, in discriminant order.
    pub const ALL: [Category; 31] = [
        Category::Whitespace,
        Category::CommentSingle,
        Category::CommentMultiline,
        Category::Keyword,
        Category::KeywordReserved,
        Category::KeywordConstant,
        Category::TypeBuiltin,
        Category::TypeReserved,
        Category::Name,
        Category::NameFunction,
        Category::NameConstant,
        Category::NameClass,
        Category::NameNamespace,
        Category::NameAttribute,
        Category::String,
        Category::StringEscape,
        Category::StringChar,
        Category::NumberInteger,
        Category::NumberHex,
        Category::NumberBin,
        Category::NumberFloat,
        Category::OperatorUnary,
        Category::OperatorBinary,
        Category::OperatorBitwise,
        Category::OperatorLogical,
        Category::OperatorComparison,
        Category::OperatorMove,
        Category::OperatorSwap,
        Category::OperatorCompoundAssign,
        Category::Punctuation,
        Category::Unclassified,
    ];

    /// The top-level group this category belongs to.
    pub const fn group(self) -> Group {
        match self {
            Category::Whitespace => Group::Whitespace,
            Category::CommentSingle | Category::CommentMultiline => Group::Comment,
            Category::Keyword | Category::KeywordReserved | Category::KeywordConstant => {
                Group::Keyword
            }
            Category::TypeBuiltin | Category::TypeReserved => Group::Type,
            Category::Name
            | Category::NameFunction
            | Category::NameConstant
            | Category::NameClass
            | Category::NameNamespace
            | Category::NameAttribute => Group::Name,
            Category::String | Category::StringEscape | Category::StringChar => Group::String,
            Category::NumberInteger
            | Category::NumberHex
            | Category::NumberBin
            | Category::NumberFloat => Group::Number,
            Category::OperatorUnary
            | Category::OperatorBinary
            | Category::OperatorBitwise
            | Category::OperatorLogical
            | Category::OperatorComparison
            | Category::OperatorMove
            | Category::OperatorSwap
            | Category::OperatorCompoundAssign => Group::Operator,
            Category::Punctuation => Group::Punctuation,
            Category::Unclassified => Group::Unclassified,
        }
    }

    #[inline]
    pub const fn is_trivia(self) -> bool {
        matches!(self.group(), Group::Whitespace | Group::Comment)
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self.group(), Group::Comment)
    }

    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(self.group(), Group::Keyword)
    }

    #[inline]
    pub const fn is_name(self) -> bool {
        matches!(self.group(), Group::Name)
    }

    #[inline]
    pub const fn is_string(self) -> bool {
        matches!(self.group(), Group::String)
    }

    #[inline]
    pub const fn is_number(self) -> bool {
        matches!(self.group(), Group::Number)
    }

    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(self.group(), Group::Operator)
    }

    /// Stable `Group.Sub` spelling (`"Name.Function"`, or `"Name"` for the
    /// group-level category).
    pub const fn dotted_name(self) -> &'static str {
        match self {
            Category::Whitespace => "Whitespace",
            Category::CommentSingle => "Comment.Single",
            Category::CommentMultiline => "Comment.Multiline",
            Category::Keyword => "Keyword",
            Category::KeywordReserved => "Keyword.Reserved",
            Category::KeywordConstant => "Keyword.Constant",
            Category::TypeBuiltin => "Type.Builtin",
            Category::TypeReserved => "Type.Reserved",
            Category::Name => "Name",
            Category::NameFunction => "Name.Function",
            Category::NameConstant => "Name.Constant",
            Category::NameClass => "Name.Class",
            Category::NameNamespace => "Name.Namespace",
            Category::NameAttribute => "Name.Attribute",
            Category::String => "String",
            Category::StringEscape => "String.Escape",
            Category::StringChar => "String.Char",
            Category::NumberInteger => "Number.Integer",
            Category::NumberHex => "Number.Hex",
            Category::NumberBin => "Number.Bin",
            Category::NumberFloat => "Number.Float",
            Category::OperatorUnary => "Operator.Unary",
            Category::OperatorBinary => "Operator.Binary",
            Category::OperatorBitwise => "Operator.Bitwise",
            Category::OperatorLogical => "Operator.Logical",
            Category::OperatorComparison => "Operator.Comparison",
            Category::OperatorMove => "Operator.Move",
            Category::OperatorSwap => "Operator.Swap",
            Category::OperatorCompoundAssign => "Operator.CompoundAssign",
            Category::Punctuation => "Punctuation",
            Category::Unclassified => "Unclassified",
        }
    }

    /// Short CSS class conventionally used by HTML highlighters.
    ///
    /// Operator sub-kinds have no dedicated class and share `o`.
    pub const fn short_name(self) -> &'static str {
        match self {
            Category::Whitespace => "w",
            Category::CommentSingle => "c1",
            Category::CommentMultiline => "cm",
            Category::Keyword => "k",
            Category::KeywordReserved => "kr",
            Category::KeywordConstant => "kc",
            Category::TypeBuiltin | Category::TypeReserved => "kt",
            Category::Name => "n",
            Category::NameFunction => "nf",
            Category::NameConstant => "no",
            Category::NameClass => "nc",
            Category::NameNamespace => "nn",
            Category::NameAttribute => "na",
            Category::String => "s",
            Category::StringEscape => "se",
            Category::StringChar => "sc",
            Category::NumberInteger => "mi",
            Category::NumberHex => "mh",
            Category::NumberBin => "mb",
            Category::NumberFloat => "mf",
            Category::OperatorUnary
            | Category::OperatorBinary
            | Category::OperatorBitwise
            | Category::OperatorLogical
            | Category::OperatorComparison
            | Category::OperatorMove
            | Category::OperatorSwap
            | Category::OperatorCompoundAssign => "o",
            Category::Punctuation => "p",
            Category::Unclassified => "err",
        }
    }

    /// Parse the [`dotted_name()`](Self::dotted_name) spelling back.
    pub fn from_dotted_name(name: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.dotted_name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dotted_name())
    }
}

/// Size assertion: a category is one byte.
const _: () = assert!(std::mem::size_of::<Category>() == 1);

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
