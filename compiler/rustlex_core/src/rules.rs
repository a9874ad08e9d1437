//! The canonical rule set for Rust source.
//!
//! Historical rule sets for this language disagree on keyword lists,
//! operator sets and category granularity. This module fixes one internally
//! consistent set:
//!
//! - Keywords are split into general, reserved and constant (`true`/`false`).
//! - Builtin type names are classified separately from keywords.
//! - Comments are split into single-line and block; block comments do not
//!   nest (the first `*/` closes).
//! - Declaration keywords (`fn`, `const`, `enum`, `iface`, `type`, `class`,
//!   `struct`, `trait`, `impl`, `use`, `import`) push a one-shot mode that
//!   tags the following name.
//!
//! # Ordering
//!
//! Rules are tried in declaration order and the first match wins, so order
//! is load-bearing: declarations precede general keywords, keywords precede
//! identifiers, `::` and `->` precede the single-character punctuation and
//! operators that prefix them, and every multi-character operator precedes
//! its own prefixes (`>>>=` before `>>>` before `>>` before `>`).
//!
//! # Sub-Rule-Sets
//!
//! Modes are composed from named sets (see [`SETS`]). Callers can fetch the
//! [`builder()`] and redefine any set before building to swap rules.

use crate::{Category, Entry, Mode, Rule, RuleError, RuleTable, RuleTableBuilder};

/// General keywords without a mode transition.
pub const KEYWORDS: &[&str] = &[
    "alt", "as", "assert", "break", "check", "claim", "copy", "do", "drop", "else", "export",
    "extern", "fail", "for", "if", "in", "let", "log", "loop", "match", "mod", "move", "mut",
    "native", "priv", "pub", "pure", "ret", "return", "self", "static", "unchecked", "unsafe",
    "while",
];

/// Reserved for future use; not implemented by the language.
pub const RESERVED_KEYWORDS: &[&str] = &[
    "abstract", "alignof", "be", "final", "macro", "note", "offsetof", "override", "proc",
    "prove", "sizeof", "syntax", "to", "typeof", "virtual", "with", "yield",
];

pub const KEYWORD_CONSTANTS: &[&str] = &["true", "false"];

pub const BUILTIN_TYPES: &[&str] = &[
    "bool", "char", "float", "f32", "f64", "int", "i8", "i16", "i32", "i64", "uint", "u8", "u16",
    "u32", "u64", "str",
];

pub const RESERVED_TYPES: &[&str] = &["f16", "f80", "f128", "i128", "u128", "m32", "m64", "m128"];

/// Keywords that introduce a type-like name.
pub const TYPE_DECLARATIONS: &[&str] = &["enum", "iface", "type", "class", "struct", "trait"];

/// Keywords that introduce a namespace path.
pub const IMPORT_DECLARATIONS: &[&str] = &["use", "import"];

/// Named sub-rule-sets defined by [`builder()`], in root inclusion order.
pub const SETS: &[&str] = &[
    "whitespace",
    "comments",
    "attributes",
    "declarations",
    "literals",
    "keywords",
    "types",
    "punctuation",
    "operators",
    "identifiers",
];

const IDENT: &str = r"[\p{XID_Start}_]\p{XID_Continue}*";

/// Escape sequences shared by string and character literals.
const ESCAPE: &str = r#"\\(?:[nrt0"'\\]|x[0-9a-fA-F]{2}|u[0-9a-fA-F]{4}|U[0-9a-fA-F]{8})"#;

const INT_SUFFIX: &str = r"(?:[iu](?:8|16|32|64)?)?";

const FLOAT_SUFFIX: &str = r"(?:f32|f64|f)";

/// Operators, longest first within each shared prefix.
const OPERATORS: &[(&str, Category)] = &[
    ("<->", Category::OperatorSwap),
    ("<-", Category::OperatorMove),
    (">>>=", Category::OperatorCompoundAssign),
    ("<<=", Category::OperatorCompoundAssign),
    (">>=", Category::OperatorCompoundAssign),
    ("+=", Category::OperatorCompoundAssign),
    ("-=", Category::OperatorCompoundAssign),
    ("*=", Category::OperatorCompoundAssign),
    ("/=", Category::OperatorCompoundAssign),
    ("%=", Category::OperatorCompoundAssign),
    ("&=", Category::OperatorCompoundAssign),
    ("|=", Category::OperatorCompoundAssign),
    ("^=", Category::OperatorCompoundAssign),
    (">>>", Category::OperatorBitwise),
    ("<<", Category::OperatorBitwise),
    (">>", Category::OperatorBitwise),
    ("&&", Category::OperatorLogical),
    ("||", Category::OperatorLogical),
    ("==", Category::OperatorComparison),
    ("!=", Category::OperatorComparison),
    ("<=", Category::OperatorComparison),
    (">=", Category::OperatorComparison),
    ("<", Category::OperatorComparison),
    (">", Category::OperatorComparison),
    ("!", Category::OperatorUnary),
    ("~", Category::OperatorUnary),
    ("@", Category::OperatorUnary),
    ("&", Category::OperatorBitwise),
    ("|", Category::OperatorBitwise),
    ("^", Category::OperatorBitwise),
    ("+", Category::OperatorBinary),
    ("-", Category::OperatorBinary),
    ("*", Category::OperatorBinary),
    ("/", Category::OperatorBinary),
    ("%", Category::OperatorBinary),
    ("=", Category::OperatorBinary),
];

fn operators() -> Result<Vec<Entry>, RuleError> {
    OPERATORS
        .iter()
        .map(|&(text, category)| Rule::literal(text, category).map(Entry::from))
        .collect()
}

fn float_pattern() -> String {
    let digits = "[0-9][0-9_]*";
    let exponent = format!("[eE][+-]?{digits}");
    format!(
        r"{digits}\.{digits}(?:{exponent})?(?:{FLOAT_SUFFIX}\b)?|{digits}{exponent}(?:{FLOAT_SUFFIX}\b)?|{digits}{FLOAT_SUFFIX}\b"
    )
}

/// One-shot mode body: trivia, then `name` tagged as `category` and popped.
fn one_shot(category: Category) -> Result<Vec<Entry>, RuleError> {
    Ok(vec![
        Entry::include("whitespace"),
        Entry::include("comments"),
        Rule::pattern(IDENT, category)?.pop().into(),
    ])
}

/// The canonical rule description, ready to adjust or build.
pub fn builder() -> Result<RuleTableBuilder, RuleError> {
    let mut builder = RuleTableBuilder::new();

    builder
        .set(
            "whitespace",
            vec![Rule::pattern(r"\s+", Category::Whitespace)?.into()],
        )
        .set(
            "comments",
            vec![
                Rule::pattern(r"//[^\n]*", Category::CommentSingle)?.into(),
                Rule::literal("/*", Category::CommentMultiline)?
                    .push(Mode::CommentBlock)
                    .into(),
            ],
        )
        .set(
            "attributes",
            vec![Rule::literal("#[", Category::NameAttribute)?
                .push(Mode::Attribute)
                .into()],
        )
        .set(
            "declarations",
            vec![
                Rule::words(&["fn"], Category::Keyword)?
                    .push(Mode::FunctionName)
                    .into(),
                Rule::words(&["const"], Category::Keyword)?
                    .push(Mode::ConstName)
                    .into(),
                Rule::words(TYPE_DECLARATIONS, Category::Keyword)?
                    .push(Mode::TypeName)
                    .into(),
                Rule::words(&["impl"], Category::Keyword)?
                    .push(Mode::ImplTarget)
                    .into(),
                Rule::words(IMPORT_DECLARATIONS, Category::Keyword)?
                    .push(Mode::Import)
                    .into(),
            ],
        )
        .set(
            "literals",
            vec![
                Rule::literal("'", Category::StringChar)?
                    .push(Mode::Character)
                    .into(),
                Rule::literal("\"", Category::String)?
                    .push(Mode::String)
                    .into(),
                Rule::pattern(&format!("0x[0-9a-fA-F_]+{INT_SUFFIX}"), Category::NumberHex)?.into(),
                Rule::pattern(&format!("0b[01_]+{INT_SUFFIX}"), Category::NumberBin)?.into(),
                Rule::pattern(&float_pattern(), Category::NumberFloat)?.into(),
                Rule::pattern(&format!("[0-9][0-9_]*{INT_SUFFIX}"), Category::NumberInteger)?
                    .into(),
            ],
        )
        .set(
            "keywords",
            vec![
                Rule::words(KEYWORD_CONSTANTS, Category::KeywordConstant)?.into(),
                Rule::words(RESERVED_KEYWORDS, Category::KeywordReserved)?.into(),
                Rule::words(KEYWORDS, Category::Keyword)?.into(),
            ],
        )
        .set(
            "types",
            vec![
                Rule::words(BUILTIN_TYPES, Category::TypeBuiltin)?.into(),
                Rule::words(RESERVED_TYPES, Category::TypeReserved)?.into(),
            ],
        )
        .set(
            "punctuation",
            vec![
                Rule::literal("::", Category::Punctuation)?.into(),
                Rule::literal("->", Category::Punctuation)?.into(),
                Rule::pattern(r"[\[\](){};,.:]", Category::Punctuation)?.into(),
            ],
        )
        .set("operators", operators()?)
        .set(
            "identifiers",
            vec![Rule::pattern(IDENT, Category::Name)?.into()],
        );

    builder.mode(
        Mode::Root,
        SETS.iter().copied().map(Entry::include).collect(),
    );

    builder.mode(
        Mode::String,
        vec![
            Rule::literal("\"", Category::String)?.pop().into(),
            Rule::pattern(ESCAPE, Category::StringEscape)?.into(),
            Rule::pattern(r#"[^"\\]+"#, Category::String)?.into(),
            Rule::literal("\\", Category::String)?.into(),
        ],
    );

    builder.mode(
        Mode::Character,
        vec![
            Rule::groups(
                &format!("({ESCAPE})(')"),
                &[Category::StringEscape, Category::StringChar],
            )?
            .pop()
            .into(),
            Rule::pattern(r"[^'\\\n]'", Category::StringChar)?
                .pop()
                .into(),
            Rule::literal("'", Category::StringChar)?.pop().into(),
            Rule::pattern(ESCAPE, Category::StringEscape)?.into(),
            // An unterminated literal gives up at the end of the line.
            Rule::pattern(r"\r?\n", Category::Whitespace)?.pop().into(),
            Rule::pattern(r"[^'\n]", Category::StringChar)?.into(),
        ],
    );

    builder.mode(
        Mode::CommentBlock,
        vec![
            Rule::literal("*/", Category::CommentMultiline)?
                .pop()
                .into(),
            Rule::pattern(r"[^*]+", Category::CommentMultiline)?.into(),
            Rule::literal("*", Category::CommentMultiline)?.into(),
        ],
    );

    builder.mode(
        Mode::Attribute,
        vec![
            Rule::literal("[", Category::NameAttribute)?
                .push(Mode::Attribute)
                .into(),
            Rule::literal("]", Category::NameAttribute)?.pop().into(),
            Rule::pattern(IDENT, Category::NameAttribute)?.into(),
            Entry::IncludeMode(Mode::Root),
        ],
    );

    builder.fallthrough_mode(Mode::FunctionName, one_shot(Category::NameFunction)?);
    builder.fallthrough_mode(Mode::ConstName, one_shot(Category::NameConstant)?);
    builder.fallthrough_mode(Mode::TypeName, one_shot(Category::NameClass)?);

    builder.fallthrough_mode(
        Mode::ImplTarget,
        vec![
            Entry::include("whitespace"),
            Entry::include("comments"),
            Rule::literal("<", Category::Punctuation)?.pop().into(),
            Rule::pattern(IDENT, Category::NameClass)?.pop().into(),
        ],
    );

    builder.fallthrough_mode(
        Mode::Import,
        vec![
            Entry::include("whitespace"),
            Entry::include("comments"),
            Rule::groups(
                &format!(r"({IDENT})(\s*)(=)(\s*)"),
                &[
                    Category::NameNamespace,
                    Category::Whitespace,
                    Category::OperatorBinary,
                    Category::Whitespace,
                ],
            )?
            .into(),
            Rule::pattern(
                &format!(r"{IDENT}(?:(?:::|\.){IDENT})*(?:::\*)?"),
                Category::NameNamespace,
            )?
            .pop()
            .into(),
        ],
    );

    Ok(builder)
}

/// Build the canonical rule table.
pub fn builtin() -> Result<RuleTable, RuleError> {
    builder()?.build()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
