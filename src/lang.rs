use std::path::Path;
use tree_sitter::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    Rust,
    Python,
    TypeScript,
    /// TypeScript or JavaScript with JSX markup.
    Tsx,
}

impl Lang {
    #[must_use]
    pub fn from_ext(ext: &str) -> Option<Self> {
        match ext {
            "rs" => Some(Self::Rust),
            "py" => Some(Self::Python),
            "ts" | "js" => Some(Self::TypeScript),
            "tsx" | "jsx" => Some(Self::Tsx),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_ext)
    }

    #[must_use]
    pub fn grammar(self) -> Language {
        match self {
            Self::Rust => tree_sitter_rust::language(),
            Self::Python => tree_sitter_python::language(),
            Self::TypeScript => tree_sitter_typescript::language_typescript(),
            Self::Tsx => tree_sitter_typescript::language_tsx(),
        }
    }

    /// Whether a leaf of the given kind is a keyword token.
    ///
    /// Anonymous tokens spelled as a word (`fn`, `def`, `const`) are keywords.
    /// A few grammars also expose keywords as named nodes; those are listed
    /// per language.
    #[must_use]
    pub fn is_keyword(self, kind: &str, named: bool) -> bool {
        if named {
            return NAMED_KEYWORDS[self as usize].contains(&kind);
        }
        let mut chars = kind.chars();
        chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

const TS_NAMED_KEYWORDS: &[&str] = &["this", "super", "true", "false", "null", "undefined"];

// [Rust, Python, TypeScript, Tsx]
const NAMED_KEYWORDS: [&[&str]; 4] = [
    &["self", "super", "crate", "mutable_specifier"],
    &["true", "false", "none"],
    TS_NAMED_KEYWORDS,
    TS_NAMED_KEYWORDS,
];
