//! Tree-sitter Node Type Mappings
//!
//! Node kinds the file-reference resolver cares about, per host grammar.
//! Each mapping is sourced from the respective `src/node-types.json`.

use std::path::Path;

/// Host document language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostLanguage {
    TypeScript,
    Tsx,
    JavaScript,
}

impl HostLanguage {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "ts" | "mts" | "cts" => Some(Self::TypeScript),
            "tsx" => Some(Self::Tsx),
            "js" | "jsx" | "mjs" | "cjs" => Some(Self::JavaScript),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn grammar(&self) -> tree_sitter::Language {
        match self {
            Self::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Self::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Self::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    pub fn node_kinds(&self) -> &'static NodeKinds {
        match self {
            Self::TypeScript | Self::Tsx => &TYPESCRIPT,
            Self::JavaScript => &JAVASCRIPT,
        }
    }
}

/// Node kinds for one grammar
#[derive(Debug, Clone, Copy)]
pub struct NodeKinds {
    /// Quoted string literal (`'x'`, `"x"`)
    pub string: &'static str,
    /// Backtick literal, string-like only without substitutions
    pub template_string: &'static str,
    /// `${...}` inside a template string
    pub template_substitution: &'static str,
    /// `key: value` inside an object literal
    pub pair: &'static str,
    /// Field name of a pair's key
    pub pair_key_field: &'static str,
}

impl NodeKinds {
    pub fn is_string_like_kind(&self, kind: &str) -> bool {
        kind == self.string || kind == self.template_string
    }
}

// =============================================================================
// TypeScript / TSX - tree-sitter-typescript/{typescript,tsx}/src/node-types.json
// =============================================================================
const TYPESCRIPT: NodeKinds = NodeKinds {
    string: "string",
    template_string: "template_string",
    template_substitution: "template_substitution",
    pair: "pair",
    pair_key_field: "key",
};

// =============================================================================
// JavaScript - tree-sitter-javascript/src/node-types.json
// =============================================================================
const JAVASCRIPT: NodeKinds = NodeKinds {
    string: "string",
    template_string: "template_string",
    template_substitution: "template_substitution",
    pair: "pair",
    pair_key_field: "key",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_path() {
        assert_eq!(
            HostLanguage::from_path(Path::new("src/app.component.ts")),
            Some(HostLanguage::TypeScript)
        );
        assert_eq!(
            HostLanguage::from_path(Path::new("src/App.TSX")),
            Some(HostLanguage::Tsx)
        );
        assert_eq!(
            HostLanguage::from_path(Path::new("lib/index.mjs")),
            Some(HostLanguage::JavaScript)
        );
        assert_eq!(HostLanguage::from_path(Path::new("app.html")), None);
        assert_eq!(HostLanguage::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_string_like_kinds() {
        for language in [
            HostLanguage::TypeScript,
            HostLanguage::Tsx,
            HostLanguage::JavaScript,
        ] {
            let kinds = language.node_kinds();
            assert!(kinds.is_string_like_kind("string"));
            assert!(kinds.is_string_like_kind("template_string"));
            assert!(!kinds.is_string_like_kind("identifier"));
        }
    }
}
