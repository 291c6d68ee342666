use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Substrings that mark a snippet as Python.
const PYTHON_KEYWORDS: &[&str] = &["def ", "class ", "import ", "from ", "elif", "__init__"];

/// Substrings that mark a snippet as JavaScript.
const JAVASCRIPT_KEYWORDS: &[&str] = &["function", "const ", "let ", "=>", "console.log"];

/// Substrings that mark a snippet as Java.
const JAVA_KEYWORDS: &[&str] = &["public class", "private ", "protected ", "import java"];

/// Substrings that mark a snippet as C++.
const CPP_KEYWORDS: &[&str] = &["#include", "namespace", "std::", "template<"];

/// Substrings that mark a snippet as Go.
const GO_KEYWORDS: &[&str] = &["func ", "package ", "import (", "type "];

/// The closed set of languages a snippet can be classified into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Python, also the fallback when no keyword set matches
    #[default]
    Python,
    /// JavaScript (covers TypeScript-flavoured snippets too)
    Javascript,
    /// Java
    Java,
    /// C++
    Cpp,
    /// Go
    Go,
}

impl Language {
    /// Every supported language, in detection priority order. The first
    /// language whose keyword set matches wins, so this order must stay
    /// fixed to keep detection reproducible.
    pub const ALL: [Language; 5] = [
        Language::Python,
        Language::Javascript,
        Language::Java,
        Language::Cpp,
        Language::Go,
    ];

    /// Classifies a code snippet with substring keyword heuristics.
    ///
    /// The snippet is lower-cased and trimmed, then each keyword set in
    /// [`Language::ALL`] order is tested for substring containment. A
    /// snippet matching no set falls back to Python. Never fails, even on
    /// empty input.
    pub fn detect(code_snippet: &str) -> Language {
        let code = code_snippet.to_lowercase();
        let code = code.trim();

        Language::ALL
            .into_iter()
            .find(|language| {
                language
                    .keywords()
                    .iter()
                    .any(|keyword| code.contains(keyword))
            })
            .unwrap_or(Language::Python)
    }

    /// The keyword set whose presence marks a snippet as this language.
    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Language::Python => PYTHON_KEYWORDS,
            Language::Javascript => JAVASCRIPT_KEYWORDS,
            Language::Java => JAVA_KEYWORDS,
            Language::Cpp => CPP_KEYWORDS,
            Language::Go => GO_KEYWORDS,
        }
    }

    /// Canonical lower-case key, used for catalog lookups and code fences.
    pub fn key(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Go => "go",
        }
    }

    /// Title-cased name used in report headers.
    pub fn title(&self) -> &'static str {
        match self {
            Language::Python => "Python",
            Language::Javascript => "Javascript",
            Language::Java => "Java",
            Language::Cpp => "Cpp",
            Language::Go => "Go",
        }
    }

    /// Upper-cased name used in prompt framing.
    pub fn upper(&self) -> &'static str {
        match self {
            Language::Python => "PYTHON",
            Language::Javascript => "JAVASCRIPT",
            Language::Java => "JAVA",
            Language::Cpp => "CPP",
            Language::Go => "GO",
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
