use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Programming language accepted for code runs.
///
/// Each variant maps to exactly one runtime on the judge service, identified
/// by the numeric `language_id` the judge understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Java,
    JavaScript,
    Cpp,
    C,
    CSharp,
    Kotlin,
    TypeScript,
    Ruby,
    Sql,
}

impl Language {
    /// All supported languages, in display order.
    pub const ALL: &'static [Language] = &[
        Self::Python,
        Self::Java,
        Self::JavaScript,
        Self::Cpp,
        Self::C,
        Self::CSharp,
        Self::Kotlin,
        Self::TypeScript,
        Self::Ruby,
        Self::Sql,
    ];

    /// Numeric runtime identifier understood by the judge.
    pub fn judge_id(&self) -> u32 {
        match self {
            Self::Python => 71,
            Self::Java => 62,
            Self::JavaScript => 63,
            Self::Cpp => 54,
            Self::C => 50,
            Self::CSharp => 51,
            Self::Kotlin => 78,
            Self::TypeScript => 74,
            Self::Ruby => 72,
            Self::Sql => 82,
        }
    }

    /// Stable lowercase key, used in requests and stored on submissions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Java => "java",
            Self::JavaScript => "javascript",
            Self::Cpp => "cpp",
            Self::C => "c",
            Self::CSharp => "csharp",
            Self::Kotlin => "kotlin",
            Self::TypeScript => "typescript",
            Self::Ruby => "ruby",
            Self::Sql => "sql",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::Java => "Java",
            Self::JavaScript => "JavaScript",
            Self::Cpp => "C++",
            Self::C => "C",
            Self::CSharp => "C#",
            Self::Kotlin => "Kotlin",
            Self::TypeScript => "TypeScript",
            Self::Ruby => "Ruby",
            Self::Sql => "SQL",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error when a language key has no judge mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLanguage {
    invalid: String,
}

impl UnsupportedLanguage {
    pub fn key(&self) -> &str {
        &self.invalid
    }
}

impl fmt::Display for UnsupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported language '{}'. Valid values: {}",
            self.invalid,
            Language::ALL
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for UnsupportedLanguage {}

impl FromStr for Language {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|l| l.as_str() == s.trim().to_ascii_lowercase())
            .ok_or_else(|| UnsupportedLanguage {
                invalid: s.to_string(),
            })
    }
}
