//! Naive code formatter.
//!
//! A fixed sequence of regex substitutions: break the line after `;`,
//! open braces onto their own indented continuation, closing braces onto
//! a fresh line, and a break after `,`. A cleanup pass trims every line
//! and drops blanks.
//!
//! This is a cosmetic transform, not a parser. It will happily mangle
//! string literals or comments that contain `;{},` characters; that is a
//! known limitation of the tool, carried over deliberately.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ToolError;

/// Languages the formatter recognises.
///
/// Only JavaScript input is actually transformed; the other languages
/// pass through unchanged and exist to pick the right file extension
/// when the output is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    JavaScript,
    TypeScript,
    Html,
    Css,
    Json,
    Python,
}

impl Language {
    /// File extension used when saving formatted output.
    pub fn extension(self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "typescript",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Python => "python",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Language::JavaScript),
            "typescript" | "ts" => Ok(Language::TypeScript),
            "html" => Ok(Language::Html),
            "css" => Ok(Language::Css),
            "json" => Ok(Language::Json),
            "python" | "py" => Ok(Language::Python),
            _ => Err(ToolError::UnknownLanguage(s.to_string())),
        }
    }
}

// Substitution table, applied in order over the whole input.
static SUBSTITUTIONS: LazyLock<[(Regex, &'static str); 4]> = LazyLock::new(|| {
    [
        (Regex::new(";").expect("literal pattern"), ";\n"),
        (Regex::new(r"\{").expect("literal pattern"), " {\n  "),
        (Regex::new(r"\}").expect("literal pattern"), "\n}"),
        (Regex::new(",").expect("literal pattern"), ",\n  "),
    ]
});

/// Apply the naive formatting transform.
///
/// Pure and stateless: the same input always yields the same output.
/// Non-JavaScript input is returned unchanged.
pub fn format(input: &str, language: Language) -> String {
    if language != Language::JavaScript {
        return input.to_string();
    }

    let mut text = input.to_string();
    for (pattern, replacement) in SUBSTITUTIONS.iter() {
        text = pattern.replace_all(&text, *replacement).into_owned();
    }

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
