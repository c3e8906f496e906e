//! Resume Extractor - keyword and contact extraction from raw resume text
//!
//! Extraction is deliberately shallow:
//! - Skills are found by case-insensitive substring search over a fixed keyword list
//! - Email and phone are the first match of a regular expression
//! - Counts are characters and whitespace-delimited words
//!
//! Substring matching has no word boundaries, so "pythonic" yields `python`
//! and "javascript" also yields `java`.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Placeholder returned when a contact field has no match
pub const NOT_FOUND: &str = "Not found";

/// Skill keywords, checked in this order
pub const SKILL_KEYWORDS: &[&str] = &[
    "python",
    "javascript",
    "java",
    "react",
    "node.js",
    "sql",
    "html",
    "css",
    "aws",
    "docker",
    "kubernetes",
    "git",
    "machine learning",
    "data science",
    "ui/ux",
    "design",
];

/// `local@domain.tld` with a letters-only top-level segment of two or more
pub static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});

/// Optional country code, optional parenthesized area code, then 3-3-4 digits
pub static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}").unwrap()
});

/// Result of analyzing a resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    /// Matched keywords, in keyword-list order
    pub skills: Vec<String>,
    /// First email-like token, or [`NOT_FOUND`]
    pub email: String,
    /// First phone-like token, or [`NOT_FOUND`]
    pub phone: String,
    /// Number of characters in the raw input
    pub text_length: usize,
    /// Number of whitespace-delimited tokens
    pub word_count: usize,
}

impl ResumeAnalysis {
    pub fn has_email(&self) -> bool {
        self.email != NOT_FOUND
    }

    pub fn has_phone(&self) -> bool {
        self.phone != NOT_FOUND
    }

    /// Skills as a comma-separated list, or "None"
    pub fn skills_display(&self) -> String {
        if self.skills.is_empty() {
            "None".to_string()
        } else {
            self.skills.join(", ")
        }
    }
}

/// Analyze raw resume text. Never fails; absent fields use [`NOT_FOUND`].
pub fn analyze(text: &str) -> ResumeAnalysis {
    ResumeAnalysis {
        skills: find_skills(text),
        email: first_match(&EMAIL_REGEX, text),
        phone: first_match(&PHONE_REGEX, text),
        text_length: text.chars().count(),
        word_count: text.split_whitespace().count(),
    }
}

/// Keywords occurring anywhere in the lower-cased text
pub fn find_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    SKILL_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}

fn first_match(pattern: &Regex, text: &str) -> String {
    pattern
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_and_skills() {
        let analysis = analyze(
            "Contact me at jane.doe@example.com or 415-555-0100. I know Python and React.",
        );
        assert_eq!(analysis.email, "jane.doe@example.com");
        assert_eq!(analysis.phone, "415-555-0100");
        assert!(analysis.skills.contains(&"python".to_string()));
        assert!(analysis.skills.contains(&"react".to_string()));
        assert_eq!(analysis.word_count, 11);
    }

    #[test]
    fn test_empty_input() {
        let analysis = analyze("");
        assert!(analysis.skills.is_empty());
        assert_eq!(analysis.email, NOT_FOUND);
        assert_eq!(analysis.phone, NOT_FOUND);
        assert_eq!(analysis.text_length, 0);
        assert_eq!(analysis.word_count, 0);
        assert!(!analysis.has_email());
        assert!(!analysis.has_phone());
        assert_eq!(analysis.skills_display(), "None");
    }

    #[test]
    fn test_whitespace_only_has_no_words() {
        let analysis = analyze(" \n\t  ");
        assert_eq!(analysis.word_count, 0);
        assert_eq!(analysis.text_length, 5);
    }

    #[test]
    fn test_substring_matching_is_not_word_bounded() {
        let analysis = analyze("I love pythonic code");
        assert_eq!(analysis.skills, vec!["python"]);

        // "javascript" contains "java"
        let analysis = analyze("JavaScript");
        assert_eq!(analysis.skills, vec!["javascript", "java"]);
    }

    #[test]
    fn test_skills_follow_keyword_order() {
        let analysis = analyze("Docker, SQL, Git and some UI/UX design work");
        assert_eq!(analysis.skills, vec!["sql", "docker", "git", "ui/ux", "design"]);
        assert_eq!(analysis.skills_display(), "sql, docker, git, ui/ux, design");
    }

    #[test]
    fn test_text_length_counts_characters() {
        let analysis = analyze("Zo\u{eb} M\u{fc}ller");
        assert_eq!(analysis.text_length, 10);
        assert_eq!(analysis.word_count, 2);
    }

    #[test]
    fn test_phone_formats() {
        assert_eq!(analyze("call (415) 555-0100 today").phone, "(415) 555-0100");
        assert_eq!(analyze("tel: +1 415.555.0100").phone, "+1 415.555.0100");
        assert_eq!(analyze("4155550100").phone, "4155550100");
        assert_eq!(analyze("ext 555-01").phone, NOT_FOUND);
    }

    #[test]
    fn test_first_email_wins() {
        let analysis = analyze("a@b.io then second.person+jobs@mail.example.org");
        assert_eq!(analysis.email, "a@b.io");
        assert_eq!(analyze("user@localhost").email, NOT_FOUND);
    }
}
