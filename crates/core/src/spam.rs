//! Heuristic spam scoring for inbound contact messages.
//!
//! A handful of independent signals each add a fixed weight and a named
//! reason tag; the verdict is a simple threshold on the sum. The honeypot
//! alone is decisive, as is any pair of the stronger content signals.
//! Pure and synchronous: every input maps to exactly one verdict.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Weights, threshold, reason tags
// ---------------------------------------------------------------------------

pub const WEIGHT_HONEYPOT: i32 = 100;
pub const WEIGHT_MANY_LINKS: i32 = 30;
pub const WEIGHT_VERY_SHORT_MESSAGE: i32 = 15;
pub const WEIGHT_EMPTY_SUBJECT: i32 = 5;
pub const WEIGHT_SPAM_KEYWORDS: i32 = 25;

/// Scores at or above this are classified as spam.
pub const SPAM_THRESHOLD: i32 = 40;

/// A message body with at least this many URL-like substrings is suspect.
pub const MANY_LINKS_MIN: usize = 2;

/// Trimmed message bodies shorter than this (in chars) are suspect.
pub const MIN_MESSAGE_CHARS: usize = 12;

pub const REASON_HONEYPOT: &str = "honeypot_filled";
pub const REASON_MANY_LINKS: &str = "many_links";
pub const REASON_VERY_SHORT: &str = "very_short_message";
pub const REASON_EMPTY_SUBJECT: &str = "empty_subject";
pub const REASON_KEYWORDS: &str = "spam_keywords";

/// Keyword list checked case-insensitively on word boundaries.
pub const SPAM_KEYWORDS: &[&str] = &["crypto", "seo", "backlinks", "casino", "viagra", "loan"];

/// URL-like substrings: scheme-prefixed or bare `www.` hosts.
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)https?://\S+|\bwww\.\S+").expect("valid regex"));

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(r"(?i)\b({})\b", SPAM_KEYWORDS.join("|"));
    Regex::new(&pattern).expect("valid regex")
});

// ---------------------------------------------------------------------------
// Verdict
// ---------------------------------------------------------------------------

/// The `(is_spam, score, reasons)` triple derived from a submission.
///
/// `reasons` lists the triggered signal tags in evaluation order.
#[derive(Debug, Clone, Serialize)]
pub struct SpamVerdict {
    pub is_spam: bool,
    pub score: i32,
    pub reasons: Vec<&'static str>,
}

/// Score a contact submission.
///
/// `honeypot` is the hidden form field real users never fill; `subject`
/// is the optional subject line; `message` is the message body.
pub fn classify(honeypot: Option<&str>, subject: Option<&str>, message: &str) -> SpamVerdict {
    let mut score = 0;
    let mut reasons = Vec::new();

    if honeypot.is_some_and(|v| !v.trim().is_empty()) {
        score += WEIGHT_HONEYPOT;
        reasons.push(REASON_HONEYPOT);
    }

    if URL_RE.find_iter(message).count() >= MANY_LINKS_MIN {
        score += WEIGHT_MANY_LINKS;
        reasons.push(REASON_MANY_LINKS);
    }

    if message.trim().chars().count() < MIN_MESSAGE_CHARS {
        score += WEIGHT_VERY_SHORT_MESSAGE;
        reasons.push(REASON_VERY_SHORT);
    }

    if subject.is_none_or(|s| s.trim().is_empty()) {
        score += WEIGHT_EMPTY_SUBJECT;
        reasons.push(REASON_EMPTY_SUBJECT);
    }

    if KEYWORD_RE.is_match(message) {
        score += WEIGHT_SPAM_KEYWORDS;
        reasons.push(REASON_KEYWORDS);
    }

    SpamVerdict {
        is_spam: score >= SPAM_THRESHOLD,
        score,
        reasons,
    }
}
