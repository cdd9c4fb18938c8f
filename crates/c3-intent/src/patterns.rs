//! Pattern library: static regex tables consulted by the field extractors.
//!
//! All tables are built once on first use and never mutated. Every pattern is
//! case-insensitive. The patterns are literals, so compilation cannot fail at
//! runtime; a typo here fails the unit tests below.

use regex::Regex;
use std::sync::LazyLock;

use c3_protocol::WorkloadType;

/// Node names handed out by the service end in this suffix.
pub const NODE_DOMAIN_SUFFIX: &str = ".comput3.ai";

fn re(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap()
}

// ── Workload types ──────────────────────────────────────────────

/// Direct mention patterns per workload type, in declaration order.
///
/// When text mentions more than one type, the first type in this table with
/// a matching pattern wins.
pub static TYPE_PATTERNS: LazyLock<Vec<(WorkloadType, Vec<Regex>)>> = LazyLock::new(|| {
    vec![
        (
            WorkloadType::MediaFast,
            vec![
                re(r"(?i)\bmedia:fast\b"),
                re(r"(?i)\bmedia[\s_-]+fast\b"),
                re(r"(?i)\bfast[\s_-]+media\b"),
            ],
        ),
        (
            WorkloadType::OllamaWebuiCoder,
            vec![
                re(r"(?i)\bollama_webui:coder\b"),
                re(r"(?i)\bollama[\s_-]*web[\s_-]*ui[\s:_-]+coder\b"),
                re(r"(?i)\bollama[\s_-]+coder\b"),
                re(r"(?i)\bcoder[\s_-]+ollama\b"),
            ],
        ),
        (
            WorkloadType::OllamaWebuiFast,
            vec![
                re(r"(?i)\bollama_webui:fast\b"),
                re(r"(?i)\bollama[\s_-]*web[\s_-]*ui[\s:_-]+fast\b"),
                re(r"(?i)\bollama[\s_-]+fast\b"),
                re(r"(?i)\bfast[\s_-]+ollama\b"),
            ],
        ),
        (
            WorkloadType::OllamaWebuiLarge,
            vec![
                re(r"(?i)\bollama_webui:large\b"),
                re(r"(?i)\bollama[\s_-]*web[\s_-]*ui[\s:_-]+large\b"),
                re(r"(?i)\bollama[\s_-]+large\b"),
                re(r"(?i)\blarge[\s_-]+ollama\b"),
            ],
        ),
        (
            WorkloadType::LlamaWebuiCoder,
            vec![
                re(r"(?i)\bllama_webui:coder\b"),
                re(r"(?i)\bllama[\s_-]*web[\s_-]*ui[\s:_-]+coder\b"),
                re(r"(?i)\bllama[\s_-]+coder\b"),
                re(r"(?i)\bcoder[\s_-]+llama\b"),
            ],
        ),
    ]
});

/// Keyword fallbacks tried in priority order when no direct pattern matches.
pub static TYPE_HEURISTICS: LazyLock<Vec<(Regex, WorkloadType)>> = LazyLock::new(|| {
    vec![
        (
            re(r"(?i)\b(?:code|coding|coder|programming|developer)\b"),
            WorkloadType::OllamaWebuiCoder,
        ),
        (
            re(r"(?i)\b(?:media|video|audio)\b"),
            WorkloadType::MediaFast,
        ),
        (
            re(r"(?i)\b(?:large|big|powerful)\b"),
            WorkloadType::OllamaWebuiLarge,
        ),
        (
            re(r"(?i)\b(?:fast|quick|speed)\b"),
            WorkloadType::OllamaWebuiFast,
        ),
    ]
});

// ── Durations ───────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Minutes,
    Hours,
}

/// Duration patterns; first match wins. Group 1 is the integer amount.
pub static DURATION_PATTERNS: LazyLock<Vec<(Regex, DurationUnit)>> = LazyLock::new(|| {
    vec![
        (
            re(r"(?i)\bexpires?\s+in\s+(\d+)\s*min(?:ute)?s?\b"),
            DurationUnit::Minutes,
        ),
        (
            re(r"(?i)\bfor\s+(\d+)\s*min(?:ute)?s?\b"),
            DurationUnit::Minutes,
        ),
        (
            re(r"(?i)\b(\d+)\s*min(?:ute)?s?\s+expir"),
            DurationUnit::Minutes,
        ),
        (re(r"(?i)\b(\d+)\s*min(?:ute)?s?\b"), DurationUnit::Minutes),
        (re(r"(?i)\b(\d+)\s*(?:hours?|hrs?)\b"), DurationUnit::Hours),
    ]
});

// ── Workload identifiers ────────────────────────────────────────

pub static UUID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    re(r"(?i)\b[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}\b")
});

pub static NODE_NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)\b[a-z0-9-]+\.comput3\.ai\b"));

/// How a fallback id match becomes the returned id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdCapture {
    /// Whole match, verbatim.
    Verbatim,
    /// Group 1, re-prefixed with `wrk_`.
    WrkPrefixed,
    /// Group 1, verbatim.
    Group,
}

/// Loose id forms tried after UUID and node name, in order.
///
/// The four-word hyphenated form also matches ordinary phrases such as
/// "state-of-the-art"; that recall/precision trade is accepted.
pub static ID_FALLBACK_PATTERNS: LazyLock<Vec<(Regex, IdCapture)>> = LazyLock::new(|| {
    vec![
        (re(r"(?i)\bwrk_[a-z0-9]+\b"), IdCapture::Verbatim),
        (re(r"(?i)\bwrk[\s:-]+([a-z0-9]+)\b"), IdCapture::WrkPrefixed),
        (re(r"(?i)\bworkload:\s*([a-z0-9_-]+)"), IdCapture::Group),
        (
            re(r"(?i)\b[a-z]+-[a-z]+-[a-z]+-[a-z]+\b"),
            IdCapture::Verbatim,
        ),
    ]
});

// ── List filter ─────────────────────────────────────────────────

pub static NOT_RUNNING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)\b(?:stopped|expired|inactive|terminated|finished)\b"));

pub static RUNNING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| re(r"(?i)\b(?:running|active|live|current)\b"));
