//! Field extractors: pure functions from free text to optional typed values.
//!
//! Every extractor is total: any input (including the empty string) yields a
//! value or `None`, never a panic.

use c3_protocol::WorkloadType;

use crate::patterns::{
    DURATION_PATTERNS, DurationUnit, ID_FALLBACK_PATTERNS, IdCapture, NODE_NAME_PATTERN,
    NOT_RUNNING_PATTERN, RUNNING_PATTERN, TYPE_HEURISTICS, TYPE_PATTERNS, UUID_PATTERN,
};

/// Find the workload type mentioned in `text`.
///
/// Direct patterns are tried type by type in declaration order; keyword
/// heuristics only run when none of them match.
pub fn extract_workload_type(text: &str) -> Option<WorkloadType> {
    for (workload_type, patterns) in TYPE_PATTERNS.iter() {
        if let Some(pattern) = patterns.iter().find(|p| p.is_match(text)) {
            tracing::trace!(%workload_type, pattern = pattern.as_str(), "direct type match");
            return Some(workload_type.clone());
        }
    }

    TYPE_HEURISTICS
        .iter()
        .find(|(keywords, _)| keywords.is_match(text))
        .map(|(keywords, workload_type)| {
            tracing::trace!(%workload_type, keywords = keywords.as_str(), "heuristic type match");
            workload_type.clone()
        })
}

/// Find a lifetime in minutes, or return `default` if none is mentioned.
pub fn extract_expiration_minutes(text: &str, default: u32) -> u32 {
    for (pattern, unit) in DURATION_PATTERNS.iter() {
        let Some(caps) = pattern.captures(text) else {
            continue;
        };
        // Amounts too large for u32 are skipped rather than truncated.
        let Ok(amount) = caps[1].parse::<u32>() else {
            continue;
        };
        return match unit {
            DurationUnit::Minutes => amount,
            DurationUnit::Hours => amount.saturating_mul(60),
        };
    }
    default
}

/// Find a workload identifier: UUID first, then node name, then loose forms.
pub fn extract_workload_id(text: &str) -> Option<String> {
    if let Some(m) = UUID_PATTERN.find(text) {
        return Some(m.as_str().to_string());
    }

    if let Some(m) = NODE_NAME_PATTERN.find(text) {
        return Some(m.as_str().to_string());
    }

    ID_FALLBACK_PATTERNS
        .iter()
        .find_map(|(pattern, capture)| {
            let caps = pattern.captures(text)?;
            match capture {
                IdCapture::Verbatim => Some(caps[0].to_string()),
                IdCapture::WrkPrefixed => Some(format!("wrk_{}", &caps[1])),
                IdCapture::Group => Some(caps[1].to_string()),
            }
        })
}

/// Running-state filter for workload listings. `None` means list everything.
pub fn extract_running_filter(text: &str) -> Option<bool> {
    if NOT_RUNNING_PATTERN.is_match(text) {
        Some(false)
    } else if RUNNING_PATTERN.is_match(text) {
        Some(true)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Workload type ───────────────────────────────────────────

    #[test]
    fn exact_tags_map_to_themselves() {
        for t in WorkloadType::KNOWN {
            assert_eq!(extract_workload_type(t.as_str()), Some(t.clone()), "{t}");
        }
    }

    #[test]
    fn exact_tags_are_case_insensitive() {
        assert_eq!(
            extract_workload_type("LAUNCH OLLAMA_WEBUI:LARGE NOW"),
            Some(WorkloadType::OllamaWebuiLarge)
        );
    }

    #[test]
    fn spaced_and_reordered_variants() {
        assert_eq!(
            extract_workload_type("start an ollama webui coder box"),
            Some(WorkloadType::OllamaWebuiCoder)
        );
        assert_eq!(
            extract_workload_type("I want fast media please"),
            Some(WorkloadType::MediaFast)
        );
        assert_eq!(
            extract_workload_type("give me a large ollama"),
            Some(WorkloadType::OllamaWebuiLarge)
        );
        assert_eq!(
            extract_workload_type("llama coder for an hour"),
            Some(WorkloadType::LlamaWebuiCoder)
        );
    }

    #[test]
    fn first_declared_type_wins_on_ties() {
        // Both media:fast and ollama_webui:fast are named; media is declared first.
        assert_eq!(
            extract_workload_type("ollama_webui:fast or media:fast, whichever"),
            Some(WorkloadType::MediaFast)
        );
    }

    #[test]
    fn heuristics_in_priority_order() {
        assert_eq!(
            extract_workload_type("something for coding"),
            Some(WorkloadType::OllamaWebuiCoder)
        );
        assert_eq!(
            extract_workload_type("I need to transcode some video"),
            Some(WorkloadType::MediaFast)
        );
        assert_eq!(
            extract_workload_type("the most powerful one you have"),
            Some(WorkloadType::OllamaWebuiLarge)
        );
        assert_eq!(
            extract_workload_type("something quick"),
            Some(WorkloadType::OllamaWebuiFast)
        );
        // Coding outranks size.
        assert_eq!(
            extract_workload_type("a big machine for programming"),
            Some(WorkloadType::OllamaWebuiCoder)
        );
    }

    #[test]
    fn no_type_mentioned() {
        assert_eq!(extract_workload_type("hello there, how are you?"), None);
        assert_eq!(extract_workload_type(""), None);
        // Keywords only count as whole words.
        assert_eq!(extract_workload_type("barcode breakfast"), None);
    }

    // ── Expiration ──────────────────────────────────────────────

    #[test]
    fn expires_in_minutes() {
        assert_eq!(extract_expiration_minutes("expires in 45 minutes", 10), 45);
    }

    #[test]
    fn hours_are_converted() {
        assert_eq!(extract_expiration_minutes("for 2 hours", 10), 120);
        assert_eq!(extract_expiration_minutes("keep it up 1 hr", 10), 60);
    }

    #[test]
    fn minute_variants() {
        assert_eq!(extract_expiration_minutes("for 30 minutes", 10), 30);
        assert_eq!(extract_expiration_minutes("15 mins expiry", 10), 15);
        assert_eq!(extract_expiration_minutes("about 20min", 10), 20);
        assert_eq!(extract_expiration_minutes("1 minute", 10), 1);
    }

    #[test]
    fn minutes_pattern_precedes_hours() {
        assert_eq!(
            extract_expiration_minutes("2 hours, no wait, for 90 minutes", 10),
            90
        );
    }

    #[test]
    fn no_duration_returns_default() {
        assert_eq!(extract_expiration_minutes("no duration mentioned", 10), 10);
        assert_eq!(extract_expiration_minutes("", 25), 25);
    }

    #[test]
    fn oversized_amount_falls_back_to_default() {
        assert_eq!(
            extract_expiration_minutes("for 99999999999999 minutes", 10),
            10
        );
    }

    // ── Workload id ─────────────────────────────────────────────

    #[test]
    fn uuid_returned_verbatim() {
        let id = "7b69314d-c88d-47d9-920c-ae827f6b7844";
        assert_eq!(extract_workload_id(id).as_deref(), Some(id));
        assert_eq!(
            extract_workload_id("Stop my workload 7B69314D-C88D-47D9-920C-AE827F6B7844 now")
                .as_deref(),
            Some("7B69314D-C88D-47D9-920C-AE827F6B7844")
        );
    }

    #[test]
    fn node_name_returned_verbatim() {
        let node = "firmly-widely-proud-gpu.comput3.ai";
        assert_eq!(extract_workload_id(node).as_deref(), Some(node));
        assert_eq!(
            extract_workload_id("please shut down firmly-widely-proud-gpu.comput3.ai").as_deref(),
            Some(node)
        );
    }

    #[test]
    fn uuid_preferred_over_node_name() {
        let text = "firmly-widely-proud-gpu.comput3.ai runs 7b69314d-c88d-47d9-920c-ae827f6b7844";
        assert_eq!(
            extract_workload_id(text).as_deref(),
            Some("7b69314d-c88d-47d9-920c-ae827f6b7844")
        );
    }

    #[test]
    fn wrk_forms() {
        assert_eq!(
            extract_workload_id("stop wrk_abc123").as_deref(),
            Some("wrk_abc123")
        );
        assert_eq!(
            extract_workload_id("stop wrk abc123").as_deref(),
            Some("wrk_abc123")
        );
    }

    #[test]
    fn workload_prefix_form() {
        assert_eq!(
            extract_workload_id("terminate workload: gpu-17").as_deref(),
            Some("gpu-17")
        );
        // Sentence punctuation is not part of the id.
        assert_eq!(
            extract_workload_id("Please stop workload: gpu-17.").as_deref(),
            Some("gpu-17")
        );
    }

    #[test]
    fn four_word_hyphenated_form() {
        assert_eq!(
            extract_workload_id("stop firmly-widely-proud-gpu").as_deref(),
            Some("firmly-widely-proud-gpu")
        );
        // Known false positive of the loose form.
        assert_eq!(
            extract_workload_id("a state-of-the-art model").as_deref(),
            Some("state-of-the-art")
        );
    }

    #[test]
    fn no_id_present() {
        assert_eq!(extract_workload_id("no id here"), None);
        assert_eq!(extract_workload_id(""), None);
    }

    // ── Stateless re-runs ───────────────────────────────────────

    #[test]
    fn rerun_on_own_output_is_stable() {
        let text = "Launch a media:fast workload for 30 minutes";
        let t = extract_workload_type(text).unwrap();
        assert_eq!(
            extract_workload_type(&format!("{t} {text}")),
            Some(t.clone())
        );

        let text = "Stop my workload 7b69314d-c88d-47d9-920c-ae827f6b7844";
        let id = extract_workload_id(text).unwrap();
        assert_eq!(extract_workload_id(&format!("{id} {text}")), Some(id));
    }

    // ── Running filter ──────────────────────────────────────────

    #[test]
    fn running_filter() {
        assert_eq!(extract_running_filter("list my running workloads"), Some(true));
        assert_eq!(extract_running_filter("show active workloads"), Some(true));
        assert_eq!(extract_running_filter("show stopped workloads"), Some(false));
        assert_eq!(extract_running_filter("list all workloads"), None);
    }
}
