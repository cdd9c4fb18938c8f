//! Chat-facing summaries of successful results.

use c3_protocol::{Balance, LaunchRequest, LaunchResponse, UserProfile, WorkloadItem};

pub fn launched(resp: &LaunchResponse, req: &LaunchRequest) -> String {
    let expires = chrono::DateTime::from_timestamp(req.expires, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string())
        .unwrap_or_else(|| req.expires.to_string());
    format!(
        "Launched {} workload {} on https://{} (expires {expires}).",
        req.workload_type, resp.workload, resp.node
    )
}

pub fn stopped(workload: &str) -> String {
    format!("Stopped workload {workload}.")
}

pub fn workloads(items: &[WorkloadItem], running: Option<bool>) -> String {
    let label = match running {
        Some(true) => "running ",
        Some(false) => "stopped ",
        None => "",
    };
    if items.is_empty() {
        return format!("You have no {label}workloads.");
    }

    let mut out = format!("You have {} {label}workload(s):", items.len());
    for item in items {
        let expires = item
            .expires_at()
            .map(|t| t.format("%H:%M UTC").to_string())
            .unwrap_or_else(|| "-".into());
        let status = if item.status.is_empty() {
            if item.running { "running" } else { "stopped" }
        } else {
            item.status.as_str()
        };
        out.push_str(&format!(
            "\n- {} [{}] {status}, node {}, expires {expires}",
            item.workload,
            item.workload_type,
            if item.node.is_empty() { "-" } else { item.node.as_str() },
        ));
    }
    out
}

pub fn workload_types(types: &[String]) -> String {
    if types.is_empty() {
        return "No workload types are currently available.".into();
    }
    format!("Available workload types: {}.", types.join(", "))
}

pub fn balance(balance: &Balance) -> String {
    format!("Your Comput3 balance is {:.2}.", balance.balance)
}

pub fn profile(profile: &UserProfile, wallet: Option<&str>) -> String {
    let mut out = format!("Account {} (wallet {})", profile.user_uuid, profile.addr);
    if !profile.tags.is_empty() {
        out.push_str(&format!(", tags: {}", profile.tags.join(", ")));
    }
    out.push('.');
    if let Some(wallet) = wallet
        && !wallet.eq_ignore_ascii_case(&profile.addr)
    {
        out.push_str(&format!(" Note: configured wallet is {wallet}."));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use c3_protocol::WorkloadType;

    fn item(id: &str, running: bool) -> WorkloadItem {
        WorkloadItem {
            workload: id.into(),
            workload_type: WorkloadType::MediaFast,
            node: "a-b-c-d.comput3.ai".into(),
            status: String::new(),
            running,
            created: 0,
            expires: 1_700_000_000,
        }
    }

    #[test]
    fn launched_mentions_node_and_id() {
        let text = launched(
            &LaunchResponse {
                node: "firmly-widely-proud-gpu.comput3.ai".into(),
                workload: "7b69314d".into(),
                workload_key: "k".into(),
            },
            &LaunchRequest {
                workload_type: WorkloadType::MediaFast,
                expires: 1_700_000_000,
            },
        );
        assert!(text.contains("media:fast"));
        assert!(text.contains("https://firmly-widely-proud-gpu.comput3.ai"));
        assert!(text.contains("2023-11-14 22:13 UTC"));
    }

    #[test]
    fn empty_listing() {
        assert_eq!(workloads(&[], Some(true)), "You have no running workloads.");
        assert_eq!(workloads(&[], None), "You have no workloads.");
    }

    #[test]
    fn listing_lines() {
        let text = workloads(&[item("w1", true), item("w2", false)], None);
        assert!(text.starts_with("You have 2 workload(s):"));
        assert!(text.contains("- w1 [media:fast] running"));
        assert!(text.contains("- w2 [media:fast] stopped"));
    }

    #[test]
    fn profile_flags_wallet_mismatch() {
        let p = UserProfile {
            addr: "0xabc".into(),
            tags: vec![],
            user_uuid: "7b69314d-c88d-47d9-920c-ae827f6b7844".into(),
        };
        assert!(!profile(&p, Some("0xABC")).contains("Note"));
        assert!(profile(&p, Some("0xdef")).contains("configured wallet is 0xdef"));
    }
}
