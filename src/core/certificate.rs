//! Sample Action Certificate minted by the demo promotion

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::panel::{CanaryPercent, DEMO_POLICY_ID, DEMO_USE_CASE};

pub const CERTIFICATE_TYPE: &str = "trustplane.action_certificate.v1";

/// Dataset the demo evaluation runs against
pub const EVALUATION_CONTRACT: &str = "golden:v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionCertificate {
    #[serde(rename = "type")]
    pub kind: String,
    pub action_id: String,
    pub use_case: String,
    pub timestamp: DateTime<Utc>,
    pub request_hash: String,
    pub response_hash: String,
    pub policy: PolicyRef,
    pub evaluation: Evaluation,
    pub approvals: Vec<String>,
    pub rollout: Rollout,
    pub budget_snapshot: BudgetSnapshot,
    pub slo_snapshot: SloSnapshot,
    pub model: ModelInfo,
    pub tooling: Tooling,
    pub signatures: Vec<Signature>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRef {
    pub id: String,
    pub hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub contract: String,
    pub metrics: EvaluationMetrics,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetrics {
    pub accuracy: f64,
    pub drift_p95: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rollout {
    pub percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    pub monthly_budget_usd: u32,
    pub spent_usd: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SloSnapshot {
    pub latency_p95_ms: u32,
    pub availability: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub provider: String,
    pub version: String,
    pub route: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooling {
    pub connectors: Vec<String>,
    pub prompt_hash: String,
    pub pipeline_version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub alg: String,
    pub key_id: String,
    pub sig: String,
    pub format: String,
}

impl ActionCertificate {
    /// Mint a certificate for a promotion at `canary` percent under the given
    /// policy source. The policy hash is the digest of that source.
    pub fn mint(canary: CanaryPercent, policy_source: &str) -> Self {
        let action_id = new_action_id();
        let timestamp = Utc::now();
        let request_hash = digest(
            format!("{}:{}:{}", action_id, DEMO_USE_CASE, canary.get()).as_bytes(),
        );
        let response_hash = digest(format!("{}:{}", request_hash, timestamp).as_bytes());

        Self {
            kind: CERTIFICATE_TYPE.to_string(),
            action_id,
            use_case: DEMO_USE_CASE.to_string(),
            timestamp,
            request_hash: abbreviate(&request_hash),
            response_hash: abbreviate(&response_hash),
            policy: PolicyRef {
                id: DEMO_POLICY_ID.to_string(),
                hash: abbreviate(&digest(policy_source.as_bytes())),
            },
            evaluation: Evaluation {
                contract: EVALUATION_CONTRACT.to_string(),
                metrics: EvaluationMetrics {
                    accuracy: 0.98,
                    drift_p95: "3.1%".to_string(),
                },
                passed: true,
            },
            approvals: vec!["security".to_string(), "finops".to_string()],
            rollout: Rollout {
                percent: canary.get(),
            },
            budget_snapshot: BudgetSnapshot {
                monthly_budget_usd: 25_000,
                spent_usd: 8_300,
            },
            slo_snapshot: SloSnapshot {
                latency_p95_ms: 910,
                availability: "99.95%".to_string(),
            },
            model: ModelInfo {
                provider: "vendor:family".to_string(),
                version: "2025-08-15".to_string(),
                route: "us-east".to_string(),
            },
            tooling: Tooling {
                connectors: vec![
                    "snowflake:read_first".to_string(),
                    "servicenow:write_gated".to_string(),
                ],
                prompt_hash: abbreviate(&digest(
                    format!("{}:{}", DEMO_USE_CASE, EVALUATION_CONTRACT).as_bytes(),
                )),
                pipeline_version: "r2025.09.1".to_string(),
            },
            signatures: vec![Signature {
                alg: "Ed25519".to_string(),
                key_id: "k-abc123".to_string(),
                sig: "base64:…".to_string(),
                format: "COSE_Sign1".to_string(),
            }],
        }
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// `act_` followed by eight random lowercase hex characters
fn new_action_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("act_{}", &id[..8])
}

fn digest(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

/// `sha256:2a6e…8d4b` style display form of a hex digest
fn abbreviate(hex_digest: &str) -> String {
    let head = &hex_digest[..4];
    let tail = &hex_digest[hex_digest.len() - 4..];
    format!("sha256:{}…{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mint_fields() {
        let cert = ActionCertificate::mint(CanaryPercent::new(15), "version: 1");

        assert_eq!(cert.kind, CERTIFICATE_TYPE);
        assert_eq!(cert.use_case, DEMO_USE_CASE);
        assert_eq!(cert.rollout.percent, 15);
        assert_eq!(cert.policy.id, DEMO_POLICY_ID);
        assert_eq!(cert.approvals, vec!["security", "finops"]);
        assert!(cert.evaluation.passed);
    }

    #[test]
    fn test_action_id_format() {
        let cert = ActionCertificate::mint(CanaryPercent::default(), "");
        assert!(cert.action_id.starts_with("act_"));
        assert_eq!(cert.action_id.len(), 12);
        assert!(cert.action_id[4..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_action_ids_differ() {
        let a = ActionCertificate::mint(CanaryPercent::default(), "");
        let b = ActionCertificate::mint(CanaryPercent::default(), "");
        assert_ne!(a.action_id, b.action_id);
    }

    #[test]
    fn test_policy_hash_tracks_source() {
        let a = ActionCertificate::mint(CanaryPercent::default(), "pct: 10");
        let b = ActionCertificate::mint(CanaryPercent::default(), "pct: 10");
        let c = ActionCertificate::mint(CanaryPercent::default(), "pct: 20");

        assert_eq!(a.policy.hash, b.policy.hash);
        assert_ne!(a.policy.hash, c.policy.hash);
    }

    #[test]
    fn test_abbreviate() {
        let full = digest(b"abc");
        assert_eq!(
            full,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_eq!(abbreviate(&full), "sha256:ba78…15ad");
    }

    #[test]
    fn test_json_uses_type_key() {
        let cert = ActionCertificate::mint(CanaryPercent::default(), "");
        let json: serde_json::Value = serde_json::from_str(&cert.to_pretty_json()).unwrap();

        assert_eq!(json["type"], CERTIFICATE_TYPE);
        assert_eq!(json["evaluation"]["metrics"]["drift_p95"], "3.1%");
        assert_eq!(json["signatures"][0]["format"], "COSE_Sign1");
        assert!(json.get("kind").is_none());
    }
}
