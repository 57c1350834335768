//! Demo control panel state
//!
//! Everything the landing-page control panel shows lives in [`PanelState`]:
//! the active tab, the canary slider, the simulated run status, the event log
//! and the progress bar. The timed tour in [`crate::core::tour`] and direct
//! user input are the only writers.

use serde::{Deserialize, Serialize};

use super::certificate::ActionCertificate;

/// Lowest canary percentage the slider accepts
pub const MIN_CANARY_PERCENT: u8 = 1;

/// Highest canary percentage the slider accepts
pub const MAX_CANARY_PERCENT: u8 = 50;

/// Slider value on mount
pub const DEFAULT_CANARY_PERCENT: u8 = 10;

/// Progress bar ceiling after a promotion
const PROMOTION_PROGRESS_CAP: u8 = 85;

/// Use case every demo command and certificate refers to
pub const DEMO_USE_CASE: &str = "ap-matching";

/// Policy id shown throughout the demo
pub const DEMO_POLICY_ID: &str = "prod-us-1";

/// Placeholder rendered in the certificate tab before a promotion
pub const CERTIFICATE_PLACEHOLDER: &str = "// run promote to mint a certificate";

/// Tabs of the control panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PanelTab {
    #[default]
    Summary,
    Policy,
    Sdk,
    Certificate,
}

impl PanelTab {
    pub const ALL: [PanelTab; 4] = [
        PanelTab::Summary,
        PanelTab::Policy,
        PanelTab::Sdk,
        PanelTab::Certificate,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PanelTab::Summary => "Summary",
            PanelTab::Policy => "Policy",
            PanelTab::Sdk => "SDK",
            PanelTab::Certificate => "Certificate",
        }
    }

    /// DOM id of the tab button
    pub fn tab_id(&self) -> &'static str {
        match self {
            PanelTab::Summary => "tab-summary",
            PanelTab::Policy => "tab-policy",
            PanelTab::Sdk => "tab-sdk",
            PanelTab::Certificate => "tab-cert",
        }
    }

    /// DOM id of the tab panel the button controls
    pub fn panel_id(&self) -> &'static str {
        match self {
            PanelTab::Summary => "panel-summary",
            PanelTab::Policy => "panel-policy",
            PanelTab::Sdk => "panel-sdk",
            PanelTab::Certificate => "panel-cert",
        }
    }
}

/// Which rendering of the policy the Policy tab shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PolicyView {
    #[default]
    Yaml,
    Cedar,
}

impl PolicyView {
    pub fn label(&self) -> &'static str {
        match self {
            PolicyView::Yaml => "YAML",
            PolicyView::Cedar => "Cedar",
        }
    }
}

/// Language of the SDK snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SdkLanguage {
    #[default]
    Java,
    Python,
    TypeScript,
}

impl SdkLanguage {
    pub const ALL: [SdkLanguage; 3] = [
        SdkLanguage::Java,
        SdkLanguage::Python,
        SdkLanguage::TypeScript,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SdkLanguage::Java => "Java",
            SdkLanguage::Python => "Python",
            SdkLanguage::TypeScript => "TypeScript",
        }
    }
}

/// Simulated rollout status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunStatus {
    #[default]
    Idle,
    Canary,
    Promoted,
}

/// Canary traffic percentage, always within
/// `MIN_CANARY_PERCENT..=MAX_CANARY_PERCENT`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CanaryPercent(u8);

impl CanaryPercent {
    /// Clamp any slider input into range
    pub fn new(value: i64) -> Self {
        let clamped = value.clamp(MIN_CANARY_PERCENT as i64, MAX_CANARY_PERCENT as i64);
        Self(clamped as u8)
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    /// Traffic percentages routed by the five canary ticks
    pub fn ramp(&self) -> [u8; 5] {
        let c = self.0 as u32;
        [c, c * 2, c * 3, 36, 50].map(|pct| pct.min(MAX_CANARY_PERCENT as u32) as u8)
    }

    /// Progress bar width once the rollout gate opens
    pub fn promotion_progress(&self) -> u8 {
        (self.0 + 45).min(PROMOTION_PROGRESS_CAP)
    }
}

impl Default for CanaryPercent {
    fn default() -> Self {
        Self(DEFAULT_CANARY_PERCENT)
    }
}

impl std::fmt::Display for CanaryPercent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything the control panel renders
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PanelState {
    pub tab: PanelTab,
    pub policy_view: PolicyView,
    pub sdk_language: SdkLanguage,
    pub canary: CanaryPercent,
    pub status: RunStatus,
    /// Append-only log, emptied only when the simulation resets
    pub events: Vec<String>,
    /// Progress bar width in percent
    pub progress: u8,
    pub certificate: Option<ActionCertificate>,
}

impl PanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter the canary run; ticks are applied with [`Self::record_canary_tick`]
    pub fn begin_canary(&mut self) {
        self.status = RunStatus::Canary;
        self.events = vec!["starting governed canary…".to_string()];
        self.progress = 0;
    }

    /// Apply tick `index` of the canary ramp
    pub fn record_canary_tick(&mut self, index: usize) {
        let ramp = self.canary.ramp();
        let Some(&routed) = ramp.get(index) else {
            return;
        };

        self.progress = routed;
        self.events.push(format!("traffic routed: {}%", routed));

        if index == ramp.len() - 1 {
            self.events.push("OpenTelemetry export → Datadog".to_string());
            self.events.push("budget & SLO checks ✓".to_string());
        }
    }

    /// Promote the current canary and mint a certificate for it
    pub fn promote(&mut self) {
        self.status = RunStatus::Promoted;
        self.events.extend([
            "promotion requested…".to_string(),
            "security approval ✓".to_string(),
            "finops approval ✓".to_string(),
            format!("rollout gate opened to {}%", self.canary),
            "Action Certificate minted ✓".to_string(),
        ]);
        self.progress = self.canary.promotion_progress();
        self.certificate = Some(ActionCertificate::mint(self.canary, &self.policy_yaml()));
    }

    /// Back to the state a fresh mount shows for status, log and progress
    pub fn reset_simulation(&mut self) {
        self.status = RunStatus::Idle;
        self.events.clear();
        self.progress = 0;
    }

    /// Policy text for the currently selected view
    pub fn policy_source(&self) -> String {
        match self.policy_view {
            PolicyView::Yaml => self.policy_yaml(),
            PolicyView::Cedar => self.policy_cedar(),
        }
    }

    pub fn policy_yaml(&self) -> String {
        format!(
            r#"version: 1
policy: {policy}
identity:
  saml: true
  scim: true
audit:
  sink: datadog
  otel: true
  retention_days: 365
data:
  residency: [us, eu]
  kms: byok
  egress: deny_by_default
  pii: redact
connectors:
  snowflake:  {{ mode: read_first,  role: ANALYST }}
  servicenow: {{ mode: write_gated }}
guardrails:
  writes: {{ approvals: [security, finops] }}
  canary: {{ pct: {pct:>2}, eval: golden:v1, rollback_on: {{ drift_p95: '>5%' }} }}
slo:      {{ latency_p95_ms: 1200, availability: '99.9%' }}
limits:   {{ rps: 5, monthly_budget_usd: 25000 }}
targets:  {{ tte_days: 7, ttc_days: 7, ttp_days: 90, mttr_min: 5 }}
"#,
            policy = DEMO_POLICY_ID,
            pct = self.canary.get(),
        )
    }

    pub fn policy_cedar(&self) -> String {
        format!(
            r#"// compiled sketch (illustrative)
permit(write, subject, resource)
when {{
  resource.is("servicenow:ticket")
  && subject in ApproverGroup::"security"
  && subject in ApproverGroup::"finops"
  && context.canary_percent <= {pct}
  && context.eval.contract == "golden:v1"
  && context.eval.drift_p95 < 0.05
  && context.budget.monthly <= 25000
  && context.slo.latency_p95_ms <= 1200
}};"#,
            pct = self.canary,
        )
    }

    /// SDK snippet for the selected language
    pub fn sdk_snippet(&self) -> String {
        sdk_snippet(self.sdk_language, self.canary)
    }

    /// Pretty JSON of the last certificate, or the placeholder
    pub fn certificate_text(&self) -> String {
        self.certificate
            .as_ref()
            .map(ActionCertificate::to_pretty_json)
            .unwrap_or_else(|| CERTIFICATE_PLACEHOLDER.to_string())
    }
}

pub fn sdk_snippet(language: SdkLanguage, canary: CanaryPercent) -> String {
    match language {
        SdkLanguage::Java => format!(
            r#"import com.trustplane.sdk.*;
import java.util.Arrays;

public class Example {{
  public static void main(String[] args) {{
    TrustPlane tp = TrustPlane.newClient()
        .policy("{policy}")
        .build();

    // 1) Start governed canary (read-first, audited)
    tp.canary("{use_case}",
        CanaryOptions.builder()
            .dataset("golden:v1")
            .dryRun(true)
            .trace(true)
            .build()
    );

    // 2) Request promotion with approvals
    tp.promote("{use_case}",
        PromoteOptions.builder()
            .percent({canary})
            .approvals(Arrays.asList("security", "finops"))
            .build()
    );
  }}
}}
"#,
            policy = DEMO_POLICY_ID,
            use_case = DEMO_USE_CASE,
        ),
        SdkLanguage::Python => format!(
            r#"from trustplane import TrustPlane

tp = TrustPlane(policy="{policy}")

# 1) Governed canary
tp.canary(
  "{use_case}",
  dataset="golden:v1",
  dry_run=True,
  trace=True,
)

# 2) Promote with approvals
tp.promote(
  "{use_case}",
  percent={canary},
  approvals=["security","finops"]
)
"#,
            policy = DEMO_POLICY_ID,
            use_case = DEMO_USE_CASE,
        ),
        SdkLanguage::TypeScript => format!(
            r#"import {{ TrustPlane }} from "@trustplane/sdk";

const tp = new TrustPlane({{ policy: "{policy}" }});

// 1) Governed canary
await tp.canary("{use_case}", {{
  dataset: "golden:v1",
  dryRun: true,
  trace: true,
}});

// 2) Promote with approvals
await tp.promote("{use_case}", {{
  percent: {canary},
  approvals: ["security", "finops"],
}});
"#,
            policy = DEMO_POLICY_ID,
            use_case = DEMO_USE_CASE,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canary_percent_clamps() {
        assert_eq!(CanaryPercent::new(0).get(), 1);
        assert_eq!(CanaryPercent::new(-20).get(), 1);
        assert_eq!(CanaryPercent::new(51).get(), 50);
        assert_eq!(CanaryPercent::new(25).get(), 25);
        assert_eq!(CanaryPercent::default().get(), DEFAULT_CANARY_PERCENT);
    }

    #[test]
    fn test_canary_ramp_is_capped() {
        assert_eq!(CanaryPercent::new(10).ramp(), [10, 20, 30, 36, 50]);
        assert_eq!(CanaryPercent::new(20).ramp(), [20, 40, 50, 36, 50]);
        assert_eq!(CanaryPercent::new(50).ramp(), [50, 50, 50, 36, 50]);
    }

    #[test]
    fn test_promotion_progress_cap() {
        assert_eq!(CanaryPercent::new(10).promotion_progress(), 55);
        assert_eq!(CanaryPercent::new(40).promotion_progress(), 85);
        assert_eq!(CanaryPercent::new(50).promotion_progress(), 85);
    }

    #[test]
    fn test_begin_canary_replaces_log() {
        let mut state = PanelState::new();
        state.events.push("old".to_string());
        state.progress = 40;

        state.begin_canary();

        assert_eq!(state.status, RunStatus::Canary);
        assert_eq!(state.events, vec!["starting governed canary…".to_string()]);
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn test_canary_ticks_append_events() {
        let mut state = PanelState::new();
        state.begin_canary();
        for i in 0..5 {
            state.record_canary_tick(i);
        }

        assert_eq!(state.progress, 50);
        assert_eq!(
            state.events,
            vec![
                "starting governed canary…",
                "traffic routed: 10%",
                "traffic routed: 20%",
                "traffic routed: 30%",
                "traffic routed: 36%",
                "traffic routed: 50%",
                "OpenTelemetry export → Datadog",
                "budget & SLO checks ✓",
            ]
        );
    }

    #[test]
    fn test_out_of_range_tick_is_ignored() {
        let mut state = PanelState::new();
        state.record_canary_tick(5);
        assert!(state.events.is_empty());
        assert_eq!(state.progress, 0);
    }

    #[test]
    fn test_promote_mints_certificate() {
        let mut state = PanelState::new();
        state.canary = CanaryPercent::new(12);
        state.promote();

        assert_eq!(state.status, RunStatus::Promoted);
        assert_eq!(state.progress, 57);
        assert_eq!(
            state.events.last().map(String::as_str),
            Some("Action Certificate minted ✓")
        );
        assert!(state.events.contains(&"rollout gate opened to 12%".to_string()));

        let cert = state.certificate.as_ref().expect("certificate minted");
        assert_eq!(cert.rollout.percent, 12);
        assert!(state.certificate_text().contains("trustplane.action_certificate.v1"));
    }

    #[test]
    fn test_reset_simulation_restores_initial_values() {
        let mut state = PanelState::new();
        state.begin_canary();
        state.record_canary_tick(0);
        state.promote();

        state.reset_simulation();

        let fresh = PanelState::new();
        assert_eq!(state.status, fresh.status);
        assert_eq!(state.events, fresh.events);
        assert_eq!(state.progress, fresh.progress);
    }

    #[test]
    fn test_certificate_placeholder() {
        assert_eq!(PanelState::new().certificate_text(), CERTIFICATE_PLACEHOLDER);
    }

    #[test]
    fn test_policy_yaml_pads_canary() {
        let mut state = PanelState::new();
        state.canary = CanaryPercent::new(5);
        assert!(state.policy_yaml().contains("canary: { pct:  5, eval: golden:v1"));

        state.canary = CanaryPercent::new(25);
        assert!(state.policy_yaml().contains("canary: { pct: 25, eval: golden:v1"));
    }

    #[test]
    fn test_policy_source_follows_view() {
        let mut state = PanelState::new();
        assert!(state.policy_source().starts_with("version: 1"));

        state.policy_view = PolicyView::Cedar;
        let cedar = state.policy_source();
        assert!(cedar.starts_with("// compiled sketch"));
        assert!(cedar.contains("context.canary_percent <= 10"));
        assert!(cedar.ends_with("};"));
    }

    #[test]
    fn test_sdk_snippets_interpolate_canary() {
        let canary = CanaryPercent::new(7);
        assert!(sdk_snippet(SdkLanguage::Java, canary).contains(".percent(7)"));
        assert!(sdk_snippet(SdkLanguage::Python, canary).contains("percent=7,"));
        assert!(sdk_snippet(SdkLanguage::TypeScript, canary).contains("percent: 7,"));
    }

    #[test]
    fn test_tab_ids() {
        for tab in PanelTab::ALL {
            assert!(tab.tab_id().starts_with("tab-"));
            assert!(tab.panel_id().starts_with("panel-"));
        }
        assert_eq!(PanelTab::Sdk.label(), "SDK");
    }
}
