//! Contact form submission and validation
//!
//! Shared by the server handler and the browser form so both report the
//! same per-field messages.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Upper bound for the free-text profile fields
pub const MAX_FIELD_LENGTH: usize = 200;

/// Minimum message length in characters
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// Mailbox providers rejected when personal email is not allowed
pub const PERSONAL_EMAIL_PROVIDERS: [&str; 4] = ["gmail", "yahoo", "outlook", "hotmail"];

/// Error banner shown whenever any field fails
pub const FIX_FIELDS_MESSAGE: &str = "Please fix the highlighted fields.";

/// Raw form payload as posted by the browser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub cloud: String,
    pub topic: String,
    pub message: String,
    /// Honeypot, hidden from people
    pub website: String,
    /// Milliseconds since the epoch when the form was rendered
    #[serde(deserialize_with = "lenient_millis")]
    pub form_started_at: i64,
    pub plan: String,
    /// `utm_*` query parameters carried through from the landing URL
    pub utm: BTreeMap<String, String>,
}

/// Timestamp as a number or numeric string; anything else reads as 0
fn lenient_millis<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Millis {
        Int(i64),
        Float(f64),
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    let millis = match Millis::deserialize(deserializer)? {
        Millis::Int(v) => Some(v),
        Millis::Float(v) => Some(v).filter(|v| v.is_finite()).map(|v| v as i64),
        Millis::Text(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(|v| v as i64),
        Millis::Other(_) => None,
    };
    Ok(millis.unwrap_or(0))
}

/// Campaign parameters carried from the page URL into the submission
pub const UTM_KEYS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
];

impl ContactSubmission {
    /// Form defaults from the page query string.
    ///
    /// `plan=` implies the pricing topic unless `topic=` says otherwise;
    /// unknown topics fall back to the default.
    pub fn from_query(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let field = |key: &str| lookup(key).unwrap_or_default();

        let plan = field("plan");
        let topic = match lookup("topic").as_deref().and_then(Topic::parse) {
            Some(topic) => topic,
            None if !plan.is_empty() => Topic::Pricing,
            None => Topic::default(),
        };

        Self {
            name: field("name"),
            email: field("email"),
            company: field("company"),
            role: field("role"),
            cloud: field("cloud"),
            topic: topic.as_str().to_string(),
            plan,
            utm: UTM_KEYS
                .iter()
                .filter_map(|key| {
                    lookup(key)
                        .filter(|v| !v.is_empty())
                        .map(|v| (key.to_string(), v))
                })
                .collect(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    #[default]
    Demo,
    Security,
    Pricing,
    Partnership,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::Demo,
        Topic::Security,
        Topic::Pricing,
        Topic::Partnership,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Demo => "demo",
            Topic::Security => "security",
            Topic::Pricing => "pricing",
            Topic::Partnership => "partnership",
        }
    }

    /// Option text in the topic select
    pub fn label(&self) -> &'static str {
        match self {
            Topic::Demo => "Demo",
            Topic::Security => "Security brief",
            Topic::Pricing => "Pricing",
            Topic::Partnership => "Partnership",
        }
    }

    /// Parse a form value; empty means the default topic
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Some(Topic::default());
        }
        Topic::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Field validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactFieldError {
    /// Email is not of the form `local@domain.tld`
    InvalidEmail,
    /// Email belongs to a consumer mailbox provider
    PersonalEmail,
    /// Message shorter than [`MIN_MESSAGE_LENGTH`]
    MessageTooShort,
    /// A profile field exceeds [`MAX_FIELD_LENGTH`]
    TooLong { field: &'static str },
    /// Topic outside the known set
    UnknownTopic,
}

impl ContactFieldError {
    /// Form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            ContactFieldError::InvalidEmail | ContactFieldError::PersonalEmail => "email",
            ContactFieldError::MessageTooShort => "message",
            ContactFieldError::TooLong { field } => *field,
            ContactFieldError::UnknownTopic => "topic",
        }
    }
}

impl std::fmt::Display for ContactFieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContactFieldError::InvalidEmail => write!(f, "Enter a valid work email"),
            ContactFieldError::PersonalEmail => {
                write!(f, "Please use your work email (no personal domains)")
            }
            ContactFieldError::MessageTooShort => write!(
                f,
                "Please provide a bit more detail (≥ {} characters)",
                MIN_MESSAGE_LENGTH
            ),
            ContactFieldError::TooLong { .. } => {
                write!(f, "Keep this under {} characters", MAX_FIELD_LENGTH)
            }
            ContactFieldError::UnknownTopic => write!(
                f,
                "Choose one of: {}",
                Topic::ALL.map(|t| t.as_str()).join(", ")
            ),
        }
    }
}

impl std::error::Error for ContactFieldError {}

/// Switches that differ between deployments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationRules {
    pub reject_personal_email: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            reject_personal_email: true,
        }
    }
}

/// A submission that passed validation, trimmed and typed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidContact {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub cloud: String,
    pub topic: Topic,
    pub message: String,
    pub plan: Option<String>,
    pub utm: BTreeMap<String, String>,
}

/// Field name to message, one entry per failing field
pub type FieldErrors = BTreeMap<String, String>;

/// Validate a submission, collecting every failing field
pub fn validate(
    submission: &ContactSubmission,
    rules: ValidationRules,
) -> Result<ValidContact, FieldErrors> {
    let mut errors: Vec<ContactFieldError> = Vec::new();

    let email = submission.email.trim();
    if !is_valid_email(email) {
        errors.push(ContactFieldError::InvalidEmail);
    } else if rules.reject_personal_email && is_personal_email(email) {
        errors.push(ContactFieldError::PersonalEmail);
    }

    for (field, value) in [
        ("name", &submission.name),
        ("company", &submission.company),
        ("role", &submission.role),
        ("cloud", &submission.cloud),
    ] {
        if value.trim().chars().count() > MAX_FIELD_LENGTH {
            errors.push(ContactFieldError::TooLong { field });
        }
    }

    let topic = Topic::parse(&submission.topic);
    if topic.is_none() {
        errors.push(ContactFieldError::UnknownTopic);
    }

    let message = submission.message.trim();
    if message.chars().count() < MIN_MESSAGE_LENGTH {
        errors.push(ContactFieldError::MessageTooShort);
    }

    if !errors.is_empty() {
        return Err(errors
            .into_iter()
            .map(|e| (e.field().to_string(), e.to_string()))
            .collect());
    }

    let plan = submission.plan.trim();
    Ok(ValidContact {
        name: submission.name.trim().to_string(),
        email: email.to_string(),
        company: submission.company.trim().to_string(),
        role: submission.role.trim().to_string(),
        cloud: submission.cloud.trim().to_string(),
        topic: topic.unwrap_or_default(),
        message: message.to_string(),
        plan: (!plan.is_empty()).then(|| plan.to_string()),
        utm: submission.utm.clone(),
    })
}

/// `local@domain.tld` with no whitespace and non-empty labels
pub fn is_valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    if !domain.contains('.') {
        return false;
    }

    // Every label after the @ must have content
    domain.split('.').all(|label| !label.is_empty())
}

/// Whether the mailbox is hosted by a consumer provider
pub fn is_personal_email(email: &str) -> bool {
    let Some((_, domain)) = email.split_once('@') else {
        return false;
    };
    let domain = domain.to_ascii_lowercase();

    PERSONAL_EMAIL_PROVIDERS
        .iter()
        .any(|provider| domain.starts_with(&format!("{}.", provider)))
}

/// Structured reply of the contact endpoint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactResult {
    pub ok: bool,
    pub error: Option<String>,
    #[serde(
        rename = "fieldErrors",
        default,
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub field_errors: FieldErrors,
}

impl ContactResult {
    pub fn success() -> Self {
        Self {
            ok: true,
            error: None,
            field_errors: FieldErrors::new(),
        }
    }

    pub fn invalid(field_errors: FieldErrors) -> Self {
        Self {
            ok: false,
            error: Some(FIX_FIELDS_MESSAGE.to_string()),
            field_errors,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(message.into()),
            field_errors: FieldErrors::new(),
        }
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Ada Lovelace".to_string(),
            email: "ada@analytical.engines".to_string(),
            company: "Analytical Engines".to_string(),
            role: "Platform lead".to_string(),
            cloud: "AWS, GCP".to_string(),
            topic: "security".to_string(),
            message: "We need governed canaries for AP matching.".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_submission() {
        let contact = validate(&submission(), ValidationRules::default()).unwrap();
        assert_eq!(contact.topic, Topic::Security);
        assert_eq!(contact.email, "ada@analytical.engines");
        assert_eq!(contact.plan, None);
    }

    #[test]
    fn test_invalid_email() {
        let mut sub = submission();
        sub.email = "not-an-email".to_string();

        let errors = validate(&sub, ValidationRules::default()).unwrap_err();
        assert_eq!(errors.get("email").unwrap(), "Enter a valid work email");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("a b@c.com"));
    }

    #[test]
    fn test_personal_email_rejected() {
        let mut sub = submission();
        sub.email = "someone@Gmail.com".to_string();

        let errors = validate(&sub, ValidationRules::default()).unwrap_err();
        assert_eq!(
            errors.get("email").unwrap(),
            "Please use your work email (no personal domains)"
        );
    }

    #[test]
    fn test_personal_email_allowed_when_disabled() {
        let mut sub = submission();
        sub.email = "someone@outlook.com".to_string();

        let rules = ValidationRules {
            reject_personal_email: false,
        };
        assert!(validate(&sub, rules).is_ok());
    }

    #[test]
    fn test_personal_provider_needs_exact_label() {
        assert!(is_personal_email("x@yahoo.co.uk"));
        assert!(is_personal_email("x@hotmail.fr"));
        assert!(!is_personal_email("x@gmailer.com"));
        assert!(!is_personal_email("x@corp-outlook.com"));
    }

    #[test]
    fn test_short_message() {
        let mut sub = submission();
        sub.message = "hi there".to_string();

        let errors = validate(&sub, ValidationRules::default()).unwrap_err();
        assert_eq!(
            errors.get("message").unwrap(),
            "Please provide a bit more detail (≥ 10 characters)"
        );
    }

    #[test]
    fn test_whitespace_does_not_count_towards_message() {
        let mut sub = submission();
        sub.message = "   abc      ".to_string();
        assert!(validate(&sub, ValidationRules::default()).is_err());
    }

    #[test]
    fn test_long_fields() {
        let mut sub = submission();
        sub.company = "x".repeat(MAX_FIELD_LENGTH + 1);
        sub.cloud = "y".repeat(MAX_FIELD_LENGTH);

        let errors = validate(&sub, ValidationRules::default()).unwrap_err();
        assert!(errors.contains_key("company"));
        assert!(!errors.contains_key("cloud"));
    }

    #[test]
    fn test_topic_parsing() {
        assert_eq!(Topic::parse(""), Some(Topic::Demo));
        assert_eq!(Topic::parse("pricing"), Some(Topic::Pricing));
        assert_eq!(Topic::parse("sales"), None);

        let mut sub = submission();
        sub.topic = "sales".to_string();
        let errors = validate(&sub, ValidationRules::default()).unwrap_err();
        assert_eq!(
            errors.get("topic").unwrap(),
            "Choose one of: demo, security, pricing, partnership"
        );
    }

    #[test]
    fn test_all_errors_collected() {
        let sub = ContactSubmission::default();
        let errors = validate(&sub, ValidationRules::default()).unwrap_err();
        assert!(errors.contains_key("email"));
        assert!(errors.contains_key("message"));
    }

    #[test]
    fn test_plan_and_trim() {
        let mut sub = submission();
        sub.plan = " enterprise ".to_string();
        sub.name = "  Ada  ".to_string();

        let contact = validate(&sub, ValidationRules::default()).unwrap();
        assert_eq!(contact.plan.as_deref(), Some("enterprise"));
        assert_eq!(contact.name, "Ada");
    }

    #[test]
    fn test_result_json_shape() {
        let ok = serde_json::to_value(ContactResult::success()).unwrap();
        assert_eq!(ok, serde_json::json!({ "ok": true, "error": null }));

        let mut fields = FieldErrors::new();
        fields.insert("email".to_string(), "Enter a valid work email".to_string());
        let invalid = serde_json::to_value(ContactResult::invalid(fields)).unwrap();
        assert_eq!(invalid["ok"], false);
        assert_eq!(invalid["error"], FIX_FIELDS_MESSAGE);
        assert_eq!(invalid["fieldErrors"]["email"], "Enter a valid work email");
    }

    fn query(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: BTreeMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_query_prefills_fields() {
        let sub = ContactSubmission::from_query(query(&[
            ("name", "Ada"),
            ("email", "ada@analytical.engines"),
            ("topic", "security"),
            ("utm_source", "newsletter"),
            ("utm_medium", ""),
            ("ref", "ignored"),
        ]));

        assert_eq!(sub.name, "Ada");
        assert_eq!(sub.email, "ada@analytical.engines");
        assert_eq!(sub.topic, "security");
        assert_eq!(sub.utm.len(), 1);
        assert_eq!(sub.utm.get("utm_source").map(String::as_str), Some("newsletter"));
        assert_eq!(sub.form_started_at, 0);
    }

    #[test]
    fn test_from_query_plan_implies_pricing() {
        let sub = ContactSubmission::from_query(query(&[("plan", "enterprise")]));
        assert_eq!(sub.plan, "enterprise");
        assert_eq!(sub.topic, "pricing");

        let sub = ContactSubmission::from_query(query(&[
            ("plan", "enterprise"),
            ("topic", "partnership"),
        ]));
        assert_eq!(sub.topic, "partnership");
    }

    #[test]
    fn test_from_query_unknown_topic_uses_default() {
        let sub = ContactSubmission::from_query(query(&[("topic", "bogus")]));
        assert_eq!(sub.topic, "demo");
        assert!(sub.utm.is_empty());
    }

    #[test]
    fn test_submission_defaults_missing_fields() {
        let sub: ContactSubmission =
            serde_json::from_str(r#"{"email":"a@b.co","message":"hello world!"}"#).unwrap();
        assert_eq!(sub.form_started_at, 0);
        assert!(sub.website.is_empty());
        assert!(sub.utm.is_empty());
    }

    #[test]
    fn test_form_started_at_accepts_numeric_strings() {
        let parse = |value: serde_json::Value| {
            serde_json::from_value::<ContactSubmission>(
                serde_json::json!({ "form_started_at": value }),
            )
            .unwrap()
            .form_started_at
        };

        assert_eq!(parse(serde_json::json!(1_700_000_000_000_i64)), 1_700_000_000_000);
        assert_eq!(parse(serde_json::json!("1700000000000")), 1_700_000_000_000);
        assert_eq!(parse(serde_json::json!(" 42.9 ")), 42);
        assert_eq!(parse(serde_json::json!(1.5e3)), 1_500);
        assert_eq!(parse(serde_json::json!("soon")), 0);
        assert_eq!(parse(serde_json::json!("")), 0);
        assert_eq!(parse(serde_json::Value::Null), 0);
        assert_eq!(parse(serde_json::json!({ "ms": 1 })), 0);
    }
}
