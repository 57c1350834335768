//! Cheap bot screening for the contact form
//!
//! Flagged submissions are answered exactly like accepted ones, so a bot
//! cannot tell which check caught it.

use super::form::ContactSubmission;

/// A person needs at least this long between render and submit
pub const MIN_FILL_TIME_MS: i64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpamVerdict {
    Clean,
    /// The hidden `website` field was filled in
    Honeypot,
    /// Submitted within [`MIN_FILL_TIME_MS`] of rendering
    TooFast,
}

impl SpamVerdict {
    pub fn is_spam(&self) -> bool {
        *self != SpamVerdict::Clean
    }
}

/// Screen a submission received at `now_ms` (milliseconds since the epoch).
/// A missing render timestamp counts as zero.
pub fn screen(submission: &ContactSubmission, now_ms: i64) -> SpamVerdict {
    if !submission.website.is_empty() {
        return SpamVerdict::Honeypot;
    }

    let started_at = submission.form_started_at.max(0);
    if now_ms.saturating_sub(started_at) < MIN_FILL_TIME_MS {
        return SpamVerdict::TooFast;
    }

    SpamVerdict::Clean
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_760_000_000_000;

    fn started(ms_ago: i64) -> ContactSubmission {
        ContactSubmission {
            form_started_at: NOW - ms_ago,
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_after_minimum_time() {
        assert_eq!(screen(&started(3_000), NOW), SpamVerdict::Clean);
        assert_eq!(screen(&started(60_000), NOW), SpamVerdict::Clean);
    }

    #[test]
    fn test_too_fast() {
        assert_eq!(screen(&started(2_999), NOW), SpamVerdict::TooFast);
        assert_eq!(screen(&started(0), NOW), SpamVerdict::TooFast);
    }

    #[test]
    fn test_future_timestamp_is_too_fast() {
        assert_eq!(screen(&started(-10_000), NOW), SpamVerdict::TooFast);
    }

    #[test]
    fn test_honeypot_wins() {
        let mut sub = started(60_000);
        sub.website = "https://spam.example".to_string();
        assert_eq!(screen(&sub, NOW), SpamVerdict::Honeypot);
        assert!(screen(&sub, NOW).is_spam());
    }

    #[test]
    fn test_missing_timestamp_passes() {
        let sub = ContactSubmission::default();
        assert_eq!(screen(&sub, NOW), SpamVerdict::Clean);
    }
}
