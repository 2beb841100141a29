//! Contact form fields, validation and submission flow.
//!
//! # Responsibility
//! - Validate all fields and report every offending field together.
//! - Drive the transport and convert results into dismissable notices.
//!
//! # Invariants
//! - The transport is never invoked while validation issues exist.
//! - Form data is only cleared by the caller on confirmed success; a
//!   transport failure keeps the user's input intact.

use log::{info, warn};
use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use uuid::Uuid;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Minimum trimmed length for free-text fields.
pub const TEXT_FIELD_MIN_CHARS: usize = 2;
/// How long a notice stays up before auto-dismissal.
pub const NOTICE_DISMISS_MS: u64 = 5000;

const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);
const SIMULATED_SUCCESS_RATE: f64 = 0.8;

/// Contact form field identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

/// One inline validation finding, surfaced next to its field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: Field,
    pub message: String,
}

/// Raw user input for the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Checks every field and returns all findings together; one bad field
    /// never hides another.
    pub fn validate(&self) -> Vec<FieldIssue> {
        let mut issues = Vec::new();
        check_min_length(Field::Name, &self.name, &mut issues);
        if !EMAIL_RE.is_match(self.email.trim()) {
            issues.push(FieldIssue {
                field: Field::Email,
                message: "Please enter a valid email address".to_string(),
            });
        }
        check_min_length(Field::Subject, &self.subject, &mut issues);
        if self.message.trim().is_empty() {
            issues.push(FieldIssue {
                field: Field::Message,
                message: "This field is required".to_string(),
            });
        }
        issues
    }

    /// Resets all fields. Call only after a confirmed successful submit.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn check_min_length(field: Field, value: &str, issues: &mut Vec<FieldIssue>) {
    if value.trim().chars().count() < TEXT_FIELD_MIN_CHARS {
        issues.push(FieldIssue {
            field,
            message: format!(
                "This field must be at least {TEXT_FIELD_MIN_CHARS} characters long"
            ),
        });
    }
}

/// Validated, trimmed payload handed to the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted_at_ms: i64,
}

impl Submission {
    fn from_form(form: &ContactForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            subject: form.subject.trim().to_string(),
            message: form.message.trim().to_string(),
            submitted_at_ms: now_epoch_ms(),
        }
    }
}

/// Transport-level submission failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    Network(String),
}

impl Display for TransportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(message) => write!(f, "network error: {message}"),
        }
    }
}

impl Error for TransportError {}

/// Server-side acknowledgement of one accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub submission_id: Uuid,
    pub accepted_at_ms: i64,
}

/// Outbound submission seam.
///
/// The shipped implementation simulates a transport; a real one slots in
/// here without touching the notification flow.
pub trait ContactTransport {
    fn send(&mut self, submission: &Submission) -> Result<SubmissionReceipt, TransportError>;
}

/// Demo transport: fixed latency, pseudo-random ≈80% acceptance.
#[derive(Debug)]
pub struct SimulatedTransport {
    latency: Duration,
    success_rate: f64,
    rng: StdRng,
}

impl SimulatedTransport {
    /// Production-demo configuration: 1.5 s latency, entropy-seeded.
    pub fn new() -> Self {
        Self {
            latency: SIMULATED_LATENCY,
            success_rate: SIMULATED_SUCCESS_RATE,
            rng: StdRng::from_entropy(),
        }
    }

    /// Zero-latency, seed-determined configuration for tests.
    pub fn deterministic(seed: u64) -> Self {
        Self {
            latency: Duration::ZERO,
            success_rate: SIMULATED_SUCCESS_RATE,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactTransport for SimulatedTransport {
    fn send(&mut self, _submission: &Submission) -> Result<SubmissionReceipt, TransportError> {
        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }
        if self.rng.gen::<f64>() < self.success_rate {
            Ok(SubmissionReceipt {
                submission_id: Uuid::new_v4(),
                accepted_at_ms: now_epoch_ms(),
            })
        } else {
            Err(TransportError::Network("simulated delivery failure".to_string()))
        }
    }
}

/// Dismissable global notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub dismiss_after_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

impl Notice {
    fn success(message: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.to_string(),
            dismiss_after_ms: NOTICE_DISMISS_MS,
        }
    }

    fn error(message: &str) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.to_string(),
            dismiss_after_ms: NOTICE_DISMISS_MS,
        }
    }
}

/// Result of one submit attempt.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation findings; the transport was not invoked.
    Invalid {
        issues: Vec<FieldIssue>,
        notice: Notice,
    },
    /// Transport accepted the submission; the caller may clear the form.
    Accepted {
        receipt: SubmissionReceipt,
        notice: Notice,
    },
    /// Transport failed; the caller keeps the form data.
    TransportFailed { notice: Notice },
}

/// Submission flow over any transport.
pub struct ContactService<T: ContactTransport> {
    transport: T,
}

impl<T: ContactTransport> ContactService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Validates and submits one form.
    pub fn submit(&mut self, form: &ContactForm) -> SubmitOutcome {
        let issues = form.validate();
        if !issues.is_empty() {
            warn!("event=contact_submit status=invalid issues={}", issues.len());
            return SubmitOutcome::Invalid {
                issues,
                notice: Notice::error("Please fix the errors in the form before submitting."),
            };
        }

        let submission = Submission::from_form(form);
        match self.transport.send(&submission) {
            Ok(receipt) => {
                info!(
                    "event=contact_submit status=ok submission_id={}",
                    receipt.submission_id
                );
                SubmitOutcome::Accepted {
                    receipt,
                    notice: Notice::success(
                        "Thank you for your message! I will get back to you soon.",
                    ),
                }
            }
            Err(err) => {
                warn!("event=contact_submit status=error error={err}");
                SubmitOutcome::TransportFailed {
                    notice: Notice::error(
                        "Sorry, there was an error sending your message. Please try again later.",
                    ),
                }
            }
        }
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{
        ContactForm, ContactService, ContactTransport, Field, SimulatedTransport, Submission,
        SubmissionReceipt, SubmitOutcome, TransportError,
    };

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Collaboration".to_string(),
            message: "Let's build something.".to_string(),
        }
    }

    #[test]
    fn validate_accepts_well_formed_input() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn validate_reports_every_offending_field_together() {
        let form = ContactForm {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            subject: " ".to_string(),
            message: String::new(),
        };
        let issues = form.validate();
        let fields: Vec<Field> = issues.iter().map(|issue| issue.field).collect();
        assert_eq!(
            fields,
            vec![Field::Name, Field::Email, Field::Subject, Field::Message]
        );
    }

    #[test]
    fn email_rule_rejects_spaces_and_missing_parts() {
        for bad in ["plain", "a@b", "a b@c.d", "@c.d", "a@.d "] {
            let mut form = valid_form();
            form.email = bad.to_string();
            assert!(
                form.validate().iter().any(|i| i.field == Field::Email),
                "expected rejection for {bad:?}"
            );
        }
    }

    struct CountingTransport {
        calls: usize,
    }

    impl ContactTransport for CountingTransport {
        fn send(&mut self, _s: &Submission) -> Result<SubmissionReceipt, TransportError> {
            self.calls += 1;
            Err(TransportError::Network("down".to_string()))
        }
    }

    #[test]
    fn invalid_form_never_reaches_the_transport() {
        let mut form = valid_form();
        form.email = "not-an-email".to_string();
        let mut service = ContactService::new(CountingTransport { calls: 0 });

        let outcome = service.submit(&form);
        assert!(matches!(outcome, SubmitOutcome::Invalid { .. }));
        assert_eq!(service.transport.calls, 0);
    }

    #[test]
    fn transport_failure_keeps_form_data_available() {
        let form = valid_form();
        let mut service = ContactService::new(CountingTransport { calls: 0 });

        let outcome = service.submit(&form);
        assert!(matches!(outcome, SubmitOutcome::TransportFailed { .. }));
        assert_eq!(service.transport.calls, 1);
        // The caller still holds the input; nothing cleared it.
        assert_eq!(form, valid_form());
    }

    #[test]
    fn deterministic_transport_is_repeatable_and_mixes_outcomes() {
        let run = |seed: u64| {
            let mut transport = SimulatedTransport::deterministic(seed);
            let submission = Submission {
                name: "A".into(),
                email: "a@b.c".into(),
                subject: "S".into(),
                message: "M".into(),
                submitted_at_ms: 0,
            };
            (0..64)
                .map(|_| transport.send(&submission).is_ok())
                .collect::<Vec<bool>>()
        };

        let first = run(7);
        let second = run(7);
        assert_eq!(first, second);
        assert!(first.iter().any(|ok| *ok));
        assert!(first.iter().any(|ok| !*ok));
    }

    #[test]
    fn accepted_submission_yields_receipt_with_real_id() {
        let mut service = ContactService::new(SimulatedTransport::deterministic(1));
        // Walk the seeded sequence until the first acceptance.
        for _ in 0..64 {
            if let SubmitOutcome::Accepted { receipt, notice } = service.submit(&valid_form()) {
                assert!(!receipt.submission_id.is_nil());
                assert_eq!(notice.kind, super::NoticeKind::Success);
                return;
            }
        }
        panic!("seeded transport never accepted a submission");
    }
}
