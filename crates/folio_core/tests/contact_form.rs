use folio_core::{
    ContactForm, ContactService, ContactTransport, NoticeKind, SimulatedTransport, SubmitOutcome,
};
use folio_core::contact::form::{Field, Submission, SubmissionReceipt, TransportError};
use std::cell::RefCell;
use std::rc::Rc;
use uuid::Uuid;

fn filled_form() -> ContactForm {
    ContactForm {
        name: "Grace Hopper".to_string(),
        email: "grace@example.com".to_string(),
        subject: "Speaking invite".to_string(),
        message: "Would you join our meetup?".to_string(),
    }
}

struct RecordingTransport {
    sent: Rc<RefCell<Vec<Submission>>>,
    fail: bool,
}

impl RecordingTransport {
    fn accepting() -> (Self, Rc<RefCell<Vec<Submission>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                sent: Rc::clone(&sent),
                fail: false,
            },
            sent,
        )
    }

    fn failing() -> (Self, Rc<RefCell<Vec<Submission>>>) {
        let sent = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                sent: Rc::clone(&sent),
                fail: true,
            },
            sent,
        )
    }
}

impl ContactTransport for RecordingTransport {
    fn send(&mut self, submission: &Submission) -> Result<SubmissionReceipt, TransportError> {
        self.sent.borrow_mut().push(submission.clone());
        if self.fail {
            Err(TransportError::Network("unreachable".to_string()))
        } else {
            Ok(SubmissionReceipt {
                submission_id: Uuid::new_v4(),
                accepted_at_ms: submission.submitted_at_ms,
            })
        }
    }
}

#[test]
fn invalid_email_surfaces_a_field_issue_and_skips_the_transport() {
    let mut form = filled_form();
    form.email = "not-an-email".to_string();

    let (transport, sent) = RecordingTransport::accepting();
    let mut service = ContactService::new(transport);
    let outcome = service.submit(&form);

    match outcome {
        SubmitOutcome::Invalid { issues, notice } => {
            assert_eq!(issues.len(), 1);
            assert_eq!(issues[0].field, Field::Email);
            assert_eq!(issues[0].message, "Please enter a valid email address");
            assert_eq!(notice.kind, NoticeKind::Error);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
    assert!(sent.borrow().is_empty(), "transport must not be invoked");
}

#[test]
fn accepted_submission_carries_trimmed_fields_and_clears_the_form() {
    let mut form = ContactForm {
        name: "  Grace Hopper  ".to_string(),
        email: " grace@example.com ".to_string(),
        subject: " Speaking invite ".to_string(),
        message: " Would you join our meetup? ".to_string(),
    };

    let (transport, _sent) = RecordingTransport::accepting();
    let mut service = ContactService::new(transport);
    let outcome = service.submit(&form);

    match outcome {
        SubmitOutcome::Accepted { receipt, notice } => {
            assert!(!receipt.submission_id.is_nil());
            assert_eq!(notice.kind, NoticeKind::Success);
            // Confirmed success is the only point where the form resets.
            form.clear();
            assert_eq!(form, ContactForm::default());
        }
        other => panic!("expected acceptance, got {other:?}"),
    }
}

#[test]
fn transport_failure_reports_an_error_notice_and_keeps_the_form() {
    let form = filled_form();
    let (transport, sent) = RecordingTransport::failing();
    let mut service = ContactService::new(transport);

    let outcome = service.submit(&form);
    match outcome {
        SubmitOutcome::TransportFailed { notice } => {
            assert_eq!(notice.kind, NoticeKind::Error);
            assert!(notice.message.contains("try again"));
        }
        other => panic!("expected transport failure, got {other:?}"),
    }
    // Input survives the failed attempt untouched.
    assert_eq!(form, filled_form());
    assert_eq!(sent.borrow().len(), 1);
}

#[test]
fn transport_receives_trimmed_submission_payload() {
    let mut form = filled_form();
    form.name = format!("  {}  ", form.name);
    form.subject = format!("\t{}\n", form.subject);

    let (transport, sent) = RecordingTransport::accepting();
    let mut service = ContactService::new(transport);
    let outcome = service.submit(&form);
    assert!(matches!(outcome, SubmitOutcome::Accepted { .. }));

    let sent = sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].name, "Grace Hopper");
    assert_eq!(sent[0].subject, "Speaking invite");
    assert_eq!(sent[0].email, "grace@example.com");
}

#[test]
fn seeded_simulated_transport_exercises_both_outcome_paths() {
    let mut service = ContactService::new(SimulatedTransport::deterministic(11));
    let mut accepted = 0;
    let mut failed = 0;

    for _ in 0..64 {
        match service.submit(&filled_form()) {
            SubmitOutcome::Accepted { .. } => accepted += 1,
            SubmitOutcome::TransportFailed { .. } => failed += 1,
            SubmitOutcome::Invalid { .. } => panic!("valid form flagged invalid"),
        }
    }

    assert!(accepted > 0, "seeded run never succeeded");
    assert!(failed > 0, "seeded run never failed");
    assert!(accepted > failed, "≈80% success rate should dominate");
}
