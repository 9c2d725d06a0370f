use std::rc::Rc;

use gloo_net::http::Request;
use log::{error, info};
use web_sys::RequestMode;
use yew::prelude::*;

use crate::config::{self, CLAPPER_REVEAL_MS, SUBMIT_PACING_MS, SUCCESS_HOLD_MS};

pub const FAILURE_ALERT: &str = "Something went wrong. Please check your connection and try again.";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LeadError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not an email address")]
    InvalidEmail(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
}

/// Form fields as typed, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadDraft {
    pub director_name: String,
    pub email: String,
    pub project_type: String,
    pub mobile_number: String,
    pub notes: String,
}

impl Default for LeadDraft {
    fn default() -> Self {
        Self {
            director_name: String::new(),
            email: String::new(),
            project_type: crate::data::PROJECT_TYPES[0].to_string(),
            mobile_number: String::new(),
            notes: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lead {
    pub director_name: String,
    pub email: String,
    pub project_type: String,
    pub mobile_number: String,
    pub notes: String,
}

fn required(value: &str, field: &'static str) -> Result<String, LeadError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LeadError::MissingField(field));
    }
    Ok(value.to_string())
}

impl TryFrom<&LeadDraft> for Lead {
    type Error = LeadError;

    fn try_from(draft: &LeadDraft) -> Result<Self, Self::Error> {
        let director_name = required(&draft.director_name, "Director name")?;
        let email = required(&draft.email, "Email")?;
        let valid_email = email
            .split_once('@')
            .map_or(false, |(user, domain)| !user.is_empty() && !domain.is_empty());
        if !valid_email {
            return Err(LeadError::InvalidEmail(email));
        }
        let mobile_number = required(&draft.mobile_number, "Mobile number")?;
        Ok(Lead {
            director_name,
            email,
            project_type: draft.project_type.clone(),
            mobile_number,
            notes: draft.notes.trim().to_string(),
        })
    }
}

impl Lead {
    /// `application/x-www-form-urlencoded` body with the field names the sheet script reads.
    pub fn form_body(&self) -> String {
        [
            ("directorName", &self.director_name),
            ("email", &self.email),
            ("projectType", &self.project_type),
            ("mobileNumber", &self.mobile_number),
            ("notes", &self.notes),
        ]
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
    }
}

/// Destination for leads. One call to `send` is one network request.
pub trait LeadSink {
    async fn send(&self, lead: &Lead) -> Result<(), SubmitError>;
}

/// Posts to the hosted sheet script. The request is opaque (no-cors), so any
/// completion that does not throw counts as delivered.
pub struct ScriptEndpoint {
    pub url: &'static str,
}

impl Default for ScriptEndpoint {
    fn default() -> Self {
        Self {
            url: config::CONTACT_ENDPOINT,
        }
    }
}

impl LeadSink for ScriptEndpoint {
    async fn send(&self, lead: &Lead) -> Result<(), SubmitError> {
        let request = Request::post(self.url)
            .mode(RequestMode::NoCors)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(lead.form_body());
        request
            .send()
            .await
            .map(|_| ())
            .map_err(|e| SubmitError::Network(e.to_string()))
    }
}

pub trait Pacer {
    async fn wait(&self, millis: u32);
}

pub struct TimerPacer;

impl Pacer for TimerPacer {
    async fn wait(&self, millis: u32) {
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactPhase {
    Idle,
    Submitting,
    Success,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    pub phase: ContactPhase,
    /// The clapperboard lid is raised while the form is waiting for input.
    pub clapper_open: bool,
    /// Alert text still waiting to be shown to the visitor.
    pub alert: Option<String>,
    /// Ticket of the latest accepted submission. Progress from older runs is dropped.
    pub submission: u32,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            phase: ContactPhase::Idle,
            clapper_open: true,
            alert: None,
            submission: 0,
        }
    }
}

/// Steps a submission reports carry the ticket handed out by `Begin`.
pub enum ContactAction {
    Begin,
    Sent(u32),
    Revealed(u32),
    HoldElapsed(u32),
    Failed(u32, String),
    /// "Send another script".
    Reset,
    AlertShown,
}

impl ContactForm {
    pub fn is_busy(&self) -> bool {
        self.phase == ContactPhase::Submitting
    }

    /// Ticket the next accepted `Begin` will hand out.
    pub fn next_submission(&self) -> u32 {
        self.submission.wrapping_add(1)
    }
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let submission = self.submission;
        let mut next = (*self).clone();
        match action {
            ContactAction::Begin => {
                if self.phase != ContactPhase::Idle {
                    return self;
                }
                next.submission = self.next_submission();
                next.phase = ContactPhase::Submitting;
                next.alert = None;
            }
            ContactAction::Sent(ticket) if ticket == submission && self.is_busy() => next.clapper_open = false,
            ContactAction::Revealed(ticket) if ticket == submission && self.is_busy() => {
                next.phase = ContactPhase::Success;
            }
            ContactAction::HoldElapsed(ticket) if ticket == submission && self.phase == ContactPhase::Success => {
                next.phase = ContactPhase::Idle;
                next.clapper_open = true;
            }
            ContactAction::Failed(ticket, message) if ticket == submission && self.is_busy() => {
                next.phase = ContactPhase::Idle;
                next.clapper_open = true;
                next.alert = Some(message);
            }
            ContactAction::Reset => {
                if self.phase != ContactPhase::Success {
                    return self;
                }
                next.phase = ContactPhase::Idle;
                next.clapper_open = true;
            }
            ContactAction::AlertShown => next.alert = None,
            ContactAction::Sent(_)
            | ContactAction::Revealed(_)
            | ContactAction::HoldElapsed(_)
            | ContactAction::Failed(..) => return self,
        }
        next.into()
    }
}

/// Sends one lead and walks the form through its pacing steps via `apply`.
/// Callers dispatch `ContactAction::Begin` before spawning this and pass the
/// ticket it hands out (`ContactForm::next_submission` read beforehand).
pub async fn run_submission<S, P, F>(sink: &S, pacer: &P, ticket: u32, lead: Lead, apply: F)
where
    S: LeadSink,
    P: Pacer,
    F: Fn(ContactAction),
{
    info!("submitting {} lead", lead.project_type);
    match sink.send(&lead).await {
        Ok(()) => {
            pacer.wait(SUBMIT_PACING_MS).await;
            apply(ContactAction::Sent(ticket));
            pacer.wait(CLAPPER_REVEAL_MS).await;
            apply(ContactAction::Revealed(ticket));
            pacer.wait(SUCCESS_HOLD_MS).await;
            apply(ContactAction::HoldElapsed(ticket));
        }
        Err(e) => {
            error!("Error submitting form: {}", e);
            apply(ContactAction::Failed(ticket, FAILURE_ALERT.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct FakeSink {
        calls: Cell<u32>,
        fail: bool,
    }

    impl LeadSink for FakeSink {
        async fn send(&self, _lead: &Lead) -> Result<(), SubmitError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(SubmitError::Network("offline".into()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct InstantPacer {
        waits: RefCell<Vec<u32>>,
    }

    impl Pacer for InstantPacer {
        async fn wait(&self, millis: u32) {
            self.waits.borrow_mut().push(millis);
        }
    }

    fn draft() -> LeadDraft {
        LeadDraft {
            director_name: "John Doe".into(),
            email: "john@studio.com".into(),
            project_type: "Podcast".into(),
            mobile_number: "+91 98765 43210".into(),
            notes: "Dark, moody & fast cuts".into(),
        }
    }

    /// Runs a submission, recording every phase the form passes through.
    fn submit(sink: &FakeSink, pacer: &InstantPacer) -> (Rc<ContactForm>, Vec<ContactPhase>) {
        let state = RefCell::new(Rc::new(ContactForm::default()).reduce(ContactAction::Begin));
        let phases = RefCell::new(vec![ContactPhase::Idle, state.borrow().phase]);
        let ticket = state.borrow().submission;
        let lead = Lead::try_from(&draft()).unwrap();
        block_on(run_submission(sink, pacer, ticket, lead, |action| {
            let current = state.borrow().clone();
            let next = current.reduce(action);
            if phases.borrow().last() != Some(&next.phase) {
                phases.borrow_mut().push(next.phase);
            }
            *state.borrow_mut() = next;
        }));
        (state.into_inner(), phases.into_inner())
    }

    #[test]
    fn successful_submission_cycles_back_to_idle() {
        let sink = FakeSink { calls: Cell::new(0), fail: false };
        let pacer = InstantPacer::default();
        let (state, phases) = submit(&sink, &pacer);

        assert_eq!(sink.calls.get(), 1);
        assert_eq!(
            phases,
            vec![
                ContactPhase::Idle,
                ContactPhase::Submitting,
                ContactPhase::Success,
                ContactPhase::Idle
            ]
        );
        assert_eq!(*pacer.waits.borrow(), vec![SUBMIT_PACING_MS, CLAPPER_REVEAL_MS, SUCCESS_HOLD_MS]);
        assert!(state.clapper_open);
        assert!(state.alert.is_none());
    }

    #[test]
    fn network_failure_reverts_with_one_alert() {
        let sink = FakeSink { calls: Cell::new(0), fail: true };
        let pacer = InstantPacer::default();
        let (state, phases) = submit(&sink, &pacer);

        assert_eq!(sink.calls.get(), 1);
        assert!(!phases.contains(&ContactPhase::Success));
        assert_eq!(state.phase, ContactPhase::Idle);
        assert_eq!(state.alert.as_deref(), Some(FAILURE_ALERT));
        assert!(pacer.waits.borrow().is_empty());

        let shown = state.reduce(ContactAction::AlertShown);
        assert!(shown.alert.is_none());
    }

    #[test]
    fn second_begin_while_submitting_is_ignored() {
        let state = Rc::new(ContactForm::default()).reduce(ContactAction::Begin);
        let again = state.clone().reduce(ContactAction::Begin);
        assert!(Rc::ptr_eq(&state, &again));
        assert!(again.is_busy());
    }

    #[test]
    fn dismissing_success_returns_to_idle() {
        let state = Rc::new(ContactForm::default())
            .reduce(ContactAction::Begin)
            .reduce(ContactAction::Sent(1))
            .reduce(ContactAction::Revealed(1));
        assert_eq!(state.phase, ContactPhase::Success);
        assert!(!state.clapper_open);
        let state = state.reduce(ContactAction::Reset);
        assert_eq!(state.phase, ContactPhase::Idle);
        assert!(state.clapper_open);
    }

    #[test]
    fn reset_only_dismisses_success() {
        let busy = Rc::new(ContactForm::default()).reduce(ContactAction::Begin);
        let after = busy.clone().reduce(ContactAction::Reset);
        assert!(Rc::ptr_eq(&busy, &after));
        assert!(after.is_busy());
    }

    /// Visitor sends a second script before the first run's hold has elapsed.
    fn resubmitted_within_hold() -> Rc<ContactForm> {
        let first = Rc::new(ContactForm::default()).reduce(ContactAction::Begin);
        let first_ticket = first.submission;
        let state = first
            .reduce(ContactAction::Sent(first_ticket))
            .reduce(ContactAction::Revealed(first_ticket))
            .reduce(ContactAction::Reset);
        assert_eq!(state.next_submission(), first_ticket + 1);
        state.reduce(ContactAction::Begin)
    }

    #[test]
    fn earlier_hold_does_not_interrupt_a_new_submission() {
        let state = resubmitted_within_hold();
        let second_ticket = state.submission;

        let state = state.reduce(ContactAction::HoldElapsed(second_ticket - 1));
        assert_eq!(state.phase, ContactPhase::Submitting);
        assert!(state.is_busy());

        let state = state
            .reduce(ContactAction::Sent(second_ticket))
            .reduce(ContactAction::Revealed(second_ticket));
        assert_eq!(state.phase, ContactPhase::Success);
    }

    #[test]
    fn earlier_hold_does_not_cut_short_a_later_success() {
        let state = resubmitted_within_hold();
        let second_ticket = state.submission;
        let state = state
            .reduce(ContactAction::Sent(second_ticket))
            .reduce(ContactAction::Revealed(second_ticket))
            .reduce(ContactAction::HoldElapsed(second_ticket - 1));
        assert_eq!(state.phase, ContactPhase::Success);

        let state = state.reduce(ContactAction::HoldElapsed(second_ticket));
        assert_eq!(state.phase, ContactPhase::Idle);
        assert!(state.clapper_open);
    }

    #[test]
    fn required_fields_are_checked() {
        let mut missing_name = draft();
        missing_name.director_name = "   ".into();
        assert_eq!(
            Lead::try_from(&missing_name),
            Err(LeadError::MissingField("Director name"))
        );

        let mut bad_email = draft();
        bad_email.email = "john.studio.com".into();
        assert!(matches!(Lead::try_from(&bad_email), Err(LeadError::InvalidEmail(_))));

        let mut missing_mobile = draft();
        missing_mobile.mobile_number.clear();
        assert_eq!(
            Lead::try_from(&missing_mobile),
            Err(LeadError::MissingField("Mobile number"))
        );

        let mut no_notes = draft();
        no_notes.notes.clear();
        assert!(Lead::try_from(&no_notes).is_ok());
    }

    #[test]
    fn form_body_uses_sheet_field_names() {
        let lead = Lead::try_from(&draft()).unwrap();
        assert_eq!(
            lead.form_body(),
            "directorName=John%20Doe&email=john%40studio.com&projectType=Podcast\
             &mobileNumber=%2B91%2098765%2043210&notes=Dark%2C%20moody%20%26%20fast%20cuts"
        );
    }
}
