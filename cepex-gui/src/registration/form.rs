use tracing::{debug, error, info};

use super::{
    record::{Field, ProfessorRecord, Record, Registration},
    validation::{self, FieldError, FieldErrors},
};
use crate::sink::{RegistrationSink, SinkError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    /// The last submit attempt was refused. Only a new attempt re-evaluates it.
    SubmitBlocked,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Registered(Registration),
    Blocked,
    SinkFailed(SinkError),
}

/// One mounted registration form: its record and the verdict of the last submit attempt.
#[derive(Debug, Default)]
pub struct RegistrationForm<R: Record> {
    record: R,
    password_mismatch: bool,
    field_errors: FieldErrors,
    sink_error: Option<String>,
}

impl<R: Record> RegistrationForm<R> {
    pub fn new() -> Self {
        Self {
            record: R::default(),
            password_mismatch: false,
            field_errors: FieldErrors::new(),
            sink_error: None,
        }
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    pub fn value(&self, field: Field) -> &str {
        self.record.identity().get(field)
    }

    pub fn state(&self) -> FormState {
        if self.password_mismatch || !self.field_errors.is_empty() {
            FormState::SubmitBlocked
        } else {
            FormState::Editing
        }
    }

    pub fn password_mismatch(&self) -> bool {
        self.password_mismatch
    }

    pub fn field_error(&self, field: Field) -> Option<FieldError> {
        self.field_errors.get(&field).copied()
    }

    pub fn sink_error(&self) -> Option<&str> {
        self.sink_error.as_deref()
    }

    /// Update exactly one field. The verdict of the last submit attempt is left as is.
    pub fn on_field_change(&mut self, field: Field, value: String) {
        self.record.identity_mut().set(field, value);
    }

    /// Validate the record and, if it passes, hand it to `sink` and start over with an
    /// empty record. A refused or failed attempt leaves the record untouched.
    pub fn on_submit(&mut self, sink: &mut dyn RegistrationSink) -> SubmitOutcome {
        let identity = self.record.identity();
        self.password_mismatch = !identity.passwords_match();
        self.field_errors = validation::validate(identity);
        self.sink_error = None;

        if self.password_mismatch || !self.field_errors.is_empty() {
            debug!(
                role = %R::ROLE,
                password_mismatch = self.password_mismatch,
                invalid_fields = ?self.field_errors.keys().collect::<Vec<_>>(),
                "Submit blocked"
            );
            return SubmitOutcome::Blocked;
        }

        let registration = self.record.clone().into_registration();
        match sink.register(&registration) {
            Ok(()) => {
                info!(role = %R::ROLE, "Registration accepted");
                self.record = R::default();
                SubmitOutcome::Registered(registration)
            }
            Err(e) => {
                error!(role = %R::ROLE, "Registration could not be delivered: {}", e);
                self.sink_error = Some(e.to_string());
                SubmitOutcome::SinkFailed(e)
            }
        }
    }
}

impl RegistrationForm<ProfessorRecord> {
    pub fn is_coordinator(&self) -> bool {
        self.record.is_coordinator
    }

    pub fn on_coordinator_toggle(&mut self, is_coordinator: bool) {
        self.record.is_coordinator = is_coordinator;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{Identity, StudentRecord};

    /// Keeps every registration it receives, or refuses them all.
    #[derive(Default)]
    struct Recorder {
        received: Vec<Registration>,
        broken: bool,
    }

    impl RegistrationSink for Recorder {
        fn register(&mut self, registration: &Registration) -> Result<(), SinkError> {
            if self.broken {
                return Err(SinkError::Io(std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "unreachable",
                )));
            }
            self.received.push(registration.clone());
            Ok(())
        }
    }

    fn fill<R: Record>(form: &mut RegistrationForm<R>, confirm: &str) {
        form.on_field_change(Field::RegistrationId, "123456".to_string());
        form.on_field_change(Field::TaxId, "000.000.000-00".to_string());
        form.on_field_change(Field::FirstName, "Ana".to_string());
        form.on_field_change(Field::LastName, "Silva".to_string());
        form.on_field_change(Field::Email, "ana@x.com".to_string());
        form.on_field_change(Field::Password, "p1".to_string());
        form.on_field_change(Field::PasswordConfirm, confirm.to_string());
    }

    fn ana() -> Identity {
        Identity {
            registration_id: "123456".to_string(),
            tax_id: "000.000.000-00".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Silva".to_string(),
            email: "ana@x.com".to_string(),
            password: "p1".to_string(),
            password_confirm: "p1".to_string(),
        }
    }

    #[test]
    fn new_form_is_empty_and_editing() {
        let form = RegistrationForm::<StudentRecord>::new();
        assert_eq!(form.state(), FormState::Editing);
        assert!(!form.password_mismatch());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn field_change_updates_only_that_field() {
        let mut form = RegistrationForm::<StudentRecord>::new();
        let mut sink = Recorder::default();
        form.on_field_change(Field::Password, "abc".to_string());
        form.on_field_change(Field::PasswordConfirm, "xyz".to_string());
        form.on_submit(&mut sink);
        assert!(form.password_mismatch());

        for field in Field::ALL {
            let before = form.record().clone();
            form.on_field_change(field, "edited".to_string());
            for other in Field::ALL {
                if other == field {
                    assert_eq!(form.value(other), "edited");
                } else {
                    assert_eq!(form.value(other), before.identity.get(other));
                }
            }
            // Edits never clear a refused attempt.
            assert!(form.password_mismatch());
            assert_eq!(form.state(), FormState::SubmitBlocked);
        }
    }

    #[test]
    fn mismatch_blocks_and_keeps_values() {
        let mut form = RegistrationForm::<StudentRecord>::new();
        let mut sink = Recorder::default();
        form.on_field_change(Field::Password, "abc".to_string());
        form.on_field_change(Field::PasswordConfirm, "xyz".to_string());

        assert!(matches!(form.on_submit(&mut sink), SubmitOutcome::Blocked));
        assert!(form.password_mismatch());
        assert_eq!(form.state(), FormState::SubmitBlocked);
        assert_eq!(form.value(Field::Password), "abc");
        assert_eq!(form.value(Field::PasswordConfirm), "xyz");
        assert!(sink.received.is_empty());
    }

    #[test]
    fn match_clears_flag_emits_and_resets() {
        let mut form = RegistrationForm::<StudentRecord>::new();
        let mut sink = Recorder::default();
        fill(&mut form, "xyz");
        form.on_submit(&mut sink);
        assert!(form.password_mismatch());

        form.on_field_change(Field::PasswordConfirm, "p1".to_string());
        // Still blocked until the next attempt.
        assert!(form.password_mismatch());

        let outcome = form.on_submit(&mut sink);
        assert!(!form.password_mismatch());
        assert_eq!(form.state(), FormState::Editing);
        match outcome {
            SubmitOutcome::Registered(Registration::Student(record)) => {
                assert_eq!(record.identity, ana());
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(sink.received.len(), 1);
        assert_eq!(form.record(), &StudentRecord::default());
    }

    #[test]
    fn student_scenario() {
        let mut form = RegistrationForm::<StudentRecord>::new();
        let mut sink = Recorder::default();
        fill(&mut form, "p1");
        form.on_submit(&mut sink);

        assert_eq!(
            sink.received,
            vec![Registration::Student(StudentRecord { identity: ana() })]
        );
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn student_scenario_with_mismatch() {
        let mut form = RegistrationForm::<StudentRecord>::new();
        let mut sink = Recorder::default();
        fill(&mut form, "p2");
        let before = form.record().clone();

        assert!(matches!(form.on_submit(&mut sink), SubmitOutcome::Blocked));
        assert!(form.password_mismatch());
        assert!(sink.received.is_empty());
        assert_eq!(form.record(), &before);
    }

    #[test]
    fn professor_carries_coordinator_flag() {
        let mut form = RegistrationForm::<ProfessorRecord>::new();
        let mut sink = Recorder::default();
        fill(&mut form, "p1");
        form.on_coordinator_toggle(true);
        assert!(form.is_coordinator());

        form.on_submit(&mut sink);
        assert_eq!(
            sink.received,
            vec![Registration::Professor(ProfessorRecord {
                identity: ana(),
                is_coordinator: true,
            })]
        );
        assert!(!form.is_coordinator());
    }

    #[test]
    fn coordinator_flag_does_not_affect_validation() {
        let mut form = RegistrationForm::<ProfessorRecord>::new();
        let mut sink = Recorder::default();
        fill(&mut form, "p2");
        form.on_coordinator_toggle(true);
        assert!(matches!(form.on_submit(&mut sink), SubmitOutcome::Blocked));
        assert!(form.is_coordinator());
    }

    #[test]
    fn missing_fields_block_without_mismatch() {
        let mut form = RegistrationForm::<StudentRecord>::new();
        let mut sink = Recorder::default();
        fill(&mut form, "p1");
        form.on_field_change(Field::LastName, String::new());
        form.on_field_change(Field::Email, "ana@".to_string());

        assert!(matches!(form.on_submit(&mut sink), SubmitOutcome::Blocked));
        assert!(!form.password_mismatch());
        assert_eq!(form.state(), FormState::SubmitBlocked);
        assert_eq!(form.field_error(Field::LastName), Some(FieldError::Required));
        assert_eq!(form.field_error(Field::Email), Some(FieldError::InvalidEmail));
        assert_eq!(form.field_error(Field::FirstName), None);
        assert!(sink.received.is_empty());

        form.on_field_change(Field::LastName, "Silva".to_string());
        form.on_field_change(Field::Email, "ana@x.com".to_string());
        assert_eq!(form.field_error(Field::LastName), Some(FieldError::Required));

        assert!(matches!(
            form.on_submit(&mut sink),
            SubmitOutcome::Registered(_)
        ));
        assert_eq!(form.field_error(Field::LastName), None);
    }

    #[test]
    fn sink_failure_keeps_record() {
        let mut form = RegistrationForm::<StudentRecord>::new();
        let mut sink = Recorder {
            broken: true,
            ..Default::default()
        };
        fill(&mut form, "p1");

        assert!(matches!(
            form.on_submit(&mut sink),
            SubmitOutcome::SinkFailed(_)
        ));
        assert_eq!(form.state(), FormState::Editing);
        assert!(form.sink_error().is_some());
        assert_eq!(form.record().identity, ana());

        sink.broken = false;
        assert!(matches!(
            form.on_submit(&mut sink),
            SubmitOutcome::Registered(_)
        ));
        assert!(form.sink_error().is_none());
    }
}
