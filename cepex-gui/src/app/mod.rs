pub mod message;
mod view;

use iced::Task;
use tracing::{debug, warn};

pub use message::{FormMessage, Message};

use cepex_ui::widget::Element;

use crate::{
    registration::{
        ProfessorRecord, Record, RegistrationForm, Role, RoleSelector, SubmitOutcome,
    },
    sink::RegistrationSink,
};

/// Confirmation shown to the operator after a registration went through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub role: Role,
    pub name: String,
}

impl Notice {
    pub fn message(&self) -> String {
        format!("{} registration recorded for {}.", self.role, self.name)
    }
}

pub struct App {
    selector: RoleSelector,
    sink: Box<dyn RegistrationSink>,
    notice: Option<Notice>,
}

impl App {
    pub fn new(sink: Box<dyn RegistrationSink>) -> (Self, Task<Message>) {
        (
            Self {
                selector: RoleSelector::new(),
                sink,
                notice: None,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        format!("CEPEX - {} registration", self.selector.active_role())
    }

    pub fn selector(&self) -> &RoleSelector {
        &self.selector
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SelectRole(role) => {
                if role != self.selector.active_role() {
                    self.notice = None;
                }
                self.selector.select_role(role);
            }
            Message::DismissNotice => self.notice = None,
            Message::Student(msg) => match self.selector.student_mut() {
                Some(form) => {
                    if let Some(notice) = apply(form, msg, self.sink.as_mut(), |_, _| {}) {
                        self.notice = Some(notice);
                    }
                }
                None => debug!("Ignoring {:?}: student form is not shown", msg),
            },
            Message::Professor(msg) => match self.selector.professor_mut() {
                Some(form) => {
                    let toggle = |form: &mut RegistrationForm<ProfessorRecord>, checked| {
                        form.on_coordinator_toggle(checked)
                    };
                    if let Some(notice) = apply(form, msg, self.sink.as_mut(), toggle) {
                        self.notice = Some(notice);
                    }
                }
                None => debug!("Ignoring {:?}: professor form is not shown", msg),
            },
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::app(self)
    }
}

/// Route a form message to `form`. Returns a notice when a submit went through.
fn apply<R: Record>(
    form: &mut RegistrationForm<R>,
    msg: FormMessage,
    sink: &mut dyn RegistrationSink,
    on_toggle: impl FnOnce(&mut RegistrationForm<R>, bool),
) -> Option<Notice> {
    match msg {
        FormMessage::FieldEdited(field, value) => {
            form.on_field_change(field, value);
            None
        }
        FormMessage::CoordinatorToggled(checked) => {
            on_toggle(form, checked);
            None
        }
        FormMessage::Submit => match form.on_submit(sink) {
            SubmitOutcome::Registered(registration) => Some(Notice {
                role: registration.role(),
                name: registration.identity().full_name(),
            }),
            SubmitOutcome::Blocked => None,
            SubmitOutcome::SinkFailed(e) => {
                warn!("{} registration kept for retry: {}", R::ROLE, e);
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        registration::{ActiveForm, Field, Registration},
        sink::SinkError,
    };
    use std::{cell::RefCell, rc::Rc};

    #[derive(Clone, Default)]
    struct Shared(Rc<RefCell<Vec<Registration>>>);

    impl RegistrationSink for Shared {
        fn register(&mut self, registration: &Registration) -> Result<(), SinkError> {
            self.0.borrow_mut().push(registration.clone());
            Ok(())
        }
    }

    fn app() -> (App, Shared) {
        let sink = Shared::default();
        let (app, _) = App::new(Box::new(sink.clone()));
        (app, sink)
    }

    fn fill(app: &mut App, wrap: fn(FormMessage) -> Message) {
        for (field, value) in [
            (Field::RegistrationId, "PROF98765"),
            (Field::TaxId, "000.000.000-00"),
            (Field::FirstName, "Ana"),
            (Field::LastName, "Silva"),
            (Field::Email, "ana@instituicao.edu.br"),
            (Field::Password, "p1"),
            (Field::PasswordConfirm, "p1"),
        ] {
            let _ = app.update(wrap(FormMessage::FieldEdited(field, value.to_string())));
        }
    }

    #[test]
    fn professor_registration_flow() {
        let (mut app, sink) = app();
        let _ = app.update(Message::SelectRole(Role::Professor));
        fill(&mut app, Message::Professor);
        let _ = app.update(Message::Professor(FormMessage::CoordinatorToggled(true)));
        let _ = app.update(Message::Professor(FormMessage::Submit));

        let received = sink.0.borrow();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].is_coordinator(), Some(true));
        assert_eq!(
            app.notice().map(|n| n.message()),
            Some("Professor registration recorded for Ana Silva.".to_string())
        );
    }

    #[test]
    fn messages_for_hidden_form_are_ignored() {
        let (mut app, sink) = app();
        fill(&mut app, Message::Professor);
        let _ = app.update(Message::Professor(FormMessage::Submit));
        assert!(sink.0.borrow().is_empty());
        match app.selector().active() {
            ActiveForm::Student(form) => assert_eq!(form.value(Field::FirstName), ""),
            ActiveForm::Professor(_) => panic!("professor form must not be mounted"),
        }
    }

    #[test]
    fn coordinator_toggle_is_ignored_by_student_form() {
        let (mut app, sink) = app();
        fill(&mut app, Message::Student);
        let _ = app.update(Message::Student(FormMessage::CoordinatorToggled(true)));
        let _ = app.update(Message::Student(FormMessage::Submit));
        assert_eq!(sink.0.borrow()[0].is_coordinator(), None);
    }

    #[test]
    fn notice_cleared_by_switching_role() {
        let (mut app, _sink) = app();
        fill(&mut app, Message::Student);
        let _ = app.update(Message::Student(FormMessage::Submit));
        assert!(app.notice().is_some());

        // Reselecting the shown role keeps it.
        let _ = app.update(Message::SelectRole(Role::Student));
        assert!(app.notice().is_some());

        let _ = app.update(Message::SelectRole(Role::Professor));
        assert!(app.notice().is_none());
    }

    #[test]
    fn blocked_submit_has_no_notice() {
        let (mut app, sink) = app();
        fill(&mut app, Message::Student);
        let _ = app.update(Message::Student(FormMessage::FieldEdited(
            Field::PasswordConfirm,
            "p2".to_string(),
        )));
        let _ = app.update(Message::Student(FormMessage::Submit));
        assert!(app.notice().is_none());
        assert!(sink.0.borrow().is_empty());
        match app.selector().active() {
            ActiveForm::Student(form) => assert!(form.password_mismatch()),
            ActiveForm::Professor(_) => panic!("student form must be mounted"),
        }

        let _ = app.update(Message::DismissNotice);
        assert!(app.notice().is_none());
    }

    #[test]
    fn title_follows_role() {
        let (mut app, _sink) = app();
        assert_eq!(app.title(), "CEPEX - Student registration");
        let _ = app.update(Message::SelectRole(Role::Professor));
        assert_eq!(app.title(), "CEPEX - Professor registration");
    }
}
