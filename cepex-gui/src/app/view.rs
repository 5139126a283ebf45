use iced::{widget::Space, Alignment, Length};

use cepex_ui::{
    component::{button, card, form::Form, notice, text},
    theme,
    widget::*,
};

use super::{App, FormMessage, Message, Notice};
use crate::registration::{ActiveForm, Field, Record, RegistrationForm, Role};

/// Role-specific wording of a form.
struct Wording {
    title: &'static str,
    submit: &'static str,
    registration_id_label: &'static str,
    registration_id_placeholder: &'static str,
    email_label: &'static str,
    email_placeholder: &'static str,
}

const STUDENT: Wording = Wording {
    title: "Student information",
    submit: "Register student",
    registration_id_label: "Registration ID",
    registration_id_placeholder: "e.g. 123456",
    email_label: "Email",
    email_placeholder: "youremail@domain.com",
};

const PROFESSOR: Wording = Wording {
    title: "Professor information",
    submit: "Register professor",
    registration_id_label: "Registration / staff ID",
    registration_id_placeholder: "e.g. PROF98765",
    email_label: "Institutional email",
    email_placeholder: "youremail@institution.edu.br",
};

impl Wording {
    fn label(&self, field: Field) -> &'static str {
        match field {
            Field::RegistrationId => self.registration_id_label,
            Field::Email => self.email_label,
            _ => field.label(),
        }
    }

    fn placeholder(&self, field: Field) -> &'static str {
        match field {
            Field::RegistrationId => self.registration_id_placeholder,
            Field::TaxId => "000.000.000-00",
            Field::Email => self.email_placeholder,
            _ => "",
        }
    }
}

pub fn app(app: &App) -> Element<'_, Message> {
    let active = app.selector().active_role();

    let header = Column::new()
        .push(text::h1("User registration").style(theme::text::accent))
        .push(text::p1_regular("CEPEX System").style(theme::text::secondary))
        .align_x(Alignment::Center)
        .spacing(8)
        .width(Length::Fill);

    let tabs = Row::new()
        .push(
            button::tab("Register student", active == Role::Student)
                .on_press(Message::SelectRole(Role::Student)),
        )
        .push(
            button::tab("Register professor", active == Role::Professor)
                .on_press(Message::SelectRole(Role::Professor)),
        )
        .width(Length::Fill);

    let form = match app.selector().active() {
        ActiveForm::Student(form) => registration_form(form, Message::Student, &STUDENT, None),
        ActiveForm::Professor(form) => registration_form(
            form,
            Message::Professor,
            &PROFESSOR,
            Some(coordinator_checkbox(form.is_coordinator())),
        ),
    };

    let content = card(
        Column::new()
            .push(header)
            .push(tabs)
            .push_maybe(app.notice().map(notice_view))
            .push(form)
            .spacing(30),
    )
    .max_width(760);

    Container::new(content)
        .padding(40)
        .center_x(Length::Fill)
        .height(Length::Fill)
        .style(theme::container::background)
        .into()
}

fn notice_view<'a>(n: &Notice) -> Element<'a, Message> {
    notice(
        Row::new()
            .push(text::p1_medium(n.message()).style(theme::text::success))
            .push(Space::with_width(Length::Fill))
            .push(button::tab("Dismiss", false).width(Length::Shrink).on_press(Message::DismissNotice))
            .align_y(Alignment::Center)
            .spacing(10),
    )
    .into()
}

fn coordinator_checkbox<'a>(checked: bool) -> Element<'a, Message> {
    CheckBox::new("Also register as coordinator", checked)
        .on_toggle(|c| Message::Professor(FormMessage::CoordinatorToggled(c)))
        .size(18)
        .text_size(text::P2_SIZE)
        .spacing(8)
        .into()
}

fn input<'a, R: Record>(
    form: &'a RegistrationForm<R>,
    field: Field,
    wrap: fn(FormMessage) -> Message,
    wording: &Wording,
) -> Element<'a, Message> {
    let on_change = move |value| wrap(FormMessage::FieldEdited(field, value));
    let placeholder = wording.placeholder(field);
    let value = form.value(field);
    let input = if field.is_secret() {
        Form::new_secure(placeholder, value, on_change)
    } else if field == Field::Email {
        Form::new_trimmed(placeholder, value, on_change)
    } else {
        Form::new(placeholder, value, on_change)
    };
    input
        .label(wording.label(field))
        .maybe_warning(form.field_error(field).map(|e| e.message()))
        .on_submit(wrap(FormMessage::Submit))
        .padding(10)
        .size(text::P1_SIZE)
        .into()
}

fn pair<'a, R: Record>(
    form: &'a RegistrationForm<R>,
    (left, right): (Field, Field),
    wrap: fn(FormMessage) -> Message,
    wording: &Wording,
) -> Element<'a, Message> {
    Row::new()
        .push(input(form, left, wrap, wording))
        .push(input(form, right, wrap, wording))
        .spacing(20)
        .width(Length::Fill)
        .into()
}

fn registration_form<'a, R: Record>(
    form: &'a RegistrationForm<R>,
    wrap: fn(FormMessage) -> Message,
    wording: &Wording,
    extra: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    Column::new()
        .push(text::h2(wording.title).style(theme::text::accent))
        .push(pair(form, (Field::RegistrationId, Field::TaxId), wrap, wording))
        .push(pair(form, (Field::FirstName, Field::LastName), wrap, wording))
        .push(input(form, Field::Email, wrap, wording))
        .push(pair(form, (Field::Password, Field::PasswordConfirm), wrap, wording))
        .push_maybe(extra)
        .push_maybe(
            form.password_mismatch()
                .then(|| text::p2_regular("Passwords do not match.").style(theme::text::error)),
        )
        .push_maybe(
            form.sink_error()
                .map(|e| text::p2_regular(e).style(theme::text::error)),
        )
        .push(
            Row::new()
                .push(Space::with_width(Length::Fill))
                .push(button::primary(wording.submit).on_press(wrap(FormMessage::Submit))),
        )
        .spacing(20)
        .width(Length::Fill)
        .into()
}
