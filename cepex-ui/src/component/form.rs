use iced::Length;

use crate::{component::text, theme, widget::*};

pub struct Form<'a, Message> {
    label: Option<&'a str>,
    input: TextInput<'a, Message>,
    warning: Option<&'a str>,
}

impl<'a, Message: 'a> Form<'a, Message>
where
    Message: Clone,
{
    /// Creates a new [`Form`].
    ///
    /// It expects:
    /// - a placeholder
    /// - the current value
    /// - a function that produces a message when the [`Form`] changes
    pub fn new<F>(placeholder: &str, value: &str, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            label: None,
            input: TextInput::new(placeholder, value).on_input(on_change),
            warning: None,
        }
    }

    /// Creates a new [`Form`] that trims input values before applying the `on_change` function.
    pub fn new_trimmed<F>(placeholder: &str, value: &str, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            label: None,
            input: TextInput::new(placeholder, value)
                .on_input(move |s| on_change(s.trim().to_string())),
            warning: None,
        }
    }

    /// Creates a new [`Form`] whose value is masked, for passwords.
    pub fn new_secure<F>(placeholder: &str, value: &str, on_change: F) -> Self
    where
        F: 'a + Fn(String) -> Message,
    {
        Self {
            label: None,
            input: TextInput::new(placeholder, value)
                .on_input(on_change)
                .secure(true),
            warning: None,
        }
    }

    /// Sets the label displayed above the input.
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Sets the [`Form`] with a warning message, rendering it as invalid.
    pub fn maybe_warning(mut self, warning: Option<&'a str>) -> Self {
        self.warning = warning;
        self
    }

    /// Sets the message produced when Enter is pressed in the input.
    pub fn on_submit(mut self, message: Message) -> Self {
        self.input = self.input.on_submit(message);
        self
    }

    pub fn padding(mut self, units: u16) -> Self {
        self.input = self.input.padding(units);
        self
    }

    pub fn size(mut self, size: u16) -> Self {
        self.input = self.input.size(size);
        self
    }
}

impl<'a, Message: 'a + Clone> From<Form<'a, Message>> for Element<'a, Message> {
    fn from(form: Form<'a, Message>) -> Element<'a, Message> {
        let invalid = form.warning.is_some();
        Container::new(
            Column::new()
                .push_maybe(
                    form.label
                        .map(|label| text::p2_medium(label).style(theme::text::secondary)),
                )
                .push(if invalid {
                    form.input.style(theme::text_input::invalid)
                } else {
                    form.input
                })
                .push_maybe(
                    form.warning
                        .map(|message| text::caption(message).style(theme::text::error)),
                )
                .width(Length::Fill)
                .spacing(5),
        )
        .width(Length::Fill)
        .into()
    }
}
