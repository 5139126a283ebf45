pub mod button;
pub mod form;
pub mod text;

use iced::Length;

use crate::{theme, widget::*};

/// Rounded card with the notice palette, used for operator confirmations.
pub fn notice<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(15)
        .width(Length::Fill)
        .style(theme::container::notice)
}

/// Rounded white card holding a form or any grouped content.
pub fn card<'a, T: 'a>(content: impl Into<Element<'a, T>>) -> Container<'a, T> {
    Container::new(content)
        .padding(40)
        .width(Length::Fill)
        .style(theme::container::form_card)
}
