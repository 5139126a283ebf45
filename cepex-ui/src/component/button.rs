use super::text::text;
use crate::font::SEMIBOLD;
use crate::{theme, widget::*};
use iced::widget::container;
use iced::Length;

pub fn primary<'a, T: 'a>(t: &'static str) -> Button<'a, T> {
    Button::new(
        container(text(t).font(SEMIBOLD).align_y(iced::Alignment::Center)).padding([5, 15]),
    )
    .style(theme::button::primary)
}

/// One half of a tab bar. The active tab keeps its highlight while hovered.
pub fn tab<'a, T: 'a>(t: &'static str, active: bool) -> Button<'a, T> {
    Button::new(
        container(text(t).font(SEMIBOLD))
            .padding(10)
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .style(if active {
        theme::button::tab_active
    } else {
        theme::button::tab
    })
}
