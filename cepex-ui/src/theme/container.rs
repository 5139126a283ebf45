use iced::widget::container::{transparent, Catalog, Style, StyleFn};
use iced::{Background, Border};

use super::{palette::ContainerPalette, Theme};

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(transparent)
    }

    fn style(&self, class: &Self::Class<'_>) -> Style {
        class(self)
    }
}

pub fn background(theme: &Theme) -> Style {
    Style {
        background: Some(Background::Color(theme.colors.general.background)),
        ..Default::default()
    }
}

/// White card holding the registration forms.
pub fn form_card(theme: &Theme) -> Style {
    card(&theme.colors.cards.form)
}

pub fn notice(theme: &Theme) -> Style {
    card(&theme.colors.cards.notice)
}

fn card(c: &ContainerPalette) -> Style {
    Style {
        background: Some(Background::Color(c.background)),
        text_color: c.text,
        border: if let Some(color) = c.border {
            Border {
                color,
                width: 1.0,
                radius: 8.0.into(),
            }
        } else {
            Border {
                radius: 8.0.into(),
                ..Default::default()
            }
        },
        ..Default::default()
    }
}
