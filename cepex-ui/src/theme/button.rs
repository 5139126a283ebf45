use iced::widget::button::{Catalog, Status, Style, StyleFn};
use iced::{Background, Border, Color};

use super::palette::{Button, ButtonPalette};
use super::Theme;

impl Catalog for Theme {
    type Class<'a> = StyleFn<'a, Self>;

    fn default<'a>() -> Self::Class<'a> {
        Box::new(primary)
    }

    fn style(&self, class: &Self::Class<'_>, status: Status) -> Style {
        class(self, status)
    }
}

pub fn primary(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.primary, status)
}

pub fn tab(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.tab, status)
}

pub fn tab_active(theme: &Theme, status: Status) -> Style {
    button(&theme.colors.buttons.tab_active, status)
}

fn style(p: &ButtonPalette, radius: f32) -> Style {
    Style {
        background: Some(Background::Color(p.background)),
        text_color: p.text,
        border: match p.border {
            Some(color) => Border {
                radius: radius.into(),
                width: 1.0,
                color,
            },
            None => Border {
                radius: radius.into(),
                ..Default::default()
            },
        },
        ..Default::default()
    }
}

fn button(p: &Button, status: Status) -> Style {
    match status {
        Status::Active => style(&p.active, p.radius),
        Status::Hovered => style(&p.hovered, p.radius),
        Status::Pressed => style(p.pressed.as_ref().unwrap_or(&p.hovered), p.radius),
        Status::Disabled => {
            if let Some(disabled) = p.disabled {
                style(&disabled, p.radius)
            } else {
                let active = style(&p.active, p.radius);
                Style {
                    text_color: Color {
                        a: 0.3,
                        ..active.text_color
                    },
                    ..active
                }
            }
        }
    }
}
