use iced::{
    widget::text_input::{Catalog, Status, Style, StyleFn},
    Background, Border,
};

use super::{
    palette::{TextInput, TextInputPalette},
    Theme,
};

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
    text_input(&theme.colors.text_inputs.primary, status)
}

pub fn invalid(theme: &Theme, status: Status) -> Style {
    text_input(&theme.colors.text_inputs.invalid, status)
}

fn style(p: &TextInputPalette) -> Style {
    Style {
        background: Background::Color(p.background),
        border: if let Some(color) = p.border {
            Border {
                radius: 6.0.into(),
                width: 1.0,
                color,
            }
        } else {
            Border::default()
        },
        icon: p.icon,
        placeholder: p.placeholder,
        value: p.value,
        selection: p.selection,
    }
}

fn text_input(c: &TextInput, status: Status) -> Style {
    match status {
        Status::Active | Status::Hovered => style(&c.active),
        Status::Focused { .. } => style(&c.focused),
        Status::Disabled => style(&c.disabled),
    }
}
