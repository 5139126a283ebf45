use crate::color;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
    pub general: General,
    pub text: Text,
    pub buttons: Buttons,
    pub cards: Cards,
    pub text_inputs: TextInputs,
    pub checkboxes: Checkboxes,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct General {
    pub background: iced::Color,
    pub foreground: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Text {
    pub primary: iced::Color,
    pub secondary: iced::Color,
    pub accent: iced::Color,
    pub success: iced::Color,
    pub error: iced::Color,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Buttons {
    pub primary: Button,
    pub tab: Button,
    pub tab_active: Button,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Button {
    pub active: ButtonPalette,
    pub hovered: ButtonPalette,
    pub pressed: Option<ButtonPalette>,
    pub disabled: Option<ButtonPalette>,
    pub radius: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonPalette {
    pub background: iced::Color,
    pub text: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cards {
    pub form: ContainerPalette,
    pub notice: ContainerPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ContainerPalette {
    pub background: iced::Color,
    pub text: Option<iced::Color>,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputs {
    pub primary: TextInput,
    pub invalid: TextInput,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInput {
    pub active: TextInputPalette,
    pub focused: TextInputPalette,
    pub disabled: TextInputPalette,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextInputPalette {
    pub background: iced::Color,
    pub icon: iced::Color,
    pub placeholder: iced::Color,
    pub value: iced::Color,
    pub selection: iced::Color,
    pub border: Option<iced::Color>,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Checkboxes {
    pub icon: iced::Color,
    pub text: iced::Color,
    pub background: iced::Color,
    pub checked_background: iced::Color,
    pub border: Option<iced::Color>,
}

impl std::default::Default for Palette {
    fn default() -> Self {
        let input = TextInputPalette {
            background: color::WHITE,
            icon: color::GREY_600,
            placeholder: color::GREY_400,
            value: color::GREY_800,
            selection: color::TRANSPARENT_SKY,
            border: Some(color::GREY_300),
        };
        Self {
            general: General {
                background: color::GREY_50,
                foreground: color::WHITE,
            },
            text: Text {
                primary: color::GREY_800,
                secondary: color::GREY_600,
                accent: color::SKY_700,
                success: color::GREEN,
                error: color::RED,
            },
            buttons: Buttons {
                primary: Button {
                    active: ButtonPalette {
                        background: color::SKY_600,
                        text: color::WHITE,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::SKY_700,
                        text: color::WHITE,
                        border: None,
                    },
                    pressed: Some(ButtonPalette {
                        background: color::SKY_700,
                        text: color::WHITE,
                        border: Some(color::SKY_500),
                    }),
                    disabled: None,
                    radius: 6.0,
                },
                tab: Button {
                    active: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::GREY_600,
                        border: None,
                    },
                    hovered: ButtonPalette {
                        background: color::TRANSPARENT,
                        text: color::SKY_600,
                        border: Some(color::SKY_600),
                    },
                    pressed: None,
                    disabled: None,
                    radius: 0.0,
                },
                tab_active: Button {
                    active: ButtonPalette {
                        background: color::SKY_50,
                        text: color::SKY_600,
                        border: Some(color::SKY_600),
                    },
                    hovered: ButtonPalette {
                        background: color::SKY_50,
                        text: color::SKY_600,
                        border: Some(color::SKY_600),
                    },
                    pressed: None,
                    disabled: None,
                    radius: 0.0,
                },
            },
            cards: Cards {
                form: ContainerPalette {
                    background: color::WHITE,
                    text: None,
                    border: Some(color::GREY_300),
                },
                notice: ContainerPalette {
                    background: color::SKY_50,
                    text: Some(color::SKY_700),
                    border: Some(color::SKY_500),
                },
            },
            text_inputs: TextInputs {
                primary: TextInput {
                    active: input,
                    focused: TextInputPalette {
                        border: Some(color::SKY_500),
                        ..input
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_50,
                        value: color::GREY_400,
                        ..input
                    },
                },
                invalid: TextInput {
                    active: TextInputPalette {
                        border: Some(color::RED),
                        ..input
                    },
                    focused: TextInputPalette {
                        border: Some(color::RED),
                        ..input
                    },
                    disabled: TextInputPalette {
                        background: color::GREY_50,
                        border: Some(color::RED),
                        ..input
                    },
                },
            },
            checkboxes: Checkboxes {
                icon: color::WHITE,
                text: color::GREY_700,
                background: color::WHITE,
                checked_background: color::SKY_600,
                border: Some(color::GREY_300),
            },
        }
    }
}
