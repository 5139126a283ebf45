use iced::Color;
pub const WHITE: Color = iced::Color::WHITE;
pub const TRANSPARENT: Color = iced::Color::TRANSPARENT;

pub const GREY_50: Color = Color::from_rgb(
    0xF3 as f32 / 255.0,
    0xF4 as f32 / 255.0,
    0xF6 as f32 / 255.0,
);
pub const GREY_300: Color = Color::from_rgb(
    0xD1 as f32 / 255.0,
    0xD5 as f32 / 255.0,
    0xDB as f32 / 255.0,
);
pub const GREY_400: Color = Color::from_rgb(
    0x9C as f32 / 255.0,
    0xA3 as f32 / 255.0,
    0xAF as f32 / 255.0,
);
pub const GREY_600: Color = Color::from_rgb(
    0x4B as f32 / 255.0,
    0x55 as f32 / 255.0,
    0x63 as f32 / 255.0,
);
pub const GREY_700: Color = Color::from_rgb(
    0x37 as f32 / 255.0,
    0x41 as f32 / 255.0,
    0x51 as f32 / 255.0,
);
pub const GREY_800: Color = Color::from_rgb(
    0x1F as f32 / 255.0,
    0x29 as f32 / 255.0,
    0x37 as f32 / 255.0,
);

// Institution accent (sky)
pub const SKY_50: Color = Color::from_rgb(
    0xF0 as f32 / 255.0,
    0xF9 as f32 / 255.0,
    0xFF as f32 / 255.0,
); // #F0F9FF
pub const SKY_500: Color = Color::from_rgb(
    0x0E as f32 / 255.0,
    0xA5 as f32 / 255.0,
    0xE9 as f32 / 255.0,
); // #0EA5E9
pub const SKY_600: Color = Color::from_rgb(
    0x02 as f32 / 255.0,
    0x84 as f32 / 255.0,
    0xC7 as f32 / 255.0,
); // #0284C7
pub const SKY_700: Color = Color::from_rgb(
    0x03 as f32 / 255.0,
    0x69 as f32 / 255.0,
    0xA1 as f32 / 255.0,
); // #0369A1
pub const TRANSPARENT_SKY: Color = Color::from_rgba(
    0x0E as f32 / 255.0,
    0xA5 as f32 / 255.0,
    0xE9 as f32 / 255.0,
    0.25,
);

pub const RED: Color = Color::from_rgb(
    0xDC as f32 / 255.0,
    0x26 as f32 / 255.0,
    0x26 as f32 / 255.0,
); // #DC2626

pub const GREEN: Color = Color::from_rgb(
    0x15 as f32 / 255.0,
    0x80 as f32 / 255.0,
    0x3D as f32 / 255.0,
); // #15803D
