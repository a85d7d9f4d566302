use crossterm::style::Color;

pub struct Theme {
    pub banner: Color,  // Blue
    pub prompt: Color,  // Grey
    pub success: Color, // Green
    pub fault: Color,   // Red
    pub menu: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    banner: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    },
    prompt: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    },
    success: Color::Rgb {
        r: 166,
        g: 227,
        b: 161,
    },
    fault: Color::Rgb {
        r: 243,
        g: 139,
        b: 168,
    },
    menu: Color::Rgb {
        r: 249,
        g: 226,
        b: 175,
    }, // Yellow, like a focused border
};
