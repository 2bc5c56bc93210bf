use ggez::graphics::Color;

pub struct Palette {
    pub background: Color,
    pub snake: Color,
    pub apple: Color,
    pub start_overlay: Color,
    pub game_over_overlay: Color,
    pub notice: Color,
}

impl Palette {
    pub const CLASSIC: Self = Self {
        background: Color::BLACK,
        snake: Color::GREEN,
        apple: Color::RED,
        start_overlay: Color::WHITE,
        game_over_overlay: Color::RED,
        notice: Color::BLACK,
    };
}

impl Default for Palette {
    fn default() -> Self {
        Self::CLASSIC
    }
}
