use ggez::graphics::{Canvas, Color, DrawParam, PxScale, Text, TextLayout};
use ggez::Context;

use crate::rendering::{NormRect, Notice};

/// A line of text centred on a rectangle of the unit square
pub struct Message {
    pub text: String,
    pub anchor: NormRect,
    pub font_size: f32,
    pub color: Color,
}

impl Message {
    pub const DEFAULT_FONT_SIZE: f32 = 32.;

    pub fn notice(notice: Notice) -> Self {
        Self {
            text: notice.text.to_string(),
            anchor: NormRect::OVERLAY,
            font_size: Self::DEFAULT_FONT_SIZE,
            color: notice.color,
        }
    }
}

pub struct MessageDrawable {
    pub text: Text,
    pub dest: [f32; 2],
    pub color: Color,
}

impl MessageDrawable {
    pub fn draw(&self, canvas: &mut Canvas) {
        let dp = DrawParam::default().dest(self.dest).color(self.color);

        canvas.draw(&self.text, dp)
    }
}

impl Message {
    pub fn get_drawable(&self, ctx: &Context) -> MessageDrawable {
        let (width, height) = ctx.gfx.drawable_size();
        let rect = self.anchor.to_screen(width, height);

        // shrink the text to fit the banner on short windows
        let font_size = self.font_size.min(rect.h * 0.8);

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(font_size))
            .set_layout(TextLayout::center());

        MessageDrawable {
            text,
            dest: [rect.x + rect.w / 2., rect.y + rect.h / 2.],
            color: self.color,
        }
    }
}
