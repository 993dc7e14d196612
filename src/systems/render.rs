//! Frame drawing with Raylib.
//!
//! Draw order: clear color, sprites sorted by [`ZIndex`], rectangles, texts
//! and finally the transition overlay from [`ScreenFade`].

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::dynamictext::DynamicText;
use crate::components::rectshape::RectShape;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::resources::clearcolor::ClearColor;
use crate::resources::screenfade::ScreenFade;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;

/// Draws the whole frame. Runs last in the schedule.
#[allow(clippy::too_many_arguments)]
pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    textures: Res<TextureStore>,
    clear: Res<ClearColor>,
    fade: Res<ScreenFade>,
    screen: Res<ScreenSize>,
    sprites: Query<(&Sprite, &ScreenPosition, Option<&Scale>, Option<&ZIndex>)>,
    rects: Query<(&RectShape, &ScreenPosition)>,
    texts: Query<(&DynamicText, &ScreenPosition)>,
) {
    let mut d = rl.begin_drawing(&th);
    d.clear_background(clear.0);

    let mut to_draw: Vec<_> = sprites.iter().collect();
    to_draw.sort_by_key(|(_, _, _, z)| z.copied().unwrap_or_default());

    for (sprite, pos, scale, _) in to_draw {
        let Some(tex) = textures.get(&sprite.tex_key) else {
            continue;
        };
        let src = Rectangle::new(0.0, 0.0, tex.width() as f32, tex.height() as f32);
        let dest = sprite.bounds(pos.pos, scale);
        d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
    }

    for (rect, pos) in rects.iter() {
        d.draw_rectangle_rec(rect.bounds(pos.pos), rect.color);
    }

    let font = d.get_font_default();
    for (text, pos) in texts.iter() {
        // Spacing as raylib's draw_text uses it.
        let spacing = text.font_size / 10.0;
        let size = font.measure_text(&text.content, text.font_size, spacing);
        let top_left = Vector2 {
            x: pos.pos.x - size.x * text.origin.x,
            y: pos.pos.y - size.y * text.origin.y,
        };
        d.draw_text_ex(
            &font,
            &text.content,
            top_left,
            text.font_size,
            spacing,
            text.color,
        );
    }

    if fade.alpha > 0.0 {
        let alpha = (fade.alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        d.draw_rectangle(0, 0, screen.w, screen.h, Color::new(0, 0, 0, alpha));
    }
}
