//! Reusable pieces: the evasive button, photo frames, floating hearts,
//! and the pulse used by hint text.

use card_core::EvasionOffset;
use eframe::egui;
use rand::Rng;

use crate::ui::theme::RosePalette;

pub struct EvasiveButtonResponse {
    pub entered: bool,
    pub clicked: bool,
}

/// Lay out a button at its natural spot, then draw it displaced by the
/// control's current offset.
///
/// Hover is edge-detected through `hover_latch`: one pointer entry
/// produces one `entered`, no matter how many frames the pointer rests
/// on the button. After a dodge the pointer is no longer over the moved
/// button, the latch clears, and the next approach fires again.
pub fn evasive_button(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    offset: EvasionOffset,
    hover_latch: &mut bool,
    button: egui::Button<'_>,
) -> EvasiveButtonResponse {
    let (base_rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let rect = base_rect.translate(egui::vec2(offset.x, offset.y));
    let response = ui.put(rect, button);

    let inside = response.hovered();
    let entered = inside && !*hover_latch;
    *hover_latch = inside;

    EvasiveButtonResponse {
        entered,
        clicked: response.clicked(),
    }
}

/// Square photo (center-cropped) or a placeholder when the photo is
/// unavailable. Returns the allocated rect.
pub fn photo_square(
    ui: &mut egui::Ui,
    photo: Option<(egui::TextureHandle, egui::Vec2)>,
    size: egui::Vec2,
    corner: u8,
    palette: &RosePalette,
) -> egui::Rect {
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    photo_square_at(ui, rect, photo, corner, palette);
    rect
}

/// Same as [`photo_square`] but into an explicit rect, for rows laid
/// out by hand.
pub fn photo_square_at(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    photo: Option<(egui::TextureHandle, egui::Vec2)>,
    corner: u8,
    palette: &RosePalette,
) {
    match photo {
        Some((texture, tex_size)) => {
            let image = egui::Image::new(&texture)
                .uv(center_square_uv(tex_size))
                .corner_radius(egui::CornerRadius::same(corner));
            ui.put(rect, image);
        }
        None => {
            ui.painter()
                .rect_filled(rect, egui::CornerRadius::same(corner), palette.accent_faint);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "♡",
                egui::FontId::proportional(rect.height() * 0.3),
                palette.heart,
            );
        }
    }
}

/// Circular photo with a white ring, drawn into an explicit rect so the
/// caller can overlap it across a header band.
pub fn circular_photo(
    ui: &mut egui::Ui,
    rect: egui::Rect,
    photo: Option<(egui::TextureHandle, egui::Vec2)>,
    palette: &RosePalette,
) {
    let radius = rect.width() / 2.0;
    match photo {
        Some((texture, tex_size)) => {
            let image = egui::Image::new(&texture)
                .uv(center_square_uv(tex_size))
                .corner_radius(egui::CornerRadius::same(radius as u8));
            ui.put(rect, image);
        }
        None => {
            ui.painter()
                .circle_filled(rect.center(), radius, palette.accent_soft);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                "♥",
                egui::FontId::proportional(radius),
                palette.accent,
            );
        }
    }
    ui.painter().circle_stroke(
        rect.center(),
        radius,
        egui::Stroke::new(4.0, egui::Color32::WHITE),
    );
}

/// Polaroid-style frame: white border, square photo, caption below.
pub fn polaroid(
    ui: &mut egui::Ui,
    photo: Option<(egui::TextureHandle, egui::Vec2)>,
    caption: &str,
    palette: &RosePalette,
) {
    egui::Frame::new()
        .fill(palette.card_background)
        .stroke(egui::Stroke::new(1.0, palette.card_stroke))
        .inner_margin(egui::Margin {
            left: 10,
            right: 10,
            top: 10,
            bottom: 20,
        })
        .show(ui, |ui| {
            let side = ui.available_width().min(260.0);
            ui.vertical_centered(|ui| {
                photo_square(ui, photo, egui::vec2(side, side), 0, palette);
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new(caption)
                        .italics()
                        .size(19.0)
                        .color(palette.ink),
                );
            });
        });
}

struct Heart {
    x_frac: f32,
    phase: f32,
    duration: f32,
    size: f32,
    sway: f32,
}

/// Ambient floating hearts drifting up the page on independent,
/// infinitely repeating loops. Shares nothing with the interaction
/// state.
pub struct HeartField {
    hearts: Vec<Heart>,
}

impl HeartField {
    pub fn new<R: Rng>(rng: &mut R, count: usize) -> Self {
        let hearts = (0..count)
            .map(|i| Heart {
                x_frac: rng.random::<f32>(),
                // Staggered starts so the field never empties out.
                phase: i as f32 * 1.5,
                duration: 10.0,
                size: 18.0 + rng.random::<f32>() * 10.0,
                sway: 8.0 + rng.random::<f32>() * 14.0,
            })
            .collect();
        Self { hearts }
    }

    pub fn paint(&self, ctx: &egui::Context, color: egui::Color32) {
        let time = ctx.input(|i| i.time) as f32;
        let rect = ctx.screen_rect();
        let painter = ctx.layer_painter(egui::LayerId::background());
        for heart in &self.hearts {
            let progress = ((time + heart.phase) / heart.duration).fract();
            let y = rect.bottom() + 40.0 - progress * (rect.height() + 120.0);
            let x = rect.left()
                + heart.x_frac * rect.width()
                + (time * 0.7 + heart.phase).sin() * heart.sway;
            let alpha = fade_in_out(progress);
            let faded = color.gamma_multiply(alpha);
            painter.text(
                egui::pos2(x, y),
                egui::Align2::CENTER_CENTER,
                "♥",
                egui::FontId::proportional(heart.size),
                faded,
            );
        }
    }
}

/// Opacity ramp over one loop: in at the bottom, out near the top.
fn fade_in_out(progress: f32) -> f32 {
    (1.0 - (2.0 * progress - 1.0).abs()).clamp(0.0, 1.0)
}

/// Slow breathing alpha for hint text.
pub fn pulse_alpha(time: f64) -> f32 {
    let wave = ((time * 2.0).sin() * 0.5 + 0.5) as f32;
    0.4 + wave * 0.6
}

fn center_square_uv(size: egui::Vec2) -> egui::Rect {
    if size.x > size.y {
        let margin = (1.0 - size.y / size.x) / 2.0;
        egui::Rect::from_min_max(egui::pos2(margin, 0.0), egui::pos2(1.0 - margin, 1.0))
    } else if size.y > size.x {
        let margin = (1.0 - size.x / size.y) / 2.0;
        egui::Rect::from_min_max(egui::pos2(0.0, margin), egui::pos2(1.0, 1.0 - margin))
    } else {
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::{center_square_uv, fade_in_out, pulse_alpha};
    use eframe::egui;

    #[test]
    fn fade_peaks_mid_loop_and_vanishes_at_the_ends() {
        assert_eq!(fade_in_out(0.0), 0.0);
        assert_eq!(fade_in_out(0.5), 1.0);
        assert_eq!(fade_in_out(1.0), 0.0);
    }

    #[test]
    fn pulse_stays_visible() {
        for step in 0..100 {
            let alpha = pulse_alpha(step as f64 * 0.1);
            assert!((0.4..=1.0).contains(&alpha));
        }
    }

    #[test]
    fn uv_crop_centers_the_short_axis() {
        let wide = center_square_uv(egui::vec2(200.0, 100.0));
        assert_eq!(wide.min.x, 0.25);
        assert_eq!(wide.max.x, 0.75);
        assert_eq!(wide.min.y, 0.0);

        let square = center_square_uv(egui::vec2(128.0, 128.0));
        assert_eq!(square.min, egui::pos2(0.0, 0.0));
        assert_eq!(square.max, egui::pos2(1.0, 1.0));
    }
}
