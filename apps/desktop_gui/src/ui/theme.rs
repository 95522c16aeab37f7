//! Rose theme: palette, visuals, and text styles for the card.

use std::collections::BTreeMap;

use eframe::egui;

/// The card's fixed palette, echoing the rose-and-slate look of the
/// original design.
#[derive(Debug, Clone, Copy)]
pub struct RosePalette {
    pub page_background: egui::Color32,
    pub page_dots: egui::Color32,
    pub card_background: egui::Color32,
    pub card_stroke: egui::Color32,
    pub header_band: egui::Color32,
    pub footer_band: egui::Color32,

    pub accent: egui::Color32,
    pub accent_hover: egui::Color32,
    pub accent_muted: egui::Color32,
    pub accent_soft: egui::Color32,
    pub accent_faint: egui::Color32,
    pub heart: egui::Color32,
    pub timeline_spine: egui::Color32,

    pub ink: egui::Color32,
    pub muted: egui::Color32,
    pub faint: egui::Color32,
}

pub fn rose_palette() -> RosePalette {
    RosePalette {
        page_background: egui::Color32::from_rgb(252, 250, 251),
        page_dots: egui::Color32::from_rgb(255, 228, 230),
        card_background: egui::Color32::WHITE,
        card_stroke: egui::Color32::from_rgb(255, 241, 242),
        header_band: egui::Color32::from_rgb(255, 241, 243),
        footer_band: egui::Color32::from_rgb(248, 250, 252),

        accent: egui::Color32::from_rgb(244, 63, 94),
        accent_hover: egui::Color32::from_rgb(225, 29, 72),
        accent_muted: egui::Color32::from_rgb(251, 113, 133),
        accent_soft: egui::Color32::from_rgb(255, 228, 230),
        accent_faint: egui::Color32::from_rgb(255, 241, 242),
        heart: egui::Color32::from_rgb(254, 205, 211),
        timeline_spine: egui::Color32::from_rgb(253, 164, 175),

        ink: egui::Color32::from_rgb(30, 41, 59),
        muted: egui::Color32::from_rgb(100, 116, 139),
        faint: egui::Color32::from_rgb(203, 213, 225),
    }
}

pub fn visuals_for_card(palette: &RosePalette) -> egui::Visuals {
    let mut visuals = egui::Visuals::light();
    visuals.override_text_color = Some(palette.ink);
    visuals.window_fill = palette.card_background;
    visuals.panel_fill = palette.page_background;
    visuals.extreme_bg_color = palette.accent_faint;
    visuals.faint_bg_color = palette.footer_band;
    visuals.hyperlink_color = palette.accent;
    visuals.selection.bg_fill = palette.accent_soft;
    visuals.widgets.hovered.bg_fill = palette.accent_hover;
    visuals.widgets.active.bg_fill = palette.accent;
    visuals.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, palette.accent_soft);
    visuals
}

pub fn card_text_styles() -> BTreeMap<egui::TextStyle, egui::FontId> {
    let mut styles = egui::Style::default().text_styles;
    styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(28.0),
    );
    styles.insert(egui::TextStyle::Body, egui::FontId::proportional(15.0));
    styles.insert(egui::TextStyle::Button, egui::FontId::proportional(16.0));
    styles.insert(egui::TextStyle::Small, egui::FontId::proportional(11.0));
    styles
}

/// Page background with its faint dot grid. Painted into the background
/// layer before the panels, which use transparent frames so it shows
/// through.
pub fn paint_page_background(ctx: &egui::Context, palette: &RosePalette) {
    let rect = ctx.screen_rect();
    let painter = ctx.layer_painter(egui::LayerId::background());
    painter.rect_filled(rect, egui::CornerRadius::ZERO, palette.page_background);
    let spacing = 20.0;
    let mut y = rect.top();
    while y < rect.bottom() {
        let mut x = rect.left();
        while x < rect.right() {
            painter.circle_filled(egui::pos2(x, y), 1.0, palette.page_dots);
            x += spacing;
        }
        y += spacing;
    }
}
