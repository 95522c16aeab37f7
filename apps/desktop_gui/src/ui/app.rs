//! App shell: frame loop, theme application, and view switching.

use std::path::PathBuf;

use card_core::{CardContent, FlowStep};
use eframe::egui;

use crate::controller::reducer::CardSession;
use crate::ui::photos::PhotoStore;
use crate::ui::theme::{self, RosePalette};
use crate::ui::widgets::HeartField;

pub struct CardApp {
    pub(crate) content: CardContent,
    pub(crate) session: CardSession,
    pub(crate) photos: PhotoStore,
    pub(crate) palette: RosePalette,
    pub(crate) hearts: HeartField,

    pub(crate) theme_applied: bool,

    // Per-control hover latches for proximity edge detection.
    pub(crate) decline_hover: bool,
    pub(crate) surprise_hover: bool,

    // View-transition bookkeeping consumed by the journey view.
    pub(crate) scroll_to_top: bool,
    pub(crate) journey_entered_at: Option<f64>,
    pub(crate) revealed_at: Option<f64>,
    // First time each timeline entry scrolled into view, for the
    // once-only entrance animation.
    pub(crate) entry_seen: Vec<Option<f64>>,
}

impl CardApp {
    pub fn new(content: CardContent, photos_root: PathBuf) -> Self {
        let mut rng = rand::rng();
        let entry_seen = vec![None; content.timeline.len()];
        Self {
            session: CardSession::new(&content),
            photos: PhotoStore::new(photos_root),
            palette: theme::rose_palette(),
            hearts: HeartField::new(&mut rng, 10),
            theme_applied: false,
            decline_hover: false,
            surprise_hover: false,
            scroll_to_top: false,
            journey_entered_at: None,
            revealed_at: None,
            entry_seen,
            content,
        }
    }

    fn apply_theme_if_needed(&mut self, ctx: &egui::Context) {
        if self.theme_applied {
            return;
        }
        let mut style = (*ctx.style()).clone();
        style.visuals = theme::visuals_for_card(&self.palette);
        style.text_styles = theme::card_text_styles();
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 8.0);
        ctx.set_style(style);
        self.theme_applied = true;
    }
}

impl eframe::App for CardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme_if_needed(ctx);
        theme::paint_page_background(ctx, &self.palette);
        self.hearts.paint(ctx, self.palette.heart);

        let mut events = Vec::new();
        match self.session.step() {
            FlowStep::Invitation => self.show_invitation(ctx, &mut events),
            FlowStep::Journey => self.show_journey(ctx, &mut events),
        }

        // Apply in arrival order; each handler sees the state the
        // previous one committed.
        let was_revealed = self.session.revealed();
        let mut rng = rand::rng();
        for event in events {
            self.session.apply(event, &mut rng);
        }

        let now = ctx.input(|i| i.time);
        if self.session.take_scroll_reset() {
            self.scroll_to_top = true;
            self.journey_entered_at = Some(now);
        }
        if !was_revealed && self.session.revealed() {
            self.revealed_at = Some(now);
        }

        // The ambient layer is always animating.
        ctx.request_repaint();
    }
}
