//! The two views: the invitation card and the journey timeline with its
//! closing card. Views only read session state and report interaction
//! events; the reducer applies them after the frame is laid out.

use card_core::TimelineSide;
use eframe::egui;

use crate::controller::events::{EvasiveTarget, InteractionEvent};
use crate::ui::app::CardApp;
use crate::ui::theme::RosePalette;
use crate::ui::widgets;

const CARD_CORNER: u8 = 24;

impl CardApp {
    pub(crate) fn show_invitation(
        &mut self,
        ctx: &egui::Context,
        events: &mut Vec<InteractionEvent>,
    ) {
        let now = ctx.input(|i| i.time);
        let CardApp {
            content,
            session,
            photos,
            palette,
            decline_hover,
            ..
        } = self;
        let palette = *palette;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let top_space = (ctx.screen_rect().height() * 0.06).clamp(12.0, 64.0);
                    ui.add_space(top_space);

                    ui.vertical_centered(|ui| {
                        ui.set_width(ui.available_width().clamp(320.0, 420.0));
                        egui::Frame::new()
                            .fill(palette.card_background)
                            .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                            .corner_radius(egui::CornerRadius::same(CARD_CORNER))
                            .show(ui, |ui| {
                                // Header band with the portrait overlapping its lower edge.
                                let (band_rect, _) = ui.allocate_exact_size(
                                    egui::vec2(ui.available_width(), 108.0),
                                    egui::Sense::hover(),
                                );
                                ui.painter().rect_filled(
                                    band_rect,
                                    egui::CornerRadius {
                                        nw: CARD_CORNER,
                                        ne: CARD_CORNER,
                                        sw: 0,
                                        se: 0,
                                    },
                                    palette.header_band,
                                );
                                let portrait = content
                                    .portrait_photo()
                                    .and_then(|reference| photos.texture(ctx, reference));
                                let avatar_rect = egui::Rect::from_center_size(
                                    egui::pos2(band_rect.center().x, band_rect.bottom()),
                                    egui::vec2(96.0, 96.0),
                                );
                                widgets::circular_photo(ui, avatar_rect, portrait, &palette);
                                let badge = avatar_rect.center() + egui::vec2(34.0, 34.0);
                                ui.painter().circle_filled(badge, 12.0, egui::Color32::WHITE);
                                ui.painter().circle_filled(badge, 9.0, palette.accent);
                                ui.painter().text(
                                    badge,
                                    egui::Align2::CENTER_CENTER,
                                    "♥",
                                    egui::FontId::proportional(10.0),
                                    egui::Color32::WHITE,
                                );
                                ui.add_space(56.0);

                                egui::Frame::NONE
                                    .inner_margin(egui::Margin::symmetric(30, 0))
                                    .show(ui, |ui| {
                                        ui.vertical_centered(|ui| {
                                            ui.label(
                                                egui::RichText::new(content.kicker.to_uppercase())
                                                    .size(10.0)
                                                    .strong()
                                                    .color(palette.accent_muted),
                                            );
                                            ui.add_space(4.0);
                                            ui.label(
                                                egui::RichText::new(&content.headline)
                                                    .heading()
                                                    .strong()
                                                    .color(palette.ink),
                                            );
                                            ui.label(
                                                egui::RichText::new(&content.recipient)
                                                    .heading()
                                                    .italics()
                                                    .color(palette.accent),
                                            );
                                            ui.add_space(8.0);
                                            heart_divider(ui, &palette);
                                            ui.add_space(10.0);
                                            for paragraph in &content.message {
                                                ui.label(
                                                    egui::RichText::new(paragraph)
                                                        .color(palette.muted),
                                                );
                                                ui.add_space(4.0);
                                            }
                                            ui.add_space(6.0);
                                            ui.label(
                                                egui::RichText::new(&content.sender)
                                                    .strong()
                                                    .size(17.0)
                                                    .color(palette.accent),
                                            );
                                            ui.add_space(18.0);

                                            let accept = egui::Button::new(
                                                egui::RichText::new(&content.accept_label)
                                                    .strong()
                                                    .size(18.0)
                                                    .color(egui::Color32::WHITE),
                                            )
                                            .fill(palette.accent)
                                            .corner_radius(egui::CornerRadius::same(16))
                                            .min_size(egui::vec2(ui.available_width(), 52.0));
                                            if ui.add(accept).clicked() {
                                                events.push(InteractionEvent::Accepted);
                                            }

                                            ui.add_space(8.0);
                                            let decline = egui::Button::new(
                                                egui::RichText::new(&content.decline_label)
                                                    .size(12.0)
                                                    .color(palette.faint),
                                            )
                                            .fill(egui::Color32::TRANSPARENT)
                                            .stroke(egui::Stroke::NONE);
                                            let response = widgets::evasive_button(
                                                ui,
                                                egui::vec2(170.0, 28.0),
                                                session.decline().offset(),
                                                decline_hover,
                                                decline,
                                            );
                                            if response.entered {
                                                events.push(InteractionEvent::Proximity(
                                                    EvasiveTarget::Decline,
                                                ));
                                            }
                                            if response.clicked {
                                                events.push(InteractionEvent::Activated(
                                                    EvasiveTarget::Decline,
                                                ));
                                            }
                                            ui.add_space(16.0);
                                        });
                                    });

                                // Teaser footer: first photos, still muted.
                                egui::Frame::new()
                                    .fill(palette.footer_band)
                                    .corner_radius(egui::CornerRadius {
                                        nw: 0,
                                        ne: 0,
                                        sw: CARD_CORNER,
                                        se: CARD_CORNER,
                                    })
                                    .inner_margin(egui::Margin::symmetric(20, 16))
                                    .show(ui, |ui| {
                                        ui.vertical_centered(|ui| {
                                            ui.label(
                                                egui::RichText::new("A JOURNEY WAITING FOR YOU…")
                                                    .size(9.0)
                                                    .color(palette.muted),
                                            );
                                            ui.add_space(8.0);

                                            let thumb = 48.0;
                                            let gap = 10.0;
                                            let count = content.teaser_photos().count() as f32;
                                            let row_width = count * thumb + (count - 1.0).max(0.0) * gap;
                                            let (row_rect, _) = ui.allocate_exact_size(
                                                egui::vec2(row_width, thumb),
                                                egui::Sense::hover(),
                                            );
                                            let mut x = row_rect.left();
                                            for entry in content.teaser_photos() {
                                                let rect = egui::Rect::from_min_size(
                                                    egui::pos2(x, row_rect.top()),
                                                    egui::vec2(thumb, thumb),
                                                );
                                                let texture = photos.texture(ctx, &entry.photo);
                                                widgets::photo_square_at(
                                                    ui, rect, texture, 12, &palette,
                                                );
                                                x += thumb + gap;
                                            }

                                            ui.add_space(8.0);
                                            let hint_color = palette
                                                .accent_muted
                                                .gamma_multiply(widgets::pulse_alpha(now));
                                            ui.label(
                                                egui::RichText::new("SAY YES TO UNLOCK OUR STORY")
                                                    .size(9.0)
                                                    .strong()
                                                    .color(hint_color),
                                            );
                                        });
                                    });
                            });
                    });
                    ui.add_space(40.0);
                });
            });
    }

    pub(crate) fn show_journey(&mut self, ctx: &egui::Context, events: &mut Vec<InteractionEvent>) {
        let now = ctx.input(|i| i.time);
        let entered_at = self.journey_entered_at.unwrap_or(now);
        let intro_alpha = (((now - entered_at) / 0.6).clamp(0.0, 1.0)) as f32;
        let reset_scroll = std::mem::take(&mut self.scroll_to_top);
        let palette = self.palette;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let mut scroll = egui::ScrollArea::vertical();
                if reset_scroll {
                    scroll = scroll.vertical_scroll_offset(0.0);
                }
                scroll.show(ui, |ui| {
                    ui.add_space(48.0);
                    ui.scope(|ui| {
                        ui.set_opacity(intro_alpha);
                        ui.vertical_centered(|ui| {
                            egui::Frame::new()
                                .fill(palette.accent_soft)
                                .corner_radius(egui::CornerRadius::same(12))
                                .inner_margin(egui::Margin::symmetric(12, 5))
                                .show(ui, |ui| {
                                    ui.label(
                                        egui::RichText::new(&self.content.journey_badge)
                                            .size(11.0)
                                            .strong()
                                            .color(palette.accent_hover),
                                    );
                                });
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(&self.content.journey_title)
                                    .size(44.0)
                                    .strong()
                                    .color(palette.ink),
                            );
                            ui.add_space(6.0);
                            ui.scope(|ui| {
                                ui.set_max_width(440.0);
                                ui.label(
                                    egui::RichText::new(&self.content.journey_intro)
                                        .color(palette.muted),
                                );
                            });
                        });
                    });
                    ui.add_space(48.0);

                    self.timeline_section(ui, now);
                    ui.add_space(36.0);
                    self.closing_section(ui, now, events);
                    ui.add_space(64.0);
                });
            });
    }

    fn timeline_section(&mut self, ui: &mut egui::Ui, now: f64) {
        let CardApp {
            content,
            photos,
            palette,
            entry_seen,
            ..
        } = self;
        let palette = *palette;

        ui.vertical_centered(|ui| {
            ui.set_width(ui.available_width().min(900.0));
            let spine_x = ui.max_rect().center().x;
            let top_y = ui.cursor().top();
            let mut dots = Vec::new();

            for (index, entry) in content.timeline.iter().enumerate() {
                let side = TimelineSide::for_index(index);
                let alpha = entry_seen[index]
                    .map(|seen| ((now - seen) / 0.6).clamp(0.0, 1.0) as f32)
                    .unwrap_or(0.0);
                dots.push(egui::pos2(spine_x, ui.cursor().top() + 28.0));

                let texture = photos.texture(ui.ctx(), &entry.photo);
                let row = ui.scope(|ui| {
                    ui.set_opacity(alpha);
                    ui.columns(2, |columns| {
                        let (photo_column, date_column) = match side {
                            TimelineSide::Left => (0, 1),
                            TimelineSide::Right => (1, 0),
                        };

                        columns[date_column].with_layout(
                            egui::Layout::top_down(match side {
                                // Pill hugs the spine from whichever side it is on.
                                TimelineSide::Left => egui::Align::Min,
                                TimelineSide::Right => egui::Align::Max,
                            }),
                            |ui| {
                                ui.add_space(16.0);
                                egui::Frame::NONE
                                    .inner_margin(match side {
                                        TimelineSide::Left => egui::Margin {
                                            left: 24,
                                            right: 0,
                                            top: 0,
                                            bottom: 0,
                                        },
                                        TimelineSide::Right => egui::Margin {
                                            left: 0,
                                            right: 24,
                                            top: 0,
                                            bottom: 0,
                                        },
                                    })
                                    .show(ui, |ui| {
                                        date_pill(ui, &entry.date, &palette);
                                    });
                            },
                        );

                        columns[photo_column].with_layout(
                            egui::Layout::top_down(egui::Align::Center),
                            |ui| {
                                ui.set_max_width(300.0);
                                widgets::polaroid(ui, texture, &entry.caption, &palette);
                            },
                        );
                    });
                });

                if entry_seen[index].is_none() && ui.clip_rect().intersects(row.response.rect) {
                    entry_seen[index] = Some(now);
                }
                ui.add_space(40.0);
            }

            // Spine and dots go on last, once the row heights are known.
            let bottom_y = ui.cursor().top() - 40.0;
            let spine = egui::Shape::dashed_line(
                &[egui::pos2(spine_x, top_y), egui::pos2(spine_x, bottom_y)],
                egui::Stroke::new(2.0, palette.timeline_spine),
                8.0,
                6.0,
            );
            ui.painter().extend(spine);
            for dot in dots {
                ui.painter().circle_filled(dot, 8.0, egui::Color32::WHITE);
                ui.painter().circle_filled(dot, 5.5, palette.accent);
            }
        });
    }

    fn closing_section(&mut self, ui: &mut egui::Ui, now: f64, events: &mut Vec<InteractionEvent>) {
        let CardApp {
            content,
            session,
            palette,
            surprise_hover,
            revealed_at,
            ..
        } = self;
        let palette = *palette;

        ui.vertical_centered(|ui| {
            ui.set_width(ui.available_width().min(560.0));
            egui::Frame::new()
                .fill(palette.card_background)
                .stroke(egui::Stroke::new(1.0, palette.card_stroke))
                .corner_radius(egui::CornerRadius::same(20))
                .inner_margin(egui::Margin::symmetric(28, 28))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(&content.closing_title)
                                .size(26.0)
                                .strong()
                                .color(palette.ink),
                        );
                        ui.add_space(18.0);

                        if let Some(stats) = &content.stats {
                            egui::Frame::new()
                                .fill(palette.accent_faint)
                                .corner_radius(egui::CornerRadius::same(14))
                                .inner_margin(egui::Margin::symmetric(14, 12))
                                .show(ui, |ui| {
                                    ui.horizontal(|ui| {
                                        ui.label(
                                            egui::RichText::new(
                                                stats.ticker_label.to_uppercase(),
                                            )
                                            .size(11.0)
                                            .strong()
                                            .color(palette.muted),
                                        );
                                        ui.with_layout(
                                            egui::Layout::right_to_left(egui::Align::Center),
                                            |ui| {
                                                let color = palette
                                                    .accent_hover
                                                    .gamma_multiply(widgets::pulse_alpha(now));
                                                ui.label(
                                                    egui::RichText::new(&stats.ticker_value)
                                                        .size(17.0)
                                                        .strong()
                                                        .color(color),
                                                );
                                            },
                                        );
                                    });
                                });
                            ui.add_space(10.0);
                            egui::Frame::new()
                                .fill(palette.accent_faint)
                                .stroke(egui::Stroke::new(1.0, palette.accent_soft))
                                .corner_radius(egui::CornerRadius::same(14))
                                .inner_margin(egui::Margin::symmetric(18, 16))
                                .show(ui, |ui| {
                                    ui.vertical_centered(|ui| {
                                        ui.label(
                                            egui::RichText::new(
                                                stats.counter_caption.to_uppercase(),
                                            )
                                            .size(10.0)
                                            .color(palette.muted),
                                        );
                                        ui.add_space(4.0);
                                        ui.label(
                                            egui::RichText::new(&stats.counter_value)
                                                .size(34.0)
                                                .italics()
                                                .color(palette.accent),
                                        );
                                    });
                                });
                            ui.add_space(22.0);
                        }

                        if session.revealed() {
                            let alpha = revealed_at
                                .map(|at| ((now - at) / 0.5).clamp(0.0, 1.0) as f32)
                                .unwrap_or(1.0);
                            ui.scope(|ui| {
                                ui.set_opacity(alpha);
                                ui.vertical_centered(|ui| {
                                    for (index, paragraph) in
                                        content.closing_note.iter().enumerate()
                                    {
                                        if index == 0 {
                                            ui.label(
                                                egui::RichText::new(paragraph)
                                                    .size(22.0)
                                                    .strong()
                                                    .color(palette.accent_hover),
                                            );
                                        } else {
                                            ui.add_space(8.0);
                                            ui.label(
                                                egui::RichText::new(paragraph)
                                                    .size(18.0)
                                                    .italics()
                                                    .color(palette.muted),
                                            );
                                        }
                                    }
                                });
                            });
                        } else if let (Some(gate), Some(control)) =
                            (&content.surprise, session.surprise())
                        {
                            ui.label(
                                egui::RichText::new("One last thing, if you can catch it…")
                                    .size(12.0)
                                    .color(palette.muted),
                            );
                            ui.add_space(10.0);

                            let caught = control.is_exhausted();
                            let label = if caught { &gate.caught_label } else { &gate.label };
                            let (fill, text_color) = if caught {
                                (palette.accent, egui::Color32::WHITE)
                            } else {
                                (palette.accent_soft, palette.accent_hover)
                            };
                            let button = egui::Button::new(
                                egui::RichText::new(label)
                                    .strong()
                                    .size(16.0)
                                    .color(text_color),
                            )
                            .fill(fill)
                            .corner_radius(egui::CornerRadius::same(16));
                            let offset = control.offset();
                            let response = widgets::evasive_button(
                                ui,
                                egui::vec2(240.0, 46.0),
                                offset,
                                surprise_hover,
                                button,
                            );
                            if response.entered {
                                events.push(InteractionEvent::Proximity(EvasiveTarget::Surprise));
                            }
                            if response.clicked {
                                events.push(InteractionEvent::Activated(EvasiveTarget::Surprise));
                            }
                            ui.add_space(10.0);
                        }
                    });
                });

            ui.add_space(28.0);
            ui.label(
                egui::RichText::new(format!("{} ♥ {}", content.sender, content.closing_date))
                    .italics()
                    .color(palette.faint),
            );
        });
    }
}

fn heart_divider(ui: &mut egui::Ui, palette: &RosePalette) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(110.0, 16.0), egui::Sense::hover());
    let y = rect.center().y;
    let stroke = egui::Stroke::new(1.0, palette.accent_soft);
    ui.painter().line_segment(
        [egui::pos2(rect.left(), y), egui::pos2(rect.center().x - 14.0, y)],
        stroke,
    );
    ui.painter().line_segment(
        [egui::pos2(rect.center().x + 14.0, y), egui::pos2(rect.right(), y)],
        stroke,
    );
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "♥",
        egui::FontId::proportional(10.0),
        palette.accent_muted,
    );
}

fn date_pill(ui: &mut egui::Ui, date: &str, palette: &RosePalette) {
    egui::Frame::new()
        .fill(palette.card_background)
        .stroke(egui::Stroke::new(1.0, palette.accent_soft))
        .corner_radius(egui::CornerRadius::same(14))
        .inner_margin(egui::Margin::symmetric(12, 6))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(date.to_uppercase())
                    .size(12.0)
                    .strong()
                    .color(palette.accent),
            );
        });
}
