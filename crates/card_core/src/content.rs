//! The content document the card renders from.
//!
//! Everything user-visible is data: names, paragraphs, button labels,
//! timeline entries, and whether the closing note hides behind the
//! surprise button. The app ships with built-in sample content and
//! accepts a TOML document to personalize a deployment, in the same
//! defaults-then-override shape as the rest of the workspace config.

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::timeline::TimelineEntry;

/// Configuration for the bounded surprise button that gates the closing
/// note. When a card carries no `[surprise]` section the note is shown
/// unconditionally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurpriseContent {
    /// Label while the button still dodges.
    pub label: String,
    /// Label once the button has been caught.
    pub caught_label: String,
    /// Dodges before the button gives up.
    pub max_evasions: u32,
}

impl Default for SurpriseContent {
    fn default() -> Self {
        Self {
            label: "Open your surprise 🎁".to_string(),
            caught_label: "Fine, you caught me. Click!".to_string(),
            max_evasions: 5,
        }
    }
}

/// Playful numbers on the closing card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosingStats {
    pub ticker_label: String,
    pub ticker_value: String,
    pub counter_caption: String,
    pub counter_value: String,
}

impl Default for ClosingStats {
    fn default() -> Self {
        Self {
            ticker_label: "Forever & Always".to_string(),
            ticker_value: "loading…".to_string(),
            counter_caption: "Times I've been grateful for our first meet-up".to_string(),
            counter_value: "Infinite ✨".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardContent {
    pub recipient: String,
    pub sender: String,
    pub kicker: String,
    pub headline: String,
    /// Message paragraphs on the invitation card, ending with the ask.
    pub message: Vec<String>,
    pub accept_label: String,
    pub decline_label: String,

    pub journey_badge: String,
    pub journey_title: String,
    pub journey_intro: String,

    pub closing_title: String,
    /// Closing note paragraphs, optionally gated by `surprise`.
    pub closing_note: Vec<String>,
    pub closing_date: String,

    /// Header portrait on the invitation card. Falls back to a timeline
    /// photo when unset.
    pub portrait: Option<String>,
    pub stats: Option<ClosingStats>,

    /// Maximum dodge displacement per axis, in logical points.
    pub evasion_bound: f32,

    pub timeline: Vec<TimelineEntry>,
    pub surprise: Option<SurpriseContent>,
}

impl Default for CardContent {
    fn default() -> Self {
        Self {
            recipient: "Snow".to_string(),
            sender: "Skhumba".to_string(),
            kicker: "A special message for you".to_string(),
            headline: "Happy Valentine's Day".to_string(),
            message: vec![
                "Since the first day we spoke, I sensed your calm and gentle nature."
                    .to_string(),
                "Every moment somehow led us here, and I would not trade a single one."
                    .to_string(),
                "Would you do me the honour of being my Valentine?".to_string(),
            ],
            accept_label: "YES! ❤".to_string(),
            decline_label: "No, maybe later".to_string(),
            journey_badge: "OUR MEMORIES".to_string(),
            journey_title: "Our Story".to_string(),
            journey_intro: "Every moment somehow led us here. Here's to the beautiful chaos \
                            of getting to know you."
                .to_string(),
            closing_title: "Our Stats 📈".to_string(),
            portrait: None,
            stats: Some(ClosingStats::default()),
            closing_note: vec![
                "I really like what we're building, more than words can explain.".to_string(),
                "Slowly but surely ❤".to_string(),
            ],
            closing_date: "February 14, 2026".to_string(),
            evasion_bound: 100.0,
            timeline: vec![
                sample_entry("pic1.jpeg", "16 Dec, 2025", "The first meet up ☕"),
                sample_entry("pic2.jpeg", "10 Jan, 2026", "Our first cosy pic"),
                sample_entry("pic3.jpeg", "15 Jan, 2026", "Our first proper date"),
                sample_entry("pic4.jpeg", "24 Jan, 2026", "My favourite picture of you"),
                sample_entry("pic5.jpeg", "7 Feb, 2026", "Our first road trip"),
                sample_entry("pic6.jpeg", "8 Feb, 2026", "Sleeping beauty"),
            ],
            surprise: Some(SurpriseContent::default()),
        }
    }
}

fn sample_entry(photo: &str, date: &str, caption: &str) -> TimelineEntry {
    TimelineEntry {
        photo: photo.to_string(),
        date: date.to_string(),
        caption: caption.to_string(),
    }
}

impl CardContent {
    /// Photo reference for the invitation header: the configured
    /// portrait, or a timeline photo as a stand-in.
    pub fn portrait_photo(&self) -> Option<&str> {
        if let Some(portrait) = &self.portrait {
            return Some(portrait.as_str());
        }
        self.timeline
            .get(3)
            .or_else(|| self.timeline.first())
            .map(|entry| entry.photo.as_str())
    }

    /// Parse and validate a TOML content document.
    pub fn from_toml(raw: &str) -> Result<Self, ContentError> {
        let content: CardContent = toml::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    /// Check the invariants the views rely on: a non-empty timeline,
    /// non-empty entry fields, and a usable dodge bound.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.timeline.is_empty() {
            return Err(ContentError::EmptyTimeline);
        }
        for (index, entry) in self.timeline.iter().enumerate() {
            for (field, value) in [
                ("photo", &entry.photo),
                ("date", &entry.date),
                ("caption", &entry.caption),
            ] {
                if value.trim().is_empty() {
                    return Err(ContentError::EmptyField { index, field });
                }
            }
        }
        if !self.evasion_bound.is_finite() || self.evasion_bound <= 0.0 {
            return Err(ContentError::InvalidEvasionBound(self.evasion_bound));
        }
        Ok(())
    }

    /// Thumbnails teased on the invitation footer.
    pub fn teaser_photos(&self) -> impl Iterator<Item = &TimelineEntry> {
        self.timeline.iter().take(3)
    }
}
