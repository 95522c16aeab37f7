use std::fs;
use std::path::{Path, PathBuf};

mod controller;
mod ui;

use card_core::CardContent;
use clap::Parser;
use eframe::egui;

/// Desktop valentine card: an ask-and-reveal invitation followed by a
/// photo timeline and a closing message.
#[derive(Debug, Parser)]
#[command(name = "valentine-card")]
struct CliArgs {
    /// Path to a TOML content document. Defaults to `card.toml` in the
    /// working directory when present; otherwise built-in sample content
    /// is used.
    #[arg(long)]
    content: Option<PathBuf>,
}

const DEFAULT_CONTENT_FILE: &str = "card.toml";

/// Resolve the content document and the directory photo references are
/// relative to. Any problem falls back to the built-in sample content;
/// a broken document should never keep the card from opening.
fn load_content(cli_path: Option<&Path>) -> (CardContent, PathBuf) {
    let path = cli_path
        .map(Path::to_path_buf)
        .or_else(|| {
            let default = PathBuf::from(DEFAULT_CONTENT_FILE);
            default.exists().then_some(default)
        });

    let Some(path) = path else {
        tracing::info!("no content document found; using built-in sample content");
        return (CardContent::default(), PathBuf::from("."));
    };

    let photos_root = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    match fs::read_to_string(&path) {
        Ok(raw) => match CardContent::from_toml(&raw) {
            Ok(content) => {
                tracing::info!(path = %path.display(), "loaded card content");
                (content, photos_root)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "invalid card content; using built-in sample content");
                (CardContent::default(), photos_root)
            }
        },
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "failed to read card content; using built-in sample content");
            (CardContent::default(), photos_root)
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args = CliArgs::parse();
    let (content, photos_root) = load_content(args.content.as_deref());

    let title = format!("For {} ❤", content.recipient);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1080.0, 800.0])
            .with_min_inner_size([640.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Valentine Card",
        options,
        Box::new(move |_cc| Ok(Box::new(ui::CardApp::new(content, photos_root)))),
    )
}

#[cfg(test)]
mod tests {
    use super::load_content;
    use card_core::CardContent;

    #[test]
    fn missing_document_falls_back_to_sample_content() {
        let (content, root) = load_content(Some(std::path::Path::new(
            "/definitely/not/here/card.toml",
        )));
        assert_eq!(content, CardContent::default());
        assert_eq!(root, std::path::PathBuf::from("/definitely/not/here"));
    }
}
