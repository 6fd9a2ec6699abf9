use super::ports::{
    GalleryView, Lightbox, LoadingIndicator, Notifier, ScrollListener, SmoothScroll,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Failure,
    Info,
}

/// One DOM-side action for the page script to replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEffect {
    ClearGallery,
    ShowLoading,
    HideLoading,
    AppendMarkup { markup: String },
    RefreshLightbox,
    SmoothScroll,
    Notify { level: NoticeLevel, message: String },
    DetachScroll,
}

/// Surface that records every collaborator call in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub effects: Vec<UiEffect>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Notices in emission order.
    pub fn notices(&self) -> Vec<(NoticeLevel, &str)> {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                UiEffect::Notify { level, message } => Some((*level, message.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Concatenation of all appended markup.
    pub fn appended_markup(&self) -> String {
        self.effects
            .iter()
            .filter_map(|effect| match effect {
                UiEffect::AppendMarkup { markup } => Some(markup.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, wanted: &UiEffect) -> usize {
        self.effects.iter().filter(|effect| *effect == wanted).count()
    }

    fn notify(&mut self, level: NoticeLevel, message: &str) {
        self.effects.push(UiEffect::Notify {
            level,
            message: message.to_string(),
        });
    }
}

impl Notifier for Frame {
    fn success(&mut self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }

    fn failure(&mut self, message: &str) {
        self.notify(NoticeLevel::Failure, message);
    }

    fn info(&mut self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }
}

impl GalleryView for Frame {
    fn clear_gallery(&mut self) {
        self.effects.push(UiEffect::ClearGallery);
    }

    fn append_markup(&mut self, markup: String) {
        self.effects.push(UiEffect::AppendMarkup { markup });
    }
}

impl Lightbox for Frame {
    fn refresh_lightbox(&mut self) {
        self.effects.push(UiEffect::RefreshLightbox);
    }
}

impl SmoothScroll for Frame {
    fn smooth_scroll(&mut self) {
        self.effects.push(UiEffect::SmoothScroll);
    }
}

impl LoadingIndicator for Frame {
    fn show_loading(&mut self) {
        self.effects.push(UiEffect::ShowLoading);
    }

    fn hide_loading(&mut self) {
        self.effects.push(UiEffect::HideLoading);
    }
}

impl ScrollListener for Frame {
    fn detach_scroll(&mut self) {
        self.effects.push(UiEffect::DetachScroll);
    }
}
