use serde::Deserialize;
use web_sys::HtmlImageElement;
use yew::prelude::*;

use crate::config::{PLACEHOLDER_IMAGE, PLACEHOLDER_VIDEO};

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn placeholder(self) -> &'static str {
        match self {
            MediaKind::Image => PLACEHOLDER_IMAGE,
            MediaKind::Video => PLACEHOLDER_VIDEO,
        }
    }
}

/// Returns `url` unless it is blank, in which case the placeholder for `kind`.
pub fn resolve(url: &str, kind: MediaKind) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        kind.placeholder().to_string()
    } else {
        trimmed.to_string()
    }
}

/// `onerror` handler swapping a broken image for the placeholder. Only swaps
/// once so a missing placeholder can't loop.
pub fn image_fallback() -> Callback<Event> {
    Callback::from(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        if !img.src().ends_with(PLACEHOLDER_IMAGE) {
            log::warn!("Image failed to load, using placeholder: {}", img.src());
            img.set_src(PLACEHOLDER_IMAGE);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_urls_resolve_to_placeholder() {
        assert_eq!(resolve("", MediaKind::Image), "/placeholder.svg");
        assert_eq!(resolve("   ", MediaKind::Video), "/placeholder.mp4");
    }

    #[test]
    fn real_urls_pass_through() {
        assert_eq!(resolve("/yearbook1.jpg", MediaKind::Image), "/yearbook1.jpg");
        assert_eq!(resolve(" /videos/v1.mp4 ", MediaKind::Video), "/videos/v1.mp4");
    }
}
