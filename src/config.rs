
/// Pixels scrolled before the header switches to its opaque style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

/// Added to `scrollY` before matching sections, compensates for the fixed header.
pub const SECTION_SCROLL_OFFSET: f64 = 100.0;

pub const DEFAULT_ADVANCE_INTERVAL_MS: u32 = 5000;

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const PLACEHOLDER_VIDEO: &str = "/placeholder.mp4";
pub const VIDEO_POSTER: &str = "/placeholder.svg?height=200&width=300&text=Video+Thumbnail";

const WHATSAPP_BASE: &str = "https://wa.me";

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

/// Builds a `wa.me` deep link with the message prefilled.
pub fn whatsapp_url(phone_number: &str, message: &str) -> String {
    let digits: String = phone_number.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("{}/{}?text={}", WHATSAPP_BASE, digits, urlencoding::encode(message))
}

/// Opens `url` in a new browsing context.
pub fn open_in_new_tab(url: &str) {
    match web_sys::window() {
        Some(window) => {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                gloo_console::error!("Failed to open new tab:", e);
            }
        }
        None => log::warn!("No window available to open {}", url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_url_encodes_message() {
        let url = whatsapp_url("628111224478", "Mau nanya-nanya min soal Happy Friends Project");
        assert_eq!(
            url,
            "https://wa.me/628111224478?text=Mau%20nanya-nanya%20min%20soal%20Happy%20Friends%20Project"
        );
    }

    #[test]
    fn whatsapp_url_strips_formatting_from_number() {
        let url = whatsapp_url("+62 811-122-4478", "hi");
        assert_eq!(url, "https://wa.me/628111224478?text=hi");
    }

    #[test]
    fn whatsapp_url_escapes_reserved_characters() {
        let url = whatsapp_url("1", "a&b=c?");
        assert_eq!(url, "https://wa.me/1?text=a%26b%3Dc%3F");
    }
}
