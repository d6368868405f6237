use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalAction {
    Open { url: String, caption: String },
    Close,
}

/// One enlarged media item. The last URL survives `Close` and is only
/// replaced by the next `Open`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
    url: String,
    caption: String,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn apply(&self, action: ModalAction) -> Self {
        match action {
            ModalAction::Open { url, caption } => Self {
                open: true,
                url,
                caption,
            },
            ModalAction::Close => Self {
                open: false,
                ..self.clone()
            },
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(url: &str) -> ModalAction {
        ModalAction::Open {
            url: url.to_string(),
            caption: "Photography - Full View".to_string(),
        }
    }

    #[test]
    fn starts_closed_and_empty() {
        let state = ModalState::default();
        assert!(!state.is_open());
        assert_eq!(state.url(), "");
    }

    #[test]
    fn open_shows_exact_url() {
        let state = ModalState::default().apply(open("/photography3.jpg"));
        assert!(state.is_open());
        assert_eq!(state.url(), "/photography3.jpg");
        assert_eq!(state.caption(), "Photography - Full View");
    }

    #[test]
    fn close_hides_but_retains_url() {
        let state = ModalState::default()
            .apply(open("/photography3.jpg"))
            .apply(ModalAction::Close);
        assert!(!state.is_open());
        assert_eq!(state.url(), "/photography3.jpg");
    }

    #[test]
    fn reopen_replaces_url() {
        let state = ModalState::default()
            .apply(open("/a.jpg"))
            .apply(ModalAction::Close)
            .apply(open("/b.jpg"));
        assert!(state.is_open());
        assert_eq!(state.url(), "/b.jpg");
    }

    #[test]
    fn image_and_video_modals_are_independent() {
        // Nothing stops both owners from being open at once.
        let image = ModalState::default().apply(open("/yearbook1.jpg"));
        let video = ModalState::default().apply(open("/videos/v1.mp4"));
        assert!(image.is_open() && video.is_open());

        let image = image.apply(ModalAction::Close);
        assert!(!image.is_open());
        assert!(video.is_open());
        assert_eq!(video.url(), "/videos/v1.mp4");
    }
}
