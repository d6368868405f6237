//! Header navigation: active section tracking, scrolled header style and
//! the mobile menu.

use std::rc::Rc;
use yew::Reducible;

use crate::config::{HEADER_SCROLL_THRESHOLD, SECTION_SCROLL_OFFSET};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    Services,
    Portfolio,
    About,
    Contact,
}

impl Section {
    /// Document order, top to bottom.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Services,
        Section::Portfolio,
        Section::About,
        Section::Contact,
    ];

    /// Element id of the section in the page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Portfolio => "portfolio",
            Section::About => "about",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "HOME",
            Section::Services => "SERVICES",
            Section::Portfolio => "PORTFOLIO",
            Section::About => "ABOUT",
            Section::Contact => "CONTACT",
        }
    }
}

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// First section, in the given order, whose bounds contain
/// `scroll_y + SECTION_SCROLL_OFFSET`.
pub fn derive_active_section(scroll_y: f64, sections: &[(Section, SectionBounds)]) -> Option<Section> {
    let position = scroll_y + SECTION_SCROLL_OFFSET;
    sections
        .iter()
        .find(|(_, bounds)| bounds.contains(position))
        .map(|(section, _)| *section)
}

pub fn header_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLL_THRESHOLD
}

#[derive(Clone, Debug, PartialEq)]
pub enum NavAction {
    Scrolled {
        scroll_y: f64,
        sections: Vec<(Section, SectionBounds)>,
    },
    /// Nav entry clicked. Sets the section active before the scroll lands.
    NavigateTo(Section),
    ToggleMenu,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Section,
    pub menu_open: bool,
    pub scrolled: bool,
}

impl NavState {
    pub fn apply(&self, action: NavAction) -> Self {
        match action {
            NavAction::Scrolled { scroll_y, sections } => Self {
                active: derive_active_section(scroll_y, &sections).unwrap_or(self.active),
                scrolled: header_is_scrolled(scroll_y),
                ..self.clone()
            },
            NavAction::NavigateTo(section) => Self {
                active: section,
                menu_open: false,
                ..self.clone()
            },
            NavAction::ToggleMenu => Self {
                menu_open: !self.menu_open,
                ..self.clone()
            },
        }
    }
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five stacked sections, 800px each.
    fn layout() -> Vec<(Section, SectionBounds)> {
        Section::ALL
            .iter()
            .enumerate()
            .map(|(i, s)| {
                (
                    *s,
                    SectionBounds {
                        top: i as f64 * 800.0,
                        height: 800.0,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn defaults_to_home() {
        let state = NavState::default();
        assert_eq!(state.active, Section::Home);
        assert!(!state.menu_open);
        assert!(!state.scrolled);
    }

    #[test]
    fn offset_is_applied_before_matching() {
        let sections = layout();
        assert_eq!(derive_active_section(0.0, &sections), Some(Section::Home));
        assert_eq!(derive_active_section(699.0, &sections), Some(Section::Home));
        assert_eq!(derive_active_section(700.0, &sections), Some(Section::Services));
    }

    #[test]
    fn each_section_is_reachable() {
        let sections = layout();
        for (i, section) in Section::ALL.iter().enumerate() {
            let scroll_y = i as f64 * 800.0 + 50.0;
            assert_eq!(derive_active_section(scroll_y, &sections), Some(*section));
        }
    }

    #[test]
    fn first_match_wins_on_overlap() {
        let sections = vec![
            (Section::Portfolio, SectionBounds { top: 0.0, height: 500.0 }),
            (Section::About, SectionBounds { top: 0.0, height: 500.0 }),
        ];
        assert_eq!(derive_active_section(0.0, &sections), Some(Section::Portfolio));
    }

    #[test]
    fn gap_between_sections_matches_nothing() {
        let sections = vec![
            (Section::Home, SectionBounds { top: 0.0, height: 100.0 }),
            (Section::Services, SectionBounds { top: 400.0, height: 100.0 }),
        ];
        assert_eq!(derive_active_section(150.0, &sections), None);
    }

    #[test]
    fn scroll_outside_all_sections_keeps_active() {
        let state = NavState::default().apply(NavAction::NavigateTo(Section::About));
        let state = state.apply(NavAction::Scrolled {
            scroll_y: 99_999.0,
            sections: layout(),
        });
        assert_eq!(state.active, Section::About);
    }

    #[test]
    fn scrolled_flag_follows_threshold() {
        let at = NavState::default().apply(NavAction::Scrolled {
            scroll_y: 50.0,
            sections: layout(),
        });
        assert!(!at.scrolled);

        let past = at.apply(NavAction::Scrolled {
            scroll_y: 51.0,
            sections: layout(),
        });
        assert!(past.scrolled);
    }

    #[test]
    fn scroll_updates_active_section() {
        let state = NavState::default().apply(NavAction::Scrolled {
            scroll_y: 2500.0,
            sections: layout(),
        });
        assert_eq!(state.active, Section::Portfolio);
    }

    #[test]
    fn navigate_sets_active_and_closes_menu() {
        let state = NavState::default().apply(NavAction::ToggleMenu);
        assert!(state.menu_open);

        let state = state.apply(NavAction::NavigateTo(Section::Contact));
        assert_eq!(state.active, Section::Contact);
        assert!(!state.menu_open);
    }

    #[test]
    fn toggle_menu_flips() {
        let state = NavState::default()
            .apply(NavAction::ToggleMenu)
            .apply(NavAction::ToggleMenu);
        assert!(!state.menu_open);
    }

    #[test]
    fn section_ids_are_unique() {
        let mut ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Section::ALL.len());
    }
}
