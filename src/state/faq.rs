use std::rc::Rc;
use yew::Reducible;

/// Accordion with at most one entry expanded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    open: Option<usize>,
}

impl FaqState {
    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Collapses `index` if it is open, otherwise makes it the only open entry.
    pub fn toggle(&self, index: usize) -> Self {
        if self.is_open(index) {
            Self { open: None }
        } else {
            Self { open: Some(index) }
        }
    }
}

impl Reducible for FaqState {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        Rc::new(self.toggle(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_collapsed_initially() {
        let state = FaqState::default();
        assert_eq!(state, FaqState::default());
        assert!((0..5).all(|i| !state.is_open(i)));
    }

    #[test]
    fn toggle_opens_then_closes() {
        let state = FaqState::default().toggle(2);
        assert!(state.is_open(2));
        assert_eq!(state.toggle(2), FaqState::default());
    }

    #[test]
    fn toggling_another_switches() {
        let state = FaqState::default().toggle(0).toggle(3);
        assert!(state.is_open(3));
        assert!(!state.is_open(0));
    }

    #[test]
    fn never_more_than_one_open() {
        let mut state = FaqState::default();
        for index in [1, 4, 4, 0, 2, 2, 2, 3] {
            state = state.toggle(index);
            assert!((0..5).filter(|i| state.is_open(*i)).count() <= 1);
        }
        assert!(state.is_open(3));
    }
}
