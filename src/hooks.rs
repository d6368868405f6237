use gloo_timers::callback::Interval;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window};
use yew::prelude::*;

use crate::state::carousel::{timer_period, AdvanceTrigger, CarouselAction, CarouselState};
use crate::state::nav::{NavAction, NavState, Section, SectionBounds};

/// Carousel state for `len` items. With `AdvanceTrigger::Interval` the hook
/// owns a repeating timer that is dropped on unmount and whenever the
/// length or interval changes. Manual selection leaves the timer alone.
#[hook]
pub fn use_carousel(len: usize, trigger: AdvanceTrigger) -> UseReducerHandle<CarouselState> {
    let carousel = use_reducer(move || CarouselState::new(len));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |len| {
                dispatcher.dispatch(CarouselAction::Resize(*len));
                || ()
            },
            len,
        );
    }

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |(trigger, len)| {
                let interval = timer_period(*trigger, *len).map(|millis| {
                    Interval::new(millis, move || {
                        dispatcher.dispatch(CarouselAction::Tick);
                    })
                });

                move || drop(interval)
            },
            (trigger, len),
        );
    }

    carousel
}

/// Feeds scroll position and section geometry into the nav reducer on every
/// window scroll, and once on mount.
#[hook]
pub fn use_scroll_spy(nav: UseReducerDispatcher<NavState>) {
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                let callback = Closure::<dyn Fn()>::new({
                    let nav = nav.clone();
                    move || report_scroll(&nav)
                });

                if let Err(e) = window
                    .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                {
                    gloo_console::error!("Failed to attach scroll listener:", e);
                }

                // Initial position, the page may load scrolled
                report_scroll(&nav);

                Box::new(move || {
                    if let Err(e) = window.remove_event_listener_with_callback(
                        "scroll",
                        callback.as_ref().unchecked_ref(),
                    ) {
                        gloo_console::error!("Failed to detach scroll listener:", e);
                    }
                })
            } else {
                log::warn!("No window, section highlighting disabled");
                Box::new(|| ())
            };
            destructor
        },
        (),
    );
}

fn report_scroll(nav: &UseReducerDispatcher<NavState>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    nav.dispatch(NavAction::Scrolled {
        scroll_y,
        sections: measure_sections(&window),
    });
}

fn measure_sections(window: &Window) -> Vec<(Section, SectionBounds)> {
    let Some(document) = window.document() else {
        return Vec::new();
    };

    Section::ALL
        .iter()
        .filter_map(|section| {
            let element = document
                .get_element_by_id(section.id())?
                .dyn_into::<HtmlElement>()
                .ok()?;
            Some((
                *section,
                SectionBounds {
                    top: element.offset_top() as f64,
                    height: element.offset_height() as f64,
                },
            ))
        })
        .collect()
}

/// Smooth-scrolls the section into view.
pub fn scroll_to_section(section: Section) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.id()));

    match element {
        Some(element) => {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => log::warn!("Section #{} not found in page", section.id()),
    }
}
