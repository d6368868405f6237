use yew::prelude::*;

use crate::content::PanelHeight;
use crate::hooks::use_carousel;
use crate::media::{self, MediaKind};
use crate::state::carousel::{AdvanceTrigger, CarouselAction};
use crate::state::modal::ModalAction;

#[derive(Clone, Copy, PartialEq)]
pub enum CarouselLayout {
    /// Framed slide inside a service card, dots below.
    Service,
    /// Portfolio panel, dots overlaid on the image.
    Panel(PanelHeight),
}

#[derive(Properties, PartialEq)]
pub struct ImageCarouselProps {
    pub title: String,
    pub urls: Vec<String>,
    pub interval_ms: u32,
    pub layout: CarouselLayout,
    /// Receives `ModalAction::Open` when the visible image is clicked.
    pub on_open: Callback<ModalAction>,
}

#[function_component(ImageCarousel)]
pub fn image_carousel(props: &ImageCarouselProps) -> Html {
    let carousel = use_carousel(props.urls.len(), AdvanceTrigger::Interval(props.interval_ms));

    let Some(current_url) = props.urls.get(carousel.current()) else {
        return html! {};
    };
    let src = media::resolve(current_url, MediaKind::Image);
    let alt = format!("{} {}", props.title, carousel.current() + 1);

    let open_modal = {
        let on_open = props.on_open.clone();
        let url = src.clone();
        let caption = format!("{} - Full View", props.title);
        Callback::from(move |_: MouseEvent| {
            on_open.emit(ModalAction::Open {
                url: url.clone(),
                caption: caption.clone(),
            });
        })
    };

    let dots = html! {
        <div class="carousel-dots">
            { for (0..props.urls.len()).map(|index| {
                let select = {
                    let carousel = carousel.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        carousel.dispatch(CarouselAction::Select(index));
                    })
                };
                html! {
                    <button
                        key={index}
                        class={classes!("carousel-dot", (index == carousel.current()).then(|| "active"))}
                        aria-label={format!("Show {} {}", props.title, index + 1)}
                        onclick={select}
                    />
                }
            }) }
        </div>
    };

    let image = html! {
        <img
            src={src}
            alt={alt}
            class="carousel-image"
            onclick={open_modal}
            onerror={media::image_fallback()}
        />
    };

    let body = match props.layout {
        CarouselLayout::Service => html! {
            <div class="service-carousel">
                <div class="service-carousel-frame">
                    <div class="service-carousel-slide">
                        { image }
                    </div>
                </div>
                { dots }
            </div>
        },
        CarouselLayout::Panel(height) => html! {
            <div class={classes!("portfolio-carousel", height.class())}>
                { image }
                <div class="portfolio-dots">
                    { dots }
                </div>
            </div>
        },
    };

    html! {
        <>
            { body }
            <style>
                {r#"
                .service-carousel-frame {
                    background: rgba(255, 255, 255, 0.2);
                    border: 2px solid #ffffff;
                    border-radius: 16px;
                    padding: 1rem;
                    backdrop-filter: blur(4px);
                    overflow: hidden;
                }
                .service-carousel-slide {
                    height: 12rem;
                    border-radius: 12px;
                    overflow: hidden;
                }
                .service-carousel .carousel-dots {
                    margin-top: 4rem;
                }
                .carousel-image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    cursor: pointer;
                    transition: transform 1s ease-in-out;
                }
                .carousel-image:hover {
                    transform: scale(1.05);
                }
                .carousel-dots {
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                }
                .carousel-dot {
                    width: 12px;
                    height: 12px;
                    border: none;
                    border-radius: 50%;
                    padding: 0;
                    background: rgba(255, 255, 255, 0.5);
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .carousel-dot:hover {
                    background: rgba(255, 255, 255, 0.7);
                }
                .carousel-dot.active {
                    background: #ffffff;
                    transform: scale(1.1);
                    box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2);
                }
                .portfolio-carousel {
                    position: relative;
                    overflow: hidden;
                    border: 4px solid #ffffff;
                    border-radius: 16px;
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.15);
                }
                .portfolio-carousel.panel-short {
                    height: 10rem;
                }
                .portfolio-carousel.panel-tall {
                    height: 20rem;
                }
                .portfolio-dots {
                    position: absolute;
                    bottom: 1rem;
                    left: 50%;
                    transform: translateX(-50%);
                }
                .portfolio-dots .carousel-dot {
                    width: 8px;
                    height: 8px;
                }
                "#}
            </style>
        </>
    }
}
