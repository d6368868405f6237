use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{HtmlMediaElement, HtmlVideoElement};
use yew::prelude::*;

use crate::components::video_modal::VideoModal;
use crate::config::VIDEO_POSTER;
use crate::hooks::use_carousel;
use crate::media::{self, MediaKind};
use crate::state::carousel::{AdvanceTrigger, CarouselAction, CarouselState};
use crate::state::modal::{ModalAction, ModalState};

#[derive(Properties, PartialEq)]
pub struct VideoCarouselProps {
    pub title: String,
    pub urls: Vec<String>,
}

/// Starts playback and reports the outcome. A rejected `play()` leaves the
/// carousel paused on the same slide; `epoch` ties the report to the slide
/// that asked, so a late rejection can't pause a newer one.
fn start_playback(
    video: &HtmlMediaElement,
    epoch: u32,
    carousel: UseReducerDispatcher<CarouselState>,
) {
    match video.play() {
        Ok(promise) => {
            carousel.dispatch(CarouselAction::PlaybackStarted);
            spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    gloo_console::warn!("Video playback rejected:", e);
                    carousel.dispatch(CarouselAction::PlaybackFailed { epoch });
                }
            });
        }
        Err(e) => {
            gloo_console::warn!("Video playback failed:", e);
            carousel.dispatch(CarouselAction::PlaybackFailed { epoch });
        }
    }
}

#[function_component(VideoCarousel)]
pub fn video_carousel(props: &VideoCarouselProps) -> Html {
    let carousel = use_carousel(props.urls.len(), AdvanceTrigger::PlaybackEnded);
    let modal = use_reducer(ModalState::default);
    let video_ref = use_node_ref();

    // Restart from zero whenever the slide changes
    {
        let video_ref = video_ref.clone();
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |(_, epoch)| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(true);
                    video.set_current_time(0.0);
                    start_playback(&video, *epoch, dispatcher);
                }
                || ()
            },
            (carousel.current(), carousel.epoch()),
        );
    }

    let Some(current_url) = props.urls.get(carousel.current()) else {
        return html! {};
    };
    let src = media::resolve(current_url, MediaKind::Video);

    let toggle_play = {
        let video_ref = video_ref.clone();
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let Some(video) = video_ref.cast::<HtmlVideoElement>() else {
                return;
            };
            if carousel.is_playing() {
                if let Err(e) = video.pause() {
                    gloo_console::warn!("Video pause failed:", e);
                }
                carousel.dispatch(CarouselAction::TogglePlay);
            } else {
                start_playback(&video, carousel.epoch(), carousel.dispatcher());
            }
        })
    };

    let on_ended = {
        let carousel = carousel.clone();
        Callback::from(move |_: Event| {
            carousel.dispatch(CarouselAction::PlaybackEnded);
        })
    };

    let open_modal = {
        let modal = modal.clone();
        let url = src.clone();
        let caption = format!("{} - Full View", props.title);
        Callback::from(move |_: MouseEvent| {
            modal.dispatch(ModalAction::Open {
                url: url.clone(),
                caption: caption.clone(),
            });
        })
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.dispatch(ModalAction::Close))
    };

    html! {
        <>
            <div class="video-carousel">
                <div class="video-carousel-frame">
                    <div class="video-carousel-slide">
                        <video
                            ref={video_ref}
                            src={src}
                            class="carousel-video"
                            muted={true}
                            playsinline={true}
                            poster={VIDEO_POSTER}
                            onclick={open_modal}
                            onended={on_ended}
                        />
                        <div class="video-play-overlay">
                            <div class="video-play-button" onclick={toggle_play}>
                                if carousel.is_playing() {
                                    <span class="pause-icon"><span></span><span></span></span>
                                } else {
                                    <span class="play-icon"></span>
                                }
                            </div>
                        </div>
                        <div class="video-title">
                            {format!("{} {}", props.title, carousel.current() + 1)}
                        </div>
                    </div>
                </div>
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
                                aria-label={format!("Play {} {}", props.title, index + 1)}
                                onclick={select}
                            />
                        }
                    }) }
                </div>
            </div>

            <VideoModal
                open={modal.is_open()}
                url={modal.url().to_string()}
                caption={modal.caption().to_string()}
                on_close={close_modal}
            />

            <style>
                {r#"
                .video-carousel-frame {
                    background: rgba(255, 255, 255, 0.2);
                    border: 2px solid #ffffff;
                    border-radius: 16px;
                    padding: 1rem;
                    overflow: hidden;
                }
                .video-carousel-slide {
                    position: relative;
                    height: 12rem;
                    border-radius: 12px;
                    overflow: hidden;
                }
                .carousel-video {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    cursor: pointer;
                }
                .video-play-overlay {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: rgba(0, 0, 0, 0.3);
                    opacity: 0;
                    transition: opacity 0.3s ease;
                    pointer-events: none;
                }
                .video-carousel-slide:hover .video-play-overlay {
                    opacity: 1;
                }
                .video-play-button {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.9);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    pointer-events: auto;
                }
                .play-icon {
                    width: 0;
                    height: 0;
                    margin-left: 4px;
                    border-left: 8px solid #1f2937;
                    border-top: 6px solid transparent;
                    border-bottom: 6px solid transparent;
                }
                .pause-icon {
                    display: flex;
                    gap: 4px;
                }
                .pause-icon span {
                    width: 4px;
                    height: 16px;
                    background: #1f2937;
                }
                .video-title {
                    position: absolute;
                    bottom: 0.5rem;
                    left: 0.5rem;
                    right: 0.5rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 8px;
                    background: rgba(0, 0, 0, 0.7);
                    color: #ffffff;
                    font-size: 0.875rem;
                    font-weight: bold;
                    pointer-events: none;
                }
                .video-carousel .carousel-dots {
                    margin-top: 4rem;
                }
                "#}
            </style>
        </>
    }
}
