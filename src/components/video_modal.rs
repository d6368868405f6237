use yew::prelude::*;

use crate::media::{self, MediaKind};

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub open: bool,
    pub url: String,
    pub caption: String,
    pub on_close: Callback<MouseEvent>,
}

/// Full-screen player with native controls, owned by one video carousel.
#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    html! {
        <div class="video-modal">
            <div class="video-modal-content">
                <button class="modal-close" aria-label="Close" onclick={props.on_close.clone()}>
                    {"✕"}
                </button>
                <div class="video-modal-player">
                    <video
                        src={media::resolve(&props.url, MediaKind::Video)}
                        controls={true}
                        autoplay={true}
                        playsinline={true}
                    />
                    <div class="video-modal-caption">
                        <span>{&props.caption}</span>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .video-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.95);
                }
                .video-modal-content {
                    position: relative;
                    width: 100%;
                    max-width: 56rem;
                    max-height: 80vh;
                }
                .video-modal .modal-close {
                    position: absolute;
                    top: -3rem;
                    right: 0;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .video-modal-player {
                    background: #000000;
                    border-radius: 16px;
                    padding: 1rem;
                }
                .video-modal-player video {
                    width: 100%;
                    max-height: 70vh;
                    object-fit: contain;
                    border-radius: 8px;
                }
                .video-modal-caption {
                    margin-top: 1rem;
                    text-align: center;
                }
                .video-modal-caption span {
                    display: inline-block;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    background: #dc2626;
                    color: #ffffff;
                    font-weight: 900;
                }
                "#}
            </style>
        </div>
    }
}
