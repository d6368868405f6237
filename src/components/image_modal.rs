use yew::prelude::*;

use crate::media::{self, MediaKind};

#[derive(Properties, PartialEq)]
pub struct ImageModalProps {
    pub open: bool,
    pub url: String,
    /// Alt text for the enlarged image.
    pub caption: String,
    /// Label on the yearbook frame.
    pub label: String,
    pub on_close: Callback<MouseEvent>,
}

/// Page-wide image preview in a yearbook-style frame. Only the close button
/// dismisses it.
#[function_component(ImageModal)]
pub fn image_modal(props: &ImageModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    html! {
        <div class="image-modal">
            <div class="image-modal-content">
                <button class="modal-close" aria-label="Close" onclick={props.on_close.clone()}>
                    {"✕"}
                </button>
                <div class="yearbook-frame">
                    <div class="yearbook-frame-inner">
                        <img
                            src={media::resolve(&props.url, MediaKind::Image)}
                            alt={props.caption.clone()}
                            onerror={media::image_fallback()}
                        />
                        <div class="yearbook-caption">
                            <span>{&props.label}</span>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .image-modal {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    background: rgba(0, 0, 0, 0.5);
                    backdrop-filter: blur(4px);
                }
                .image-modal-content {
                    position: relative;
                    width: 100%;
                    max-width: 28rem;
                    max-height: 60vh;
                }
                .modal-close {
                    position: absolute;
                    top: -3rem;
                    right: 0;
                    background: none;
                    border: none;
                    color: #ffffff;
                    font-size: 1.5rem;
                    cursor: pointer;
                    z-index: 10;
                }
                .modal-close:hover {
                    color: #d1d5db;
                }
                .yearbook-frame {
                    background: linear-gradient(135deg, #fef3c7, #fed7aa);
                    border: 4px solid #fcd34d;
                    border-radius: 16px;
                    padding: 1rem;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                }
                .yearbook-frame-inner {
                    background: linear-gradient(135deg, #fffbeb, #fef9c3);
                    border-radius: 12px;
                    padding: 0.75rem;
                }
                .yearbook-frame-inner img {
                    width: 100%;
                    max-height: 60vh;
                    object-fit: contain;
                    border-radius: 8px;
                }
                .yearbook-caption {
                    margin-top: 0.75rem;
                    text-align: center;
                }
                .yearbook-caption span {
                    display: inline-block;
                    padding: 0.25rem 1rem;
                    border: 2px solid #fbbf24;
                    border-radius: 9999px;
                    background: #fde68a;
                    color: #92400e;
                    font-weight: 900;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </div>
    }
}
