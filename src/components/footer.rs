use yew::prelude::*;

use crate::config::open_in_new_tab;
use crate::content::{Brand, SocialLink};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: Brand,
    pub social: Vec<SocialLink>,
    pub whatsapp_url: String,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let open_whatsapp = {
        let url = props.whatsapp_url.clone();
        Callback::from(move |_: MouseEvent| open_in_new_tab(&url))
    };

    html! {
        <footer class="site-footer">
            <div class="footer-brand">
                <img src={props.brand.logo.clone()} alt={format!("{} Logo", props.brand.name)} />
                <h3>{props.brand.name.to_uppercase()}</h3>
            </div>
            <p class="footer-tagline">{&props.brand.tagline}</p>
            <div class="footer-links">
                { for props.social.iter().map(|link| html! {
                    <a key={link.label.clone()} href={link.url.clone()} target="_blank" rel="noopener noreferrer">
                        {&link.label}
                    </a>
                }) }
                <button class="footer-whatsapp" onclick={open_whatsapp}>{"WhatsApp"}</button>
            </div>
            <p class="footer-copyright">{format!("© 2024 {}. All rights reserved.", props.brand.name)}</p>
            <p class="footer-credit">{"Created By B"}<sup>{"2"}</sup>{"AN"}</p>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    z-index: 10;
                    padding: 3rem 1rem;
                    text-align: center;
                    background: #111827;
                    color: #ffffff;
                }
                .footer-brand {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.75rem;
                }
                .footer-brand img {
                    width: 3rem;
                    height: 3rem;
                    object-fit: contain;
                }
                .footer-brand h3 {
                    font-weight: 900;
                    font-size: 1.25rem;
                }
                .footer-tagline {
                    color: #fde047;
                    font-weight: bold;
                }
                .footer-links {
                    display: flex;
                    justify-content: center;
                    gap: 1.5rem;
                    margin: 1.5rem 0;
                }
                .footer-links a,
                .footer-whatsapp {
                    color: #d1d5db;
                    font-weight: bold;
                    text-decoration: none;
                    background: none;
                    border: none;
                    font-size: 1rem;
                    cursor: pointer;
                }
                .footer-links a:hover,
                .footer-whatsapp:hover {
                    color: #fde047;
                }
                .footer-copyright,
                .footer-credit {
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </footer>
    }
}
