use yew::prelude::*;

use crate::content::Brand;
use crate::state::nav::{NavState, Section};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand: Brand,
    pub nav: NavState,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<MouseEvent>,
}

fn nav_entries(props: &HeaderProps, class: &'static str) -> Html {
    Section::ALL
        .iter()
        .map(|&section| {
            let onclick = {
                let on_navigate = props.on_navigate.clone();
                Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    on_navigate.emit(section);
                })
            };
            html! {
                <button
                    key={section.id()}
                    class={classes!(class, (props.nav.active == section).then(|| "active"))}
                    {onclick}
                >
                    {section.label()}
                </button>
            }
        })
        .collect()
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <>
            <header class={classes!("top-nav", props.nav.scrolled.then(|| "scrolled"))}>
                <div class="nav-brand">
                    <img src={props.brand.logo.clone()} alt={format!("{} Logo", props.brand.name)} />
                    <div>
                        <h1>{props.brand.name.to_uppercase()}</h1>
                        <p>{&props.brand.tagline}</p>
                    </div>
                </div>
                <nav class="nav-links">
                    { nav_entries(props, "nav-link") }
                </nav>
                <button class="burger-menu" aria-label="Menu" onclick={props.on_toggle_menu.clone()}>
                    { if props.nav.menu_open { "✕" } else { "☰" } }
                </button>
            </header>

            if props.nav.menu_open {
                <div class="mobile-menu">
                    { nav_entries(props, "mobile-nav-link") }
                </div>
            }

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    height: 4rem;
                    padding: 0 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(12px);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    border-bottom: 1px solid rgba(229, 231, 235, 0.5);
                }
                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }
                .nav-brand img {
                    width: 3rem;
                    height: 3rem;
                    object-fit: contain;
                }
                .nav-brand h1 {
                    margin: 0;
                    font-size: 1.125rem;
                    font-weight: 900;
                    background: linear-gradient(90deg, #9333ea, #db2777);
                    -webkit-background-clip: text;
                    color: transparent;
                }
                .nav-brand p {
                    margin: 0;
                    font-size: 0.75rem;
                    font-weight: bold;
                    color: #4b5563;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-link {
                    background: none;
                    border: none;
                    font-weight: bold;
                    color: #1f2937;
                    cursor: pointer;
                    transition: color 0.2s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #9333ea;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    cursor: pointer;
                }
                .mobile-menu {
                    position: fixed;
                    inset: 4rem 0 0 0;
                    z-index: 40;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 2rem;
                    background: linear-gradient(135deg, #9333ea, #db2777);
                }
                .mobile-nav-link {
                    background: none;
                    border: none;
                    font-size: 1.5rem;
                    font-weight: bold;
                    color: #ffffff;
                    cursor: pointer;
                }
                .mobile-nav-link:hover {
                    color: #fde047;
                }
                .mobile-nav-link.active {
                    color: #c084fc;
                }
                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                    .burger-menu {
                        display: block;
                    }
                }
                "#}
            </style>
        </>
    }
}
