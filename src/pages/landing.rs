use std::rc::Rc;

use yew::prelude::*;

use crate::components::background::Background;
use crate::components::faq_accordion::FaqAccordion;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::image_carousel::{CarouselLayout, ImageCarousel};
use crate::components::image_modal::ImageModal;
use crate::components::stats_grid::StatsGrid;
use crate::components::video_carousel::VideoCarousel;
use crate::config::open_in_new_tab;
use crate::content::{Column, Service, SiteContent};
use crate::hooks::{scroll_to_section, use_scroll_spy};
use crate::media::MediaKind;
use crate::state::modal::{ModalAction, ModalState};
use crate::state::nav::{NavAction, NavState, Section};

const SERVICE_CARD_CLASSES: [&str; 3] = ["card-purple", "card-orange", "card-dark"];

fn service_card(index: usize, service: &Service, on_open: &Callback<ModalAction>) -> Html {
    let carousel = match service.kind {
        MediaKind::Image => html! {
            <ImageCarousel
                title={service.title.clone()}
                urls={service.urls.clone()}
                interval_ms={service.interval_ms}
                layout={CarouselLayout::Service}
                on_open={on_open.clone()}
            />
        },
        MediaKind::Video => html! {
            <VideoCarousel title={service.title.clone()} urls={service.urls.clone()} />
        },
    };

    html! {
        <div key={service.title.clone()} class={classes!("service-card", SERVICE_CARD_CLASSES[index % SERVICE_CARD_CLASSES.len()])}>
            <div class="happy-badge">
                <div class="badge-happy">{"HAPPY"}</div>
                <div class="badge-year">{"2024"}</div>
            </div>
            <div class="service-content">
                <h3>{service.heading()}</h3>
                <p>{&service.subtitle}</p>
                { carousel }
            </div>
            <div class="service-hashtag">
                <span>{"#BEHAPPYWITHYOURFRIENDS"}</span>
            </div>
        </div>
    }
}

fn portfolio_column(content: &SiteContent, column: Column, on_open: &Callback<ModalAction>) -> Html {
    html! {
        <div class={classes!("portfolio-column", (column == Column::Center).then(|| "portfolio-center"))}>
            { for content.panels_in(column).map(|panel| html! {
                <ImageCarousel
                    key={panel.title.clone()}
                    title={panel.title.clone()}
                    urls={panel.urls.clone()}
                    interval_ms={panel.interval_ms}
                    layout={CarouselLayout::Panel(panel.height)}
                    on_open={on_open.clone()}
                />
            }) }
        </div>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_context::<Rc<SiteContent>>();
    let nav = use_reducer(NavState::default);
    let image_modal = use_reducer(ModalState::default);

    use_scroll_spy(nav.dispatcher());

    let Some(content) = content else {
        log::error!("Landing rendered without site content");
        return html! {};
    };

    let navigate = {
        let nav = nav.clone();
        Callback::from(move |section: Section| {
            log::debug!("Navigating to #{}", section.id());
            scroll_to_section(section);
            nav.dispatch(NavAction::NavigateTo(section));
        })
    };

    let toggle_menu = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    let go_to = |section: Section| {
        let navigate = navigate.clone();
        Callback::from(move |_: MouseEvent| navigate.emit(section))
    };

    let open_image = {
        let image_modal = image_modal.clone();
        Callback::from(move |action: ModalAction| image_modal.dispatch(action))
    };

    let close_image = {
        let image_modal = image_modal.clone();
        Callback::from(move |_: MouseEvent| image_modal.dispatch(ModalAction::Close))
    };

    let whatsapp_url = content.contact.whatsapp_url();
    let open_whatsapp = {
        let url = whatsapp_url.clone();
        Callback::from(move |_: MouseEvent| open_in_new_tab(&url))
    };

    html! {
        <div class="landing-page">
            <Background logo={content.brand.logo.clone()} />

            <Header
                brand={content.brand.clone()}
                nav={(*nav).clone()}
                on_navigate={navigate.clone()}
                on_toggle_menu={toggle_menu}
            />

            <section id={Section::Home.id()} class="hero">
                <div class="hero-content">
                    <h1>
                        <span class="hero-line-1">{"This is Our Era"}</span>
                        <span class="hero-line-2">{"The Memory is"}</span>
                        <span class="hero-line-3">{"You."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"We create unforgettable yearbooks that capture your precious moments with friends. Let's make your school memories last forever!"}
                    </p>
                    <div class="hero-cta-group">
                        <button class="hero-cta primary" onclick={go_to(Section::Contact)}>
                            {"Start Your Project"}
                        </button>
                        <button class="hero-cta" onclick={go_to(Section::Portfolio)}>
                            {"View Portfolio"}
                        </button>
                    </div>
                </div>
            </section>

            <section id={Section::Services.id()} class="services-section">
                <h2 class="section-title">{"Our Services"}</h2>
                <p class="section-subtitle">{"All the best choice come from us"}</p>
                <div class="services-grid">
                    { for content.services.iter().enumerate().map(|(index, service)| service_card(index, service, &open_image)) }
                </div>
            </section>

            <section id={Section::Portfolio.id()} class="portfolio-section">
                <div class="portfolio-board">
                    <h2>{"Photo"}</h2>
                    <p>{"All the best choice come from us"}</p>
                    <div class="portfolio-grid">
                        { portfolio_column(&content, Column::Left, &open_image) }
                        { portfolio_column(&content, Column::Center, &open_image) }
                        { portfolio_column(&content, Column::Right, &open_image) }
                    </div>
                </div>
            </section>

            <section id={Section::About.id()} class="about-section">
                <h2 class="section-title">{&content.brand.tagline}</h2>
                <StatsGrid stats={content.stats.clone()} />
            </section>

            <section class="faq-section">
                <h2 class="section-title">{"Any Questions?"}</h2>
                <FaqAccordion faqs={content.faqs.clone()} />
            </section>

            <section class="address-section">
                <h2 class="section-title">{"Address"}</h2>
                <div class="office-grid">
                    { for content.offices.iter().map(|office| html! {
                        <div key={office.name.clone()} class="office-card">
                            <h3>{&office.name}</h3>
                            <p>
                                { for office.lines.iter().enumerate().map(|(i, line)| html! {
                                    <>
                                        if i > 0 { <br /> }
                                        {line}
                                    </>
                                }) }
                            </p>
                        </div>
                    }) }
                </div>
                <div class="region-panel">
                    <h3>{"Representative Marketing"}</h3>
                    <div class="region-grid">
                        { for content.regions.iter().map(|region| html! {
                            <div key={region.clone()} class="region-card"><h4>{region}</h4></div>
                        }) }
                    </div>
                </div>
            </section>

            <section id={Section::Contact.id()} class="contact-section">
                <h2 class="section-title">{"Contact Our Admin"}</h2>
                <p class="section-subtitle">{"Ready to help you from our office"}</p>
                <div class="admin-card">
                    <div class="admin-avatar"><span>{"HFP"}</span></div>
                    <h3>{&content.brand.name}</h3>
                    <p>{"Admin Pusat"}</p>
                    <div class="admin-channel whatsapp">
                        <h4>{"📱 WhatsApp"}</h4>
                        <p class="channel-value">{&content.contact.whatsapp_display}</p>
                        <p>{&content.contact.admin_name}</p>
                    </div>
                    <div class="admin-channel phone">
                        <h4>{"📞 Telepon"}</h4>
                        <p class="channel-value">{&content.contact.phone_display}</p>
                        <p>{&content.contact.phone_hours}</p>
                    </div>
                </div>
                <div class="quick-contact">
                    <h3>{"Need Quick Response?"}</h3>
                    <p>{"Contact our admin directly for faster service!"}</p>
                    <button class="hero-cta primary" onclick={open_whatsapp}>{"WhatsApp Now"}</button>
                </div>
            </section>

            <Footer
                brand={content.brand.clone()}
                social={content.social.clone()}
                whatsapp_url={whatsapp_url}
            />

            <ImageModal
                open={image_modal.is_open()}
                url={image_modal.url().to_string()}
                caption={image_modal.caption().to_string()}
                label={content.brand.name.clone()}
                on_close={close_image}
            />

            <style>
                {r#"
                .landing-page {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    background: #ffffff;
                    color: #111827;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .landing-page section {
                    position: relative;
                    z-index: 10;
                    padding: 5rem 1rem;
                }
                .section-title {
                    text-align: center;
                    font-size: 3rem;
                    font-weight: 900;
                    margin-bottom: 1rem;
                    background: linear-gradient(90deg, #06b6d4, #ec4899);
                    -webkit-background-clip: text;
                    color: transparent;
                }
                .section-subtitle {
                    text-align: center;
                    font-weight: bold;
                    color: #4b5563;
                    margin-bottom: 4rem;
                }
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                .hero h1 {
                    font-size: 4.5rem;
                    font-weight: 900;
                    line-height: 1.1;
                }
                .hero h1 span {
                    display: block;
                    -webkit-background-clip: text;
                    color: transparent;
                }
                .hero-line-1 { background: linear-gradient(90deg, #a855f7, #ec4899, #22d3ee); }
                .hero-line-2 { background: linear-gradient(90deg, #ec4899, #a855f7, #06b6d4); }
                .hero-line-3 { background: linear-gradient(90deg, #06b6d4, #3b82f6, #a855f7); }
                .hero-subtitle {
                    max-width: 42rem;
                    margin: 2rem auto;
                    font-size: 1.25rem;
                    font-weight: 500;
                    color: #374151;
                }
                .hero-cta-group {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
                    flex-wrap: wrap;
                }
                .hero-cta {
                    padding: 1rem 2rem;
                    font-size: 1.125rem;
                    font-weight: 900;
                    border: 2px solid #111827;
                    border-radius: 8px;
                    background: #ffffff;
                    color: #111827;
                    cursor: pointer;
                    transition: transform 0.2s ease;
                }
                .hero-cta:hover {
                    transform: scale(1.05);
                }
                .hero-cta.primary {
                    background: linear-gradient(90deg, #ec4899, #a855f7);
                    color: #ffffff;
                }
                .services-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 2rem;
                    max-width: 80rem;
                    margin: 0 auto;
                }
                .service-card {
                    position: relative;
                    height: 800px;
                    padding: 2rem;
                    overflow: hidden;
                    border: 4px solid #111827;
                    border-radius: 24px;
                    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    color: #ffffff;
                }
                .card-purple { background: linear-gradient(135deg, #9333ea, #4f46e5); }
                .card-orange { background: linear-gradient(135deg, #f97316, #ef4444); }
                .card-dark { background: linear-gradient(135deg, #1f2937, #000000); }
                .service-content h3 {
                    font-size: 2.25rem;
                    font-weight: 900;
                }
                .service-content p {
                    font-weight: bold;
                    opacity: 0.9;
                    margin-bottom: 2rem;
                }
                .happy-badge {
                    position: absolute;
                    bottom: 6rem;
                    left: 2rem;
                    font-weight: 900;
                    line-height: 1;
                }
                .badge-happy { font-size: 1.5rem; }
                .badge-year { font-size: 2.25rem; color: #fde047; }
                .service-hashtag {
                    position: absolute;
                    bottom: 2rem;
                    left: 0;
                    right: 0;
                    text-align: center;
                }
                .service-hashtag span {
                    padding: 0.5rem 1rem;
                    border: 2px solid #ffffff;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.3);
                    font-weight: bold;
                    font-size: 0.875rem;
                }
                .portfolio-board {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 2rem;
                    border: 4px solid #111827;
                    border-radius: 48px;
                    background: linear-gradient(90deg, #f97316, #ef4444, #ec4899);
                    text-align: center;
                    color: #ffffff;
                }
                .portfolio-board h2 {
                    font-size: 3rem;
                    font-weight: 900;
                }
                .portfolio-grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr 1fr;
                    gap: 1.5rem;
                    align-items: center;
                    margin-top: 2rem;
                }
                .portfolio-column {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .about-section {
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .faq-section,
                .address-section {
                    background: #f9fafb;
                }
                .office-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 2rem;
                    max-width: 72rem;
                    margin: 0 auto 3rem;
                }
                .office-card,
                .admin-card {
                    padding: 2rem;
                    border: 2px solid #e5e7eb;
                    border-radius: 24px;
                    background: #ffffff;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                }
                .office-card h3 {
                    font-weight: 900;
                    color: #9333ea;
                }
                .region-panel {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 2rem;
                    border: 2px solid #ffffff;
                    border-radius: 40px;
                    background: linear-gradient(90deg, #facc15, #fb923c);
                    text-align: center;
                }
                .region-panel h3 {
                    font-size: 1.875rem;
                    font-weight: 900;
                    color: #ffffff;
                }
                .region-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
                    gap: 1rem;
                }
                .region-card {
                    padding: 0.5rem;
                    border: 2px solid #ffffff;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.3);
                    font-weight: bold;
                }
                .admin-card {
                    max-width: 28rem;
                    margin: 0 auto;
                    text-align: center;
                }
                .admin-avatar {
                    width: 5rem;
                    height: 5rem;
                    margin: 0 auto 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 4px solid #ffffff;
                    border-radius: 50%;
                    background: linear-gradient(135deg, #ec4899, #9333ea);
                    color: #ffffff;
                    font-weight: 900;
                }
                .admin-channel {
                    margin-top: 1rem;
                    padding: 1rem;
                    border-radius: 16px;
                }
                .admin-channel.whatsapp {
                    background: linear-gradient(90deg, #fdf2f8, #faf5ff);
                    border: 1px solid #fbcfe8;
                }
                .admin-channel.phone {
                    background: linear-gradient(90deg, #fff7ed, #fef2f2);
                    border: 1px solid #fed7aa;
                }
                .channel-value {
                    font-weight: 900;
                    font-size: 1.125rem;
                }
                .quick-contact {
                    max-width: 42rem;
                    margin: 3rem auto 0;
                    padding: 2rem;
                    border: 4px solid #111827;
                    border-radius: 24px;
                    background: linear-gradient(90deg, #ec4899, #a855f7, #06b6d4);
                    color: #ffffff;
                    text-align: center;
                }
                .quick-contact .hero-cta.primary {
                    background: #ffffff;
                    color: #111827;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 3rem;
                    }
                    .portfolio-grid {
                        grid-template-columns: 1fr;
                    }
                    .service-card {
                        height: auto;
                        min-height: 640px;
                    }
                }
                "#}
            </style>
        </div>
    }
}
