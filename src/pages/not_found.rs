use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404"}</h1>
            <p>{"This page doesn't exist."}</p>
            <Link<Route> to={Route::Home} classes="not-found-link">
                {"Back to Happy Friends Project"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .not-found-page h1 {
                    font-size: 6rem;
                    font-weight: 900;
                    margin: 0;
                    background: linear-gradient(90deg, #ec4899, #a855f7);
                    -webkit-background-clip: text;
                    color: transparent;
                }
                .not-found-link {
                    margin-top: 1.5rem;
                    font-weight: bold;
                    color: #9333ea;
                }
                "#}
            </style>
        </div>
    }
}
