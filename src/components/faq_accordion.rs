use yew::prelude::*;

use crate::content::Faq;
use crate::state::faq::FaqState;

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub faqs: Vec<Faq>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let state = use_reducer(FaqState::default);

    html! {
        <div class="faq-list">
            { for props.faqs.iter().enumerate().map(|(index, faq)| {
                let is_open = state.is_open(index);
                let toggle = {
                    let state = state.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        state.dispatch(index);
                    })
                };
                html! {
                    <div key={index} class={classes!("faq-item", is_open.then(|| "open"))}>
                        <button class="faq-question" onclick={toggle}>
                            <span class="question-text">{&faq.question}</span>
                            <span class="toggle-icon">{if is_open { "▲" } else { "▼" }}</span>
                        </button>
                        if is_open {
                            <div class="faq-answer">{&faq.answer}</div>
                        }
                    </div>
                }
            }) }
            <style>
                {r#"
                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                    max-width: 48rem;
                    margin: 0 auto;
                }
                .faq-item {
                    background: #ffffff;
                    border-radius: 16px;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                }
                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                }
                .faq-question:hover {
                    background: #f9fafb;
                }
                .question-text {
                    font-weight: 900;
                    font-size: 1.125rem;
                    color: #1f2937;
                }
                .toggle-icon {
                    color: #9333ea;
                }
                .faq-answer {
                    padding: 0 1.5rem 1.5rem;
                    color: #4b5563;
                    font-weight: 500;
                }
                "#}
            </style>
        </div>
    }
}
