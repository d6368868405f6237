use yew::prelude::*;

use crate::content::Stat;

#[derive(Properties, PartialEq)]
pub struct StatsGridProps {
    pub stats: Vec<Stat>,
}

#[function_component(StatsGrid)]
pub fn stats_grid(props: &StatsGridProps) -> Html {
    html! {
        <div class="stats-grid">
            { for props.stats.iter().enumerate().map(|(index, stat)| html! {
                <div key={index} class="stat-card">
                    <div class="stat-number">{&stat.number}</div>
                    <div class="stat-label">{&stat.label}</div>
                    <div class="stat-subtitle">{&stat.subtitle}</div>
                </div>
            }) }
            <style>
                {r#"
                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(2, 1fr);
                    gap: 1.5rem;
                }
                @media (min-width: 768px) {
                    .stats-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                .stat-card {
                    padding: 2rem 1.5rem;
                    text-align: center;
                    border-radius: 24px;
                    background: linear-gradient(135deg, #ec4899, #9333ea);
                    border: 2px solid rgba(249, 168, 212, 0.5);
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.15);
                    transition: transform 0.3s ease;
                }
                .stat-card:hover {
                    transform: scale(1.05);
                }
                .stat-number {
                    font-size: 3rem;
                    font-weight: 900;
                    color: #ffffff;
                }
                .stat-label {
                    font-size: 1.25rem;
                    font-weight: bold;
                    color: #fde047;
                }
                .stat-subtitle {
                    font-size: 0.875rem;
                    color: rgba(255, 255, 255, 0.8);
                }
                "#}
            </style>
        </div>
    }
}
