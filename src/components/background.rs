use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// (gradient, opacity, x factor, y factor) per blob.
const BLOBS: [(&str, f64, f64, f64); 4] = [
    ("#FF1493, #FF69B4", 0.1, 0.02, 0.02),
    ("#00BFFF, #1E90FF", 0.08, -0.01, -0.01),
    ("#FFD700, #FFA500", 0.1, 0.015, 0.015),
    ("#8A2BE2, #9370DB", 0.08, -0.02, 0.01),
];

const LOGO_FACTOR: f64 = 0.005;

fn translate(pointer: (i32, i32), factor_x: f64, factor_y: f64) -> String {
    format!(
        "translate({}px, {}px)",
        pointer.0 as f64 * factor_x,
        pointer.1 as f64 * factor_y
    )
}

#[derive(Properties, PartialEq)]
pub struct BackgroundProps {
    pub logo: String,
}

/// Colour blobs and the logo silhouette drifting with the pointer.
#[function_component(Background)]
pub fn background(props: &BackgroundProps) -> Html {
    let pointer = use_state(|| (0, 0));

    {
        let pointer = pointer.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            pointer.set((e.client_x(), e.client_y()));
        });
    }

    html! {
        <div class="page-background">
            { for BLOBS.iter().enumerate().map(|(index, (gradient, opacity, fx, fy))| {
                let style = format!(
                    "background: radial-gradient(circle, {}); opacity: {}; transform: {};",
                    gradient,
                    opacity,
                    translate(*pointer, *fx, *fy)
                );
                html! { <div key={index} class={format!("blob blob-{}", index)} {style} /> }
            }) }
            <div
                class="logo-silhouette"
                style={format!(
                    "background-image: url('{}'); transform: rotate(12deg) {};",
                    props.logo,
                    translate(*pointer, LOGO_FACTOR, LOGO_FACTOR)
                )}
            />
            <style>
                {r#"
                .page-background {
                    position: fixed;
                    inset: 0;
                    overflow: hidden;
                    pointer-events: none;
                    z-index: 0;
                }
                .blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(60px);
                    transition: transform 0.3s ease-out;
                }
                .blob-0 { top: 5rem; left: 2.5rem; width: 18rem; height: 18rem; }
                .blob-1 { top: 10rem; right: 5rem; width: 24rem; height: 24rem; }
                .blob-2 { bottom: 10rem; left: 25%; width: 20rem; height: 20rem; }
                .blob-3 { bottom: 5rem; right: 25%; width: 16rem; height: 16rem; }
                .logo-silhouette {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 600px;
                    height: 600px;
                    margin: -300px 0 0 -300px;
                    opacity: 0.05;
                    background-size: contain;
                    background-repeat: no-repeat;
                    background-position: center;
                    transition: transform 0.5s ease-out;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_scales_pointer() {
        assert_eq!(translate((100, 200), 0.02, 0.02), "translate(2px, 4px)");
        assert_eq!(translate((100, 200), -0.01, 0.5), "translate(-1px, 100px)");
        assert_eq!(translate((0, 0), 0.02, 0.02), "translate(0px, 0px)");
    }
}
