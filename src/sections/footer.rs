use yew::prelude::*;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use chrono::{Datelike, Local};

use crate::config::BACK_TO_TOP_SHOW_PX;

/// Visibility is a pure function of the scroll offset.
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_SHOW_PX
}

#[function_component(BackToTop)]
pub fn back_to_top() -> Html {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    visible.set(back_to_top_visible(scroll_y));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let onclick = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        if let Some(window) = web_sys::window() {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    });

    html! {
        <button
            class={classes!("back-to-top", (*visible).then_some("show"))}
            onclick={onclick}
            title="Back to top"
        >
            {"↑"}
        </button>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <p>
                {"© "}<span class="year">{ year }</span>
                {" PixelForge Studio. All rights reserved."}
            </p>
            <BackToTop />
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_at_and_below_the_threshold() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(399.0));
        assert!(!back_to_top_visible(400.0));
    }

    #[test]
    fn visible_past_the_threshold() {
        assert!(back_to_top_visible(400.5));
        assert!(back_to_top_visible(10_000.0));
    }
}
