use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::config::NAV_PROBE_OFFSET_PX;
use crate::theme::ThemeToggle;

/// Nav links and the section ids they target, in document order.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("home", "Home"),
    ("services", "Services"),
    ("stats", "Our Numbers"),
    ("testimonials", "Clients"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

/// Picks the section the probe point (`scroll_y` + offset) currently falls
/// in. Sections are `(id, top, height)` in document order; when overlapping
/// geometry matches more than one, the last wins. `None` when the probe is
/// outside every section.
pub fn current_section<'a>(scroll_y: f64, sections: &[(&'a str, f64, f64)]) -> Option<&'a str> {
    let probe = scroll_y + NAV_PROBE_OFFSET_PX;
    let mut current = None;
    for (id, top, height) in sections {
        if probe >= *top && probe <= top + height {
            current = Some(*id);
        }
    }
    current
}

fn section_geometry(document: &web_sys::Document) -> Vec<(&'static str, f64, f64)> {
    NAV_LINKS
        .iter()
        .filter_map(|(id, _)| {
            document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|el| (*id, f64::from(el.offset_top()), f64::from(el.offset_height())))
        })
        .collect()
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let active_id = use_state(|| None::<&'static str>);

    {
        let active_id = active_id.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    let sections = section_geometry(&document);
                    active_id.set(current_section(scroll_y, &sections));
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

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Following a link always collapses the mobile menu.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open { "nav open" } else { "nav" };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"PixelForge"}</a>
                <nav class={menu_class}>
                    { for NAV_LINKS.iter().map(|(id, label)| {
                        let class = if *active_id == Some(*id) {
                            "nav-link active"
                        } else {
                            "nav-link"
                        };
                        html! {
                            <a href={format!("#{}", id)} class={class} onclick={close_menu.clone()}>
                                { *label }
                            </a>
                        }
                    }) }
                </nav>
                <ThemeToggle />
                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [(&str, f64, f64); 3] = [
        ("home", 0.0, 600.0),
        ("services", 600.0, 800.0),
        ("contact", 1400.0, 500.0),
    ];

    #[test]
    fn probe_lands_in_the_right_section() {
        assert_eq!(current_section(0.0, &SECTIONS), Some("home"));
        assert_eq!(current_section(700.0, &SECTIONS), Some("services"));
        assert_eq!(current_section(1500.0, &SECTIONS), Some("contact"));
    }

    #[test]
    fn probe_offset_shifts_the_boundary() {
        // scroll_y 500 probes at 600, which is inside both home
        // [0, 600] and services [600, 1400]; the later section wins.
        assert_eq!(current_section(500.0, &SECTIONS), Some("services"));
    }

    #[test]
    fn no_section_matches_past_the_end() {
        assert_eq!(current_section(2000.0, &SECTIONS), None);
        assert_eq!(current_section(5000.0, &[]), None);
    }

    #[test]
    fn gap_between_sections_matches_nothing() {
        let gappy = [("a", 0.0, 100.0), ("b", 500.0, 100.0)];
        assert_eq!(current_section(200.0, &gappy), None);
    }

    #[test]
    fn last_matching_section_wins_when_overlapping() {
        let overlapping = [("a", 0.0, 1000.0), ("b", 300.0, 1000.0)];
        assert_eq!(current_section(400.0, &overlapping), Some("b"));
    }
}
