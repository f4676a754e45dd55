use yew::prelude::*;
use web_sys::MouseEvent;
use wasm_bindgen_futures::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::config::FILTER_SETTLE_MS;

pub const FILTER_ALL: &str = "all";

pub const FILTERS: [(&str, &str); 4] = [
    (FILTER_ALL, "All"),
    ("web", "Web"),
    ("design", "Design"),
    ("marketing", "Marketing"),
];

pub struct Service {
    pub title: &'static str,
    pub category: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [Service; 6] = [
    Service {
        title: "Custom Web Apps",
        category: "web",
        description: "Product-grade web applications, from prototype to production.",
    },
    Service {
        title: "E-commerce Builds",
        category: "web",
        description: "Fast storefronts that convert, integrated with your stack.",
    },
    Service {
        title: "Brand Identity",
        category: "design",
        description: "Logos, type systems and guidelines that survive contact with reality.",
    },
    Service {
        title: "UI / UX Design",
        category: "design",
        description: "Interfaces people actually enjoy using, tested with real users.",
    },
    Service {
        title: "SEO & Content",
        category: "marketing",
        description: "Search visibility and content strategy that compound over time.",
    },
    Service {
        title: "Paid Campaigns",
        category: "marketing",
        description: "Performance marketing across channels, measured end to end.",
    },
];

pub fn card_visible(filter: &str, category: &str) -> bool {
    filter == FILTER_ALL || filter == category
}

/// Inline style for one card. `filter` is the live selection, `settled` lags
/// it by the settle delay so a filtered-out card fades before leaving layout.
pub fn card_style(filter: &str, settled: &str, category: &str) -> &'static str {
    if card_visible(filter, category) {
        "display: block; opacity: 1;"
    } else if card_visible(settled, category) {
        "display: block; opacity: 0;"
    } else {
        "display: none; opacity: 0;"
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let filter = use_state(|| FILTER_ALL);
    let settled = use_state(|| FILTER_ALL);

    let on_filter = {
        let filter = filter.clone();
        let settled = settled.clone();
        Callback::from(move |tag: &'static str| {
            filter.set(tag);
            // Rapid re-filtering can leave older timeouts in flight; the
            // last one writes last, so the settled state always catches up
            // to the most recent click.
            let settled = settled.clone();
            spawn_local(async move {
                TimeoutFuture::new(FILTER_SETTLE_MS).await;
                settled.set(tag);
            });
        })
    };

    html! {
        <section id="services" class="services-section">
            <h2>{"What We Do"}</h2>
            <div class="filter-bar">
                { for FILTERS.iter().map(|(tag, label)| {
                    let class = if *filter == *tag { "filter-btn active" } else { "filter-btn" };
                    let on_filter = on_filter.clone();
                    let tag = *tag;
                    let onclick = Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_filter.emit(tag);
                    });
                    html! {
                        <button class={class} onclick={onclick}>{ *label }</button>
                    }
                }) }
            </div>
            <div class="services-grid">
                { for SERVICES.iter().map(|service| html! {
                    <article
                        class="service-card"
                        data-category={service.category}
                        style={card_style(*filter, *settled, service.category)}
                    >
                        <h3>{ service.title }</h3>
                        <p>{ service.description }</p>
                    </article>
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_every_card() {
        for service in &SERVICES {
            assert!(card_visible(FILTER_ALL, service.category));
        }
    }

    #[test]
    fn concrete_tag_shows_exactly_its_cards() {
        let visible: Vec<&str> = SERVICES
            .iter()
            .filter(|s| card_visible("web", s.category))
            .map(|s| s.title)
            .collect();
        assert_eq!(visible, vec!["Custom Web Apps", "E-commerce Builds"]);
    }

    #[test]
    fn every_card_category_has_a_filter_button() {
        for service in &SERVICES {
            assert!(
                FILTERS.iter().any(|(tag, _)| *tag == service.category),
                "no filter for category {}",
                service.category
            );
        }
    }

    #[test]
    fn matching_card_is_fully_visible() {
        assert_eq!(card_style("web", "web", "web"), "display: block; opacity: 1;");
        assert_eq!(card_style(FILTER_ALL, FILTER_ALL, "design"), "display: block; opacity: 1;");
    }

    #[test]
    fn filtered_out_card_fades_before_leaving_layout() {
        // Filter just changed from "all" to "web": design cards fade but
        // keep their layout slot until the settle delay elapses.
        assert_eq!(card_style("web", FILTER_ALL, "design"), "display: block; opacity: 0;");
        // After settling they are gone entirely.
        assert_eq!(card_style("web", "web", "design"), "display: none; opacity: 0;");
    }

    #[test]
    fn settled_state_matches_the_last_filter() {
        // Whatever intermediate states occurred, once settled == filter the
        // style is a pure function of the last click.
        for (tag, _) in &FILTERS {
            for service in &SERVICES {
                let style = card_style(tag, tag, service.category);
                if card_visible(tag, service.category) {
                    assert!(style.contains("opacity: 1"));
                } else {
                    assert!(style.contains("display: none"));
                }
            }
        }
    }
}
