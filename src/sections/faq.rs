use yew::prelude::*;
use web_sys::MouseEvent;

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: [FaqEntry; 5] = [
    FaqEntry {
        question: "How long does a typical project take?",
        answer: "Most engagements run six to twelve weeks depending on scope. We agree on milestones before kickoff and you see working output every week.",
    },
    FaqEntry {
        question: "Do you work with early-stage startups?",
        answer: "Yes. Roughly half our clients are pre-Series A. We offer phased scopes so you can start small and expand as the product finds its footing.",
    },
    FaqEntry {
        question: "What does pricing look like?",
        answer: "Fixed-price for well-defined scopes, monthly retainers for ongoing work. Every proposal itemizes deliverables so there are no surprise invoices.",
    },
    FaqEntry {
        question: "Who owns the work when we're done?",
        answer: "You do. Source files, repositories, brand assets and accounts are handed over in full at the end of the engagement.",
    },
    FaqEntry {
        question: "Can you take over an existing codebase or brand?",
        answer: "Usually, yes. We start with a short audit to map what exists, then propose either incremental improvement or a rebuild with honest trade-offs.",
    },
];

/// Accordion rule: opening an item closes the rest; clicking the open item
/// closes it, leaving none open.
pub fn toggle_open(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    open: bool,
    on_toggle: Callback<MouseEvent>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    html! {
        <div class={classes!("faq-item", props.open.then_some("open"))}>
            <button class="faq-question" onclick={props.on_toggle.clone()}>
                <span class="question-text">{ props.question }</span>
                <span class="toggle-icon">{ if props.open { "−" } else { "+" } }</span>
            </button>
            <div class="faq-answer">
                <p>{ props.answer }</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq-section">
            <h2>{"Frequently Asked Questions"}</h2>
            <div class="faq-list">
                { for FAQ_ENTRIES.iter().enumerate().map(|(i, entry)| {
                    let on_toggle = {
                        let open = open.clone();
                        Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            open.set(toggle_open(*open, i));
                        })
                    };
                    html! {
                        <FaqItem
                            question={entry.question}
                            answer={entry.answer}
                            open={*open == Some(i)}
                            on_toggle={on_toggle}
                        />
                    }
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_an_item_closes_the_previous_one() {
        let open = toggle_open(None, 0);
        assert_eq!(open, Some(0));
        let open = toggle_open(open, 2);
        assert_eq!(open, Some(2));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        let open = toggle_open(Some(3), 3);
        assert_eq!(open, None);
    }

    #[test]
    fn at_most_one_open_after_any_click_sequence() {
        // Option<usize> can only name one open item, so the single-open
        // invariant holds structurally; check the value tracks each click.
        let mut open = None;
        for click in [0usize, 1, 1, 4, 2, 2, 2, 0, 3] {
            let before = open;
            open = toggle_open(before, click);
            if before == Some(click) {
                assert_eq!(open, None);
            } else {
                assert_eq!(open, Some(click));
            }
        }
        assert_eq!(open, Some(3));
    }
}
