use std::rc::Rc;

use yew::prelude::*;
use web_sys::MouseEvent;
use gloo_timers::callback::Interval;

use crate::config::CAROUSEL_PERIOD_MS;

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

pub const TESTIMONIALS: [Testimonial; 5] = [
    Testimonial {
        quote: "PixelForge rebuilt our storefront and doubled conversion in a quarter.",
        author: "Maya Lindgren",
        role: "COO, Fernwood Goods",
    },
    Testimonial {
        quote: "The rare agency that treats deadlines as promises, not suggestions.",
        author: "Tom Okafor",
        role: "Founder, Brightline Labs",
    },
    Testimonial {
        quote: "Their brand refresh gave us an identity our whole team is proud of.",
        author: "Sofia Reyes",
        role: "Marketing Lead, Cadence Health",
    },
    Testimonial {
        quote: "Clear communication, clean handoff, zero surprises. We'll be back.",
        author: "Jonas Weber",
        role: "CTO, Parkside Analytics",
    },
    Testimonial {
        quote: "From SEO audit to paid campaigns, every number moved the right way.",
        author: "Amara Diallo",
        role: "Growth Manager, Northbeam Travel",
    },
];

/// Cursor into the testimonial sequence. Wraps in both directions, so the
/// index always stays within `0..len`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    pub index: usize,
    pub len: usize,
}

pub enum CarouselAction {
    Next,
    Prev,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }
}

impl Reducible for Carousel {
    type Action = CarouselAction;

    fn reduce(self: Rc<Self>, action: CarouselAction) -> Rc<Self> {
        if self.len == 0 {
            return self;
        }
        let index = match action {
            CarouselAction::Next => (self.index + 1) % self.len,
            CarouselAction::Prev => (self.index + self.len - 1) % self.len,
        };
        Rc::new(Self { index, len: self.len })
    }
}

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_reducer(|| Carousel::new(TESTIMONIALS.len()));

    {
        let dispatcher = carousel.dispatcher();
        use_effect_with_deps(
            move |_| {
                // Auto-advance runs for the lifetime of the section; manual
                // clicks deliberately do not reset it.
                let interval = (!TESTIMONIALS.is_empty()).then(|| {
                    Interval::new(CAROUSEL_PERIOD_MS, move || {
                        dispatcher.dispatch(CarouselAction::Next);
                    })
                });
                move || drop(interval)
            },
            (),
        );
    }

    let prev = {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            carousel.dispatch(CarouselAction::Prev);
        })
    };
    let next = {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            carousel.dispatch(CarouselAction::Next);
        })
    };

    html! {
        <section id="testimonials" class="testimonials-section">
            <h2>{"What Clients Say"}</h2>
            <div class="testimonial-track">
                { for TESTIMONIALS.iter().enumerate().map(|(i, t)| {
                    let class = if i == carousel.index {
                        "testimonial-card active"
                    } else {
                        "testimonial-card"
                    };
                    html! {
                        <figure class={class}>
                            <blockquote>{ t.quote }</blockquote>
                            <figcaption>
                                <strong>{ t.author }</strong>
                                <span class="role">{ t.role }</span>
                            </figcaption>
                        </figure>
                    }
                }) }
            </div>
            if !TESTIMONIALS.is_empty() {
                <div class="testimonial-controls">
                    <button class="testimonial-prev" onclick={prev}>{"‹"}</button>
                    <button class="testimonial-next" onclick={next}>{"›"}</button>
                </div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(carousel: Carousel, action: CarouselAction) -> Carousel {
        Rc::try_unwrap(Rc::new(carousel).reduce(action)).unwrap()
    }

    #[test]
    fn next_advances_and_wraps() {
        let mut c = Carousel::new(5);
        for expected in [1, 2, 3, 4, 0, 1] {
            c = apply(c, CarouselAction::Next);
            assert_eq!(c.index, expected);
        }
    }

    #[test]
    fn prev_from_zero_wraps_to_the_end() {
        let c = apply(Carousel::new(5), CarouselAction::Prev);
        assert_eq!(c.index, 4);
    }

    #[test]
    fn next_then_prev_is_identity() {
        let c = Carousel::new(5);
        let c = apply(c, CarouselAction::Next);
        let c = apply(c, CarouselAction::Prev);
        assert_eq!(c.index, 0);
    }

    #[test]
    fn index_stays_in_range_under_any_sequence() {
        let mut c = Carousel::new(TESTIMONIALS.len());
        for step in 0..50 {
            let action = if step % 3 == 0 {
                CarouselAction::Prev
            } else {
                CarouselAction::Next
            };
            c = apply(c, action);
            assert!(c.index < c.len);
        }
    }

    #[test]
    fn empty_sequence_never_moves() {
        let c = apply(Carousel::new(0), CarouselAction::Next);
        assert_eq!(c.index, 0);
        let c = apply(c, CarouselAction::Prev);
        assert_eq!(c.index, 0);
    }
}
