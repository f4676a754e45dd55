use std::cell::{Cell, RefCell};
use std::rc::Rc;

use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use gloo_timers::callback::Interval;

use crate::config::{COUNTER_STEPS, COUNTER_TICK_MS, COUNTER_TRIGGER_FRACTION};

pub struct Stat {
    pub label: &'static str,
    pub target: u32,
    pub suffix: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { label: "Projects shipped", target: 240, suffix: "+" },
    Stat { label: "Happy clients", target: 180, suffix: "+" },
    Stat { label: "Team members", target: 24, suffix: "" },
    Stat { label: "Client retention", target: 98, suffix: "%" },
];

/// Tickable counter animation. Each tick advances the displayed value by a
/// fixed increment and clamps at the target, so the sequence is monotonic
/// and ends exactly on the target.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterAnim {
    current: u32,
    target: u32,
    increment: u32,
}

impl CounterAnim {
    pub fn new(target: u32) -> Self {
        Self {
            current: 0,
            target,
            increment: (target / COUNTER_STEPS).max(1),
        }
    }

    /// Advances one tick and returns the new display value.
    pub fn tick(&mut self) -> u32 {
        self.current = (self.current + self.increment).min(self.target);
        self.current
    }

    pub fn value(&self) -> u32 {
        self.current
    }

    pub fn done(&self) -> bool {
        self.current >= self.target
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub label: &'static str,
    pub target: u32,
    pub suffix: &'static str,
}

/// One animated statistic. Each counter owns its started flag, so counters
/// scrolled into view after another has already fired still animate.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let display = use_state(|| 0u32);
    let node = use_node_ref();

    {
        let display = display.clone();
        let node = node.clone();
        let target = props.target;
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let window_clone = window.clone();
                let started = Rc::new(Cell::new(false));
                let interval_handle: Rc<RefCell<Option<Interval>>> =
                    Rc::new(RefCell::new(None));
                let interval_handle_clone = interval_handle.clone();

                let check = move || {
                    if started.get() {
                        return;
                    }
                    let el = match node.cast::<web_sys::HtmlElement>() {
                        Some(el) => el,
                        None => return,
                    };
                    let viewport = window_clone
                        .inner_height()
                        .ok()
                        .and_then(|v| v.as_f64())
                        .unwrap_or(0.0);
                    if el.get_bounding_client_rect().top() < viewport * COUNTER_TRIGGER_FRACTION {
                        started.set(true);
                        let anim = Rc::new(RefCell::new(CounterAnim::new(target)));
                        let display = display.clone();
                        let handle = interval_handle.clone();
                        let interval = Interval::new(COUNTER_TICK_MS, move || {
                            let value = anim.borrow_mut().tick();
                            display.set(value);
                            if anim.borrow().done() {
                                // Dropping the handle stops the tick.
                                handle.borrow_mut().take();
                            }
                        });
                        *interval_handle.borrow_mut() = Some(interval);
                    }
                };

                // A counter already in view should animate without waiting
                // for a scroll.
                check();

                let scroll_callback = Closure::wrap(Box::new(check) as Box<dyn FnMut()>);
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
                    interval_handle_clone.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div class="stat" ref={node}>
            <div class="stat-value">
                <span class="counter">{ *display }</span>
                <span class="stat-suffix">{ props.suffix }</span>
            </div>
            <p class="stat-label">{ props.label }</p>
        </div>
    }
}

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section id="stats" class="stats-section">
            <h2>{"Our Numbers"}</h2>
            <div class="stats-grid">
                { for STATS.iter().map(|stat| html! {
                    <StatCounter label={stat.label} target={stat.target} suffix={stat.suffix} />
                }) }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(anim: &mut CounterAnim) -> Vec<u32> {
        let mut values = Vec::new();
        while !anim.done() {
            values.push(anim.tick());
            assert!(values.len() <= 10_000, "animation failed to terminate");
        }
        values
    }

    #[test]
    fn reaches_the_exact_target() {
        let mut anim = CounterAnim::new(240);
        let values = run_to_completion(&mut anim);
        assert_eq!(values.last(), Some(&240));
        assert_eq!(anim.value(), 240);
    }

    #[test]
    fn values_are_monotonically_non_decreasing() {
        let mut anim = CounterAnim::new(98);
        let values = run_to_completion(&mut anim);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn large_target_takes_about_eighty_ticks() {
        let mut anim = CounterAnim::new(240);
        let values = run_to_completion(&mut anim);
        assert_eq!(values.len(), 80);
    }

    #[test]
    fn small_target_steps_by_one() {
        // 5 / 80 rounds to zero; the increment floor keeps it moving.
        let mut anim = CounterAnim::new(5);
        let values = run_to_completion(&mut anim);
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn zero_target_is_done_immediately() {
        let mut anim = CounterAnim::new(0);
        assert!(anim.done());
        assert_eq!(anim.tick(), 0);
    }

    #[test]
    fn ticking_past_done_stays_clamped() {
        let mut anim = CounterAnim::new(3);
        run_to_completion(&mut anim);
        assert_eq!(anim.tick(), 3);
        assert_eq!(anim.tick(), 3);
    }
}
