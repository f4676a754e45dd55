//! Tuning constants for the page's interactive behaviors.

/// Local storage key holding the persisted theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";

/// How far below the viewport top the nav highlighter probes for the
/// current section.
pub const NAV_PROBE_OFFSET_PX: f64 = 100.0;

/// Counter animation tick period.
pub const COUNTER_TICK_MS: u32 = 20;

/// A counter reaches its target in roughly this many ticks.
pub const COUNTER_STEPS: u32 = 80;

/// A counter starts once its top edge rises above this fraction of the
/// viewport height.
pub const COUNTER_TRIGGER_FRACTION: f64 = 0.85;

/// Delay before a filtered-out service card is dropped from layout, so the
/// opacity transition can finish.
pub const FILTER_SETTLE_MS: u32 = 200;

/// Auto-advance period of the testimonial carousel.
pub const CAROUSEL_PERIOD_MS: u32 = 8_000;

/// Scroll offset past which the back-to-top control shows.
pub const BACK_TO_TOP_SHOW_PX: f64 = 400.0;
