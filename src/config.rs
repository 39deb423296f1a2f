use url::Url;

use crate::telemetry::LogLevel;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "https://formsubmit.co/ajax/hello@jordanlee.dev";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const DEFAULT_MOTION_SCALE_PERCENT: u64 = 100;

const MOTION_SCALE_PERCENT_BOUNDS: (u64, u64) = (10, 400);

const DEFAULT_TYPEWRITER_START_DELAY_MS: u64 = 1_000;
const DEFAULT_TYPE_DELAY_MS: u64 = 100;
const DEFAULT_DELETE_DELAY_MS: u64 = 50;
const DEFAULT_END_PAUSE_MS: u64 = 2_000;
const DEFAULT_NEXT_PAUSE_MS: u64 = 500;
const DEFAULT_COUNTER_DURATION_MS: u64 = 2_000;
const DEFAULT_COUNTER_TICK_MS: u64 = 16;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_BAR_SETTLE_MS: u64 = 1_500;
const DEFAULT_INITIAL_PANEL_DELAY_MS: u64 = 500;
const DEFAULT_TOAST_ENTER_MS: u64 = 100;
const DEFAULT_TOAST_VISIBLE_MS: u64 = 3_000;
const DEFAULT_TOAST_EXIT_MS: u64 = 300;
const DEFAULT_FILTER_DELAY_RESET_MS: u64 = 500;
const DEFAULT_FILTER_CARD_STAGGER_SECS: f64 = 0.05;

/// Delay of the `index`-th sibling in a staggered group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stagger {
    pub base_ms: u64,
    pub stride_ms: u64,
}

impl Stagger {
    pub const fn new(base_ms: u64, stride_ms: u64) -> Self {
        Self { base_ms, stride_ms }
    }

    pub fn delay_for(self, index: usize) -> u64 {
        self.base_ms
            .saturating_add(self.stride_ms.saturating_mul(index as u64))
    }

    fn scaled(self, percent: u64) -> Self {
        Self {
            base_ms: scale_ms(self.base_ms, percent),
            stride_ms: scale_ms(self.stride_ms, percent),
        }
    }
}

/// Every timing constant of the page's timed effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConfig {
    pub typewriter_start_delay_ms: u64,
    pub type_delay_ms: u64,
    pub delete_delay_ms: u64,
    pub end_pause_ms: u64,
    pub next_pause_ms: u64,
    pub counter_duration_ms: u64,
    pub counter_tick_ms: u64,
    pub reveal_threshold: f64,
    pub bar_stagger: Stagger,
    pub bar_settle_ms: u64,
    pub ring_stagger: Stagger,
    pub meter_stagger: Stagger,
    pub initial_panel_delay_ms: u64,
    pub toast_enter_ms: u64,
    pub toast_visible_ms: u64,
    pub toast_exit_ms: u64,
    pub filter_delay_reset_ms: u64,
    pub filter_card_stagger_secs: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            typewriter_start_delay_ms: DEFAULT_TYPEWRITER_START_DELAY_MS,
            type_delay_ms: DEFAULT_TYPE_DELAY_MS,
            delete_delay_ms: DEFAULT_DELETE_DELAY_MS,
            end_pause_ms: DEFAULT_END_PAUSE_MS,
            next_pause_ms: DEFAULT_NEXT_PAUSE_MS,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS,
            counter_tick_ms: DEFAULT_COUNTER_TICK_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            bar_stagger: Stagger::new(200, 150),
            bar_settle_ms: DEFAULT_BAR_SETTLE_MS,
            ring_stagger: Stagger::new(100, 150),
            meter_stagger: Stagger::new(100, 100),
            initial_panel_delay_ms: DEFAULT_INITIAL_PANEL_DELAY_MS,
            toast_enter_ms: DEFAULT_TOAST_ENTER_MS,
            toast_visible_ms: DEFAULT_TOAST_VISIBLE_MS,
            toast_exit_ms: DEFAULT_TOAST_EXIT_MS,
            filter_delay_reset_ms: DEFAULT_FILTER_DELAY_RESET_MS,
            filter_card_stagger_secs: DEFAULT_FILTER_CARD_STAGGER_SECS,
        }
    }
}

impl MotionConfig {
    /// Stretches or compresses every delay by `percent`. The counter tick
    /// keeps its cadence so only the counter's total duration changes.
    pub fn scaled(self, percent: u64) -> Self {
        if percent == 100 {
            return self;
        }

        Self {
            typewriter_start_delay_ms: scale_ms(self.typewriter_start_delay_ms, percent),
            type_delay_ms: scale_ms(self.type_delay_ms, percent),
            delete_delay_ms: scale_ms(self.delete_delay_ms, percent),
            end_pause_ms: scale_ms(self.end_pause_ms, percent),
            next_pause_ms: scale_ms(self.next_pause_ms, percent),
            counter_duration_ms: scale_ms(self.counter_duration_ms, percent),
            counter_tick_ms: self.counter_tick_ms,
            reveal_threshold: self.reveal_threshold,
            bar_stagger: self.bar_stagger.scaled(percent),
            bar_settle_ms: scale_ms(self.bar_settle_ms, percent),
            ring_stagger: self.ring_stagger.scaled(percent),
            meter_stagger: self.meter_stagger.scaled(percent),
            initial_panel_delay_ms: scale_ms(self.initial_panel_delay_ms, percent),
            toast_enter_ms: scale_ms(self.toast_enter_ms, percent),
            toast_visible_ms: scale_ms(self.toast_visible_ms, percent),
            toast_exit_ms: scale_ms(self.toast_exit_ms, percent),
            filter_delay_reset_ms: scale_ms(self.filter_delay_reset_ms, percent),
            filter_card_stagger_secs: self.filter_card_stagger_secs * percent as f64 / 100.0,
        }
    }
}

fn scale_ms(value: u64, percent: u64) -> u64 {
    value.saturating_mul(percent) / 100
}

#[derive(Clone, Debug)]
pub struct SiteConfig {
    pub contact_endpoint: Url,
    pub log_level: LogLevel,
    pub motion_scale_percent: u64,
    pub motion: MotionConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl SiteConfig {
    /// Resolves the configuration baked in at build time. `trunk` forwards
    /// its environment to `rustc`, so these are read with `option_env!`.
    pub fn from_build_env() -> Self {
        Self::from_lookup(|name| match name {
            "CONTACT_ENDPOINT" => option_env!("CONTACT_ENDPOINT"),
            "LOG_LEVEL" => option_env!("LOG_LEVEL"),
            "MOTION_SCALE_PERCENT" => option_env!("MOTION_SCALE_PERCENT"),
            _ => None,
        })
    }

    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let contact_endpoint = parse_http_url(lookup("CONTACT_ENDPOINT"))
            .unwrap_or_else(default_contact_endpoint);
        let log_level = parse_log_level(lookup("LOG_LEVEL"), DEFAULT_LOG_LEVEL);
        let motion_scale_percent = parse_u64_with_bounds(
            lookup("MOTION_SCALE_PERCENT"),
            DEFAULT_MOTION_SCALE_PERCENT,
            MOTION_SCALE_PERCENT_BOUNDS,
        );

        Self {
            contact_endpoint,
            log_level,
            motion_scale_percent,
            motion: MotionConfig::default().scaled(motion_scale_percent),
        }
    }
}

fn default_contact_endpoint() -> Url {
    Url::parse(DEFAULT_CONTACT_ENDPOINT).expect("default contact endpoint is a valid URL")
}

fn parse_u64_with_bounds(value: Option<&str>, default: u64, bounds: (u64, u64)) -> u64 {
    value
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(value: Option<&str>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_http_url(value: Option<&str>) -> Option<Url> {
    let value = parse_non_empty_string(value)?;
    let parsed = Url::parse(&value).ok()?;

    if parsed.scheme() == "http" || parsed.scheme() == "https" {
        Some(parsed)
    } else {
        None
    }
}

fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    parse_non_empty_string(value)
        .and_then(|value| LogLevel::parse(&value))
        .unwrap_or(default)
}
