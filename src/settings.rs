use once_cell::sync::Lazy;
use std::env;

const DEFAULT_MIN_VISIBLE_PX: f64 = 10.0;
const DEFAULT_END_EPSILON: f64 = 0.001;
const DEFAULT_SHORTS_PREFIX: &str = "/shorts/";
const DEFAULT_TIME_PARAM: &str = "t";

/// Holds all tunables, read-once from ENV with fallbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// A video must render wider and taller than this to count as visible.
    pub min_visible_px: f64,
    /// Distance kept from the end of media when clamping a seek.
    pub end_epsilon: f64,
    /// Path prefix identifying the short-form (vertical) layout.
    pub shorts_path_prefix: String,
    /// Query parameter carrying the elapsed time on short-form pages.
    pub time_param: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            min_visible_px: DEFAULT_MIN_VISIBLE_PX,
            end_epsilon: DEFAULT_END_EPSILON,
            shorts_path_prefix: DEFAULT_SHORTS_PREFIX.to_string(),
            time_param: DEFAULT_TIME_PARAM.to_string(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        // optionally load .env
        let _ = dotenvy::dotenv();

        // helper to parse a non-negative float
        fn parse_f64(var: &str, default: f64) -> f64 {
            env::var(var)
                .ok()
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(default)
        }

        // helper for non-empty strings
        fn parse_string(var: &str, default: &str) -> String {
            env::var(var)
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        }

        Settings {
            min_visible_px: parse_f64("QUICK_JUMP_MIN_VISIBLE_PX", DEFAULT_MIN_VISIBLE_PX),
            end_epsilon: parse_f64("QUICK_JUMP_END_EPSILON", DEFAULT_END_EPSILON),
            shorts_path_prefix: parse_string("QUICK_JUMP_SHORTS_PREFIX", DEFAULT_SHORTS_PREFIX),
            time_param: parse_string("QUICK_JUMP_TIME_PARAM", DEFAULT_TIME_PARAM),
        }
    }
}

/// Global settings instance
pub static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);
