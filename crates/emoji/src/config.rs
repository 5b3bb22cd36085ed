//! Process-wide switches read by the converters at call time.
//!
//! Both switches only matter for emoji that are joined by zero-width joiners (ZWJ)
//! without being registered as a single emoji ("non-RGI"), e.g. a family with
//! different skin tones: `👨\u{200D}👩🏿\u{200D}👧🏻\u{200D}👦🏾`.
//!
//! The defaults can be overridden through the environment, which is read once on
//! first access, or at runtime through [`set`] and [`update`].

use once_cell::sync::Lazy;
use parking_lot::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// If `true`, [`demojize`](crate::demojize) keeps the joiners of non-RGI sequences,
    /// so [`emojize`](crate::emojize) can restore them exactly:
    /// `:man:\u{200D}:woman_dark_skin_tone:`
    ///
    /// If `false`, the joiners are removed: `:man::woman_dark_skin_tone:`
    ///
    /// **Overridden by the `EMOJI_DEMOJIZE_KEEP_ZWJ` environment variable.**
    pub demojize_keep_zwj: bool,

    /// If `true`, [`replace_emoji`](crate::replace_emoji) keeps the joiners of non-RGI
    /// sequences, and the whole sequence is replaced at once.
    ///
    /// If `false`, each part of the sequence is replaced on its own and the joiners are removed.
    ///
    /// **Overridden by the `EMOJI_REPLACE_EMOJI_KEEP_ZWJ` environment variable.**
    pub replace_emoji_keep_zwj: bool,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Config {
            demojize_keep_zwj: true,
            replace_emoji_keep_zwj: false,
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    Some(match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => return None,
    })
}

impl Config {
    /// Applies any environmental overrides
    pub fn configure(&mut self) {
        for (var, field, value) in [
            ("EMOJI_DEMOJIZE_KEEP_ZWJ", "demojize_keep_zwj", &mut self.demojize_keep_zwj),
            ("EMOJI_REPLACE_EMOJI_KEEP_ZWJ", "replace_emoji_keep_zwj", &mut self.replace_emoji_keep_zwj),
        ] {
            let Ok(raw) = std::env::var(var) else { continue };

            match parse_bool(&raw) {
                Some(parsed) => {
                    tracing::debug!("Applying environment overwrite for Config.{field}=>{var}");
                    *value = parsed;
                }
                None => tracing::warn!("Ignoring invalid boolean in {var}: {raw:?}"),
            }
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| {
    let mut config = Config::default();
    config.configure();
    RwLock::new(config)
});

/// Snapshot of the current configuration
#[inline]
pub fn get() -> Config {
    *CONFIG.read()
}

/// Replaces the current configuration
pub fn set(config: Config) {
    *CONFIG.write() = config;
}

/// Modifies the current configuration in place
pub fn update(f: impl FnOnce(&mut Config)) {
    f(&mut CONFIG.write());
}
