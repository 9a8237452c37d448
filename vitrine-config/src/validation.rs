use std::fmt;

use thiserror::Error;

use crate::models::{CarouselSection, StorefrontConfig};

/// Intervals below this rotate faster than anyone can read a slide.
pub const MIN_AUTOPLAY_INTERVAL_MS: i64 = 1_000;

#[derive(Debug, Error)]
pub enum ConfigGuardRailError {
    #[error(
        "{carousel} autoplay interval of {interval_ms}ms is below the {min}ms minimum",
        min = MIN_AUTOPLAY_INTERVAL_MS
    )]
    AutoplayTooFast {
        carousel: &'static str,
        interval_ms: i64,
    },
    #[error("image fallback source must not be empty")]
    EmptyFallbackSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, " (hint: {hint})")?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct ConfigWarnings {
    pub items: Vec<ConfigWarning>,
}

impl ConfigWarnings {
    pub fn push<S: Into<String>>(&mut self, message: S) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: None,
        });
    }

    pub fn push_with_hint<S: Into<String>, H: Into<String>>(
        &mut self,
        message: S,
        hint: H,
    ) {
        self.items.push(ConfigWarning {
            message: message.into(),
            hint: Some(hint.into()),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigWarning> {
        self.items.iter()
    }

    pub fn extend(&mut self, other: ConfigWarnings) {
        self.items.extend(other.items);
    }
}

pub fn apply_guard_rails(
    config: &StorefrontConfig,
) -> Result<ConfigWarnings, ConfigGuardRailError> {
    let mut warnings = ConfigWarnings::default();

    for (carousel, section) in [
        ("hero", &config.hero),
        ("deals", &config.deals),
        ("testimonials", &config.testimonials),
    ] {
        check_autoplay(carousel, section, &mut warnings)?;
    }

    let hero_ms = config.hero.autoplay_interval_ms;
    let deals_ms = config.deals.autoplay_interval_ms;
    if hero_ms > 0 && deals_ms > 0 && deals_ms < hero_ms / 2 {
        warnings.push_with_hint(
            format!(
                "deals rotate every {deals_ms}ms, more than twice as fast as the hero ({hero_ms}ms)"
            ),
            "Keep deals.autoplay_interval_ms close to hero.autoplay_interval_ms",
        );
    }

    warnings.extend(responsive_warnings(config));

    if config.images.fallback_src.trim().is_empty() {
        return Err(ConfigGuardRailError::EmptyFallbackSource);
    }

    Ok(warnings)
}

fn responsive_warnings(config: &StorefrontConfig) -> ConfigWarnings {
    let mut warnings = ConfigWarnings::default();
    let responsive = &config.responsive;
    if responsive.narrow_group_size > responsive.wide_group_size {
        warnings.push_with_hint(
            format!(
                "narrow viewports show more testimonials per page ({}) than wide ones ({})",
                responsive.narrow_group_size, responsive.wide_group_size
            ),
            "Swap responsive.narrow_group_size and responsive.wide_group_size",
        );
    }

    // The viewport policy regroups testimonials as soon as they mount.
    let fixed = config.testimonials.group_size;
    if fixed != 1 {
        warnings.push_with_hint(
            format!(
                "testimonials.group_size = {fixed} is replaced by the responsive policy"
            ),
            "Set responsive.narrow_group_size and responsive.wide_group_size instead",
        );
    }
    warnings
}

fn check_autoplay(
    carousel: &'static str,
    section: &CarouselSection,
    warnings: &mut ConfigWarnings,
) -> Result<(), ConfigGuardRailError> {
    let interval_ms = section.autoplay_interval_ms;
    if interval_ms == 0 {
        warnings.push_with_hint(
            format!("{carousel} autoplay is disabled"),
            format!("Set {carousel}.autoplay_interval_ms to re-enable rotation"),
        );
    } else if interval_ms > 0 && interval_ms < MIN_AUTOPLAY_INTERVAL_MS {
        return Err(ConfigGuardRailError::AutoplayTooFast {
            carousel,
            interval_ms,
        });
    }
    Ok(())
}
