use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use vitrine_core::settings::{
    DEALS_AUTOPLAY, HERO_AUTOPLAY, TESTIMONIALS_AUTOPLAY,
};
use vitrine_core::{
    CarouselSettings, FallbackImage, GroupingPolicy, RevealOptions,
    StorefrontSettings, image,
};

pub(crate) const CONFIG_PATH_VAR: &str = "VITRINE_CONFIG_PATH";
pub(crate) const CONFIG_JSON_VAR: &str = "VITRINE_CONFIG_JSON";

const CANDIDATES: &[&str] = &[
    "vitrine.toml",
    "vitrine.json",
    "config/vitrine.toml",
    "config/vitrine.json",
];

/// Source that produced the storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StorefrontConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl std::fmt::Display for StorefrontConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => f.write_str("built-in defaults"),
            Self::EnvPath(path) => {
                write!(f, "{} ({CONFIG_PATH_VAR})", path.display())
            }
            Self::EnvInline => f.write_str(CONFIG_JSON_VAR),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Rotation settings for one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselSection {
    /// Milliseconds between automatic advances. `0` disables autoplay;
    /// negative values are rejected.
    pub autoplay_interval_ms: i64,
    /// Items shown per page. Must be at least 1.
    pub group_size: usize,
}

impl CarouselSection {
    fn with_interval(interval: std::time::Duration) -> Self {
        Self {
            autoplay_interval_ms: interval.as_millis() as i64,
            group_size: 1,
        }
    }

    fn into_settings(self) -> vitrine_core::Result<CarouselSettings> {
        CarouselSettings::from_raw(self.group_size, self.autoplay_interval_ms)
    }
}

/// Carousel section as written in a file. Missing fields keep the
/// carousel's own default, which differs per carousel.
#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(default)]
struct FileCarouselSection {
    autoplay_interval_ms: Option<i64>,
    group_size: Option<usize>,
}

impl FileCarouselSection {
    fn over(self, defaults: CarouselSection) -> CarouselSection {
        CarouselSection {
            autoplay_interval_ms: self
                .autoplay_interval_ms
                .unwrap_or(defaults.autoplay_interval_ms),
            group_size: self.group_size.unwrap_or(defaults.group_size),
        }
    }
}

/// Breakpoint used to pair testimonials on wide screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ResponsiveSection {
    pub breakpoint_px: u32,
    pub narrow_group_size: usize,
    pub wide_group_size: usize,
}

impl Default for ResponsiveSection {
    fn default() -> Self {
        Self {
            breakpoint_px: 768,
            narrow_group_size: 1,
            wide_group_size: 2,
        }
    }
}

/// Reveal-on-scroll tuning. The threshold is the fraction of a section that
/// must be inside the viewport; a negative bottom margin delays the reveal
/// until the section is that many pixels above the fold.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct RevealSection {
    pub threshold: f64,
    pub bottom_margin_px: f64,
}

impl Default for RevealSection {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: -50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ImagesSection {
    pub fallback_src: String,
    pub unavailable_suffix: String,
}

impl Default for ImagesSection {
    fn default() -> Self {
        Self {
            fallback_src: image::FALLBACK_IMAGE_SRC.to_string(),
            unavailable_suffix: image::UNAVAILABLE_SUFFIX.to_string(),
        }
    }
}

/// Raw configuration as read from a file or inline JSON.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
struct FileStorefrontConfig {
    hero: FileCarouselSection,
    deals: FileCarouselSection,
    testimonials: FileCarouselSection,
    responsive: ResponsiveSection,
    reveal: RevealSection,
    images: ImagesSection,
}

impl From<FileStorefrontConfig> for StorefrontConfig {
    fn from(file: FileStorefrontConfig) -> Self {
        let defaults = StorefrontConfig::default();
        Self {
            hero: file.hero.over(defaults.hero),
            deals: file.deals.over(defaults.deals),
            testimonials: file.testimonials.over(defaults.testimonials),
            responsive: file.responsive,
            reveal: file.reveal,
            images: file.images,
        }
    }
}

/// Top-level storefront settings. Every section and field is optional in
/// files; omitted values keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(from = "FileStorefrontConfig")]
pub struct StorefrontConfig {
    pub hero: CarouselSection,
    pub deals: CarouselSection,
    pub testimonials: CarouselSection,
    pub responsive: ResponsiveSection,
    pub reveal: RevealSection,
    pub images: ImagesSection,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            hero: CarouselSection::with_interval(HERO_AUTOPLAY),
            deals: CarouselSection::with_interval(DEALS_AUTOPLAY),
            testimonials: CarouselSection::with_interval(TESTIMONIALS_AUTOPLAY),
            responsive: ResponsiveSection::default(),
            reveal: RevealSection::default(),
            images: ImagesSection::default(),
        }
    }
}

impl StorefrontConfig {
    /// Resolve configuration from `lookup`, searching `root` for default
    /// files. Evaluation order:
    /// 1) `$VITRINE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$VITRINE_CONFIG_JSON` (inline JSON),
    /// 3) the first default file found under `root`,
    /// 4) defaults.
    pub(crate) fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        root: &Path,
    ) -> anyhow::Result<(Self, StorefrontConfigSource)> {
        if let Some(path_str) = lookup(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, StorefrontConfigSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, StorefrontConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(root) {
            let config = Self::load_from_file(&path)?;
            return Ok((config, StorefrontConfigSource::File(path)));
        }

        Ok((Self::default(), StorefrontConfigSource::Default))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read storefront config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid storefront config {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(
                        "invalid storefront config {}: {}",
                        path.display(),
                        err
                    )
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        // TOML first, then JSON.
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse storefront config {}: toml error: {}; json error: {}",
                    origin,
                    toml_err,
                    json_err
                )
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid storefront config json: {err}"))
    }

    /// Validate every section and build the engine settings.
    pub fn to_settings(&self) -> vitrine_core::Result<StorefrontSettings> {
        Ok(StorefrontSettings {
            hero: self.hero.into_settings()?,
            deals: self.deals.into_settings()?,
            testimonials: self.testimonials.into_settings()?,
            responsive: GroupingPolicy::new(
                self.responsive.breakpoint_px,
                self.responsive.narrow_group_size,
                self.responsive.wide_group_size,
            )?,
            reveal: RevealOptions::new(
                self.reveal.threshold,
                self.reveal.bottom_margin_px,
            )?,
            images: FallbackImage {
                src: self.images.fallback_src.clone(),
                unavailable_suffix: self.images.unavailable_suffix.clone(),
            },
        })
    }

    pub fn into_settings(self) -> vitrine_core::Result<StorefrontSettings> {
        self.to_settings()
    }

    fn find_default_file(root: &Path) -> Option<PathBuf> {
        CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}
