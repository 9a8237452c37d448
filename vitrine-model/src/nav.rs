/// Header navigation entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavLink {
    pub label: String,
    pub href: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub external: bool,
}

/// Anchor attributes a renderer attaches to a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkAttributes {
    pub target: Option<&'static str>,
    pub rel: Option<&'static str>,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external: false,
        }
    }

    pub fn external(mut self) -> Self {
        self.external = true;
        self
    }

    /// External links open in a new tab without leaking the opener.
    pub fn attributes(&self) -> LinkAttributes {
        if self.external {
            LinkAttributes {
                target: Some("_blank"),
                rel: Some("noopener noreferrer"),
            }
        } else {
            LinkAttributes::default()
        }
    }
}
