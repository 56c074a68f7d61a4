use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconSize {
    Small,
    Large,
}

impl IconSize {
    pub const ALL: [Self; 2] = [Self::Small, Self::Large];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "16",
            Self::Large => "24",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconStyle {
    Filled,
    Outline,
}

impl IconStyle {
    pub const ALL: [Self; 2] = [Self::Filled, Self::Outline];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Filled => "filled",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleVariants {
    pub filled: Option<String>,
    pub outline: Option<String>,
}

impl StyleVariants {
    #[must_use]
    pub fn get(&self, style: IconStyle) -> Option<&str> {
        match style {
            IconStyle::Filled => self.filled.as_deref(),
            IconStyle::Outline => self.outline.as_deref(),
        }
    }

    fn slot_mut(&mut self, style: IconStyle) -> &mut Option<String> {
        match style {
            IconStyle::Filled => &mut self.filled,
            IconStyle::Outline => &mut self.outline,
        }
    }
}

/// Artwork per (size, style); `None` where the variant was not produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgVariants {
    #[serde(rename = "16")]
    pub small: StyleVariants,
    #[serde(rename = "24")]
    pub large: StyleVariants,
}

impl SvgVariants {
    #[must_use]
    pub fn get(&self, size: IconSize, style: IconStyle) -> Option<&str> {
        self.size(size).get(style)
    }

    pub fn set(&mut self, size: IconSize, style: IconStyle, svg: Option<String>) {
        let slot = match size {
            IconSize::Small => &mut self.small,
            IconSize::Large => &mut self.large,
        };
        *slot.slot_mut(style) = svg;
    }

    #[must_use]
    pub fn present_count(&self) -> usize {
        IconSize::ALL
            .iter()
            .flat_map(|size| IconStyle::ALL.iter().map(move |style| (*size, *style)))
            .filter(|(size, style)| self.get(*size, *style).is_some())
            .count()
    }

    fn size(&self, size: IconSize) -> &StyleVariants {
        match size {
            IconSize::Small => &self.small,
            IconSize::Large => &self.large,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IconRecord {
    pub name: String,
    pub display_name: String,
    pub tags: Vec<String>,
    pub unicode: Option<String>,
    #[serde(default)]
    pub svg: SvgVariants,
}

impl IconRecord {
    /// Bare record with a derived display name and no artwork.
    #[must_use]
    pub fn new(name: impl Into<String>, tags: Vec<String>) -> Self {
        let name = name.into();
        Self {
            display_name: crate::naming::display_name(&name),
            name,
            tags,
            unicode: None,
            svg: SvgVariants::default(),
        }
    }

    #[must_use]
    pub fn with_unicode(mut self, unicode: impl Into<String>) -> Self {
        self.unicode = Some(unicode.into());
        self
    }
}
