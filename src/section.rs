use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::id;
use crate::ops::{Entity, Patch};
use crate::style::CardStyleOverrides;

/// Rendering mode of a Features section.
///
/// The variant gates which card fields are projected into markup; fields
/// outside the active variant are kept in storage but never rendered, so
/// switching variants back and forth loses nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum SectionVariant {
    /// Title and description only.
    Simple,
    /// Adds icon, badge and subtitle.
    #[default]
    Standard,
    /// Adds a card image on top of everything `Standard` shows.
    Showcase,
}

impl SectionVariant {
    /// Map a stored tag to a variant, `None` for unknown tags.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(SectionVariant::Simple),
            2 => Some(SectionVariant::Standard),
            3 => Some(SectionVariant::Showcase),
            _ => None,
        }
    }
}

impl From<SectionVariant> for u8 {
    fn from(variant: SectionVariant) -> u8 {
        match variant {
            SectionVariant::Simple => 1,
            SectionVariant::Standard => 2,
            SectionVariant::Showcase => 3,
        }
    }
}

impl TryFrom<u8> for SectionVariant {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        SectionVariant::from_raw(raw)
            .ok_or_else(|| format!("invalid section variant {}, expected 1, 2 or 3", raw))
    }
}

/// Grid width of the card layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ColumnsPerRow {
    Two,
    #[default]
    Three,
    Four,
}

impl ColumnsPerRow {
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            2 => Some(ColumnsPerRow::Two),
            3 => Some(ColumnsPerRow::Three),
            4 => Some(ColumnsPerRow::Four),
            _ => None,
        }
    }

    pub fn count(&self) -> usize {
        u8::from(*self) as usize
    }
}

impl From<ColumnsPerRow> for u8 {
    fn from(columns: ColumnsPerRow) -> u8 {
        match columns {
            ColumnsPerRow::Two => 2,
            ColumnsPerRow::Three => 3,
            ColumnsPerRow::Four => 4,
        }
    }
}

impl TryFrom<u8> for ColumnsPerRow {
    type Error = String;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        ColumnsPerRow::from_raw(raw)
            .ok_or_else(|| format!("invalid column count {}, expected 2, 3 or 4", raw))
    }
}

/// Preset class-based card styling, used whenever the card is not in custom
/// mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardPreset {
    Minimal,
    #[default]
    Shadow,
    Gradient,
    Modern,
}

impl CardPreset {
    /// Map a stored key to a preset, `None` for unknown keys.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "minimal" => Some(CardPreset::Minimal),
            "shadow" => Some(CardPreset::Shadow),
            "gradient" => Some(CardPreset::Gradient),
            "modern" => Some(CardPreset::Modern),
            _ => None,
        }
    }

    /// The CSS class key the renderer uses for this preset.
    pub fn as_key(&self) -> &'static str {
        match self {
            CardPreset::Minimal => "minimal",
            CardPreset::Shadow => "shadow",
            CardPreset::Gradient => "gradient",
            CardPreset::Modern => "modern",
        }
    }
}

/// A single feature card.
///
/// `id` is assigned at creation and immutable afterwards from the editor's
/// point of view; the collection operations are the only code that reassigns
/// it (when duplicating).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureCard {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subtitle: Option<String>,
    /// Short glyph or emoji, at most 10 characters (lint-enforced).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub badge: Option<String>,
    /// Absolute URL or relative path; classified at the rendering boundary.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty", default)]
    pub custom_fields: HashMap<String, String>,
}

impl FeatureCard {
    /// Create a card with a freshly generated id.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id::generate(),
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }
}

impl Entity for FeatureCard {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Shallow patch for [`FeatureCard`]. Present fields replace, absent fields
/// keep the current value; there is no way to unset an optional field through
/// a patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, String>>,
}

impl Patch<FeatureCard> for CardPatch {
    fn apply(&self, card: &mut FeatureCard) {
        if let Some(title) = &self.title {
            card.title = title.clone();
        }
        if let Some(description) = &self.description {
            card.description = description.clone();
        }
        if let Some(subtitle) = &self.subtitle {
            card.subtitle = Some(subtitle.clone());
        }
        if let Some(icon) = &self.icon {
            card.icon = Some(icon.clone());
        }
        if let Some(image) = &self.image {
            card.image = Some(image.clone());
        }
        if let Some(badge) = &self.badge {
            card.badge = Some(badge.clone());
        }
        if let Some(link) = &self.link {
            card.link = Some(link.clone());
        }
        if let Some(custom_fields) = &self.custom_fields {
            card.custom_fields = custom_fields.clone();
        }
    }
}

/// Stored (possibly partial) card shape. Unknown or absent fields resolve to
/// defaults; a card without an id receives a fresh one on resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialFeatureCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<HashMap<String, String>>,
}

impl PartialFeatureCard {
    pub fn resolve(self) -> FeatureCard {
        FeatureCard {
            id: self.id.filter(|id| !id.is_empty()).unwrap_or_else(id::generate),
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            subtitle: self.subtitle,
            icon: self.icon,
            image: self.image,
            badge: self.badge,
            link: self.link,
            custom_fields: self.custom_fields.unwrap_or_default(),
        }
    }
}

impl From<FeatureCard> for PartialFeatureCard {
    fn from(card: FeatureCard) -> Self {
        Self {
            id: Some(card.id),
            title: Some(card.title),
            description: Some(card.description),
            subtitle: card.subtitle,
            icon: card.icon,
            image: card.image,
            badge: card.badge,
            link: card.link,
            custom_fields: if card.custom_fields.is_empty() {
                None
            } else {
                Some(card.custom_fields)
            },
        }
    }
}

/// A fully resolved Features section: every field concrete, cards in display
/// order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturesSection {
    #[serde(default)]
    pub section_title: String,
    #[serde(default)]
    pub section_subtitle: String,
    #[serde(default)]
    pub variant: SectionVariant,
    #[serde(default)]
    pub columns_per_row: ColumnsPerRow,
    #[serde(default)]
    pub card_style: CardPreset,
    #[serde(default)]
    pub cards: Vec<FeatureCard>,
    #[serde(skip_serializing_if = "CardStyleOverrides::is_empty", default)]
    pub card_css_custom: CardStyleOverrides,
}

/// Stored (possibly partial) section shape.
///
/// Enum-valued fields are held loosely (`u8` tags, free strings) so that an
/// unknown stored value degrades to the documented default instead of failing
/// deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialFeaturesSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns_per_row: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<PartialFeatureCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_css_custom: Option<CardStyleOverrides>,
}

impl From<FeaturesSection> for PartialFeaturesSection {
    fn from(section: FeaturesSection) -> Self {
        Self {
            section_title: Some(section.section_title),
            section_subtitle: Some(section.section_subtitle),
            variant: Some(section.variant.into()),
            columns_per_row: Some(section.columns_per_row.into()),
            card_style: Some(section.card_style.as_key().to_string()),
            cards: Some(section.cards.into_iter().map(Into::into).collect()),
            card_css_custom: Some(section.card_css_custom),
        }
    }
}

/// Resolve a stored configuration into a fully populated section.
///
/// Never fails: `None` and the empty shape both produce the all-defaults
/// section, unknown enum tags fall back to their defaults, and cards missing
/// an id get a fresh one. Idempotent over already-resolved sections.
pub fn resolve(partial: Option<PartialFeaturesSection>) -> FeaturesSection {
    let partial = partial.unwrap_or_default();
    FeaturesSection {
        section_title: partial.section_title.unwrap_or_default(),
        section_subtitle: partial.section_subtitle.unwrap_or_default(),
        variant: partial
            .variant
            .and_then(SectionVariant::from_raw)
            .unwrap_or_default(),
        columns_per_row: partial
            .columns_per_row
            .and_then(ColumnsPerRow::from_raw)
            .unwrap_or_default(),
        card_style: partial
            .card_style
            .as_deref()
            .and_then(CardPreset::from_key)
            .unwrap_or_default(),
        cards: partial
            .cards
            .unwrap_or_default()
            .into_iter()
            .map(PartialFeatureCard::resolve)
            .collect(),
        card_css_custom: partial.card_css_custom.unwrap_or_default(),
    }
}
