//! Structural lint for stored configurations.
//!
//! Used by the editor and the `blocks-validate` CLI to surface bad values
//! before they are persisted. The resolution path never calls into this
//! module: a configuration that fails validation still resolves and renders,
//! it just degrades to defaults where values are unusable.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::block::{BlockSection, TextImageBlock};
use crate::error::{BlockError, BlockResult};
use crate::section::{FeatureCard, FeaturesSection, SectionVariant};
use crate::style::{ButtonStyleOverrides, CardStyleOverrides};

const MAX_CARDS: usize = 24;
const MAX_BLOCKS: usize = 16;
const MAX_ICON_CHARS: usize = 10;

/// Validate a resolved Features section.
pub fn validate_section(section: &FeaturesSection) -> BlockResult<()> {
    if section.cards.len() > MAX_CARDS {
        return Err(BlockError::CardLimitExceeded { max: MAX_CARDS });
    }
    validate_unique_ids(section.cards.iter().map(|card| card.id.as_str()))?;
    for card in &section.cards {
        validate_card(card, section.variant)?;
    }
    validate_card_overrides(&section.card_css_custom)
}

/// Validate a section of appended text+image blocks.
pub fn validate_block_section(section: &BlockSection) -> BlockResult<()> {
    if section.text_image_blocks.len() > MAX_BLOCKS {
        return Err(BlockError::BlockLimitExceeded { max: MAX_BLOCKS });
    }
    validate_unique_ids(
        section
            .text_image_blocks
            .iter()
            .map(|block| block.id.as_str()),
    )?;
    for block in &section.text_image_blocks {
        validate_block(block)?;
    }
    Ok(())
}

fn validate_unique_ids<'a>(ids: impl Iterator<Item = &'a str>) -> BlockResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(BlockError::DuplicateId { id: id.to_string() });
        }
    }
    Ok(())
}

fn validate_card(card: &FeatureCard, variant: SectionVariant) -> BlockResult<()> {
    if let Some(icon) = &card.icon {
        if icon.chars().count() > MAX_ICON_CHARS {
            return Err(BlockError::InvalidProperty {
                entity: "FeatureCard".to_string(),
                property: "icon".to_string(),
                reason: format!("must be at most {} characters", MAX_ICON_CHARS),
            });
        }
    }
    // An explicitly empty image URL on a showcase card is a stored mistake;
    // an absent one just renders without an image.
    if variant == SectionVariant::Showcase {
        if let Some(image) = &card.image {
            if image.is_empty() {
                return Err(BlockError::MissingProperty {
                    entity: "FeatureCard".to_string(),
                    property: "image".to_string(),
                });
            }
        }
    }
    Ok(())
}

fn validate_block(block: &TextImageBlock) -> BlockResult<()> {
    if block.image.url.is_empty() {
        return Err(BlockError::MissingProperty {
            entity: "TextImageBlock".to_string(),
            property: "image.url".to_string(),
        });
    }
    validate_color(&block.styles.background_color, "styles.backgroundColor")?;
    validate_color(&block.styles.text_color, "styles.textColor")?;
    if let Some(button_style) = &block.button_style {
        validate_button_overrides(button_style)?;
    }
    Ok(())
}

fn validate_card_overrides(overrides: &CardStyleOverrides) -> BlockResult<()> {
    let colors = [
        (&overrides.text_color, "textColor"),
        (&overrides.hover_text_color, "hoverTextColor"),
        (&overrides.background_color, "backgroundColor"),
        (&overrides.hover_background_color, "hoverBackgroundColor"),
        (&overrides.border_color, "borderColor"),
        (&overrides.gradient_start, "gradientStart"),
        (&overrides.gradient_end, "gradientEnd"),
        (&overrides.shadow_color, "shadowColor"),
    ];
    for (value, property) in colors {
        if let Some(color) = value {
            validate_color(color, property)?;
        }
    }
    Ok(())
}

fn validate_button_overrides(overrides: &ButtonStyleOverrides) -> BlockResult<()> {
    let colors = [
        (&overrides.bg_color, "bgColor"),
        (&overrides.text_color, "textColor"),
        (&overrides.hover_bg_color, "hoverBgColor"),
        (&overrides.hover_text_color, "hoverTextColor"),
        (&overrides.border_color, "borderColor"),
    ];
    for (value, property) in colors {
        if let Some(color) = value {
            validate_color(color, property)?;
        }
    }
    if overrides.transform_amount < 0.0 {
        return Err(BlockError::ValueOutOfRange {
            property: "transformAmount".to_string(),
            value: overrides.transform_amount.to_string(),
            range: "0 and up".to_string(),
        });
    }
    if overrides.transition_duration < 0.0 {
        return Err(BlockError::ValueOutOfRange {
            property: "transitionDuration".to_string(),
            value: overrides.transition_duration.to_string(),
            range: "0 and up".to_string(),
        });
    }
    Ok(())
}

/// Check that a color is 6-digit hex or one of a small named set.
pub fn validate_color(color: &str, property: &str) -> BlockResult<()> {
    static HEX_COLOR_REGEX: OnceLock<Regex> = OnceLock::new();
    let hex_regex = HEX_COLOR_REGEX.get_or_init(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

    const NAMED_COLORS: &[&str] = &[
        "red", "blue", "green", "white", "black", "transparent", "yellow", "orange", "purple",
        "pink", "gray", "grey",
    ];

    if hex_regex.is_match(color) || NAMED_COLORS.contains(&color) {
        Ok(())
    } else {
        Err(BlockError::InvalidColor {
            property: property.to_string(),
            value: color.to_string(),
            reason: format!(
                "must be a valid hex color (e.g., #ff0000) or named color ({})",
                NAMED_COLORS.join(", ")
            ),
        })
    }
}
