//! # Pagecraft content blocks
//!
//! The block-based content model and style-resolution engine behind the
//! Pagecraft page builder.
//!
//! ## Features
//! - Typed schemas for Features sections and text+image blocks
//! - Default resolution: any stored (possibly partial) configuration becomes
//!   a fully populated one, without ever failing
//! - Pure, snapshot-friendly edit operations over card/block sequences
//! - Deterministic style resolution, including hover-state deltas, for cards
//!   and buttons
//! - A rendering-boundary contract: variant-gated field projection, base/hover
//!   style bundles, link-opening policy
//!
//! ## Example — resolve and style a stored section
//! ```ignore
//! use pagecraft_blocks::{card_bundle, load_section};
//!
//! let section = load_section(r#"{"sectionTitle": "Features", "variant": 2}"#);
//! let styles = card_bundle(&section.card_css_custom);
//! for card in &section.cards {
//!     let view = pagecraft_blocks::project_card(card, section.variant);
//!     // hand (view, styles) to the renderer
//! }
//! ```
//!
//! ## Example — edit a card sequence
//! ```ignore
//! use pagecraft_blocks::{ops, FeatureCard};
//!
//! let cards = vec![FeatureCard::new("Fast", "Builds in seconds")];
//! let cards = ops::append(&cards, FeatureCard::new("Typed", "No stringly APIs"));
//! let cards = ops::duplicate_after(&cards, cards[0].id.as_str());
//! ```

pub mod block;
pub mod color;
pub mod error;
pub mod id;
pub mod ops;
pub mod render;
pub mod resolver;
pub mod section;
pub mod style;
pub mod validator;

// --- Core types ---
pub use block::{BlockImage, BlockLayout, BlockPatch, BlockSection, BlockStyles, BlockText, TextImageBlock};
pub use error::{BlockError, BlockResult};
pub use section::{
    CardPatch, CardPreset, ColumnsPerRow, FeatureCard, FeaturesSection, PartialFeatureCard,
    PartialFeaturesSection, SectionVariant,
};
pub use style::{ButtonStyleOverrides, ButtonVariant, CardStyleOverrides, ConcreteStyle, ShadowLevel};

// --- Engine entry points ---
pub use render::{button_bundle, card_bundle, classify_link, project_card, CardView, LinkTarget, StyleBundle};
pub use resolver::{resolve_button_style, resolve_card_style};
pub use section::resolve;

/// Load a stored Features-section configuration, tolerantly.
///
/// Never fails: a document that does not deserialize at all (or is `null`)
/// yields the all-defaults section, and individual malformed fields degrade
/// to their defaults.
pub fn load_section(json: &str) -> FeaturesSection {
    let partial = serde_json::from_str::<Option<PartialFeaturesSection>>(json)
        .ok()
        .flatten();
    resolve(partial)
}

/// Parse a stored Features-section configuration, strictly.
///
/// Unlike [`load_section`] this surfaces shape errors; used by the validation
/// CLI and editor diagnostics.
pub fn parse_section(json: &str) -> BlockResult<FeaturesSection> {
    let partial: PartialFeaturesSection = serde_json::from_str(json)?;
    Ok(resolve(Some(partial)))
}

/// Load a stored block-section configuration, tolerantly.
pub fn load_block_section(json: &str) -> BlockSection {
    serde_json::from_str::<Option<BlockSection>>(json)
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Parse a stored block-section configuration, strictly.
pub fn parse_block_section(json: &str) -> BlockResult<BlockSection> {
    Ok(serde_json::from_str(json)?)
}
