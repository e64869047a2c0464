//! Rendering-boundary contract.
//!
//! The external renderer owns DOM construction and mouse-enter/leave wiring;
//! this module hands it everything it needs per card or button: the
//! variant-gated field projection, a precomputed base/hover style pair, and
//! the link-opening policy. Nothing here touches markup.

use serde::Serialize;

use crate::resolver::{resolve_button_style, resolve_card_style};
use crate::section::{FeatureCard, SectionVariant};
use crate::style::{ButtonStyleOverrides, CardStyleOverrides, ConcreteStyle};

/// The subset of card fields visible under a given section variant.
///
/// Fields outside the active variant stay in storage untouched; they are
/// simply not projected. Switching a section from `Showcase` back to `Simple`
/// and forth again restores the full card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
pub enum CardView {
    Simple {
        title: String,
        description: String,
    },
    Standard {
        title: String,
        description: String,
        subtitle: Option<String>,
        icon: Option<String>,
        badge: Option<String>,
    },
    Showcase {
        title: String,
        description: String,
        subtitle: Option<String>,
        icon: Option<String>,
        badge: Option<String>,
        image: Option<String>,
    },
}

/// Project a card through the variant gate.
pub fn project_card(card: &FeatureCard, variant: SectionVariant) -> CardView {
    match variant {
        SectionVariant::Simple => CardView::Simple {
            title: card.title.clone(),
            description: card.description.clone(),
        },
        SectionVariant::Standard => CardView::Standard {
            title: card.title.clone(),
            description: card.description.clone(),
            subtitle: card.subtitle.clone(),
            icon: card.icon.clone(),
            badge: card.badge.clone(),
        },
        SectionVariant::Showcase => CardView::Showcase {
            title: card.title.clone(),
            description: card.description.clone(),
            subtitle: card.subtitle.clone(),
            icon: card.icon.clone(),
            badge: card.badge.clone(),
            image: card.image.clone(),
        },
    }
}

/// Where a card link or button URL leads.
///
/// Absolute URLs open in a new browsing context; relative paths navigate in
/// place. This policy is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LinkTarget {
    /// `http://` / `https://` URL — open in a new context.
    External { href: String },
    /// Relative path — navigate in place.
    Internal { href: String },
    /// No link; the renderer skips the wrapping element entirely.
    None,
}

/// Classify a link value. Empty and absent are both "no link".
pub fn classify_link(link: Option<&str>) -> LinkTarget {
    match link {
        None => LinkTarget::None,
        Some("") => LinkTarget::None,
        Some(href) if href.starts_with("http://") || href.starts_with("https://") => {
            LinkTarget::External {
                href: href.to_string(),
            }
        }
        Some(href) => LinkTarget::Internal {
            href: href.to_string(),
        },
    }
}

/// Precomputed base/hover style pair handed to the renderer per card or
/// button. `custom` tells the renderer to drop the preset class (meaningful
/// for cards only; buttons are always template-driven).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleBundle {
    pub custom: bool,
    pub base: ConcreteStyle,
    pub hover: ConcreteStyle,
}

/// Resolve both interaction states of a card at once.
pub fn card_bundle(overrides: &CardStyleOverrides) -> StyleBundle {
    StyleBundle {
        custom: overrides.is_custom(),
        base: resolve_card_style(overrides, false),
        hover: resolve_card_style(overrides, true),
    }
}

/// Resolve both interaction states of a button at once.
pub fn button_bundle(overrides: &ButtonStyleOverrides) -> StyleBundle {
    StyleBundle {
        custom: false,
        base: resolve_button_style(overrides, false),
        hover: resolve_button_style(overrides, true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_card() -> FeatureCard {
        FeatureCard {
            id: "card-1".to_string(),
            title: "Instant publish".to_string(),
            description: "Pages go live in one click".to_string(),
            subtitle: Some("No build step".to_string()),
            icon: Some("⚡".to_string()),
            badge: Some("New".to_string()),
            image: Some("https://cdn.example.com/publish.png".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn simple_variant_drops_everything_but_title_and_description() {
        let view = project_card(&full_card(), SectionVariant::Simple);
        assert_eq!(
            view,
            CardView::Simple {
                title: "Instant publish".to_string(),
                description: "Pages go live in one click".to_string(),
            }
        );
    }

    #[test]
    fn standard_variant_projects_icon_badge_subtitle_but_no_image() {
        let view = project_card(&full_card(), SectionVariant::Standard);
        match view {
            CardView::Standard {
                icon,
                badge,
                subtitle,
                ..
            } => {
                assert_eq!(icon.as_deref(), Some("⚡"));
                assert_eq!(badge.as_deref(), Some("New"));
                assert_eq!(subtitle.as_deref(), Some("No build step"));
            }
            other => panic!("expected Standard view, got {:?}", other),
        }
    }

    #[test]
    fn showcase_variant_projects_the_image() {
        let view = project_card(&full_card(), SectionVariant::Showcase);
        match view {
            CardView::Showcase { image, .. } => {
                assert_eq!(image.as_deref(), Some("https://cdn.example.com/publish.png"));
            }
            other => panic!("expected Showcase view, got {:?}", other),
        }
    }

    #[test]
    fn link_classification_policy() {
        assert_eq!(classify_link(None), LinkTarget::None);
        assert_eq!(classify_link(Some("")), LinkTarget::None);
        assert_eq!(
            classify_link(Some("https://example.com/docs")),
            LinkTarget::External {
                href: "https://example.com/docs".to_string()
            }
        );
        assert_eq!(
            classify_link(Some("http://example.com")),
            LinkTarget::External {
                href: "http://example.com".to_string()
            }
        );
        assert_eq!(
            classify_link(Some("/pricing")),
            LinkTarget::Internal {
                href: "/pricing".to_string()
            }
        );
    }

    #[test]
    fn card_bundle_carries_custom_flag_and_both_states() {
        let overrides = CardStyleOverrides {
            border_radius: Some("12px".to_string()),
            hover_transform: Some("scale(1.02)".to_string()),
            ..Default::default()
        };
        let bundle = card_bundle(&overrides);
        assert!(bundle.custom);
        assert_eq!(bundle.base.transform, None);
        assert_eq!(bundle.hover.transform.as_deref(), Some("scale(1.02)"));
    }

    #[test]
    fn button_bundle_is_never_custom() {
        let bundle = button_bundle(&ButtonStyleOverrides::default());
        assert!(!bundle.custom);
        assert!(bundle.base.background.is_some());
    }
}
