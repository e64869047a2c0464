//! Deterministic style resolution.
//!
//! Pure functions from an override record plus an interaction flag to a
//! concrete inline style. Given the same configuration the output is always
//! identical, independent of the renderer consuming it.

use crate::color;
use crate::style::{ButtonStyleOverrides, ButtonVariant, CardStyleOverrides, ConcreteStyle};

/// Dark default applied to custom-mode cards that set a background but no
/// text color, so text stays legible.
const CUSTOM_TEXT_FALLBACK: &str = "#1f2937";

const DEFAULT_GRADIENT_ANGLE: &str = "135deg";

const DEFAULT_SHADOW_OFFSET_X: &str = "0px";
const DEFAULT_SHADOW_OFFSET_Y: &str = "2px";
const DEFAULT_SHADOW_SPREAD: &str = "0px";
const DEFAULT_SHADOW_BLUR_PX: f64 = 8.0;
/// Hovered cards get more presence: blur grows by a fixed amount and alpha
/// rises, with offsets and spread unchanged.
const HOVER_BLUR_INCREMENT_PX: f64 = 4.0;
const SHADOW_ALPHA: f64 = 0.15;
const SHADOW_ALPHA_HOVER: f64 = 0.25;
const FALLBACK_SHADOW_ALPHA: f64 = 0.1;
const FALLBACK_SHADOW_ALPHA_HOVER: f64 = 0.15;

// Button palette when no color overrides are given.
const BUTTON_BG: &str = "#3b82f6";
const BUTTON_BG_HOVER: &str = "#2563eb";
const BUTTON_TEXT: &str = "#ffffff";
const BUTTON_RADIUS: &str = "6px";
/// Alpha of the background wash a ghost button shows on hover.
const GHOST_WASH_ALPHA: f64 = 0.1;

/// Resolve a card's override record into the inline style for one interaction
/// state.
///
/// Precedence: gradient over solid background, explicit text color over the
/// custom-mode fallback, explicit border/padding values verbatim. The hover
/// transform appears only in the hovered style; the transition only in the
/// base style, so it registers before hover kicks in.
pub fn resolve_card_style(overrides: &CardStyleOverrides, hovered: bool) -> ConcreteStyle {
    let mut style = ConcreteStyle::default();

    if let (Some(start), Some(end)) = (&overrides.gradient_start, &overrides.gradient_end) {
        let angle = overrides
            .gradient_angle
            .as_deref()
            .unwrap_or(DEFAULT_GRADIENT_ANGLE);
        style.background = Some(format!("linear-gradient({}, {}, {})", angle, start, end));
    } else if hovered {
        style.background = overrides
            .hover_background_color
            .clone()
            .or_else(|| overrides.background_color.clone());
    } else {
        style.background = overrides.background_color.clone();
    }

    if let Some(text_color) = &overrides.text_color {
        style.color = Some(text_color.clone());
    } else if overrides.is_custom() {
        style.color = Some(CUSTOM_TEXT_FALLBACK.to_string());
    }
    // The hover text color targets the title element only, never body text.
    if hovered {
        style.title_color = overrides.hover_text_color.clone();
    }

    style.border_color = overrides.border_color.clone();
    style.border_width = overrides.border_width.clone();
    style.border_radius = overrides.border_radius.clone();
    style.padding = overrides.padding.clone();

    if overrides.has_shadow() {
        style.box_shadow = Some(compose_box_shadow(overrides, hovered));
    }

    if hovered {
        style.transform = overrides.hover_transform.clone();
    } else if let Some(duration) = &overrides.transition_duration {
        style.transition = Some(format!("all {} ease", duration));
    }

    style
}

fn compose_box_shadow(overrides: &CardStyleOverrides, hovered: bool) -> String {
    let offset_x = overrides
        .shadow_offset_x
        .as_deref()
        .unwrap_or(DEFAULT_SHADOW_OFFSET_X);
    let offset_y = overrides
        .shadow_offset_y
        .as_deref()
        .unwrap_or(DEFAULT_SHADOW_OFFSET_Y);
    let spread = overrides
        .shadow_spread
        .as_deref()
        .unwrap_or(DEFAULT_SHADOW_SPREAD);

    let mut blur = overrides
        .shadow_blur
        .as_deref()
        .and_then(color::parse_px)
        .unwrap_or(DEFAULT_SHADOW_BLUR_PX);
    if hovered {
        blur += HOVER_BLUR_INCREMENT_PX;
    }

    let shadow_color = match &overrides.shadow_color {
        Some(hex) => {
            let alpha = if hovered { SHADOW_ALPHA_HOVER } else { SHADOW_ALPHA };
            color::hex_to_rgba(hex, alpha)
        }
        None => {
            let alpha = if hovered {
                FALLBACK_SHADOW_ALPHA_HOVER
            } else {
                FALLBACK_SHADOW_ALPHA
            };
            format!("rgba(0, 0, 0, {})", alpha)
        }
    };

    format!(
        "{} {} {} {} {}",
        offset_x,
        offset_y,
        color::format_px(blur),
        spread,
        shadow_color
    )
}

/// Resolve a button's style for one interaction state.
///
/// The variant fixes which properties are set; overrides only substitute
/// colors and sizes inside that template. Hover lift and shadow elevation are
/// gated by `enable_animation`: when it is off, hovering changes colors but
/// never geometry or shadow.
pub fn resolve_button_style(overrides: &ButtonStyleOverrides, hovered: bool) -> ConcreteStyle {
    let mut style = match overrides.variant {
        ButtonVariant::Solid => solid_template(overrides, hovered),
        ButtonVariant::Outline => outline_template(overrides, hovered),
        // `text` has no distinct rendering rule; it is an alias for ghost.
        ButtonVariant::Ghost | ButtonVariant::Text => ghost_template(overrides, hovered),
        ButtonVariant::Gradient => gradient_template(overrides, hovered),
    };

    style.border_radius = Some(
        overrides
            .border_radius
            .clone()
            .unwrap_or_else(|| BUTTON_RADIUS.to_string()),
    );

    if hovered {
        if overrides.enable_animation {
            style.transform = Some(format!("translateY(-{}px)", overrides.transform_amount));
            style.box_shadow = overrides.shadow.elevated().css().map(str::to_string);
        } else {
            style.box_shadow = overrides.shadow.css().map(str::to_string);
        }
    } else {
        style.box_shadow = overrides.shadow.css().map(str::to_string);
        style.transition = Some(format!("all {}s ease", overrides.transition_duration));
    }

    style
}

fn solid_template(overrides: &ButtonStyleOverrides, hovered: bool) -> ConcreteStyle {
    let base_bg = overrides
        .bg_color
        .clone()
        .unwrap_or_else(|| BUTTON_BG.to_string());
    let hover_bg = overrides
        .hover_bg_color
        .clone()
        .or_else(|| overrides.bg_color.clone())
        .unwrap_or_else(|| BUTTON_BG_HOVER.to_string());
    let base_text = overrides
        .text_color
        .clone()
        .unwrap_or_else(|| BUTTON_TEXT.to_string());
    let hover_text = overrides.hover_text_color.clone().unwrap_or_else(|| base_text.clone());

    ConcreteStyle {
        background: Some(if hovered { hover_bg } else { base_bg }),
        color: Some(if hovered { hover_text } else { base_text }),
        border: Some("none".to_string()),
        ..Default::default()
    }
}

fn outline_template(overrides: &ButtonStyleOverrides, hovered: bool) -> ConcreteStyle {
    let accent = overrides
        .border_color
        .clone()
        .or_else(|| overrides.bg_color.clone())
        .unwrap_or_else(|| BUTTON_BG.to_string());
    let hover_bg = overrides.hover_bg_color.clone().unwrap_or_else(|| accent.clone());
    let hover_text = overrides
        .hover_text_color
        .clone()
        .unwrap_or_else(|| BUTTON_TEXT.to_string());

    ConcreteStyle {
        background: Some(if hovered {
            hover_bg
        } else {
            "transparent".to_string()
        }),
        color: Some(if hovered { hover_text } else { accent.clone() }),
        border: Some(format!("2px solid {}", accent)),
        ..Default::default()
    }
}

fn ghost_template(overrides: &ButtonStyleOverrides, hovered: bool) -> ConcreteStyle {
    let accent = overrides
        .bg_color
        .clone()
        .unwrap_or_else(|| BUTTON_BG.to_string());
    let base_text = overrides.text_color.clone().unwrap_or_else(|| accent.clone());
    let hover_text = overrides
        .hover_text_color
        .clone()
        .unwrap_or_else(|| base_text.clone());

    ConcreteStyle {
        background: Some(if hovered {
            color::hex_to_rgba(&accent, GHOST_WASH_ALPHA)
        } else {
            "transparent".to_string()
        }),
        color: Some(if hovered { hover_text } else { base_text }),
        border: Some("none".to_string()),
        ..Default::default()
    }
}

fn gradient_template(overrides: &ButtonStyleOverrides, hovered: bool) -> ConcreteStyle {
    let start = overrides
        .bg_color
        .clone()
        .unwrap_or_else(|| BUTTON_BG.to_string());
    let end = overrides
        .hover_bg_color
        .clone()
        .unwrap_or_else(|| BUTTON_BG_HOVER.to_string());
    let base_text = overrides
        .text_color
        .clone()
        .unwrap_or_else(|| BUTTON_TEXT.to_string());
    let hover_text = overrides
        .hover_text_color
        .clone()
        .unwrap_or_else(|| base_text.clone());

    ConcreteStyle {
        background: Some(format!("linear-gradient(135deg, {}, {})", start, end)),
        color: Some(if hovered { hover_text } else { base_text }),
        border: Some("none".to_string()),
        ..Default::default()
    }
}
