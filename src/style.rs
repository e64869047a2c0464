use serde::{Deserialize, Serialize};

/// Per-card style overrides supplied by the editor.
///
/// Every knob is optional and carried as an opaque CSS string; presence of any
/// visual knob switches the card into custom mode (see
/// [`CardStyleOverrides::is_custom`]), which suppresses the preset class
/// styling in favour of computed inline style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardStyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,

    // Gradient background; only meaningful when both stops are present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_angle: Option<String>,

    // Shadow knobs; any of these triggers box-shadow composition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_blur: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_spread: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset_x: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_offset_y: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition_duration: Option<String>,
}

impl CardStyleOverrides {
    /// Whether the card is in custom mode.
    ///
    /// Custom mode is entered when any directly-visual override is present, or
    /// when both gradient stops are given. Shadow geometry knobs, transforms
    /// and transitions alone do not trigger it: they compose with the preset
    /// classes without conflicting.
    pub fn is_custom(&self) -> bool {
        self.text_color.is_some()
            || self.hover_text_color.is_some()
            || self.background_color.is_some()
            || self.hover_background_color.is_some()
            || self.border_color.is_some()
            || self.shadow_color.is_some()
            || self.border_radius.is_some()
            || self.padding.is_some()
            || (self.gradient_start.is_some() && self.gradient_end.is_some())
    }

    /// Whether any shadow knob is set, i.e. a box-shadow must be composed.
    pub fn has_shadow(&self) -> bool {
        self.shadow_color.is_some()
            || self.shadow_blur.is_some()
            || self.shadow_spread.is_some()
            || self.shadow_offset_x.is_some()
            || self.shadow_offset_y.is_some()
    }

    /// Whether a gradient background is in effect (both stops present).
    pub fn has_gradient(&self) -> bool {
        self.gradient_start.is_some() && self.gradient_end.is_some()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Button rendering variants.
///
/// `Text` is declared for forward compatibility but has no distinct rendering
/// rule; it resolves exactly like `Ghost`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Solid,
    Outline,
    Ghost,
    Text,
    Gradient,
}

/// Button shadow presets, smallest to largest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShadowLevel {
    #[default]
    None,
    Sm,
    Md,
    Lg,
    Xl,
}

impl ShadowLevel {
    /// The box-shadow declaration for this level, or `None` for no shadow.
    pub fn css(&self) -> Option<&'static str> {
        match self {
            ShadowLevel::None => None,
            ShadowLevel::Sm => Some("0 1px 2px rgba(0, 0, 0, 0.05)"),
            ShadowLevel::Md => Some("0 4px 6px rgba(0, 0, 0, 0.1)"),
            ShadowLevel::Lg => Some("0 10px 15px rgba(0, 0, 0, 0.1)"),
            ShadowLevel::Xl => Some("0 20px 25px rgba(0, 0, 0, 0.15)"),
        }
    }

    /// One tier up, for hover elevation. `None` stays `None`; `Xl` caps out.
    pub fn elevated(&self) -> ShadowLevel {
        match self {
            ShadowLevel::None => ShadowLevel::None,
            ShadowLevel::Sm => ShadowLevel::Md,
            ShadowLevel::Md => ShadowLevel::Lg,
            ShadowLevel::Lg => ShadowLevel::Xl,
            ShadowLevel::Xl => ShadowLevel::Xl,
        }
    }
}

/// Style overrides for a block button.
///
/// Unlike cards there is no custom-mode flag: the variant picks a fixed
/// structural template and the color/size fields substitute into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonStyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_bg_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    pub variant: ButtonVariant,
    pub shadow: ShadowLevel,
    pub enable_animation: bool,
    /// Hover lift distance in pixels.
    pub transform_amount: f64,
    /// Transition duration in seconds.
    pub transition_duration: f64,
}

impl Default for ButtonStyleOverrides {
    fn default() -> Self {
        Self {
            bg_color: None,
            text_color: None,
            hover_bg_color: None,
            hover_text_color: None,
            border_color: None,
            border_radius: None,
            variant: ButtonVariant::default(),
            shadow: ShadowLevel::default(),
            enable_animation: true,
            transform_amount: 2.0,
            transition_duration: 0.3,
        }
    }
}

/// A fully computed inline style for one interaction state.
///
/// Every field is an opaque CSS value; unset fields are left to the preset
/// class (cards) or simply absent (buttons). `title_color` targets the card
/// title element rather than the card node itself, so it is excluded from
/// [`ConcreteStyle::to_declarations`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConcreteStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,
}

impl ConcreteStyle {
    /// Emit the style as CSS property/value declarations for the card or
    /// button node, in a stable order.
    pub fn to_declarations(&self) -> Vec<(String, String)> {
        let mut decls = Vec::new();
        let mut push = |prop: &str, value: &Option<String>| {
            if let Some(v) = value {
                decls.push((prop.to_string(), v.clone()));
            }
        };
        push("background", &self.background);
        push("color", &self.color);
        push("border", &self.border);
        push("border-color", &self.border_color);
        push("border-width", &self.border_width);
        push("border-radius", &self.border_radius);
        push("padding", &self.padding);
        push("box-shadow", &self.box_shadow);
        push("transform", &self.transform);
        push("transition", &self.transition);
        decls
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_overrides_are_not_custom() {
        let overrides = CardStyleOverrides::default();
        assert!(!overrides.is_custom());
        assert!(overrides.is_empty());
    }

    #[test]
    fn border_radius_alone_triggers_custom_mode() {
        let overrides = CardStyleOverrides {
            border_radius: Some("12px".to_string()),
            ..Default::default()
        };
        assert!(overrides.is_custom());
    }

    #[test]
    fn single_gradient_stop_is_not_custom() {
        let overrides = CardStyleOverrides {
            gradient_start: Some("#111111".to_string()),
            ..Default::default()
        };
        assert!(!overrides.is_custom());
        assert!(!overrides.has_gradient());
    }

    #[test]
    fn both_gradient_stops_are_custom() {
        let overrides = CardStyleOverrides {
            gradient_start: Some("#111111".to_string()),
            gradient_end: Some("#222222".to_string()),
            ..Default::default()
        };
        assert!(overrides.is_custom());
        assert!(overrides.has_gradient());
    }

    #[test]
    fn shadow_blur_alone_is_not_custom_but_has_shadow() {
        let overrides = CardStyleOverrides {
            shadow_blur: Some("10px".to_string()),
            ..Default::default()
        };
        assert!(!overrides.is_custom());
        assert!(overrides.has_shadow());
    }

    #[test]
    fn shadow_levels_elevate_one_tier() {
        assert_eq!(ShadowLevel::Sm.elevated(), ShadowLevel::Md);
        assert_eq!(ShadowLevel::Lg.elevated(), ShadowLevel::Xl);
        assert_eq!(ShadowLevel::Xl.elevated(), ShadowLevel::Xl);
        assert_eq!(ShadowLevel::None.elevated(), ShadowLevel::None);
    }

    #[test]
    fn declarations_use_css_property_names() {
        let style = ConcreteStyle {
            background: Some("#ffffff".to_string()),
            box_shadow: Some("0px 2px 8px rgba(0, 0, 0, 0.1)".to_string()),
            ..Default::default()
        };
        let decls = style.to_declarations();
        assert_eq!(
            decls,
            vec![
                ("background".to_string(), "#ffffff".to_string()),
                (
                    "box-shadow".to_string(),
                    "0px 2px 8px rgba(0, 0, 0, 0.1)".to_string()
                ),
            ]
        );
    }

    #[test]
    fn button_overrides_default_to_animated_solid() {
        let style = ButtonStyleOverrides::default();
        assert_eq!(style.variant, ButtonVariant::Solid);
        assert_eq!(style.shadow, ShadowLevel::None);
        assert!(style.enable_animation);
        assert_eq!(style.transform_amount, 2.0);
        assert_eq!(style.transition_duration, 0.3);
    }

    #[test]
    fn overrides_round_trip_through_json() {
        let overrides = CardStyleOverrides {
            background_color: Some("#0f172a".to_string()),
            shadow_blur: Some("8px".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&overrides).unwrap();
        assert!(json.contains("backgroundColor"));
        assert!(json.contains("shadowBlur"));
        let back: CardStyleOverrides = serde_json::from_str(&json).unwrap();
        assert_eq!(back, overrides);
    }
}
