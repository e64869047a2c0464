use pagecraft_blocks::{
    card_bundle, classify_link, load_section, ops, parse_section, project_card, resolve,
    resolve_card_style, BlockLayout, BlockSection, CardPreset, CardStyleOverrides, CardView,
    ColumnsPerRow, FeatureCard, FeaturesSection, LinkTarget, PartialFeaturesSection,
    SectionVariant, TextImageBlock,
};
use pretty_assertions::assert_eq;

// --- Default resolution ---

#[test]
fn load_of_empty_object_yields_all_defaults() {
    let section = load_section("{}");
    assert_eq!(section.variant, SectionVariant::Standard);
    assert_eq!(section.columns_per_row, ColumnsPerRow::Three);
    assert_eq!(section.card_style, CardPreset::Shadow);
    assert!(section.cards.is_empty());
    assert!(section.card_css_custom.is_empty());
}

#[test]
fn load_never_fails_on_garbage() {
    assert_eq!(load_section("null"), resolve(None));
    assert_eq!(load_section(""), resolve(None));
    assert_eq!(load_section("{not json"), resolve(None));
    // wrong field type degrades the whole document to defaults
    assert_eq!(load_section(r#"{"variant": "three"}"#), resolve(None));
}

#[test]
fn load_fills_partial_documents_field_by_field() {
    let section = load_section(
        r#"{
            "sectionTitle": "Why Pagecraft",
            "variant": 3,
            "cards": [{"title": "Composable", "description": "Blocks all the way down"}]
        }"#,
    );
    assert_eq!(section.section_title, "Why Pagecraft");
    assert_eq!(section.section_subtitle, "");
    assert_eq!(section.variant, SectionVariant::Showcase);
    assert_eq!(section.columns_per_row, ColumnsPerRow::Three);
    assert_eq!(section.cards.len(), 1);
    assert!(!section.cards[0].id.is_empty());
}

#[test]
fn resolve_is_idempotent_over_loaded_documents() {
    let section = load_section(r#"{"sectionTitle": "Features", "variant": 1, "cardStyle": "modern"}"#);
    let again = resolve(Some(section.clone().into()));
    assert_eq!(again, section);
}

#[test]
fn strict_parse_surfaces_shape_errors() {
    assert!(parse_section(r#"{"variant": "three"}"#).is_err());
    assert!(parse_section(r#"{"sectionTitle": "ok"}"#).is_ok());
}

#[test]
fn valid_documents_round_trip_verbatim() {
    let mut section = resolve(None);
    section.section_title = "Features".to_string();
    section.section_subtitle = "Everything included".to_string();
    section.variant = SectionVariant::Showcase;
    let mut card = FeatureCard::new("Fast", "Builds in seconds");
    card.icon = Some("⚡".to_string());
    card.link = Some("/docs/speed".to_string());
    section.cards.push(card);
    section.card_css_custom.border_radius = Some("12px".to_string());

    let saved = serde_json::to_string(&section).unwrap();
    let loaded: FeaturesSection = serde_json::from_str(&saved).unwrap();
    assert_eq!(loaded, section);
    assert_eq!(serde_json::to_string(&loaded).unwrap(), saved);
}

// --- Collection operations, end to end ---

#[test]
fn append_then_duplicate_yields_adjacent_twins_with_distinct_ids() {
    let section = resolve(None);
    assert!(section.cards.is_empty());

    let mut card = FeatureCard::new("Composable", "Blocks all the way down");
    card.badge = Some("Core".to_string());
    let cards = ops::append(&section.cards, card);
    let cards = ops::duplicate_after(&cards, cards[0].id.as_str());

    assert_eq!(cards.len(), 2);
    assert_ne!(cards[0].id, cards[1].id);
    let mut twin = cards[1].clone();
    twin.id = cards[0].id.clone();
    assert_eq!(twin, cards[0]);
}

#[test]
fn moves_at_the_boundaries_do_nothing() {
    let cards = vec![
        FeatureCard::new("One", ""),
        FeatureCard::new("Two", ""),
    ];
    let first = cards[0].id.clone();
    let last = cards[1].id.clone();
    assert_eq!(ops::move_adjacent(&cards, &first, ops::Direction::Up), cards);
    assert_eq!(ops::move_adjacent(&cards, &last, ops::Direction::Down), cards);
}

#[test]
fn block_sequences_use_the_same_operations() {
    let section = BlockSection::new("Story");
    let blocks = ops::append(
        &section.text_image_blocks,
        TextImageBlock::new(BlockLayout::TextLeft),
    );
    let blocks = ops::duplicate_after(&blocks, blocks[0].id.as_str());
    assert_eq!(blocks.len(), 2);
    assert_ne!(blocks[0].id, blocks[1].id);
    assert_eq!(blocks[1].styles, blocks[0].styles);

    let blocks = ops::delete_by_id(&blocks, blocks[0].id.as_str());
    assert_eq!(blocks.len(), 1);
}

// --- Style resolution against the stored shape ---

#[test]
fn border_radius_alone_switches_the_whole_card_to_custom() {
    let section = load_section(r#"{"cardCssCustom": {"borderRadius": "12px"}}"#);
    let bundle = card_bundle(&section.card_css_custom);
    assert!(bundle.custom);
    assert_eq!(bundle.base.border_radius.as_deref(), Some("12px"));
}

#[test]
fn stored_shadow_config_produces_the_documented_hover_delta() {
    let section = load_section(
        r##"{"cardCssCustom": {"shadowBlur": "8px", "shadowColor": "#ff0000"}}"##,
    );
    let base = resolve_card_style(&section.card_css_custom, false);
    let hovered = resolve_card_style(&section.card_css_custom, true);
    assert_eq!(
        base.box_shadow.as_deref(),
        Some("0px 2px 8px 0px rgba(255, 0, 0, 0.15)")
    );
    assert_eq!(
        hovered.box_shadow.as_deref(),
        Some("0px 2px 12px 0px rgba(255, 0, 0, 0.25)")
    );
}

#[test]
fn gradient_beats_background_color_in_stored_configs() {
    let section = load_section(
        r##"{"cardCssCustom": {
            "backgroundColor": "#ffffff",
            "gradientStart": "#0ea5e9",
            "gradientEnd": "#6366f1"
        }}"##,
    );
    let style = resolve_card_style(&section.card_css_custom, false);
    assert_eq!(
        style.background.as_deref(),
        Some("linear-gradient(135deg, #0ea5e9, #6366f1)")
    );
}

#[test]
fn engine_is_deterministic_for_equal_inputs() {
    let overrides = CardStyleOverrides {
        background_color: Some("#0f172a".to_string()),
        hover_transform: Some("translateY(-4px)".to_string()),
        transition_duration: Some("0.2s".to_string()),
        ..Default::default()
    };
    for hovered in [false, true] {
        assert_eq!(
            resolve_card_style(&overrides, hovered),
            resolve_card_style(&overrides, hovered)
        );
    }
}

// --- Rendering boundary ---

#[test]
fn empty_section_projects_zero_cards() {
    let section = load_section("{}");
    let views: Vec<CardView> = section
        .cards
        .iter()
        .map(|card| project_card(card, section.variant))
        .collect();
    assert!(views.is_empty());
}

#[test]
fn stale_fields_survive_variant_changes_but_are_not_projected() {
    let mut section = load_section(
        r#"{"variant": 3, "cards": [{
            "title": "Gallery",
            "description": "Showcase card",
            "image": "https://cdn.example.com/gallery.png"
        }]}"#,
    );
    // editor switches the section down to variant 1
    section.variant = SectionVariant::Simple;
    let view = project_card(&section.cards[0], section.variant);
    assert_eq!(
        view,
        CardView::Simple {
            title: "Gallery".to_string(),
            description: "Showcase card".to_string(),
        }
    );
    // the image is still stored, ready for a switch back
    assert!(section.cards[0].image.is_some());
}

#[test]
fn link_policy_spans_cards_and_block_buttons() {
    let card = FeatureCard {
        link: Some("https://docs.example.com".to_string()),
        ..FeatureCard::new("Linked", "")
    };
    assert!(matches!(
        classify_link(card.link.as_deref()),
        LinkTarget::External { .. }
    ));

    let mut block = TextImageBlock::new(BlockLayout::TextRight);
    block.text.button_url = Some("/signup".to_string());
    assert!(matches!(
        classify_link(block.text.button_url.as_deref()),
        LinkTarget::Internal { .. }
    ));
}

// --- Partial-shape interplay ---

#[test]
fn unknown_stored_tags_degrade_without_dropping_neighbours() {
    let partial = PartialFeaturesSection {
        section_title: Some("Kept".to_string()),
        card_style: Some("neon".to_string()),
        columns_per_row: Some(7),
        ..Default::default()
    };
    let section = resolve(Some(partial));
    assert_eq!(section.section_title, "Kept");
    assert_eq!(section.card_style, CardPreset::Shadow);
    assert_eq!(section.columns_per_row, ColumnsPerRow::Three);
}
