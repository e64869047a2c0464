use serde::{Deserialize, Serialize};

use crate::id;
use crate::ops::{Entity, Patch};
use crate::style::ButtonStyleOverrides;

/// Orientation of a text+image block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockLayout {
    #[default]
    TextLeft,
    TextRight,
    TextTop,
    TextBottom,
    /// Text spans the full width; the image sits below it.
    TextFull,
}

/// Discriminator kept in storage so future block kinds can coexist in the
/// same sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    #[default]
    #[serde(rename = "text-image")]
    TextImage,
}

/// Textual content of a block. The button fields are optional; a block
/// without `button_text` renders no button at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockText {
    pub heading: String,
    pub subheading: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_text: Option<String>,
    /// Absolute URL or relative path; classified at the rendering boundary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockImage {
    pub url: String,
    pub alt: String,
}

/// Presentation fields of a block. Always fully populated: the factory fills
/// every field at creation and serde defaults cover older stored blocks, so
/// downstream code never sees an unset style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockStyles {
    pub background_color: String,
    pub text_color: String,
    pub heading_font_size: String,
    pub padding: String,
    pub border_radius: String,
}

impl Default for BlockStyles {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            text_color: "#1f2937".to_string(),
            heading_font_size: "28px".to_string(),
            padding: "48px".to_string(),
            border_radius: "8px".to_string(),
        }
    }
}

/// A text+image content block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextImageBlock {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: BlockKind,
    #[serde(default)]
    pub layout: BlockLayout,
    #[serde(default)]
    pub text: BlockText,
    #[serde(default)]
    pub image: BlockImage,
    #[serde(default)]
    pub styles: BlockStyles,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub button_style: Option<ButtonStyleOverrides>,
}

impl TextImageBlock {
    /// Create a block with a generated id and every style field populated.
    pub fn new(layout: BlockLayout) -> Self {
        Self {
            id: id::generate(),
            kind: BlockKind::TextImage,
            layout,
            text: BlockText::default(),
            image: BlockImage::default(),
            styles: BlockStyles::default(),
            button_style: None,
        }
    }
}

impl Entity for TextImageBlock {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Shallow patch for [`TextImageBlock`]: present sub-records replace the
/// current ones wholesale, mirroring the shallow-merge semantics of the card
/// patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<BlockLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<BlockText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<BlockImage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<BlockStyles>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_style: Option<ButtonStyleOverrides>,
}

impl Patch<TextImageBlock> for BlockPatch {
    fn apply(&self, block: &mut TextImageBlock) {
        if let Some(layout) = self.layout {
            block.layout = layout;
        }
        if let Some(text) = &self.text {
            block.text = text.clone();
        }
        if let Some(image) = &self.image {
            block.image = image.clone();
        }
        if let Some(styles) = &self.styles {
            block.styles = styles.clone();
        }
        if let Some(button_style) = &self.button_style {
            block.button_style = Some(button_style.clone());
        }
    }
}

/// Composition root for appended blocks. A section owns its blocks; deleting
/// a block only removes it from this sequence, nothing else references it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockSection {
    pub section_id: String,
    pub section_name: String,
    #[serde(default)]
    pub text_image_blocks: Vec<TextImageBlock>,
}

impl BlockSection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            section_id: id::generate(),
            section_name: name.into(),
            text_image_blocks: Vec::new(),
        }
    }
}
