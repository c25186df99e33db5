use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BlockError;

/// One typed content unit in a page document.
///
/// The `id` is unique within a document and stable for the block's
/// lifetime. `size` and `style` are optional presentation metadata; an
/// unspecified size renders full-width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,

    #[serde(flatten)]
    pub content: BlockContent,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizePreset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<BlockStyle>,
}

impl Block {
    pub fn new(id: impl Into<String>, content: BlockContent) -> Self {
        Self {
            id: id.into(),
            content,
            size: None,
            style: None,
        }
    }

    pub fn with_size(mut self, size: SizePreset) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_style(mut self, style: BlockStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// The block's kind tag.
    pub fn kind(&self) -> BlockKind {
        self.content.kind()
    }

    /// Grid columns this block occupies (1 for `half-*`, 2 otherwise).
    pub fn columns(&self) -> u8 {
        self.size.map_or(2, |s| s.columns())
    }
}

/// Closed content union, one variant per supported block kind.
///
/// Serialized with a `type` tag so the persisted page layout is an array
/// of tagged-union values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum BlockContent {
    /// Page owner identity. Exactly one per document, always at index 0.
    Profile {
        display_name: String,
        bio: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        avatar_url: Option<String>,
    },

    /// Outbound link card.
    Link {
        title: String,
        url: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        thumbnail_url: Option<String>,
    },

    /// Call-to-action button.
    Button { label: String, url: String },

    /// Free-form text.
    Text { body: String },

    /// Section heading.
    Heading { text: String, level: u8 },

    /// Horizontal separator.
    Divider,

    /// Single image.
    Image {
        url: String,
        alt: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },

    /// Static image grid.
    Gallery { image_urls: Vec<String> },

    /// Rotating image strip.
    Carousel {
        image_urls: Vec<String>,
        auto_advance: bool,
    },

    /// Embedded video player.
    Video { url: String, autoplay: bool },

    /// Embedded audio player.
    Audio { url: String, title: String },

    /// Embedded map pin.
    Map { address: String, zoom: u8 },

    /// Row of social network icons.
    SocialIcons { links: Vec<SocialLink> },

    /// Email capture field.
    Subscribe {
        placeholder: String,
        button_label: String,
    },

    /// Contact form.
    Form {
        fields: Vec<FormField>,
        submit_label: String,
    },

    /// Appointment scheduling.
    Booking {
        calendar_url: String,
        duration_minutes: u16,
    },

    /// Product card with checkout link.
    Product {
        name: String,
        price_cents: u32,
        currency: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        image_url: Option<String>,
        checkout_url: String,
    },

    /// Direct payment request.
    Payment {
        amount_cents: u32,
        currency: String,
        description: String,
    },

    /// Countdown to a target time.
    Countdown {
        target_epoch_ms: u64,
        headline: String,
    },

    /// Question/answer accordion.
    Faq { items: Vec<FaqItem> },

    /// Quoted testimonial.
    Testimonial {
        quote: String,
        author: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        avatar_url: Option<String>,
    },

    /// Downloadable file.
    FileDownload { file_url: String, label: String },

    /// App store badges.
    AppStore {
        #[serde(skip_serializing_if = "Option::is_none")]
        app_store_url: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        play_store_url: Option<String>,
    },

    /// Third-party embed by URL.
    Embed { url: String },

    /// Dismissible announcement banner.
    Announcement {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        ends_at_epoch_ms: Option<u64>,
    },

    /// Raw HTML snippet.
    CustomCode { html: String },
}

impl BlockContent {
    /// The kind tag for this content payload.
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Profile { .. } => BlockKind::Profile,
            BlockContent::Link { .. } => BlockKind::Link,
            BlockContent::Button { .. } => BlockKind::Button,
            BlockContent::Text { .. } => BlockKind::Text,
            BlockContent::Heading { .. } => BlockKind::Heading,
            BlockContent::Divider => BlockKind::Divider,
            BlockContent::Image { .. } => BlockKind::Image,
            BlockContent::Gallery { .. } => BlockKind::Gallery,
            BlockContent::Carousel { .. } => BlockKind::Carousel,
            BlockContent::Video { .. } => BlockKind::Video,
            BlockContent::Audio { .. } => BlockKind::Audio,
            BlockContent::Map { .. } => BlockKind::Map,
            BlockContent::SocialIcons { .. } => BlockKind::SocialIcons,
            BlockContent::Subscribe { .. } => BlockKind::Subscribe,
            BlockContent::Form { .. } => BlockKind::Form,
            BlockContent::Booking { .. } => BlockKind::Booking,
            BlockContent::Product { .. } => BlockKind::Product,
            BlockContent::Payment { .. } => BlockKind::Payment,
            BlockContent::Countdown { .. } => BlockKind::Countdown,
            BlockContent::Faq { .. } => BlockKind::Faq,
            BlockContent::Testimonial { .. } => BlockKind::Testimonial,
            BlockContent::FileDownload { .. } => BlockKind::FileDownload,
            BlockContent::AppStore { .. } => BlockKind::AppStore,
            BlockContent::Embed { .. } => BlockKind::Embed,
            BlockContent::Announcement { .. } => BlockKind::Announcement,
            BlockContent::CustomCode { .. } => BlockKind::CustomCode,
        }
    }
}

/// Field-less mirror of [`BlockContent`] used for classification and
/// dispatch without touching payload fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Profile,
    Link,
    Button,
    Text,
    Heading,
    Divider,
    Image,
    Gallery,
    Carousel,
    Video,
    Audio,
    Map,
    SocialIcons,
    Subscribe,
    Form,
    Booking,
    Product,
    Payment,
    Countdown,
    Faq,
    Testimonial,
    FileDownload,
    AppStore,
    Embed,
    Announcement,
    CustomCode,
}

impl BlockKind {
    /// The kebab-case name used as the serialized `type` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Profile => "profile",
            BlockKind::Link => "link",
            BlockKind::Button => "button",
            BlockKind::Text => "text",
            BlockKind::Heading => "heading",
            BlockKind::Divider => "divider",
            BlockKind::Image => "image",
            BlockKind::Gallery => "gallery",
            BlockKind::Carousel => "carousel",
            BlockKind::Video => "video",
            BlockKind::Audio => "audio",
            BlockKind::Map => "map",
            BlockKind::SocialIcons => "social-icons",
            BlockKind::Subscribe => "subscribe",
            BlockKind::Form => "form",
            BlockKind::Booking => "booking",
            BlockKind::Product => "product",
            BlockKind::Payment => "payment",
            BlockKind::Countdown => "countdown",
            BlockKind::Faq => "faq",
            BlockKind::Testimonial => "testimonial",
            BlockKind::FileDownload => "file-download",
            BlockKind::AppStore => "app-store",
            BlockKind::Embed => "embed",
            BlockKind::Announcement => "announcement",
            BlockKind::CustomCode => "custom-code",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockKind {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "profile" => BlockKind::Profile,
            "link" => BlockKind::Link,
            "button" => BlockKind::Button,
            "text" => BlockKind::Text,
            "heading" => BlockKind::Heading,
            "divider" => BlockKind::Divider,
            "image" => BlockKind::Image,
            "gallery" => BlockKind::Gallery,
            "carousel" => BlockKind::Carousel,
            "video" => BlockKind::Video,
            "audio" => BlockKind::Audio,
            "map" => BlockKind::Map,
            "social-icons" => BlockKind::SocialIcons,
            "subscribe" => BlockKind::Subscribe,
            "form" => BlockKind::Form,
            "booking" => BlockKind::Booking,
            "product" => BlockKind::Product,
            "payment" => BlockKind::Payment,
            "countdown" => BlockKind::Countdown,
            "faq" => BlockKind::Faq,
            "testimonial" => BlockKind::Testimonial,
            "file-download" => BlockKind::FileDownload,
            "app-store" => BlockKind::AppStore,
            "embed" => BlockKind::Embed,
            "announcement" => BlockKind::Announcement,
            "custom-code" => BlockKind::CustomCode,
            other => return Err(BlockError::UnknownKind(other.to_string())),
        };
        Ok(kind)
    }
}

/// Per-block width/scale selection.
///
/// The `full-*` family spans both grid columns; the `half-*` family spans
/// one. The small/medium/large step controls rendered height, which the
/// grid does not interpret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizePreset {
    FullSmall,
    FullMedium,
    FullLarge,
    HalfSmall,
    HalfMedium,
    HalfLarge,
}

impl SizePreset {
    /// Grid columns occupied: 1 for `half-*`, 2 for `full-*`.
    pub fn columns(&self) -> u8 {
        match self {
            SizePreset::FullSmall | SizePreset::FullMedium | SizePreset::FullLarge => 2,
            SizePreset::HalfSmall | SizePreset::HalfMedium | SizePreset::HalfLarge => 1,
        }
    }

    pub fn is_half(&self) -> bool {
        self.columns() == 1
    }
}

/// Optional per-block presentation overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    #[serde(default)]
    pub alignment: Alignment,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<u16>,
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            alignment: Alignment::default(),
            background: None,
            text_color: None,
            padding: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// One entry in a social-icons block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub network: String,
    pub url: String,
}

/// One field in a form block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub required: bool,
}

/// One entry in a FAQ block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_name() {
        let kinds = [
            BlockKind::Profile,
            BlockKind::SocialIcons,
            BlockKind::FileDownload,
            BlockKind::CustomCode,
        ];

        for kind in kinds {
            assert_eq!(kind.as_str().parse::<BlockKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_name_fails() {
        let err = "hologram".parse::<BlockKind>().unwrap_err();
        assert!(matches!(err, BlockError::UnknownKind(name) if name == "hologram"));
    }

    #[test]
    fn test_block_serializes_with_type_tag() {
        let block = Block::new(
            "page1-1",
            BlockContent::Link {
                title: "My site".to_string(),
                url: "https://example.com".to_string(),
                thumbnail_url: None,
            },
        )
        .with_size(SizePreset::HalfMedium);

        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "link");
        assert_eq!(json["size"], "half-medium");
        // Absent optional metadata is omitted, not null
        assert!(json.get("thumbnail_url").is_none());
        assert!(json.get("style").is_none());

        let back: Block = serde_json::from_value(json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_columns_default_to_full_width() {
        let block = Block::new("page1-2", BlockContent::Divider);
        assert_eq!(block.columns(), 2);

        let half = block.clone().with_size(SizePreset::HalfSmall);
        assert_eq!(half.columns(), 1);
    }
}
