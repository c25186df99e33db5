//! # Block Factory
//!
//! Builds fully-populated default instances for every supported block
//! kind. The editor inserts blocks through this factory only, so a new
//! block always lands in the document with type-appropriate defaults
//! rather than empty payloads.

use std::str::FromStr;

use crate::block::{Block, BlockContent, BlockKind};
use crate::error::BlockError;
use crate::id_generator::IdGenerator;

/// Create a default block for `kind_name`, minting its id from `ids`.
///
/// Unknown kind names fail with [`BlockError::UnknownKind`] and mint no id.
pub fn create_block(kind_name: &str, ids: &mut IdGenerator) -> Result<Block, BlockError> {
    let kind = BlockKind::from_str(kind_name)?;
    Ok(default_block(kind, ids))
}

/// Create a default block for an already-resolved kind.
pub fn default_block(kind: BlockKind, ids: &mut IdGenerator) -> Block {
    Block::new(ids.next_id(), default_content(kind))
}

/// Default content payload for a block kind.
pub fn default_content(kind: BlockKind) -> BlockContent {
    match kind {
        BlockKind::Profile => BlockContent::Profile {
            display_name: "Your name".to_string(),
            bio: String::new(),
            avatar_url: None,
        },
        BlockKind::Link => BlockContent::Link {
            title: "New link".to_string(),
            url: String::new(),
            thumbnail_url: None,
        },
        BlockKind::Button => BlockContent::Button {
            label: "Tap here".to_string(),
            url: String::new(),
        },
        BlockKind::Text => BlockContent::Text { body: String::new() },
        BlockKind::Heading => BlockContent::Heading {
            text: "Section".to_string(),
            level: 2,
        },
        BlockKind::Divider => BlockContent::Divider,
        BlockKind::Image => BlockContent::Image {
            url: String::new(),
            alt: String::new(),
            caption: None,
        },
        BlockKind::Gallery => BlockContent::Gallery { image_urls: Vec::new() },
        BlockKind::Carousel => BlockContent::Carousel {
            image_urls: Vec::new(),
            auto_advance: true,
        },
        BlockKind::Video => BlockContent::Video {
            url: String::new(),
            autoplay: false,
        },
        BlockKind::Audio => BlockContent::Audio {
            url: String::new(),
            title: String::new(),
        },
        BlockKind::Map => BlockContent::Map {
            address: String::new(),
            zoom: 14,
        },
        BlockKind::SocialIcons => BlockContent::SocialIcons { links: Vec::new() },
        BlockKind::Subscribe => BlockContent::Subscribe {
            placeholder: "you@example.com".to_string(),
            button_label: "Subscribe".to_string(),
        },
        BlockKind::Form => BlockContent::Form {
            fields: Vec::new(),
            submit_label: "Send".to_string(),
        },
        BlockKind::Booking => BlockContent::Booking {
            calendar_url: String::new(),
            duration_minutes: 30,
        },
        BlockKind::Product => BlockContent::Product {
            name: "New product".to_string(),
            price_cents: 0,
            currency: "USD".to_string(),
            image_url: None,
            checkout_url: String::new(),
        },
        BlockKind::Payment => BlockContent::Payment {
            amount_cents: 0,
            currency: "USD".to_string(),
            description: String::new(),
        },
        BlockKind::Countdown => BlockContent::Countdown {
            target_epoch_ms: 0,
            headline: String::new(),
        },
        BlockKind::Faq => BlockContent::Faq { items: Vec::new() },
        BlockKind::Testimonial => BlockContent::Testimonial {
            quote: String::new(),
            author: String::new(),
            avatar_url: None,
        },
        BlockKind::FileDownload => BlockContent::FileDownload {
            file_url: String::new(),
            label: "Download".to_string(),
        },
        BlockKind::AppStore => BlockContent::AppStore {
            app_store_url: None,
            play_store_url: None,
        },
        BlockKind::Embed => BlockContent::Embed { url: String::new() },
        BlockKind::Announcement => BlockContent::Announcement {
            message: String::new(),
            ends_at_epoch_ms: None,
        },
        BlockKind::CustomCode => BlockContent::CustomCode { html: String::new() },
    }
}
