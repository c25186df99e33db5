//! # Tier Classification
//!
//! Every block kind belongs to exactly one of two disjoint sets, Free and
//! Premium. The classification is a pure, static lookup consulted only by
//! the edit session's insert path; layout and history never see it.

use crate::block::BlockKind;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    Free,
    Premium,
}

impl BlockKind {
    /// Which entitlement tier this kind requires.
    pub fn tier(&self) -> Tier {
        match self {
            BlockKind::Profile
            | BlockKind::Link
            | BlockKind::Button
            | BlockKind::Text
            | BlockKind::Heading
            | BlockKind::Divider
            | BlockKind::Image
            | BlockKind::Gallery
            | BlockKind::SocialIcons
            | BlockKind::Subscribe
            | BlockKind::Embed
            | BlockKind::Announcement => Tier::Free,

            BlockKind::Carousel
            | BlockKind::Video
            | BlockKind::Audio
            | BlockKind::Map
            | BlockKind::Form
            | BlockKind::Booking
            | BlockKind::Product
            | BlockKind::Payment
            | BlockKind::Countdown
            | BlockKind::Faq
            | BlockKind::Testimonial
            | BlockKind::FileDownload
            | BlockKind::AppStore
            | BlockKind::CustomCode => Tier::Premium,
        }
    }
}
