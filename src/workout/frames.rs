//! Sprite frame layouts for exercise images.
//!
//! Exercise images are sprite sheets holding one to three poses side by side
//! (horizontal) or stacked (vertical). Layouts for known slugs were taken by
//! inspecting the image files; unknown slugs fall back to `DEFAULT_LAYOUT`.

use serde::{Deserialize, Serialize};

/// How the frames are arranged in the sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
    Random,
}

/// Frame count and arrangement of one sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameLayout {
    pub frames: u8,
    pub orientation: Orientation,
}

/// Layout used for slugs missing from `KNOWN_LAYOUTS`.
pub const DEFAULT_LAYOUT: FrameLayout = FrameLayout {
    frames: 2,
    orientation: Orientation::Horizontal,
};

const fn layout(frames: u8, orientation: Orientation) -> FrameLayout {
    FrameLayout {
        frames,
        orientation,
    }
}

const KNOWN_LAYOUTS: &[(&str, FrameLayout)] = &[
    // 2 frames, left/right
    ("kneeling-hip-flexor-stretch", layout(2, Orientation::Horizontal)),
    ("seal-jacks", layout(2, Orientation::Horizontal)),
    // Single image
    ("samson-stretch-lunge-stretch", layout(1, Orientation::Horizontal)),
    ("neck-stretch", layout(1, Orientation::Horizontal)),
    ("hamstring-stretch", layout(1, Orientation::Horizontal)),
    ("kneeling-wrist-forearm-stretch", layout(1, Orientation::Horizontal)),
    // 2 frames, top/bottom
    ("bird-dogs", layout(2, Orientation::Vertical)),
    ("groiners", layout(2, Orientation::Vertical)),
    // 3 frames
    ("hindu-judo-push-up-dive-bombers", layout(3, Orientation::Vertical)),
    ("180-twisting-jump-squats", layout(3, Orientation::Horizontal)),
];

/// Look up the sprite layout for an exercise slug.
pub fn frame_layout(slug: &str) -> FrameLayout {
    KNOWN_LAYOUTS
        .iter()
        .find(|(known, _)| *known == slug)
        .map(|(_, layout)| *layout)
        .unwrap_or(DEFAULT_LAYOUT)
}
