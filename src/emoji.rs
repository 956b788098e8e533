//! Leading-emoji extraction
//!
//! Finds the first pictograph in a reply, maps it to an image id and removes
//! it from the text so the display layer can show an icon instead.

use ahash::AHashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

const VARIATION_SELECTOR: char = '\u{FE0F}';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiExtraction {
    pub image_id: String,
    pub text: String,
}

pub struct EmojiExtractor {
    pictograph: Regex,
    images: AHashMap<char, &'static str>,
    default_image: String,
}

impl EmojiExtractor {
    pub fn new(images: AHashMap<char, &'static str>, default_image: impl Into<String>) -> Self {
        Self {
            // Unicode property classes are built into the regex crate
            pictograph: Regex::new(r"[\p{Emoji_Presentation}\p{Extended_Pictographic}]")
                .expect("Invalid regex pattern"),
            images,
            default_image: default_image.into(),
        }
    }

    pub fn image_for(&self, glyph: char) -> Option<&'static str> {
        self.images.get(&glyph).copied()
    }

    /// Image id for the first pictograph and the text without it
    ///
    /// Only the first pictograph is inspected. When it has no mapping, or the
    /// text has none, the default image id is returned with the text as is.
    pub fn extract_leading_emoji(&self, text: &str) -> EmojiExtraction {
        let unchanged = || EmojiExtraction {
            image_id: self.default_image.clone(),
            text: text.to_string(),
        };

        let Some(found) = self.pictograph.find(text) else {
            return unchanged();
        };
        let Some(glyph) = found.as_str().chars().next() else {
            return unchanged();
        };
        let Some(image_id) = self.image_for(glyph) else {
            return unchanged();
        };

        let mut end = found.end();
        if text[end..].starts_with(VARIATION_SELECTOR) {
            end += VARIATION_SELECTOR.len_utf8();
        }

        let before = text[..found.start()].trim_end();
        let after = text[end..].trim_start();
        let joined = if before.is_empty() || after.is_empty() {
            format!("{}{}", before, after)
        } else {
            format!("{} {}", before, after)
        };

        EmojiExtraction {
            image_id: image_id.to_string(),
            text: joined.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> EmojiExtractor {
        let images = [('😊', "smiling_face"), ('❤', "red_heart"), ('🐄', "cow")]
            .into_iter()
            .collect();
        EmojiExtractor::new(images, "assistant")
    }

    #[test]
    fn test_middle_emoji_removed() {
        let result = extractor().extract_leading_emoji("Hi there 😊 friend");
        assert_eq!(result.image_id, "smiling_face");
        assert_eq!(result.text, "Hi there friend");
    }

    #[test]
    fn test_only_first_removed() {
        let result = extractor().extract_leading_emoji("🐄 moo 🐄");
        assert_eq!(result.image_id, "cow");
        assert_eq!(result.text, "moo 🐄");
    }

    #[test]
    fn test_variation_selector_removed() {
        let result = extractor().extract_leading_emoji("Love it \u{2764}\u{FE0F}");
        assert_eq!(result.image_id, "red_heart");
        assert_eq!(result.text, "Love it");
    }

    #[test]
    fn test_unmapped_emoji_untouched() {
        let result = extractor().extract_leading_emoji("Rocket 🚀 launch 😊");
        assert_eq!(result.image_id, "assistant");
        assert_eq!(result.text, "Rocket 🚀 launch 😊");
    }

    #[test]
    fn test_no_emoji() {
        let result = extractor().extract_leading_emoji("plain text");
        assert_eq!(result.image_id, "assistant");
        assert_eq!(result.text, "plain text");
    }
}
