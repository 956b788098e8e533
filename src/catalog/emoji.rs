//! Pictograph to image id mapping for the built-in replies

use ahash::AHashMap;

const IMAGES: &[(char, &str)] = &[
    // faces
    ('😊', "smiling_face"),
    ('😄', "grinning_face"),
    ('😂', "tears_of_joy"),
    ('😎', "sunglasses"),
    ('🥰', "smiling_hearts"),
    ('😢', "crying_face"),
    ('😤', "steaming_face"),
    ('🥱', "yawning_face"),
    ('😴', "sleeping_face"),
    ('🤔', "thinking_face"),
    ('🤗', "hugging_face"),
    ('🤖', "robot"),
    // gestures
    ('👋', "wave"),
    ('👍', "thumbs_up"),
    ('🙋', "raised_hand"),
    ('🙏', "folded_hands"),
    ('👤', "person"),
    // hearts and symbols
    ('❤', "red_heart"),
    ('💜', "purple_heart"),
    ('✨', "sparkles"),
    ('⭐', "star"),
    ('💡', "light_bulb"),
    ('💬', "speech_balloon"),
    ('🔞', "under_eighteen"),
    // objects
    ('🛠', "tools"),
    ('🎂', "cake"),
    ('🏠', "house"),
    ('🍕', "pizza"),
    ('🎮', "video_game"),
    ('💸', "money"),
    ('📱', "phone"),
    ('💻', "laptop"),
    ('🔒', "lock"),
    ('🛡', "shield"),
    ('🔑', "key"),
    ('📧', "email"),
    ('📋', "clipboard"),
    ('💼', "briefcase"),
    ('🔔', "bell"),
    ('📞', "telephone"),
    ('⏰', "alarm_clock"),
    ('🎵', "music_note"),
    ('🎬', "clapper"),
    ('⚽', "soccer_ball"),
    ('📚', "books"),
    ('✈', "airplane"),
    ('🚪', "door"),
    ('🧩', "puzzle"),
    ('📅', "calendar"),
    ('🎲', "die"),
    ('🪙', "coin"),
    ('🧮', "abacus"),
    // nature
    ('☀', "sun"),
    ('🌙', "moon"),
    ('🌍', "globe"),
    ('🪐', "ringed_planet"),
    ('🐛', "bug"),
    ('🐶', "dog"),
    ('🐄', "cow"),
    ('🐻', "bear"),
    ('🐟', "fish"),
    ('🦌', "deer"),
    ('🐷', "pig"),
    ('🐂', "ox"),
    ('🐊', "crocodile"),
    ('🦕', "dinosaur"),
    ('🦉', "owl"),
    ('🦦', "otter"),
    ('🐌', "snail"),
    ('🐘', "elephant"),
];

pub fn images() -> AHashMap<char, &'static str> {
    IMAGES.iter().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_unique() {
        let map = images();
        assert_eq!(map.len(), IMAGES.len());
        let mut ids: Vec<_> = map.values().collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), IMAGES.len());
    }
}
