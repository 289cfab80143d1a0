//! Character keys

/// Every character key, in wire order.
///
/// The index of a key is its value on the wire: append new characters at
/// the end and never reorder.
pub const CHARACTER_KEYS: &[&str] = &[
    "Albedo",
    "Aloy",
    "Amber",
    "AratakiItto",
    "Barbara",
    "Beidou",
    "Bennett",
    "Chongyun",
    "Diluc",
    "Diona",
    "Eula",
    "Fischl",
    "Ganyu",
    "Gorou",
    "HuTao",
    "Jean",
    "KaedeharaKazuha",
    "Kaeya",
    "KamisatoAyaka",
    "Keqing",
    "Klee",
    "KujouSara",
    "Lisa",
    "Mona",
    "Ningguang",
    "Noelle",
    "Qiqi",
    "RaidenShogun",
    "Razor",
    "Rosaria",
    "SangonomiyaKokomi",
    "Sayu",
    "Shenhe",
    "Sucrose",
    "Tartaglia",
    "Thoma",
    "Traveler",
    "Venti",
    "Xiangling",
    "Xiao",
    "Xingqiu",
    "Xinyan",
    "YaeMiko",
    "Yanfei",
    "Yoimiya",
    "YunJin",
    "Zhongli",
];

/// Check whether a character key is known
pub fn is_character_key(key: &str) -> bool {
    CHARACTER_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_lookup() {
        assert!(is_character_key("Diluc"));
        assert!(is_character_key("Traveler"));
        assert!(!is_character_key("diluc"));
        assert!(!is_character_key(""));
    }
}
