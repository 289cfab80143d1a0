//! Artifact set and slot keys

/// Every artifact set key, in wire order. Append only.
pub const ARTIFACT_SET_KEYS: &[&str] = &[
    "Adventurer",
    "ArchaicPetra",
    "Berserker",
    "BlizzardStrayer",
    "BloodstainedChivalry",
    "BraveHeart",
    "CrimsonWitchOfFlames",
    "DefendersWill",
    "EmblemOfSeveredFate",
    "Gambler",
    "GladiatorsFinale",
    "HeartOfDepth",
    "HuskOfOpulentDreams",
    "Instructor",
    "Lavawalker",
    "LuckyDog",
    "MaidenBeloved",
    "MartialArtist",
    "NoblesseOblige",
    "OceanHuedClam",
    "PaleFlame",
    "PrayersForDestiny",
    "PrayersForIllumination",
    "PrayersForWisdom",
    "PrayersToSpringtime",
    "ResolutionOfSojourner",
    "RetracingBolide",
    "Scholar",
    "ShimenawasReminiscence",
    "TenacityOfTheMillelith",
    "TheExile",
    "ThunderingFury",
    "Thundersoother",
    "TinyMiracle",
    "TravelingDoctor",
    "ViridescentVenerer",
    "WanderersTroupe",
];

/// Equipment slot keys, in wire order
pub const SLOT_KEYS: &[&str] = &["flower", "plume", "sands", "goblet", "circlet"];

/// Highest artifact rarity
pub const MAX_RARITY: u8 = 5;

/// Highest artifact enhancement level
pub const MAX_ARTIFACT_LEVEL: u8 = 20;
