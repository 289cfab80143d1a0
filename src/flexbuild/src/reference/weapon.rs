//! Weapon keys, grouped by weapon type

/// Weapon type information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponType {
    pub code: &'static str,
    pub name: &'static str,
}

/// All weapon types
pub const WEAPON_TYPES: &[WeaponType] = &[
    WeaponType {
        code: "sword",
        name: "Sword",
    },
    WeaponType {
        code: "claymore",
        name: "Claymore",
    },
    WeaponType {
        code: "polearm",
        name: "Polearm",
    },
    WeaponType {
        code: "bow",
        name: "Bow",
    },
    WeaponType {
        code: "catalyst",
        name: "Catalyst",
    },
];

const SWORDS: &[&str] = &[
    "AmenomaKageuchi",
    "AquilaFavonia",
    "BlackcliffLongsword",
    "CinnabarSpindle",
    "CoolSteel",
    "DarkIronSword",
    "DullBlade",
    "FavoniusSword",
    "FesteringDesire",
    "FilletBlade",
    "FreedomSworn",
    "HarbingerOfDawn",
    "IronSting",
    "LionsRoar",
    "MistsplitterReforged",
    "PrimordialJadeCutter",
    "PrototypeRancour",
    "RoyalLongsword",
    "SacrificialSword",
    "SilverSword",
    "SkyriderSword",
    "SkywardBlade",
    "SummitShaper",
    "SwordOfDescension",
    "TheAlleyFlash",
    "TheBlackSword",
    "TheFlute",
    "TravelersHandySword",
];

const CLAYMORES: &[&str] = &[
    "BlackcliffSlasher",
    "BloodtaintedGreatsword",
    "DebateClub",
    "FavoniusGreatsword",
    "FerrousShadow",
    "KatsuragikiriNagamasa",
    "LithicBlade",
    "LuxuriousSeaLord",
    "OldMercsPal",
    "PrototypeArchaic",
    "Rainslasher",
    "RedhornStonethresher",
    "RoyalGreatsword",
    "SacrificialGreatsword",
    "SerpentSpine",
    "SkyriderGreatsword",
    "SkywardPride",
    "SnowTombedStarsilver",
    "SongOfBrokenPines",
    "TheBell",
    "TheUnforged",
    "WasterGreatsword",
    "Whiteblind",
    "WhiteIronGreatsword",
    "WolfsGravestone",
];

const POLEARMS: &[&str] = &[
    "BeginnersProtector",
    "BlackcliffPole",
    "CalamityQueller",
    "CrescentPike",
    "Deathmatch",
    "DragonsBane",
    "DragonspineSpear",
    "EngulfingLightning",
    "FavoniusLance",
    "Halberd",
    "IronPoint",
    "KitainCrossSpear",
    "LithicSpear",
    "PrimordialJadeWingedSpear",
    "PrototypeStarglitter",
    "RoyalSpear",
    "SkywardSpine",
    "StaffOfHoma",
    "TheCatch",
    "VortexVanquisher",
    "WavebreakersFin",
    "WhiteTassel",
];

const BOWS: &[&str] = &[
    "AlleyHunter",
    "AmosBow",
    "BlackcliffWarbow",
    "CompoundBow",
    "ElegyForTheEnd",
    "FavoniusWarbow",
    "Hamayumi",
    "HuntersBow",
    "Messenger",
    "MitternachtsWaltz",
    "MouunsMoon",
    "PolarStar",
    "Predator",
    "PrototypeCrescent",
    "RavenBow",
    "RecurveBow",
    "RoyalBow",
    "Rust",
    "SacrificialBow",
    "SeasonedHuntersBow",
    "SharpshootersOath",
    "SkywardHarp",
    "Slingshot",
    "TheStringless",
    "TheViridescentHunt",
    "ThunderingPulse",
    "WindblumeOde",
];

const CATALYSTS: &[&str] = &[
    "ApprenticesNotes",
    "BlackcliffAgate",
    "DodocoTales",
    "EmeraldOrb",
    "EverlastingMoonglow",
    "EyeOfPerception",
    "FavoniusCodex",
    "Frostbearer",
    "HakushinRing",
    "KagurasVerity",
    "LostPrayerToTheSacredWinds",
    "MagicGuide",
    "MappaMare",
    "MemoryOfDust",
    "OathswornEye",
    "OtherworldlyStory",
    "PocketGrimoire",
    "PrototypeAmber",
    "RoyalGrimoire",
    "SacrificialFragments",
    "SkywardAtlas",
    "SolarPearl",
    "TheWidsith",
    "ThrillingTalesOfDragonSlayers",
    "TwinNephrite",
    "WineAndSong",
];

/// Weapon keys per type code, in the same order as [`WEAPON_TYPES`]
const WEAPONS_BY_TYPE: &[(&str, &[&str])] = &[
    ("sword", SWORDS),
    ("claymore", CLAYMORES),
    ("polearm", POLEARMS),
    ("bow", BOWS),
    ("catalyst", CATALYSTS),
];

/// Every weapon key, in wire order (swords, claymores, polearms, bows,
/// catalysts). Append only.
pub const WEAPON_KEYS: &[&str] = &[
    // Swords
    "AmenomaKageuchi",
    "AquilaFavonia",
    "BlackcliffLongsword",
    "CinnabarSpindle",
    "CoolSteel",
    "DarkIronSword",
    "DullBlade",
    "FavoniusSword",
    "FesteringDesire",
    "FilletBlade",
    "FreedomSworn",
    "HarbingerOfDawn",
    "IronSting",
    "LionsRoar",
    "MistsplitterReforged",
    "PrimordialJadeCutter",
    "PrototypeRancour",
    "RoyalLongsword",
    "SacrificialSword",
    "SilverSword",
    "SkyriderSword",
    "SkywardBlade",
    "SummitShaper",
    "SwordOfDescension",
    "TheAlleyFlash",
    "TheBlackSword",
    "TheFlute",
    "TravelersHandySword",
    // Claymores
    "BlackcliffSlasher",
    "BloodtaintedGreatsword",
    "DebateClub",
    "FavoniusGreatsword",
    "FerrousShadow",
    "KatsuragikiriNagamasa",
    "LithicBlade",
    "LuxuriousSeaLord",
    "OldMercsPal",
    "PrototypeArchaic",
    "Rainslasher",
    "RedhornStonethresher",
    "RoyalGreatsword",
    "SacrificialGreatsword",
    "SerpentSpine",
    "SkyriderGreatsword",
    "SkywardPride",
    "SnowTombedStarsilver",
    "SongOfBrokenPines",
    "TheBell",
    "TheUnforged",
    "WasterGreatsword",
    "Whiteblind",
    "WhiteIronGreatsword",
    "WolfsGravestone",
    // Polearms
    "BeginnersProtector",
    "BlackcliffPole",
    "CalamityQueller",
    "CrescentPike",
    "Deathmatch",
    "DragonsBane",
    "DragonspineSpear",
    "EngulfingLightning",
    "FavoniusLance",
    "Halberd",
    "IronPoint",
    "KitainCrossSpear",
    "LithicSpear",
    "PrimordialJadeWingedSpear",
    "PrototypeStarglitter",
    "RoyalSpear",
    "SkywardSpine",
    "StaffOfHoma",
    "TheCatch",
    "VortexVanquisher",
    "WavebreakersFin",
    "WhiteTassel",
    // Bows
    "AlleyHunter",
    "AmosBow",
    "BlackcliffWarbow",
    "CompoundBow",
    "ElegyForTheEnd",
    "FavoniusWarbow",
    "Hamayumi",
    "HuntersBow",
    "Messenger",
    "MitternachtsWaltz",
    "MouunsMoon",
    "PolarStar",
    "Predator",
    "PrototypeCrescent",
    "RavenBow",
    "RecurveBow",
    "RoyalBow",
    "Rust",
    "SacrificialBow",
    "SeasonedHuntersBow",
    "SharpshootersOath",
    "SkywardHarp",
    "Slingshot",
    "TheStringless",
    "TheViridescentHunt",
    "ThunderingPulse",
    "WindblumeOde",
    // Catalysts
    "ApprenticesNotes",
    "BlackcliffAgate",
    "DodocoTales",
    "EmeraldOrb",
    "EverlastingMoonglow",
    "EyeOfPerception",
    "FavoniusCodex",
    "Frostbearer",
    "HakushinRing",
    "KagurasVerity",
    "LostPrayerToTheSacredWinds",
    "MagicGuide",
    "MappaMare",
    "MemoryOfDust",
    "OathswornEye",
    "OtherworldlyStory",
    "PocketGrimoire",
    "PrototypeAmber",
    "RoyalGrimoire",
    "SacrificialFragments",
    "SkywardAtlas",
    "SolarPearl",
    "TheWidsith",
    "ThrillingTalesOfDragonSlayers",
    "TwinNephrite",
    "WineAndSong",
];

/// Get the weapon type of a weapon key
pub fn weapon_type_of(key: &str) -> Option<&'static WeaponType> {
    let (code, _) = WEAPONS_BY_TYPE
        .iter()
        .find(|(_, keys)| keys.contains(&key))?;
    WEAPON_TYPES.iter().find(|t| t.code == *code)
}
