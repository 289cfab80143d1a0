//! Share string diagnostics

use flexbuild::reference::{is_percent_stat, weapon_type_of, MAX_ARTIFACT_LEVEL, MAX_RARITY};
use flexbuild::{envelope, Artifact, EntityStore, CURRENT_VERSION};

pub fn handle(text: &str) {
    print!("{}", render(text));
}

/// Describe a share string's envelope and whether it loads
pub fn render(text: &str) -> String {
    let mut out = String::new();

    match envelope::unwrap(text) {
        Ok(env) => {
            let current = if env.version == CURRENT_VERSION { " (current)" } else { "" };
            out.push_str(&format!("version: {}{}\n", env.version, current));
            out.push_str(&format!("payload: {} chars\n", env.payload.len()));
        }
        Err(e) => {
            out.push_str(&format!("envelope: {}\n", e));
            return out;
        }
    }

    match flexbuild::try_parse_flex_object(text) {
        Ok(parsed) => {
            let artifacts = parsed.database.equipped_artifacts(&parsed.character_key).len();
            let weapon = parsed
                .database
                .get_character(&parsed.character_key)
                .and_then(|c| parsed.database.get_weapon(&c.equipped_weapon))
                .map_or_else(
                    || "no weapon".to_string(),
                    |w| match weapon_type_of(&w.key) {
                        Some(kind) => format!("{} {}", w.key, kind.name),
                        None => w.key.clone(),
                    },
                );
            out.push_str(&format!(
                "status: ok ({}, {}, {} artifacts)\n",
                parsed.character_key, weapon, artifacts
            ));
            for (id, artifact) in parsed.database.artifacts() {
                out.push_str(&format!("  {}: {}\n", id, describe_artifact(artifact)));
                for warning in artifact_warnings(artifact) {
                    out.push_str(&format!("    warning: {}\n", warning));
                }
            }
        }
        Err(e) => out.push_str(&format!("status: {}\n", e)),
    }

    out
}

fn describe_artifact(artifact: &Artifact) -> String {
    let substats: Vec<String> = artifact
        .substats
        .iter()
        .map(|s| {
            let unit = if is_percent_stat(&s.key) { "%" } else { "" };
            format!("{} {}{}", s.key, s.value, unit)
        })
        .collect();
    let place = if artifact.location.is_empty() {
        "unequipped"
    } else {
        artifact.slot_key.as_str()
    };
    format!(
        "{} {} {}* +{} {} [{}]",
        place,
        artifact.set_key,
        artifact.rarity,
        artifact.level,
        artifact.main_stat_key,
        substats.join(", ")
    )
}

/// Values the wire format can carry but no real artifact has
fn artifact_warnings(artifact: &Artifact) -> Vec<String> {
    let mut warnings = Vec::new();
    if artifact.rarity == 0 || artifact.rarity > MAX_RARITY {
        warnings.push(format!("rarity {} outside 1..={}", artifact.rarity, MAX_RARITY));
    }
    if artifact.level > MAX_ARTIFACT_LEVEL {
        warnings.push(format!("level {} above {}", artifact.level, MAX_ARTIFACT_LEVEL));
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_valid() {
        let out = render("v=2&d=IoUNEAAAAAAAAAqtZkGFKAkdROZDGlEI0uA");
        assert!(out.contains("version: 2 (current)"));
        assert!(out.contains("payload: 35 chars"));
        assert!(out.contains("status: ok (Diluc, SerpentSpine Claymore, 2 artifacts)"));
        assert!(out.contains(
            "artifact_1: flower CrimsonWitchOfFlames 5* +20 hp [critRate_ 3.9%, critDMG_ 7.8%]"
        ));
        assert!(!out.contains("warning"));
    }

    #[test]
    fn test_inspect_flags_impossible_artifacts() {
        let mut character = serde_json::to_value(flexbuild::Character::new("Noelle")).unwrap();
        character["weapon"] =
            serde_json::json!({ "key": "TheBell", "level": 1, "ascension": 0, "refinement": 1 });
        let value = serde_json::json!({
            "character": character,
            "artifacts": [{
                "setKey": "Gambler",
                "slotKey": "goblet",
                "level": 25,
                "rarity": 7,
                "mainStatKey": "eleMas",
                "substats": [{ "key": "eleMas", "value": 16 }],
            }],
        });
        let schema = flexbuild::schema_for_version(CURRENT_VERSION).unwrap();
        let share = envelope::wrap(CURRENT_VERSION, &flexbuild::encode(&value, schema).unwrap());

        let out = render(&share);
        assert!(out.contains("artifact_1: goblet Gambler 7* +25 eleMas [eleMas 16]"), "{}", out);
        assert!(out.contains("warning: rarity 7 outside 1..=5"));
        assert!(out.contains("warning: level 25 above 20"));
    }

    #[test]
    fn test_inspect_reports_field_path() {
        let out = render("v=2&d=_A");
        assert!(out.contains("character.key"), "{}", out);
    }

    #[test]
    fn test_inspect_unsupported_version() {
        let out = render("v=999&d=abc");
        assert!(out.contains("version: 999\n"));
        assert!(out.contains("unsupported protocol version 999"));
    }

    #[test]
    fn test_inspect_malformed() {
        let out = render("hello");
        assert!(out.starts_with("envelope: malformed envelope"));
    }
}
