//! Element, reaction and hit mode keys

/// Element keys, in wire order. Append only.
pub const ELEMENT_KEYS: &[&str] = &["anemo", "geo", "electro", "hydro", "pyro", "cryo", "dendro"];

/// Amplifying reaction modes, in wire order
pub const REACTION_MODES: &[&str] = &["pyro_vaporize", "pyro_melt", "hydro_vaporize", "cryo_melt"];

/// Damage display modes, in wire order
pub const HIT_MODES: &[&str] = &["avgHit", "hit", "critHit"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reactions_name_elements() {
        for mode in REACTION_MODES {
            let element = mode.split('_').next().unwrap();
            assert!(ELEMENT_KEYS.contains(&element), "{}", mode);
        }
    }
}
