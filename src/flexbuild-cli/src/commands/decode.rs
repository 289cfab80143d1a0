//! Share string decoding

use anyhow::{Context, Result};
use flexbuild::{Artifact, Character, EntityStore, ParsedFlex, Weapon};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Everything a share string carries, as reconstructed
#[derive(Serialize)]
struct SharedBuild<'a> {
    version: u32,
    character: &'a Character,
    weapon: Option<&'a Weapon>,
    artifacts: Vec<&'a Artifact>,
    /// Shared artifacts that lost their slot to an earlier one
    #[serde(skip_serializing_if = "Vec::is_empty")]
    orphans: Vec<&'a Artifact>,
}

impl<'a> SharedBuild<'a> {
    fn from_parsed(parsed: &'a ParsedFlex) -> Result<Self> {
        let character = parsed
            .database
            .get_character(&parsed.character_key)
            .context("Shared character missing from store")?;
        let orphans = parsed
            .database
            .artifacts()
            .filter(|(_, artifact)| artifact.location.is_empty())
            .map(|(_, artifact)| artifact)
            .collect();
        Ok(Self {
            version: parsed.version,
            character,
            weapon: parsed
                .database
                .equipped_weapon(&parsed.character_key)
                .map(|(_, weapon)| weapon),
            artifacts: parsed
                .database
                .equipped_artifacts(&parsed.character_key)
                .into_iter()
                .map(|(_, artifact)| artifact)
                .collect(),
            orphans,
        })
    }
}

pub fn handle(text: &str, pretty: bool, format: OutputFormat) -> Result<()> {
    print!("{}", render(text, pretty, format)?);
    Ok(())
}

/// Parse a share string and render its contents
pub fn render(text: &str, pretty: bool, format: OutputFormat) -> Result<String> {
    let parsed = flexbuild::try_parse_flex_object(text).context("Failed to load share string")?;
    if !parsed.is_current() {
        tracing::info!(version = parsed.version, "share uses an older protocol version");
    }
    let build = SharedBuild::from_parsed(&parsed)?;

    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(&build)? + "\n",
        OutputFormat::Json => serde_json::to_string(&build)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(&build)?,
    };
    Ok(rendered)
}
