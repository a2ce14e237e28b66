use crate::error::MedscreenError;
use crate::reference::schema::ReferenceTableDef;

const STANDARD_JSON: &str = include_str!("../../../../tables/standard.json");
const CBC_JSON: &str = include_str!("../../../../tables/cbc.json");
const LIPID_JSON: &str = include_str!("../../../../tables/lipid.json");

/// Available predefined reference panels.
pub const PRESETS: &[&str] = &["standard", "cbc", "lipid"];

/// Load a predefined reference panel by name.
pub fn load_preset(name: &str) -> Result<ReferenceTableDef, MedscreenError> {
    let json = match name {
        "standard" => STANDARD_JSON,
        "cbc" => CBC_JSON,
        "lipid" => LIPID_JSON,
        _ => {
            return Err(MedscreenError::TableInvalid(format!(
                "unknown panel '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let table: ReferenceTableDef = serde_json::from_str(json)?;
    Ok(table)
}
