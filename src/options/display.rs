use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which representation the combined mesh uses. Only the cartoon carries
/// the heteroatom mesh.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Ribbon cartoon along each chain plus heteroatoms and their bonds.
    #[default]
    Cartoon,
    /// Van der Waals spheres on each chain's reference atoms, nothing else.
    SpaceFilling,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Representation selection and record filtering.
pub struct DisplayOptions {
    /// Protein representation for the combined mesh.
    #[schemars(title = "Representation")]
    pub representation: Representation,
    /// Replicate the combined mesh under the structure's symmetry matrices.
    #[schemars(title = "Expand Symmetry")]
    pub expand_symmetry: bool,
    /// Residue names treated as water and skipped in the heteroatom mesh.
    pub water_residue_names: Vec<String>,
    /// Atom name marking a residue's position on the chain trace.
    pub reference_atom: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            representation: Representation::Cartoon,
            expand_symmetry: false,
            water_residue_names: vec!["HOH".to_owned()],
            reference_atom: "CA".to_owned(),
        }
    }
}

impl DisplayOptions {
    /// Whether a residue name is one of the configured water names.
    #[must_use]
    pub fn is_water(&self, res_name: &str) -> bool {
        let name = res_name.trim();
        self.water_residue_names.iter().any(|w| w == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_names_are_trimmed() {
        let display = DisplayOptions::default();
        assert!(display.is_water("HOH"));
        assert!(display.is_water(" HOH "));
        assert!(!display.is_water("HEM"));
    }
}
