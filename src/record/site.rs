use std::fmt;

use serde::{Deserialize, Serialize};

/// One site definition: the unit tile placement rows are built from.
///
/// Symmetry labels render in declaration order and may repeat; this crate
/// does not interpret them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub kind: String,
    pub symmetries: Vec<String>,
}

impl Site {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|=== BEGIN SITE ===|")?;
        writeln!(f, "name:               {}", self.name)?;
        writeln!(f, "width:              {}", self.width)?;
        writeln!(f, "height:             {}", self.height)?;
        writeln!(f, "type:               {}", self.kind)?;
        for symmetry in &self.symmetries {
            writeln!(f, "symmetries:         {symmetry}")?;
        }
        writeln!(f, "|===  END  SITE ===|")
    }
}
