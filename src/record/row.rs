use std::fmt;

use serde::{Deserialize, Serialize};

/// One placement row: a horizontal strip of abutted sites.
///
/// Origin and step are in database units; `num_sites` is how many copies of
/// the site the row holds along its axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub name: String,
    /// Name of the site the row is tiled with.
    pub site: String,
    pub orig_x: i64,
    pub orig_y: i64,
    pub step_x: i64,
    pub step_y: i64,
    pub num_sites: u32,
    pub orient: String,
}

impl Row {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|=== BEGIN ROW ===|")?;
        writeln!(f, "name:              {}", self.name)?;
        writeln!(f, "site:              {}", self.site)?;
        writeln!(f, "(origX,origY):     {}, {}", self.orig_x, self.orig_y)?;
        writeln!(f, "(stepX,stepY):     {}, {}", self.step_x, self.step_y)?;
        writeln!(f, "numSites:          {}", self.num_sites)?;
        writeln!(f, "orientation:       {}", self.orient)?;
        writeln!(f, "|===  END  ROW ===|")
    }
}
