use std::fmt;

use serde::{Deserialize, Serialize};

/// Utilization diagnostics for one spatial bin of the placement area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DensityBin {
    pub area: f64,
    /// Area occupied by movable cells.
    pub m_util: f64,
    /// Area occupied by fixed cells.
    pub f_util: f64,
    pub free_space: f64,
    pub overflow: f64,
    pub density_limit: f64,
}

impl fmt::Display for DensityBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|=== BEGIN DENSITY_BIN ===|")?;
        writeln!(f, " area :        {}", self.area)?;
        writeln!(f, " m_util :      {}", self.m_util)?;
        writeln!(f, " f_util :      {}", self.f_util)?;
        writeln!(f, " free_space :  {}", self.free_space)?;
        writeln!(f, " overflow :    {}", self.overflow)?;
        writeln!(f, " density limit:{}", self.density_limit)?;
        writeln!(f, "|===  END  DENSITY_BIN ===|")
    }
}
