use std::fmt;

use serde::{Deserialize, Serialize};

/// Insertion-ordered mapping from port name to a numeric attribute.
///
/// Keys are unique; inserting an existing name replaces its value without
/// moving the entry. Iteration follows first-insertion order, which keeps
/// the dump of the owning [`Cell`] stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ports {
    entries: Vec<(String, u32)>,
}

impl Ports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `name` to `value`, replacing any previous value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: u32) {
        let name = name.into();
        match self.entries.iter().position(|(key, _)| *key == name) {
            Some(at) => self.entries[at].1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }
}

/// One placeable instance in the design.
///
/// `init_x`/`init_y` hold the position the source file declared; `x`/`y`
/// hold the position currently assigned. The two pairs start out equal and
/// diverge once something downstream moves the cell. Coordinates and
/// dimensions carry whatever unit the source file uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub name: String,
    /// Master this instance was stamped from.
    pub kind: String,
    pub orient: String,
    pub is_fixed: bool,
    pub ports: Ports,
    pub init_x: f64,
    pub init_y: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Cell {
    /// A movable cell named `name` with every other field at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "|=== BEGIN CELL ===|")?;
        writeln!(f, "name:               {}", self.name)?;
        writeln!(f, "type:               {}", self.kind)?;
        writeln!(f, "orient:             {}", self.orient)?;
        writeln!(f, "isFixed?            {}", self.is_fixed)?;
        for (port, value) in self.ports.iter() {
            writeln!(f, "port: {port} - {value}")?;
        }
        writeln!(f, "(init_x,  init_y):  {}, {}", self.init_x, self.init_y)?;
        writeln!(f, "(x_coord,y_coord):  {}, {}", self.x, self.y)?;
        writeln!(f, "[width,height]:      {}, {}", self.width, self.height)?;
        writeln!(f, "|===  END  CELL ===|")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ports_keep_insertion_order() {
        let mut ports = Ports::new();
        ports.insert("b", 2);
        ports.insert("a", 1);
        ports.insert("c", 3);
        let order: Vec<_> = ports.iter().collect();
        assert_eq!(order, vec![("b", 2), ("a", 1), ("c", 3)]);
    }

    #[test]
    fn reinserting_a_port_replaces_in_place() {
        let mut ports = Ports::new();
        ports.insert("a", 1);
        ports.insert("b", 2);
        ports.insert("a", 9);
        let order: Vec<_> = ports.iter().collect();
        assert_eq!(order, vec![("a", 9), ("b", 2)]);
        assert_eq!(ports.get("a"), Some(9));
        assert_eq!(ports.len(), 2);
    }

    #[test]
    fn missing_port_is_none() {
        assert_eq!(Ports::new().get("a"), None);
    }

    #[test]
    fn new_cell_is_movable() {
        assert!(!Cell::new("u1").is_fixed);
    }

    #[test]
    fn dump_lists_every_field_in_order() {
        let mut cell = Cell::new("clk_buf_1");
        cell.kind = "BUFX4".to_owned();
        cell.orient = "N".to_owned();
        cell.is_fixed = true;
        cell.ports.insert("A", 3);
        cell.ports.insert("Y", 7);
        cell.init_x = 120.0;
        cell.init_y = 80.5;
        cell.x = 124.0;
        cell.y = 80.5;
        cell.width = 4.6;
        cell.height = 9.2;

        assert_eq!(
            cell.to_string(),
            "\
|=== BEGIN CELL ===|
name:               clk_buf_1
type:               BUFX4
orient:             N
isFixed?            true
port: A - 3
port: Y - 7
(init_x,  init_y):  120, 80.5
(x_coord,y_coord):  124, 80.5
[width,height]:      4.6, 9.2
|===  END  CELL ===|
",
        );
    }

    #[test]
    fn serialized_cell_round_trips() {
        let mut cell = Cell::new("u2");
        cell.kind = "INVX1".to_owned();
        cell.ports.insert("A", 1);
        cell.width = 2.3;
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
    }
}
