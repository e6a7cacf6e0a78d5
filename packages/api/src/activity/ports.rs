//! Port names and shapes
//!
//! Ports are static: they do not depend on the configured expression.

/// Input port carrying the JSON document as text
pub const IN_JSON: &str = "json_text";
/// Text rendering of the first match
pub const SINGLE_VALUE_TEXT: &str = "firstNode";
/// JSON rendering of the first match
pub const SINGLE_VALUE_JSON: &str = "firstNodeAsJSON";
/// Text rendering of every match
pub const OUT_TEXT: &str = "nodelist";
/// JSON rendering of every match
pub const OUT_JSON: &str = "nodelistAsJSON";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortDirection {
    Input,
    Output,
}

/// Name, direction and list depth of one port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortDefinition {
    pub name: &'static str,
    pub direction: PortDirection,
    /// 0 for a single value, 1 for a list
    pub depth: u8,
}

impl PortDefinition {
    const fn new(name: &'static str, direction: PortDirection, depth: u8) -> Self {
        Self {
            name,
            direction,
            depth,
        }
    }
}

/// Every port of the activity, inputs first
#[must_use]
pub fn ports() -> [PortDefinition; 5] {
    [
        PortDefinition::new(IN_JSON, PortDirection::Input, 0),
        PortDefinition::new(SINGLE_VALUE_TEXT, PortDirection::Output, 0),
        PortDefinition::new(SINGLE_VALUE_JSON, PortDirection::Output, 0),
        PortDefinition::new(OUT_TEXT, PortDirection::Output, 1),
        PortDefinition::new(OUT_JSON, PortDirection::Output, 1),
    ]
}
