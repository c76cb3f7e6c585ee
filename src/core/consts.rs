pub const STATE_TYPE: &str = "state_type";
pub const ACTION_TYPE: &str = "action_type";
pub const ACTION_VAR: &str = "action";
pub const FIELD_PREFIX: &str = "field";
pub const WILDCARD: &str = "*";

pub const CORNER_MARKER: char = 'X';
pub const ALCOVE_MARKER: char = 'A';
