use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum EventType {
    GateIn,
    GateOut,
}

impl EventType {
    /// Parse the `event_type` column (case-insensitive: "gate_in", "GATE_OUT", ...)
    pub fn et_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "gate_in" => Some(Self::GateIn),
            "gate_out" => Some(Self::GateOut),
            _ => None,
        }
    }

    pub fn et_as_str(&self) -> &'static str {
        match self {
            EventType::GateIn => "GATE_IN",
            EventType::GateOut => "GATE_OUT",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, EventType::GateIn)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, EventType::GateOut)
    }
}
