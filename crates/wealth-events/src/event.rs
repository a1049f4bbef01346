//! Tick Event Types
//!
//! Records of what happened during a simulation tick: agent moves and
//! wealth transfers. Events are observational only; the simulation never
//! reads them back.

use serde::{Deserialize, Serialize};

/// What happened in a single agent activation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// An agent relocated to a neighboring cell.
    Moved {
        agent_id: usize,
        from_x: u32,
        from_y: u32,
        to_x: u32,
        to_y: u32,
    },
    /// An agent gave one unit of wealth to a co-located agent.
    ///
    /// `from_agent` and `to_agent` may be equal: the giver is part of its
    /// own recipient pool, and a self-transfer leaves wealth unchanged.
    WealthTransferred {
        from_agent: usize,
        to_agent: usize,
        amount: u32,
    },
}

/// A single event, stamped with the tick it occurred on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickEvent {
    pub tick: u64,
    #[serde(flatten)]
    pub kind: EventKind,
}

impl TickEvent {
    pub fn new(tick: u64, kind: EventKind) -> Self {
        Self { tick, kind }
    }

    /// Returns true if this event is a wealth transfer.
    pub fn is_transfer(&self) -> bool {
        matches!(self.kind, EventKind::WealthTransferred { .. })
    }

    /// Returns true if this event is a move.
    pub fn is_move(&self) -> bool {
        matches!(self.kind, EventKind::Moved { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serialization() {
        let event = TickEvent::new(
            7,
            EventKind::WealthTransferred {
                from_agent: 3,
                to_agent: 5,
                amount: 1,
            },
        );

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"wealth_transferred""#));
        assert!(json.contains(r#""tick":7"#));

        let parsed: TickEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }

    #[test]
    fn test_move_event_roundtrip() {
        let event = TickEvent::new(
            0,
            EventKind::Moved {
                agent_id: 1,
                from_x: 0,
                from_y: 0,
                to_x: 1,
                to_y: 1,
            },
        );

        let json = serde_json::to_string(&event).unwrap();
        let parsed: TickEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
        assert!(parsed.is_move());
        assert!(!parsed.is_transfer());
    }
}
