//! Transcript and turn types for conversation sessions.
//!
//! A session owns one `Transcript`: an ordered sequence of `Turn`s.
//! Turns are immutable once appended; the transcript only ever grows at
//! the back and evicts from the front when the retention cap is hit.

use serde::{Deserialize, Serialize};

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

/// Maximum number of turns retained per transcript.
///
/// Appending beyond this evicts the oldest turns from the front until the
/// length equals the cap, keeping provider requests bounded.
pub const MAX_TURNS: usize = 20;

/// Who authored a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// One message in a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    /// Build a user turn.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            text: text.into(),
        }
    }

    /// Build an assistant turn.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            text: text.into(),
        }
    }
}

/// The ordered turn history of one session.
///
/// Insertion order is meaningful: it is the dialogue order sent to the
/// generation provider. Alternation of roles is not structurally
/// enforced; any append order is accepted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: VecDeque<Turn>,
}

impl Transcript {
    /// Create an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn, then evict from the front until the length is at
    /// most [`MAX_TURNS`]. Relative order of the remainder is preserved.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push_back(turn);
        while self.turns.len() > MAX_TURNS {
            self.turns.pop_front();
        }
    }

    /// Ordered view of the turns, oldest first.
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recently appended turn, if any.
    pub fn last(&self) -> Option<&Turn> {
        self.turns.back()
    }

    /// Join the turn texts in order with newlines, discarding role labels.
    ///
    /// This is the documented provider-input simplification: the provider
    /// sees flattened dialogue text, not structured role turns.
    pub fn flatten(&self) -> String {
        self.turns
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Clone the turns into a plain vector (for snapshots and tests).
    pub fn to_vec(&self) -> Vec<Turn> {
        self.turns.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_roundtrip() {
        for role in [TurnRole::User, TurnRole::Assistant] {
            let s = role.to_string();
            let parsed: TurnRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_turn_role_serde() {
        let json = serde_json::to_string(&TurnRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: TurnRole = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, TurnRole::Assistant);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut t = Transcript::new();
        t.push(Turn::user("one"));
        t.push(Turn::assistant("two"));
        t.push(Turn::user("three"));

        let texts: Vec<_> = t.turns().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["one", "two", "three"]);
        assert_eq!(t.last().unwrap().text, "three");
    }

    #[test]
    fn test_cap_never_exceeded() {
        let mut t = Transcript::new();
        for i in 0..100 {
            t.push(Turn::user(format!("msg-{i}")));
            assert!(t.len() <= MAX_TURNS);
        }
        assert_eq!(t.len(), MAX_TURNS);
    }

    #[test]
    fn test_eviction_keeps_most_recent_in_order() {
        let mut t = Transcript::new();
        for i in 0..25 {
            t.push(Turn::user(format!("msg-{i}")));
        }

        // 25 appended, 20 kept: msg-5 .. msg-24 in original relative order.
        let texts: Vec<_> = t.turns().map(|t| t.text.clone()).collect();
        let expected: Vec<_> = (5..25).map(|i| format!("msg-{i}")).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn test_any_append_order_accepted() {
        let mut t = Transcript::new();
        t.push(Turn::assistant("unprompted"));
        t.push(Turn::assistant("again"));
        t.push(Turn::user("finally"));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn test_flatten_joins_texts_without_roles() {
        let mut t = Transcript::new();
        t.push(Turn::user("Hello"));
        t.push(Turn::assistant("Namaste!"));
        t.push(Turn::user("When is Diwali?"));
        assert_eq!(t.flatten(), "Hello\nNamaste!\nWhen is Diwali?");
    }

    #[test]
    fn test_flatten_empty() {
        assert_eq!(Transcript::new().flatten(), "");
    }
}
