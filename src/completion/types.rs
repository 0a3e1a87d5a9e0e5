use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

/// One message in the conversation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

/// Ordered, append-only conversation history.
///
/// Turns can only be added, never edited or removed; the vector is private
/// so the render layer reads it through [`turns`](Self::turns) while only
/// the reducer appends.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    pub fn push_user(&mut self, content: String) -> &Turn {
        self.push(Role::User, content)
    }

    pub fn push_assistant(&mut self, content: String) -> &Turn {
        self.push(Role::Assistant, content)
    }

    fn push(&mut self, role: Role, content: String) -> &Turn {
        self.turns.push(Turn { role, content });
        self.turns.last().expect("just pushed")
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }
}
