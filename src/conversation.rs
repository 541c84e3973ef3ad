use uuid::Uuid;

use crate::models::Product;

pub const WELCOME_MESSAGE: &str = "Welcome to FurniFindr! What are you looking for today? (e.g., 'a modern white chair' or 'a rustic bookshelf')";
pub const SEARCH_FAILED_MESSAGE: &str =
    "Sorry, I had trouble finding that. Please try another search.";

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Sender {
    User,
    Bot,
}

/// Payload of one turn. A turn is either plain text or a recommendation
/// set; there is no third case and no optional-field ambiguity.
#[derive(Clone, Debug, PartialEq)]
pub enum TurnBody {
    Text(String),
    Recommendations(Vec<Product>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatTurn {
    pub id: Uuid,
    pub sender: Sender,
    pub body: TurnBody,
}

impl ChatTurn {
    fn text(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            body: TurnBody::Text(content.into()),
        }
    }

    fn recommendations(items: Vec<Product>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender: Sender::Bot,
            body: TurnBody::Recommendations(items),
        }
    }
}

/// The append-only transcript of one chat view, plus the single-request
/// guard. Turns are never edited or reordered once pushed; the whole
/// thing is dropped when the user navigates away.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversation {
    turns: Vec<ChatTurn>,
    pending: bool,
    last_error: Option<String>,
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            turns: vec![ChatTurn::text(Sender::Bot, WELCOME_MESSAGE)],
            pending: false,
            last_error: None,
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Accepts a submission and returns the prompt to send, or `None` when
    /// the input is blank or a request is already in flight. `None` means
    /// nothing changed: no turn appended, no request to issue.
    pub fn begin_search(&mut self, input: &str) -> Option<String> {
        let prompt = input.trim();
        if prompt.is_empty() || self.pending {
            return None;
        }
        let prompt = prompt.to_string();
        self.turns.push(ChatTurn::text(Sender::User, prompt.clone()));
        self.pending = true;
        self.last_error = None;
        Some(prompt)
    }

    /// Lands the response for the in-flight request. Items stay in backend
    /// order; an empty set is still a valid answer.
    pub fn resolve_success(&mut self, items: Vec<Product>) {
        self.turns.push(ChatTurn::recommendations(items));
        self.pending = false;
    }

    pub fn resolve_failure(&mut self) {
        self.turns
            .push(ChatTurn::text(Sender::Bot, SEARCH_FAILED_MESSAGE));
        self.last_error = Some(SEARCH_FAILED_MESSAGE.to_string());
        self.pending = false;
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
