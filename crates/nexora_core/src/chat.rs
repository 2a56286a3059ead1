use serde::{Deserialize, Serialize};

pub const CHAT_GREETING: &str = "Hi! I'm your AI Career Assistant. How can I help you today? You can ask me about career paths, skills, or anything else.";
pub const CHAT_FAILURE_REPLY: &str = "Sorry, something went wrong contacting the assistant.";
pub const INITIAL_SESSION_ID: &str = "current";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            role: Role::Bot,
            text: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatHistoryItem {
    pub session_id: String,
    pub title: String,
    pub last_message: String,
}

/// Free-form assistant conversation plus the list of past chats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSession {
    session_id: String,
    transcript: Vec<ChatMessage>,
    history: Vec<ChatHistoryItem>,
    awaiting_replies: usize,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(INITIAL_SESSION_ID)
    }
}

impl ChatSession {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            transcript: vec![ChatMessage::bot(CHAT_GREETING)],
            history: Vec::new(),
            awaiting_replies: 0,
        }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn history(&self) -> &[ChatHistoryItem] {
        &self.history
    }

    pub fn awaiting_replies(&self) -> usize {
        self.awaiting_replies
    }

    /// Appends a user message and returns the trimmed text to send, or `None`
    /// when the input is blank.
    pub fn submit(&mut self, raw: &str) -> Option<String> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let first_message = !self.transcript.iter().any(|m| m.role == Role::User);
        self.transcript.push(ChatMessage::user(text));

        match self
            .history
            .iter_mut()
            .find(|item| item.session_id == self.session_id)
        {
            Some(item) => item.last_message = text.to_string(),
            None if first_message => self.history.insert(
                0,
                ChatHistoryItem {
                    session_id: self.session_id.clone(),
                    title: chat_title(text),
                    last_message: text.to_string(),
                },
            ),
            None => {}
        }
        self.awaiting_replies += 1;
        Some(text.to_string())
    }

    /// Applies an assistant reply. Replies for another session are dropped;
    /// returns whether it was applied.
    pub fn receive(&mut self, session_id: &str, reply: Result<String, String>) -> bool {
        if session_id != self.session_id {
            return false;
        }
        self.awaiting_replies = self.awaiting_replies.saturating_sub(1);
        let text = match reply {
            Ok(text) => text,
            Err(_) => CHAT_FAILURE_REPLY.to_string(),
        };
        self.transcript.push(ChatMessage::bot(text));
        true
    }

    /// Starts a fresh conversation; the history list is kept.
    pub fn start_new(&mut self, session_id: impl Into<String>) {
        self.session_id = session_id.into();
        self.transcript = vec![ChatMessage::bot(CHAT_GREETING)];
        self.awaiting_replies = 0;
    }

    /// Removes a chat from history. Returns `true` when it was the active
    /// chat, in which case the caller must start a new one.
    pub fn delete(&mut self, session_id: &str) -> bool {
        self.history.retain(|item| item.session_id != session_id);
        session_id == self.session_id
    }
}

/// First three words, each capitalised, followed by an ellipsis.
pub fn chat_title(first_message: &str) -> String {
    let words: Vec<String> = first_message
        .to_lowercase()
        .split_whitespace()
        .take(3)
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect();
    format!("{}...", words.join(" "))
}
