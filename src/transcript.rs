use crate::chat_message::ChatMessage;

/// The in-memory conversation history. Messages are kept strictly in
/// insertion order and never reordered or dropped while the app runs.
#[derive(Debug, Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(ChatMessage::user(text));
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.push(ChatMessage::bot(text));
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_message::Sender;

    #[test]
    fn messages_keep_insertion_order() {
        let mut transcript = Transcript::new();
        transcript.push_user("first");
        transcript.push_bot("second");
        transcript.push_user("third");

        let texts: Vec<&str> = transcript.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "third"]);

        let senders: Vec<Sender> = transcript.iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::User, Sender::Bot, Sender::User]);
    }

    #[test]
    fn last_returns_newest_message() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert!(transcript.last().is_none());

        transcript.push_user("hello");
        transcript.push_bot("hi");

        assert_eq!(transcript.len(), 2);
        assert_eq!(
            transcript.last().map(|m| m.text.as_str()),
            Some("hi")
        );
    }
}
