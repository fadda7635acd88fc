use std::time::Duration;

use academy_core::chatbot::{ChatReply, Chatbot, FALLBACK_RESPONSES, GREETING};
use academy_core::model::{ChatMessage, Sender};
use rand::Rng;
use rand::rng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::Clock;

/// Pacing for bot replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatConfig {
    pub response_delay: Duration,
}

impl ChatConfig {
    pub const DEFAULT_RESPONSE_DELAY: Duration = Duration::from_millis(500);

    /// No pause before replies; handy for scripted use.
    #[must_use]
    pub fn immediate() -> Self {
        Self {
            response_delay: Duration::ZERO,
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            response_delay: Self::DEFAULT_RESPONSE_DELAY,
        }
    }
}

/// One in-memory conversation with the study assistant.
///
/// The transcript is not persisted.
#[derive(Debug, Clone)]
pub struct ChatSession {
    clock: Clock,
    config: ChatConfig,
    bot: Chatbot,
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl ChatSession {
    /// New conversation opened by the bot's greeting.
    #[must_use]
    pub fn new(clock: Clock, config: ChatConfig) -> Self {
        let mut session = Self {
            clock,
            config,
            bot: Chatbot::new(),
            messages: Vec::new(),
            next_id: 1,
        };
        session.push(GREETING.to_owned(), Sender::Bot);
        session
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Send a user message and wait for the bot's reply.
    ///
    /// Blank input is ignored and yields `None`. The transcript keeps the
    /// text exactly as sent.
    pub async fn send(&mut self, text: &str) -> Option<ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.push(text.to_owned(), Sender::User);

        if !self.config.response_delay.is_zero() {
            tokio::time::sleep(self.config.response_delay).await;
        }

        let reply = reply_text(&self.bot, text, &mut rng());
        Some(self.push(reply.to_owned(), Sender::Bot))
    }

    fn push(&mut self, text: String, sender: Sender) -> ChatMessage {
        let message = ChatMessage {
            id: self.next_id,
            text,
            sender,
            timestamp: self.clock.now(),
        };
        self.next_id += 1;
        self.messages.push(message.clone());
        message
    }
}

fn reply_text<R: Rng + ?Sized>(bot: &Chatbot, input: &str, rng: &mut R) -> &'static str {
    match bot.respond(input) {
        ChatReply::Matched { keyword, response } => {
            debug!(keyword, "chatbot keyword matched");
            response
        }
        ChatReply::Fallback => {
            debug!("chatbot fallback");
            FALLBACK_RESPONSES
                .choose(rng)
                .copied()
                .unwrap_or(FALLBACK_RESPONSES[0])
        }
    }
}
