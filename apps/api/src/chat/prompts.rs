// Prompt construction for the guidance chatbot.

use crate::chat::ChatTurn;

const CHAT_SYSTEM: &str = "You are a friendly career guidance counsellor for students in India. \
    Answer concisely and practically. \
    When asked about careers, mention realistic education paths and local training options.";

/// Renders the session history plus the new message into one prompt.
pub fn render_chat_prompt(history: &[ChatTurn], message: &str) -> String {
    let mut prompt = String::from(CHAT_SYSTEM);
    prompt.push_str("\n\n");
    for turn in history {
        prompt.push_str("Student: ");
        prompt.push_str(&turn.user);
        prompt.push('\n');
        prompt.push_str("Counsellor: ");
        prompt.push_str(&turn.bot);
        prompt.push('\n');
    }
    prompt.push_str("Student: ");
    prompt.push_str(message);
    prompt.push_str("\nCounsellor:");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_renders_in_order_before_new_message() {
        let history = vec![ChatTurn {
            user: "What does a tailor earn?".to_string(),
            bot: "It varies by region.".to_string(),
        }];
        let prompt = render_chat_prompt(&history, "And a nurse?");
        let tailor = prompt.find("What does a tailor earn?").unwrap();
        let nurse = prompt.find("And a nurse?").unwrap();
        assert!(tailor < nurse);
        assert!(prompt.ends_with("Counsellor:"));
    }
}
