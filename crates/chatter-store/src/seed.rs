use chatter_types::models::Message;

/// The conversation every fresh server starts with.
pub fn default_messages() -> Vec<Message> {
    vec![
        Message::new(1, "Alice", "Hello, how are you?"),
        Message::new(2, "Bob", "I'm good, thanks! And you?"),
        Message::new(3, "Alice", "Doing well, just working on a project."),
    ]
}
