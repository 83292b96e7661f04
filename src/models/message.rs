use serde::{Deserialize, Serialize};

/// Non-attendance chatter retained from a transcript for audit/display.
/// Never classified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherMessage {
    pub sender_name: String,
    pub text: String,
    pub time: String,
    pub date: String,
}
