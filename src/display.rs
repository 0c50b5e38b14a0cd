use crate::client::ClassId;

/// One state of the display area. The submission flow emits these; whoever
/// owns the actual output (terminal, test recorder) renders them, so the flow
/// itself never touches stdout.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayMessage {
    /// Previous content discarded.
    Cleared,
    /// Input was empty after trimming; nothing was sent.
    EmptyInput,
    /// A request is in flight.
    InProgress,
    /// Successful classification.
    Prediction { category: String, class: ClassId },
    /// The backend answered but rejected the query; shown verbatim.
    ServerError(String),
    /// Transport failure, error status, or undecodable body.
    ConnectionFailed { base_url: String },
    /// The backend's health banner, shown verbatim.
    Banner(String),
}

impl DisplayMessage {
    pub fn render(&self) -> String {
        match self {
            Self::Cleared => String::new(),
            Self::EmptyInput => "⚠️ Please enter some text before predicting.".to_string(),
            Self::InProgress => "⏳ Predicting category... please wait.".to_string(),
            Self::Prediction { category, class } => {
                format!("✅ Predicted Category: {}\n🏷️ Class ID: {}", category, class)
            }
            Self::ServerError(error) => format!("⚠️ {}", error),
            Self::ConnectionFailed { base_url } => format!(
                "❌ Unable to connect to backend. Make sure the backend is running at {}",
                base_url
            ),
            Self::Banner(banner) => banner.clone(),
        }
    }
}

pub trait DisplaySink: Send {
    fn show(&mut self, message: DisplayMessage);
}

/// Prints rendered messages to stdout. `Cleared` prints nothing; a terminal
/// has no display area to wipe, the next message simply scrolls in.
#[derive(Debug, Default)]
pub struct Terminal;

impl DisplaySink for Terminal {
    fn show(&mut self, message: DisplayMessage) {
        match message {
            DisplayMessage::Cleared => {}
            other => println!("{}", other.render()),
        }
    }
}
