use crate::{
    Result,
    client::{BackendClient, HttpBackendClient, PredictionResponse, Query},
    config::Config,
    display::{DisplayMessage, DisplaySink, Terminal},
    examples,
};
use tokio::io::AsyncBufReadExt;
use tracing::{error, info};

/// Runs one submission end to end: discard the previous display content,
/// validate the input, announce progress, call the backend, and map the
/// outcome to a display message.
///
/// Overlapping calls are deliberately not sequenced; two submissions sharing
/// a sink race, and the later finisher owns the final display write.
pub async fn submit_prediction(
    client: &dyn BackendClient,
    raw_text: &str,
    sink: &mut dyn DisplaySink,
) {
    sink.show(DisplayMessage::Cleared);

    let Some(query) = Query::parse(raw_text) else {
        sink.show(DisplayMessage::EmptyInput);
        return;
    };

    info!("Submitting prediction for {} bytes of text", query.text().len());
    sink.show(DisplayMessage::InProgress);

    match client.predict(&query).await {
        Ok(PredictionResponse::Label {
            category,
            predicted_class,
        }) => {
            info!("Prediction succeeded: category={}", category);
            sink.show(DisplayMessage::Prediction {
                category,
                class: predicted_class,
            });
        }
        Ok(PredictionResponse::Rejected { error }) => {
            info!("Backend rejected the query: {}", error);
            sink.show(DisplayMessage::ServerError(error));
        }
        Err(e) => {
            // Diagnostics stay on the log channel; the user gets the fixed
            // connectivity message.
            error!("Prediction request failed: {}", e);
            sink.show(DisplayMessage::ConnectionFailed {
                base_url: client.base_url().to_string(),
            });
        }
    }
}

/// The interactive session: the current input buffer (the "text field") plus
/// the backend client it submits through.
pub struct Workbench {
    client: Box<dyn BackendClient>,
    input: String,
}

impl Workbench {
    pub fn new(client: Box<dyn BackendClient>) -> Self {
        Self {
            client,
            input: String::new(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Copies the canned text for `id` into the input buffer and clears the
    /// display. An unknown id loads the empty string; that is not an error.
    pub fn load_example(&mut self, id: u8, sink: &mut dyn DisplaySink) {
        self.input = examples::example_text(id).unwrap_or_default().to_string();
        sink.show(DisplayMessage::Cleared);
    }

    /// Submits whatever the input buffer currently holds.
    pub async fn submit(&self, sink: &mut dyn DisplaySink) {
        submit_prediction(self.client.as_ref(), &self.input, sink).await;
    }

    /// Asks the backend for its banner; unreachable backends surface the same
    /// fixed connectivity message as a failed prediction.
    pub async fn health(&self, sink: &mut dyn DisplaySink) {
        match self.client.health().await {
            Ok(banner) => sink.show(DisplayMessage::Banner(banner)),
            Err(e) => {
                error!("Health check failed: {}", e);
                sink.show(DisplayMessage::ConnectionFailed {
                    base_url: self.client.base_url().to_string(),
                });
            }
        }
    }
}

/// One parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// A plain text line: load it into the buffer and submit.
    Predict(String),
    LoadExample(u8),
    /// Submit the buffer as-is (useful after `/example`).
    Submit,
    /// Print the buffer.
    Show,
    Health,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Self::Predict(trimmed.to_string());
        };

        let mut parts = rest.split_whitespace();
        match parts.next() {
            Some("example") => {
                // The id is passed through unvalidated; anything that is not
                // a known id ends up loading the empty string.
                let id = parts.next().and_then(|arg| arg.parse().ok()).unwrap_or(0);
                Self::LoadExample(id)
            }
            Some("submit") => Self::Submit,
            Some("show") => Self::Show,
            Some("health") => Self::Health,
            Some("quit") | Some("exit") => Self::Quit,
            _ => Self::Help,
        }
    }
}

fn print_help() {
    println!("Type a news snippet to classify it, or:");
    println!("  /example <1-4>  load a canned snippet into the input buffer");
    println!("  /submit         classify the current buffer");
    println!("  /show           print the current buffer");
    println!("  /health         check that the backend is reachable");
    println!("  /quit           exit");
}

/// Runs the interactive console against the configured backend.
pub async fn run(config: Config) -> Result<()> {
    let client = HttpBackendClient::new(config.backend.clone());
    let mut workbench = Workbench::new(Box::new(client));
    let mut sink = Terminal;

    info!("Console connected to backend at {}", config.backend.base_url);
    println!("newsclass console — type a news snippet to classify it, /help for commands");

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::Show => println!("{}", workbench.input()),
            Command::LoadExample(id) => workbench.load_example(id, &mut sink),
            Command::Submit => workbench.submit(&mut sink).await,
            Command::Health => workbench.health(&mut sink).await,
            Command::Predict(text) => {
                workbench.set_input(text);
                workbench.submit(&mut sink).await;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_line_is_a_prediction() {
        assert_eq!(
            Command::parse("NASA launches a new satellite."),
            Command::Predict("NASA launches a new satellite.".to_string())
        );
    }

    #[test]
    fn test_empty_line_is_an_empty_prediction() {
        assert_eq!(Command::parse("   "), Command::Predict(String::new()));
    }

    #[test]
    fn test_example_command() {
        assert_eq!(Command::parse("/example 2"), Command::LoadExample(2));
    }

    #[test]
    fn test_example_without_id_falls_through_to_unknown() {
        assert_eq!(Command::parse("/example"), Command::LoadExample(0));
        assert_eq!(Command::parse("/example four"), Command::LoadExample(0));
    }

    #[test]
    fn test_slash_commands() {
        assert_eq!(Command::parse("/submit"), Command::Submit);
        assert_eq!(Command::parse("/show"), Command::Show);
        assert_eq!(Command::parse("/health"), Command::Health);
        assert_eq!(Command::parse("/quit"), Command::Quit);
        assert_eq!(Command::parse("/exit"), Command::Quit);
    }

    #[test]
    fn test_unknown_slash_command_shows_help() {
        assert_eq!(Command::parse("/frobnicate"), Command::Help);
    }
}
