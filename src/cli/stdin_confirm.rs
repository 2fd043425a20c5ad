use async_trait::async_trait;
use flightdeck::view_model::Confirm;
use std::io::{self, Write};

/// Asks on the terminal; anything but `y`/`yes` declines.
#[derive(Debug, Default)]
pub(crate) struct StdinConfirm;

#[async_trait]
impl Confirm for StdinConfirm {
    async fn confirm(&self, prompt: &str) -> bool {
        let prompt = prompt.to_string();
        tokio::task::spawn_blocking(move || {
            print!("{prompt} [y/N] ");
            if io::stdout().flush().is_err() {
                return false;
            }
            let mut answer = String::new();
            io::stdin().read_line(&mut answer).is_ok() && is_affirmative(&answer)
        })
        .await
        .unwrap_or(false)
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
