use async_trait::async_trait;

/// Asks the user to approve a destructive action.
///
/// Any `Fn(&str) -> bool` closure is a `Confirm`, which keeps tests and
/// non-interactive callers simple.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

#[async_trait]
impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    async fn confirm(&self, prompt: &str) -> bool { self(prompt) }
}
