/// Asks the user to approve a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Fixed answer, for scripted sessions.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirm for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
