pub const DELETE_PROMPT: &str = "Are you sure you want to delete this proposal?";

pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Fixed answer, for scripted use (`--yes`) and tests.
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl Confirmation for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}
