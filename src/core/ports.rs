//! Ports the core calls out through. Hosts supply the implementations; tests
//! pass closures.

/// Yes/no gate consulted before destructive operations.
pub trait ConfirmationGate {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> ConfirmationGate for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Gate that gives the same answer to every prompt.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl ConfirmationGate for FixedAnswer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Alert,
}

/// Short message shown to the user after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn alert(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Alert,
            message: message.into(),
        }
    }
}

/// Fire-and-forget notice surface.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

impl<F> Notifier for F
where
    F: FnMut(Notice),
{
    fn notify(&mut self, notice: Notice) {
        self(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_act_as_ports() {
        let mut prompts = Vec::new();
        let mut gate = |prompt: &str| {
            prompts.push(prompt.to_string());
            false
        };
        assert!(!gate.confirm("Delete?"));
        assert_eq!(prompts, vec!["Delete?".to_string()]);

        let mut seen = Vec::new();
        let mut notifier = |notice: Notice| seen.push(notice);
        notifier.notify(Notice::success("done"));
        assert_eq!(seen, vec![Notice::success("done")]);
    }

    #[test]
    fn fixed_answer_ignores_prompt() {
        assert!(FixedAnswer(true).confirm("anything"));
        assert!(!FixedAnswer(false).confirm("anything"));
    }
}
