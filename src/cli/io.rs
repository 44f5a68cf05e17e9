use dialoguer::{theme::ColorfulTheme, Confirm};

use crate::cli::output;
use crate::core::ports::{ConfirmationGate, Notice, NoticeLevel, Notifier};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Confirmation gate backed by a dialoguer yes/no prompt.
///
/// Script mode has nobody to ask, so every prompt is answered yes and echoed.
pub struct TerminalGate {
    mode: CliMode,
    theme: ColorfulTheme,
}

impl TerminalGate {
    pub fn new(mode: CliMode) -> Self {
        Self {
            mode,
            theme: ColorfulTheme::default(),
        }
    }
}

impl ConfirmationGate for TerminalGate {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.mode == CliMode::Script {
            output::info(format!("{prompt} yes"));
            return true;
        }
        match Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(err) => {
                tracing::warn!(error = %err, "confirmation prompt failed; treating as no");
                false
            }
        }
    }
}

/// Prints notices through the shared output helpers.
#[derive(Clone, Copy, Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success => output::success(notice.message),
            NoticeLevel::Alert => output::error(notice.message),
        }
    }
}
