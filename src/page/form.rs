//! Contact form: required-field validation and a mocked send

pub const FORM_SELECTOR: &str = ".contact-form";
pub const FIELD_SELECTOR: &str = "input, textarea, select";
pub const SUBMIT_SELECTOR: &str = "button[type=\"submit\"]";

pub const ERROR_CLASS: &str = "error";
pub const PARENT_ERROR_CLASS: &str = "has-error";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const REQUIRED_MESSAGE: &str = "Bu alan zorunludur.";

pub const SENDING_LABEL: &str = "Gönderiliyor...";
pub const SENT_LABEL: &str = "Gönderildi!";
/// Fake network latency
pub const SEND_DELAY_MS: i32 = 1500;
/// How long the success label stays before the button resets
pub const RESET_DELAY_MS: i32 = 3000;

/// A field fails validation when it is empty after trimming
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Indices of the fields that fail validation
pub fn invalid_fields<'a, I>(values: I) -> Vec<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .enumerate()
        .filter(|(_, v)| is_blank(v))
        .map(|(i, _)| i)
        .collect()
}

/// Where the submit button is in the mocked send
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Sending,
    Sent,
}

/// The submit button's label and enabled state through a mocked send:
/// Idle -> Sending (1.5 s) -> Sent (3 s) -> Idle
#[derive(Debug, Clone)]
pub struct SubmitButton {
    original_label: String,
    phase: SubmitPhase,
}

impl SubmitButton {
    pub fn new(original_label: impl Into<String>) -> Self {
        Self {
            original_label: original_label.into(),
            phase: SubmitPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn label(&self) -> &str {
        match self.phase {
            SubmitPhase::Idle => &self.original_label,
            SubmitPhase::Sending => SENDING_LABEL,
            SubmitPhase::Sent => SENT_LABEL,
        }
    }

    pub fn disabled(&self) -> bool {
        self.phase != SubmitPhase::Idle
    }

    /// Start sending. Returns the delay before [`SubmitButton::advance`]
    /// should run, or `None` if a send is already in flight.
    pub fn submit(&mut self) -> Option<i32> {
        if self.phase != SubmitPhase::Idle {
            return None;
        }
        self.phase = SubmitPhase::Sending;
        Some(SEND_DELAY_MS)
    }

    /// Move to the next phase. Returns the delay before the following
    /// advance, `None` once back to idle.
    pub fn advance(&mut self) -> Option<i32> {
        match self.phase {
            SubmitPhase::Idle => None,
            SubmitPhase::Sending => {
                self.phase = SubmitPhase::Sent;
                Some(RESET_DELAY_MS)
            }
            SubmitPhase::Sent => {
                self.phase = SubmitPhase::Idle;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(!is_blank(" Ayşe "));
    }

    #[test]
    fn test_invalid_fields() {
        let values = ["Ada", "  ", "ada@example.com", ""];
        assert_eq!(invalid_fields(values), vec![1, 3]);
        assert!(invalid_fields(["a", "b"]).is_empty());
    }

    #[test]
    fn test_submit_cycle() {
        let mut button = SubmitButton::new("Gönder");
        assert_eq!(button.label(), "Gönder");
        assert!(!button.disabled());

        assert_eq!(button.submit(), Some(1500));
        assert_eq!(button.label(), SENDING_LABEL);
        assert!(button.disabled());

        // A second click mid-send is ignored
        assert_eq!(button.submit(), None);

        assert_eq!(button.advance(), Some(3000));
        assert_eq!(button.phase(), SubmitPhase::Sent);
        assert_eq!(button.label(), SENT_LABEL);
        assert!(button.disabled());

        assert_eq!(button.advance(), None);
        assert_eq!(button.label(), "Gönder");
        assert!(!button.disabled());
        assert_eq!(button.advance(), None);
    }
}
