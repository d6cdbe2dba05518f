//! Raw text held by the input area.
//!
//! Nothing here validates: every edit is stored verbatim and the text is only
//! interpreted when the form is submitted.

/// A single change reported by the text control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Newline,
    Backspace,
    Clear,
    /// Append a pasted block of text as-is.
    Paste(String),
    /// Replace the whole buffer.
    Replace(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputCapture {
    text: String,
}

impl InputCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents of the input area.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn apply(&mut self, edit: InputEdit) {
        match edit {
            InputEdit::Insert(c) => self.text.push(c),
            InputEdit::Newline => self.text.push('\n'),
            InputEdit::Backspace => {
                self.text.pop();
            }
            InputEdit::Clear => self.text.clear(),
            InputEdit::Paste(text) => self.text.push_str(&text),
            InputEdit::Replace(text) => self.text = text,
        }
    }

    /// Number of lines currently shown, never less than one.
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edits_are_stored_verbatim() {
        let mut input = InputCapture::new();
        for c in "{ not json".chars() {
            input.apply(InputEdit::Insert(c));
        }
        input.apply(InputEdit::Newline);
        input.apply(InputEdit::Insert('}'));

        assert_eq!(input.text(), "{ not json\n}");
        assert_eq!(input.line_count(), 2);
    }

    #[test]
    fn test_backspace_removes_whole_characters() {
        let mut input = InputCapture::new();
        input.apply(InputEdit::Replace("zé".to_string()));
        input.apply(InputEdit::Backspace);
        assert_eq!(input.text(), "z");

        input.apply(InputEdit::Backspace);
        input.apply(InputEdit::Backspace);
        assert!(input.is_empty());
        assert_eq!(input.line_count(), 1);
    }

    #[test]
    fn test_paste_appends() {
        let mut input = InputCapture::new();
        input.apply(InputEdit::Insert('{'));
        input.apply(InputEdit::Paste("\"data\": [\n\"A\"]}".to_string()));
        assert_eq!(input.text(), "{\"data\": [\n\"A\"]}");
        assert_eq!(input.line_count(), 2);
    }

    #[test]
    fn test_clear_and_replace() {
        let mut input = InputCapture::new();
        input.apply(InputEdit::Replace(r#"{"data": []}"#.to_string()));
        assert_eq!(input.text(), r#"{"data": []}"#);

        input.apply(InputEdit::Clear);
        assert_eq!(input.text(), "");
    }
}
