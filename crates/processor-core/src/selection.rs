use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::debug;

/// The response fields a user can choose to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum FieldLabel {
    Numbers,
    Alphabets,
    #[strum(serialize = "Highest Alphabet")]
    HighestAlphabet,
}

impl FieldLabel {
    /// Key used for this field in both the response and the projection.
    pub fn key(self) -> &'static str {
        match self {
            Self::Numbers => "numbers",
            Self::Alphabets => "alphabets",
            Self::HighestAlphabet => "highest_alphabet",
        }
    }

    /// All labels in display order.
    pub fn all() -> impl Iterator<Item = FieldLabel> {
        Self::iter()
    }
}

/// Shape reported by a multi-select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorValue {
    Labels(Vec<String>),
    /// Some controls report the selection as one comma-joined string.
    Joined(String),
}

impl SelectorValue {
    fn into_labels(self) -> Vec<String> {
        match self {
            Self::Labels(labels) => labels,
            Self::Joined(joined) => joined.split(',').map(str::to_string).collect(),
        }
    }
}

/// Labels currently chosen, in the order the user picked them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    labels: Vec<FieldLabel>,
}

impl FieldSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, label: FieldLabel) -> bool {
        self.labels.contains(&label)
    }

    pub fn labels(&self) -> &[FieldLabel] {
        &self.labels
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Replace the whole selection with what the control reports.
    pub fn replace(&mut self, value: SelectorValue) {
        self.labels.clear();
        for raw in value.into_labels() {
            match FieldLabel::from_str(raw.trim()) {
                Ok(label) if !self.labels.contains(&label) => self.labels.push(label),
                Ok(_) => {}
                Err(_) => debug!(label = %raw, "ignoring unknown field label"),
            }
        }
    }

    pub fn toggle(&mut self, label: FieldLabel) {
        if let Some(pos) = self.labels.iter().position(|l| *l == label) {
            self.labels.remove(pos);
        } else {
            self.labels.push(label);
        }
    }
}

impl FromIterator<FieldLabel> for FieldSelection {
    fn from_iter<T: IntoIterator<Item = FieldLabel>>(iter: T) -> Self {
        let mut selection = Self::new();
        for label in iter {
            if !selection.contains(label) {
                selection.labels.push(label);
            }
        }
        selection
    }
}
