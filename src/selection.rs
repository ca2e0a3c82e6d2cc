//! Selection set
//!
//! The set of currently checked symptom labels. Mutated only by toggles.

/// Set of selected symptom labels
///
/// Iterates in the order labels were checked. A label is held at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    labels: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the label if present, otherwise add it
    ///
    /// Returns `true` when the label is selected afterwards.
    pub fn toggle(&mut self, label: &str) -> bool {
        match self.labels.iter().position(|l| l == label) {
            Some(index) => {
                self.labels.remove(index);
                false
            }
            None => {
                self.labels.push(label.to_string());
                true
            }
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Owned copy of the labels, used as the request payload
    pub fn to_vec(&self) -> Vec<String> {
        self.labels.clone()
    }

    /// Uncheck everything
    pub fn clear(&mut self) {
        self.labels.clear();
    }
}
