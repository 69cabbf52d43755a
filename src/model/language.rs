use serde::Deserialize;

/// A selectable language from the remote catalog.
///
/// `title` is the human-readable name shown in the picker, `value` the
/// machine-readable key the catalog pairs with it. Entries are kept in
/// response order and never mutated after load.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Language {
    pub title: String,
    pub value: String,
}

impl Language {
    /// Case-insensitive match against the display title.
    pub fn matches_title(&self, title: &str) -> bool {
        self.title.eq_ignore_ascii_case(title)
    }
}
