/// What the UI should render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Main,
    Quiz(String),
    Result,
    WrongNotes,
    Ranking,
}

impl Screen {
    #[must_use]
    pub fn is_quiz(&self) -> bool {
        matches!(self, Screen::Quiz(_))
    }

    /// Category of the running quiz, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        match self {
            Screen::Quiz(category) => Some(category.as_str()),
            _ => None,
        }
    }
}
