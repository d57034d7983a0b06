/// Free text input.
pub struct TextPrompt {
    pub question: String,
    /// Used when the user just presses enter, and as the answer in
    /// non-interactive mode.
    pub default: Option<String>,
}

/// A yes/no confirmation prompt.
pub struct YesNoPrompt {
    pub question: String,
    /// true = default yes [Y/n], false = default no [y/N]
    pub default: bool,
}
