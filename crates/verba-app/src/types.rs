use verba_core::ErrorCategory;

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Text captured from the input source
    TextInput { text: String, force: bool },
    /// Translate the last text again, even if unchanged
    Retry,
    ShowTranslation { source: String, translation: String },
    ShowError { category: ErrorCategory, message: String },
    Shutdown,
}
