use crate::backend::{DialogBackend, DialogError, DialogResult, DisplayRequest};
use native_dialog::{DialogBuilder, MessageLevel};

/// Error-level message box from the `native-dialog` toolkit. Uses the bare title, like the
/// toolkit message boxes it stands in for.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToolkitBackend;

impl ToolkitBackend {
    pub fn new() -> Self {
        Self
    }
}

impl DialogBackend for ToolkitBackend {
    fn name(&self) -> &'static str {
        "toolkit"
    }

    fn show_dialog(&self, request: &DisplayRequest) -> DialogResult<()> {
        DialogBuilder::message()
            .set_level(MessageLevel::Error)
            .set_title(request.title)
            .set_text(request.message)
            .alert()
            .show()
            .map_err(|e| DialogError::Toolkit(e.to_string()))
    }
}
