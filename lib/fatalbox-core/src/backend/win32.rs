use crate::backend::{DialogBackend, DialogResult, DisplayRequest};
use windows::core::HSTRING;
use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONERROR, MB_OK};

/// The Win32 message box. The call blocks until dismissed and is always reported as shown.
#[derive(Debug, Default, Clone, Copy)]
pub struct WindowsBackend;

impl DialogBackend for WindowsBackend {
    fn name(&self) -> &'static str {
        "native"
    }

    fn show_dialog(&self, request: &DisplayRequest) -> DialogResult<()> {
        let text = HSTRING::from(request.message);
        let caption = HSTRING::from(request.caption());
        unsafe {
            let _ = MessageBoxW(None, &text, &caption, MB_OK | MB_ICONERROR);
        }
        Ok(())
    }
}
