//! Window class and window procedure shared by all glow strips.
//!
//! The procedure reaches the strip's state through `GWLP_USERDATA`.
//! It only handles two messages: `WM_SETCURSOR`, to show a directional
//! resize cursor, and `WM_LBUTTONDOWN`, to report a resize intent.

use glowframe_core::{
    ClassKey, ClassRegistry, CursorShape, GlowResult, Point, Registration, log_debug,
};
use windows::Win32::Foundation::{
    ERROR_CLASS_ALREADY_EXISTS, GetLastError, HWND, LPARAM, LRESULT, POINT, RECT, WPARAM,
};
use windows::Win32::Graphics::Gdi::ScreenToClient;
use windows::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, GWLP_USERDATA, GetCursorPos, GetWindowLongPtrW, GetWindowRect, IDC_ARROW,
    IDC_HAND, IDC_SIZENESW, IDC_SIZENS, IDC_SIZENWSE, IDC_SIZEWE, LoadCursorW, RegisterClassW,
    SetCursor, WM_LBUTTONDOWN, WM_SETCURSOR, WNDCLASSW,
};
use windows::core::{HSTRING, PCWSTR};

use crate::overlay::Shared;

/// Registers the window class for `key`, reusing an earlier registration.
pub(crate) fn ensure_class_registered(key: ClassKey) -> GlowResult<Registration> {
    ClassRegistry::global().register_or_reuse(key, |name| {
        let name = HSTRING::from(name);
        // Shown whenever `WM_SETCURSOR` falls through to the default.
        // SAFETY: loading a shared system cursor needs no instance handle.
        let arrow = unsafe { LoadCursorW(None, IDC_ARROW) }.unwrap_or_default();
        let wc = WNDCLASSW {
            lpfnWndProc: Some(glow_wnd_proc),
            hCursor: arrow,
            lpszClassName: PCWSTR(name.as_ptr()),
            ..Default::default()
        };

        // SAFETY: `wc` and the class name outlive the call; the OS copies
        // the name during registration.
        let atom = unsafe { RegisterClassW(&wc) };
        if atom != 0 {
            return Ok(Registration::Registered);
        }

        let err = unsafe { GetLastError() };
        if err == ERROR_CLASS_ALREADY_EXISTS {
            Ok(Registration::AlreadyExists)
        } else {
            Err(err.0)
        }
    })
}

unsafe extern "system" fn glow_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let ptr = unsafe { GetWindowLongPtrW(hwnd, GWLP_USERDATA) } as *const Shared;

    if !ptr.is_null() {
        // SAFETY: the pointer is set by `GlowOverlay::new` to a box the
        // overlay owns and is cleared before that box is dropped.
        let shared = unsafe { &*ptr };
        match msg {
            WM_LBUTTONDOWN => on_press(hwnd, shared),
            WM_SETCURSOR if on_set_cursor(hwnd, shared) => return LRESULT(1),
            _ => {}
        }
    }

    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

/// Emits a resize intent for a press, when resize affordance is on.
fn on_press(hwnd: HWND, shared: &Shared) {
    let Some((point, w, h)) = cursor_in_window(hwnd) else {
        return;
    };
    let Ok(state) = shared.state.try_borrow() else {
        return;
    };
    let Some(intent) = state.press_at(point, w, h) else {
        return;
    };
    drop(state);

    let Ok(mut subscribers) = shared.subscribers.try_borrow_mut() else {
        return;
    };
    let delivered = subscribers.emit(intent);
    log_debug!(
        "glow {}: resize intent {:?} delivered to {delivered}",
        intent.side,
        intent.region
    );
}

/// Sets a directional cursor. Returns `false` to fall through to the
/// default handling when resize affordance is off.
fn on_set_cursor(hwnd: HWND, shared: &Shared) -> bool {
    let Some((point, w, h)) = cursor_in_window(hwnd) else {
        return false;
    };
    let shape = match shared.state.try_borrow() {
        Ok(state) => state.cursor_at(point, w, h),
        Err(_) => None,
    };
    let Some(shape) = shape else {
        return false;
    };

    // SAFETY: loading a shared system cursor needs no instance handle.
    if let Ok(cursor) = unsafe { LoadCursorW(None, system_cursor(shape)) } {
        unsafe {
            SetCursor(Some(cursor));
        }
    }
    true
}

fn system_cursor(shape: CursorShape) -> PCWSTR {
    match shape {
        CursorShape::Hand => IDC_HAND,
        CursorShape::SizeNS => IDC_SIZENS,
        CursorShape::SizeWE => IDC_SIZEWE,
        CursorShape::SizeNWSE => IDC_SIZENWSE,
        CursorShape::SizeNESW => IDC_SIZENESW,
    }
}

/// Returns the cursor position in `hwnd` client coordinates together
/// with the window's width and height.
fn cursor_in_window(hwnd: HWND) -> Option<(Point, i32, i32)> {
    let mut pt = POINT::default();
    let mut rect = RECT::default();

    // SAFETY: plain queries on a live window handle.
    unsafe {
        GetCursorPos(&mut pt).ok()?;
        if !ScreenToClient(hwnd, &mut pt).as_bool() {
            return None;
        }
        GetWindowRect(hwnd, &mut rect).ok()?;
    }

    Some((
        Point::new(pt.x, pt.y),
        rect.right - rect.left,
        rect.bottom - rect.top,
    ))
}
