use std::cell::RefCell;
use std::sync::mpsc::Receiver;

use glowframe_core::{
    ClassKey, Color, GlowError, GlowResult, GlowState, IntentSubscribers, Rect, Registration,
    ResizeIntent, Side, THICKNESS, log_debug, log_error, overlay_origin, overlay_size,
};
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DestroyWindow, GWL_EXSTYLE, GWLP_USERDATA, GetWindowLongPtrW, GetWindowRect,
    HWND_NOTOPMOST, HWND_TOPMOST, SET_WINDOW_POS_FLAGS, SW_HIDE, SW_SHOWNOACTIVATE, SWP_NOACTIVATE,
    SWP_NOMOVE, SWP_NOSIZE, SWP_NOZORDER, SetParent, SetWindowLongPtrW, SetWindowPos, ShowWindow,
    WS_CLIPCHILDREN, WS_CLIPSIBLINGS, WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_POPUP,
};
use windows::core::{HSTRING, PCWSTR};

use crate::{gdi, input};

/// State reachable from the window procedure.
///
/// Boxed by the overlay so its address stays fixed while the window
/// holds a pointer to it. Only ever accessed through shared references.
pub(crate) struct Shared {
    pub(crate) state: RefCell<GlowState>,
    pub(crate) subscribers: RefCell<IntentSubscribers>,
}

/// One edge of a glow border: a layered, non-activating popup that sits
/// just outside the host window and renders a translucent gradient.
///
/// The overlay owns its native window and destroys it on
/// [`close`](Self::close), [`dispose`](Self::dispose) or drop. The host
/// handle is only borrowed as an identity for stacking.
///
/// Once the native window is gone every operation is a silent no-op: a
/// missing glow must never take the host down with it.
pub struct GlowOverlay {
    hwnd: Option<HWND>,
    parent: HWND,
    shared: Box<Shared>,
    disposed: bool,
}

impl GlowOverlay {
    /// Creates a hidden overlay for `side` of the host window `parent`.
    pub fn new(side: Side, parent: HWND) -> GlowResult<Self> {
        let key = ClassKey::new(side, parent.0 as usize);
        let class = key.class_name();

        match input::ensure_class_registered(key) {
            Ok(Registration::AlreadyExists) => log_debug!("glow {side}: reusing class {class}"),
            Ok(Registration::Registered) => {}
            Err(e) => {
                log_error!("glow {side}: {e}");
                return Err(e);
            }
        }

        let class_name = HSTRING::from(class);
        let style = WS_POPUP | WS_CLIPSIBLINGS | WS_CLIPCHILDREN;

        // SAFETY: the class was registered above and the name outlives
        // the call.
        let hwnd = unsafe {
            CreateWindowExW(
                WS_EX_TOOLWINDOW | WS_EX_NOACTIVATE,
                PCWSTR(class_name.as_ptr()),
                PCWSTR(class_name.as_ptr()),
                style,
                0,
                0,
                0,
                0,
                None,
                None,
                None,
                None,
            )
        }
        .map_err(|e| GlowError::WindowCreation(e.to_string()))?;

        if hwnd.is_invalid() {
            log_error!("glow {side}: CreateWindowExW returned a null handle");
            return Err(GlowError::WindowCreation("null window handle".into()));
        }

        let shared = Box::new(Shared {
            state: RefCell::new(GlowState::new(side)),
            subscribers: RefCell::new(IntentSubscribers::new()),
        });

        // SAFETY: `hwnd` is the window we just created. The userdata
        // pointer stays valid until `destroy` clears it.
        unsafe {
            let ex = GetWindowLongPtrW(hwnd, GWL_EXSTYLE);
            SetWindowLongPtrW(hwnd, GWL_EXSTYLE, ex | WS_EX_LAYERED.0 as isize);
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, &*shared as *const Shared as isize);
        }

        Ok(Self {
            hwnd: Some(hwnd),
            parent,
            shared,
            disposed: false,
        })
    }

    pub fn side(&self) -> Side {
        self.shared.state.borrow().side()
    }

    /// The native window, or `None` once closed or disposed.
    pub fn hwnd(&self) -> Option<HWND> {
        self.hwnd
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Resizes the strip for a host client area of `width x height` and
    /// redraws it. Position and stacking are left alone.
    pub fn set_size(&self, width: i32, height: i32) {
        let Some(hwnd) = self.hwnd else {
            return;
        };
        let (w, h) = overlay_size(self.side(), width, height);

        let resized = unsafe {
            SetWindowPos(
                hwnd,
                None,
                0,
                0,
                w,
                h,
                SWP_NOMOVE | SWP_NOZORDER | SWP_NOACTIVATE,
            )
        };
        if let Err(e) = resized {
            log_debug!("glow {}: SetWindowPos to {w}x{h} failed: {e}", self.side());
        }
        self.render();
    }

    /// Moves the strip next to the host window occupying `host` in screen
    /// coordinates, and restacks it.
    pub fn set_location(&self, host: &Rect) {
        let origin = overlay_origin(self.side(), host);
        self.update_z_order_at(origin.x, origin.y, SWP_NOSIZE | SWP_NOACTIVATE);
    }

    /// Restacks the strip without moving it. Call after some other window
    /// changed its topmost state.
    pub fn update_z_order(&self) {
        self.update_z_order_at(0, 0, SWP_NOSIZE | SWP_NOMOVE | SWP_NOACTIVATE);
    }

    /// Restacks the strip in two steps: first into the topmost or
    /// non-topmost band, then directly behind the host window.
    ///
    /// Both steps are needed. The topmost band and the position relative
    /// to the host are separate relations in the window manager, and
    /// setting only one lets the strip drift away from the host when
    /// other windows are activated.
    pub fn update_z_order_at(&self, left: i32, top: i32, flags: SET_WINDOW_POS_FLAGS) {
        let Some(hwnd) = self.hwnd else {
            return;
        };
        let band = if self.is_topmost() {
            HWND_TOPMOST
        } else {
            HWND_NOTOPMOST
        };

        unsafe {
            let _ = SetWindowPos(hwnd, Some(band), left, top, 0, THICKNESS, flags);
            let _ = SetWindowPos(
                hwnd,
                Some(self.parent),
                0,
                0,
                0,
                THICKNESS,
                SWP_NOSIZE | SWP_NOMOVE | SWP_NOACTIVATE,
            );
        }
    }

    /// Shows the strip without activating it, or hides it.
    pub fn show(&self, visible: bool) {
        let Some(hwnd) = self.hwnd else {
            return;
        };
        let cmd = if visible { SW_SHOWNOACTIVATE } else { SW_HIDE };
        unsafe {
            let _ = ShowWindow(hwnd, cmd);
        }
    }

    pub fn is_topmost(&self) -> bool {
        self.shared.state.borrow().is_topmost()
    }

    /// Takes effect on the next restack.
    pub fn set_topmost(&self, topmost: bool) {
        self.shared.state.borrow_mut().set_topmost(topmost);
    }

    pub fn is_resize_enabled(&self) -> bool {
        self.shared.state.borrow().is_resize_enabled()
    }

    pub fn set_resize_enabled(&self, enabled: bool) {
        self.shared.state.borrow_mut().set_resize_enabled(enabled);
    }

    pub fn is_parent_focused(&self) -> bool {
        self.shared.state.borrow().is_parent_focused()
    }

    /// Switches between the active and inactive colors and redraws.
    pub fn set_parent_focused(&self, focused: bool) {
        self.shared.state.borrow_mut().set_parent_focused(focused);
        self.render();
    }

    pub fn active_color(&self) -> Color {
        self.shared.state.borrow().active_color()
    }

    pub fn set_active_color(&self, color: Color) {
        self.shared.state.borrow_mut().set_active_color(color);
        self.render();
    }

    pub fn inactive_color(&self) -> Color {
        self.shared.state.borrow().inactive_color()
    }

    pub fn set_inactive_color(&self, color: Color) {
        self.shared.state.borrow_mut().set_inactive_color(color);
        self.render();
    }

    /// Returns a receiver of resize intents raised by presses on this
    /// strip. Intents are sent only while resize affordance is enabled.
    pub fn subscribe(&self) -> Receiver<ResizeIntent> {
        self.shared.subscribers.borrow_mut().subscribe()
    }

    /// Redraws the strip from scratch at its current window rectangle.
    ///
    /// Skipped while the window still has no area.
    pub fn render(&self) {
        let Some(hwnd) = self.hwnd else {
            return;
        };

        let mut rect = RECT::default();
        if unsafe { GetWindowRect(hwnd, &mut rect) }.is_err() {
            return;
        }
        let rect = Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom);

        let bitmap = self.shared.state.borrow().render(&rect);
        let Some(bitmap) = bitmap else {
            log_debug!("glow {}: render skipped, window has no area", self.side());
            return;
        };

        if !gdi::present(hwnd, rect.origin(), &bitmap) {
            log_debug!("glow {}: UpdateLayeredWindow failed", self.side());
        }
    }

    /// Detaches the strip from any parent and destroys its window.
    /// Safe to call repeatedly.
    pub fn close(&mut self) {
        let Some(hwnd) = self.hwnd else {
            return;
        };
        unsafe {
            let _ = SetParent(hwnd, None);
        }
        self.destroy();
    }

    /// Destroys the window if it still exists and marks the overlay
    /// disposed. Idempotent.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.destroy();
    }

    fn destroy(&mut self) {
        let Some(hwnd) = self.hwnd.take() else {
            return;
        };
        unsafe {
            SetWindowLongPtrW(hwnd, GWLP_USERDATA, 0);
            let _ = DestroyWindow(hwnd);
        }
    }
}

impl Drop for GlowOverlay {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
    use windows::Win32::UI::WindowsAndMessaging::{
        DefWindowProcW, GCLP_HCURSOR, GetClassLongPtrW, HTCLIENT, SendMessageW, WM_LBUTTONDOWN,
        WM_MOUSEMOVE, WM_SETCURSOR,
    };

    fn window_rect(overlay: &GlowOverlay) -> Rect {
        let mut rect = RECT::default();
        unsafe { GetWindowRect(overlay.hwnd().unwrap(), &mut rect).unwrap() };
        Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom)
    }

    #[test]
    fn geometry_follows_a_host_at_100_100() {
        // Arrange
        let host = Rect::new(100, 100, 800, 600);
        let expected = [
            (Side::Top, Rect::new(91, 91, 818, 9)),
            (Side::Bottom, Rect::new(91, 700, 818, 9)),
            (Side::Left, Rect::new(91, 91, 9, 618)),
            (Side::Right, Rect::new(900, 91, 9, 618)),
        ];

        for (side, want) in expected {
            let overlay = GlowOverlay::new(side, HWND::default()).unwrap();

            // Act
            overlay.set_size(host.width, host.height);
            overlay.set_location(&host);

            // Assert
            assert_eq!(window_rect(&overlay), want, "{side}");
        }
    }

    #[test]
    fn colors_and_flags_round_trip() {
        // Arrange
        let overlay = GlowOverlay::new(Side::Left, HWND::default()).unwrap();
        let teal = Color::rgb(0x00, 0xB4, 0xD8);

        // Act
        overlay.set_active_color(teal);
        overlay.set_topmost(true);
        overlay.set_resize_enabled(true);
        overlay.set_parent_focused(true);

        // Assert
        assert_eq!(overlay.active_color(), teal);
        assert_eq!(overlay.inactive_color(), Color::LIGHT_GRAY);
        assert!(overlay.is_topmost());
        assert!(overlay.is_resize_enabled());
        assert!(overlay.is_parent_focused());
    }

    #[test]
    fn dispose_twice_is_harmless() {
        // Arrange
        let mut overlay = GlowOverlay::new(Side::Bottom, HWND::default()).unwrap();

        // Act
        overlay.dispose();
        overlay.dispose();

        // Assert
        assert!(overlay.is_disposed());
        assert!(overlay.hwnd().is_none());
    }

    #[test]
    fn operations_after_close_are_no_ops() {
        // Arrange
        let mut overlay = GlowOverlay::new(Side::Right, HWND::default()).unwrap();
        overlay.dispose();

        // Act
        overlay.close();
        overlay.set_size(100, 100);
        overlay.set_location(&Rect::new(0, 0, 100, 100));
        overlay.show(true);
        overlay.render();

        // Assert
        assert!(overlay.hwnd().is_none());
    }

    #[test]
    fn same_side_and_parent_share_a_class() {
        // Act
        let first = GlowOverlay::new(Side::Top, HWND::default());
        let second = GlowOverlay::new(Side::Top, HWND::default());

        // Assert
        assert!(first.is_ok());
        assert!(second.is_ok());
    }

    fn sized(side: Side) -> GlowOverlay {
        let overlay = GlowOverlay::new(side, HWND::default()).unwrap();
        overlay.set_size(200, 100);
        overlay
    }

    fn press(overlay: &GlowOverlay) {
        unsafe {
            SendMessageW(
                overlay.hwnd().unwrap(),
                WM_LBUTTONDOWN,
                Some(WPARAM(0)),
                Some(LPARAM(0)),
            );
        }
    }

    fn set_cursor_args(hwnd: HWND) -> (WPARAM, LPARAM) {
        let lparam = ((WM_MOUSEMOVE as isize) << 16) | HTCLIENT as isize;
        (WPARAM(hwnd.0 as usize), LPARAM(lparam))
    }

    #[test]
    fn press_with_resize_enabled_reaches_every_subscriber() {
        // Arrange
        let overlay = sized(Side::Left);
        overlay.set_resize_enabled(true);
        let first = overlay.subscribe();
        let second = overlay.subscribe();

        // Act
        press(&overlay);

        // Assert
        let intent = first.try_recv().expect("intent for first subscriber");
        assert_eq!(intent.side, Side::Left);
        assert_eq!(second.try_recv(), Ok(intent));
    }

    #[test]
    fn press_with_resize_disabled_delivers_nothing() {
        // Arrange
        let overlay = sized(Side::Top);
        let intents = overlay.subscribe();

        // Act
        press(&overlay);

        // Assert
        assert!(intents.try_recv().is_err());
    }

    #[test]
    fn press_skips_dropped_subscribers() {
        // Arrange
        let overlay = sized(Side::Bottom);
        overlay.set_resize_enabled(true);
        drop(overlay.subscribe());
        let live = overlay.subscribe();

        // Act
        press(&overlay);

        // Assert
        assert_eq!(live.try_recv().map(|i| i.side), Ok(Side::Bottom));
    }

    #[test]
    fn class_carries_a_default_cursor() {
        // Arrange
        let overlay = sized(Side::Top);

        // Act
        let cursor = unsafe { GetClassLongPtrW(overlay.hwnd().unwrap(), GCLP_HCURSOR) };

        // Assert
        assert_ne!(cursor, 0);
    }

    #[test]
    fn set_cursor_is_handled_when_resize_enabled() {
        // Arrange
        let overlay = sized(Side::Right);
        overlay.set_resize_enabled(true);
        let hwnd = overlay.hwnd().unwrap();
        let (wparam, lparam) = set_cursor_args(hwnd);

        // Act
        let result = unsafe { SendMessageW(hwnd, WM_SETCURSOR, Some(wparam), Some(lparam)) };

        // Assert
        assert_eq!(result, LRESULT(1));
    }

    #[test]
    fn set_cursor_falls_through_when_resize_disabled() {
        // Arrange
        let overlay = sized(Side::Right);
        let hwnd = overlay.hwnd().unwrap();
        let (wparam, lparam) = set_cursor_args(hwnd);

        // Act
        let result = unsafe { SendMessageW(hwnd, WM_SETCURSOR, Some(wparam), Some(lparam)) };

        // Assert: same answer the default procedure gives
        let default = unsafe { DefWindowProcW(hwnd, WM_SETCURSOR, wparam, lparam) };
        assert_eq!(result, default);
    }
}
