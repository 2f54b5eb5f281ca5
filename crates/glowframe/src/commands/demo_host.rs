//! A plain Win32 host window decorated with four glow strips.
//!
//! The host is a captionless popup so its window rectangle and client
//! area coincide, which is what the strips are laid out against. Its
//! top band acts as a drag area.

use std::cell::RefCell;
use std::sync::mpsc::Receiver;

use glowframe_core::config::GlowConfig;
use glowframe_core::{GlowError, GlowResult, Rect, ResizeIntent, Side, log_info, log_warn};
use glowframe_windows::GlowOverlay;
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, POINT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{COLOR_WINDOW, HBRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::ReleaseCapture;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DispatchMessageW, GetCursorPos, GetMessageW, GetWindowRect,
    HTCAPTION, HTCLIENT, IDC_ARROW, LoadCursorW, MSG, PostQuitMessage, RegisterClassW,
    SW_SHOW, SendMessageW, ShowWindow, TranslateMessage, WINDOW_EX_STYLE, WM_ACTIVATE,
    WM_DESTROY, WM_NCHITTEST, WM_NCLBUTTONDOWN, WM_WINDOWPOSCHANGED, WNDCLASSW, WS_MINIMIZEBOX,
    WS_POPUP, WS_SYSMENU,
};
use windows::core::w;

/// Height of the band at the top of the host that drags the window.
const DRAG_BAND: i32 = 32;

/// Low word of `WM_ACTIVATE`'s `wParam` when the window is deactivated.
const WA_INACTIVE: usize = 0;

thread_local! {
    static DECORATION: RefCell<Option<Decoration>> = const { RefCell::new(None) };
}

/// The four strips of one host and their resize-intent receivers.
struct Decoration {
    overlays: Vec<GlowOverlay>,
    intents: Vec<Receiver<ResizeIntent>>,
}

impl Decoration {
    fn attach(host: HWND, glow: &GlowConfig) -> Self {
        let mut overlays = Vec::with_capacity(Side::ALL.len());
        let mut intents = Vec::with_capacity(Side::ALL.len());

        for side in Side::ALL {
            let overlay = match GlowOverlay::new(side, host) {
                Ok(overlay) => overlay,
                Err(e) => {
                    // The host keeps working with one edge less.
                    log_warn!("demo: no {side} glow: {e}");
                    eprintln!("Warning: no {side} glow: {e}");
                    continue;
                }
            };
            overlay.set_active_color(glow.active());
            overlay.set_inactive_color(glow.inactive());
            overlay.set_topmost(glow.topmost);
            overlay.set_resize_enabled(glow.resize);
            intents.push(overlay.subscribe());
            overlays.push(overlay);
        }

        Self { overlays, intents }
    }

    fn sync(&self, host: HWND) {
        let Some(rect) = window_rect(host) else {
            return;
        };
        for overlay in &self.overlays {
            overlay.set_location(&rect);
            overlay.set_size(rect.width, rect.height);
        }
    }

    fn set_focused(&self, focused: bool) {
        for overlay in &self.overlays {
            overlay.set_parent_focused(focused);
            overlay.update_z_order();
        }
    }

    fn show(&self, visible: bool) {
        for overlay in &self.overlays {
            overlay.show(visible);
        }
    }

    fn pending_intents(&self) -> Vec<ResizeIntent> {
        self.intents.iter().flat_map(|rx| rx.try_iter()).collect()
    }
}

/// Runs `f` against the installed decoration, if any.
fn with_decoration<T>(f: impl FnOnce(&Decoration) -> T) -> Option<T> {
    DECORATION.with(|cell| {
        let guard = cell.try_borrow().ok()?;
        guard.as_ref().map(f)
    })
}

/// Opens the host window and pumps messages until it is closed.
pub fn run(args: &super::demo::DemoArgs, glow: &GlowConfig) -> GlowResult<()> {
    glowframe_windows::dpi::enable_dpi_awareness();

    let host = create_host(args)?;
    DECORATION.with(|cell| *cell.borrow_mut() = Some(Decoration::attach(host, glow)));
    log_info!("demo: host 0x{:X} decorated", host.0 as usize);

    unsafe {
        let _ = ShowWindow(host, SW_SHOW);
    }
    with_decoration(|d| {
        d.sync(host);
        d.show(true);
    });

    let mut msg = MSG::default();
    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }

        // Drained outside the borrow: starting a resize runs a modal loop
        // that calls back into the host procedure.
        let intents = with_decoration(Decoration::pending_intents).unwrap_or_default();
        for intent in intents {
            begin_resize(host, intent);
        }
    }

    DECORATION.with(|cell| cell.borrow_mut().take());
    Ok(())
}

fn create_host(args: &super::demo::DemoArgs) -> GlowResult<HWND> {
    let class_name = w!("GlowframeDemoHost");

    unsafe {
        let instance = GetModuleHandleW(None).map_err(|e| GlowError::WindowCreation(e.to_string()))?;
        let wc = WNDCLASSW {
            lpfnWndProc: Some(host_wnd_proc),
            hInstance: instance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW).unwrap_or_default(),
            hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as usize as *mut _),
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            class_name,
            w!("glowframe demo"),
            WS_POPUP | WS_SYSMENU | WS_MINIMIZEBOX,
            args.x,
            args.y,
            args.width,
            args.height,
            None,
            None,
            Some(instance.into()),
            None,
        )
        .map_err(|e| GlowError::WindowCreation(e.to_string()))
    }
}

unsafe extern "system" fn host_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_WINDOWPOSCHANGED => {
            with_decoration(|d| d.sync(hwnd));
        }
        WM_ACTIVATE => {
            let focused = (wparam.0 & 0xFFFF) != WA_INACTIVE;
            with_decoration(|d| d.set_focused(focused));
        }
        WM_NCHITTEST => {
            let hit = unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
            if hit.0 == HTCLIENT as isize && in_drag_band(hwnd, lparam) {
                return LRESULT(HTCAPTION as isize);
            }
            return hit;
        }
        WM_DESTROY => {
            with_decoration(|d| d.show(false));
            unsafe { PostQuitMessage(0) };
            return LRESULT(0);
        }
        _ => {}
    }

    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

/// Hands a press on a strip to the system's own sizing loop, as if the
/// user had grabbed the matching border of the host.
fn begin_resize(host: HWND, intent: ResizeIntent) {
    let mut pt = POINT::default();
    unsafe {
        if GetCursorPos(&mut pt).is_err() {
            return;
        }
        let _ = ReleaseCapture();
        let lparam = ((pt.y as u16 as isize) << 16) | (pt.x as u16 as isize);
        SendMessageW(
            host,
            WM_NCLBUTTONDOWN,
            Some(WPARAM(intent.region.ht_code() as usize)),
            Some(LPARAM(lparam)),
        );
    }
}

fn in_drag_band(hwnd: HWND, lparam: LPARAM) -> bool {
    let y = ((lparam.0 >> 16) & 0xFFFF) as u16 as i16 as i32;
    window_rect(hwnd).is_some_and(|r| y < r.y + DRAG_BAND)
}

fn window_rect(hwnd: HWND) -> Option<Rect> {
    let mut rect = RECT::default();
    unsafe { GetWindowRect(hwnd, &mut rect) }.ok()?;
    Some(Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom))
}
