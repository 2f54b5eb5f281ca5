//! DIB-based presentation of a glow bitmap through `UpdateLayeredWindow`.
//!
//! Every GDI object is held by a guard whose `Drop` releases it, so an
//! early return on any step still frees what was acquired before it.

use std::mem;

use glowframe_core::{GlowBitmap, Point, log_debug};
use windows::Win32::Foundation::{COLORREF, HWND, POINT, SIZE};
use windows::Win32::Graphics::Gdi::{
    AC_SRC_ALPHA, AC_SRC_OVER, BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BLENDFUNCTION,
    CreateCompatibleDC, CreateDIBSection, DIB_RGB_COLORS, DeleteDC, DeleteObject, GetDC, HBITMAP,
    HDC, HGDIOBJ, ReleaseDC, SelectObject,
};
use windows::Win32::UI::WindowsAndMessaging::{ULW_ALPHA, UpdateLayeredWindow};

/// The screen device context.
struct ScreenDc(HDC);

impl ScreenDc {
    fn acquire() -> Option<Self> {
        // SAFETY: GetDC(None) returns the screen DC or a null handle.
        let dc = unsafe { GetDC(None) };
        (!dc.is_invalid()).then_some(Self(dc))
    }
}

impl Drop for ScreenDc {
    fn drop(&mut self) {
        unsafe {
            let _ = ReleaseDC(None, self.0);
        }
    }
}

/// A memory device context compatible with the screen.
struct MemoryDc(HDC);

impl MemoryDc {
    fn compatible_with(screen: &ScreenDc) -> Option<Self> {
        // SAFETY: `screen.0` is a live DC for the guard's lifetime.
        let dc = unsafe { CreateCompatibleDC(Some(screen.0)) };
        (!dc.is_invalid()).then_some(Self(dc))
    }
}

impl Drop for MemoryDc {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteDC(self.0);
        }
    }
}

/// A 32-bit top-down DIB section and its pixel memory.
struct DibSection {
    bmp: HBITMAP,
    bits: *mut u32,
    len: usize,
}

impl DibSection {
    fn create(dc: &MemoryDc, width: i32, height: i32) -> Option<Self> {
        let bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: width,
                biHeight: -height, // top-down
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut bits = std::ptr::null_mut();
        // SAFETY: `bmi` describes a valid 32bpp bitmap; `bits` receives
        // the pixel pointer owned by the returned HBITMAP.
        let bmp =
            unsafe { CreateDIBSection(Some(dc.0), &bmi, DIB_RGB_COLORS, &mut bits, None, 0) }
                .ok()?;
        let dib = Self {
            bmp,
            bits: bits as *mut u32,
            len: (width as usize) * (height as usize),
        };
        (!dib.bits.is_null()).then_some(dib)
    }

    fn pixels_mut(&mut self) -> &mut [u32] {
        // SAFETY: `bits` is non-null (checked in `create`) and points to
        // `len` pixels that live as long as `bmp`.
        unsafe { std::slice::from_raw_parts_mut(self.bits, self.len) }
    }
}

impl Drop for DibSection {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteObject(self.bmp.into());
        }
    }
}

/// Keeps an object selected into a DC and restores the previous one.
struct Selection<'a> {
    dc: &'a MemoryDc,
    old: HGDIOBJ,
}

impl<'a> Selection<'a> {
    fn select(dc: &'a MemoryDc, dib: &DibSection) -> Self {
        // SAFETY: both handles are live for the guard's lifetime.
        let old = unsafe { SelectObject(dc.0, dib.bmp.into()) };
        Self { dc, old }
    }
}

impl Drop for Selection<'_> {
    fn drop(&mut self) {
        unsafe {
            SelectObject(self.dc.0, self.old);
        }
    }
}

/// Presents `bitmap` as the full content of the layered window `hwnd`,
/// placed with its top-left at `origin` in screen coordinates.
///
/// Returns `false` if any GDI step failed; the window keeps its
/// previous content in that case.
pub(crate) fn present(hwnd: HWND, origin: Point, bitmap: &GlowBitmap) -> bool {
    let (w, h) = (bitmap.width(), bitmap.height());
    if w <= 0 || h <= 0 {
        return false;
    }

    let Some(screen) = ScreenDc::acquire() else {
        log_debug!("glow present: no screen DC");
        return false;
    };
    let Some(mem_dc) = MemoryDc::compatible_with(&screen) else {
        log_debug!("glow present: CreateCompatibleDC failed");
        return false;
    };
    let Some(mut dib) = DibSection::create(&mem_dc, w, h) else {
        log_debug!("glow present: CreateDIBSection failed for {w}x{h}");
        return false;
    };

    bitmap.write_premultiplied(dib.pixels_mut());
    let _selection = Selection::select(&mem_dc, &dib);

    let blend = BLENDFUNCTION {
        BlendOp: AC_SRC_OVER as u8,
        BlendFlags: 0,
        SourceConstantAlpha: 255,
        AlphaFormat: AC_SRC_ALPHA as u8,
    };

    // SAFETY: every handle is owned by a live guard above.
    let result = unsafe {
        UpdateLayeredWindow(
            hwnd,
            Some(screen.0),
            Some(&POINT {
                x: origin.x,
                y: origin.y,
            }),
            Some(&SIZE { cx: w, cy: h }),
            Some(mem_dc.0),
            Some(&POINT::default()),
            COLORREF(0),
            Some(&blend),
            ULW_ALPHA,
        )
    };

    result.is_ok()
}
