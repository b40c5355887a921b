//! Embeds the chat service as a child webview of the main window.

use log::{error, info};
use tauri::webview::WebviewBuilder;
use tauri::{AppHandle, Manager, WebviewUrl};
use tauri::{PhysicalPosition, PhysicalSize, Position, Rect, Size};
use url::Url;

use crate::constants::{GEMINI_URL, GEMINI_WEBVIEW_LABEL, MAIN_WINDOW_LABEL, TITLEBAR_HEIGHT};
use crate::errors::CommandError;

/// Physical-pixel placement of the child webview inside the main window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ChildBounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ChildBounds {
    /// Fills the window below the titlebar. Windows shorter than the
    /// titlebar get a zero-height webview.
    pub(crate) fn below_titlebar(window: PhysicalSize<u32>, scale_factor: f64) -> Self {
        let titlebar = (TITLEBAR_HEIGHT * scale_factor) as u32;
        Self {
            x: 0,
            y: titlebar as i32,
            width: window.width,
            height: window.height.saturating_sub(titlebar),
        }
    }

    pub(crate) fn position(&self) -> Position {
        Position::Physical(PhysicalPosition::new(self.x, self.y))
    }

    pub(crate) fn size(&self) -> Size {
        Size::Physical(PhysicalSize::new(self.width, self.height))
    }

    pub(crate) fn rect(&self) -> Rect {
        Rect {
            position: self.position(),
            size: self.size(),
        }
    }
}

#[tauri::command]
pub async fn create_gemini_webview(app: AppHandle) -> Result<(), CommandError> {
    info!("[webview] Initializing Gemini webview...");

    let main_window = app.get_window(MAIN_WINDOW_LABEL).ok_or_else(|| {
        error!("[webview] Main window '{}' not found", MAIN_WINDOW_LABEL);
        CommandError::WindowNotFound(MAIN_WINDOW_LABEL.to_string())
    })?;

    if app.get_webview(GEMINI_WEBVIEW_LABEL).is_some() {
        info!("[webview] Gemini webview already exists");
        return Ok(());
    }

    let scale_factor = main_window.scale_factor()?;
    let size = main_window.inner_size()?;
    let bounds = ChildBounds::below_titlebar(size, scale_factor);

    let url: Url = GEMINI_URL
        .parse()
        .map_err(|err| CommandError::Internal(format!("invalid Gemini URL: {err}")))?;
    let builder = WebviewBuilder::new(GEMINI_WEBVIEW_LABEL, WebviewUrl::External(url));

    main_window
        .add_child(builder, bounds.position(), bounds.size())
        .map_err(|err| {
            error!("[webview] Failed to add child webview: {}", err);
            CommandError::Tauri(err)
        })?;

    info!(
        "[webview] Gemini webview created ({}x{} at y={})",
        bounds.width, bounds.height, bounds.y
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_at_unit_scale() {
        let bounds = ChildBounds::below_titlebar(PhysicalSize::new(1200, 800), 1.0);
        assert_eq!(
            bounds,
            ChildBounds {
                x: 0,
                y: 32,
                width: 1200,
                height: 768,
            }
        );
    }

    #[test]
    fn test_bounds_scale_titlebar_to_physical_pixels() {
        let bounds = ChildBounds::below_titlebar(PhysicalSize::new(2400, 1600), 2.0);
        assert_eq!(bounds.y, 64);
        assert_eq!(bounds.height, 1536);

        // Fractional scale factors are truncated.
        let bounds = ChildBounds::below_titlebar(PhysicalSize::new(1500, 1000), 1.25);
        assert_eq!(bounds.y, 40);
        assert_eq!(bounds.height, 960);
    }

    #[test]
    fn test_bounds_never_underflow() {
        let bounds = ChildBounds::below_titlebar(PhysicalSize::new(300, 20), 1.0);
        assert_eq!(bounds.height, 0);
        assert_eq!(bounds.width, 300);
    }

    #[test]
    fn test_rect_uses_physical_units() {
        let bounds = ChildBounds::below_titlebar(PhysicalSize::new(640, 480), 1.0);
        let rect = bounds.rect();
        assert_eq!(
            rect.position,
            Position::Physical(PhysicalPosition::new(0, 32))
        );
        assert_eq!(rect.size, Size::Physical(PhysicalSize::new(640, 448)));
    }
}
