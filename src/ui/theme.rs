use fltk::enums::Color;
#[cfg(target_os = "windows")]
use fltk::{prelude::*, window::Window};

use crate::app::domain::settings::DEFAULT_THEME;

/// Theme names the presentation layer knows, with their display names.
pub const THEMES: &[(&str, &str)] = &[
    ("mystery", "Mystery"),
    ("terminal", "Terminal"),
    ("vault", "Vault"),
    ("parchment", "Parchment"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub accent: Color,
    pub error: Color,
    /// Dim backdrop behind the settings panel.
    pub scrim: Color,
    pub is_dark: bool,
}

/// Palette for a theme name. Unknown names get the default theme's palette.
pub fn palette(name: &str) -> Palette {
    match name {
        "terminal" => Palette {
            background: Color::from_rgb(5, 12, 5),
            surface: Color::from_rgb(12, 28, 12),
            text: Color::from_rgb(90, 255, 120),
            accent: Color::from_rgb(40, 200, 70),
            error: Color::from_rgb(255, 70, 50),
            scrim: Color::from_rgb(2, 6, 2),
            is_dark: true,
        },
        "vault" => Palette {
            background: Color::from_rgb(28, 26, 22),
            surface: Color::from_rgb(48, 44, 36),
            text: Color::from_rgb(236, 222, 190),
            accent: Color::from_rgb(201, 162, 39),
            error: Color::from_rgb(214, 64, 48),
            scrim: Color::from_rgb(14, 13, 11),
            is_dark: true,
        },
        "parchment" => Palette {
            background: Color::from_rgb(244, 233, 208),
            surface: Color::from_rgb(252, 246, 230),
            text: Color::from_rgb(58, 42, 24),
            accent: Color::from_rgb(140, 82, 30),
            error: Color::from_rgb(190, 30, 30),
            scrim: Color::from_rgb(170, 158, 132),
            is_dark: false,
        },
        _ => Palette {
            background: Color::from_rgb(18, 14, 30),
            surface: Color::from_rgb(34, 28, 54),
            text: Color::from_rgb(226, 218, 255),
            accent: Color::from_rgb(150, 110, 255),
            error: Color::from_rgb(255, 60, 90),
            scrim: Color::from_rgb(8, 6, 14),
            is_dark: true,
        },
    }
}

/// Position of `name` in [`THEMES`], falling back to the default theme.
pub fn theme_index(name: &str) -> usize {
    THEMES
        .iter()
        .position(|(n, _)| *n == name)
        .or_else(|| THEMES.iter().position(|(n, _)| *n == DEFAULT_THEME))
        .unwrap_or(0)
}

/// Theme name for a dropdown index.
pub fn index_to_theme(index: i32) -> Option<&'static str> {
    if index < 0 {
        return None;
    }
    THEMES.get(index as usize).map(|(name, _)| *name)
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Attribute 20 on Windows 11 / Windows 10 2004+, 19 before that
        for attribute in [20, 19] {
            let _ = DwmSetWindowAttribute(
                hwnd,
                DWMWINDOWATTRIBUTE(attribute),
                from_ref(&on).cast(),
                size_of::<i32>() as u32,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_uses_default_palette() {
        assert_eq!(palette("neon-disco"), palette(DEFAULT_THEME));
        assert_ne!(palette("parchment"), palette(DEFAULT_THEME));
    }

    #[test]
    fn test_only_parchment_is_light() {
        for (name, _) in THEMES {
            assert_eq!(palette(name).is_dark, *name != "parchment", "{name}");
        }
    }

    #[test]
    fn test_theme_index_round_trip() {
        for (i, (name, _)) in THEMES.iter().enumerate() {
            assert_eq!(theme_index(name), i);
            assert_eq!(index_to_theme(i as i32), Some(*name));
        }
        assert_eq!(theme_index("unknown"), theme_index(DEFAULT_THEME));
        assert_eq!(index_to_theme(-1), None);
        assert_eq!(index_to_theme(THEMES.len() as i32), None);
    }
}
