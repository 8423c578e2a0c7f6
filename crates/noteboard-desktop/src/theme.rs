//! Theme configuration for the desktop app

use std::sync::OnceLock;

pub use noteboard_core::config::ThemeMode;

/// Cached system dark mode preference (detected once at startup)
static SYSTEM_DARK_MODE: OnceLock<bool> = OnceLock::new();

/// Resolved theme (light or dark)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolvedTheme {
    Light,
    #[default]
    Dark,
}

/// Resolve theme mode to actual light/dark theme
#[must_use]
pub fn resolve_theme(mode: ThemeMode) -> ResolvedTheme {
    resolve_theme_with(mode, is_system_dark_mode)
}

fn resolve_theme_with(mode: ThemeMode, system_dark: impl FnOnce() -> bool) -> ResolvedTheme {
    match mode {
        ThemeMode::Light => ResolvedTheme::Light,
        ThemeMode::Dark => ResolvedTheme::Dark,
        ThemeMode::System if system_dark() => ResolvedTheme::Dark,
        ThemeMode::System => ResolvedTheme::Light,
    }
}

/// Detect system dark mode preference (cached after first call)
#[must_use]
pub fn is_system_dark_mode() -> bool {
    *SYSTEM_DARK_MODE.get_or_init(detect_system_dark_mode)
}

#[cfg(target_os = "macos")]
fn detect_system_dark_mode() -> bool {
    std::process::Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
        .map(|output| {
            String::from_utf8_lossy(&output.stdout)
                .trim()
                .eq_ignore_ascii_case("dark")
        })
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to detect system theme: {}", e);
            false
        })
}

#[cfg(target_os = "windows")]
fn detect_system_dark_mode() -> bool {
    // AppsUseLightTheme = 0x0 means dark
    std::process::Command::new("reg")
        .args([
            "query",
            r"HKCU\SOFTWARE\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ])
        .output()
        .map(|output| String::from_utf8_lossy(&output.stdout).contains("0x0"))
        .unwrap_or_else(|e| {
            tracing::warn!("Failed to detect system theme: {}", e);
            false
        })
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn detect_system_dark_mode() -> bool {
    std::env::var("GTK_THEME").is_ok_and(|theme| theme.to_lowercase().contains("dark"))
}

/// Color palette for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    /// Page background
    pub bg_page: &'static str,
    /// Form and note cards
    pub bg_card: &'static str,
    /// Inputs, file rows, preview boxes
    pub bg_input: &'static str,
    pub bg_hover: &'static str,
    pub text_primary: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub overlay: &'static str,
    pub error: &'static str,
    pub danger_hover: &'static str,
}

/// Light theme colors
pub const LIGHT_PALETTE: ColorPalette = ColorPalette {
    bg_page: "#f3f4f6",
    bg_card: "#ffffff",
    bg_input: "#f9fafb",
    bg_hover: "#e5e7eb",
    text_primary: "#111827",
    text_muted: "#6b7280",
    border: "#111827",
    overlay: "rgba(255, 255, 255, 0.6)",
    error: "#dc2626",
    danger_hover: "#b91c1c",
};

/// Dark theme colors
pub const DARK_PALETTE: ColorPalette = ColorPalette {
    bg_page: "#000000",
    bg_card: "#111827",
    bg_input: "#1f2937",
    bg_hover: "#374151",
    text_primary: "#ffffff",
    text_muted: "#d1d5db",
    border: "#ffffff",
    overlay: "rgba(0, 0, 0, 0.5)",
    error: "#ef4444",
    danger_hover: "#fca5a5",
};

impl ResolvedTheme {
    /// Get the color palette for this theme
    #[must_use]
    pub const fn palette(self) -> &'static ColorPalette {
        match self {
            Self::Light => &LIGHT_PALETTE,
            Self::Dark => &DARK_PALETTE,
        }
    }

    /// Value for the `data-theme` attribute.
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_ignore_system_preference() {
        assert_eq!(resolve_theme_with(ThemeMode::Light, || true), ResolvedTheme::Light);
        assert_eq!(resolve_theme_with(ThemeMode::Dark, || false), ResolvedTheme::Dark);
    }

    #[test]
    fn system_mode_follows_detection() {
        assert_eq!(resolve_theme_with(ThemeMode::System, || true), ResolvedTheme::Dark);
        assert_eq!(resolve_theme_with(ThemeMode::System, || false), ResolvedTheme::Light);
    }

    #[test]
    fn palettes_differ_per_theme() {
        assert_eq!(ResolvedTheme::Dark.palette().bg_page, "#000000");
        assert_ne!(ResolvedTheme::Light.palette(), ResolvedTheme::Dark.palette());
        assert_eq!(ResolvedTheme::Light.as_attr(), "light");
    }
}
