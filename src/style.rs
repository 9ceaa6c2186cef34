//! Static presentation-token tables for the picker popup.
//!
//! Pure enum-to-token lookups with a defined fallback for unrecognized
//! keys; no styling is computed.

/// Light or dark rendering of the popup surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

/// Utility-class tokens for a theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
}

impl ThemeMode {
    /// Resolves a theme name, falling back to light for unrecognized keys
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub const fn tokens(self) -> ThemeTokens {
        match self {
            Self::Light => ThemeTokens {
                surface: "bg-white",
                text: "text-zinc-900",
                muted: "text-zinc-500",
                border: "border-zinc-200",
            },
            Self::Dark => ThemeTokens {
                surface: "bg-zinc-900",
                text: "text-zinc-50",
                muted: "text-zinc-400",
                border: "border-zinc-800",
            },
        }
    }
}

/// Accent color applied to the selected day and action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorScheme {
    #[default]
    Default,
    Blue,
    Green,
    Amber,
    Rose,
}

/// Utility-class tokens for a color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemeTokens {
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub ring: &'static str,
}

impl ColorScheme {
    /// Resolves a scheme name, falling back to the default scheme for
    /// unrecognized keys
    pub fn from_name(name: &str) -> Self {
        match name {
            "blue" => Self::Blue,
            "green" => Self::Green,
            "amber" => Self::Amber,
            "rose" => Self::Rose,
            _ => Self::Default,
        }
    }

    pub const fn tokens(self) -> SchemeTokens {
        match self {
            Self::Default => SchemeTokens {
                accent: "bg-zinc-900 text-white",
                accent_hover: "hover:bg-zinc-800",
                ring: "ring-zinc-400",
            },
            Self::Blue => SchemeTokens {
                accent: "bg-blue-600 text-white",
                accent_hover: "hover:bg-blue-700",
                ring: "ring-blue-400",
            },
            Self::Green => SchemeTokens {
                accent: "bg-emerald-600 text-white",
                accent_hover: "hover:bg-emerald-700",
                ring: "ring-emerald-400",
            },
            Self::Amber => SchemeTokens {
                accent: "bg-amber-500 text-zinc-900",
                accent_hover: "hover:bg-amber-600",
                ring: "ring-amber-400",
            },
            Self::Rose => SchemeTokens {
                accent: "bg-rose-600 text-white",
                accent_hover: "hover:bg-rose-700",
                ring: "ring-rose-400",
            },
        }
    }
}

/// Where the popup anchors relative to the input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PopupPosition {
    #[default]
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl PopupPosition {
    /// Resolves a position name, falling back to bottom-left for
    /// unrecognized keys
    pub fn from_name(name: &str) -> Self {
        match name {
            "bottom-right" => Self::BottomRight,
            "top-left" => Self::TopLeft,
            "top-right" => Self::TopRight,
            _ => Self::BottomLeft,
        }
    }

    /// Anchor classes placing the popup against the input field
    pub const fn anchor_classes(self) -> &'static str {
        match self {
            Self::BottomLeft => "top-full left-0 mt-2",
            Self::BottomRight => "top-full right-0 mt-2",
            Self::TopLeft => "bottom-full left-0 mb-2",
            Self::TopRight => "bottom-full right-0 mb-2",
        }
    }
}
