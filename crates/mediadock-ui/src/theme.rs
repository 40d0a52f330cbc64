//! Design tokens and the active-theme context.
//!
//! Palette colors come from the host's theme catalog and are exposed to the
//! stylesheet as CSS custom properties. Everything else (type scale, spacing,
//! radii, motion) is fixed here.

use leptos::prelude::*;

use crate::types::Theme;

/// Typography settings.
pub mod typography {
    /// Primary font family.
    pub const FONT_FAMILY: &str =
        "'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif";

    /// Font sizes.
    pub mod sizes {
        /// Extra small (badges, ad label).
        pub const XS: &str = "0.625rem";
        /// Small (tab labels, ad text).
        pub const SM: &str = "0.75rem";
        /// Base size.
        pub const BASE: &str = "0.875rem";
        /// Large size.
        pub const LG: &str = "1.125rem";
        /// Screen titles.
        pub const HEADING: &str = "1.75rem";
    }
}

/// Spacing values.
pub mod spacing {
    /// Extra small spacing.
    pub const XS: &str = "0.25rem";
    /// Small spacing.
    pub const SM: &str = "0.5rem";
    /// Medium spacing.
    pub const MD: &str = "1rem";
    /// Large spacing.
    pub const LG: &str = "1.25rem";
    /// Extra large spacing.
    pub const XL: &str = "2rem";
}

/// Border radius values.
pub mod radius {
    /// Small radius.
    pub const SM: &str = "0.5rem";
    /// Medium radius.
    pub const MD: &str = "0.75rem";
    /// Large radius.
    pub const LG: &str = "1rem";
    /// Full/pill radius.
    pub const FULL: &str = "9999px";
}

/// Transition timings.
pub mod animation {
    /// Fast transition for interactive elements.
    pub const FAST: &str = "0.15s cubic-bezier(0.4, 0, 0.2, 1)";
    /// Normal transition for most UI changes.
    pub const NORMAL: &str = "0.2s cubic-bezier(0.4, 0, 0.2, 1)";
}

/// Generate CSS custom properties for `theme`.
pub fn generate_css_variables(theme: &Theme) -> String {
    let c = &theme.colors;
    format!(
        r":root {{
  /* Palette: {name} */
  --color-primary: {primary};
  --color-primary-light: {primary_light};
  --color-primary-dark: {primary_dark};
  --color-background: {background};
  --color-surface: {surface};
  --color-card: {card};
  --color-text: {text};
  --color-text-secondary: {text_secondary};
  --color-border: {border};
  --color-accent: {accent};
  --color-success: {success};
  --color-warning: {warning};
  --color-error: {error};

  /* Typography */
  --font-family: {font_family};
  --font-size-xs: {font_xs};
  --font-size-sm: {font_sm};
  --font-size-base: {font_base};
  --font-size-lg: {font_lg};
  --font-size-heading: {font_heading};

  /* Spacing */
  --spacing-xs: {spacing_xs};
  --spacing-sm: {spacing_sm};
  --spacing-md: {spacing_md};
  --spacing-lg: {spacing_lg};
  --spacing-xl: {spacing_xl};

  /* Border radius */
  --radius-sm: {radius_sm};
  --radius-md: {radius_md};
  --radius-lg: {radius_lg};
  --radius-full: {radius_full};

  /* Transitions */
  --transition-fast: {transition_fast};
  --transition-normal: {transition_normal};
}}",
        name = theme.name,
        primary = c.primary,
        primary_light = c.primary_light,
        primary_dark = c.primary_dark,
        background = c.background,
        surface = c.surface,
        card = c.card,
        text = c.text,
        text_secondary = c.text_secondary,
        border = c.border,
        accent = c.accent,
        success = c.success,
        warning = c.warning,
        error = c.error,
        font_family = typography::FONT_FAMILY,
        font_xs = typography::sizes::XS,
        font_sm = typography::sizes::SM,
        font_base = typography::sizes::BASE,
        font_lg = typography::sizes::LG,
        font_heading = typography::sizes::HEADING,
        spacing_xs = spacing::XS,
        spacing_sm = spacing::SM,
        spacing_md = spacing::MD,
        spacing_lg = spacing::LG,
        spacing_xl = spacing::XL,
        radius_sm = radius::SM,
        radius_md = radius::MD,
        radius_lg = radius::LG,
        radius_full = radius::FULL,
        transition_fast = animation::FAST,
        transition_normal = animation::NORMAL,
    )
}

/// The active theme, shared by every screen.
///
/// `None` until the host has answered `get_current_theme`.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// The active theme.
    pub current: ReadSignal<Option<Theme>>,
    set_current: WriteSignal<Option<Theme>>,
}

impl ThemeContext {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        let (current, set_current) = signal::<Option<Theme>>(None);
        Self {
            current,
            set_current,
        }
    }

    /// Replace the active theme.
    pub fn set(&self, theme: Theme) {
        self.set_current.set(Some(theme));
    }

    /// Identifier of the active theme, if loaded.
    pub fn current_id(&self) -> Option<String> {
        self.current.with(|theme| theme.as_ref().map(|t| t.id.clone()))
    }

    /// Stylesheet for the active theme; empty until loaded.
    pub fn css(&self) -> String {
        self.current
            .with(|theme| theme.as_ref().map(generate_css_variables))
            .unwrap_or_default()
    }
}

impl Default for ThemeContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the theme context.
///
/// # Panics
/// Panics if called outside of the root `App`.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}
