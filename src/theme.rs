//! Terminal styles for the console views.
//!
//! Pure data, applied through [`crate::output::Output::paint`] only when
//! color is enabled.
//!
//! - Bold: captions ("Title: ", ...)
//! - Dark gray: the separator rule
//! - Cyan: the command menu and prompt

use crossterm::style::{Attribute, Color, ContentStyle};

/// Field captions.
pub fn caption() -> ContentStyle {
    let mut style = ContentStyle::new();
    style.attributes.set(Attribute::Bold);
    style
}

/// Separator rule between the fields and the menu.
pub fn separator() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::DarkGrey),
        ..ContentStyle::new()
    }
}

/// Command menu and prompt.
pub fn menu() -> ContentStyle {
    ContentStyle {
        foreground_color: Some(Color::Cyan),
        ..ContentStyle::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_is_bold() {
        assert!(caption().attributes.has(Attribute::Bold));
        assert_eq!(caption().foreground_color, None);
    }

    #[test]
    fn separator_and_menu_colors() {
        assert_eq!(separator().foreground_color, Some(Color::DarkGrey));
        assert_eq!(menu().foreground_color, Some(Color::Cyan));
    }
}
