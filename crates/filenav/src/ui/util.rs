use std::path::Path;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: &str = "...";

/// Shortens `text` to `max_width` display columns, ending with `...` when
/// anything was cut.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }

    let ellipsis_width = ELLIPSIS.width();
    if max_width <= ellipsis_width {
        return ELLIPSIS.chars().take(max_width).collect();
    }

    let budget = max_width - ellipsis_width;
    let mut truncated = String::new();
    let mut used_width = 0;
    for character in text.chars() {
        let character_width = character.width().unwrap_or(0);
        if used_width + character_width > budget {
            break;
        }

        truncated.push(character);
        used_width += character_width;
    }
    truncated.push_str(ELLIPSIS);

    truncated
}

/// Greedily word-wraps `text` to `width` columns, keeping explicit newlines.
pub fn wrap_lines(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let separator_width = usize::from(!current_line.is_empty());
            if !current_line.is_empty()
                && current_line.width() + separator_width + word.width() > width
            {
                lines.push(std::mem::take(&mut current_line));
            }

            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        lines.push(current_line);
    }

    lines
}

/// Formats `path` for display, replacing the home directory with `~`.
pub fn display_path(path: &Path) -> String {
    if let Some(home) = dirs::home_dir()
        && let Ok(relative) = path.strip_prefix(&home)
    {
        if relative.as_os_str().is_empty() {
            return "~".to_string();
        }

        return format!("~/{}", relative.display());
    }

    path.display().to_string()
}
