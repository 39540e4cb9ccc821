//! UI utilities for the couponcode CLI.

const MIN_BOX_WIDTH: usize = 33;

/// A formatted box for displaying a generated code.
pub struct CodeBox<'a> {
    code: &'a str,
    caption: Option<&'a str>,
}

impl<'a> CodeBox<'a> {
    /// Create a new code box.
    #[must_use]
    pub const fn new(code: &'a str) -> Self {
        Self {
            code,
            caption: None,
        }
    }

    /// Add a caption line under the code.
    #[must_use]
    pub const fn with_caption(mut self, caption: &'a str) -> Self {
        self.caption = Some(caption);
        self
    }

    /// Render the box as lines of text.
    pub fn lines(&self) -> Vec<String> {
        let code_line = format!("Code:  {}", format_code_spaced(self.code));
        let content_width = self
            .caption
            .map_or(0, |c| c.chars().count())
            .max(code_line.chars().count());
        let width = MIN_BOX_WIDTH.max(content_width + 4);
        let blank = format!("  │{}│", " ".repeat(width));

        let mut lines = vec![
            format!("  ┌{}┐", "─".repeat(width)),
            blank.clone(),
            format!("  │{}│", center_in_box(&code_line, width)),
            blank.clone(),
        ];

        if let Some(caption) = self.caption {
            lines.push(format!("  │{}│", center_in_box(caption, width)));
            lines.push(blank);
        }

        lines.push(format!("  └{}┘", "─".repeat(width)));
        lines
    }

    /// Display the code box to stdout.
    pub fn display(&self) {
        for line in self.lines() {
            println!("{}", line);
        }
    }
}

/// Space out the characters of a code, keeping separators visible.
fn format_code_spaced(code: &str) -> String {
    code.chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn center_in_box(content: &str, width: usize) -> String {
    let content_len = content.chars().count();
    let padding = width.saturating_sub(content_len);
    let left = padding / 2;
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), content, " ".repeat(right))
}

/// Describe a code shape, e.g. "2 parts of 4 characters".
pub fn describe_shape(parts: usize, part_length: usize) -> String {
    let parts_word = if parts == 1 { "part" } else { "parts" };
    format!("{} {} of {} characters", parts, parts_word, part_length)
}
