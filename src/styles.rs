//! Style inspection for template rows.
//!
//! Row insertion copies a cell's style only when the template gave it one;
//! [`StyleSummary`] reduces a umya `Style` to the parts a questionnaire row
//! actually carries so tests can compare inserted rows with their source.

use serde::Serialize;
use umya_spreadsheet::structs::{EnumTrait, VerticalAlignmentValues};
use umya_spreadsheet::{Border, Font, Style};

/// True when any style component was set explicitly.
pub fn has_explicit_style(style: &Style) -> bool {
    style.get_font().is_some()
        || style.get_fill().is_some()
        || style.get_borders().is_some()
        || style.get_alignment().is_some()
        || style.get_number_format().is_some()
        || style.get_protection().is_some()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleSummary {
    pub font: Option<FontSummary>,
    pub fill_color: Option<String>,
    pub borders: [Option<String>; 4],
    pub number_format: Option<String>,
    pub wrap_text: bool,
    pub vertical: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FontSummary {
    pub name: Option<String>,
    pub size: Option<f64>,
    pub bold: bool,
    pub italic: bool,
}

pub fn summarize_style(style: &Style) -> StyleSummary {
    let font = style.get_font().map(summarize_font);
    let fill_color = style
        .get_fill()
        .and_then(|fill| fill.get_pattern_fill())
        .and_then(|pattern| pattern.get_foreground_color())
        .map(|color| color.get_argb().to_string())
        .filter(|argb| !argb.is_empty());
    let borders = style
        .get_borders()
        .map(|borders| {
            [
                border_style(borders.get_left_border()),
                border_style(borders.get_right_border()),
                border_style(borders.get_top_border()),
                border_style(borders.get_bottom_border()),
            ]
        })
        .unwrap_or_default();
    let number_format = style.get_number_format().and_then(|fmt| {
        let code = fmt.get_format_code();
        if code.eq_ignore_ascii_case("general") {
            None
        } else {
            Some(code.to_string())
        }
    });
    let (wrap_text, vertical) = style
        .get_alignment()
        .map(|alignment| {
            let vertical = if alignment.get_vertical() != &VerticalAlignmentValues::Bottom {
                Some(alignment.get_vertical().get_value_string().to_string())
            } else {
                None
            };
            (*alignment.get_wrap_text(), vertical)
        })
        .unwrap_or((false, None));

    StyleSummary {
        font,
        fill_color,
        borders,
        number_format,
        wrap_text,
        vertical,
    }
}

fn summarize_font(font: &Font) -> FontSummary {
    FontSummary {
        name: Some(font.get_name().to_string()).filter(|s| !s.is_empty()),
        size: Some(*font.get_size()).filter(|s| *s > 0.0),
        bold: *font.get_bold(),
        italic: *font.get_italic(),
    }
}

fn border_style(border: &Border) -> Option<String> {
    let style = border.get_border_style();
    if style.eq_ignore_ascii_case("none") {
        None
    } else {
        Some(style.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_style_is_not_explicit() {
        assert!(!has_explicit_style(&Style::default()));
        assert_eq!(summarize_style(&Style::default()), StyleSummary::default());
    }

    #[test]
    fn summary_captures_bold_and_borders() {
        let mut style = Style::default();
        style.get_font_mut().set_bold(true);
        style
            .get_borders_mut()
            .get_bottom_mut()
            .set_border_style(Border::BORDER_THIN);

        assert!(has_explicit_style(&style));
        let summary = summarize_style(&style);
        assert!(summary.font.as_ref().is_some_and(|font| font.bold));
        assert_eq!(summary.borders[3].as_deref(), Some("thin"));
        assert_eq!(summary.borders[0], None);
    }
}
