use figlet_rs::FIGfont;

/// Render `text` in the standard FIGlet font, one string per row
///
/// Falls back to the plain text if the font cannot render it.
pub fn render_banner(text: &str) -> Vec<String> {
    let font = FIGfont::standard()
        .map_err(|e| log::warn!("Cannot load FIGlet font: {}", e))
        .ok();
    let figure = font.as_ref().and_then(|font| font.convert(text));

    match figure {
        Some(figure) => figure
            .to_string()
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        None => vec![text.to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_has_rows() {
        let rows = render_banner("Folio");
        assert!(rows.len() > 1);
        assert!(rows.iter().all(|row| !row.is_empty()));
    }

    #[test]
    fn test_empty_text_falls_back() {
        let rows = render_banner("");
        assert!(rows.len() <= 1);
    }
}
