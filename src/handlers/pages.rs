/// Background for a confirmed member
pub const PAGE_GREEN: &str = "#00FF00";

/// Background for every negative outcome
pub const PAGE_RED: &str = "#FF0000";

/// Render a full-screen result page.
///
/// The page is meant to be glanced at from a distance after scanning
/// a pass, so the verdict is carried by the background color as much
/// as by the text. `message` may contain HTML entities.
pub fn render_page(background: &str, title: &str, message: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"de\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body style=\"background-color:{background};\">\n\
         <h1 style=\"text-align:center;font-family:sans-serif;margin-top:40vh;\">{message}</h1>\n\
         </body>\n\
         </html>\n"
    )
}

/// Escape member-provided text for embedding in a page.
///
/// HTML metacharacters are neutralized and German umlauts become
/// named entities so the page renders the same regardless of the
/// client's charset handling.
pub fn escape_display_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            'ä' => out.push_str("&auml;"),
            'ö' => out.push_str("&ouml;"),
            'ü' => out.push_str("&uuml;"),
            'Ä' => out.push_str("&Auml;"),
            'Ö' => out.push_str("&Ouml;"),
            'Ü' => out.push_str("&Uuml;"),
            'ß' => out.push_str("&szlig;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_carries_background_and_message() {
        let page = render_page(PAGE_GREEN, "Mitglied", "Anna Muster ist Mitglied!");
        assert!(page.contains("background-color:#00FF00"));
        assert!(page.contains("Anna Muster ist Mitglied!"));
        assert!(page.contains("<title>Mitglied</title>"));
    }

    #[test]
    fn test_umlauts_become_entities() {
        assert_eq!(escape_display_text("Jürgen Müller"), "J&uuml;rgen M&uuml;ller");
        assert_eq!(escape_display_text("Größe"), "Gr&ouml;&szlig;e");
        assert_eq!(escape_display_text("Älter Öfter Über"), "&Auml;lter &Ouml;fter &Uuml;ber");
    }

    #[test]
    fn test_html_metacharacters_are_neutralized() {
        assert_eq!(
            escape_display_text("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
        assert_eq!(escape_display_text("A & B \"C\""), "A &amp; B &quot;C&quot;");
    }

    #[test]
    fn test_plain_ascii_passes_through() {
        assert_eq!(escape_display_text("Anna Muster"), "Anna Muster");
    }
}
