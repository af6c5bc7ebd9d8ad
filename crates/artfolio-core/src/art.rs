//! Placeholder artwork for the lightbox.

use base64::Engine;

/// Escape text for inclusion in SVG character data.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// 600x400 placeholder SVG with the piece title and a caption.
pub fn placeholder_svg(title: &str) -> String {
    format!(
        r##"<svg width="600" height="400" xmlns="http://www.w3.org/2000/svg">
    <rect width="100%" height="100%" fill="#f0f0f0"/>
    <text x="50%" y="40%" text-anchor="middle" font-family="Arial" font-size="24" fill="#666">{}</text>
    <text x="50%" y="60%" text-anchor="middle" font-family="Arial" font-size="16" fill="#888">Full-size illustration would appear here</text>
</svg>"##,
        escape_xml(title.trim())
    )
}

/// Placeholder as a `data:` URI usable as an `img` source.
pub fn placeholder_data_uri(title: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(placeholder_svg(title));
    format!("data:image/svg+xml;base64,{}", encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_embeds_title() {
        let svg = placeholder_svg("Moth & Lantern");
        assert!(svg.contains("Moth &amp; Lantern"));
        assert!(svg.contains(r#"width="600" height="400""#));
        assert!(svg.contains("Full-size illustration would appear here"));
    }

    #[test]
    fn test_data_uri_decodes() {
        let uri = placeholder_data_uri("Tide Pools");
        let payload = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .unwrap();
        let svg = String::from_utf8(decoded).unwrap();
        assert!(svg.contains(">Tide Pools<"));
    }
}
