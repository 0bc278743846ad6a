// Editor color scheme XML
//
// The scheme file carries the editor base colors verbatim (the passthrough
// fields must survive a round-trip exactly) plus the syntax-role attribute
// table. Written with a plain push-string writer; the structure is flat
// enough that an XML library would be overkill.
//
// Casing rules the host expects: <colors> values keep the leading `#` and
// are uppercased, attribute foregrounds are uppercased with the `#` removed.

use crate::color::Rgb;
use crate::derive::DerivedColors;
use crate::theme::Theme;

/// Delta for the derived line-number color (always darkened, both modes).
const LINE_NUMBER_DELTA: f64 = -0.3;

/// Render the scheme document.
///
/// `with_declaration` controls the `<?xml ...?>` prolog: the packaged
/// `resources/<name>.xml` carries it, a standalone `.icls` does not.
pub fn editor_scheme_xml(theme: &Theme, d: &DerivedColors, with_declaration: bool) -> String {
    let mut out = String::with_capacity(2048);

    if with_declaration {
        out.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    }

    let parent = if d.is_dark { "Darcula" } else { "Default" };
    out.push_str(&format!(
        "<scheme name=\"{}\" version=\"142\" parent_scheme=\"{}\">\n",
        xml_escape(&theme.name),
        parent
    ));

    out.push_str("  <colors>\n");
    push_color_option(&mut out, "BACKGROUND", theme.background);
    push_color_option(&mut out, "FOREGROUND", theme.foreground);
    push_color_option(&mut out, "CARET_COLOR", theme.cursor_color);
    push_color_option(&mut out, "SELECTION_BACKGROUND", theme.selection_background);
    push_color_option(&mut out, "SELECTION_FOREGROUND", theme.selection_foreground);
    push_color_option(
        &mut out,
        "LINE_NUMBERS_COLOR",
        theme.foreground.adjust_brightness(LINE_NUMBER_DELTA),
    );
    push_color_option(&mut out, "GUTTER_BACKGROUND", theme.background);
    out.push_str("  </colors>\n");

    out.push_str("  <attributes>\n");
    for (role, color) in syntax_roles(d) {
        push_attribute(&mut out, role, color);
    }
    out.push_str("  </attributes>\n");

    out.push_str("</scheme>\n");
    out
}

/// Syntax-role attribute table in emission order.
fn syntax_roles(d: &DerivedColors) -> [(&'static str, Rgb); 8] {
    [
        ("DEFAULT_KEYWORD", d.syntax.keyword),
        ("DEFAULT_STRING", d.syntax.string),
        ("DEFAULT_NUMBER", d.syntax.number),
        ("DEFAULT_COMMENT", d.syntax.comment),
        ("DEFAULT_IDENTIFIER", d.syntax.identifier),
        ("DEFAULT_FUNCTION_DECLARATION", d.syntax.function),
        ("DEFAULT_CLASS_NAME", d.syntax.class_name),
        ("DEFAULT_CONSTANT", d.syntax.constant),
    ]
}

fn push_color_option(out: &mut String, name: &str, color: Rgb) {
    out.push_str(&format!(
        "    <option name=\"{}\" value=\"{}\"/>\n",
        name,
        color.to_hex_upper()
    ));
}

fn push_attribute(out: &mut String, name: &str, color: Rgb) {
    out.push_str(&format!("    <option name=\"{name}\">\n"));
    out.push_str("      <value>\n");
    out.push_str(&format!(
        "        <option name=\"FOREGROUND\" value=\"{}\"/>\n",
        color.to_hex_bare_upper()
    ));
    out.push_str("      </value>\n");
    out.push_str("    </option>\n");
}

/// Minimal escaping for attribute values (theme names can contain '&').
fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derive::derive;
    use crate::theme::parse_theme_str;

    /// Pull an `<option name=".." value="..">` value back out of the XML.
    fn option_value(xml: &str, name: &str) -> Option<String> {
        let needle = format!("name=\"{name}\" value=\"");
        let start = xml.find(&needle)? + needle.len();
        let end = xml[start..].find('"')? + start;
        Some(xml[start..end].to_string())
    }

    #[test]
    fn test_base_colors_round_trip_exactly() {
        let theme = parse_theme_str("rt", "background = #1e1e1e\nforeground = #d4d4d4\n");
        let xml = editor_scheme_xml(&theme, &derive(&theme), true);

        // Passthrough fields recover the original values byte-for-byte
        // (modulo the documented uppercase convention)
        assert_eq!(option_value(&xml, "BACKGROUND").unwrap(), "#1E1E1E");
        assert_eq!(option_value(&xml, "FOREGROUND").unwrap(), "#D4D4D4");
        assert_eq!(
            Rgb::from_hex(&option_value(&xml, "BACKGROUND").unwrap()),
            Some(theme.background)
        );
        assert_eq!(
            Rgb::from_hex(&option_value(&xml, "FOREGROUND").unwrap()),
            Some(theme.foreground)
        );
    }

    #[test]
    fn test_parent_scheme_follows_classification() {
        let dark = parse_theme_str("d", "background = #000000\n");
        let light = parse_theme_str("l", "background = #ffffff\nforeground = #000000\n");
        assert!(editor_scheme_xml(&dark, &derive(&dark), true).contains("parent_scheme=\"Darcula\""));
        assert!(editor_scheme_xml(&light, &derive(&light), true).contains("parent_scheme=\"Default\""));
    }

    #[test]
    fn test_syntax_fallbacks_without_palette() {
        let theme = parse_theme_str("bare", "background = #101010\n");
        let xml = editor_scheme_xml(&theme, &derive(&theme), true);

        // keyword -> #ff00ff fallback, uppercased and bare in attributes
        assert!(xml.contains("DEFAULT_KEYWORD"));
        assert!(xml.contains("value=\"FF00FF\""));
        assert!(xml.contains("value=\"555555\"")); // comment fallback
    }

    #[test]
    fn test_declaration_toggle() {
        let theme = parse_theme_str("t", "");
        let derived = derive(&theme);
        assert!(editor_scheme_xml(&theme, &derived, true).starts_with("<?xml"));
        assert!(editor_scheme_xml(&theme, &derived, false).starts_with("<scheme"));
    }
}
