/**
 * Rich Text Tests
 *
 * Placeholder normalization across the XLIFF and XMB dialects.
 */

#[cfg(test)]
mod tests {
    use xliffmerge::{Fragment, I18nFormat, Placeholder, PlaceholderKind, RichText};

    fn two_interpolations() -> RichText {
        RichText::new()
            .placeholder(Placeholder::interpolation(0))
            .text(" of ")
            .placeholder(Placeholder::interpolation(1))
            .text(" entries")
    }

    #[test]
    fn should_write_xliff_placeholders_self_closing() {
        assert_eq!(
            two_interpolations().to_markup(I18nFormat::Xlf),
            "<x id=\"INTERPOLATION\"/> of <x id=\"INTERPOLATION_1\"/> entries"
        );
    }

    #[test]
    fn should_write_xmb_placeholders_with_example() {
        assert_eq!(
            two_interpolations().to_markup(I18nFormat::Xmb),
            "<ph name=\"INTERPOLATION\"><ex>INTERPOLATION</ex></ph> of \
             <ph name=\"INTERPOLATION_1\"><ex>INTERPOLATION_1</ex></ph> entries"
        );
    }

    #[test]
    fn should_round_trip_placeholders_in_both_dialects() {
        let original = two_interpolations();
        for format in I18nFormat::ALL {
            let markup = original.to_markup(format);
            let reparsed = RichText::parse_markup(&markup, format).unwrap();
            assert_eq!(reparsed, original, "dialect {}", format);
        }
    }

    #[test]
    fn should_convert_between_dialects() {
        let xlf = "Eintrag <x id=\"INTERPOLATION\"/> wurde hinzugefügt";
        let text = RichText::parse_markup(xlf, I18nFormat::Xlf).unwrap();
        let xmb = text.to_markup(I18nFormat::Xmb);
        assert_eq!(
            xmb,
            "Eintrag <ph name=\"INTERPOLATION\"><ex>INTERPOLATION</ex></ph> wurde hinzugefügt"
        );
        assert_eq!(RichText::parse_markup(&xmb, I18nFormat::Xmb).unwrap(), text);
    }

    #[test]
    fn should_drop_text_injected_into_placeholders() {
        let text = RichText::parse_markup("a<x id=\"INTERPOLATION\">junk</x>b", I18nFormat::Xlf)
            .unwrap();
        assert_eq!(text.to_markup(I18nFormat::Xlf), "a<x id=\"INTERPOLATION\"/>b");

        let text =
            RichText::parse_markup("<ph name=\"ICU\"><ex>x</ex>junk</ph>", I18nFormat::Xmb).unwrap();
        assert_eq!(text.to_markup(I18nFormat::Xmb), "<ph name=\"ICU\"><ex>ICU</ex></ph>");
    }

    #[test]
    fn should_classify_parsed_placeholders() {
        let text = RichText::parse_markup(
            "<x id=\"START_BOLD_TEXT\"/>fett<x id=\"CLOSE_BOLD_TEXT\"/>",
            I18nFormat::Xlf,
        )
        .unwrap();
        let kinds: Vec<_> = text.placeholders().map(Placeholder::kind).collect();
        assert_eq!(kinds, vec![PlaceholderKind::StartTag, PlaceholderKind::CloseTag]);
    }

    #[test]
    fn should_round_trip_entities_exactly() {
        let markup = "Laden &amp; Speichern &lt;b&gt; &#228;";
        let text = RichText::parse_markup(markup, I18nFormat::Xlf).unwrap();
        assert_eq!(text.to_markup(I18nFormat::Xlf), markup);
        assert_eq!(text.plain_text(), "Laden & Speichern <b> ä");
    }

    #[test]
    fn should_escape_plain_text() {
        let text = RichText::from_plain("a < b & c");
        assert_eq!(text.to_markup(I18nFormat::Xlf), "a &lt; b &amp; c");
        assert_eq!(text.plain_text(), "a < b & c");
    }

    #[test]
    fn should_keep_foreign_markup_verbatim() {
        let markup = "<b class=\"x\">fett</b> und <!-- note -->normal";
        let text = RichText::parse_markup(markup, I18nFormat::Xlf).unwrap();
        assert!(matches!(text.fragments()[0], Fragment::Markup(_)));
        assert_eq!(text.to_markup(I18nFormat::Xlf), markup);
    }

    #[test]
    fn should_turn_cdata_into_text() {
        let text = RichText::parse_markup("<![CDATA[1 < 2]]> ok", I18nFormat::Xlf).unwrap();
        assert_eq!(text.fragments(), &[Fragment::Text("1 &lt; 2 ok".to_string())]);
    }

    #[test]
    fn should_render_display_markers() {
        assert_eq!(
            two_interpolations().plain_text(),
            "{$INTERPOLATION} of {$INTERPOLATION_1} entries"
        );
    }
}
