/**
 * Merge Engine Tests
 */

#[path = "../util/mod.rs"]
mod utils;

#[cfg(test)]
mod tests {
    use super::utils::*;
    use xliffmerge::xml::{serialize_node, Node};
    use xliffmerge::{merge, Error, I18nFormat, MergeSummary, RichText, TargetState};

    mod xliff_tests {
        use super::*;

        #[test]
        fn should_create_default_language_file_from_master() {
            let master = xlf(MASTER1_XLF);
            let (de, summary) = merge(&master, None, "de", "de").unwrap();

            assert!(summary.created);
            assert_eq!(summary.added_count, 14);
            assert_eq!(summary.removed_count, 0);
            assert_eq!(de.source_language().as_deref(), Some("de"));
            assert_eq!(de.target_language().as_deref(), Some("de"));
            for unit in de.trans_units() {
                assert_eq!(unit.target_content(), Some(unit.source_content()));
                assert_eq!(unit.target_state(), Some(TargetState::Final));
            }
        }

        #[test]
        fn should_create_other_language_file_with_state_new() {
            let master = xlf(MASTER1_XLF);
            let (en, _) = merge(&master, None, "de", "en").unwrap();
            assert_eq!(en.source_language().as_deref(), Some("de"));
            assert_eq!(en.target_language().as_deref(), Some("en"));
            for unit in en.trans_units() {
                assert_eq!(unit.target_content(), Some(unit.source_content()));
                assert_eq!(unit.target_state(), Some(TargetState::New));
            }
            // the master itself is left alone
            assert_eq!(master.to_xml_string(), MASTER1_XLF);
        }

        #[test]
        fn should_be_idempotent() {
            let master = xlf(MASTER1_XLF);
            let (en, _) = merge(&master, None, "de", "en").unwrap();
            let first = en.to_xml_string();

            let (again, summary) = merge(&master, Some(xlf(&first)), "de", "en").unwrap();
            assert!(summary.is_unchanged());
            assert_eq!(summary, MergeSummary::default());
            assert_eq!(again.to_xml_string(), first);
        }

        #[test]
        fn should_copy_source_markup_verbatim_into_new_target() {
            let source = "Hi <x id=\"INTERPOLATION\" equiv-text=\"{{ name }}\"/>, \
                          <![CDATA[a < b]]> <x id=\"START_TAG_B\" ctype=\"x-b\">b</x>";
            let master = xlf(&xlf_with_units(&[("greeting", source, None)]));
            let (de, _) = merge(&master, None, "en", "de").unwrap();

            let unit = de.trans_unit_with_id("greeting").unwrap();
            let target = unit.element().first_child("target").unwrap();
            assert_eq!(
                serialize_node(&Node::Element(target.clone())),
                format!("<target state=\"new\">{}</target>", source)
            );
        }

        #[test]
        fn should_remove_obsolete_and_add_new_units() {
            let existing = xlf(&xlf_with_units(&[
                ("A", "a", Some("a-en")),
                ("B", "b", Some("b-en")),
                ("C", "c", Some("c-en")),
            ]));
            let master = xlf(&xlf_with_units(&[("A", "a", None), ("C", "c", None), ("D", "d", None)]));

            let (merged, summary) = merge(&master, Some(existing), "en", "de").unwrap();
            assert_eq!(ids(&merged), vec!["A", "C", "D"]);
            assert_eq!(summary.added_count, 1);
            assert_eq!(summary.removed_count, 1);
            assert!(!summary.created);

            let content = |id: &str| {
                merged
                    .trans_unit_with_id(id)
                    .unwrap()
                    .target_content()
                    .unwrap()
                    .plain_text()
            };
            assert_eq!(content("A"), "a-en");
            assert_eq!(content("C"), "c-en");
            assert_eq!(content("D"), "d");
            assert_eq!(
                merged.trans_unit_with_id("D").unwrap().target_state(),
                Some(TargetState::New)
            );
        }

        #[test]
        fn should_follow_master_order() {
            let existing = xlf(&xlf_with_units(&[("B", "b", Some("x")), ("A", "a", Some("y"))]));
            let master = xlf(&xlf_with_units(&[("A", "a", None), ("B", "b", None)]));
            let (merged, _) = merge(&master, Some(existing), "en", "de").unwrap();
            assert_eq!(ids(&merged), vec!["A", "B"]);
        }

        #[test]
        fn should_preserve_translation_when_source_drifts() {
            let master = xlf(MASTER1_XLF);
            let (mut en, _) = merge(&master, None, "de", "en").unwrap();
            en.translate(ID_SCHLIESSEN, &RichText::from_plain("Close"))
                .unwrap();
            let saved = en.to_xml_string();

            let drifted = MASTER1_XLF.replace("<source>Schließen</source>", "<source>Zumachen</source>");
            let (merged, summary) = merge(&xlf(&drifted), Some(xlf(&saved)), "de", "en").unwrap();

            let unit = merged.trans_unit_with_id(ID_SCHLIESSEN).unwrap();
            assert_eq!(unit.source_content().plain_text(), "Zumachen");
            assert_eq!(unit.target_content().unwrap().plain_text(), "Close");
            assert_eq!(unit.target_state(), Some(TargetState::Translated));
            assert_eq!(summary.changed_source_ids, vec![ID_SCHLIESSEN.to_string()]);
            assert_eq!(summary.added_count, 0);
        }

        #[test]
        fn should_refresh_metadata_from_master() {
            let master = xlf(MASTER1_XLF);
            let (en, _) = merge(&master, None, "de", "en").unwrap();
            let saved = en.to_xml_string();

            let moved = MASTER1_XLF.replace(
                "<context context-type=\"linenumber\">12</context>",
                "<context context-type=\"linenumber\">40</context>",
            );
            let (merged, summary) = merge(&xlf(&moved), Some(xlf(&saved)), "de", "en").unwrap();
            let unit = merged.trans_unit_with_id(ID_SCHLIESSEN).unwrap();
            assert_eq!(unit.source_references()[0].line_number, 40);
            assert!(summary.changed_source_ids.is_empty());
        }

        #[test]
        fn should_keep_state_new_for_untouched_units() {
            let master = xlf(&xlf_with_units(&[("X", "Close", None)]));
            let existing = xlf(&xlf_with_units(&[("X", "Close", Some("Close"))]).replace(
                "<target>Close</target>",
                "<target state=\"new\">Close</target>",
            ));

            let (merged, summary) = merge(&master, Some(existing), "en", "en").unwrap();
            let unit = merged.trans_unit_with_id("X").unwrap();
            assert_eq!(unit.target_state(), Some(TargetState::New));
            assert_eq!(unit.target_content().unwrap().plain_text(), "Close");
            assert_eq!(summary.added_count, 0);
        }

        #[test]
        fn should_remove_master_target_when_existing_unit_has_none() {
            let master = xlf(&xlf_with_units(&[("X", "x", Some("from master"))]));
            let existing = xlf(&xlf_with_units(&[("X", "x", None)]));
            let (merged, _) = merge(&master, Some(existing), "en", "de").unwrap();
            assert_eq!(merged.trans_unit_with_id("X").unwrap().target_content(), None);
            assert!(!merged.to_xml_string().contains("<target>"));
        }

        #[test]
        fn should_remove_two_units_and_keep_manual_translation() {
            let (mut en, _) = merge(&xlf(MASTER1_XLF), None, "de", "en").unwrap();
            assert_eq!(en.len(), 14);
            en.translate(ID_SCHLIESSEN, &RichText::from_plain("Close"))
                .unwrap();
            let saved = en.to_xml_string();

            let (merged, summary) = merge(&xlf(MASTER2_XLF), Some(xlf(&saved)), "de", "en").unwrap();
            assert_eq!(summary.added_count, 0);
            assert_eq!(summary.removed_count, 2);
            assert_eq!(
                summary.report_lines("en"),
                vec!["removed 2 unused trans-units in \"en\"".to_string()]
            );
            assert_eq!(merged.len(), 12);
            assert!(merged.trans_unit_with_id(ID_STARTSEITE).is_none());
            assert!(merged.trans_unit_with_id(ID_EINSTELLUNGEN).is_none());

            let unit = merged.trans_unit_with_id(ID_SCHLIESSEN).unwrap();
            assert_eq!(unit.target_content().unwrap().plain_text(), "Close");
            assert_eq!(unit.target_state(), Some(TargetState::Translated));
        }

        #[test]
        fn should_self_fill_default_language_including_new_units() {
            let (de, _) = merge(&xlf(MASTER2_XLF), None, "de", "de").unwrap();
            let saved = de.to_xml_string();
            let (merged, summary) = merge(&xlf(MASTER1_XLF), Some(xlf(&saved)), "de", "de").unwrap();
            assert_eq!(summary.added_count, 2);
            for unit in merged.trans_units() {
                assert_eq!(unit.target_content(), Some(unit.source_content()));
                assert!(unit.target_state().unwrap().is_translated());
            }
        }

        #[test]
        fn should_place_new_units_with_master_formatting() {
            let (de, _) = merge(&xlf(MASTER2_XLF), None, "de", "de").unwrap();
            let saved = de.to_xml_string();
            let (merged, _) = merge(&xlf(MASTER1_XLF), Some(xlf(&saved)), "de", "de").unwrap();
            let (fresh, _) = merge(&xlf(MASTER1_XLF), None, "de", "de").unwrap();
            assert_eq!(merged.to_xml_string(), fresh.to_xml_string());
        }

        #[test]
        fn should_handle_empty_master() {
            let master = xlf(&xlf_with_units(&[]));
            let existing = xlf(&xlf_with_units(&[("A", "a", Some("b"))]));
            let (merged, summary) = merge(&master, Some(existing), "en", "de").unwrap();
            assert!(merged.is_empty());
            assert_eq!(summary.removed_count, 1);
        }

        #[test]
        fn should_reject_format_mismatch() {
            let err = merge(&xlf(MASTER1_XLF), Some(xmb(MASTER1_XMB)), "de", "en").unwrap_err();
            assert!(matches!(err, Error::FormatMismatch { .. }));
        }
    }

    mod xmb_tests {
        use super::*;

        #[test]
        fn should_create_language_file_equal_to_master() {
            let master = xmb(MASTER1_XMB);
            let (en, summary) = merge(&master, None, "de", "en").unwrap();
            assert!(summary.created);
            assert_eq!(summary.added_count, 5);
            assert_eq!(en.source_language(), None);
            assert_eq!(en.to_xml_string(), MASTER1_XMB);
            assert_eq!(en.format(), I18nFormat::Xmb);
        }

        #[test]
        fn should_be_idempotent() {
            let master = xmb(MASTER1_XMB);
            let (en, _) = merge(&master, None, "de", "en").unwrap();
            let first = en.to_xml_string();

            let (again, summary) = merge(&master, Some(xmb(&first)), "de", "en").unwrap();
            assert_eq!(summary, MergeSummary::default());
            assert_eq!(again.to_xml_string(), first);
        }

        #[test]
        fn should_merge_translated_file() {
            let (mut en, _) = merge(&xmb(MASTER1_XMB), None, "de", "en").unwrap();
            en.translate_markup(
                XMB_ID_WITH_PLACEHOLDER,
                "Item <ph name=\"INTERPOLATION\"><ex>INTERPOLATION</ex></ph> added",
            )
            .unwrap();
            let saved = en.to_xml_string();

            let (merged, summary) = merge(&xmb(MASTER2_XMB), Some(xmb(&saved)), "de", "en").unwrap();
            assert_eq!(summary.added_count, 1);
            assert_eq!(summary.removed_count, 1);
            assert!(summary.changed_source_ids.is_empty());
            assert!(merged.trans_unit_with_id(XMB_ID_DESCRIPTION).is_none());

            let added = merged.trans_unit_with_id(XMB_ID_ADDED).unwrap();
            assert_eq!(added.target_content().unwrap().plain_text(), "Sprache");

            let translated = merged.trans_unit_with_id(XMB_ID_WITH_PLACEHOLDER).unwrap();
            assert_eq!(
                translated.target_content().unwrap().plain_text(),
                "Item {$INTERPOLATION} added"
            );
            assert_eq!(translated.source_references()[0].line_number, 30);
        }
    }
}
