//! Shared fixtures for the integration tests
#![allow(dead_code)]

use xliffmerge::{I18nFormat, TranslationMessagesFile};

/// Angular extraction output, 14 messages, source language `de`.
pub const MASTER1_XLF: &str = include_str!("../testdata/master1.xlf");
/// Second extraction: "Startseite" and "Einstellungen" are gone.
pub const MASTER2_XLF: &str = include_str!("../testdata/master2.xlf");
pub const MASTER1_XMB: &str = include_str!("../testdata/master1.xmb");
/// Second extraction: the app description is gone, "Sprache" is new.
pub const MASTER2_XMB: &str = include_str!("../testdata/master2.xmb");

pub const ID_STARTSEITE: &str = "b660f83df4d651cb63d531b8463d856eccc4c7a6";
pub const ID_SCHLIESSEN: &str = "44424b18700e2a4f5850c646e0a08bfe0895cebf";
pub const ID_EINSTELLUNGEN: &str = "3e5af3d1b00c71272cf4d328ebecaae3061ff2fc";
pub const ID_EINTRAG_HINZUGEFUEGT: &str = "5945dca7cf72b4b94354cc1d42a06a14ba258dcc";
pub const ID_ANZAHL_EINTRAEGE: &str = "6c743f6ef11b0d717d7e32788da3cc4ce17ae97a";
pub const ID_FEHLER: &str = "0ba46e77898f07d7aaad0bc6b802ffc32f1eb075";

pub const XMB_ID_DESCRIPTION: &str = "7499557905529977371";
pub const XMB_ID_SCHLIESSEN: &str = "3984230284307891427";
pub const XMB_ID_ADDED: &str = "8998006760999956868";
pub const XMB_ID_WITH_PLACEHOLDER: &str = "9030312858648510700";

pub fn xlf(source: &str) -> TranslationMessagesFile {
    TranslationMessagesFile::parse(source, I18nFormat::Xlf, "messages.xlf").unwrap()
}

pub fn xmb(source: &str) -> TranslationMessagesFile {
    TranslationMessagesFile::parse(source, I18nFormat::Xmb, "messages.xmb").unwrap()
}

/// Minimal XLIFF file with the given `(id, source, target)` units.
pub fn xlf_with_units(units: &[(&str, &str, Option<&str>)]) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <xliff version=\"1.2\" xmlns=\"urn:oasis:names:tc:xliff:document:1.2\">\n\
         \x20 <file source-language=\"en\" datatype=\"plaintext\" original=\"ng2.template\">\n\
         \x20   <body>\n",
    );
    for (id, source, target) in units {
        out.push_str(&format!("      <trans-unit id=\"{}\" datatype=\"html\">\n", id));
        out.push_str(&format!("        <source>{}</source>\n", source));
        if let Some(target) = target {
            out.push_str(&format!("        <target>{}</target>\n", target));
        }
        out.push_str("      </trans-unit>\n");
    }
    out.push_str("    </body>\n  </file>\n</xliff>\n");
    out
}

pub fn ids(file: &TranslationMessagesFile) -> Vec<String> {
    file.trans_units().map(|unit| unit.id().to_string()).collect()
}
