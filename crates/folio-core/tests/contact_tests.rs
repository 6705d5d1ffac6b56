// Tests for contact deep link composition.

use folio_core::contact::{whatsapp_link, WHATSAPP_NUMBER};

#[test]
fn link_targets_the_configured_number() {
    let link = whatsapp_link("Ada", "ada@example.com", "Hi there");
    assert!(link.starts_with(&format!("https://wa.me/{WHATSAPP_NUMBER}?text=")));
}

#[test]
fn body_is_percent_encoded() {
    let link = whatsapp_link("Ada Lovelace", "ada@example.com", "Hello & goodbye");
    let encoded = link.split_once("?text=").unwrap().1;
    assert!(!encoded.contains(' '));
    assert!(!encoded.contains('\n'));
    assert!(!encoded.contains('&'));
    assert!(encoded.contains("%0A")); // newlines survive as line breaks

    let decoded = urlencoding::decode(encoded).unwrap();
    assert_eq!(
        decoded,
        "Hello! I'm Ada Lovelace\nEmail: ada@example.com\n\nMessage: Hello & goodbye"
    );
}

#[test]
fn blank_fields_fall_back_to_placeholders() {
    let link = whatsapp_link("", "  ", "");
    let decoded = urlencoding::decode(link.split_once("?text=").unwrap().1).unwrap();
    assert_eq!(
        decoded,
        "Hello! I'm Guest\nEmail: No email provided\n\nMessage: No message"
    );
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let link = whatsapp_link("  Ada  ", "a@b.c", "hi");
    let decoded = urlencoding::decode(link.split_once("?text=").unwrap().1).unwrap();
    assert!(decoded.starts_with("Hello! I'm Ada\n"));
}
