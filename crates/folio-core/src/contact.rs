//! Contact form to messaging deep link composition.

pub const WHATSAPP_NUMBER: &str = "6361757910";

/// Compose the WhatsApp deep link that carries the contact form content.
/// Blank fields fall back to placeholder text so the message always reads
/// coherently.
pub fn whatsapp_link(name: &str, email: &str, message: &str) -> String {
    let name = non_blank(name, "Guest");
    let email = non_blank(email, "No email provided");
    let message = non_blank(message, "No message");
    let body = format!("Hello! I'm {name}\nEmail: {email}\n\nMessage: {message}");
    format!(
        "https://wa.me/{WHATSAPP_NUMBER}?text={}",
        urlencoding::encode(&body)
    )
}

fn non_blank<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}
