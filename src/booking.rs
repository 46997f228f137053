/// Characters a browser's `encodeURIComponent` leaves as-is but
/// `urlencoding::encode` escapes.
const COMPONENT_MARKS: [(&str, &str); 5] = [
    ("%21", "!"),
    ("%27", "'"),
    ("%28", "("),
    ("%29", ")"),
    ("%2A", "*"),
];

/// Percent-encodes UTF-8 text for use as a single query value.
pub fn encode_component(text: &str) -> String {
    // Every '%' in the encoded output starts an escape, so these can't overlap.
    COMPONENT_MARKS
        .iter()
        .fold(urlencoding::encode(text).into_owned(), |acc, (escaped, raw)| {
            acc.replace(escaped, raw)
        })
}

/// Builds `<base>/<phone>?text=<message>`, the deep link that opens a chat
/// with `message` pre-filled.
pub fn whatsapp_link(base_url: &str, phone: &str, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        base_url.trim_end_matches('/'),
        phone,
        encode_component(message)
    )
}
