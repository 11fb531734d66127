/// Keeps the text before the first colon of a compound locality.
///
/// `"Indian Ocean: Rowley Shoals, Mermaid"` becomes `"Indian Ocean"`; a
/// string without a colon is returned trimmed. `None` when nothing remains.
pub fn truncate_region(value: &str) -> Option<String> {
    let region = value.split_once(':').map_or(value, |(head, _)| head).trim();
    (!region.is_empty()).then(|| region.to_string())
}
