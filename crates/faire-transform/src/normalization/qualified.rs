/// Appends a parenthesised qualifier: `"phenol-chloroform (DNeasy)"`.
///
/// Without a qualifier, or when it is already present, the value is returned
/// unchanged.
pub fn qualify(value: &str, qualifier: Option<&str>) -> String {
    let value = value.trim();
    match qualifier.map(str::trim).filter(|q| !q.is_empty()) {
        Some(qualifier) => {
            let suffix = format!("({qualifier})");
            if value.ends_with(&suffix) {
                value.to_string()
            } else {
                format!("{value} {suffix}")
            }
        }
        None => value.to_string(),
    }
}
