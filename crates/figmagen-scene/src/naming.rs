//! Identifier transforms used for class names and hoisted variables.
//!
//! All transforms are pure functions of their input.

/// Split a display name into words on separators and case boundaries.
///
/// `"Primary Button"`, `"primary-button"` and `"PrimaryButton"` all yield
/// `["Primary", "Button"]` (modulo case).
pub fn words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if ch.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            // "fooBar", "item2Name", and the "P" in "HTMLParser"
            if prev.is_lowercase() || prev.is_numeric() || (prev.is_uppercase() && next_is_lower) {
                words.push(std::mem::take(&mut current));
            }
        }
        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// `"Primary Button"` → `"primary-button"`. Idempotent.
///
/// Lower-casing can emit combining marks (`İ` becomes `i` plus a dot), which
/// [`words`] would split on; only alphanumerics are kept.
pub fn kebabize(input: &str) -> String {
    words(input)
        .iter()
        .map(|w| {
            w.to_lowercase()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Letters only, first one lower-cased: `"Main Stack 2"` → `"mainStack"`.
pub fn small_camel(input: &str) -> String {
    let letters: String = input.chars().filter(|c| c.is_ascii_alphabetic()).collect();
    let mut chars = letters.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

pub fn capitalize_first(input: &str) -> String {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// `"sign-up form"` → `"SignUpForm"`. Falls back to `"Component"` when the
/// name has no usable characters or would start with a digit.
pub fn upper_camel(input: &str) -> String {
    let name: String = words(input).iter().map(|w| capitalize_first(w)).collect();
    match name.chars().next() {
        None => "Component".to_string(),
        Some(first) if first.is_numeric() => format!("Component{name}"),
        Some(_) => name,
    }
}
