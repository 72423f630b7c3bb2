/// Ordered prefix table mapping raw model families to providers.
/// First match wins.
const PROVIDER_PREFIXES: &[(&str, &str)] = &[
    ("claude", "anthropic"),
    ("gpt", "openai"),
    ("o1", "openai"),
    ("o3", "openai"),
    ("o4", "openai"),
    ("codex", "openai"),
    ("davinci", "openai"),
    ("gemini", "google"),
    ("palm", "google"),
];

/// Normalize a raw model string into a `provider/model` identifier.
///
/// Already-qualified ids (containing `/`) pass through unchanged, as do ids
/// with no known family prefix; callers downstream treat those as opaque.
/// Missing or empty input stays missing.
pub fn normalize_model(raw: Option<&str>) -> Option<String> {
    let raw = raw?.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.contains('/') {
        return Some(raw.to_string());
    }

    for (prefix, provider) in PROVIDER_PREFIXES {
        if raw.starts_with(prefix) {
            return Some(format!("{}/{}", provider, raw));
        }
    }

    Some(raw.to_string())
}
