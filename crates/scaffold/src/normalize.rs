/// Canonicalize a user-supplied brand or skill name into a slug.
///
/// Lower-cases, turns whitespace runs into a single hyphen, drops everything
/// outside `[a-z0-9-]`, collapses repeated hyphens and strips leading and
/// trailing ones. May return an empty string; callers treat that as invalid.
pub fn normalize_name(input: &str) -> String {
    let lowered = input.to_lowercase();

    let mut spaced = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for c in lowered.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                spaced.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            spaced.push(c);
        }
    }

    let mut slug = String::with_capacity(spaced.len());
    for c in spaced.chars() {
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }

    slug.trim_matches('-').to_string()
}
