use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in raw config text
///
/// An optional fallback can be given as
/// `{{ env.VAR | default("value") }}`; it is used when the variable is
/// unset. A placeholder without a default for an unset variable is an
/// error, so a missing credential fails at startup instead of at the
/// first upstream call.
pub fn expand_placeholders(input: &str) -> Result<String, String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r#"\{\{\s*env\.([A-Za-z_][A-Za-z0-9_]*)\s*(?:\|\s*default\("([^"]*)"\))?\s*\}\}"#)
            .expect("placeholder pattern must be a valid regex")
    });

    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;

    for captures in re.captures_iter(input) {
        let placeholder = captures.get(0).expect("capture 0 always present");
        output.push_str(&input[last_end..placeholder.start()]);

        let var_name = &captures[1];
        match std::env::var(var_name) {
            Ok(value) => output.push_str(&value),
            Err(_) => match captures.get(2) {
                Some(default) => output.push_str(default.as_str()),
                None => return Err(format!("environment variable `{var_name}` is not set")),
            },
        }

        last_end = placeholder.end();
    }

    output.push_str(&input[last_end..]);
    Ok(output)
}
