/// Removes a markdown code fence wrapped around model output, e.g. "```json\n{...}\n```".
/// Text without a leading fence is only trimmed.
pub fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    let rest = rest
        .trim_start_matches(|c: char| c.is_ascii_alphabetic())
        .trim_start();
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
