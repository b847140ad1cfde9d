/// Provenance line written at the top of generated files.
pub const GENERATED_BY: &str = "Generated by https://github.com/foxglove/schemas";

/// Split a (possibly multi-line) description into the lines each target
/// prefixes with its comment marker. Surrounding whitespace is dropped.
pub fn description_lines(description: &str) -> impl Iterator<Item = &str> {
    description.trim().split('\n')
}

/// Join non-empty output sections with a blank line and terminate the file
/// with a newline.
pub fn join_sections<S: AsRef<str>>(sections: impl IntoIterator<Item = S>) -> String {
    let mut out = String::new();
    for section in sections {
        let section = section.as_ref();
        if section.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push_str("\n\n");
        }
        out.push_str(section);
    }
    out.push('\n');
    out
}
