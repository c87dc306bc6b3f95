// Prompt-building utilities shared by every module that talks to the LLM.
// Each endpoint keeps its own template alongside its handlers.

/// Single-pass placeholder substitution over `template`.
///
/// A value containing `{placeholder}` text is never expanded a second time.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    'scan: while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        for (placeholder, value) in values {
            if let Some(after) = tail.strip_prefix(placeholder) {
                out.push_str(value);
                rest = after;
                continue 'scan;
            }
        }
        out.push('{');
        rest = &tail[1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_unknown_braces() {
        assert_eq!(render("a {x} {y} }{", &[("{x}", "1")]), "a 1 {y} }{");
    }

    #[test]
    fn test_render_does_not_reexpand_values() {
        assert_eq!(render("{a}-{b}", &[("{a}", "{b}"), ("{b}", "2")]), "{b}-2");
    }
}
