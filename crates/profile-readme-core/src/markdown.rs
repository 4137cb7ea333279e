pub fn header(level: usize, text: &str) -> String {
    let level = level.max(1);
    format!("{} {}", "#".repeat(level), text)
}

pub fn image(alt: &str, source: &str) -> String {
    format!("![{alt}]({source})")
}

pub fn link(text: &str, target: &str) -> String {
    format!("[{text}]({target})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_repeats_hashes_for_level() {
        assert_eq!(header(2, "Backend"), "## Backend");
        assert_eq!(header(6, "Deep"), "###### Deep");
    }

    #[test]
    fn header_clamps_level_zero() {
        assert_eq!(header(0, "Top"), "# Top");
    }

    #[test]
    fn link_wraps_image() {
        let badge = image("Git", "https://example.com/git.svg");
        assert_eq!(
            link(&badge, "https://git-scm.com/"),
            "[![Git](https://example.com/git.svg)](https://git-scm.com/)"
        );
    }
}
