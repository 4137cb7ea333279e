use std::fmt;

const BADGE_BASE_URL: &str = "https://img.shields.io/badge";
const BADGE_BACKGROUND: &str = "000000";
const BADGE_STYLE: &str = "flat";

/// Image shown on the left side of a shields.io badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeLogo<'a> {
    /// A simple-icons slug such as `typescript`.
    Named(&'a str),
    /// Base64 encoded SVG embedded as a data URI.
    InlineSvg(&'a str),
}

impl fmt::Display for BadgeLogo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BadgeLogo::Named(slug) => f.write_str(slug),
            BadgeLogo::InlineSvg(payload) => write!(f, "data:image/svg+xml;base64,{payload}"),
        }
    }
}

/// Percent-encodes a label for the badge path segment. `/` is left as is.
pub fn encode_label(label: &str) -> String {
    label
        .split('/')
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

pub fn badge_url(label: &str, logo: BadgeLogo<'_>, logo_color: Option<&str>) -> String {
    let mut url = format!(
        "{BADGE_BASE_URL}/-{}-{BADGE_BACKGROUND}?logo={logo}&style={BADGE_STYLE}",
        encode_label(label)
    );
    if let Some(color) = logo_color {
        url.push_str("&logoColor=");
        url.push_str(color);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_label_escapes_spaces_and_keeps_slashes() {
        assert_eq!(encode_label("Redux Toolkit"), "Redux%20Toolkit");
        assert_eq!(encode_label("React Query / SWR"), "React%20Query%20/%20SWR");
        assert_eq!(encode_label("Next.js"), "Next.js");
    }

    #[test]
    fn encode_label_escapes_reserved_characters() {
        assert_eq!(encode_label("C#"), "C%23");
        assert_eq!(encode_label("IaC & DevOps"), "IaC%20%26%20DevOps");
    }

    #[test]
    fn badge_url_without_color() {
        assert_eq!(
            badge_url("React", BadgeLogo::Named("react"), None),
            "https://img.shields.io/badge/-React-000000?logo=react&style=flat"
        );
    }

    #[test]
    fn badge_url_appends_logo_color() {
        assert_eq!(
            badge_url("GraphQL", BadgeLogo::Named("graphql"), Some("de33a6")),
            "https://img.shields.io/badge/-GraphQL-000000?logo=graphql&style=flat&logoColor=de33a6"
        );
    }

    #[test]
    fn inline_logo_renders_data_uri() {
        let url = badge_url("Custom", BadgeLogo::InlineSvg("PHN2Zz4="), None);
        assert_eq!(
            url,
            "https://img.shields.io/badge/-Custom-000000?logo=data:image/svg+xml;base64,PHN2Zz4=&style=flat"
        );
    }
}
