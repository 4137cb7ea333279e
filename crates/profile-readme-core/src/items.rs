use serde::Serialize;

use crate::{
    badge::{badge_url, BadgeLogo},
    markdown,
};

/// Section heading placed between groups of badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    text: String,
    level: usize,
    prepend_newline: bool,
}

impl Header {
    pub const DEFAULT_LEVEL: usize = 4;

    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            level: Self::DEFAULT_LEVEL,
            prepend_newline: true,
        }
    }

    /// Levels below 1 render as a level 1 heading.
    #[must_use]
    pub fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn without_leading_newline(mut self) -> Self {
        self.prepend_newline = false;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn prepend_newline(&self) -> bool {
        self.prepend_newline
    }

    pub fn markdown(&self) -> String {
        let heading = markdown::header(self.level, &self.text);
        if self.prepend_newline {
            format!("\n{heading}")
        } else {
            heading
        }
    }
}

/// Technology badge rendered through shields.io.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleIcon {
    label: String,
    logo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo_base64: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    logo_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    href: Option<String>,
}

impl SimpleIcon {
    /// Badge whose logo slug is the lowercased label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let logo = label.to_lowercase();
        Self::with_logo(label, logo)
    }

    pub fn with_logo(label: impl Into<String>, logo: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            logo: logo.into().replace('#', ""),
            logo_base64: None,
            logo_color: None,
            href: None,
        }
    }

    /// Embeds a base64 SVG instead of referencing the logo slug.
    #[must_use]
    pub fn logo_base64(mut self, payload: impl Into<String>) -> Self {
        self.logo_base64 = non_empty(payload);
        self
    }

    #[must_use]
    pub fn logo_color(mut self, color: impl Into<String>) -> Self {
        self.logo_color = non_empty(color);
        self
    }

    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = non_empty(href);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn logo(&self) -> &str {
        &self.logo
    }

    pub fn color(&self) -> Option<&str> {
        self.logo_color.as_deref()
    }

    pub fn link(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn has_inline_logo(&self) -> bool {
        self.logo_base64.is_some()
    }

    pub fn badge_logo(&self) -> BadgeLogo<'_> {
        match &self.logo_base64 {
            Some(payload) => BadgeLogo::InlineSvg(payload),
            None => BadgeLogo::Named(&self.logo),
        }
    }

    pub fn badge(&self) -> String {
        badge_url(&self.label, self.badge_logo(), self.color())
    }

    pub fn markdown(&self) -> String {
        let image = markdown::image(&self.label, &self.badge());
        match self.link() {
            Some(href) => markdown::link(&image, href),
            None => image,
        }
    }
}

fn non_empty(value: impl Into<String>) -> Option<String> {
    Some(value.into()).filter(|value| !value.is_empty())
}

/// One entry of a profile document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    Header(Header),
    Icon(SimpleIcon),
}

impl Item {
    pub fn markdown(&self) -> String {
        match self {
            Item::Header(header) => header.markdown(),
            Item::Icon(icon) => icon.markdown(),
        }
    }
}

impl From<Header> for Item {
    fn from(header: Header) -> Self {
        Item::Header(header)
    }
}

impl From<SimpleIcon> for Item {
    fn from(icon: SimpleIcon) -> Self {
        Item::Icon(icon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_defaults_to_level_four_with_newline() {
        assert_eq!(Header::new("Frontend").markdown(), "\n#### Frontend");
    }

    #[test]
    fn header_without_newline_starts_with_hashes() {
        let header = Header::new("Intro").with_level(2).without_leading_newline();
        assert_eq!(header.markdown(), "## Intro");
        assert!(!header.prepend_newline());
    }

    #[test]
    fn header_level_zero_renders_as_level_one() {
        let header = Header::new("Top").with_level(0).without_leading_newline();
        assert_eq!(header.markdown(), "# Top");
    }

    #[test]
    fn icon_logo_defaults_to_lowercase_label() {
        assert_eq!(SimpleIcon::new("TypeScript").logo(), "typescript");
        assert_eq!(SimpleIcon::new("C#").logo(), "c");
    }

    #[test]
    fn explicit_logo_is_stripped_of_hashes() {
        assert_eq!(SimpleIcon::with_logo("F#", "f#").logo(), "f");
    }

    #[test]
    fn icon_with_color_renders_plain_image() {
        let icon = SimpleIcon::with_logo("Redux Toolkit", "redux").logo_color("7248b6");
        assert_eq!(
            icon.markdown(),
            "![Redux Toolkit](https://img.shields.io/badge/-Redux%20Toolkit-000000?logo=redux&style=flat&logoColor=7248b6)"
        );
    }

    #[test]
    fn icon_with_href_is_link_wrapped() {
        let icon =
            SimpleIcon::with_logo("Drizzle ORM", "drizzle").href("https://orm.drizzle.team/");
        assert_eq!(
            icon.markdown(),
            "[![Drizzle ORM](https://img.shields.io/badge/-Drizzle%20ORM-000000?logo=drizzle&style=flat)](https://orm.drizzle.team/)"
        );
    }

    #[test]
    fn inline_logo_replaces_slug() {
        let icon = SimpleIcon::new("Playwright").logo_base64("iVBORw0KGgo=");
        assert!(icon.has_inline_logo());
        assert_eq!(
            icon.badge(),
            "https://img.shields.io/badge/-Playwright-000000?logo=data:image/svg+xml;base64,iVBORw0KGgo=&style=flat"
        );
    }

    #[test]
    fn empty_optional_fields_are_ignored() {
        let icon = SimpleIcon::new("Git").logo_color("").href("").logo_base64("");
        assert_eq!(icon.color(), None);
        assert_eq!(icon.link(), None);
        assert!(!icon.has_inline_logo());
        assert_eq!(
            icon.markdown(),
            "![Git](https://img.shields.io/badge/-Git-000000?logo=git&style=flat)"
        );
    }

    #[test]
    fn item_dispatches_to_variant() {
        let items: Vec<Item> = vec![
            Header::new("Backend").into(),
            SimpleIcon::new("Python").into(),
        ];
        let rendered: Vec<String> = items.iter().map(Item::markdown).collect();
        assert_eq!(rendered[0], "\n#### Backend");
        assert!(rendered[1].starts_with("![Python]("));
    }
}
