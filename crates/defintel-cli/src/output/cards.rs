// SPDX-License-Identifier: Apache-2.0

//! Terminal and markdown drawing of record cards.
//!
//! Shared by the one-shot `feed` command and the interactive shell.

use console::style;
use defintel_core::{Card, Language, Message, TagPills};
use std::io::{self, Write};

/// Draws one card as styled text.
pub fn write_card_text<W: Write + ?Sized>(w: &mut W, card: &Card, lang: Language) -> io::Result<()> {
    writeln!(
        w,
        "  {}  {}",
        style(&card.title).cyan().bold(),
        style(&card.timestamp).dim()
    )?;

    if !card.fields.is_empty() {
        let fields: Vec<String> = card
            .fields
            .iter()
            .map(|(label, value)| format!("{} {}", style(format!("{label}:")).dim(), value))
            .collect();
        writeln!(w, "    {}", fields.join("   "))?;
    }

    writeln!(w, "    {}", pills_text(&card.tags, lang))?;

    for link in &card.links {
        writeln!(
            w,
            "    {} {}",
            style(format!("{}:", link.label)).dim(),
            style(&link.url).blue().underlined()
        )?;
    }
    writeln!(w)
}

/// Draws one card as a markdown section.
pub fn write_card_markdown<W: Write + ?Sized>(
    w: &mut W,
    card: &Card,
    lang: Language,
) -> io::Result<()> {
    writeln!(w, "### {}\n", card.title)?;
    writeln!(w, "*{}*\n", card.timestamp)?;
    for (label, value) in &card.fields {
        writeln!(w, "- **{label}:** {value}")?;
    }
    match &card.tags {
        TagPills::Pills(pills) => {
            let names: Vec<String> = pills.iter().map(|p| format!("`{}`", p.name)).collect();
            writeln!(w, "- **Tags:** {}", names.join(", "))?;
        }
        TagPills::NoTags => writeln!(w, "- _{}_", Message::NoTags.text(lang))?,
    }
    for link in &card.links {
        writeln!(w, "- [{}]({})", link.label, link.url)?;
    }
    writeln!(w)
}

/// Tag pills on one line; selected tags are highlighted.
fn pills_text(tags: &TagPills, lang: Language) -> String {
    match tags {
        TagPills::Pills(pills) => pills
            .iter()
            .map(|pill| {
                let text = format!("[{}]", pill.name);
                if pill.selected {
                    style(text).cyan().bold().to_string()
                } else {
                    style(text).cyan().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" "),
        TagPills::NoTags => style(Message::NoTags.text(lang)).dim().italic().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defintel_core::{Link, Pill};

    fn card(tags: TagPills) -> Card {
        Card {
            id: "100".to_string(),
            title: "Bridge".to_string(),
            report_time: "2024-05-01T10:05:00Z".to_string(),
            timestamp: "May 1, 2024 10:05".to_string(),
            fields: vec![("Network".to_string(), "Ethereum".to_string())],
            tags,
            links: vec![Link {
                label: "Details".to_string(),
                url: "https://blockscan.com/tx/0xabc".to_string(),
            }],
        }
    }

    #[test]
    fn text_card_shows_placeholder_without_tags() {
        let mut buf = Vec::new();
        write_card_text(&mut buf, &card(TagPills::NoTags), Language::En).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("Bridge"));
        assert!(output.contains("May 1, 2024 10:05"));
        assert!(output.contains("No tags"));
        assert!(output.contains("https://blockscan.com/tx/0xabc"));
    }

    #[test]
    fn markdown_card_lists_tags_and_link() {
        let pills = TagPills::Pills(vec![Pill {
            name: "rug-pull".to_string(),
            selected: true,
        }]);
        let mut buf = Vec::new();
        write_card_markdown(&mut buf, &card(pills), Language::En).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.starts_with("### Bridge"));
        assert!(output.contains("- **Network:** Ethereum"));
        assert!(output.contains("`rug-pull`"));
        assert!(output.contains("[Details](https://blockscan.com/tx/0xabc)"));
    }
}
