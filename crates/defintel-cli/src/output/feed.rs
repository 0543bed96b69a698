// SPDX-License-Identifier: Apache-2.0

use console::style;
use defintel_core::Message;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::FeedResult;

use super::Renderable;
use super::cards::{write_card_markdown, write_card_text};

impl Renderable for FeedResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        let lang = self.language;
        writeln!(w)?;
        if self.tags.is_empty() {
            writeln!(w, "{}", style(self.feed.label(lang)).bold())?;
        } else {
            writeln!(
                w,
                "{} {}",
                style(self.feed.label(lang)).bold(),
                style(format!("[{}]", self.tags.join(", "))).dim()
            )?;
        }
        writeln!(w)?;

        if self.cards.is_empty() {
            writeln!(w, "  {}", style(Message::NoResults.text(lang)).dim())?;
            writeln!(w)?;
            return Ok(());
        }

        for card in &self.cards {
            write_card_text(w, card, lang)?;
        }

        if let (true, Some(cursor)) = (self.has_more, &self.next_cursor) {
            writeln!(
                w,
                "{} {}",
                style(format!("{}:", Message::LoadMore.text(lang))).dim(),
                style(format!("--before {cursor}")).cyan()
            )?;
            writeln!(w)?;
        }
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        let lang = self.language;
        writeln!(w, "## {}\n", self.feed.label(lang))?;
        if !self.tags.is_empty() {
            writeln!(w, "Tags: {}\n", self.tags.join(", "))?;
        }
        if self.cards.is_empty() {
            writeln!(w, "_{}_", Message::NoResults.text(lang))?;
            return Ok(());
        }
        for card in &self.cards {
            write_card_markdown(w, card, lang)?;
        }
        if let (true, Some(cursor)) = (self.has_more, &self.next_cursor) {
            writeln!(w, "Next page: `--before {cursor}`")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use defintel_core::{Card, FeedKind, Language, TagPills};

    fn ctx() -> OutputContext {
        OutputContext {
            format: OutputFormat::Text,
            quiet: true,
            is_tty: false,
            progress_bars: false,
        }
    }

    fn result(cards: Vec<Card>, has_more: bool) -> FeedResult {
        FeedResult {
            feed: FeedKind::Hacking,
            tags: vec!["rug-pull".to_string()],
            cards,
            next_cursor: Some("81".to_string()),
            has_more,
            language: Language::En,
        }
    }

    fn card() -> Card {
        Card {
            id: "81".to_string(),
            title: "Bridge".to_string(),
            report_time: "2024-05-01T10:05:00Z".to_string(),
            timestamp: "May 1, 2024 10:05".to_string(),
            fields: Vec::new(),
            tags: TagPills::NoTags,
            links: Vec::new(),
        }
    }

    #[test]
    fn empty_page_shows_no_results() {
        let mut buf = Vec::new();
        result(Vec::new(), false)
            .render_text(&mut buf, &ctx())
            .unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("No matching entries."));
        assert!(!output.contains("--before"));
    }

    #[test]
    fn full_page_shows_next_cursor() {
        let mut buf = Vec::new();
        result(vec![card()], true)
            .render_text(&mut buf, &ctx())
            .unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("Bridge"));
        assert!(output.contains("--before 81"));
    }

    #[test]
    fn short_page_hides_next_cursor() {
        let mut buf = Vec::new();
        result(vec![card()], false)
            .render_markdown(&mut buf, &ctx())
            .unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("### Bridge"));
        assert!(!output.contains("Next page"));
    }
}
