// SPDX-License-Identifier: Apache-2.0

use console::style;
use defintel_core::Message;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::TagsResult;

use super::Renderable;

impl Renderable for TagsResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        let lang = self.language;
        writeln!(w)?;
        writeln!(
            w,
            "{} {}",
            style(self.feed.label(lang)).bold(),
            style(format!("({}/{})", self.matching, self.total)).dim()
        )?;
        writeln!(w)?;

        if self.tags.is_empty() {
            writeln!(w, "  {}", style(Message::NoTags.text(lang)).dim())?;
        }
        for (i, tag) in self.tags.iter().enumerate() {
            let num = format!("{:>3}.", i + 1);
            writeln!(w, "  {} {}", style(num).dim(), style(&tag.name).cyan())?;
        }

        if let Some(hint) = &self.toggle_hint {
            writeln!(w)?;
            writeln!(w, "  {} {}", style(hint).dim(), style("(--all)").dim())?;
        }
        writeln!(w)?;
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "## {}\n", self.feed.label(self.language))?;
        for tag in &self.tags {
            writeln!(w, "- `{}`", tag.name)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use defintel_core::{FeedKind, Language, Tag};

    #[test]
    fn text_lists_tags_and_hint() {
        let result = TagsResult {
            feed: FeedKind::Hacking,
            total: 10,
            matching: 10,
            tags: vec![Tag::new("1", "rug-pull"), Tag::new("2", "bridge")],
            toggle_hint: Some("Show all tags (10)".to_string()),
            language: Language::En,
        };
        let ctx = OutputContext {
            format: OutputFormat::Text,
            quiet: true,
            is_tty: false,
            progress_bars: false,
        };

        let mut buf = Vec::new();
        result.render_text(&mut buf, &ctx).unwrap();
        let output = String::from_utf8(buf).unwrap();

        assert!(output.contains("rug-pull"));
        assert!(output.contains("(10/10)"));
        assert!(output.contains("Show all tags (10)"));
    }
}
