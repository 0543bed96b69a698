// SPDX-License-Identifier: Apache-2.0

//! Interactive tabbed session.
//!
//! One tab per feed plus a placeholder for scams. Each feed tab owns a
//! [`TimelineController`] for the whole session, so switching tabs keeps the
//! selection, the loaded records and the pagination cursor.

use std::io::{self, IsTerminal, Write};

use anyhow::{Result, bail};
use console::{Term, style};
use defintel_core::{
    AppConfig, Card, CardOptions, FeedApi, FeedKind, FeedPhase, Language, Message, PageOutcome,
    TagListView, TimelineController,
};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, MultiSelect, Select};
use tracing::debug;

use super::maybe_spinner;
use crate::cli::OutputContext;
use crate::output::cards::write_card_text;

/// A tab of the session.
enum Tab {
    Feed(TimelineController),
    ComingSoon,
}

impl Tab {
    fn label(&self, lang: Language) -> &'static str {
        match self {
            Tab::Feed(timeline) => timeline.feed().label(lang),
            Tab::ComingSoon => Message::ScamsTab.text(lang),
        }
    }
}

/// A menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Apply,
    LoadMore,
    ChooseTags,
    SearchTags,
    ToggleTagList,
    ClearSelection,
    SwitchTab,
    Quit,
}

impl Action {
    fn label(self, timeline: Option<&TimelineController>, lang: Language) -> String {
        match (self, timeline) {
            (Action::Apply, Some(t)) if t.selected().is_empty() => {
                Message::ShowEverything.text(lang).to_string()
            }
            (Action::Apply, _) => Message::Apply.text(lang).to_string(),
            (Action::LoadMore, _) => Message::LoadMore.text(lang).to_string(),
            (Action::ChooseTags, _) => Message::ChooseTags.text(lang).to_string(),
            (Action::SearchTags, _) => Message::SearchTags.text(lang).to_string(),
            (Action::ToggleTagList, Some(t)) => t.tag_view.toggle_label(t.tags(), lang),
            (Action::ToggleTagList, None) => Message::ShowFewerTags.text(lang).to_string(),
            (Action::ClearSelection, _) => Message::ClearSelection.text(lang).to_string(),
            (Action::SwitchTab, _) => Message::SwitchTab.text(lang).to_string(),
            (Action::Quit, _) => Message::Quit.text(lang).to_string(),
        }
    }
}

/// Menu entries available for the current state of a feed tab.
fn feed_actions(timeline: &TimelineController) -> Vec<Action> {
    let mut actions = vec![Action::Apply];
    if timeline.can_load_more() {
        actions.push(Action::LoadMore);
    }
    if !timeline.tags().is_empty() {
        actions.push(Action::ChooseTags);
        actions.push(Action::SearchTags);
        if timeline.tag_view.shows_toggle(timeline.tags()) {
            actions.push(Action::ToggleTagList);
        }
    }
    if !timeline.selected().is_empty() {
        actions.push(Action::ClearSelection);
    }
    actions.push(Action::SwitchTab);
    actions.push(Action::Quit);
    actions
}

fn write_tab_bar(w: &mut dyn Write, tabs: &[Tab], active: usize, lang: Language) -> io::Result<()> {
    let labels: Vec<String> = tabs
        .iter()
        .enumerate()
        .map(|(i, tab)| {
            if i == active {
                style(format!("[ {} ]", tab.label(lang)))
                    .cyan()
                    .bold()
                    .to_string()
            } else {
                style(format!("  {}  ", tab.label(lang))).dim().to_string()
            }
        })
        .collect();
    writeln!(w, "{}", labels.join(" "))?;
    writeln!(w)
}

/// Draws a feed tab: banners, tag list, then cards or the state message.
fn write_feed(
    w: &mut dyn Write,
    timeline: &TimelineController,
    options: &CardOptions,
) -> io::Result<()> {
    let lang = options.language;

    if let Some(err) = timeline.tag_error() {
        writeln!(w, "{}", style(err.message(lang)).red())?;
    }

    let visible = timeline.visible_tags();
    if !visible.is_empty() {
        let pills: Vec<String> = visible
            .iter()
            .map(|tag| {
                if timeline.selected().contains(&tag.name) {
                    style(format!("[{}]", tag.name)).cyan().bold().to_string()
                } else {
                    style(format!("[{}]", tag.name)).dim().to_string()
                }
            })
            .collect();
        writeln!(w, "{}", pills.join(" "))?;
        if timeline.tag_view.shows_toggle(timeline.tags()) {
            writeln!(
                w,
                "{}",
                style(timeline.tag_view.toggle_label(timeline.tags(), lang)).dim()
            )?;
        }
    }
    if !timeline.selected().is_empty() {
        writeln!(
            w,
            "{} {}",
            style("»").cyan(),
            style(timeline.selected().join(", ")).cyan()
        )?;
    }
    writeln!(w)?;

    if let Some(err) = timeline.error() {
        writeln!(w, "{}", style(err.message(lang)).red().bold())?;
        writeln!(w)?;
    }

    if timeline.records().is_empty() {
        let message = match timeline.phase() {
            FeedPhase::IdleNoQuery => Some(Message::SelectTagsPrompt),
            FeedPhase::ReadyEmpty => Some(Message::NoResults),
            FeedPhase::Uninitialized | FeedPhase::Loading => Some(Message::Loading),
            FeedPhase::Ready | FeedPhase::Error => None,
        };
        if let Some(message) = message {
            writeln!(w, "{}", style(message.text(lang)).dim())?;
        }
        return Ok(());
    }

    for record in timeline.records() {
        write_card_text(w, &Card::build(record, timeline.selected(), options), lang)?;
    }
    if timeline.can_load_more() {
        writeln!(
            w,
            "{}",
            style(format!("{} ↓", Message::LoadMore.text(lang))).dim()
        )?;
    }
    Ok(())
}

/// Lets the user tick tags in the visible list and folds the result into
/// the selection. Tags outside the visible list keep their state.
fn choose_tags(timeline: &mut TimelineController, lang: Language) -> Result<()> {
    let names: Vec<String> = timeline
        .visible_tags()
        .into_iter()
        .map(|tag| tag.name.clone())
        .collect();
    let checked: Vec<bool> = names
        .iter()
        .map(|name| timeline.selected().contains(name))
        .collect();

    let Some(picked) = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ChooseTags.text(lang))
        .items(&names)
        .defaults(&checked)
        .interact_opt()?
    else {
        return Ok(());
    };

    for (i, name) in names.iter().enumerate() {
        if picked.contains(&i) != checked[i] {
            timeline.toggle_tag(name);
        }
    }
    Ok(())
}

/// Runs the interactive session until the user quits.
pub async fn run(
    api: &dyn FeedApi,
    first: Option<FeedKind>,
    ctx: &OutputContext,
    config: &AppConfig,
) -> Result<()> {
    if !ctx.is_tty || !io::stdin().is_terminal() {
        bail!("browse needs an interactive terminal. Use `defintel feed` for scripted output.");
    }

    let options = CardOptions::from_config(&config.ui, &config.explorer);
    let lang = options.language;
    let mut tabs: Vec<Tab> = FeedKind::ALL
        .iter()
        .map(|&feed| {
            let mut timeline = TimelineController::new(feed, config.api.page_size);
            timeline.tag_view = TagListView::new(config.ui.tag_preview_limit);
            Tab::Feed(timeline)
        })
        .chain(std::iter::once(Tab::ComingSoon))
        .collect();
    let mut active = first
        .and_then(|feed| FeedKind::ALL.iter().position(|&f| f == feed))
        .unwrap_or(0);

    let term = Term::stdout();
    let theme = ColorfulTheme::default();

    loop {
        if let Tab::Feed(timeline) = &mut tabs[active]
            && timeline.phase() == FeedPhase::Uninitialized
        {
            let spinner = maybe_spinner(ctx, Message::Loading.text(lang));
            timeline.load_tags(api).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
        }

        term.clear_screen()?;
        let mut out = term.clone();
        write_tab_bar(&mut out, &tabs, active, lang)?;

        let actions = match &tabs[active] {
            Tab::Feed(timeline) => {
                write_feed(&mut out, timeline, &options)?;
                feed_actions(timeline)
            }
            Tab::ComingSoon => {
                writeln!(out, "{}", style(Message::ComingSoon.text(lang)).dim())?;
                vec![Action::SwitchTab, Action::Quit]
            }
        };
        writeln!(out)?;

        let labels: Vec<String> = {
            let timeline = match &tabs[active] {
                Tab::Feed(t) => Some(t),
                Tab::ComingSoon => None,
            };
            actions.iter().map(|a| a.label(timeline, lang)).collect()
        };
        let Some(choice) = Select::with_theme(&theme)
            .items(&labels)
            .default(0)
            .interact_opt()?
        else {
            break;
        };
        let action = actions[choice];
        debug!(?action, tab = active, "Menu action");

        match action {
            Action::Quit => break,
            Action::SwitchTab => {
                let names: Vec<&str> = tabs.iter().map(|t| t.label(lang)).collect();
                if let Some(next) = Select::with_theme(&theme)
                    .with_prompt(Message::SwitchTab.text(lang))
                    .items(&names)
                    .default(active)
                    .interact_opt()?
                {
                    active = next;
                }
            }
            _ => {
                let Tab::Feed(timeline) = &mut tabs[active] else {
                    continue;
                };
                run_feed_action(action, timeline, api, ctx, lang).await?;
            }
        }
    }

    term.clear_screen()?;
    Ok(())
}

async fn run_feed_action(
    action: Action,
    timeline: &mut TimelineController,
    api: &dyn FeedApi,
    ctx: &OutputContext,
    lang: Language,
) -> Result<()> {
    match action {
        Action::Apply => {
            let spinner = maybe_spinner(ctx, Message::Loading.text(lang));
            let outcome = timeline.apply(api).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            debug!(?outcome, "Applied selection");
        }
        Action::LoadMore => {
            let spinner = maybe_spinner(ctx, Message::Loading.text(lang));
            let outcome = timeline.load_more(api).await;
            if let Some(s) = spinner {
                s.finish_and_clear();
            }
            if let Some(PageOutcome::Exhausted) = outcome {
                debug!(feed = %timeline.feed(), "Reached the oldest page");
            }
        }
        Action::ChooseTags => choose_tags(timeline, lang)?,
        Action::SearchTags => {
            let search: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::SearchTags.text(lang))
                .with_initial_text(timeline.tag_view.search.clone())
                .allow_empty(true)
                .interact_text()?;
            timeline.tag_view.set_search(search.trim());
        }
        Action::ToggleTagList => timeline.tag_view.toggle_expanded(),
        Action::ClearSelection => timeline.clear_selection(),
        Action::SwitchTab | Action::Quit => {}
    }
    Ok(())
}
