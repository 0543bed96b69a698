// SPDX-License-Identifier: Apache-2.0

//! User-facing strings.
//!
//! Every message the timeline shows to a person goes through [`Message`], so
//! front ends never hard-code English (or Japanese) text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display language for user-facing messages and date formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// Japanese.
    Ja,
}

impl Language {
    /// Default date + time pattern (no seconds) for this language.
    #[must_use]
    pub fn date_pattern(self) -> &'static str {
        match self {
            Language::En => "%b %-d, %Y %H:%M",
            Language::Ja => "%Y年%-m月%-d日 %H:%M",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ja" | "jp" | "japanese" => Ok(Language::Ja),
            other => Err(format!("unsupported language '{other}' (expected en or ja)")),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Ja => f.write_str("ja"),
        }
    }
}

/// A user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Tag catalog could not be loaded.
    TagLoadFailed,
    /// The first page of an apply could not be fetched.
    FetchFailed,
    /// A load-more page could not be fetched.
    LoadMoreFailed,
    /// The query returned nothing.
    NoResults,
    /// Nothing has been queried yet.
    SelectTagsPrompt,
    /// Card placeholder when a record has no tags.
    NoTags,
    /// A fetch is in flight.
    Loading,
    /// Tab that is listed but not implemented yet.
    ComingSoon,
    /// Apply the current tag selection.
    Apply,
    /// Apply with an empty selection.
    ShowEverything,
    /// Fetch the next page.
    LoadMore,
    /// Reset the selected tag set.
    ClearSelection,
    /// Collapse the tag list back to its preview.
    ShowFewerTags,
    /// Label for the tag search prompt.
    SearchTags,
    /// Link label for the verification link.
    Details,
    /// Open the tag picker.
    ChooseTags,
    /// Move to another tab.
    SwitchTab,
    /// Leave the interactive session.
    Quit,
    /// Label of the scams tab.
    ScamsTab,
}

impl Message {
    /// Localized text for this message.
    #[must_use]
    pub fn text(self, lang: Language) -> &'static str {
        match (self, lang) {
            (Message::TagLoadFailed, Language::En) => "Failed to load tags.",
            (Message::TagLoadFailed, Language::Ja) => "タグの読み込みに失敗しました。",
            (Message::FetchFailed, Language::En) => "Failed to fetch the feed.",
            (Message::FetchFailed, Language::Ja) => "情報の取得に失敗しました。",
            (Message::LoadMoreFailed, Language::En) => "Failed to fetch more entries.",
            (Message::LoadMoreFailed, Language::Ja) => "追加情報の取得に失敗しました。",
            (Message::NoResults, Language::En) => "No matching entries.",
            (Message::NoResults, Language::Ja) => "該当する情報はありません。",
            (Message::SelectTagsPrompt, Language::En) => {
                "Select tags and choose \"Apply\" to load the feed."
            }
            (Message::SelectTagsPrompt, Language::Ja) => {
                "タグを選択して「適用」ボタンを押してください。"
            }
            (Message::NoTags, _) => "No tags",
            (Message::Loading, Language::En) => "Loading...",
            (Message::Loading, Language::Ja) => "読込中...",
            (Message::ComingSoon, Language::En) => "This feed is coming soon.",
            (Message::ComingSoon, Language::Ja) => "この機能は現在準備中です。",
            (Message::Apply, Language::En) => "Apply",
            (Message::Apply, Language::Ja) => "適用",
            (Message::ShowEverything, Language::En) => "Show all entries",
            (Message::ShowEverything, Language::Ja) => "全ての情報を表示",
            (Message::LoadMore, Language::En) => "Load more",
            (Message::LoadMore, Language::Ja) => "さらに表示",
            (Message::ClearSelection, Language::En) => "Clear selection",
            (Message::ClearSelection, Language::Ja) => "選択を解除",
            (Message::ShowFewerTags, Language::En) => "Show fewer tags",
            (Message::ShowFewerTags, Language::Ja) => "一部を非表示",
            (Message::SearchTags, Language::En) => "Search tags",
            (Message::SearchTags, Language::Ja) => "タグを検索",
            (Message::Details, _) => "Details",
            (Message::ChooseTags, Language::En) => "Choose tags",
            (Message::ChooseTags, Language::Ja) => "タグを選択",
            (Message::SwitchTab, Language::En) => "Switch tab",
            (Message::SwitchTab, Language::Ja) => "タブを切り替え",
            (Message::Quit, Language::En) => "Quit",
            (Message::Quit, Language::Ja) => "終了",
            (Message::ScamsTab, Language::En) => "Scams (planned)",
            (Message::ScamsTab, Language::Ja) => "スキャム情報 (予定)",
        }
    }
}

/// Label of the expand toggle, which carries the match count.
#[must_use]
pub fn show_all_tags_label(lang: Language, count: usize) -> String {
    match lang {
        Language::En => format!("Show all tags ({count})"),
        Language::Ja => format!("全てのタグを表示 ({count})"),
    }
}
