use crate::domain::{Counts, Filter};
use serde::{Deserialize, Serialize};

/// Display language for UI strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "ja")]
    Japanese,
    #[serde(rename = "en")]
    English,
}

/// All user-visible strings of the TUI
#[derive(Debug, Clone, Copy)]
pub struct Labels {
    pub title: &'static str,
    pub input_placeholder: &'static str,
    pub add_hint: &'static str,
    pub filter_all: &'static str,
    pub filter_pending: &'static str,
    pub filter_done: &'static str,
    pub empty_all: &'static str,
    pub empty_pending: &'static str,
    pub empty_done: &'static str,
    pub duplicate_name: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub delete: &'static str,
    pub delete_completed: &'static str,
    pub completed_suffix: &'static str,
    pub show_completed: &'static str,
    pub hide_completed: &'static str,
    pub search_title: &'static str,
    pub search_placeholder: &'static str,
    pub search_no_query: &'static str,
    pub search_no_matches: &'static str,
    pub save_failed: &'static str,
    pub alert_title: &'static str,
    pub dismiss_hint: &'static str,
}

const JAPANESE: Labels = Labels {
    title: " Todoリスト ",
    input_placeholder: "新しいタスクを入力...",
    add_hint: "Enter 追加",
    filter_all: "すべて",
    filter_pending: "未完了",
    filter_done: "完了済み",
    empty_all: "タスクがありません",
    empty_pending: "未完了のタスクはありません",
    empty_done: "完了済みのタスクはありません",
    duplicate_name: "同じ名前のタスクが既に存在します。",
    save: "保存",
    cancel: "キャンセル",
    delete: "削除",
    delete_completed: "完了済みを削除",
    completed_suffix: "タスク完了",
    show_completed: "完了済みを表示",
    hide_completed: "完了済みを隠す",
    search_title: " 検索 ",
    search_placeholder: "検索ワードを入力...",
    search_no_query: "検索してください",
    search_no_matches: "一致するタスクがありません",
    save_failed: "保存に失敗しました",
    alert_title: " お知らせ ",
    dismiss_hint: "何かキーを押して閉じる",
};

const ENGLISH: Labels = Labels {
    title: " To-do list ",
    input_placeholder: "Type a new task...",
    add_hint: "Enter add",
    filter_all: "All",
    filter_pending: "Pending",
    filter_done: "Done",
    empty_all: "No tasks yet",
    empty_pending: "Nothing left to do",
    empty_done: "No completed tasks",
    duplicate_name: "A task with the same name already exists.",
    save: "Save",
    cancel: "Cancel",
    delete: "Delete",
    delete_completed: "Delete completed",
    completed_suffix: "tasks done",
    show_completed: "Show completed",
    hide_completed: "Hide completed",
    search_title: " Search ",
    search_placeholder: "Type to search...",
    search_no_query: "Start typing to search",
    search_no_matches: "No matching tasks",
    save_failed: "Could not save",
    alert_title: " Notice ",
    dismiss_hint: "Press any key to close",
};

impl Labels {
    pub fn for_language(language: Language) -> &'static Labels {
        match language {
            Language::Japanese => &JAPANESE,
            Language::English => &ENGLISH,
        }
    }

    pub fn filter_name(&self, filter: Filter) -> &'static str {
        match filter {
            Filter::All => self.filter_all,
            Filter::Pending => self.filter_pending,
            Filter::Done => self.filter_done,
        }
    }

    /// Filter label with its live count, e.g. "未完了 (3)"
    pub fn filter_with_count(&self, filter: Filter, counts: &Counts) -> String {
        format!("{} ({})", self.filter_name(filter), counts.count_for(filter))
    }

    /// Message for an empty list under `filter`
    pub fn empty_message(&self, filter: Filter) -> &'static str {
        match filter {
            Filter::All => self.empty_all,
            Filter::Pending => self.empty_pending,
            Filter::Done => self.empty_done,
        }
    }

    /// "2 / 5 タスク完了"
    pub fn progress(&self, counts: &Counts) -> String {
        format!("{} / {} {}", counts.completed, counts.total, self.completed_suffix)
    }

    pub fn collapse_toggle(&self, collapsed: bool) -> &'static str {
        if collapsed {
            self.show_completed
        } else {
            self.hide_completed
        }
    }
}
