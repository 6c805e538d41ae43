use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::site::Site;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Number of novels the query matched, not the length of `novels`.
    pub all_count: u64,
    pub novels: Vec<NovelInfo>,
}

/// One catalog record. Every field is optional because the `of` output
/// filter decides which ones the API sends back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NovelInfo {
    pub title: Option<String>,
    pub ncode: Option<String>,
    pub user_id: Option<String>,
    pub writer: Option<String>,
    pub story: Option<String>,
    pub big_genre: Option<u32>,
    pub genre: Option<u32>,
    pub noc_genre: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub general_first_up: Option<DateTime<FixedOffset>>,
    pub general_last_up: Option<DateTime<FixedOffset>>,
    pub novel_type: Option<u8>,
    pub end: Option<u8>,
    pub general_all_no: Option<u64>,
    pub length: Option<u64>,
    pub time: Option<u64>,
    pub is_stop: Option<bool>,
    pub is_r15: Option<bool>,
    pub is_boys_love: Option<bool>,
    pub is_girls_love: Option<bool>,
    pub is_zankoku: Option<bool>,
    pub is_tensei: Option<bool>,
    pub is_tenni: Option<bool>,
    pub pc_or_k: Option<u8>,
    pub global_point: Option<u64>,
    pub daily_point: Option<u64>,
    pub weekly_point: Option<u64>,
    pub monthly_point: Option<u64>,
    pub quarter_point: Option<u64>,
    pub yearly_point: Option<u64>,
    pub fav_novel_count: Option<u64>,
    pub impression_count: Option<u64>,
    pub review_count: Option<u64>,
    pub all_point: Option<u64>,
    pub all_hyoka_count: Option<u64>,
    pub sasie_count: Option<u64>,
    pub kaiwaritu: Option<u64>,
    pub novel_updated_at: Option<DateTime<FixedOffset>>,
    pub updated_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NovelType {
    /// Multi-chapter work with a series index page.
    Serial,
    /// Single page work.
    Short,
}

/// One paragraph of a chapter, kept as the source markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentLine {
    pub raw: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterStub {
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revised_at: Option<DateTime<FixedOffset>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter_title: Option<String>,
    pub preface: Vec<ContentLine>,
    pub lines: Vec<ContentLine>,
    pub afterword: Vec<ContentLine>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub raw_html: String,
}

impl ChapterStub {
    /// True once a chapter page has been merged in.
    pub fn has_content(&self) -> bool {
        !self.lines.is_empty()
            || !self.preface.is_empty()
            || !self.afterword.is_empty()
            || !self.raw_html.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FetchStatus {
    /// Chapter list only; no chapter page was fetched.
    IndexOnly,
    /// Every requested page was fetched and merged.
    Complete,
    /// Chapter pages before `failed_page` were merged; the rest were skipped.
    Partial { failed_page: usize, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResult {
    pub site: Site,
    pub ncode: String,
    pub title: String,
    pub writer: String,
    pub novel_type: NovelType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    pub chapters: Vec<ChapterStub>,
    pub status: FetchStatus,
}

impl FetchResult {
    pub fn chapter_count(&self) -> usize {
        self.chapters.len()
    }
}
