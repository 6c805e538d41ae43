use scraper::Html;
use url::Url;

use crate::client::Client;
use crate::extract;
use crate::formats::{ChapterStub, FetchResult, FetchStatus, NovelType};
use crate::site::{self, Site};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchRequest {
    pub ncode: String,
    pub site: Site,
    /// Send the age-verification cookie to restricted sites.
    pub allow_restricted: bool,
    /// Fetch every chapter page. Takes precedence over `page`.
    pub all_pages: bool,
    /// 1-based chapter to fetch; 0 means none.
    pub page: usize,
}

impl FetchRequest {
    pub fn new(ncode: impl Into<String>) -> Self {
        Self {
            ncode: ncode.into(),
            ..Self::default()
        }
    }
}

impl Client {
    /// Fetches a work. Only the first request can fail the call; a failed
    /// chapter page stops the chapter loop and is reported in
    /// [`FetchResult::status`].
    pub fn fetch(&self, request: &FetchRequest) -> crate::Result<FetchResult> {
        let index_url = site::content_url(&self.config().content, &request.ncode, request.site)?;
        if request.site.is_restricted() && request.allow_restricted {
            self.accept_age_gate(&index_url);
        }

        let html = self.get_text(&index_url)?;
        let mut result = extract::parse_work(&html, request.site, &request.ncode);
        tracing::info!(
            ncode = %request.ncode,
            novel_type = ?result.novel_type,
            chapters = result.chapter_count(),
            "fetched work page"
        );

        if result.novel_type == NovelType::Short {
            return Ok(result);
        }

        if request.all_pages {
            let pages = (1..=result.chapter_count()).collect::<Vec<_>>();
            self.fill_chapters(&index_url, &mut result, &pages);
        } else if request.page > 0 {
            if request.page > result.chapter_count() {
                tracing::warn!(
                    page = request.page,
                    chapters = result.chapter_count(),
                    "requested page is beyond the chapter list; nothing fetched"
                );
            } else {
                self.fill_chapters(&index_url, &mut result, &[request.page]);
            }
        }

        Ok(result)
    }

    fn fill_chapters(&self, index_url: &Url, result: &mut FetchResult, pages: &[usize]) {
        for &page in pages {
            match self.fetch_chapter(index_url, page) {
                Ok(parsed) => merge_chapter(&mut result.chapters[page - 1], parsed),
                Err(err) => {
                    tracing::warn!(page, error = %err, "chapter fetch failed; stopping");
                    result.status = FetchStatus::Partial {
                        failed_page: page,
                        reason: err.to_string(),
                    };
                    return;
                }
            }
        }
        result.status = FetchStatus::Complete;
    }

    fn fetch_chapter(&self, index_url: &Url, page: usize) -> crate::Result<ChapterStub> {
        let url = site::chapter_url(index_url, page)?;
        let html = self.get_text(&url)?;
        Ok(extract::parse_content_page(&Html::parse_document(&html)))
    }
}

/// Folds a parsed chapter page into the stub from the index, keeping the
/// dates the index already provided.
fn merge_chapter(stub: &mut ChapterStub, parsed: ChapterStub) {
    if !parsed.subtitle.is_empty() {
        stub.subtitle = parsed.subtitle;
    }
    stub.chapter_title = parsed.chapter_title;
    stub.preface = parsed.preface;
    stub.lines = parsed.lines;
    stub.afterword = parsed.afterword;
    stub.raw_html = parsed.raw_html;
}
