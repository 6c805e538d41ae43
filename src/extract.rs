use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset};
use scraper::{ElementRef, Html, Selector};

use crate::formats::{ChapterStub, ContentLine, FetchResult, FetchStatus, NovelType};
use crate::jst;
use crate::site::Site;

const REVISION_MARKERS: [&str; 2] = ["（改）", "(改)"];
const REVISED_ON_MARKER: &str = "改稿";

struct PageSelectors {
    title: Selector,
    writer: Selector,
    synopsis: Selector,
    chapter_row: Selector,
    row_subtitle: Selector,
    row_date: Selector,
    row_revision: Selector,
    subtitle: Selector,
    chapter_title: Selector,
    preface: Selector,
    body: Selector,
    afterword: Selector,
    color: Selector,
    paragraph: Selector,
}

static SELECTORS: OnceLock<PageSelectors> = OnceLock::new();

impl PageSelectors {
    fn get() -> &'static PageSelectors {
        SELECTORS.get_or_init(|| PageSelectors {
            title: Selector::parse("title").unwrap(),
            writer: Selector::parse("div.novel_writername").unwrap(),
            synopsis: Selector::parse("#novel_ex").unwrap(),
            chapter_row: Selector::parse("div.index_box > dl.novel_sublist2").unwrap(),
            row_subtitle: Selector::parse("dd.subtitle a").unwrap(),
            row_date: Selector::parse("dt.long_update").unwrap(),
            row_revision: Selector::parse("dt.long_update span").unwrap(),
            subtitle: Selector::parse(".novel_subtitle").unwrap(),
            chapter_title: Selector::parse(".chapter_title").unwrap(),
            preface: Selector::parse("#novel_p").unwrap(),
            body: Selector::parse("#novel_honbun").unwrap(),
            afterword: Selector::parse("#novel_a").unwrap(),
            color: Selector::parse("#novel_color").unwrap(),
            paragraph: Selector::parse("p").unwrap(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    SeriesIndex,
    ShortStory,
}

/// Decided from the document structure on every call.
pub fn classify(doc: &Html) -> PageKind {
    if doc.select(&PageSelectors::get().synopsis).next().is_some() {
        PageKind::SeriesIndex
    } else {
        PageKind::ShortStory
    }
}

/// Parses the first page fetched for a work into its initial result.
pub fn parse_work(html: &str, site: Site, ncode: &str) -> FetchResult {
    let doc = Html::parse_document(html);
    let mut result = match classify(&doc) {
        PageKind::SeriesIndex => parse_index_page(&doc),
        PageKind::ShortStory => parse_short_story(&doc),
    };
    result.site = site;
    result.ncode = ncode.to_owned();
    result
}

pub fn parse_index_page(doc: &Html) -> FetchResult {
    let sel = PageSelectors::get();

    let chapters = doc
        .select(&sel.chapter_row)
        .enumerate()
        .map(|(index, row)| parse_chapter_row(index + 1, row))
        .collect();

    FetchResult {
        site: Site::default(),
        ncode: String::new(),
        title: first_text(doc, &sel.title),
        writer: first_text(doc, &sel.writer),
        novel_type: NovelType::Serial,
        synopsis: Some(first_text(doc, &sel.synopsis)),
        chapters,
        status: FetchStatus::IndexOnly,
    }
}

fn parse_chapter_row(ordinal: usize, row: ElementRef<'_>) -> ChapterStub {
    let sel = PageSelectors::get();

    let subtitle = row
        .select(&sel.row_subtitle)
        .next()
        .map(element_text)
        .unwrap_or_default();

    let published_at = row.select(&sel.row_date).next().and_then(|dt| {
        let raw = dt.text().collect::<String>();
        let text = strip_revision_marker(&raw);
        parse_row_date(ordinal, "published", &text)
    });

    let revised_at = row
        .select(&sel.row_revision)
        .next()
        .and_then(|span| span.value().attr("title"))
        .and_then(|title| {
            let text = title.replace(REVISED_ON_MARKER, "");
            parse_row_date(ordinal, "revised", &text)
        });

    ChapterStub {
        subtitle,
        published_at,
        revised_at,
        ..ChapterStub::default()
    }
}

fn strip_revision_marker(text: &str) -> String {
    REVISION_MARKERS
        .iter()
        .fold(text.to_owned(), |acc, marker| acc.replace(marker, ""))
        .trim()
        .to_owned()
}

fn parse_row_date(ordinal: usize, field: &str, text: &str) -> Option<DateTime<FixedOffset>> {
    match jst::parse_index(text) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::debug!(chapter = ordinal, field, text, %err, "unparsable chapter date");
            None
        }
    }
}

/// A single page work: one chapter whose body lives on the same page.
pub fn parse_short_story(doc: &Html) -> FetchResult {
    let sel = PageSelectors::get();

    FetchResult {
        site: Site::default(),
        ncode: String::new(),
        title: first_text(doc, &sel.title),
        writer: first_text(doc, &sel.writer),
        novel_type: NovelType::Short,
        synopsis: None,
        chapters: vec![parse_content_page(doc)],
        status: FetchStatus::Complete,
    }
}

/// Body of one chapter page. Dates are left unset; they come from the index.
pub fn parse_content_page(doc: &Html) -> ChapterStub {
    let sel = PageSelectors::get();

    let chapter_title = doc.select(&sel.chapter_title).next().map(element_text);
    let raw_html = doc
        .select(&sel.color)
        .next()
        .map(|container| container.inner_html())
        .unwrap_or_default();

    ChapterStub {
        subtitle: first_text(doc, &sel.subtitle),
        published_at: None,
        revised_at: None,
        chapter_title,
        preface: content_lines(doc, &sel.preface),
        lines: content_lines(doc, &sel.body),
        afterword: content_lines(doc, &sel.afterword),
        raw_html,
    }
}

/// Every paragraph under the first `container` match, as outer HTML.
pub fn content_lines(doc: &Html, container: &Selector) -> Vec<ContentLine> {
    let Some(container) = doc.select(container).next() else {
        return Vec::new();
    };
    container
        .select(&PageSelectors::get().paragraph)
        .map(|p| ContentLine { raw: p.html() })
        .collect()
}

fn first_text(doc: &Html, selector: &Selector) -> String {
    doc.select(selector)
        .next()
        .map(element_text)
        .unwrap_or_default()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}
