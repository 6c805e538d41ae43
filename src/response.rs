use chrono::{DateTime, FixedOffset};
use serde::Deserialize;

use crate::formats::{NovelInfo, SearchResult};
use crate::{Error, jst};

#[derive(Debug, Default, Deserialize)]
struct RawRecord {
    allcount: Option<u64>,

    title: Option<String>,
    ncode: Option<String>,
    userid: Option<u64>,
    writer: Option<String>,
    story: Option<String>,
    biggenre: Option<u32>,
    genre: Option<u32>,
    nocgenre: Option<u32>,
    keyword: Option<String>,
    general_firstup: Option<String>,
    general_lastup: Option<String>,
    novel_type: Option<u8>,
    end: Option<u8>,
    general_all_no: Option<u64>,
    length: Option<u64>,
    time: Option<u64>,
    isstop: Option<u8>,
    isr15: Option<u8>,
    isbl: Option<u8>,
    isgl: Option<u8>,
    iszankoku: Option<u8>,
    istensei: Option<u8>,
    istenni: Option<u8>,
    pc_or_k: Option<u8>,
    global_point: Option<u64>,
    daily_point: Option<u64>,
    weekly_point: Option<u64>,
    monthly_point: Option<u64>,
    quarter_point: Option<u64>,
    yearly_point: Option<u64>,
    fav_novel_cnt: Option<u64>,
    impression_cnt: Option<u64>,
    review_cnt: Option<u64>,
    all_point: Option<u64>,
    all_hyoka_cnt: Option<u64>,
    sasie_cnt: Option<u64>,
    kaiwaritu: Option<u64>,
    novelupdated_at: Option<String>,
    updated_at: Option<String>,
}

/// The body is an array whose first element only carries `allcount`.
pub fn decode(body: &[u8]) -> crate::Result<SearchResult> {
    let records: Vec<RawRecord> = serde_json::from_slice(body)?;
    let mut records = records.into_iter();

    let all_count = records
        .next()
        .and_then(|head| head.allcount)
        .ok_or(Error::MissingCount)?;
    let novels = records.map(RawRecord::into_info).collect();

    Ok(SearchResult { all_count, novels })
}

impl RawRecord {
    fn into_info(self) -> NovelInfo {
        NovelInfo {
            user_id: self.userid.map(|id| id.to_string()),
            keywords: self
                .keyword
                .as_deref()
                .map(|k| k.split_whitespace().map(str::to_owned).collect())
                .unwrap_or_default(),
            general_first_up: timestamp("general_firstup", self.general_firstup.as_deref()),
            general_last_up: timestamp("general_lastup", self.general_lastup.as_deref()),
            novel_updated_at: timestamp("novelupdated_at", self.novelupdated_at.as_deref()),
            updated_at: timestamp("updated_at", self.updated_at.as_deref()),
            is_stop: flag(self.isstop),
            is_r15: flag(self.isr15),
            is_boys_love: flag(self.isbl),
            is_girls_love: flag(self.isgl),
            is_zankoku: flag(self.iszankoku),
            is_tensei: flag(self.istensei),
            is_tenni: flag(self.istenni),
            title: self.title,
            ncode: self.ncode,
            writer: self.writer,
            story: self.story,
            big_genre: self.biggenre,
            genre: self.genre,
            noc_genre: self.nocgenre,
            novel_type: self.novel_type,
            end: self.end,
            general_all_no: self.general_all_no,
            length: self.length,
            time: self.time,
            pc_or_k: self.pc_or_k,
            global_point: self.global_point,
            daily_point: self.daily_point,
            weekly_point: self.weekly_point,
            monthly_point: self.monthly_point,
            quarter_point: self.quarter_point,
            yearly_point: self.yearly_point,
            fav_novel_count: self.fav_novel_cnt,
            impression_count: self.impression_cnt,
            review_count: self.review_cnt,
            all_point: self.all_point,
            all_hyoka_count: self.all_hyoka_cnt,
            sasie_count: self.sasie_cnt,
            kaiwaritu: self.kaiwaritu,
        }
    }
}

fn flag(value: Option<u8>) -> Option<bool> {
    value.map(|v| v == 1)
}

fn timestamp(field: &str, text: Option<&str>) -> Option<DateTime<FixedOffset>> {
    let text = text?;
    match jst::parse_api(text) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::debug!(field, text, %err, "skipping unparsable timestamp");
            None
        }
    }
}
