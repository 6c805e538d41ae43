use url::Url;

use crate::config::ApiEndpoints;
use crate::params::{KeywordFilter, LastUp, SearchParams};
use crate::r18::R18SearchParams;
use crate::range::RangeFilter;

pub const OUTPUT_FORMAT_KEY: &str = "out";
pub const OUTPUT_FORMAT: &str = "json";

pub type QueryPair = (&'static str, String);
pub type Encoder<P> = fn(&P) -> Vec<QueryPair>;

/// Encoding runs a fixed list of encoders, one per dimension, and appends
/// their pairs after `out=json` in list order.
pub trait SearchQuery: Sized {
    fn endpoint(endpoints: &ApiEndpoints) -> &str;

    fn encoders() -> Vec<Encoder<Self>>;

    fn validate(&self) -> crate::Result<()>;

    fn query_pairs(&self) -> Vec<QueryPair> {
        Self::encoders()
            .into_iter()
            .flat_map(|encode| encode(self))
            .collect()
    }

    fn to_url_with(&self, endpoints: &ApiEndpoints) -> crate::Result<Url> {
        let mut url = Url::parse(Self::endpoint(endpoints))?;
        self.validate()?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair(OUTPUT_FORMAT_KEY, OUTPUT_FORMAT);
            for (key, value) in self.query_pairs() {
                query.append_pair(key, &value);
            }
        }

        Ok(url)
    }

    fn to_url(&self) -> crate::Result<Url> {
        self.to_url_with(&ApiEndpoints::default())
    }
}

impl SearchQuery for SearchParams {
    fn endpoint(endpoints: &ApiEndpoints) -> &str {
        &endpoints.general
    }

    fn encoders() -> Vec<Encoder<Self>> {
        let steps: &[Encoder<Self>] = &[
            start,
            limit,
            order,
            output_fields,
            words,
            not_words,
            search_fields,
            big_genres,
            not_big_genres,
            genres,
            not_genres,
            user_ids,
            required_keywords,
            length,
            kaiwaritu,
            sasie,
            read_time,
            ncodes,
            novel_state,
            buntai,
            stop,
            pickup,
            last_up,
        ];
        steps.to_vec()
    }

    fn validate(&self) -> crate::Result<()> {
        SearchParams::validate(self)
    }
}

impl SearchQuery for R18SearchParams {
    fn endpoint(endpoints: &ApiEndpoints) -> &str {
        &endpoints.restricted
    }

    fn encoders() -> Vec<Encoder<Self>> {
        let steps: &[Encoder<Self>] = &[
            start,
            limit,
            order,
            output_fields,
            words,
            not_words,
            search_fields,
            noc_genres,
            not_noc_genres,
            user_ids,
            required_keywords,
            length,
            kaiwaritu,
            sasie,
            read_time,
            ncodes,
            novel_state,
            buntai,
            stop,
            pickup,
            last_up,
        ];
        steps.to_vec()
    }

    fn validate(&self) -> crate::Result<()> {
        self.as_ref().validate()
    }
}

fn single(key: &'static str, value: Option<String>) -> Vec<QueryPair> {
    value.map(|value| (key, value)).into_iter().collect()
}

fn range(key: &'static str, filter: &RangeFilter) -> Vec<QueryPair> {
    single(key, filter.encode())
}

fn start<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    single("st", params.as_ref().start().map(|v| v.to_string()))
}

fn limit<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    single("lim", params.as_ref().limit().map(|v| v.to_string()))
}

fn order<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    let order = params.as_ref().order();
    if order == Default::default() {
        return Vec::new();
    }
    single("order", Some(order.query_value().to_owned()))
}

fn output_fields<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    let codes = params
        .as_ref()
        .output_fields()
        .iter()
        .filter_map(|field| field.short_code())
        .collect::<Vec<_>>();
    if codes.is_empty() {
        return Vec::new();
    }
    single("of", Some(codes.join("-")))
}

fn words<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    single("word", params.as_ref().words().join_with(" ", String::clone))
}

fn not_words<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    single(
        "notword",
        params.as_ref().not_words().join_with(" ", String::clone),
    )
}

fn search_fields<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    params
        .as_ref()
        .search_fields()
        .iter()
        .filter_map(|field| field.query_key())
        .map(|key| (key, "1".to_owned()))
        .collect()
}

fn big_genres(params: &SearchParams) -> Vec<QueryPair> {
    single(
        "biggenre",
        params.big_genres().join_with("-", |g| g.code().to_string()),
    )
}

fn not_big_genres(params: &SearchParams) -> Vec<QueryPair> {
    single(
        "notbiggenre",
        params.not_big_genres().join_with("-", |g| g.code().to_string()),
    )
}

fn genres(params: &SearchParams) -> Vec<QueryPair> {
    single(
        "genre",
        params.genres().join_with("-", |g| g.code().to_string()),
    )
}

fn not_genres(params: &SearchParams) -> Vec<QueryPair> {
    single(
        "notgenre",
        params.not_genres().join_with("-", |g| g.code().to_string()),
    )
}

fn noc_genres(params: &R18SearchParams) -> Vec<QueryPair> {
    single(
        "nocgenre",
        params.noc_genres().join_with("-", |g| g.code().to_string()),
    )
}

fn not_noc_genres(params: &R18SearchParams) -> Vec<QueryPair> {
    single(
        "notnocgenre",
        params.not_noc_genres().join_with("-", |g| g.code().to_string()),
    )
}

fn user_ids<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    single(
        "userid",
        params.as_ref().user_ids().join_with("-", u64::to_string),
    )
}

fn required_keywords<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    let keywords = params.as_ref().required_keywords();
    let pairs: [(KeywordFilter, &'static str, &'static str); 6] = [
        (keywords.r15, "isr15", "notr15"),
        (keywords.boys_love, "isbl", "notbl"),
        (keywords.girls_love, "isgl", "notgl"),
        (keywords.zankoku, "iszankoku", "notzankoku"),
        (keywords.tensei, "istensei", "nottensei"),
        (keywords.tenni, "istenni", "nottenni"),
    ];

    let mut out = Vec::new();
    for (filter, is_key, not_key) in pairs {
        match filter {
            KeywordFilter::Required => out.push((is_key, "1".to_owned())),
            KeywordFilter::Excluded => out.push((not_key, "1".to_owned())),
            KeywordFilter::Any => {}
        }
    }
    if keywords.tt {
        out.push(("istt", "1".to_owned()));
    }
    out
}

fn length<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    range("length", params.as_ref().length())
}

fn kaiwaritu<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    range("kaiwaritu", params.as_ref().kaiwaritu())
}

fn sasie<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    range("sasie", params.as_ref().sasie())
}

fn read_time<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    range("time", params.as_ref().read_time())
}

fn ncodes<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    single("ncode", params.as_ref().ncodes().join_with("-", String::clone))
}

fn novel_state<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    single(
        "type",
        params.as_ref().novel_state().query_value().map(str::to_owned),
    )
}

fn buntai<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    single(
        "buntai",
        params.as_ref().buntai().join_with("-", |b| b.code().to_string()),
    )
}

fn stop<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    single(
        "stop",
        params.as_ref().stop_state().query_value().map(str::to_owned),
    )
}

fn pickup<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    single(
        "ispickup",
        params.as_ref().pickup_state().query_value().map(str::to_owned),
    )
}

fn last_up<P: AsRef<SearchParams>>(params: &P) -> Vec<QueryPair> {
    let value = params.as_ref().last_up().map(|last_up| match last_up {
        LastUp::Window(window) => window.query_value().to_owned(),
        LastUp::Term { start, end } => format!("{}-{}", start.timestamp(), end.timestamp()),
    });
    single("lastup", value)
}
