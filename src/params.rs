use chrono::{DateTime, TimeZone, Utc};

use crate::codes::{
    BigGenre, Buntai, Genre, LastUpWindow, NovelState, OrderItem, OutputField, PickupState,
    SearchField, StopState,
};
use crate::range::RangeFilter;
use crate::values::ValueSet;

pub const MIN_LIMIT: u32 = 1;
pub const MAX_LIMIT: u32 = 500;
pub const MIN_START: u32 = 1;
pub const MAX_START: u32 = 2000;

/// Tri-state filter for one pair of required-keyword flags ("is X" / "is not X").
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeywordFilter {
    #[default]
    Any,
    Required,
    Excluded,
}

impl KeywordFilter {
    pub fn is_required(self) -> bool {
        self == KeywordFilter::Required
    }

    pub fn is_excluded(self) -> bool {
        self == KeywordFilter::Excluded
    }

    /// Turning one side on replaces the other; turning it off only resets that side.
    fn set_required(&mut self, on: bool) {
        match (on, *self) {
            (true, _) => *self = KeywordFilter::Required,
            (false, KeywordFilter::Required) => *self = KeywordFilter::Any,
            (false, _) => {}
        }
    }

    fn set_excluded(&mut self, on: bool) {
        match (on, *self) {
            (true, _) => *self = KeywordFilter::Excluded,
            (false, KeywordFilter::Excluded) => *self = KeywordFilter::Any,
            (false, _) => {}
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredKeywords {
    pub r15: KeywordFilter,
    pub boys_love: KeywordFilter,
    pub girls_love: KeywordFilter,
    pub zankoku: KeywordFilter,
    pub tensei: KeywordFilter,
    pub tenni: KeywordFilter,
    /// Either reincarnation or transmigration; has no "not" side.
    pub tt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastUp {
    Window(LastUpWindow),
    Term {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Accumulated conditions for one general-catalog search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    start: Option<u32>,
    limit: Option<u32>,
    order: OrderItem,
    output_fields: ValueSet<OutputField>,
    words: ValueSet<String>,
    not_words: ValueSet<String>,
    search_fields: ValueSet<SearchField>,
    big_genres: ValueSet<BigGenre>,
    not_big_genres: ValueSet<BigGenre>,
    genres: ValueSet<Genre>,
    not_genres: ValueSet<Genre>,
    user_ids: ValueSet<u64>,
    keywords: RequiredKeywords,
    length: RangeFilter,
    kaiwaritu: RangeFilter,
    sasie: RangeFilter,
    read_time: RangeFilter,
    ncodes: ValueSet<String>,
    state: NovelState,
    buntai: ValueSet<Buntai>,
    stop: StopState,
    pickup: PickupState,
    last_up: Option<LastUp>,
}

impl AsRef<SearchParams> for SearchParams {
    fn as_ref(&self) -> &SearchParams {
        self
    }
}

macro_rules! list_dimension {
    ($field:ident: $ty:ty, $add:ident, $clear:ident) => {
        pub fn $field(&self) -> &ValueSet<$ty> {
            &self.$field
        }

        pub fn $add<I>(&mut self, values: I)
        where
            I: IntoIterator,
            I::Item: Into<$ty>,
        {
            self.$field.add(values.into_iter().map(Into::into));
        }

        pub fn $clear(&mut self) {
            self.$field.clear();
        }
    };
}

macro_rules! range_dimension {
    ($field:ident, $field_mut:ident) => {
        pub fn $field(&self) -> &RangeFilter {
            &self.$field
        }

        pub fn $field_mut(&mut self) -> &mut RangeFilter {
            &mut self.$field
        }
    };
}

macro_rules! keyword_pair {
    ($slot:ident, $is:ident, $is_not:ident, $set_is:ident, $set_is_not:ident) => {
        pub fn $is(&self) -> bool {
            self.keywords.$slot.is_required()
        }

        pub fn $is_not(&self) -> bool {
            self.keywords.$slot.is_excluded()
        }

        pub fn $set_is(&mut self, on: bool) {
            self.keywords.$slot.set_required(on);
        }

        pub fn $set_is_not(&mut self, on: bool) {
            self.keywords.$slot.set_excluded(on);
        }
    };
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hook for cross-field checks. Nothing is rejected yet.
    pub fn validate(&self) -> crate::Result<()> {
        Ok(())
    }

    pub fn start(&self) -> Option<u32> {
        self.start
    }

    /// Values outside `1..=2000` are ignored.
    pub fn set_start(&mut self, start: u32) {
        if (MIN_START..=MAX_START).contains(&start) {
            self.start = Some(start);
        }
    }

    pub fn clear_start(&mut self) {
        self.start = None;
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Values outside `1..=500` are ignored.
    pub fn set_limit(&mut self, limit: u32) {
        if (MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
            self.limit = Some(limit);
        }
    }

    pub fn clear_limit(&mut self) {
        self.limit = None;
    }

    pub fn order(&self) -> OrderItem {
        self.order
    }

    pub fn set_order(&mut self, order: OrderItem) {
        self.order = order;
    }

    pub fn clear_order(&mut self) {
        self.order = OrderItem::New;
    }

    list_dimension!(output_fields: OutputField, add_output_fields, clear_output_fields);
    list_dimension!(words: String, add_words, clear_words);
    list_dimension!(not_words: String, add_not_words, clear_not_words);
    list_dimension!(search_fields: SearchField, add_search_fields, clear_search_fields);
    list_dimension!(big_genres: BigGenre, add_big_genres, clear_big_genres);
    list_dimension!(not_big_genres: BigGenre, add_not_big_genres, clear_not_big_genres);
    list_dimension!(genres: Genre, add_genres, clear_genres);
    list_dimension!(not_genres: Genre, add_not_genres, clear_not_genres);
    list_dimension!(user_ids: u64, add_user_ids, clear_user_ids);
    list_dimension!(ncodes: String, add_ncodes, clear_ncodes);
    list_dimension!(buntai: Buntai, add_buntai, clear_buntai);

    pub fn required_keywords(&self) -> &RequiredKeywords {
        &self.keywords
    }

    keyword_pair!(r15, is_r15, is_not_r15, set_is_r15, set_is_not_r15);
    keyword_pair!(boys_love, is_bl, is_not_bl, set_is_bl, set_is_not_bl);
    keyword_pair!(girls_love, is_gl, is_not_gl, set_is_gl, set_is_not_gl);
    keyword_pair!(zankoku, is_zankoku, is_not_zankoku, set_is_zankoku, set_is_not_zankoku);
    keyword_pair!(tensei, is_tensei, is_not_tensei, set_is_tensei, set_is_not_tensei);
    keyword_pair!(tenni, is_tenni, is_not_tenni, set_is_tenni, set_is_not_tenni);

    pub fn is_tt(&self) -> bool {
        self.keywords.tt
    }

    pub fn set_is_tt(&mut self, on: bool) {
        self.keywords.tt = on;
    }

    range_dimension!(length, length_mut);
    range_dimension!(kaiwaritu, kaiwaritu_mut);
    range_dimension!(sasie, sasie_mut);
    range_dimension!(read_time, read_time_mut);

    pub fn novel_state(&self) -> NovelState {
        self.state
    }

    pub fn set_novel_state(&mut self, state: NovelState) {
        self.state = state;
    }

    pub fn clear_novel_state(&mut self) {
        self.state = NovelState::All;
    }

    pub fn stop_state(&self) -> StopState {
        self.stop
    }

    pub fn set_stop_state(&mut self, stop: StopState) {
        self.stop = stop;
    }

    pub fn clear_stop_state(&mut self) {
        self.stop = StopState::All;
    }

    pub fn pickup_state(&self) -> PickupState {
        self.pickup
    }

    pub fn set_pickup_state(&mut self, pickup: PickupState) {
        self.pickup = pickup;
    }

    pub fn clear_pickup_state(&mut self) {
        self.pickup = PickupState::None;
    }

    pub fn last_up(&self) -> Option<LastUp> {
        self.last_up
    }

    pub fn set_last_up(&mut self, window: LastUpWindow) {
        self.last_up = Some(LastUp::Window(window));
    }

    /// Switches the filter to an explicit `[start, end]` timestamp range.
    pub fn set_last_up_term<Tz: TimeZone>(&mut self, start: DateTime<Tz>, end: DateTime<Tz>) {
        self.last_up = Some(LastUp::Term {
            start: start.with_timezone(&Utc),
            end: end.with_timezone(&Utc),
        });
    }

    pub fn clear_last_up(&mut self) {
        self.last_up = None;
    }
}
