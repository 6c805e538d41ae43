use crate::values::Sentinel;

/// Fields the API returns for each novel (`of`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputField {
    All,
    Title,
    NCode,
    UserId,
    Writer,
    Story,
    BigGenre,
    Genre,
    Keyword,
    GeneralFirstUp,
    GeneralLastUp,
    NovelType,
    End,
    GeneralAllNo,
    Length,
    Time,
    IsStop,
    IsR15,
    IsBl,
    IsGl,
    IsZankoku,
    IsTensei,
    IsTenni,
    PcOrK,
    GlobalPoint,
    FavNovelCount,
    ReviewCount,
    AllPoint,
    AllHyokaCount,
    SasieCount,
    Kaiwaritu,
    NovelUpdatedAt,
    UpdatedAt,
    // Restricted catalog and ranking fields.
    NocGenre,
    DailyPoint,
    WeeklyPoint,
    MonthlyPoint,
    QuarterPoint,
    YearlyPoint,
    ImpressionCount,
}

impl OutputField {
    pub fn short_code(self) -> Option<&'static str> {
        let code = match self {
            OutputField::All => return None,
            OutputField::Title => "t",
            OutputField::NCode => "n",
            OutputField::UserId => "u",
            OutputField::Writer => "w",
            OutputField::Story => "s",
            OutputField::BigGenre => "bg",
            OutputField::Genre => "g",
            OutputField::Keyword => "k",
            OutputField::GeneralFirstUp => "gf",
            OutputField::GeneralLastUp => "gl",
            OutputField::NovelType => "nt",
            OutputField::End => "e",
            OutputField::GeneralAllNo => "ga",
            OutputField::Length => "l",
            OutputField::Time => "ti",
            OutputField::IsStop => "i",
            OutputField::IsR15 => "ir",
            OutputField::IsBl => "ibl",
            OutputField::IsGl => "igl",
            OutputField::IsZankoku => "izk",
            OutputField::IsTensei => "its",
            OutputField::IsTenni => "iti",
            OutputField::PcOrK => "p",
            OutputField::GlobalPoint => "gp",
            OutputField::FavNovelCount => "f",
            OutputField::ReviewCount => "r",
            OutputField::AllPoint => "a",
            OutputField::AllHyokaCount => "ah",
            OutputField::SasieCount => "sa",
            OutputField::Kaiwaritu => "ka",
            OutputField::NovelUpdatedAt => "nu",
            OutputField::UpdatedAt => "ua",
            OutputField::NocGenre => "ng",
            OutputField::DailyPoint => "dp",
            OutputField::WeeklyPoint => "wp",
            OutputField::MonthlyPoint => "mp",
            OutputField::QuarterPoint => "qp",
            OutputField::YearlyPoint => "yp",
            OutputField::ImpressionCount => "imp",
        };
        Some(code)
    }
}

impl Sentinel for OutputField {
    fn is_all(&self) -> bool {
        matches!(self, OutputField::All)
    }
}

/// Which text fields the search words are matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    All,
    Title,
    Story,
    Keyword,
    Writer,
}

impl SearchField {
    /// Each field is switched on by its own `<key>=1` pair.
    pub fn query_key(self) -> Option<&'static str> {
        match self {
            SearchField::All => None,
            SearchField::Title => Some("title"),
            SearchField::Story => Some("ex"),
            SearchField::Keyword => Some("keyword"),
            SearchField::Writer => Some("wname"),
        }
    }
}

impl Sentinel for SearchField {
    fn is_all(&self) -> bool {
        matches!(self, SearchField::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum BigGenre {
    All = 0,
    Renai = 1,
    Fantasy = 2,
    Bungei = 3,
    Sf = 4,
    NonGenre = 98,
    Other = 99,
}

impl BigGenre {
    pub fn code(self) -> u16 {
        self as u16
    }
}

impl Sentinel for BigGenre {
    fn is_all(&self) -> bool {
        matches!(self, BigGenre::All)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum Genre {
    All = 0,

    RenaiIsekai = 101,
    RenaiGenjitsu = 102,

    FantasyHigh = 201,
    FantasyLow = 202,

    BungeiJunbungaku = 301,
    BungeiHumanDrama = 302,
    BungeiHistory = 303,
    BungeiMystery = 304,
    BungeiHorror = 305,
    BungeiAction = 306,
    BungeiComedy = 307,

    SfVrGame = 401,
    SfSpace = 402,
    SfScienceFiction = 403,
    SfPanic = 404,

    OtherFairyTale = 9901,
    OtherPoetry = 9902,
    OtherEssay = 9903,
    OtherReplay = 9904,
    OtherOther = 9999,

    NonGenre = 9801,
}

impl Genre {
    pub fn code(self) -> u16 {
        self as u16
    }
}

impl Sentinel for Genre {
    fn is_all(&self) -> bool {
        matches!(self, Genre::All)
    }
}

/// Sub-site of the restricted catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NocGenre {
    All = 0,
    Nocturne = 1,
    MoonlightWomen = 2,
    MoonlightBl = 3,
    Midnight = 4,
}

impl NocGenre {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Sentinel for NocGenre {
    fn is_all(&self) -> bool {
        matches!(self, NocGenre::All)
    }
}

/// Work type and serialization state (`type`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NovelState {
    #[default]
    All,
    ShortStory,
    SerialRunning,
    SerialEnded,
    SerialAll,
    ShortAndSerialEnded,
}

impl NovelState {
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            NovelState::All => None,
            NovelState::ShortStory => Some("t"),
            NovelState::SerialRunning => Some("r"),
            NovelState::SerialEnded => Some("er"),
            NovelState::SerialAll => Some("re"),
            NovelState::ShortAndSerialEnded => Some("ter"),
        }
    }
}

/// Writing style: indentation and blank-line density (`buntai`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Buntai {
    All = 0,
    NoIndentManyEmptyLines = 1,
    NoIndentAverageEmptyLines = 2,
    IndentManyEmptyLines = 4,
    IndentAverageEmptyLines = 6,
}

impl Buntai {
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl Sentinel for Buntai {
    fn is_all(&self) -> bool {
        matches!(self, Buntai::All)
    }
}

/// Long-term hiatus filter (`stop`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StopState {
    #[default]
    All,
    Exclude,
    Only,
}

impl StopState {
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            StopState::All => None,
            StopState::Exclude => Some("1"),
            StopState::Only => Some("2"),
        }
    }
}

/// Pickup-listed filter (`ispickup`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PickupState {
    #[default]
    None,
    NotPickup,
    Pickup,
}

impl PickupState {
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            PickupState::None => None,
            PickupState::NotPickup => Some("0"),
            PickupState::Pickup => Some("1"),
        }
    }
}

/// Named relative windows for the last-update filter (`lastup`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastUpWindow {
    ThisWeek,
    LastWeek,
    SevenDay,
    ThisMonth,
    LastMonth,
}

impl LastUpWindow {
    pub fn query_value(self) -> &'static str {
        match self {
            LastUpWindow::ThisWeek => "thisweek",
            LastUpWindow::LastWeek => "lastweek",
            LastUpWindow::SevenDay => "sevenday",
            LastUpWindow::ThisMonth => "thismonth",
            LastUpWindow::LastMonth => "lastmonth",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderItem {
    #[default]
    New,
    FavNovelCount,
    ReviewCount,
    Hyoka,
    HyokaAsc,
    ImpressionCount,
    HyokaCount,
    HyokaCountAsc,
    Weekly,
    LengthDesc,
    LengthAsc,
    NCodeDesc,
    Old,
}

impl OrderItem {
    pub fn query_value(self) -> &'static str {
        match self {
            OrderItem::New => "new",
            OrderItem::FavNovelCount => "favnovelcnt",
            OrderItem::ReviewCount => "reviewcnt",
            OrderItem::Hyoka => "hyoka",
            OrderItem::HyokaAsc => "hyokaasc",
            OrderItem::ImpressionCount => "impressioncnt",
            OrderItem::HyokaCount => "hyokacnt",
            OrderItem::HyokaCountAsc => "hyokacntasc",
            OrderItem::Weekly => "weekly",
            OrderItem::LengthDesc => "lengthdesc",
            OrderItem::LengthAsc => "lengthasc",
            OrderItem::NCodeDesc => "ncodedesc",
            OrderItem::Old => "old",
        }
    }
}
