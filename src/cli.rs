use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::codes::{NocGenre, OrderItem};
use crate::config::ClientConfig;
use crate::site::Site;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Log this crate's debug events (ignored when RUST_LOG is set).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Query the catalog search API.
    Search(SearchArgs),
    /// Download a work's index and, optionally, its chapters.
    Fetch(FetchArgs),
}

/// Site selector as typed on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SiteArg {
    #[default]
    Narou,
    Noc,
    Mid,
    Ml,
    Mlbl,
}

impl SiteArg {
    pub fn site(self) -> Site {
        match self {
            SiteArg::Narou => Site::Narou,
            SiteArg::Noc => Site::Nocturne,
            SiteArg::Mid => Site::MidNight,
            SiteArg::Ml | SiteArg::Mlbl => Site::MoonLight,
        }
    }

    /// Restricted catalog genre, or `None` for the general catalog.
    pub fn noc_genre(self) -> Option<NocGenre> {
        match self {
            SiteArg::Narou => None,
            SiteArg::Noc => Some(NocGenre::Nocturne),
            SiteArg::Mid => Some(NocGenre::Midnight),
            SiteArg::Ml => Some(NocGenre::MoonlightWomen),
            SiteArg::Mlbl => Some(NocGenre::MoonlightBl),
        }
    }
}

/// Sort order as the API spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderArg {
    New,
    #[value(name = "favnovelcnt")]
    FavNovelCount,
    #[value(name = "reviewcnt")]
    ReviewCount,
    Hyoka,
    #[value(name = "hyokaasc")]
    HyokaAsc,
    #[value(name = "impressioncnt")]
    ImpressionCount,
    #[value(name = "hyokacnt")]
    HyokaCount,
    #[value(name = "hyokacntasc")]
    HyokaCountAsc,
    Weekly,
    #[value(name = "lengthdesc")]
    LengthDesc,
    #[value(name = "lengthasc")]
    LengthAsc,
    #[value(name = "ncodedesc")]
    NCodeDesc,
    Old,
}

impl OrderArg {
    pub fn order(self) -> OrderItem {
        match self {
            OrderArg::New => OrderItem::New,
            OrderArg::FavNovelCount => OrderItem::FavNovelCount,
            OrderArg::ReviewCount => OrderItem::ReviewCount,
            OrderArg::Hyoka => OrderItem::Hyoka,
            OrderArg::HyokaAsc => OrderItem::HyokaAsc,
            OrderArg::ImpressionCount => OrderItem::ImpressionCount,
            OrderArg::HyokaCount => OrderItem::HyokaCount,
            OrderArg::HyokaCountAsc => OrderItem::HyokaCountAsc,
            OrderArg::Weekly => OrderItem::Weekly,
            OrderArg::LengthDesc => OrderItem::LengthDesc,
            OrderArg::LengthAsc => OrderItem::LengthAsc,
            OrderArg::NCodeDesc => OrderItem::NCodeDesc,
            OrderArg::Old => OrderItem::Old,
        }
    }
}

/// Overrides applied on top of the `NARROW_*` environment.
#[derive(Debug, Args)]
pub struct ConnectionArgs {
    /// General catalog search endpoint.
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// Restricted catalog search endpoint.
    #[arg(long)]
    pub r18_api_endpoint: Option<String>,

    /// Base URL of the general content site.
    #[arg(long)]
    pub content_base: Option<String>,

    /// Base URL of the restricted content site.
    #[arg(long)]
    pub r18_content_base: Option<String>,

    #[arg(long)]
    pub user_agent: Option<String>,
}

impl ConnectionArgs {
    pub fn apply(&self, config: &mut ClientConfig) {
        if let Some(endpoint) = &self.api_endpoint {
            config.api.general = endpoint.clone();
        }
        if let Some(endpoint) = &self.r18_api_endpoint {
            config.api.restricted = endpoint.clone();
        }
        if let Some(base) = &self.content_base {
            config.content.general = base.clone();
        }
        if let Some(base) = &self.r18_content_base {
            config.content.restricted = base.clone();
        }
        if let Some(user_agent) = &self.user_agent {
            config.user_agent = user_agent.clone();
        }
    }
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    #[arg(long, value_enum, default_value_t = SiteArg::Narou)]
    pub site: SiteArg,

    /// Results per page (1-500).
    #[arg(long)]
    pub limit: Option<u32>,

    /// 1-based offset of the first result (1-2000).
    #[arg(long)]
    pub start: Option<u32>,

    /// Sort order.
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Search word; repeatable.
    #[arg(long = "word")]
    pub words: Vec<String>,

    /// Excluded word; repeatable.
    #[arg(long = "not-word")]
    pub not_words: Vec<String>,

    /// Restrict results to these codes; repeatable.
    #[arg(long = "ncode")]
    pub ncodes: Vec<String>,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

#[derive(Debug, Args)]
pub struct FetchArgs {
    #[arg(long)]
    pub ncode: String,

    #[arg(long, value_enum, default_value_t = SiteArg::Narou)]
    pub site: SiteArg,

    /// Confirm age verification for restricted sites.
    #[arg(long)]
    pub over18: bool,

    /// Fetch every chapter page.
    #[arg(long)]
    pub all_pages: bool,

    /// Fetch a single chapter (1-based).
    #[arg(long, default_value_t = 0)]
    pub page: usize,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}
