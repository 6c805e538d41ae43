use std::io::Write as _;

use anyhow::Context as _;
use serde::Serialize;

use crate::cli::{ConnectionArgs, FetchArgs, SearchArgs};
use crate::client::Client;
use crate::config::ClientConfig;
use crate::fetch::FetchRequest;
use crate::params::SearchParams;
use crate::r18::R18SearchParams;

pub fn search(args: SearchArgs) -> anyhow::Result<()> {
    let client = build_client(&args.connection)?;

    let mut params = SearchParams::new();
    if let Some(limit) = args.limit {
        params.set_limit(limit);
    }
    if let Some(start) = args.start {
        params.set_start(start);
    }
    if let Some(order) = args.order {
        params.set_order(order.order());
    }
    params.add_words(args.words);
    params.add_not_words(args.not_words);
    params.add_ncodes(args.ncodes);

    let result = match args.site.noc_genre() {
        None => client.search(&params),
        Some(genre) => {
            let mut params = R18SearchParams::from_general(params);
            params.add_noc_genres([genre]);
            client.search(&params)
        }
    }
    .context("search request")?;

    print_json(&result)
}

pub fn fetch(args: FetchArgs) -> anyhow::Result<()> {
    let client = build_client(&args.connection)?;

    let request = FetchRequest {
        ncode: args.ncode,
        site: args.site.site(),
        allow_restricted: args.over18,
        all_pages: args.all_pages,
        page: args.page,
    };
    let result = client
        .fetch(&request)
        .with_context(|| format!("fetch {}", request.ncode))?;

    print_json(&result)
}

fn build_client(connection: &ConnectionArgs) -> anyhow::Result<Client> {
    let mut config = ClientConfig::from_env().context("load NARROW_* environment")?;
    connection.apply(&mut config);
    Client::with_config(config).context("build http client")
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value).context("write json")?;
    stdout.write_all(b"\n").context("write newline")?;
    Ok(())
}
