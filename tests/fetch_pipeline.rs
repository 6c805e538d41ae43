mod site_stub;

use narrow::config::{ClientConfig, ContentHosts};
use narrow::formats::{FetchStatus, NovelType};
use narrow::site::Site;
use narrow::{Client, FetchRequest};
use site_stub::{Route, SiteStub, chapter_page, index_page};

fn client_for(stub: &SiteStub) -> Client {
    let config = ClientConfig {
        content: ContentHosts {
            general: format!("{}/", stub.base_url),
            restricted: format!("{}/r18/", stub.base_url),
            cookie_domain: None,
        },
        ..ClientConfig::default()
    };
    Client::with_config(config).expect("build client")
}

fn three_chapter_routes() -> Vec<(&'static str, Route)> {
    vec![
        (
            "/n1234ab/",
            Route::html(index_page(
                "連載",
                &[
                    ("第一話", "2019/08/16 08:35 <span title=\"2019/08/20 10:00 改稿\">（改）</span>"),
                    ("第二話", "2019/08/17 09:00"),
                    ("第三話", "2019/08/18 10:30"),
                ],
            )),
        ),
        ("/n1234ab/1/", Route::html(chapter_page("第一話", &["one-a", "one-b"]))),
        ("/n1234ab/2/", Route::html(chapter_page("", &["two"]))),
        ("/n1234ab/3/", Route::html(chapter_page("第三話", &["three"]))),
    ]
}

#[test]
fn all_pages_fills_every_chapter_and_keeps_index_dates() {
    let stub = SiteStub::spawn(three_chapter_routes());
    let client = client_for(&stub);

    let request = FetchRequest {
        all_pages: true,
        page: 2,
        ..FetchRequest::new("n1234ab")
    };
    let result = client.fetch(&request).expect("fetch");

    assert_eq!(result.ncode, "n1234ab");
    assert_eq!(result.site, Site::Narou);
    assert_eq!(result.title, "連載");
    assert_eq!(result.novel_type, NovelType::Serial);
    assert_eq!(result.synopsis.as_deref(), Some("synopsis of 連載"));
    assert_eq!(result.status, FetchStatus::Complete);
    assert_eq!(result.chapter_count(), 3);

    let first = &result.chapters[0];
    assert_eq!(first.lines.len(), 2);
    assert_eq!(first.lines[0].raw, r#"<p id="L1">one-a</p>"#);
    assert_eq!(
        first.published_at.map(|t| t.to_rfc3339()).as_deref(),
        Some("2019-08-16T08:35:00+09:00")
    );
    assert_eq!(
        first.revised_at.map(|t| t.to_rfc3339()).as_deref(),
        Some("2019-08-20T10:00:00+09:00")
    );

    // Empty subtitle on the chapter page keeps the index one.
    assert_eq!(result.chapters[1].subtitle, "第二話");
    assert!(result.chapters.iter().all(|c| c.has_content()));

    assert_eq!(
        stub.paths(),
        vec!["/n1234ab/", "/n1234ab/1/", "/n1234ab/2/", "/n1234ab/3/"]
    );
}

#[test]
fn single_page_fetches_only_that_chapter() {
    let stub = SiteStub::spawn(three_chapter_routes());
    let client = client_for(&stub);

    let request = FetchRequest {
        page: 2,
        ..FetchRequest::new("n1234ab")
    };
    let result = client.fetch(&request).expect("fetch");

    assert_eq!(result.status, FetchStatus::Complete);
    assert!(!result.chapters[0].has_content());
    assert!(result.chapters[1].has_content());
    assert!(!result.chapters[2].has_content());
    assert_eq!(
        result.chapters[1]
            .published_at
            .map(|t| t.to_rfc3339())
            .as_deref(),
        Some("2019-08-17T09:00:00+09:00")
    );
    assert_eq!(stub.paths(), vec!["/n1234ab/", "/n1234ab/2/"]);
}

#[test]
fn page_beyond_chapter_count_fetches_nothing_more() {
    let stub = SiteStub::spawn(three_chapter_routes());
    let client = client_for(&stub);

    let request = FetchRequest {
        page: 4,
        ..FetchRequest::new("n1234ab")
    };
    let result = client.fetch(&request).expect("fetch");

    assert_eq!(result.status, FetchStatus::IndexOnly);
    assert_eq!(result.chapter_count(), 3);
    assert!(result.chapters.iter().all(|c| !c.has_content()));
    assert_eq!(stub.paths(), vec!["/n1234ab/"]);
}

#[test]
fn index_only_without_page_options() {
    let stub = SiteStub::spawn(three_chapter_routes());
    let client = client_for(&stub);

    let result = client.fetch(&FetchRequest::new("n1234ab")).expect("fetch");

    assert_eq!(result.status, FetchStatus::IndexOnly);
    assert_eq!(stub.paths(), vec!["/n1234ab/"]);
}

#[test]
fn failed_chapter_stops_loop_and_keeps_partial_result() {
    let mut routes = three_chapter_routes();
    routes.retain(|(path, _)| *path != "/n1234ab/2/");
    let stub = SiteStub::spawn(routes);
    let client = client_for(&stub);

    let request = FetchRequest {
        all_pages: true,
        ..FetchRequest::new("n1234ab")
    };
    let result = client.fetch(&request).expect("partial fetch is not an error");

    let FetchStatus::Partial {
        failed_page,
        reason,
    } = &result.status
    else {
        panic!("expected partial status, got {:?}", result.status);
    };
    assert_eq!(*failed_page, 2);
    assert!(reason.contains("404"), "reason: {reason}");

    assert_eq!(result.chapter_count(), 3);
    assert!(result.chapters[0].has_content());
    assert!(!result.chapters[1].has_content());
    assert!(!result.chapters[2].has_content());
    assert_eq!(result.chapters[2].subtitle, "第三話");
    assert_eq!(
        stub.paths(),
        vec!["/n1234ab/", "/n1234ab/1/", "/n1234ab/2/"]
    );
}

#[test]
fn short_story_is_one_chapter_from_one_request() {
    let short = r#"<html><head><title>短編</title></head><body>
<div class="novel_writername">作者：short</div>
<div id="novel_color">
<p class="novel_subtitle">短編</p>
<div id="novel_honbun"><p id="L1">body</p></div>
<div id="novel_a"><p id="La1">after</p></div>
</div></body></html>"#;
    let stub = SiteStub::spawn(vec![("/n0001aa/", Route::html(short))]);
    let client = client_for(&stub);

    let request = FetchRequest {
        all_pages: true,
        ..FetchRequest::new("n0001aa")
    };
    let result = client.fetch(&request).expect("fetch");

    assert_eq!(result.novel_type, NovelType::Short);
    assert_eq!(result.status, FetchStatus::Complete);
    assert_eq!(result.chapter_count(), 1);
    assert_eq!(result.chapters[0].lines.len(), 1);
    assert_eq!(result.chapters[0].afterword.len(), 1);
    assert_eq!(stub.paths(), vec!["/n0001aa/"]);
}

#[test]
fn restricted_site_sends_age_cookie_only_when_allowed() {
    let short = r#"<html><head><title>R</title></head><body><div id="novel_honbun"><p>x</p></div></body></html>"#;
    let stub = SiteStub::spawn(vec![("/r18/n0002bb/", Route::html(short))]);
    let client = client_for(&stub);

    let denied = FetchRequest {
        site: Site::Nocturne,
        ..FetchRequest::new("n0002bb")
    };
    client.fetch(&denied).expect("fetch without cookie");

    let allowed = FetchRequest {
        allow_restricted: true,
        ..denied.clone()
    };
    let result = client.fetch(&allowed).expect("fetch with cookie");
    assert_eq!(result.site, Site::Nocturne);

    let requests = stub.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].url, "/r18/n0002bb/");
    assert_eq!(requests[0].cookie, None);
    assert!(
        requests[1]
            .cookie
            .as_deref()
            .is_some_and(|c| c.contains("over18=yes")),
        "cookie: {:?}",
        requests[1].cookie
    );
    assert!(
        requests[1]
            .user_agent
            .as_deref()
            .is_some_and(|ua| ua.starts_with("narrow/"))
    );
}

#[test]
fn general_site_never_gets_age_cookie() {
    let stub = SiteStub::spawn(three_chapter_routes());
    let client = client_for(&stub);

    let request = FetchRequest {
        allow_restricted: true,
        ..FetchRequest::new("n1234ab")
    };
    client.fetch(&request).expect("fetch");
    assert_eq!(stub.requests()[0].cookie, None);
}

#[test]
fn failed_index_request_is_a_transport_error() {
    let stub = SiteStub::spawn(vec![("/n1234ab/", Route::status(503))]);
    let client = client_for(&stub);

    let err = client
        .fetch(&FetchRequest::new("n1234ab"))
        .expect_err("index failure must propagate");
    assert!(err.is_transport());
    assert!(matches!(err, narrow::Error::Status { .. }));
}
