use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Route {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
}

impl Route {
    #[allow(dead_code)]
    pub fn html(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "text/html; charset=utf-8",
            body: body.into(),
        }
    }

    #[allow(dead_code)]
    pub fn json(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            content_type: "application/json",
            body: body.into(),
        }
    }

    #[allow(dead_code)]
    pub fn status(status: u16) -> Self {
        Self {
            status,
            content_type: "text/plain",
            body: format!("stub status {status}"),
        }
    }
}

/// What the stub saw for one request.
#[derive(Debug, Clone)]
pub struct SeenRequest {
    /// Path plus query, exactly as received.
    pub url: String,
    pub cookie: Option<String>,
    pub user_agent: Option<String>,
}

/// Serves fixed bodies keyed by path (query ignored); anything else is a 404.
pub struct SiteStub {
    pub base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<thread::JoinHandle<()>>,
}

impl SiteStub {
    pub fn spawn(routes: Vec<(&str, Route)>) -> Self {
        let routes: HashMap<String, Route> = routes
            .into_iter()
            .map(|(path, route)| (path.to_owned(), route))
            .collect();

        let server = tiny_http::Server::http("127.0.0.1:0").expect("start site stub server");
        let addr = server.server_addr();
        let base_url = format!("http://{addr}");

        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_by_server = Arc::clone(&seen);
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>();

        let handle = thread::spawn(move || {
            loop {
                if shutdown_rx.try_recv().is_ok() {
                    break;
                }

                let request = match server.recv_timeout(Duration::from_millis(50)) {
                    Ok(Some(req)) => req,
                    Ok(None) => continue,
                    Err(_) => break,
                };

                let url = request.url().to_string();
                let header = |name: &'static str| {
                    request
                        .headers()
                        .iter()
                        .find(|h| h.field.equiv(name))
                        .map(|h| h.value.as_str().to_owned())
                };
                seen_by_server
                    .lock()
                    .expect("lock seen requests")
                    .push(SeenRequest {
                        url: url.clone(),
                        cookie: header("Cookie"),
                        user_agent: header("User-Agent"),
                    });

                let path = url.split('?').next().unwrap_or(&url);
                let response = match routes.get(path) {
                    Some(route) => {
                        let content_type = tiny_http::Header::from_bytes(
                            &b"Content-Type"[..],
                            route.content_type.as_bytes(),
                        )
                        .expect("build header");
                        tiny_http::Response::from_string(route.body.clone())
                            .with_status_code(route.status)
                            .with_header(content_type)
                    }
                    None => tiny_http::Response::from_string("not found").with_status_code(404),
                };
                let _ = request.respond(response);
            }
        });

        Self {
            base_url,
            seen,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().expect("lock seen requests").clone()
    }

    #[allow(dead_code)]
    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.url).collect()
    }
}

impl Drop for SiteStub {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Series index page with one row per `(subtitle, date text)`.
#[allow(dead_code)]
pub fn index_page(title: &str, rows: &[(&str, &str)]) -> String {
    let rows = rows
        .iter()
        .enumerate()
        .map(|(i, (subtitle, date))| {
            format!(
                r#"<dl class="novel_sublist2"><dd class="subtitle"><a href="{}/">{subtitle}</a></dd><dt class="long_update">{date}</dt></dl>"#,
                i + 1
            )
        })
        .collect::<String>();
    format!(
        r#"<html><head><title>{title}</title></head><body>
<div class="novel_writername">作者：stub</div>
<div id="novel_ex">synopsis of {title}</div>
<div class="index_box">{rows}</div>
</body></html>"#
    )
}

/// Chapter page whose body has one paragraph per line.
#[allow(dead_code)]
pub fn chapter_page(subtitle: &str, lines: &[&str]) -> String {
    let body = lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!(r#"<p id="L{}">{line}</p>"#, i + 1))
        .collect::<String>();
    format!(
        r#"<html><head><title>chapter</title></head><body>
<div id="novel_color">
<p class="novel_subtitle">{subtitle}</p>
<div id="novel_honbun">{body}</div>
</div>
</body></html>"#
    )
}
