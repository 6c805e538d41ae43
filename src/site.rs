use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ContentHosts;

pub const AGE_COOKIE_NAME: &str = "over18";
pub const AGE_COOKIE_VALUE: &str = "yes";
pub const AGE_COOKIE_MAX_AGE_SECS: u64 = 365 * 24 * 60 * 60;

/// Content site a work is published on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Site {
    #[default]
    Narou,
    Nocturne,
    MoonLight,
    MidNight,
}

impl Site {
    /// Every site except the general one is served from the age-gated host.
    pub fn is_restricted(self) -> bool {
        self != Site::Narou
    }
}

/// Index (or short story) URL of a work: `<base>/<ncode>/`.
pub fn content_url(hosts: &ContentHosts, ncode: &str, site: Site) -> crate::Result<Url> {
    let base = if site.is_restricted() {
        &hosts.restricted
    } else {
        &hosts.general
    };
    let url = Url::parse(base)?;
    append_segment(url, ncode)
}

/// Chapter URL: the index URL with the 1-based ordinal appended.
pub fn chapter_url(index: &Url, page: usize) -> crate::Result<Url> {
    append_segment(index.clone(), &page.to_string())
}

fn append_segment(mut url: Url, segment: &str) -> crate::Result<Url> {
    url.path_segments_mut()
        .map_err(|()| url::ParseError::RelativeUrlWithCannotBeABaseBase)?
        .pop_if_empty()
        .push(segment)
        .push("");
    Ok(url)
}

/// `Set-Cookie` style string for the age-verification cookie. Without a
/// domain the cookie is host-only.
pub fn age_cookie(domain: Option<&str>) -> String {
    let mut cookie = format!(
        "{AGE_COOKIE_NAME}={AGE_COOKIE_VALUE}; Path=/; Max-Age={AGE_COOKIE_MAX_AGE_SECS}"
    );
    if let Some(domain) = domain {
        cookie.push_str(&format!("; Domain=.{domain}"));
    }
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_site_uses_general_host() {
        let url = content_url(&ContentHosts::default(), "n1234ab", Site::Narou).unwrap();
        assert_eq!(url.as_str(), "https://ncode.syosetu.com/n1234ab/");
    }

    #[test]
    fn every_other_site_uses_restricted_host() {
        for site in [Site::Nocturne, Site::MoonLight, Site::MidNight] {
            let url = content_url(&ContentHosts::default(), "n5678cd", site).unwrap();
            assert_eq!(url.as_str(), "https://novel18.syosetu.com/n5678cd/");
        }
    }

    #[test]
    fn chapter_url_appends_ordinal() {
        let index = content_url(&ContentHosts::default(), "n1234ab", Site::Narou).unwrap();
        let url = chapter_url(&index, 12).unwrap();
        assert_eq!(url.as_str(), "https://ncode.syosetu.com/n1234ab/12/");
    }

    #[test]
    fn base_with_path_prefix_is_kept() {
        let hosts = ContentHosts {
            general: "http://127.0.0.1:8080/mirror/".to_owned(),
            ..ContentHosts::default()
        };
        let url = content_url(&hosts, "n1234ab", Site::Narou).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8080/mirror/n1234ab/");
    }

    #[test]
    fn malformed_base_is_an_error() {
        let hosts = ContentHosts {
            general: "::not a url".to_owned(),
            ..ContentHosts::default()
        };
        assert!(matches!(
            content_url(&hosts, "n1234ab", Site::Narou),
            Err(crate::Error::Url(_))
        ));
    }

    #[test]
    fn age_cookie_scoping() {
        assert_eq!(
            age_cookie(Some("syosetu.com")),
            "over18=yes; Path=/; Max-Age=31536000; Domain=.syosetu.com"
        );
        assert_eq!(age_cookie(None), "over18=yes; Path=/; Max-Age=31536000");
    }
}
