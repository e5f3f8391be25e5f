use crate::config::Config;
use crate::error::{DeliciousError, Result};
use crate::models::{Bookmark, BookmarkStore};
use log::{debug, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde_json::{Map, Value};
use tl::ParserOptions;

/// Export endpoint returning every bookmark of the account
pub const DEFAULT_ENDPOINT: &str = "https://api.delicious.com/v1/posts/all?&results=100000";

/// `post` attributes carried over into a bookmark record
const POST_ATTRIBUTES: &[&str] = &["description", "extended", "href", "tag"];

/// Client for the Delicious bookmark export API
#[derive(Debug, Clone)]
pub struct DeliciousApi {
    pub endpoint: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub user_agent: String,
}

impl DeliciousApi {
    pub fn from_config(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
            user_agent: config.user_agent.clone(),
        }
    }

    fn send(&self) -> Result<(StatusCode, String)> {
        let client = Client::builder().user_agent(self.user_agent.as_str()).build()?;
        let mut request = client.get(&self.endpoint);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_ref());
        }

        debug!("Fetching bookmarks from {}", self.endpoint);
        let resp = request.send()?;
        let status = resp.status();
        Ok((status, resp.text()?))
    }

    /// Download the raw export body.
    ///
    /// One request, no retries. An HTTP 401 is reported as `Credentials`.
    pub fn download(&self) -> Result<String> {
        let (status, body) = self.send()?;
        check_status(status)?;
        Ok(body)
    }

    /// Download and parse the export
    pub fn fetch(&self) -> Result<BookmarkStore> {
        let (status, body) = self.send()?;
        store_from_response(status, &body)
    }
}

fn check_status(status: StatusCode) -> Result<()> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(DeliciousError::Credentials);
    }
    if !status.is_success() {
        warn!("Bookmark export answered with {}", status);
    }
    Ok(())
}

/// Turn an export response into a store
pub fn store_from_response(status: StatusCode, body: &str) -> Result<BookmarkStore> {
    check_status(status)?;
    parse_export(body)
}

/// Parse an export body. A body without a `posts` element is `NoData`.
pub fn parse_export(body: &str) -> Result<BookmarkStore> {
    let dom = tl::parse(strip_declaration(body), ParserOptions::default())?;
    let parser = dom.parser();

    let has_posts = dom
        .query_selector("posts")
        .and_then(|mut iter| iter.next())
        .is_some();
    if !has_posts {
        return Err(DeliciousError::NoData);
    }

    let store: BookmarkStore = dom
        .query_selector("post")
        .into_iter()
        .flatten()
        .filter_map(|handle| handle.get(parser))
        .filter_map(|node| node.as_tag())
        .map(|tag| {
            let mut source = Map::new();
            for key in POST_ATTRIBUTES {
                if let Some(value) = tag.attributes().get(*key).flatten() {
                    source.insert(
                        key.to_string(),
                        Value::String(unescape(&value.as_utf8_str())),
                    );
                }
            }
            Bookmark::from_source(Some(&Value::Object(source)))
        })
        .collect();

    debug!("Parsed {} bookmarks from export", store.len());
    Ok(store)
}

/// Drop a leading `<?xml ...?>` declaration, which the HTML parser does not expect
fn strip_declaration(body: &str) -> &str {
    let trimmed = body.trim_start();
    if trimmed.starts_with("<?") {
        if let Some(end) = trimmed.find("?>") {
            return &trimmed[end + 2..];
        }
    }
    body
}

/// Decode named and numeric character references in an attribute value
fn unescape(value: &str) -> String {
    html_escape::decode_html_entities(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    const TWO_POSTS: &str = r#"<posts tag="" total="2014" user="2xyo"><post description="desc1" extended="ext1" hash="hs" href="url1" private="yes" shared="no" tag="tag1 tag2" time="2013-09-21T14:05:23Z"/> <post description="desc2" extended="ext2" hash="hs" href="url2" private="no" shared="yes" tag="tag1 tag2" time="2013-09-21T14:05:23Z"/></posts>"#;

    #[test]
    fn test_two_posts() {
        let store = store_from_response(StatusCode::OK, TWO_POSTS).unwrap();

        let expected: BookmarkStore = [
            json!({"description": "desc1", "extended": "ext1", "href": "url1", "tag": "tag1 tag2"}),
            json!({"description": "desc2", "extended": "ext2", "href": "url2", "tag": "tag1 tag2"}),
        ]
        .iter()
        .map(|s| Bookmark::from_source(Some(s)))
        .collect();

        assert_eq!(store, expected);
        for bookmark in &store {
            assert_eq!(bookmark.tags().len(), 2);
        }
    }

    #[test]
    fn test_unauthorized() {
        let result = store_from_response(StatusCode::UNAUTHORIZED, "");
        assert!(matches!(result, Err(DeliciousError::Credentials)));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Wrong Delicious credentials"
        );
    }

    #[test]
    fn test_unauthorized_wins_over_body() {
        let result = store_from_response(StatusCode::UNAUTHORIZED, TWO_POSTS);
        assert!(matches!(result, Err(DeliciousError::Credentials)));
    }

    #[rstest]
    #[case("")]
    #[case("<html><body>maintenance</body></html>")]
    #[case("<post href=\"orphan\"/>")]
    fn test_no_posts_is_no_data(#[case] body: &str) {
        let result = store_from_response(StatusCode::OK, body);
        assert!(matches!(result, Err(DeliciousError::NoData)));
        assert_eq!(result.unwrap_err().to_string(), "No bookmarks downloaded");
    }

    #[test]
    fn test_empty_posts_is_empty_store() {
        let store = parse_export(r#"<posts user="x"></posts>"#).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_post_missing_attributes() {
        let store = parse_export(r#"<posts><post href="only-url"/></posts>"#).unwrap();
        let bookmark = store.iter().next().unwrap();
        assert_eq!(bookmark.url(), Some("only-url"));
        assert_eq!(bookmark.title(), None);
        assert_eq!(bookmark.description(), None);
        assert!(bookmark.tags().is_empty());
    }

    #[test]
    fn test_duplicate_posts_collapse() {
        let body = r#"<posts><post description="d" href="u" tag="a"/><post description="d" href="u" tag="b"/></posts>"#;
        assert_eq!(parse_export(body).unwrap().len(), 1);
    }

    #[test]
    fn test_numeric_references_in_attributes() {
        let store =
            parse_export(r#"<posts><post description="Caf&#233; &#x27;n&#x27; Co" href="u"/></posts>"#)
                .unwrap();
        let bookmark = store.iter().next().unwrap();
        assert_eq!(bookmark.title(), Some("Café 'n' Co"));
    }

    #[test]
    fn test_xml_declaration() {
        let body = format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}", TWO_POSTS);
        assert_eq!(parse_export(&body).unwrap().len(), 2);
        assert_eq!(strip_declaration("<posts/>"), "<posts/>");
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("Tom &amp; Jerry", "Tom & Jerry")]
    #[case("&lt;b&gt;", "<b>")]
    #[case("&quot;q&quot; &#39;s&#39;", "\"q\" 's'")]
    #[case("&amp;lt;", "&lt;")]
    #[case("Caf&#233;", "Café")]
    #[case("&#x27;n&#x27;", "'n'")]
    #[case("&#65;&#x42;", "AB")]
    #[case("&eacute;t&eacute;", "été")]
    fn test_unescape(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(unescape(input), expected);
    }

    #[test]
    fn test_api_from_config() {
        let config = Config {
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
            ..Config::default()
        };
        let api = DeliciousApi::from_config(&config);
        assert_eq!(api.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(api.username.as_deref(), Some("user"));
    }
}
