//! Client for the remote favorites store.

use crate::error::FavoritesError;
use crate::http;
use serde::Serialize;
use std::collections::BTreeSet;
use ureq::Agent;

/// JSON body for add/remove operations.
#[derive(Serialize)]
struct NamePayload<'a> {
    name: &'a str,
}

/// Handle to one user's favorites collection on the remote store.
///
/// The user identity is an explicit constructor parameter rather than
/// ambient state, so every operation is unambiguously scoped. Each operation
/// is a single round trip with no retry or batching; the agent-level timeout
/// bounds how long a hung server can stall a caller.
#[derive(Debug, Clone)]
pub struct FavoritesClient {
    agent: Agent,
    base: url::Url,
    user: String,
}

impl FavoritesClient {
    /// Create a client for `user` against the store at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`FavoritesError::InvalidUrl`] when `base_url` is not an
    /// http/https URL with a host.
    pub fn new(base_url: &str, user: impl Into<String>) -> Result<Self, FavoritesError> {
        let base = http::validate_base_url(base_url)?;
        Ok(Self {
            agent: http::agent(),
            base,
            user: user.into(),
        })
    }

    /// The user this client is scoped to.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Full URL of this user's favorites collection.
    fn endpoint(&self) -> Result<url::Url, FavoritesError> {
        self.base
            .join(&format!("favorites/{}", self.user))
            .map_err(|e| FavoritesError::InvalidUrl {
                url: self.base.to_string(),
                reason: e.to_string(),
            })
    }

    /// Fetch the names currently favorited by this user.
    ///
    /// Returns an empty set when the user has no favorites.
    pub fn list(&self) -> Result<BTreeSet<String>, FavoritesError> {
        let url = self.endpoint()?;
        log::debug!("GET {url}");
        let text = self
            .agent
            .get(url.as_str())
            .header("User-Agent", "glyphdeck")
            .header("Accept", "application/json")
            .call()?
            .into_body()
            .with_config()
            .limit(http::MAX_API_RESPONSE_SIZE)
            .read_to_string()?;

        parse_name_list(&text)
    }

    /// Add `name` to this user's favorites. Idempotent: adding a name that
    /// is already present has no additional effect on the store.
    pub fn add(&self, name: &str) -> Result<(), FavoritesError> {
        let url = self.endpoint()?;
        log::debug!("POST {url} name={name}");
        let body = serde_json::to_string(&NamePayload { name })?;
        let text = self
            .agent
            .post(url.as_str())
            .header("User-Agent", "glyphdeck")
            .header("Content-Type", "application/json")
            .send(body.as_str())?
            .into_body()
            .with_config()
            .limit(http::MAX_API_RESPONSE_SIZE)
            .read_to_string()?;

        // The status body carries nothing the client needs, but a non-JSON
        // reply means we are not talking to the favorites store.
        let _: serde_json::Value = serde_json::from_str(&text)?;
        Ok(())
    }

    /// Remove `name` from this user's favorites. Idempotent: removing an
    /// absent name has no effect on the store.
    pub fn remove(&self, name: &str) -> Result<(), FavoritesError> {
        let url = self.endpoint()?;
        log::debug!("DELETE {url} name={name}");
        let body = serde_json::to_string(&NamePayload { name })?;
        let text = self
            .agent
            .delete(url.as_str())
            .header("User-Agent", "glyphdeck")
            .header("Content-Type", "application/json")
            .force_send_body()
            .send(body.as_str())?
            .into_body()
            .with_config()
            .limit(http::MAX_API_RESPONSE_SIZE)
            .read_to_string()?;

        let _: serde_json::Value = serde_json::from_str(&text)?;
        Ok(())
    }
}

/// Parse a favorites list response: a JSON array of name strings.
fn parse_name_list(text: &str) -> Result<BTreeSet<String>, FavoritesError> {
    let names: Vec<String> = serde_json::from_str(text)?;
    Ok(names.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::JoinHandle;

    /// One request as seen by the stub store.
    #[derive(Debug)]
    struct SeenRequest {
        line: String,
        content_type: Option<String>,
        body: String,
    }

    fn read_request(stream: &TcpStream) -> SeenRequest {
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end().to_string();

        let mut content_length = 0usize;
        let mut content_type = None;
        loop {
            let mut header = String::new();
            reader.read_line(&mut header).unwrap();
            let header = header.trim_end();
            if header.is_empty() {
                break;
            }
            if let Some((name, value)) = header.split_once(':') {
                match name.to_ascii_lowercase().as_str() {
                    "content-length" => content_length = value.trim().parse().unwrap(),
                    "content-type" => content_type = Some(value.trim().to_string()),
                    _ => {}
                }
            }
        }

        let mut body = vec![0u8; content_length];
        reader.read_exact(&mut body).unwrap();
        SeenRequest {
            line,
            content_type,
            body: String::from_utf8(body).unwrap(),
        }
    }

    fn respond(mut stream: &TcpStream, body: &str) {
        write!(
            stream,
            "HTTP/1.1 200 OK\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            body.len(),
            body
        )
        .unwrap();
    }

    /// In-memory favorites store speaking the wire format, serving exactly
    /// `request_count` connections before returning what it saw.
    fn favorites_stub(request_count: usize) -> (String, JoinHandle<Vec<SeenRequest>>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let handle = std::thread::spawn(move || {
            let mut store: BTreeSet<String> = BTreeSet::new();
            let mut seen = Vec::new();
            for _ in 0..request_count {
                let (stream, _) = listener.accept().unwrap();
                let request = read_request(&stream);

                let method = request.line.split(' ').next().unwrap().to_string();
                let reply = match method.as_str() {
                    "GET" => serde_json::to_string(&store).unwrap(),
                    "POST" => {
                        let payload: serde_json::Value =
                            serde_json::from_str(&request.body).unwrap();
                        store.insert(payload["name"].as_str().unwrap().to_string());
                        r#"{"status": "added"}"#.to_string()
                    }
                    "DELETE" => {
                        let payload: serde_json::Value =
                            serde_json::from_str(&request.body).unwrap();
                        store.remove(payload["name"].as_str().unwrap());
                        r#"{"status": "removed"}"#.to_string()
                    }
                    other => panic!("unexpected method: {other}"),
                };
                respond(&stream, &reply);
                seen.push(request);
            }
            seen
        });
        (base, handle)
    }

    #[test]
    fn test_add_sends_named_post_body() {
        let (base, handle) = favorites_stub(1);
        let client = FavoritesClient::new(&base, "guest").unwrap();
        client.add("wink").unwrap();

        let seen = handle.join().unwrap();
        assert_eq!(seen[0].line, "POST /favorites/guest HTTP/1.1");
        assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
        assert_eq!(seen[0].body, r#"{"name":"wink"}"#);
    }

    #[test]
    fn test_remove_sends_delete_with_body() {
        let (base, handle) = favorites_stub(1);
        let client = FavoritesClient::new(&base, "guest").unwrap();
        client.remove("wink").unwrap();

        let seen = handle.join().unwrap();
        assert_eq!(seen[0].line, "DELETE /favorites/guest HTTP/1.1");
        assert_eq!(seen[0].content_type.as_deref(), Some("application/json"));
        assert_eq!(seen[0].body, r#"{"name":"wink"}"#);
    }

    #[test]
    fn test_add_list_remove_round_trip() {
        let (base, handle) = favorites_stub(5);
        let client = FavoritesClient::new(&base, "guest").unwrap();

        assert!(client.list().unwrap().is_empty());

        client.add("wink").unwrap();
        let names = client.list().unwrap();
        assert!(names.contains("wink"));
        assert_eq!(names.len(), 1);

        client.remove("wink").unwrap();
        assert!(client.list().unwrap().is_empty());

        handle.join().unwrap();
    }

    #[test]
    fn test_endpoint_is_scoped_to_user() {
        let client = FavoritesClient::new("http://localhost:5050", "guest").unwrap();
        assert_eq!(
            client.endpoint().unwrap().as_str(),
            "http://localhost:5050/favorites/guest"
        );
    }

    #[test]
    fn test_endpoint_respects_base_path() {
        let client = FavoritesClient::new("https://example.com/api", "alex").unwrap();
        assert_eq!(
            client.endpoint().unwrap().as_str(),
            "https://example.com/api/favorites/alex"
        );
    }

    #[test]
    fn test_endpoint_encodes_user() {
        let client = FavoritesClient::new("http://localhost:5050", "two words").unwrap();
        assert_eq!(
            client.endpoint().unwrap().as_str(),
            "http://localhost:5050/favorites/two%20words"
        );
    }

    #[test]
    fn test_parse_name_list() {
        let names = parse_name_list(r#"["wink", "grinning face"]"#).unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains("wink"));
        assert!(names.contains("grinning face"));
    }

    #[test]
    fn test_parse_empty_list() {
        assert!(parse_name_list("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_duplicates_collapse() {
        // The store should never send duplicates, but membership is a set
        let names = parse_name_list(r#"["wink", "wink"]"#).unwrap();
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_parse_rejects_non_array() {
        let err = parse_name_list(r#"{"error": "nope"}"#).unwrap_err();
        assert!(matches!(err, FavoritesError::Parse(_)));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        assert!(FavoritesClient::new("ftp://example.com", "guest").is_err());
    }
}
