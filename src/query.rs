use http::uri::{PathAndQuery, Uri};
use http::Request;

/// A batching view over a request's URL query parameters.
///
/// Reads and removals operate on a lazily parsed, cached form of the query
/// string; the request URI itself is rewritten at most once, on
/// [`commit`](Self::commit). This keeps multiple extraction steps (the
/// authorization parameter, then the username/password pair) from
/// re-encoding the query repeatedly or leaving the URI in a partially
/// scrubbed state between steps.
///
/// Call `commit` exactly once per request, after all reads and deletes.
///
/// # Examples
///
/// ```
/// use auth_relay::QueryScrubber;
/// use http::Request;
///
/// let mut request = Request::builder()
///     .uri("http://localhost/data?username=alice&page=2")
///     .body(())
///     .unwrap();
///
/// let mut query = QueryScrubber::new(&mut request);
/// assert_eq!(query.get("username"), "alice");
/// query.delete("username");
/// query.commit();
///
/// assert_eq!(request.uri().to_string(), "http://localhost/data?page=2");
/// ```
pub struct QueryScrubber<'a, B> {
    request: &'a mut Request<B>,
    pairs: Option<Vec<(String, String)>>,
    dirty: bool,
}

impl<'a, B> QueryScrubber<'a, B> {
    /// Wraps a request without touching its query string yet.
    pub fn new(request: &'a mut Request<B>) -> Self {
        Self {
            request,
            pairs: None,
            dirty: false,
        }
    }

    /// Returns the first (percent-decoded) value for `key`, or the empty
    /// string when the parameter is absent.
    pub fn get(&mut self, key: &str) -> String {
        self.pairs()
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
            .unwrap_or_default()
    }

    /// Returns `true` when the parameter is present, even with an empty
    /// value.
    pub fn has(&mut self, key: &str) -> bool {
        self.pairs().iter().any(|(k, _)| k == key)
    }

    /// Removes every pair with this key from the cached form.
    ///
    /// The request URI is not rewritten until [`commit`](Self::commit).
    pub fn delete(&mut self, key: &str) {
        self.pairs().retain(|(k, _)| k != key);
        self.dirty = true;
    }

    /// Rewrites the request URI from the cached form if anything was
    /// deleted; a no-op otherwise.
    ///
    /// After this returns, the serialized URI contains none of the deleted
    /// keys, and downstream consumers observe a single consistent rewrite.
    pub fn commit(&mut self) {
        if !self.dirty {
            return;
        }

        let pairs = self.pairs.take().unwrap_or_default();
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &pairs {
            serializer.append_pair(key, value);
        }
        let encoded = serializer.finish();

        let path = self.request.uri().path().to_string();
        let path_and_query = if encoded.is_empty() {
            path
        } else {
            format!("{path}?{encoded}")
        };

        // Both constructions are infallible in practice: the path comes from
        // an already-valid URI and the query is freshly percent-encoded.
        if let Ok(path_and_query) = PathAndQuery::try_from(path_and_query.as_str()) {
            let mut parts = self.request.uri().clone().into_parts();
            parts.path_and_query = Some(path_and_query);
            if let Ok(uri) = Uri::from_parts(parts) {
                *self.request.uri_mut() = uri;
            }
        }

        self.dirty = false;
    }

    fn pairs(&mut self) -> &mut Vec<(String, String)> {
        let request = &*self.request;
        self.pairs.get_or_insert_with(|| {
            form_urlencoded::parse(request.uri().query().unwrap_or("").as_bytes())
                .into_owned()
                .collect()
        })
    }
}
