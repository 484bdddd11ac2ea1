//! Resource paths relative to the API root

use std::fmt;

/// Relative resource path made of individually escaped segments
///
/// Each segment is percent-encoded on its own when the request URL is built,
/// so a vhost named `/` becomes `%2F` rather than an extra path separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePath {
    segments: Vec<String>,
}

impl ResourcePath {
    /// Start a path at a collection, e.g. `queues`
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            segments: vec![collection.into()],
        }
    }

    /// Append one segment
    pub fn segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Raw (unescaped) segments
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut url = url::Url::parse("http://path.invalid").map_err(|_| fmt::Error)?;
        url.path_segments_mut()
            .map_err(|_| fmt::Error)?
            .clear()
            .extend(&self.segments);
        f.write_str(url.path().trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_segments() {
        let path = ResourcePath::new("queues").segment("prod").segment("orders");
        assert_eq!(path.segments(), ["queues", "prod", "orders"]);
        assert_eq!(path.to_string(), "queues/prod/orders");
    }

    #[test]
    fn test_default_vhost_is_escaped() {
        let path = ResourcePath::new("queues").segment("/");
        assert_eq!(path.to_string(), "queues/%2F");
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        let path = ResourcePath::new("queues")
            .segment("a/b")
            .segment("my queue%");
        assert_eq!(path.to_string(), "queues/a%2Fb/my%20queue%25");
    }
}
