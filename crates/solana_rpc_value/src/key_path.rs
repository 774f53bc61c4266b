use std::fmt;

/// A single step from a structural value into one of its children.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyPathSegment {
    /// Position within an array.
    Index(usize),
    /// Key within an object.
    Key(String),
    /// Matches any [`KeyPathSegment::Index`] when a path is compared against
    /// a pattern.
    Wildcard,
}

impl From<usize> for KeyPathSegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl From<&str> for KeyPathSegment {
    fn from(value: &str) -> Self {
        Self::Key(value.to_owned())
    }
}

impl From<String> for KeyPathSegment {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

impl fmt::Display for KeyPathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
            Self::Wildcard => f.write_str("*"),
        }
    }
}

/// Path from the root of a structural value to one of its descendants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeyPath(Vec<KeyPathSegment>);

impl KeyPath {
    /// The path of the root itself.
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Parses a dot-separated pattern such as `value.*.account.lamports`.
    ///
    /// `*` becomes a wildcard, decimal segments become indices and all other
    /// segments become keys. The empty string denotes the root.
    pub fn pattern(pattern: &str) -> Self {
        if pattern.is_empty() {
            return Self::root();
        }

        pattern
            .split('.')
            .map(|segment| {
                if segment == "*" {
                    KeyPathSegment::Wildcard
                } else if let Ok(index) = segment.parse::<usize>() {
                    KeyPathSegment::Index(index)
                } else {
                    KeyPathSegment::from(segment)
                }
            })
            .collect()
    }

    /// Returns a new path that extends this one by `segment`.
    pub fn child(&self, segment: impl Into<KeyPathSegment>) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(segment.into());
        Self(segments)
    }

    /// The segments, from the root downwards.
    pub fn segments(&self) -> &[KeyPathSegment] {
        &self.0
    }

    /// The number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether this is the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether this path matches `pattern`.
    ///
    /// Both must have the same length. Every segment must be equal, except
    /// that a wildcard in the pattern matches any index.
    pub fn matches(&self, pattern: &KeyPath) -> bool {
        self.0.len() == pattern.0.len()
            && self
                .0
                .iter()
                .zip(&pattern.0)
                .all(|(segment, expected)| match (segment, expected) {
                    (KeyPathSegment::Index(_), KeyPathSegment::Wildcard) => true,
                    (segment, expected) => segment == expected,
                })
    }
}

impl FromIterator<KeyPathSegment> for KeyPath {
    fn from_iter<IteratorT: IntoIterator<Item = KeyPathSegment>>(iter: IteratorT) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<Vec<KeyPathSegment>> for KeyPath {
    fn from(value: Vec<KeyPathSegment>) -> Self {
        Self(value)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.0.iter().enumerate() {
            if position > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}
