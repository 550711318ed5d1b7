use crate::error::CspError;
use crate::utils::BufferWriter;
use bytes::BytesMut;
use smallvec::SmallVec;
use std::{borrow::Cow, fmt};

/// A single named clause of a Content-Security-Policy, e.g. `script-src 'self'`.
///
/// Values keep their insertion order and duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directive {
    name: Cow<'static, str>,
    values: SmallVec<[Cow<'static, str>; 4]>,
}

impl Directive {
    /// Creates a directive with no values.
    ///
    /// The name is not checked; use [`Directive::try_new`] for names that
    /// come from outside the program.
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            values: SmallVec::new(),
        }
    }

    pub fn try_new(name: impl Into<Cow<'static, str>>) -> Result<Self, CspError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CspError::InvalidDirectiveName(name.into_owned()));
        }
        Ok(Self::new(name))
    }

    /// Creates a directive from a name and an initial list of values.
    pub fn with_values<I, V>(name: impl Into<Cow<'static, str>>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Cow<'static, str>>,
    {
        let mut directive = Self::new(name);
        directive.values.extend(values.into_iter().map(Into::into));
        directive
    }

    #[inline]
    pub(crate) fn push(&mut self, value: Cow<'static, str>) {
        self.values.push(value);
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &str> {
        self.values.iter().map(|v| v.as_ref())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for value in &self.values {
            f.write_str(" ")?;
            f.write_str(value)?;
        }
        Ok(())
    }
}

impl BufferWriter for Directive {
    fn write_to_buffer(&self, buffer: &mut BytesMut) {
        buffer.extend_from_slice(self.name.as_bytes());
        for value in &self.values {
            buffer.extend_from_slice(b" ");
            buffer.extend_from_slice(value.as_bytes());
        }
    }

    #[inline]
    fn estimated_size(&self) -> usize {
        self.name.len() + self.values.iter().map(|v| v.len() + 1).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_without_values_renders_name_only() {
        let directive = Directive::new("upgrade-insecure-requests");
        assert!(directive.is_empty());
        assert_eq!(directive.to_string(), "upgrade-insecure-requests");
    }

    #[test]
    fn test_directive_renders_values_in_order() {
        let directive = Directive::with_values("img-src", ["'self'", "data:", "'self'"]);
        assert_eq!(directive.len(), 3);
        assert_eq!(directive.to_string(), "img-src 'self' data: 'self'");
    }

    #[test]
    fn test_directive_buffer_matches_display() {
        let directive = Directive::with_values("script-src", ["'self'", "https://cdn.example.com"]);
        let mut buffer = BytesMut::new();
        directive.write_to_buffer(&mut buffer);

        assert_eq!(&buffer[..], directive.to_string().as_bytes());
        assert_eq!(directive.estimated_size(), buffer.len());
    }

    #[test]
    fn test_directive_try_new_rejects_blank_name() {
        assert!(matches!(
            Directive::try_new("  "),
            Err(CspError::InvalidDirectiveName(_))
        ));
        assert_eq!(Directive::try_new("x-custom").unwrap().name(), "x-custom");
    }
}
