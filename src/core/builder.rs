use crate::constants::{
    NONE_SOURCE, SELF_SOURCE, STRICT_DYNAMIC_SOURCE, UNSAFE_EVAL_SOURCE, UNSAFE_INLINE_SOURCE,
};
use crate::core::directive::Directive;
use crate::error::CspError;
use std::borrow::Cow;

/// Shared contract of every directive builder.
///
/// A builder owns exactly one [`Directive`] and only lets it grow through
/// [`DirectiveBuilder::try_add`]. [`DirectiveBuilder::build`] hands out a
/// snapshot; the builder stays usable afterwards and later additions only
/// show up in later snapshots.
pub trait DirectiveBuilder {
    fn directive(&self) -> &Directive;

    /// Appends a value, subject to the rules of the concrete builder.
    fn try_add(&mut self, value: Cow<'static, str>) -> Result<&mut Self, CspError>
    where
        Self: Sized;

    #[inline]
    fn name(&self) -> &str {
        self.directive().name()
    }

    #[inline]
    fn build(&self) -> Directive {
        self.directive().clone()
    }
}

/// Builder for directives holding a source list (`script-src`, `img-src`, ...).
///
/// Once `'none'` is part of the list any further value is rejected, since the
/// browser would ignore it. The reverse is not checked: `'none'` may still be
/// appended after other sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDirectiveBuilder {
    directive: Directive,
}

impl SourceDirectiveBuilder {
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            directive: Directive::new(name),
        }
    }

    pub fn add(&mut self, value: impl Into<Cow<'static, str>>) -> Result<&mut Self, CspError> {
        if self.directive.contains(NONE_SOURCE) {
            return Err(CspError::InvalidState(format!(
                "adding values to '{}' after disallowing all requests has no effect",
                self.directive.name()
            )));
        }

        self.directive.push(value.into());
        Ok(self)
    }

    /// Allows everything on the current origin (`'self'`).
    #[inline]
    pub fn allow_from_self(&mut self) -> Result<&mut Self, CspError> {
        self.add(SELF_SOURCE)
    }

    /// Allows inline scripts or styles (`'unsafe-inline'`).
    #[inline]
    pub fn allow_inline(&mut self) -> Result<&mut Self, CspError> {
        self.add(UNSAFE_INLINE_SOURCE)
    }

    /// Allows `eval()` and friends (`'unsafe-eval'`).
    #[inline]
    pub fn allow_eval(&mut self) -> Result<&mut Self, CspError> {
        self.add(UNSAFE_EVAL_SOURCE)
    }

    #[inline]
    pub fn dynamic(&mut self) -> Result<&mut Self, CspError> {
        self.add(STRICT_DYNAMIC_SOURCE)
    }

    /// Blocks every request for this directive (`'none'`).
    #[inline]
    pub fn disallow_all(&mut self) -> Result<&mut Self, CspError> {
        self.add(NONE_SOURCE)
    }

    /// Allows an origin such as `https://example.com/`.
    #[inline]
    pub fn allow_from_origin(
        &mut self,
        origin: impl Into<Cow<'static, str>>,
    ) -> Result<&mut Self, CspError> {
        self.add(origin)
    }

    /// Allows a single URL such as `https://example.com/js/app.js`.
    #[inline]
    pub fn allow_from_url(
        &mut self,
        url: impl Into<Cow<'static, str>>,
    ) -> Result<&mut Self, CspError> {
        self.add(url)
    }

    /// Allows a host regardless of scheme, e.g. `*.example.com`.
    #[inline]
    pub fn allow_host(&mut self, host: impl Into<Cow<'static, str>>) -> Result<&mut Self, CspError> {
        self.add(host)
    }

    /// Allows a scheme such as `data:`.
    #[inline]
    pub fn allow_from_scheme(
        &mut self,
        scheme: impl Into<Cow<'static, str>>,
    ) -> Result<&mut Self, CspError> {
        self.add(scheme)
    }
}

impl From<Directive> for SourceDirectiveBuilder {
    /// Resumes building an existing directive. The `'none'` rule applies to the
    /// values it already holds.
    #[inline]
    fn from(directive: Directive) -> Self {
        Self { directive }
    }
}

impl DirectiveBuilder for SourceDirectiveBuilder {
    #[inline]
    fn directive(&self) -> &Directive {
        &self.directive
    }

    #[inline]
    fn try_add(&mut self, value: Cow<'static, str>) -> Result<&mut Self, CspError> {
        self.add(value)
    }
}

/// Builder for directives holding media types, i.e. `plugin-types`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaTypeDirectiveBuilder {
    directive: Directive,
}

impl MediaTypeDirectiveBuilder {
    #[inline]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            directive: Directive::new(name),
        }
    }

    #[inline]
    pub fn add(&mut self, media_type: impl Into<Cow<'static, str>>) -> &mut Self {
        self.directive.push(media_type.into());
        self
    }
}

impl DirectiveBuilder for MediaTypeDirectiveBuilder {
    #[inline]
    fn directive(&self) -> &Directive {
        &self.directive
    }

    #[inline]
    fn try_add(&mut self, value: Cow<'static, str>) -> Result<&mut Self, CspError> {
        Ok(self.add(value))
    }
}
