use crate::constants::{
    self, DEFAULT_BUFFER_CAPACITY, HEADER_CSP, HEADER_CSP_REPORT_ONLY, SEMICOLON_SPACE,
};
use crate::core::builder::{DirectiveBuilder, MediaTypeDirectiveBuilder, SourceDirectiveBuilder};
use crate::core::directive::Directive;
use crate::error::CspError;
use crate::utils::BufferWriter;
use actix_web::http::header::{HeaderName, HeaderValue};
use bytes::BytesMut;
use std::borrow::Cow;

/// A finished policy, ready to be written as a header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CspPolicy {
    directives: Vec<Directive>,
    report_only: bool,
}

impl CspPolicy {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_directive(&mut self, directive: Directive) -> &mut Self {
        self.directives.push(directive);
        self
    }

    #[inline]
    pub fn set_report_only(&mut self, report_only: bool) -> &mut Self {
        self.report_only = report_only;
        self
    }

    #[inline]
    pub fn is_report_only(&self) -> bool {
        self.report_only
    }

    #[inline]
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.directives.iter()
    }

    /// First directive with the given name. Browsers also honour only the
    /// first occurrence.
    #[inline]
    pub fn get_directive(&self, name: &str) -> Option<&Directive> {
        self.directives.iter().find(|d| d.name() == name)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    #[inline]
    pub fn header_name(&self) -> HeaderName {
        if self.report_only {
            HeaderName::from_static(HEADER_CSP_REPORT_ONLY)
        } else {
            HeaderName::from_static(HEADER_CSP)
        }
    }

    /// The directives joined with `"; "`.
    pub fn to_header_bytes(&self) -> BytesMut {
        let capacity = self
            .directives
            .iter()
            .map(|d| d.estimated_size() + SEMICOLON_SPACE.len())
            .sum::<usize>()
            .max(DEFAULT_BUFFER_CAPACITY);
        let mut buffer = BytesMut::with_capacity(capacity);

        let mut first = true;
        for directive in &self.directives {
            if !first {
                buffer.extend_from_slice(SEMICOLON_SPACE);
            }
            directive.write_to_buffer(&mut buffer);
            first = false;
        }

        buffer
    }

    pub fn header_value(&self) -> Result<HeaderValue, CspError> {
        HeaderValue::from_maybe_shared(self.to_header_bytes().freeze()).map_err(|e| {
            CspError::HeaderError(format!("policy is not a valid header value: {}", e))
        })
    }
}

impl std::fmt::Display for CspPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for directive in &self.directives {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}", directive)?;
            first = false;
        }
        Ok(())
    }
}

macro_rules! policy_slots {
    (@count $($field:ident)+) => { 0usize $(+ policy_slots!(@one $field))+ };
    (@one $field:ident) => { 1usize };
    ($( $(#[$doc:meta])* $field:ident: $builder:ident = $directive_name:expr ),+ $(,)?) => {
        /// Configures a Content-Security-Policy.
        ///
        /// Every well-known directive has a fixed slot reachable through its
        /// accessor. Anything else goes in as a custom directive through
        /// [`CspPolicyBuilder::add`] or [`CspPolicyBuilder::add_directive`].
        #[derive(Debug, Clone)]
        pub struct CspPolicyBuilder {
            $( $field: $builder, )+
            custom: Vec<Directive>,
            report_only: bool,
        }

        impl Default for CspPolicyBuilder {
            fn default() -> Self {
                Self {
                    $( $field: $builder::new($directive_name), )+
                    custom: Vec::new(),
                    report_only: false,
                }
            }
        }

        impl CspPolicyBuilder {
            $(
                $(#[$doc])*
                #[inline]
                pub fn $field(&mut self) -> &mut $builder {
                    &mut self.$field
                }
            )+

            /// The predefined slots, always in declaration order.
            pub fn slots(&self) -> impl Iterator<Item = &dyn DirectiveBuilder> {
                let slots: [&dyn DirectiveBuilder; policy_slots!(@count $($field)+)] =
                    [$( &self.$field, )+];
                slots.into_iter()
            }

            /// Appends to the predefined slot called `name`, following that
            /// slot's rules. Returns `false` when no slot has that name.
            pub fn add_to_slot(
                &mut self,
                name: &str,
                value: impl Into<Cow<'static, str>>,
            ) -> Result<bool, CspError> {
                $(
                    if self.$field.name() == name {
                        self.$field.try_add(value.into())?;
                        return Ok(true);
                    }
                )+
                Ok(false)
            }
        }
    };
}

policy_slots! {
    /// Restricts the URLs usable in a document's `<base>` element.
    base_uri: SourceDirectiveBuilder = constants::BASE_URI,
    /// Restricts what may be loaded into frames or run as workers.
    child_src: SourceDirectiveBuilder = constants::CHILD_SRC,
    /// Restricts URLs loaded through script interfaces: `fetch()`, XHR,
    /// `<a ping>` and WebSocket connections.
    connect_src: SourceDirectiveBuilder = constants::CONNECT_SRC,
    /// Fallback for every fetch directive that is not configured.
    default_src: SourceDirectiveBuilder = constants::DEFAULT_SRC,
    font_src: SourceDirectiveBuilder = constants::FONT_SRC,
    /// Restricts the URLs usable as form submission targets.
    form_action: SourceDirectiveBuilder = constants::FORM_ACTION,
    /// Restricts who may embed this application.
    frame_ancestors: SourceDirectiveBuilder = constants::FRAME_ANCESTORS,
    frame_src: SourceDirectiveBuilder = constants::FRAME_SRC,
    img_src: SourceDirectiveBuilder = constants::IMG_SRC,
    manifest_src: SourceDirectiveBuilder = constants::MANIFEST_SRC,
    /// Restricts video, audio and associated resources.
    media_src: SourceDirectiveBuilder = constants::MEDIA_SRC,
    /// Restricts plugin content.
    object_src: SourceDirectiveBuilder = constants::OBJECT_SRC,
    /// Restricts the media types of embeddable plugins.
    plugin_types: MediaTypeDirectiveBuilder = constants::PLUGIN_TYPES,
    /// Restricts prefetched and prerendered resources.
    prefetch_src: SourceDirectiveBuilder = constants::PREFETCH_SRC,
    script_src: SourceDirectiveBuilder = constants::SCRIPT_SRC,
    style_src: SourceDirectiveBuilder = constants::STYLE_SRC,
    /// Restricts workers, shared workers and service workers.
    worker_src: SourceDirectiveBuilder = constants::WORKER_SRC,
}

impl CspPolicyBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a custom directive, configured once by `configure`.
    ///
    /// Fails with [`CspError::InvalidDirectiveName`] for a blank name. Nothing
    /// is stored when `configure` fails.
    pub fn add<F>(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        configure: F,
    ) -> Result<&mut Self, CspError>
    where
        F: FnOnce(&mut SourceDirectiveBuilder) -> Result<(), CspError>,
    {
        let mut builder = SourceDirectiveBuilder::from(Directive::try_new(name)?);
        configure(&mut builder)?;
        Ok(self.add_directive(builder.build()))
    }

    /// Adds an already built directive as-is. Names are not deduplicated
    /// against the predefined slots.
    pub fn add_directive(&mut self, directive: Directive) -> &mut Self {
        self.custom.push(directive);
        self
    }

    #[inline]
    pub fn report_only(&mut self, enabled: bool) -> &mut Self {
        self.report_only = enabled;
        self
    }

    #[inline]
    pub fn is_report_only(&self) -> bool {
        self.report_only
    }

    /// All predefined directives, empty ones included, followed by the
    /// custom directives in insertion order.
    pub fn build(&self) -> Vec<Directive> {
        self.slots()
            .map(|slot| slot.build())
            .chain(self.custom.iter().cloned())
            .collect()
    }

    /// The policy to send. Predefined slots that were never given a value are
    /// left out; custom directives are always kept so value-less flags like
    /// `upgrade-insecure-requests` survive.
    pub fn policy(&self) -> CspPolicy {
        let mut policy = CspPolicy::new();
        policy.set_report_only(self.report_only);

        for slot in self.slots().filter(|slot| !slot.directive().is_empty()) {
            policy.add_directive(slot.build());
        }
        for directive in &self.custom {
            policy.add_directive(directive.clone());
        }

        log::debug!(
            "built {} policy with {} directives",
            policy.header_name().as_str(),
            policy.directives.len()
        );
        policy
    }
}
