//! Template-based link resolution, for use with [`RackSet::rewrite_links`].
//!
//! [`RackSet::rewrite_links`]: crate::types::RackSet::rewrite_links

use url::{form_urlencoded, Url};

use crate::error::RackError;

/// Placeholder replaced by the encoded link target
pub const PLACEHOLDER: &str = "{}";

/// Maps internal link targets into a URL template.
///
/// `[[Note]]` targets and targets without a URL scheme are treated as internal;
/// they are form-encoded into the `{}` slot. Absolute URLs pass through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTemplate {
    template: String,
}

impl LinkTemplate {
    pub fn new(template: impl Into<String>) -> Result<Self, RackError> {
        let template = template.into();
        if !template.contains(PLACEHOLDER) {
            return Err(RackError::Config(format!(
                "link template must contain '{}': {}",
                PLACEHOLDER, template
            )));
        }
        Ok(Self { template })
    }

    pub fn resolve(&self, raw: &str) -> String {
        let bracketed = raw
            .strip_prefix("[[")
            .and_then(|s| s.strip_suffix("]]"));

        let target = match bracketed {
            Some(inner) => inner,
            None if Url::parse(raw).is_ok() => return raw.to_string(),
            None => raw,
        };

        let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
        self.template.replace(PLACEHOLDER, &encoded)
    }
}
