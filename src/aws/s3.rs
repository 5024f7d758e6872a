//! # S3 Naming Rules
//!
//! Bucket name rules for general purpose buckets:
//! <https://docs.aws.amazon.com/AmazonS3/latest/userguide/bucketnamingrules.html>
//!
//! Object key rules and naming guidelines:
//! <https://docs.aws.amazon.com/AmazonS3/latest/userguide/object-keys.html>

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::errors::{NamingError, NamingResult};

/// Lowercase letters, digits, dots and hyphens, beginning and ending with a
/// letter or digit
static BUCKET_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9.-]*[a-z0-9]$").unwrap());

/// Dotted-quad form, e.g. 192.168.0.1
static IP_ADDRESS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+$").unwrap());

/// Digits, letters and the punctuation set safe in every S3 context
static SAFE_CHARACTERS_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9a-zA-Z!_.*'()-]+$").unwrap());

/// Bucket prefixes reserved by S3, checked in this order
const RESERVED_BUCKET_PREFIXES: [&str; 3] = ["xn--", "sthree-", "amzn-s3-demo-"];

/// Bucket suffixes reserved by S3, checked in this order
const RESERVED_BUCKET_SUFFIXES: [&str; 4] = ["-s3alias", "--ol-s3", ".mrap", "--x-s3"];

/// Options for [`validate_bucket_name`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BucketNameOptions {
    /// Buckets used with Transfer Acceleration cannot have dots in their
    /// names
    #[serde(default)]
    pub transfer_acceleration_enabled: bool,
}

/// Options for [`validate_object_key`]
///
/// Every flag defaults to enabled. A supplied record is taken as complete: a
/// field set to `false` stays `false`, nothing is merged back in. Partial
/// records use struct update syntax, which fills each remaining field from
/// [`Default`] independently:
///
/// ```
/// use cloudnaming::aws::s3::ObjectKeyOptions;
///
/// let opts = ObjectKeyOptions {
///     safe_characters_only: false,
///     ..Default::default()
/// };
/// assert!(opts.console_safe && opts.programmatic_safe);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectKeyOptions {
    /// Restrict keys to digits, letters and the set `! _ . * ' ( ) -`
    #[serde(default = "default_enabled")]
    pub safe_characters_only: bool,

    /// Reject keys the S3 console cannot handle: a trailing dot, or a `./`
    /// or `../` prefix
    #[serde(default = "default_enabled")]
    pub console_safe: bool,

    /// Reject keys that break SDK and CLI downloads: a `../` prefix
    #[serde(default = "default_enabled")]
    pub programmatic_safe: bool,
}

fn default_enabled() -> bool {
    true
}

impl Default for ObjectKeyOptions {
    fn default() -> Self {
        Self {
            safe_characters_only: true,
            console_safe: true,
            programmatic_safe: true,
        }
    }
}

/// Validates an S3 bucket name for general purpose buckets.
///
/// Checks run in a fixed order and the first violated rule is returned:
/// length, character pattern, adjacent periods, IP-address form, reserved
/// prefixes, reserved suffixes, then the Transfer Acceleration dot rule.
/// `None` validates with [`BucketNameOptions::default`].
pub fn validate_bucket_name(name: &str, opts: Option<BucketNameOptions>) -> NamingResult<()> {
    let opts = opts.unwrap_or_default();

    if name.len() < 3 || name.len() > 63 {
        return Err(NamingError::BucketNameLength);
    }

    if !BUCKET_NAME_REGEX.is_match(name) {
        return Err(NamingError::BucketNameCharacters);
    }

    if name.contains("..") {
        return Err(NamingError::BucketNameAdjacentPeriods);
    }

    if IP_ADDRESS_REGEX.is_match(name) {
        return Err(NamingError::BucketNameIpAddress);
    }

    for prefix in RESERVED_BUCKET_PREFIXES {
        if name.starts_with(prefix) {
            return Err(NamingError::BucketNameReservedPrefix(prefix));
        }
    }

    for suffix in RESERVED_BUCKET_SUFFIXES {
        if name.ends_with(suffix) {
            return Err(NamingError::BucketNameReservedSuffix(suffix));
        }
    }

    if opts.transfer_acceleration_enabled && name.contains('.') {
        return Err(NamingError::BucketNameAccelerationDots);
    }

    Ok(())
}

/// Validates an S3 object key.
///
/// The default options encode generally accepted best practices for S3
/// object naming; each rule group can be switched off independently through
/// [`ObjectKeyOptions`]. Checks run in a fixed order: length, safe character
/// set, console safety (trailing dot, then `./` and `../` prefixes), then
/// programmatic safety (`../` prefix). `None` validates with
/// [`ObjectKeyOptions::default`].
pub fn validate_object_key(key: &str, opts: Option<ObjectKeyOptions>) -> NamingResult<()> {
    let opts = opts.unwrap_or_default();

    if key.is_empty() || key.len() > 1024 {
        return Err(NamingError::ObjectKeyLength);
    }

    if opts.safe_characters_only && !SAFE_CHARACTERS_REGEX.is_match(key) {
        return Err(NamingError::ObjectKeyCharacters);
    }

    // Keys the console cannot display or download
    if opts.console_safe {
        if key.ends_with('.') {
            return Err(NamingError::ObjectKeyTrailingDot);
        }
        if key.starts_with("./") {
            return Err(NamingError::ObjectKeyUnsafePrefix("./"));
        }
        if key.starts_with("../") {
            return Err(NamingError::ObjectKeyUnsafePrefix("../"));
        }
    }

    // Keys the SDK and CLI cannot download
    if opts.programmatic_safe && key.starts_with("../") {
        return Err(NamingError::ObjectKeyUnsafePrefix("../"));
    }

    Ok(())
}
