//! # Naming Rule Errors

use thiserror::Error;

/// Result type for name validation
pub type NamingResult<T> = Result<T, NamingError>;

/// A violated naming rule.
///
/// Validation short-circuits, so a name breaking several rules reports only
/// the first one in the validator's documented order. Each variant renders
/// the provider-documented reason the name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    // Bucket name rules
    #[error("bucket name must be between 3 and 63 characters long")]
    BucketNameLength,

    #[error("bucket name can consist only of lowercase letters, numbers, dots (.), and hyphens (-), and must begin and end with a letter or number")]
    BucketNameCharacters,

    #[error("bucket name must not contain two adjacent periods")]
    BucketNameAdjacentPeriods,

    #[error("bucket name must not be formatted as an IP address")]
    BucketNameIpAddress,

    #[error("bucket name must not start with the prefix {0}")]
    BucketNameReservedPrefix(&'static str),

    #[error("bucket name must not end with the suffix {0}")]
    BucketNameReservedSuffix(&'static str),

    #[error("buckets used with Amazon S3 Transfer Acceleration can't have dots (.) in their names")]
    BucketNameAccelerationDots,

    // Object key rules
    #[error("object key must be between 1 and 1024 characters long")]
    ObjectKeyLength,

    #[error("object key can only contain the following characters: 0-9, a-z, A-Z, !, _, ., *, ', (, ) and -")]
    ObjectKeyCharacters,

    #[error("object key must not end with a dot")]
    ObjectKeyTrailingDot,

    #[error("object key must not have a prefix of {0}")]
    ObjectKeyUnsafePrefix(&'static str),

    // DynamoDB naming rules
    #[error("dynamodb table name must be between 3 and 255 characters long")]
    TableNameLength,

    #[error("dynamodb table name can only contain a-z, A-Z, 0-9, -, _ and .")]
    TableNameCharacters,

    #[error("dynamodb index name must be between 1 and 255 characters long")]
    IndexNameLength,

    #[error("dynamodb index name can only contain a-z, A-Z, 0-9 and _")]
    IndexNameCharacters,
}
