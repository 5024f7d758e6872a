//! # AWS Naming Rules
//!
//! Validators for AWS resource names: S3 bucket names and object keys,
//! DynamoDB table and secondary index names.
//!
//! # Design Principles
//!
//! - Pure functions: no I/O, no shared mutable state, no side effects
//! - Deterministic: the same name and options always yield the same outcome
//! - Short-circuiting: the first violated rule is returned, never an aggregate
//! - Fixed rule order: each validator documents its check sequence

pub mod errors;
pub mod dynamodb;
pub mod s3;

pub use errors::{NamingError, NamingResult};
pub use dynamodb::{validate_index_name, validate_table_name};
pub use s3::{validate_bucket_name, validate_object_key, BucketNameOptions, ObjectKeyOptions};
