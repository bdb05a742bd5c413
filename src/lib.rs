#![allow(clippy::module_inception)]
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::large_enum_variant)]
#![allow(clippy::wrong_self_convention)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::vec_init_then_push)]
#![allow(rustdoc::bare_urls)]
//! <fullname>Amazon Route 53</fullname>
//! <p>Amazon Route 53 is a highly available and scalable Domain Name System (DNS) web
//! service.</p>
//!
//! This crate contains the data types for a subset of the Route 53 API: the types that
//! describe hosted zones, resource record sets, geolocation, health checks, and traffic
//! policies, together with the restXml serializers and deserializers for the request and
//! response bodies of the corresponding operations.

/// All error types that operations can return.
pub mod error;

/// Input structures for operations.
pub mod input;

/// Data structures used by operation inputs and outputs.
pub mod model;

/// Output structures for operations.
pub mod output;

/// XML deserializers for restXml response bodies.
pub mod xml_deser;

/// XML serializers for restXml request bodies.
pub mod xml_ser;

pub use aws_smithy_types::error::ErrorMetadata;
pub use aws_smithy_types::DateTime;
