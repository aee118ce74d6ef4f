//! Data model for the Rustless API Gateway emulator.
//!
//! This crate defines the configuration-shaped types the route table builder
//! consumes: function definitions and their event specifications, as they
//! appear in a serverless deployment descriptor after the config loader has
//! parsed the file format and flattened any file-inclusion indirection.
//!
//! The types here are deliberately loose: a function's event list may mix
//! HTTP triggers (in either API Gateway protocol-version syntax) with
//! non-HTTP triggers such as schedules or queue subscriptions. Non-HTTP
//! triggers are preserved opaquely and ignored by the routing layer.

mod function;

pub use function::{EventSpec, FunctionDefinition, HttpTrigger};
