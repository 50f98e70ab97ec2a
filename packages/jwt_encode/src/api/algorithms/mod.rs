//! JWT Algorithms Module
//!
//! Signature primitives per family and the core signing operation.

mod core;
mod ecdsa;
mod hmac;
mod rsa;
mod utils;

pub use self::core::{sign_jwt, sign_jwt_async};
