//! JWT encoding API
//!
//! Signing engine, key parsing, the fluent builder and the encoder
//! component's request boundary.

pub mod algorithms;
pub mod builder;
pub mod encoder;
pub mod keys;

pub use algorithms::{sign_jwt, sign_jwt_async};
pub use builder::{Jwt, JwtBuilder, JwtBuilderWithError};
pub use encoder::{
    EncodeError, EncodeOutcome, EncodeRequest, EncodeResponse, EncoderSettings, JwtEncoder,
};
pub use keys::recommended_key_size;
