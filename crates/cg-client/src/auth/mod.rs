pub(crate) mod token_resolver;

pub use token_resolver::{
    DIRECT_TOKEN_KEYS, ENVELOPE_TOKEN_FIELDS, SESSION_ENVELOPE_KEYS, TokenResolver,
};
