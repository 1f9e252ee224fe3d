//! Optional AI title suggestion.

pub mod title_client;

pub use title_client::{
    EMPTY_RESPONSE_FALLBACK, ERROR_FALLBACK, GeminiTitleClient, NO_CREDENTIAL_FALLBACK,
    TitleSuggester,
};
