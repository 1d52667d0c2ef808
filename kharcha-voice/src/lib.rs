//! kharcha-voice: free-text expense understanding for speech transcripts.
//!
//! Extracts an amount, a currency, and a best-matching spending category
//! from one noisy speech-to-text transcript, with no external NLP service.
//! The parsing core is pure and synchronous; only the capture boundary
//! (`capture`) deals with a live transcription engine.

pub mod amount;
pub mod capture;
pub mod currency;
pub mod matcher;
pub mod parser;

pub use amount::extract_amount;
pub use capture::{
    CaptureEngine, CaptureError, CaptureSession, CaptureState, EngineKind, select_engine,
};
pub use currency::extract_currency;
pub use matcher::match_category;
pub use parser::parse_voice_expense;
