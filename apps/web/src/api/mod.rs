pub mod client;
pub mod mock;

pub use client::{analyze_synopsis, api_base_url, get_loading_messages, ApiError};
pub use mock::{sample_report, sample_synopses, SampleSynopsis};
