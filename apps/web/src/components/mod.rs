pub mod character_card;
pub mod emotional_arc_chart;
pub mod header;
pub mod insights_card;
pub mod loading_card;
pub mod metadata_panel;
pub mod pitch_card;
pub mod score_gauge;
pub mod similar_movies_carousel;

pub use character_card::*;
pub use emotional_arc_chart::*;
pub use header::*;
pub use insights_card::*;
pub use loading_card::*;
pub use metadata_panel::*;
pub use pitch_card::*;
pub use score_gauge::*;
pub use similar_movies_carousel::*;
