mod analysis;

pub use analysis::{
    can_submit, score_verdict, AnalysisMetadata, AnalysisRequest, AnalysisState, Character,
    CharacterAttributes, EmotionalArcPoint, KeyInsights, PitchReadyCopy, SimilarMovie, StoryReport,
    SubmissionGuard, TopLevelScore,
};
