use serde::{Deserialize, Serialize};

/// Request body for the analysis service.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisRequest {
    pub story: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TopLevelScore {
    pub overall: u8,
    pub narrative_strength: u8,
    pub market_fit: u8,
}

impl TopLevelScore {
    pub fn to_labeled_vec(&self) -> Vec<(&'static str, u8)> {
        vec![
            ("Overall", self.overall),
            ("Narrative Strength", self.narrative_strength),
            ("Market Fit", self.market_fit),
        ]
    }
}

/// One intensity sample along the story's progression. Negative intensity is
/// an emotional low; the service emits values in roughly -10..10.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct EmotionalArcPoint {
    pub point: String,
    pub intensity: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct KeyInsights {
    pub summary: String,
    pub genres: Vec<String>,
    pub themes: Vec<String>,
    pub target_audience: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CharacterAttributes {
    pub archetype: String,
    /// 0-10 scale.
    pub audience_appeal_score: u8,
    pub comparable_actors: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub role: String,
    pub description_short: String,
    pub attributes: CharacterAttributes,
}

impl Character {
    /// Appeal as a bar-fill percentage (0-10 scale mapped to 0-100).
    pub fn appeal_percent(&self) -> u32 {
        u32::from(self.attributes.audience_appeal_score) * 10
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PitchReadyCopy {
    pub key_pitch_points: Vec<String>,
    pub one_liner: String,
}

/// Diagnostic fields the service attaches when it ran (or skipped) a market
/// search. Every field but the flag is optional on the wire.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnalysisMetadata {
    pub market_search_performed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparable_movies_found: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl AnalysisMetadata {
    /// One display row per present field.
    pub fn detail_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Market search: {}",
            if self.market_search_performed { "yes" } else { "no" }
        )];
        if let Some(count) = self.comparable_movies_found {
            lines.push(format!("Comparable movies found: {}", count));
        }
        if let Some(timestamp) = &self.analysis_timestamp {
            lines.push(format!("Timestamp: {}", timestamp));
        }
        if let Some(reason) = &self.reason {
            lines.push(format!("Reason: {}", reason));
        }
        lines
    }
}

/// A comparable title. Field names are capitalized on the wire (OMDb style).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SimilarMovie {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Year")]
    pub year: String,
    #[serde(rename = "Poster")]
    pub poster: String,
}

impl SimilarMovie {
    /// OMDb reports a missing poster as the literal string "N/A".
    pub fn has_poster(&self) -> bool {
        !self.poster.is_empty() && self.poster != "N/A"
    }
}

/// The full report returned by `POST /analyze_synopsis`. Only this schema is
/// accepted; a body missing any required field is a decode failure.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StoryReport {
    pub title: String,
    pub logline: String,
    pub top_level_score: TopLevelScore,
    pub emotional_arc_data: Vec<EmotionalArcPoint>,
    pub key_insights: KeyInsights,
    pub characters: Vec<Character>,
    pub pitch_ready_copy: PitchReadyCopy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AnalysisMetadata>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub similar_movies: Vec<SimilarMovie>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AnalysisState {
    Idle,
    Loading { message: String, progress: u8 },
    Complete(StoryReport),
    Error(String),
}

impl AnalysisState {
    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisState::Loading { .. })
    }
}

/// Submission requires a non-blank synopsis and no request in flight. The
/// submit button is disabled when this is false, and the click handler
/// re-checks it so a direct invocation cannot start a second request.
pub fn can_submit(synopsis: &str, state: &AnalysisState) -> bool {
    !synopsis.trim().is_empty() && !state.is_loading()
}

/// Monotonic submission counter. A completion is applied only when its
/// ticket matches the most recent submission, so a response that resolves
/// after the user has moved on is dropped instead of rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SubmissionGuard {
    latest: u64,
}

impl SubmissionGuard {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

/// Verdict chip text for an overall score.
pub fn score_verdict(overall: u8) -> &'static str {
    if overall >= 85 {
        "Exceptional"
    } else if overall >= 70 {
        "Strong"
    } else if overall >= 50 {
        "Promising"
    } else {
        "Developing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_REPORT_JSON: &str = r#"{
        "title": "Story Impact Report - The Lighthouse at World's End",
        "logline": "A disgraced cartographer must chart a vanishing coastline before the town that exiled her disappears with it.",
        "top_level_score": {
            "overall": 73,
            "narrative_strength": 78,
            "market_fit": 66
        },
        "emotional_arc_data": [
            {"point": "Beginning", "intensity": 2},
            {"point": "End of Act I", "intensity": 6},
            {"point": "Midpoint", "intensity": -4},
            {"point": "All is Lost Moment", "intensity": -8},
            {"point": "Climax", "intensity": 10},
            {"point": "End", "intensity": 7}
        ],
        "key_insights": {
            "summary": "A grounded character drama with a speculative hook and strong festival potential.",
            "genres": ["Drama", "Mystery"],
            "themes": ["Redemption", "Memory"],
            "target_audience": ["Arthouse audiences", "Book club readers"]
        },
        "characters": [
            {
                "role": "Protagonist",
                "description_short": "A meticulous mapmaker undone by one falsified survey.",
                "attributes": {
                    "archetype": "Reluctant Hero",
                    "audience_appeal_score": 8,
                    "comparable_actors": ["Jodie Comer", "Rebecca Ferguson"]
                }
            }
        ],
        "pitch_ready_copy": {
            "key_pitch_points": [
                "High-concept premise with contained scope",
                "Awards-friendly lead role"
            ],
            "one_liner": "The map is wrong because the world is."
        },
        "metadata": {
            "market_search_performed": true,
            "comparable_movies_found": 3,
            "analysis_timestamp": "2025-11-04T18:22:10Z"
        },
        "similar_movies": [
            {"Title": "The Vanishing", "Year": "1988", "Poster": "https://m.media-amazon.com/images/a.jpg"},
            {"Title": "Arrival", "Year": "2016", "Poster": "N/A"}
        ]
    }"#;

    #[test]
    fn full_report_round_trips() {
        let report: StoryReport = serde_json::from_str(FULL_REPORT_JSON).unwrap();
        assert_eq!(report.top_level_score.overall, 73);
        assert_eq!(report.emotional_arc_data.len(), 6);
        assert_eq!(report.emotional_arc_data[3].intensity, -8.0);
        assert_eq!(report.characters[0].attributes.audience_appeal_score, 8);
        assert_eq!(report.similar_movies[0].title, "The Vanishing");

        let json = serde_json::to_string(&report).unwrap();
        let reparsed: StoryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, reparsed);
    }

    #[test]
    fn optional_sections_default_when_absent() {
        let mut value: serde_json::Value = serde_json::from_str(FULL_REPORT_JSON).unwrap();
        let obj = value.as_object_mut().unwrap();
        obj.remove("metadata");
        obj.remove("similar_movies");

        let report: StoryReport = serde_json::from_value(value).unwrap();
        assert!(report.metadata.is_none());
        assert!(report.similar_movies.is_empty());
    }

    #[test]
    fn missing_required_field_is_a_decode_failure() {
        let mut value: serde_json::Value = serde_json::from_str(FULL_REPORT_JSON).unwrap();
        value.as_object_mut().unwrap().remove("top_level_score");
        assert!(serde_json::from_value::<StoryReport>(value).is_err());
    }

    #[test]
    fn legacy_flat_schema_is_rejected() {
        let legacy = r#"{
            "emotional_arc": [{"point": "Overall", "intensity": 3}],
            "characters": [],
            "story_score": 42,
            "tags": ["Drama"],
            "audience": ["Teens"]
        }"#;
        assert!(serde_json::from_str::<StoryReport>(legacy).is_err());
    }

    #[test]
    fn metadata_lines_cover_present_fields_only() {
        let metadata = AnalysisMetadata {
            market_search_performed: false,
            comparable_movies_found: None,
            analysis_timestamp: None,
            reason: Some("no comparable titles matched".into()),
        };
        let lines = metadata.detail_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Market search: no");
        assert_eq!(lines[1], "Reason: no comparable titles matched");
        assert!(!lines.iter().any(|l| l.starts_with("Comparable movies")));
    }

    #[test]
    fn metadata_lines_include_count_when_present() {
        let metadata = AnalysisMetadata {
            market_search_performed: true,
            comparable_movies_found: Some(5),
            analysis_timestamp: Some("2025-11-04T18:22:10Z".into()),
            reason: None,
        };
        let lines = metadata.detail_lines();
        assert_eq!(lines[1], "Comparable movies found: 5");
        assert_eq!(lines[2], "Timestamp: 2025-11-04T18:22:10Z");
    }

    #[test]
    fn appeal_score_maps_to_percentage() {
        let character: Character = serde_json::from_value(serde_json::json!({
            "role": "Antagonist",
            "description_short": "The tide itself.",
            "attributes": {
                "archetype": "Force of Nature",
                "audience_appeal_score": 7,
                "comparable_actors": []
            }
        }))
        .unwrap();
        assert_eq!(character.appeal_percent(), 70);
    }

    #[test]
    fn poster_sentinel_is_detected() {
        let with = SimilarMovie {
            title: "Arrival".into(),
            year: "2016".into(),
            poster: "https://example.com/p.jpg".into(),
        };
        let without = SimilarMovie {
            title: "The Vanishing".into(),
            year: "1988".into(),
            poster: "N/A".into(),
        };
        assert!(with.has_poster());
        assert!(!without.has_poster());
    }

    #[test]
    fn blank_synopsis_cannot_be_submitted() {
        assert!(!can_submit("", &AnalysisState::Idle));
        assert!(!can_submit("   \n\t", &AnalysisState::Idle));
        assert!(can_submit("A story about a lighthouse.", &AnalysisState::Idle));
    }

    #[test]
    fn loading_state_blocks_resubmission() {
        let loading = AnalysisState::Loading {
            message: "Reading the synopsis...".into(),
            progress: 40,
        };
        assert!(!can_submit("A perfectly good synopsis", &loading));
    }

    #[test]
    fn terminal_states_allow_resubmission() {
        let report: StoryReport = serde_json::from_str(FULL_REPORT_JSON).unwrap();
        assert!(can_submit("again", &AnalysisState::Complete(report)));
        assert!(can_submit(
            "again",
            &AnalysisState::Error("Failed to analyze synopsis".into())
        ));
    }

    #[test]
    fn stale_completion_is_not_current() {
        let mut guard = SubmissionGuard::default();
        let first = guard.begin();
        let second = guard.begin();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }

    #[test]
    fn verdict_labels_by_band() {
        assert_eq!(score_verdict(92), "Exceptional");
        assert_eq!(score_verdict(73), "Strong");
        assert_eq!(score_verdict(55), "Promising");
        assert_eq!(score_verdict(30), "Developing");
    }
}
