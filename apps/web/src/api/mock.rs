use crate::models::{
    AnalysisMetadata, Character, CharacterAttributes, EmotionalArcPoint, KeyInsights,
    PitchReadyCopy, SimilarMovie, StoryReport, TopLevelScore,
};

/// A curated synopsis users can load into the editor with one click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleSynopsis {
    pub title: &'static str,
    pub text: &'static str,
}

pub fn sample_synopses() -> Vec<SampleSynopsis> {
    vec![
        SampleSynopsis {
            title: "The Cartographer's Tide",
            text: "A disgraced cartographer returns to the fishing town that exiled her \
                   when the coastline begins vanishing from every map, including the ones \
                   she falsified years ago. As the sea swallows landmarks overnight, she \
                   must redraw the town's borders faster than they disappear, and confront \
                   the surveyor whose career she ended to do it.",
        },
        SampleSynopsis {
            title: "Static",
            text: "A night-shift radio engineer in 1987 Ohio starts receiving station \
                   bulletins broadcast from three days in the future. At first he uses \
                   them to fix small tragedies, until a bulletin announces his own \
                   station's fire with him inside it, and the only person who believes \
                   him is the traffic reporter he has loved silently for a decade.",
        },
        SampleSynopsis {
            title: "The Understudy",
            text: "When a legendary stage actress collapses mid-run, her devoted \
                   understudy finally steps into the role she has rehearsed for six \
                   years, only to discover the production's famed director has been \
                   quietly rewriting the play around secrets from the understudy's own \
                   life, and the third act hasn't been written yet.",
        },
    ]
}

/// A complete report with every optional section populated. Exercised by
/// tests and available as a rendering fixture.
pub fn sample_report() -> StoryReport {
    StoryReport {
        title: "Story Impact Report - The Cartographer's Tide".into(),
        logline: "A disgraced mapmaker must chart a vanishing coastline before the town \
                  that exiled her disappears with it."
            .into(),
        top_level_score: TopLevelScore {
            overall: 81,
            narrative_strength: 84,
            market_fit: 72,
        },
        emotional_arc_data: vec![
            EmotionalArcPoint {
                point: "Beginning".into(),
                intensity: 2.0,
            },
            EmotionalArcPoint {
                point: "End of Act I".into(),
                intensity: 6.0,
            },
            EmotionalArcPoint {
                point: "Midpoint".into(),
                intensity: -4.0,
            },
            EmotionalArcPoint {
                point: "All is Lost Moment".into(),
                intensity: -8.0,
            },
            EmotionalArcPoint {
                point: "Climax".into(),
                intensity: 10.0,
            },
            EmotionalArcPoint {
                point: "End".into(),
                intensity: 7.0,
            },
        ],
        key_insights: KeyInsights {
            summary: "A grounded character drama wrapped in a speculative premise, with \
                      a contained setting that keeps production scope modest and a lead \
                      role built for awards conversation."
                .into(),
            genres: vec!["Drama".into(), "Mystery".into(), "Magical Realism".into()],
            themes: vec!["Redemption".into(), "Memory".into(), "Belonging".into()],
            target_audience: vec![
                "Arthouse audiences".into(),
                "Book club readers".into(),
                "Festival programmers".into(),
            ],
        },
        characters: vec![
            Character {
                role: "Protagonist".into(),
                description_short: "A meticulous mapmaker undone by one falsified survey, \
                                    equal parts penance and stubbornness."
                    .into(),
                attributes: CharacterAttributes {
                    archetype: "Reluctant Hero".into(),
                    audience_appeal_score: 8,
                    comparable_actors: vec![
                        "Jodie Comer".into(),
                        "Rebecca Ferguson".into(),
                        "Ruth Negga".into(),
                    ],
                },
            },
            Character {
                role: "Antagonist".into(),
                description_short: "The surveyor she ruined, now the town's harbormaster, \
                                    who would rather the coastline vanish than be redrawn \
                                    by her hand."
                    .into(),
                attributes: CharacterAttributes {
                    archetype: "Wounded Rival".into(),
                    audience_appeal_score: 7,
                    comparable_actors: vec!["Brian Cox".into(), "Stellan Skarsgard".into()],
                },
            },
        ],
        pitch_ready_copy: PitchReadyCopy {
            key_pitch_points: vec![
                "High-concept premise with contained, financeable scope".into(),
                "Awards-friendly lead role with a clear redemption arc".into(),
                "Timely themes of erasure and belonging".into(),
            ],
            one_liner: "The map is wrong because the world is.".into(),
        },
        metadata: Some(AnalysisMetadata {
            market_search_performed: true,
            comparable_movies_found: Some(3),
            analysis_timestamp: Some("2025-11-04T18:22:10Z".into()),
            reason: None,
        }),
        similar_movies: vec![
            SimilarMovie {
                title: "The Vanishing".into(),
                year: "1988".into(),
                poster: "https://m.media-amazon.com/images/M/vanishing.jpg".into(),
            },
            SimilarMovie {
                title: "Leave No Trace".into(),
                year: "2018".into(),
                poster: "https://m.media-amazon.com/images/M/leavenotrace.jpg".into(),
            },
            SimilarMovie {
                title: "The Lighthouse".into(),
                year: "2019".into(),
                poster: "N/A".into(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_submittable() {
        for sample in sample_synopses() {
            assert!(!sample.text.trim().is_empty(), "{}", sample.title);
        }
    }

    #[test]
    fn sample_report_survives_the_wire_format() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let decoded: StoryReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, decoded);
    }
}
