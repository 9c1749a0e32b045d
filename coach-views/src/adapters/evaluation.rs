use coach_api::dto::{CriterionScoreDto, EvaluationDto, EvaluationTemplateDto, SessionEvaluationDto};

use crate::format::{grade_from_percentage, percentage};
use crate::view_models::{
    CriterionScoreViewModel, EvaluationScores, EvaluationTemplateViewModel, EvaluationViewModel,
    OverallScore,
};

/// Score scale legacy templates use when they don't declare one.
pub const DEFAULT_MAX_CRITERION_SCORE: u32 = 4;

/// Highest score a single criterion can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreScale {
    max_score: u32,
}

impl ScoreScale {
    pub fn new(max_score: u32) -> Self {
        Self { max_score }
    }

    pub fn from_template(template: &EvaluationTemplateDto) -> Self {
        Self::new(template.max_score.unwrap_or(DEFAULT_MAX_CRITERION_SCORE))
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }
}

impl Default for ScoreScale {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CRITERION_SCORE)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum EvaluationSource<'a> {
    Standalone(&'a EvaluationDto),
    Embedded(&'a SessionEvaluationDto),
}

impl<'a> From<&'a EvaluationDto> for EvaluationSource<'a> {
    fn from(dto: &'a EvaluationDto) -> Self {
        EvaluationSource::Standalone(dto)
    }
}

impl<'a> From<&'a SessionEvaluationDto> for EvaluationSource<'a> {
    fn from(dto: &'a SessionEvaluationDto) -> Self {
        EvaluationSource::Embedded(dto)
    }
}

pub fn to_view_model<'a>(
    source: impl Into<EvaluationSource<'a>>,
    scale: ScoreScale,
) -> EvaluationViewModel {
    match source.into() {
        EvaluationSource::Standalone(dto) => EvaluationViewModel {
            id: dto.id,
            exercise_id: dto.exercise_id,
            exercise_name: dto.exercise_name.clone(),
            performer_name: dto.performer_name.clone(),
            notes: dto.notes.clone(),
            evaluated_at: dto.evaluated_at,
            scores: scores(&dto.criteria, scale),
        },
        EvaluationSource::Embedded(dto) => EvaluationViewModel {
            id: dto.id,
            exercise_id: dto.exercise_id,
            exercise_name: None,
            performer_name: None,
            notes: dto.notes.clone(),
            evaluated_at: None,
            scores: scores(&dto.scores, scale),
        },
    }
}

pub fn template_to_view_model(template: &EvaluationTemplateDto) -> EvaluationTemplateViewModel {
    EvaluationTemplateViewModel {
        id: template.id,
        name: template.name.clone(),
        criteria: template.criteria.iter().map(|c| c.name.clone()).collect(),
        max_score: ScoreScale::from_template(template).max_score(),
    }
}

fn scores(criteria: &[CriterionScoreDto], scale: ScoreScale) -> EvaluationScores {
    let criteria: Vec<CriterionScoreViewModel> = criteria
        .iter()
        .map(|criterion| CriterionScoreViewModel {
            name: criterion.name.clone(),
            score: criterion.score,
            max_score: scale.max_score(),
            notes: criterion.notes.clone(),
        })
        .collect();

    let total: u64 = criteria.iter().map(|c| u64::from(c.score)).sum();
    let max_total = u64::from(scale.max_score()).saturating_mul(criteria.len() as u64);
    let percentage = percentage(total, max_total);

    EvaluationScores {
        criteria,
        overall: OverallScore {
            total,
            max_total,
            percentage,
            grade: grade_from_percentage(percentage),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(name: &str, score: u32) -> CriterionScoreDto {
        CriterionScoreDto {
            criterion_id: None,
            name: name.to_string(),
            score,
            notes: None,
        }
    }

    fn evaluation(scores: Vec<CriterionScoreDto>) -> EvaluationDto {
        EvaluationDto {
            id: 1,
            exercise_id: 123,
            exercise_name: Some("Advanced Scene Work".to_string()),
            performer_name: Some("Ana".to_string()),
            evaluator_name: None,
            criteria: scores,
            notes: None,
            evaluated_at: None,
        }
    }

    #[test]
    fn test_default_scale_is_four_per_criterion() {
        let dto = evaluation(vec![
            criterion("Listening", 4),
            criterion("Commitment", 3),
            criterion("Character", 4),
        ]);

        let vm = to_view_model(&dto, ScoreScale::default());
        let overall = &vm.scores.overall;
        assert_eq!(overall.total, 11);
        assert_eq!(overall.max_total, 12);
        assert_eq!(overall.percentage, 92);
        assert_eq!(overall.grade, "A-");
        assert!(vm.scores.criteria.iter().all(|c| c.max_score == 4));
    }

    #[test]
    fn test_template_scale_overrides_default() {
        let template = EvaluationTemplateDto {
            id: 2,
            name: "Ten point".to_string(),
            max_score: Some(10),
            criteria: vec![],
        };
        let dto = evaluation(vec![criterion("Listening", 7), criterion("Commitment", 8)]);

        let vm = to_view_model(&dto, ScoreScale::from_template(&template));
        assert_eq!(vm.scores.overall.max_total, 20);
        assert_eq!(vm.scores.overall.percentage, 75);
        assert_eq!(vm.scores.overall.grade, "C");
    }

    #[test]
    fn test_legacy_template_falls_back_to_four() {
        let template = EvaluationTemplateDto {
            id: 3,
            name: "Legacy".to_string(),
            max_score: None,
            criteria: vec![],
        };
        assert_eq!(ScoreScale::from_template(&template).max_score(), 4);
    }

    #[test]
    fn test_template_view_model_lists_criteria() {
        let template = EvaluationTemplateDto {
            id: 4,
            name: "Scene basics".to_string(),
            max_score: None,
            criteria: vec![coach_api::dto::TemplateCriterionDto {
                id: 1,
                name: "Listening".to_string(),
                description: None,
            }],
        };

        let vm = template_to_view_model(&template);
        assert_eq!(vm.criteria, vec!["Listening"]);
        assert_eq!(vm.max_score, DEFAULT_MAX_CRITERION_SCORE);
    }

    #[test]
    fn test_large_template_scale_does_not_overflow() {
        let template: EvaluationTemplateDto =
            serde_json::from_str(r#"{"id": 5, "name": "Huge", "maxScore": 3000000000}"#).unwrap();
        let dto = evaluation(vec![
            criterion("Listening", 3_000_000_000),
            criterion("Commitment", 1_500_000_000),
        ]);

        let vm = to_view_model(&dto, ScoreScale::from_template(&template));
        let overall = &vm.scores.overall;
        assert_eq!(overall.total, 4_500_000_000);
        assert_eq!(overall.max_total, 6_000_000_000);
        assert_eq!(overall.percentage, 75);
        assert_eq!(overall.grade, "C");
    }

    #[test]
    fn test_no_criteria_scores_zero() {
        let vm = to_view_model(&evaluation(vec![]), ScoreScale::default());

        assert_eq!(vm.scores.overall.max_total, 0);
        assert_eq!(vm.scores.overall.percentage, 0);
        assert_eq!(vm.scores.overall.grade, "F");
    }

    #[test]
    fn test_embedded_evaluation_has_no_names() {
        let dto = SessionEvaluationDto {
            id: 9,
            exercise_id: 2,
            participant_id: Some(1),
            scores: vec![criterion("Listening", 4), criterion("Commitment", 4)],
            notes: Some("Strong start".to_string()),
        };

        let vm = to_view_model(&dto, ScoreScale::default());
        assert!(vm.exercise_name.is_none());
        assert_eq!(vm.notes.as_deref(), Some("Strong start"));
        assert_eq!(vm.scores.overall.percentage, 100);
        assert_eq!(vm.scores.overall.grade, "A+");
    }
}
