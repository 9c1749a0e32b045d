use coach_api::dto::{TeamDetailDto, TeamMemberDto, TeamSummaryDto};
use time::OffsetDateTime;

use crate::format::{format_relative_date, pluralize};
use crate::view_models::{
    TeamActivity, TeamDisplay, TeamMemberViewModel, TeamMembers, TeamViewModel,
};

const DEFAULT_MEMBER_ROLE: &str = "Member";

#[derive(Debug, Clone, Copy)]
pub enum TeamSource<'a> {
    Summary(&'a TeamSummaryDto),
    Detail(&'a TeamDetailDto),
}

impl<'a> From<&'a TeamSummaryDto> for TeamSource<'a> {
    fn from(dto: &'a TeamSummaryDto) -> Self {
        TeamSource::Summary(dto)
    }
}

impl<'a> From<&'a TeamDetailDto> for TeamSource<'a> {
    fn from(dto: &'a TeamDetailDto) -> Self {
        TeamSource::Detail(dto)
    }
}

/// Convert a team listing row or detail to a `TeamViewModel`.
///
/// `now` is the reference point for the next lesson's relative label.
pub fn to_view_model<'a>(source: impl Into<TeamSource<'a>>, now: OffsetDateTime) -> TeamViewModel {
    let (id, name, description, members, upcoming_count, next_lesson) = match source.into() {
        TeamSource::Summary(dto) => (
            dto.id,
            &dto.name,
            &dto.description,
            TeamMembers {
                count: dto.member_count,
                list: Vec::new(),
            },
            dto.upcoming_lesson_count.unwrap_or(0),
            dto.next_lesson_date,
        ),
        TeamSource::Detail(dto) => (
            dto.id,
            &dto.name,
            &dto.description,
            TeamMembers {
                count: dto.members.len() as u32,
                list: dto.members.iter().map(to_member).collect(),
            },
            dto.upcoming_lessons.len() as u32,
            dto.upcoming_lessons
                .iter()
                .map(|lesson| lesson.scheduled_at)
                .min(),
        ),
    };

    let display = TeamDisplay {
        is_empty: members.count == 0,
        member_summary: if members.count == 0 {
            "No members".to_string()
        } else {
            pluralize(members.count, "member", "members")
        },
    };

    TeamViewModel {
        id,
        name: name.clone(),
        description: description.clone(),
        members,
        activity: TeamActivity {
            upcoming_lessons_count: upcoming_count,
            next_lesson_date: next_lesson,
            next_lesson_formatted: next_lesson.map(|date| format_relative_date(date, now)),
        },
        display,
    }
}

fn to_member(dto: &TeamMemberDto) -> TeamMemberViewModel {
    TeamMemberViewModel {
        id: dto.id,
        name: dto.name.clone(),
        email: dto.email.clone(),
        role: dto
            .role
            .clone()
            .unwrap_or_else(|| DEFAULT_MEMBER_ROLE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_api::dto::UpcomingLessonDto;
    use time::macros::datetime;

    const NOW: OffsetDateTime = datetime!(2026-03-14 09:00 UTC);

    #[test]
    fn test_summary_without_members_is_empty() {
        let dto = TeamSummaryDto {
            id: 1,
            name: "Rookies".to_string(),
            description: None,
            member_count: 0,
            upcoming_lesson_count: None,
            next_lesson_date: None,
        };

        let vm = to_view_model(&dto, NOW);
        assert!(vm.display.is_empty);
        assert_eq!(vm.display.member_summary, "No members");
        assert_eq!(vm.activity.upcoming_lessons_count, 0);
        assert!(vm.activity.next_lesson_formatted.is_none());
    }

    #[test]
    fn test_summary_formats_next_lesson() {
        let dto = TeamSummaryDto {
            id: 2,
            name: "House Team".to_string(),
            description: Some("Friday show cast".to_string()),
            member_count: 1,
            upcoming_lesson_count: Some(2),
            next_lesson_date: Some(datetime!(2026-03-15 19:00 UTC)),
        };

        let vm = to_view_model(&dto, NOW);
        assert!(!vm.display.is_empty);
        assert_eq!(vm.display.member_summary, "1 member");
        assert_eq!(vm.members.count, 1);
        assert!(vm.members.list.is_empty());
        assert_eq!(
            vm.activity.next_lesson_formatted.as_deref(),
            Some("Tomorrow, 19:00")
        );
    }

    #[test]
    fn test_detail_picks_earliest_lesson_and_maps_members() {
        let dto = TeamDetailDto {
            id: 3,
            name: "Harold Team".to_string(),
            description: None,
            members: vec![
                TeamMemberDto {
                    id: 10,
                    name: "Ana".to_string(),
                    email: Some("ana@example.com".to_string()),
                    role: Some("Captain".to_string()),
                },
                TeamMemberDto {
                    id: 11,
                    name: "Ben".to_string(),
                    email: None,
                    role: None,
                },
            ],
            upcoming_lessons: vec![
                UpcomingLessonDto {
                    id: 1,
                    title: "Group games".to_string(),
                    scheduled_at: datetime!(2026-03-18 18:00 UTC),
                },
                UpcomingLessonDto {
                    id: 2,
                    title: "Openings".to_string(),
                    scheduled_at: datetime!(2026-03-14 18:00 UTC),
                },
            ],
        };

        let vm = to_view_model(&dto, NOW);
        assert_eq!(vm.members.count, 2);
        assert_eq!(vm.members.list[1].role, "Member");
        assert_eq!(vm.display.member_summary, "2 members");
        assert_eq!(vm.activity.upcoming_lessons_count, 2);
        assert_eq!(
            vm.activity.next_lesson_date,
            Some(datetime!(2026-03-14 18:00 UTC))
        );
        assert_eq!(
            vm.activity.next_lesson_formatted.as_deref(),
            Some("Today, 18:00")
        );
    }
}
