//! Date projection for solved profiles.

use chrono::NaiveDate;
use datemark_core::calendar::{calendar_date, pivot_year};
use datemark_core::{Component, DateNotation, EntityProfile};
use thiserror::Error;

/// Why a notation could not be read as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    /// The profile has no complete slot assignment yet.
    #[error("profile is not solved")]
    Unsolved,

    /// The assignment yields a day/month/year that does not exist.
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: i32, day: i32 },
}

/// Reads `notation` as a calendar date using a solved profile.
///
/// Day and month are taken as written; the year goes through the century
/// pivot.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use datemark_core::{DateNotation, EntityProfile};
/// use datemark_solver::{constrain, project, ProjectionError};
///
/// let notation = DateNotation::new(5, 13, 99);
/// assert_eq!(project(&EntityProfile::unknown(), &notation), Err(ProjectionError::Unsolved));
///
/// let mut profile = EntityProfile::unknown();
/// constrain(&mut profile, &notation);
/// assert_eq!(project(&profile, &notation), Ok(NaiveDate::from_ymd_opt(1999, 5, 13).unwrap()));
/// ```
pub fn project(
    profile: &EntityProfile,
    notation: &DateNotation,
) -> Result<NaiveDate, ProjectionError> {
    let value_of = |component| {
        profile
            .assignment(component)
            .map(|slot| notation.get(slot))
            .ok_or(ProjectionError::Unsolved)
    };

    let day = value_of(Component::Day)?;
    let month = value_of(Component::Month)?;
    let year = pivot_year(value_of(Component::Year)?);

    calendar_date(year, month, day).ok_or(ProjectionError::InvalidDate { year, month, day })
}

#[cfg(test)]
mod tests {
    use super::*;
    use datemark_test::{profile_of, solved_profile};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_projection_with_pivot() {
        let profile = solved_profile("MDY");
        assert_eq!(
            project(&profile, &DateNotation::new(5, 13, 99)),
            Ok(date(1999, 5, 13))
        );
    }

    #[test]
    fn test_pivot_boundary() {
        let profile = solved_profile("DMY");
        assert_eq!(
            project(&profile, &DateNotation::new(1, 1, 19)),
            Ok(date(2019, 1, 1))
        );
        assert_eq!(
            project(&profile, &DateNotation::new(1, 1, 20)),
            Ok(date(1920, 1, 1))
        );
    }

    #[test]
    fn test_year_first_format() {
        let profile = solved_profile("YMD");
        assert_eq!(
            project(&profile, &DateNotation::new(1, 9, 11)),
            Ok(date(2001, 9, 11))
        );
    }

    #[test]
    fn test_unsolved_profile() {
        let profile = profile_of("M", "D", "MY");
        assert_eq!(
            project(&profile, &DateNotation::new(1, 2, 3)),
            Err(ProjectionError::Unsolved)
        );
    }

    #[test]
    fn test_invalid_date() {
        let profile = solved_profile("DMY");
        assert_eq!(
            project(&profile, &DateNotation::new(31, 2, 1)),
            Err(ProjectionError::InvalidDate {
                year: 2001,
                month: 2,
                day: 31
            })
        );
    }
}
