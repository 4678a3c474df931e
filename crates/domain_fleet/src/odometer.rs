//! Odometer consistency maintenance
//!
//! Editing a trip's end mileage breaks the continuity of every trip that
//! follows it in the same log: each trip's start mileage must equal the
//! previous trip's end mileage. This module decides how the edit cascades
//! to later trips and produces the updated records for the caller to
//! persist.
//!
//! Two corrections are recognized:
//!
//! - **Rollover**: the end mileage moved by exactly +1000, meaning the
//!   odometer display wrapped. Every later trip shifts by +1000, start and
//!   end alike.
//! - **Carry**: the end mileage moved by less than 1000 miles in either
//!   direction. Only the immediately-next trip's start mileage is pulled to
//!   the new end mileage.
//!
//! Any other difference (a negative rollover, a multi-thousand-mile jump)
//! has no defined correction and aborts the edit whole.
//!
//! Nothing here persists anything. The returned trips must be written back
//! atomically by the caller - all of them or none - or the continuity
//! invariant is left broken on a partial write.

use tracing::debug;

use crate::error::FleetError;
use crate::mileage_log::Trip;

/// Mileage difference treated as an odometer display wrap
pub const ROLLOVER_MILES: i64 = 1000;

/// The cascading adjustment chosen for a trip edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CascadeAction {
    /// End mileage unchanged; nothing to do
    NoChange,
    /// +1000 shift applied to every later trip
    Rollover,
    /// Bounded shift applied to the next trip's start mileage only
    Carry,
}

impl CascadeAction {
    /// Classifies the difference between the new and original end mileage
    ///
    /// # Errors
    ///
    /// Differences at or beyond 1000 miles in magnitude - other than the
    /// positive rollover itself - are rejected: the business rules define
    /// no correction for them.
    pub fn classify(diff: i64) -> Result<CascadeAction, FleetError> {
        if diff == 0 {
            Ok(CascadeAction::NoChange)
        } else if diff == ROLLOVER_MILES {
            Ok(CascadeAction::Rollover)
        } else if diff.abs() < ROLLOVER_MILES {
            Ok(CascadeAction::Carry)
        } else {
            Err(FleetError::consistency(format!(
                "end mileage changed by {diff} miles; only a +{ROLLOVER_MILES} rollover or a \
                 shift smaller than {ROLLOVER_MILES} miles can be reconciled"
            )))
        }
    }
}

/// Field-level check of a new end mileage, run by the edit form before the
/// cascade is attempted
///
/// `next_trip_end_mileage` is the end mileage of the immediately-next trip
/// prior to any shift, if one exists.
///
/// # Errors
///
/// - `ConsistencyViolation` if the new end mileage falls below the edited
///   trip's start mileage.
/// - `Validation` (on `end_mileage`) if a small forward shift would push
///   the new end mileage past the next trip's end mileage.
pub fn validate_end_mileage(
    start_mileage: i64,
    original_end_mileage: i64,
    new_end_mileage: i64,
    next_trip_end_mileage: Option<i64>,
) -> Result<(), FleetError> {
    if new_end_mileage < start_mileage {
        return Err(FleetError::consistency(format!(
            "end mileage ({new_end_mileage}) cannot be less than start mileage ({start_mileage})"
        )));
    }

    let diff = new_end_mileage - original_end_mileage;
    if diff > 0 && diff < ROLLOVER_MILES {
        if let Some(next_end) = next_trip_end_mileage {
            if new_end_mileage > next_end {
                return Err(FleetError::validation(
                    "end_mileage",
                    format!("End mileage must be less than the next trip's end mileage: {next_end}"),
                ));
            }
        }
    }

    Ok(())
}

/// Applies the cascade policy for an edited trip and returns the later
/// trips that changed, carrying their updated mileages
///
/// `edited` already holds the new end mileage; `original_end_mileage` is
/// the value it held before the edit. `later_trips` are the strictly-later
/// trips of the same mileage log, earliest first.
///
/// The rollover shift is applied to each later trip independently - shifts
/// never compound beyond +1000 per trip. The carry touches at most the
/// first later trip.
///
/// # Errors
///
/// `ConsistencyViolation` if the new end mileage is below the edited
/// trip's start mileage, if a carry would leave the next trip with a start
/// mileage above its end mileage, or if the difference has no defined
/// correction. On error no partial cascade is returned.
pub fn reconcile_odometer(
    edited: &Trip,
    original_end_mileage: i64,
    later_trips: &[Trip],
) -> Result<Vec<Trip>, FleetError> {
    if edited.end_mileage < edited.start_mileage {
        return Err(FleetError::consistency(format!(
            "end mileage ({}) cannot be less than start mileage ({})",
            edited.end_mileage, edited.start_mileage
        )));
    }

    let diff = edited.end_mileage - original_end_mileage;

    match CascadeAction::classify(diff)? {
        CascadeAction::NoChange => Ok(Vec::new()),
        CascadeAction::Rollover => {
            debug!(trip = %edited.id, "odometer rollover, shifting later trips by +1000");
            let shifted = later_trips
                .iter()
                .map(|t| {
                    let mut t = t.clone();
                    t.start_mileage += ROLLOVER_MILES;
                    t.end_mileage += ROLLOVER_MILES;
                    t
                })
                .collect();
            Ok(shifted)
        }
        CascadeAction::Carry => {
            let Some(next) = later_trips.first() else {
                // Last trip in the log; there is nothing to carry into.
                return Ok(Vec::new());
            };

            debug!(trip = %edited.id, diff, "carrying new end mileage into next trip");
            let mut next = next.clone();
            next.start_mileage = edited.end_mileage;

            if next.start_mileage > next.end_mileage {
                return Err(FleetError::consistency(format!(
                    "start mileage ({}) cannot be greater than end mileage ({})",
                    next.start_mileage, next.end_mileage
                )));
            }

            Ok(vec![next])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{MemberId, MileageLogId, TripId};

    fn trip(start: i64, end: i64) -> Trip {
        Trip::new(
            TripId::new(),
            MileageLogId::new(),
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            start,
            end,
        )
        .with_rider(MemberId::new())
    }

    #[test]
    fn test_classify() {
        assert_eq!(CascadeAction::classify(0).unwrap(), CascadeAction::NoChange);
        assert_eq!(
            CascadeAction::classify(1000).unwrap(),
            CascadeAction::Rollover
        );
        assert_eq!(CascadeAction::classify(300).unwrap(), CascadeAction::Carry);
        assert_eq!(CascadeAction::classify(-300).unwrap(), CascadeAction::Carry);
        assert!(CascadeAction::classify(-1000).is_err());
        assert!(CascadeAction::classify(2000).is_err());
    }

    #[test]
    fn test_no_change_returns_empty_set() {
        let edited = trip(100, 200);
        let later = [trip(200, 250)];
        let changed = reconcile_odometer(&edited, 200, &later).unwrap();
        assert!(changed.is_empty());
    }

    #[test]
    fn test_rollover_shifts_every_later_trip() {
        // End mileage corrected from 400 to 1400: the display wrapped.
        let edited = trip(300, 1400);
        let later = [trip(500, 600), trip(600, 700)];

        let changed = reconcile_odometer(&edited, 400, &later).unwrap();

        assert_eq!(changed.len(), 2);
        assert_eq!((changed[0].start_mileage, changed[0].end_mileage), (1500, 1600));
        assert_eq!((changed[1].start_mileage, changed[1].end_mileage), (1600, 1700));
    }

    #[test]
    fn test_rollover_with_no_later_trips() {
        let edited = trip(300, 1400);
        let changed = reconcile_odometer(&edited, 400, &[]).unwrap();
        assert!(changed.is_empty());
    }

    #[test]
    fn test_carry_updates_only_next_trip() {
        let edited = trip(900, 1050);
        let later = [trip(1000, 1200), trip(1200, 1300)];

        let changed = reconcile_odometer(&edited, 1000, &later).unwrap();

        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].start_mileage, 1050);
        assert_eq!(changed[0].end_mileage, 1200);
    }

    #[test]
    fn test_carry_backward() {
        let edited = trip(900, 950);
        let later = [trip(1000, 1200)];

        let changed = reconcile_odometer(&edited, 1000, &later).unwrap();

        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].start_mileage, 950);
    }

    #[test]
    fn test_carry_past_next_trip_end_is_a_violation() {
        // +300 pushes the next trip's start to 1300, above its end of 1200.
        let edited = trip(900, 1300);
        let later = [trip(1000, 1200)];

        let err = reconcile_odometer(&edited, 1000, &later).unwrap_err();
        assert!(matches!(err, FleetError::ConsistencyViolation(_)));
    }

    #[test]
    fn test_end_below_start_is_a_violation() {
        let edited = trip(900, 800);
        let err = reconcile_odometer(&edited, 1000, &[]).unwrap_err();
        assert!(matches!(err, FleetError::ConsistencyViolation(_)));
    }

    #[test]
    fn test_undefined_differences_are_violations() {
        let edited = trip(900, 3000);
        let later = [trip(1000, 1200)];
        assert!(reconcile_odometer(&edited, 1000, &later).is_err());

        // A negative rollover is not a defined correction either.
        let edited = trip(0, 0);
        assert!(reconcile_odometer(&edited, 1000, &later).is_err());
    }

    #[test]
    fn test_validate_end_mileage_field_error() {
        // Small forward shift past the next trip's end: reported on the
        // field so the form can redisplay it.
        let err = validate_end_mileage(900, 1000, 1300, Some(1200)).unwrap_err();
        assert!(err.is_field_error());

        assert!(validate_end_mileage(900, 1000, 1100, Some(1200)).is_ok());
        // No later trip: nothing to check against.
        assert!(validate_end_mileage(900, 1000, 1300, None).is_ok());
    }

    #[test]
    fn test_validate_end_mileage_below_start() {
        let err = validate_end_mileage(900, 1000, 850, Some(1200)).unwrap_err();
        assert!(matches!(err, FleetError::ConsistencyViolation(_)));
    }
}
