//! Date-range derivations for the reservation widget. Reservation creation
//! and payment belong to another subsystem; this module only turns existing
//! reservations into blocked-out calendar days and a quoted total.

use chrono::{Duration, NaiveDate};

use crate::models::reservation::ReservationRow;

/// Every calendar day covered by any reservation, inclusive of both the
/// start and end day. Days are emitted in reservation order and may repeat
/// when reservations overlap.
pub fn disabled_dates(reservations: &[ReservationRow]) -> Vec<NaiveDate> {
    let mut dates = Vec::new();

    for reservation in reservations {
        let start = reservation.start_date.date_naive();
        let end = reservation.end_date.date_naive();

        let mut day = start;
        while day <= end {
            dates.push(day);
            day += Duration::days(1);
        }
    }

    dates
}

/// Quoted total for a stay: nights multiplied by the nightly price. A
/// zero-night selection (same start and end day) falls back to the nightly
/// price itself.
pub fn total_price(start: NaiveDate, end: NaiveDate, nightly_price: i64) -> i64 {
    let day_count = (end - start).num_days();

    if day_count != 0 && nightly_price != 0 {
        day_count * nightly_price
    } else {
        nightly_price
    }
}
