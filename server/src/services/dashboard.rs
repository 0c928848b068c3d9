//! Dashboard aggregation: totals, month-over-month counts, latest trips.
//!
//! DESIGN
//! ======
//! Every figure is an exact count from the table API, issued concurrently.
//! Month boundaries are computed in UTC from an injected `now`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;

use time::{Date, Month, OffsetDateTime, Time};
use tourvisto_ui::net::types::{DashboardStats, DashboardSummary, MonthlyCount};

use super::backend::{Backend, Table};
use super::{ServiceError, timestamp};
use crate::supabase::SupabaseError;
use crate::supabase::rest::Filter;

pub const LATEST_TRIPS: u32 = 4;

/// Start of last month, this month, and next month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub last_start: OffsetDateTime,
    pub current_start: OffsetDateTime,
    pub next_start: OffsetDateTime,
}

fn month_start(year: i32, month: Month) -> OffsetDateTime {
    Date::from_calendar_date(year, month, 1)
        .unwrap_or(Date::MIN)
        .with_time(Time::MIDNIGHT)
        .assume_utc()
}

#[must_use]
pub fn month_window(now: OffsetDateTime) -> MonthWindow {
    let now = now.to_offset(time::UtcOffset::UTC);
    let (year, month) = (now.year(), now.month());
    let (last_year, last_month) = if month == Month::January { (year - 1, Month::December) } else { (year, month.previous()) };
    let (next_year, next_month) = if month == Month::December { (year + 1, Month::January) } else { (year, month.next()) };
    MonthWindow {
        last_start: month_start(last_year, last_month),
        current_start: month_start(year, month),
        next_start: month_start(next_year, next_month),
    }
}

fn between(column: &'static str, from: OffsetDateTime, to: OffsetDateTime) -> [Filter; 2] {
    [Filter::gte(column, timestamp(from)), Filter::lt(column, timestamp(to))]
}

async fn monthly(
    backend: &dyn Backend,
    access_token: &str,
    table: Table,
    column: &'static str,
    scope: &[Filter],
    window: MonthWindow,
) -> Result<MonthlyCount, SupabaseError> {
    let current: Vec<Filter> = scope
        .iter()
        .cloned()
        .chain(between(column, window.current_start, window.next_start))
        .collect();
    let last: Vec<Filter> = scope
        .iter()
        .cloned()
        .chain(between(column, window.last_start, window.current_start))
        .collect();
    let (current_month, last_month) = futures::try_join!(
        backend.count(access_token, table, &current),
        backend.count(access_token, table, &last),
    )?;
    Ok(MonthlyCount { current_month, last_month })
}

/// Stats cards plus the latest trips.
///
/// # Errors
///
/// [`ServiceError::Backend`] if any count or the trip listing fails.
pub async fn load_dashboard(
    backend: &dyn Backend,
    access_token: &str,
    now: OffsetDateTime,
) -> Result<DashboardSummary, ServiceError> {
    let window = month_window(now);
    let active_scope = [Filter::eq("status", "user")];

    let (total_users, users_joined, total_trips, trips_created, active_users, active_users_joined, latest) = futures::try_join!(
        backend.count(access_token, Table::Profiles, &[]),
        monthly(backend, access_token, Table::Profiles, "joined_at", &[], window),
        backend.count(access_token, Table::Trips, &[]),
        monthly(backend, access_token, Table::Trips, "created_at", &[], window),
        backend.count(access_token, Table::Profiles, &active_scope),
        monthly(backend, access_token, Table::Profiles, "joined_at", &active_scope, window),
        backend.list_trips(access_token, 0, LATEST_TRIPS),
    )?;

    Ok(DashboardSummary {
        stats: DashboardStats {
            total_users,
            users_joined,
            total_trips,
            trips_created,
            active_users,
            active_users_joined,
        },
        trips: latest.rows,
    })
}
