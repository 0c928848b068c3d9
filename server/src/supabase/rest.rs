//! PostgREST table API: filtered selects, exact counts, single-row inserts.

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use reqwest::header::{ACCEPT, CONTENT_RANGE, HeaderMap};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::rest_error;
use super::{SupabaseClient, SupabaseError};

const SINGLE_OBJECT: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gte,
    Lt,
}

impl FilterOp {
    fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "eq",
            Self::Gte => "gte",
            Self::Lt => "lt",
        }
    }
}

/// One `column=op.value` condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: &'static str,
    pub op: FilterOp,
    pub value: String,
}

impl Filter {
    pub fn eq(column: &'static str, value: impl Into<String>) -> Self {
        Self { column, op: FilterOp::Eq, value: value.into() }
    }

    pub fn gte(column: &'static str, value: impl Into<String>) -> Self {
        Self { column, op: FilterOp::Gte, value: value.into() }
    }

    pub fn lt(column: &'static str, value: impl Into<String>) -> Self {
        Self { column, op: FilterOp::Lt, value: value.into() }
    }

    fn query_pair(&self) -> (String, String) {
        (self.column.to_owned(), format!("{}.{}", self.op.as_str(), self.value))
    }
}

/// Parameters of a `select=*` request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectQuery {
    pub filters: Vec<Filter>,
    /// Column and descending flag.
    pub order: Option<(&'static str, bool)>,
    /// Zero-based offset and row limit, sent as a `Range` header.
    pub range: Option<(u32, u32)>,
    /// Ask for `count=exact` and report the total.
    pub count: bool,
}

impl SelectQuery {
    #[must_use]
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    #[must_use]
    pub fn order_desc(mut self, column: &'static str) -> Self {
        self.order = Some((column, true));
        self
    }

    #[must_use]
    pub fn range(mut self, offset: u32, limit: u32) -> Self {
        self.range = Some((offset, limit));
        self
    }

    #[must_use]
    pub fn exact_count(mut self) -> Self {
        self.count = true;
        self
    }

    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![("select".to_owned(), "*".to_owned())];
        pairs.extend(self.filters.iter().map(Filter::query_pair));
        if let Some((column, desc)) = self.order {
            let direction = if desc { "desc" } else { "asc" };
            pairs.push(("order".to_owned(), format!("{column}.{direction}")));
        }
        pairs
    }
}

/// Rows of one select plus the exact total when it was requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Rows<T> {
    pub rows: Vec<T>,
    pub total: Option<u64>,
}

/// Inclusive `Range` header value for `limit` rows from `offset`.
///
/// Returns `None` for `limit == 0`, which PostgREST cannot express.
#[must_use]
pub fn range_header(offset: u32, limit: u32) -> Option<String> {
    let last = offset.checked_add(limit.checked_sub(1)?)?;
    Some(format!("{offset}-{last}"))
}

/// Total from a `Content-Range` value: `0-9/57`, `*/0`, or `0-9/*` (unknown).
#[must_use]
pub fn parse_content_range(value: &str) -> Option<u64> {
    let (_, total) = value.trim().rsplit_once('/')?;
    total.trim().parse().ok()
}

fn total_from_headers(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(CONTENT_RANGE)
        .and_then(|v| v.to_str().ok())
        .and_then(parse_content_range)
}

impl SupabaseClient {
    fn table_url(&self, table: &str) -> String {
        self.endpoint(&format!("/rest/v1/{table}"))
    }

    /// `GET /rest/v1/{table}?select=*&...`
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] on transport failures, error statuses, or an
    /// undecodable body.
    pub async fn select<T: DeserializeOwned>(
        &self,
        access_token: &str,
        table: &str,
        query: &SelectQuery,
    ) -> Result<Rows<T>, SupabaseError> {
        let mut req = self
            .authorized(self.http.get(self.table_url(table)), Some(access_token))
            .query(&query.query_pairs());
        if query.count {
            req = req.header("Prefer", "count=exact");
        }
        if let Some(range) = query.range.and_then(|(offset, limit)| range_header(offset, limit)) {
            req = req.header("Range-Unit", "items").header("Range", range);
        }

        let resp = req.send().await?;
        if !resp.status().is_success() {
            return Err(rest_error(resp).await);
        }
        let total = if query.count { total_from_headers(resp.headers()) } else { None };
        let rows = resp
            .json::<Vec<T>>()
            .await
            .map_err(|e| SupabaseError::Decode(e.to_string()))?;
        Ok(Rows { rows, total })
    }

    /// Exact row count for `filters` via `HEAD` with `Prefer: count=exact`.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] on failure or when the count header is missing.
    pub async fn count(&self, access_token: &str, table: &str, filters: &[Filter]) -> Result<u64, SupabaseError> {
        let query = SelectQuery { filters: filters.to_vec(), ..SelectQuery::default() };
        let resp = self
            .authorized(self.http.head(self.table_url(table)), Some(access_token))
            .query(&query.query_pairs())
            .header("Prefer", "count=exact")
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(rest_error(resp).await);
        }
        total_from_headers(resp.headers()).ok_or_else(|| SupabaseError::Decode("missing Content-Range total".to_owned()))
    }

    /// Insert one row and return it as stored.
    ///
    /// # Errors
    ///
    /// Returns [`SupabaseError`] on failure, including constraint violations.
    pub async fn insert_single<B, T>(&self, access_token: &str, table: &str, row: &B) -> Result<T, SupabaseError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let resp = self
            .authorized(self.http.post(self.table_url(table)), Some(access_token))
            .header("Prefer", "return=representation")
            .header(ACCEPT, SINGLE_OBJECT)
            .json(row)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(rest_error(resp).await);
        }
        resp.json::<T>()
            .await
            .map_err(|e| SupabaseError::Decode(e.to_string()))
    }
}
