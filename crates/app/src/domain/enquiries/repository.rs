//! Enquiries Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query_as};

use crate::domain::enquiries::{
    data::NewEnquiry,
    records::{EnquiryId, EnquiryRecord},
};

const LIST_ENQUIRIES_SQL: &str = include_str!("sql/list_enquiries.sql");
const GET_ENQUIRY_SQL: &str = include_str!("sql/get_enquiry.sql");
const CREATE_ENQUIRY_SQL: &str = include_str!("sql/create_enquiry.sql");
const DELETE_ENQUIRY_SQL: &str = include_str!("sql/delete_enquiry.sql");

/// PostgreSQL-backed enquiries repository.
///
/// Every method runs exactly one statement against the pool, so a connection
/// is only checked out for the lifetime of that statement.
#[derive(Debug, Clone)]
pub(crate) struct PgEnquiriesRepository {
    pool: PgPool,
}

impl PgEnquiriesRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) async fn list_enquiries(&self) -> Result<Vec<EnquiryRecord>, sqlx::Error> {
        query_as::<Postgres, EnquiryRecord>(LIST_ENQUIRIES_SQL)
            .fetch_all(&self.pool)
            .await
    }

    pub(crate) async fn get_enquiry(&self, enquiry: EnquiryId) -> Result<EnquiryRecord, sqlx::Error> {
        query_as::<Postgres, EnquiryRecord>(GET_ENQUIRY_SQL)
            .bind(enquiry.into_raw())
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn create_enquiry(
        &self,
        enquiry: NewEnquiry,
    ) -> Result<EnquiryRecord, sqlx::Error> {
        query_as::<Postgres, EnquiryRecord>(CREATE_ENQUIRY_SQL)
            .bind(enquiry.name)
            .bind(enquiry.email)
            .bind(enquiry.phone)
            .bind(enquiry.message)
            .bind(enquiry.product)
            .fetch_one(&self.pool)
            .await
    }

    pub(crate) async fn delete_enquiry(
        &self,
        enquiry: EnquiryId,
    ) -> Result<EnquiryRecord, sqlx::Error> {
        query_as::<Postgres, EnquiryRecord>(DELETE_ENQUIRY_SQL)
            .bind(enquiry.into_raw())
            .fetch_one(&self.pool)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for EnquiryRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: EnquiryId::from_raw(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            phone: row.try_get("phone")?,
            message: row.try_get("message")?,
            product: row.try_get("product")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
