//! Enquiries service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::enquiries::{
        data::NewEnquiry,
        errors::EnquiriesServiceError,
        records::{EnquiryId, EnquiryRecord},
        repository::PgEnquiriesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgEnquiriesService {
    repository: PgEnquiriesRepository,
}

impl PgEnquiriesService {
    #[must_use]
    pub fn new(db: &Db) -> Self {
        Self {
            repository: PgEnquiriesRepository::new(db.pool().clone()),
        }
    }
}

#[async_trait]
impl EnquiriesService for PgEnquiriesService {
    async fn list_enquiries(&self) -> Result<Vec<EnquiryRecord>, EnquiriesServiceError> {
        self.repository
            .list_enquiries()
            .await
            .map_err(Into::into)
    }

    async fn get_enquiry(&self, enquiry: EnquiryId) -> Result<EnquiryRecord, EnquiriesServiceError> {
        self.repository
            .get_enquiry(enquiry)
            .await
            .map_err(Into::into)
    }

    async fn create_enquiry(
        &self,
        enquiry: NewEnquiry,
    ) -> Result<EnquiryRecord, EnquiriesServiceError> {
        enquiry.validate()?;

        self.repository
            .create_enquiry(enquiry)
            .await
            .map_err(Into::into)
    }

    async fn delete_enquiry(
        &self,
        enquiry: EnquiryId,
    ) -> Result<EnquiryRecord, EnquiriesServiceError> {
        self.repository
            .delete_enquiry(enquiry)
            .await
            .map_err(Into::into)
    }
}

#[automock]
#[async_trait]
pub trait EnquiriesService: Send + Sync {
    /// Retrieves all enquiries, most recent first.
    async fn list_enquiries(&self) -> Result<Vec<EnquiryRecord>, EnquiriesServiceError>;

    /// Retrieve a single enquiry.
    async fn get_enquiry(&self, enquiry: EnquiryId) -> Result<EnquiryRecord, EnquiriesServiceError>;

    /// Stores a new enquiry and returns the persisted row.
    async fn create_enquiry(
        &self,
        enquiry: NewEnquiry,
    ) -> Result<EnquiryRecord, EnquiriesServiceError>;

    /// Deletes an enquiry, returning the row that was removed.
    async fn delete_enquiry(
        &self,
        enquiry: EnquiryId,
    ) -> Result<EnquiryRecord, EnquiriesServiceError>;
}
