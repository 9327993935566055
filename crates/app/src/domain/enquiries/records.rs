//! Enquiry Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Enquiry Id
pub type EnquiryId = TypedId<EnquiryRecord>;

/// Enquiry Record
#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryRecord {
    /// Store-assigned surrogate key.
    pub id: EnquiryId,

    /// Name of the person enquiring.
    pub name: String,

    pub email: Option<String>,

    pub phone: Option<String>,

    pub message: Option<String>,

    /// Product the enquiry is about.
    pub product: Option<String>,

    /// Insertion time, assigned by the store.
    pub created_at: Timestamp,
}
