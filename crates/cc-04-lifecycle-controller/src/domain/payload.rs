//! Client input for issue operations.
//!
//! These types only carry fields a client is allowed to choose. Reporter,
//! status and resolution have no place here, so any such keys in a request
//! body are dropped during deserialization.

use cc_02_issue_store::{IssueFilter, Location, NewIssue};
use serde::Deserialize;
use shared_types::{
    CivicError, GeoPoint, ImageRef, IssueCategory, IssuePriority, IssueStatus,
};

/// Location as submitted. The ward is accepted but ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftLocation {
    #[serde(default)]
    pub address: String,
    #[serde(default, alias = "wardNumber")]
    pub ward: Option<String>,
    #[serde(default)]
    pub coordinates: Option<GeoPoint>,
}

/// A new issue report.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<IssueCategory>,
    #[serde(default)]
    pub location: DraftLocation,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    #[serde(default)]
    pub priority: Option<IssuePriority>,
}

impl IssueDraft {
    /// Validates the draft and places it in `ward`.
    pub fn into_new_issue(self, ward: String) -> Result<NewIssue, CivicError> {
        let title = required(self.title, "Title")?;
        let description = required(self.description, "Description")?;
        let category = self
            .category
            .ok_or_else(|| CivicError::validation("Category is required"))?;
        let address = required(self.location.address, "Address")?;

        Ok(NewIssue {
            title,
            description,
            category,
            location: Location {
                address,
                ward,
                coordinates: self.location.coordinates,
            },
            images: self.images,
            priority: self.priority.unwrap_or_default(),
        })
    }
}

/// Requested status change plus optional resolution details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: IssueStatus,
    #[serde(default, alias = "resolutionNotes")]
    pub notes: Option<String>,
    #[serde(default)]
    pub after_image: Option<String>,
}

impl StatusUpdate {
    pub fn to(status: IssueStatus) -> Self {
        Self {
            status,
            notes: None,
            after_image: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_after_image(mut self, url: impl Into<String>) -> Self {
        self.after_image = Some(url.into());
        self
    }
}

/// Listing parameters. Absent values fall back to configured defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(flatten)]
    pub filter: IssueFilter,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default, alias = "limit")]
    pub page_size: Option<usize>,
}

impl ListQuery {
    pub fn page(page: usize, page_size: usize) -> Self {
        Self {
            filter: IssueFilter::default(),
            page: Some(page),
            page_size: Some(page_size),
        }
    }

    pub fn with_filter(mut self, filter: IssueFilter) -> Self {
        self.filter = filter;
        self
    }
}

fn required(value: String, field: &str) -> Result<String, CivicError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(CivicError::validation(format!("{field} is required")))
    } else {
        Ok(trimmed.to_string())
    }
}
