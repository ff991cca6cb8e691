//! Government service guide entity.

use serde::{Deserialize, Serialize};

use crate::domain::search::Searchable;

/// Where a service can be requested in person
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideOffice {
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub hours: String,
}

/// Step-by-step guide for one government service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceGuide {
    pub id: String,
    pub title: String,
    pub category: String,
    pub summary: String,
    pub steps: Vec<String>,
    pub required_documents: Vec<String>,
    /// Fee as displayed, e.g. "Free" or "25.00"
    pub fee: String,
    pub processing_time: String,
    pub offices: Vec<GuideOffice>,
}

impl Searchable for ServiceGuide {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.title.as_str(),
            self.category.as_str(),
            self.summary.as_str(),
        ];
        fields.extend(self.required_documents.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }
}
