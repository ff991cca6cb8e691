//! Citizen directory entry.

use serde::{Deserialize, Serialize};

use crate::domain::search::Searchable;

/// A person or desk reachable through the municipal directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryContact {
    pub id: String,
    pub name: String,
    pub department: String,
    pub title: String,
    pub phone: String,
    pub email: Option<String>,
    pub office: String,
    pub tags: Vec<String>,
}

impl Searchable for DirectoryContact {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.department.as_str(),
            self.title.as_str(),
            self.office.as_str(),
        ];
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn category(&self) -> Option<&str> {
        Some(&self.department)
    }
}
