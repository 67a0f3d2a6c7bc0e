#![allow(dead_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A contact form input. Serialized with the client's camelCase names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    Email,
    Company,
    Position,
    InquiryType,
    Message,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::Email,
        Field::Company,
        Field::Position,
        Field::InquiryType,
        Field::Message,
    ];

    /// Fields that must be non-blank before a submission is dispatched.
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Company | Field::Position)
    }
}

/// Per-field error messages. Only failing fields have an entry.
pub type ValidationErrors = BTreeMap<Field, String>;

/// Current values of every form input. All fields are always present;
/// missing keys in an incoming payload default to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactFormState {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub position: String,
    pub inquiry_type: String,
    pub message: String,
}

impl ContactFormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Position => &self.position,
            Field::InquiryType => &self.inquiry_type,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Position => &mut self.position,
            Field::InquiryType => &mut self.inquiry_type,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&f| self.get(f).is_empty())
    }
}

/// Choices offered by the client's inquiry-type select. Validation only
/// requires a non-blank value, so free-form values are still accepted.
pub const INQUIRY_TYPES: &[(&str, &str)] = &[
    ("internship", "Internship Opportunity"),
    ("fulltime", "Full-time Position"),
    ("freelance", "Freelance/Contract Work"),
    ("collaboration", "Project Collaboration"),
    ("networking", "Professional Networking"),
    ("other", "Other"),
];
