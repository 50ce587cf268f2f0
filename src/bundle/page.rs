//! Property list page shapes
//!
//! Every descriptor encodes to a dictionary with a `PreferenceSpecifiers`
//! array, the format the Settings app expects for a preference pane.

use serde::Serialize;

use super::{ACKNOWLEDGEMENTS_PAGE, BundleDescriptor, ROOT_PAGE};
use crate::error::{AcknowledgementsError, Result};

/// A preference pane
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PreferencePage<'a> {
    /// Strings table used to localise titles on this page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strings_table: Option<&'a str>,
    pub preference_specifiers: Vec<PreferenceSpecifier<'a>>,
}

/// One entry of a preference pane
#[derive(Debug, Serialize)]
#[serde(tag = "Type")]
pub enum PreferenceSpecifier<'a> {
    /// Row that drills down into another page of the bundle
    #[serde(rename = "PSChildPaneSpecifier", rename_all = "PascalCase")]
    ChildPane { title: &'a str, file: &'a str },
    /// Group whose footer shows a block of text
    #[serde(rename = "PSGroupSpecifier", rename_all = "PascalCase")]
    Group { footer_text: &'a str },
}

impl<'a> BundleDescriptor<'a> {
    /// Page content for this descriptor
    pub fn page(&self) -> PreferencePage<'a> {
        match *self {
            BundleDescriptor::Root => PreferencePage {
                strings_table: Some(ROOT_PAGE),
                preference_specifiers: vec![PreferenceSpecifier::ChildPane {
                    title: ACKNOWLEDGEMENTS_PAGE,
                    file: ACKNOWLEDGEMENTS_PAGE,
                }],
            },
            BundleDescriptor::AcknowledgementsIndex { ref names } => {
                let mut sorted = names.clone();
                sorted.sort_unstable();
                PreferencePage {
                    strings_table: None,
                    preference_specifiers: sorted
                        .into_iter()
                        .map(|name| PreferenceSpecifier::ChildPane {
                            title: name,
                            file: name,
                        })
                        .collect(),
                }
            }
            BundleDescriptor::LicensePage(info) => PreferencePage {
                strings_table: None,
                preference_specifiers: vec![PreferenceSpecifier::Group {
                    footer_text: &info.license_text,
                }],
            },
        }
    }

    /// XML property list bytes for this descriptor
    pub fn to_plist(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        plist::to_writer_xml(&mut buffer, &self.page())
            .map_err(|e| AcknowledgementsError::PropertyListEncodeFailed {
                name: self.file_name(),
                reason: e.to_string(),
            })?;
        Ok(buffer)
    }
}
