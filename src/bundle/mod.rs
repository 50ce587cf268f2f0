//! Settings bundle model
//!
//! A settings bundle is a directory of property lists read by the iOS
//! Settings app. The generated bundle has one entry page (`Root.plist`)
//! linking to an index of packages (`Acknowledgements.plist`), which links
//! to one page per package license.
//!
//! ## Module Organization
//!
//! - `mod.rs`: [`BundleDescriptor`] and its file name mapping
//! - `page.rs`: Property list page shapes and encoding
//! - `writer.rs`: Writing descriptors into the bundle directory

pub mod page;
pub mod writer;

use crate::resolver::ResolvedLicense;

pub use writer::BundleWriter;

/// Directory name of the generated bundle
pub const BUNDLE_DIR_NAME: &str = "Settings.bundle";

/// Extension of every descriptor file
pub const PLIST_EXTENSION: &str = "plist";

/// Page name of the root descriptor
pub const ROOT_PAGE: &str = "Root";

/// Page name of the acknowledgements index, also the root entry's title
pub const ACKNOWLEDGEMENTS_PAGE: &str = "Acknowledgements";

/// One property list file in the bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BundleDescriptor<'a> {
    /// Entry point linking to the acknowledgements index
    Root,
    /// One link per package; sorted when encoded
    AcknowledgementsIndex { names: Vec<&'a str> },
    /// One package's license text
    LicensePage(&'a ResolvedLicense),
}

impl<'a> BundleDescriptor<'a> {
    /// Index over the given licenses
    pub fn index_of(licenses: &'a [ResolvedLicense]) -> Self {
        BundleDescriptor::AcknowledgementsIndex {
            names: licenses.iter().map(|l| l.name.as_str()).collect(),
        }
    }

    /// Page name used in `File` links, without extension
    pub fn page_name(&self) -> &'a str {
        match *self {
            BundleDescriptor::Root => ROOT_PAGE,
            BundleDescriptor::AcknowledgementsIndex { .. } => ACKNOWLEDGEMENTS_PAGE,
            BundleDescriptor::LicensePage(info) => &info.name,
        }
    }

    /// File name inside the bundle directory
    pub fn file_name(&self) -> String {
        format!("{}.{PLIST_EXTENSION}", self.page_name())
    }
}
