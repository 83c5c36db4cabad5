//! Linked-resource extraction from `.project`

use crate::error::St2MakeResult;
use crate::models::SourceManifest;
use crate::paths::normalize_source_location;

use super::{child_elements, child_text, Descriptor};

/// `<type>` value of a file link (folders are `2`).
const FILE_LINK_TYPE: &str = "1";

/// Collect every file link's location, normalized and classified.
pub fn extract_sources(descriptor: &Descriptor) -> St2MakeResult<SourceManifest> {
    let doc = descriptor.parse()?;
    let root = doc.root_element();

    let locations = child_elements(root, "linkedResources")
        .flat_map(|resources| child_elements(resources, "link"))
        .filter(|link| child_text(*link, "type") == Some(FILE_LINK_TYPE))
        .filter_map(|link| child_text(link, "locationURI"))
        .map(normalize_source_location);

    SourceManifest::from_paths(locations)
}
