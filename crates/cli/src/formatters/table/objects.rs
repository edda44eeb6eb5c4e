//! Mixed directory object table formatter.

use anyhow::Result;
use directory_client::DirectoryObject;

use crate::formatters::common::{format_missing, truncate};

/// Format objects of any kind, one row per object.
pub fn format_objects(objects: &[DirectoryObject]) -> Result<String> {
    let mut output = String::new();

    if objects.is_empty() {
        output.push_str("No objects found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<18} {:<40} {}\n",
        "TYPE", "DISPLAY NAME", "OBJECT ID"
    ));
    output.push_str(&format!(
        "{:<18} {:<40} {}\n",
        "====", "============", "========="
    ));

    for object in objects {
        output.push_str(&format!(
            "{:<18} {:<40} {}\n",
            object.kind().as_str(),
            truncate(format_missing(object.display_name()), 40),
            object.object_id(),
        ));
    }

    Ok(output)
}
