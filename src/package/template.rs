//! Template container support: reuse the style header of an existing
//! packaged document byte-for-byte.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::package::HEADER_PATH;

/// Extract the style header part from a template container.
///
/// The returned bytes are used verbatim; no parsing or merging with a
/// synthesized catalog ever happens.
pub fn extract_template_header<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| Error::Template(format!("cannot open template {}: {e}", path.display())))?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| Error::Template(format!("{} is not a valid container: {e}", path.display())))?;

    let mut entry = archive.by_name(HEADER_PATH).map_err(|_| {
        Error::Template(format!(
            "template {} has no style header part ({HEADER_PATH})",
            path.display()
        ))
    })?;

    let mut bytes = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut bytes)?;
    log::debug!("extracted {} header bytes from template", bytes.len());
    Ok(bytes)
}
