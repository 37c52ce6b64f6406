use std::path::Path;

use link_fs::NormalizedPath;

use crate::error::Result;

pub fn run_detect(extension_root: &Path) -> Result<()> {
    let root = NormalizedPath::new(std::path::absolute(extension_root)?);
    let kind = link_manifest::detect_extension_type(&root)?;
    println!("{kind}");
    Ok(())
}
