//! Init command implementation.

use std::path::PathBuf;

use crate::domain::AppError;

pub fn run_init(path: Option<PathBuf>) -> Result<(), AppError> {
    let written = match path {
        Some(root) => crate::app::api::init_at(root)?,
        None => crate::app::api::init()?,
    };
    println!("✅ Created {}", written.display());
    Ok(())
}
