use serde::Serialize;
use std::io;
use std::path::{Path, PathBuf};

/// Ensure the output directory exists
pub async fn ensure_directory(path: &Path) -> io::Result<()> {
    if !path.exists() {
        tokio::fs::create_dir_all(path).await?;
        tracing::info!("Created directory: {}", path.display());
    }

    Ok(())
}

/// File name a fetched document is stored under, mirroring the remote name
pub fn document_file_name(document: &str, locale_segment: &str) -> String {
    format!("{}-{}.json", document, locale_segment)
}

/// Write `value` as pretty JSON to `path`
pub async fn write_json<T: Serialize>(path: &Path, value: &T) -> io::Result<PathBuf> {
    let json_data = serde_json::to_string_pretty(value).map_err(|e| {
        io::Error::new(
            io::ErrorKind::Other,
            format!("Failed to serialize JSON: {}", e),
        )
    })?;

    tokio::fs::write(path, json_data).await.map_err(|e| {
        io::Error::new(io::ErrorKind::Other, format!("Failed to write file: {}", e))
    })?;

    Ok(path.to_path_buf())
}
