// src/file.rs

use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::info;

use crate::config::consts::{EXPORT_EXT, EXPORT_SEP};
use crate::config::RunOptions;
use crate::csv::{parse_rows, write_row};
use crate::error::{Result, ScrapeError};
use crate::store::ResultTable;

/// `<out_dir>/<out_name>.csv`
pub fn out_path(opts: &RunOptions) -> PathBuf {
    opts.out_dir.join(join!(&opts.out_name, ".", EXPORT_EXT))
}

/// Write the table as `|`-separated UTF-8 text, header first, no index column.
/// Returns the path written to.
///
/// An empty table (no rows, or no columns) is refused before anything touches
/// the disk.
pub fn export_table(table: &ResultTable, opts: &RunOptions) -> Result<PathBuf> {
    if table.row_count() == 0 {
        return Err(ScrapeError::EmptyData(s!("tried to export a table with 0 rows")));
    }
    if table.column_count() == 0 {
        return Err(ScrapeError::EmptyData(s!("tried to export a table with 0 columns")));
    }

    let path = out_path(opts);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    // Stage next to the target, then rename: a failed write leaves no partial file.
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)?;
    {
        let mut out = BufWriter::new(&mut staged);
        write_row(&mut out, &table.headers, EXPORT_SEP)?;
        for row in &table.rows {
            write_row(&mut out, row, EXPORT_SEP)?;
        }
        out.flush()?;
    }
    staged.persist(&path).map_err(|e| ScrapeError::Io(e.error))?;

    info!("Data loaded at {}", path.display());
    Ok(path)
}

/// Read an exported file back: first line is the header.
pub fn read_table(path: &Path) -> Result<ResultTable> {
    let text = fs::read_to_string(path)?;
    let mut rows = parse_rows(&text, EXPORT_SEP);
    if rows.is_empty() {
        return Ok(ResultTable::default());
    }
    let headers = rows.remove(0);
    Ok(ResultTable { headers, rows })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(ScrapeError::Io(std::io::Error::other(format!(
            "path exists but is not a directory: {}",
            dir.display()
        ))));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
