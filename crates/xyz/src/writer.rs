//! Write operations for XYZ records

// crate modules
use crate::error::{Error, Result};
use crate::record::OutputRecord;

// standard library
use std::io::{BufWriter, Write};
use std::path::Path;

// external crates
use tempfile::{Builder, NamedTempFile};

/// Write records to a file
///
/// The first line is the number of records, followed by one line per record
/// in the order given (see [OutputRecord] for the line format).
///
/// The content is written to a temporary file next to `path` and only moved
/// over `path` once everything has been written. An interrupted or failed
/// write therefore never leaves a truncated file behind.
///
/// ```rust, no_run
/// # use femtools_xyz::{write_xyz, OutputRecord};
/// let records = vec![OutputRecord::default(); 3];
/// write_xyz(&records, "./resistivity_xyz_iter0.dat").unwrap();
/// ```
pub fn write_xyz<P: AsRef<Path>>(records: &[OutputRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let create_error = |source: std::io::Error| Error::FileCreate {
        path: path.to_path_buf(),
        source,
    };

    let mut file = init_temp_file(path).map_err(create_error)?;
    {
        let mut writer = BufWriter::new(&mut file);
        write_records(&mut writer, records)?;
        writer.flush()?;
    }

    file.persist(path).map_err(|e| create_error(e.error))?;
    Ok(())
}

/// Write records to any writer
///
/// ```rust
/// # use femtools_xyz::{write_records, OutputRecord};
/// let mut buffer = Vec::new();
/// write_records(&mut buffer, &[OutputRecord::default()]).unwrap();
///
/// let text = String::from_utf8(buffer).unwrap();
/// assert!(text.starts_with("1\n   0.000000e+00"));
/// ```
pub fn write_records<W: Write>(writer: &mut W, records: &[OutputRecord]) -> Result<()> {
    writeln!(writer, "{}", records.len())?;
    for record in records {
        writeln!(writer, "{record}")?;
    }
    Ok(())
}

/// Temporary file in the same directory as `path`, so the final rename
/// never crosses file systems
fn init_temp_file(path: &Path) -> std::io::Result<NamedTempFile> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(".resistivity_xyz").suffix(".tmp");

    // same permissions as a plain File::create, rather than owner-only
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    builder.tempfile_in(directory)
}
