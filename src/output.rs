//! Persisting encoded images

use crate::rendering::RenderedOutput;
use crate::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write `output` to `path`.
///
/// Bytes go to a sibling temporary file that is renamed over the destination
/// once fully flushed; on any failure the temporary is removed and the
/// destination is left untouched.
pub fn write_png(path: &Path, output: &RenderedOutput) -> Result<()> {
    let tmp = temp_path(path);
    let res = write_then_rename(&tmp, path, &output.png_data);
    if res.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    res?;
    log::info!(
        "wrote {}x{} image to {}",
        output.width,
        output.height,
        path.display()
    );
    Ok(())
}

fn write_then_rename(tmp: &Path, dest: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(tmp)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    drop(file);
    fs::rename(tmp, dest)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "output.png".into());
    name.push(format!(".{}.tmp", std::process::id()));
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("asciisnap-output-{}-{}", tag, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample() -> RenderedOutput {
        RenderedOutput {
            width: 1,
            height: 1,
            transparent: false,
            png_data: vec![1, 2, 3],
        }
    }

    #[test]
    fn writes_bytes_and_leaves_no_temp() {
        let dir = scratch_dir("ok");
        let dest = dir.join("out.png");
        write_png(&dest, &sample()).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), vec![1, 2, 3]);
        let leftovers: Vec<_> = fs::read_dir(&dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_directory_is_io_error_and_creates_nothing() {
        let dir = scratch_dir("missing");
        let dest = dir.join("no-such-dir").join("out.png");
        let err = write_png(&dest, &sample()).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
        assert!(!dest.exists());
        fs::remove_dir_all(&dir).ok();
    }
}
