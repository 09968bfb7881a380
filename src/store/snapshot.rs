use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::models::Hit;

/// Replaces the snapshot at `path` with `hits`, pretty-printed.
pub fn write(path: &Path, hits: &[Hit]) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    let mut out = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut out, hits)?;
    out.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

pub fn read(path: &Path) -> Result<Vec<Hit>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::MissingSnapshot { path: path.to_path_buf() })
        }
        Err(e) => return Err(Error::io(path, e)),
    };
    let hits = serde_json::from_reader(BufReader::new(file))?;
    Ok(hits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Map, Value};
    use tempfile::TempDir;

    fn sample(n: u64) -> Hit {
        let mut extra = Map::new();
        extra.insert("id".to_string(), Value::from(n));
        Hit {
            large_image_url: format!("https://pixabay.com/get/img-{n}.jpg"),
            page_url: format!("https://pixabay.com/photos/img-{n}/"),
            user: "someone".to_string(),
            user_id: n,
            extra,
        }
    }

    #[test]
    fn test_write_then_read_keeps_order() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("__results.json");
        let hits = vec![sample(3), sample(1), sample(2)];
        write(&path, &hits).unwrap();
        assert_eq!(read(&path).unwrap(), hits);
    }

    #[test]
    fn test_write_overwrites() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("__results.json");
        write(&path, &[sample(1), sample(2)]).unwrap();
        write(&path, &[sample(9)]).unwrap();
        let hits = read(&path).unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].user_id, 9);
    }

    #[test]
    fn test_read_missing() {
        let tmp = TempDir::new().unwrap();
        let err = read(&tmp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, Error::MissingSnapshot { .. }));
    }
}
