//! Gzip-compressed, pretty-printed JSON files.
//!
//! Files are created or truncated in place. A failure part way through can
//! leave a partial file behind.

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use crate::error::JewelError;

/// Serialize `value` as pretty JSON into a gzip stream over `writer`.
///
/// # Errors
///
/// Returns [`JewelError::Serialization`] if encoding fails and
/// [`JewelError::Io`] if the stream cannot be flushed.
pub fn encode<T, W>(writer: W, value: &T) -> Result<W, JewelError>
where
    T: Serialize + ?Sized,
    W: Write,
{
    let mut encoder = GzEncoder::new(writer, Compression::default());
    serde_json::to_writer_pretty(&mut encoder, value)
        .map_err(|err| JewelError::serialization("<stream>", err))?;
    encoder
        .finish()
        .map_err(|err| JewelError::io("<stream>", err))
}

/// Decode a gzip stream of JSON into `T`.
///
/// # Errors
///
/// Returns [`JewelError::Serialization`] for corrupt or mismatched payloads.
pub fn decode<T, R>(reader: R) -> Result<T, JewelError>
where
    T: DeserializeOwned,
    R: Read,
{
    let decoder = GzDecoder::new(reader);
    serde_json::from_reader(BufReader::new(decoder))
        .map_err(|err| JewelError::serialization("<stream>", err))
}

/// Write `value` to `path` as gzip-compressed pretty JSON.
///
/// # Errors
///
/// Returns [`JewelError::Io`] if the file cannot be created or written and
/// [`JewelError::Serialization`] if the value cannot be encoded.
pub fn write_zipped<T>(path: &Path, value: &T) -> Result<(), JewelError>
where
    T: Serialize + ?Sized,
{
    let file = File::create(path).map_err(|err| JewelError::io(path, err))?;
    let writer = encode(BufWriter::new(file), value).map_err(|err| at_path(err, path))?;
    writer
        .into_inner()
        .map_err(|err| JewelError::io(path, err.into_error()))?
        .sync_all()
        .map_err(|err| JewelError::io(path, err))
}

/// Read a gzip-compressed JSON file written by [`write_zipped`].
///
/// # Errors
///
/// Returns [`JewelError::Io`] if the file cannot be opened and
/// [`JewelError::Serialization`] if its content does not decode as `T`.
pub fn read_zipped<T>(path: &Path) -> Result<T, JewelError>
where
    T: DeserializeOwned,
{
    let file = File::open(path).map_err(|err| JewelError::io(path, err))?;
    decode(file).map_err(|err| at_path(err, path))
}

/// Re-encode a plain JSON file as a compressed one, validating it as `T`.
///
/// The source document is written back as parsed, so columns `T` does not
/// model are kept.
///
/// # Errors
///
/// Returns [`JewelError::Io`] if `source` is unreadable or `dest` unwritable
/// and [`JewelError::Serialization`] if `source` does not parse as `T`.
pub fn rezip<T>(source: &Path, dest: &Path) -> Result<(), JewelError>
where
    T: DeserializeOwned,
{
    let raw = fs::read(source).map_err(|err| JewelError::io(source, err))?;
    let blob: Value =
        serde_json::from_slice(&raw).map_err(|err| JewelError::serialization(source, err))?;
    T::deserialize(&blob).map_err(|err| JewelError::serialization(source, err))?;
    write_zipped(dest, &blob)
}

fn at_path(err: JewelError, path: &Path) -> JewelError {
    match err {
        JewelError::Io { source, .. } => JewelError::io(path, source),
        JewelError::Serialization { source, .. } => JewelError::serialization(path, source),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn temp_dir(label: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "jewel-codec-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    #[test]
    fn stream_round_trip_preserves_value() {
        let mut value: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        value.insert("alpha".to_string(), vec![1, 2, 3]);
        let bytes = encode(Vec::new(), &value).unwrap();
        assert_eq!(&bytes[..2], &[0x1f, 0x8b]);
        let back: BTreeMap<String, Vec<u32>> = decode(bytes.as_slice()).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn payload_is_pretty_printed() {
        let bytes = encode(Vec::new(), &vec![1, 2]).unwrap();
        let mut text = String::new();
        GzDecoder::new(bytes.as_slice())
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "[\n  1,\n  2\n]");
    }

    #[test]
    fn file_round_trip_truncates_previous_content() {
        let dir = temp_dir("file");
        let path = dir.join("values.json.gz");
        write_zipped(&path, &vec!["a long first payload"; 64]).unwrap();
        write_zipped(&path, &vec!["short"]).unwrap();
        let back: Vec<String> = read_zipped(&path).unwrap();
        assert_eq!(back, vec!["short".to_string()]);
    }

    #[test]
    fn missing_directory_is_io_failure() {
        let dir = temp_dir("missing");
        let err = write_zipped(&dir.join("nope").join("x.json.gz"), &1u32).unwrap_err();
        assert!(matches!(err, JewelError::Io { .. }));
    }

    #[test]
    fn rezip_rejects_malformed_source() {
        let dir = temp_dir("rezip");
        let source = dir.join("bad.json");
        fs::write(&source, b"{ not json").unwrap();
        let err = rezip::<Vec<u32>>(&source, &dir.join("bad.json.gz")).unwrap_err();
        match err {
            JewelError::Serialization { path, .. } => assert_eq!(path, source),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rezip_compresses_valid_source() {
        let dir = temp_dir("rezip-ok");
        let source = dir.join("list.json");
        fs::write(&source, b"[3, 1, 2]").unwrap();
        let dest = dir.join("list.json.gz");
        rezip::<Vec<u32>>(&source, &dest).unwrap();
        let back: Vec<u32> = read_zipped(&dest).unwrap();
        assert_eq!(back, vec![3, 1, 2]);
    }

    #[test]
    fn rezip_keeps_columns_the_shape_does_not_model() {
        #[derive(Deserialize)]
        #[serde(rename_all = "PascalCase")]
        struct Row {
            index: u32,
        }

        let dir = temp_dir("rezip-extra");
        let source = dir.join("rows.json");
        fs::write(
            &source,
            br#"[{"Index": 1, "StatsKeys": [5, 6], "PassiveSkillGraphID": 42}]"#,
        )
        .unwrap();
        let dest = dir.join("rows.json.gz");
        rezip::<Vec<Row>>(&source, &dest).unwrap();

        let back: Value = read_zipped(&dest).unwrap();
        assert_eq!(
            back,
            serde_json::json!([{ "Index": 1, "StatsKeys": [5, 6], "PassiveSkillGraphID": 42 }])
        );
        let rows: Vec<Row> = read_zipped(&dest).unwrap();
        assert_eq!(rows[0].index, 1);
    }

    #[test]
    fn rezip_rejects_wrong_shape_without_writing() {
        let dir = temp_dir("rezip-shape");
        let source = dir.join("object.json");
        fs::write(&source, br#"{"Index": 1}"#).unwrap();
        let dest = dir.join("object.json.gz");
        let err = rezip::<Vec<u32>>(&source, &dest).unwrap_err();
        assert!(matches!(err, JewelError::Serialization { .. }));
        assert!(!dest.exists());
    }
}
