// Integration tests for the audio encoder
//
// These tests verify that files on disk and in memory are turned into the
// base64 payload of their data URL.

use anyhow::Result;
use std::io::Write;
use verivoice::audio::{data_url_payload, to_data_url, AudioEncoder, EncodeError};
use verivoice::SelectedFile;

#[test]
fn test_data_url_layout() {
    let url = to_data_url("audio/mpeg", b"abc");
    assert_eq!(url, "data:audio/mpeg;base64,YWJj");
    assert_eq!(data_url_payload(&url), Some("YWJj"));
}

#[test]
fn test_payload_splits_on_first_comma_only() {
    assert_eq!(data_url_payload("data:x;base64,AA,BB"), Some("AA,BB"));
    assert_eq!(data_url_payload("no separator"), None);
}

#[tokio::test]
async fn test_encode_file_on_disk() -> Result<()> {
    let mut tmp = tempfile::Builder::new().suffix(".mp3").tempfile()?;
    tmp.write_all(&[0x49, 0x44, 0x33, 0x04, 0x00])?;
    tmp.flush()?;

    let file = SelectedFile::from_path(tmp.path());
    let payload = AudioEncoder::default().encode(&file).await?;

    assert_eq!(payload, "SUQzBAA=");
    assert!(file.name.ends_with(".mp3"));

    Ok(())
}

#[tokio::test]
async fn test_encode_uploaded_bytes() -> Result<()> {
    let file = SelectedFile::from_bytes("upload.mp3", b"hello".to_vec());

    let payload = AudioEncoder::default().encode(&file).await?;

    assert_eq!(payload, "aGVsbG8=");
    Ok(())
}

#[tokio::test]
async fn test_encode_empty_file() -> Result<()> {
    let file = SelectedFile::from_bytes("silence.mp3", Vec::new());

    let payload = AudioEncoder::default().encode(&file).await?;

    assert!(payload.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_encode_missing_file_fails() {
    let file = SelectedFile::from_path("/nonexistent/path/to/audio.mp3");

    let result = AudioEncoder::default().encode(&file).await;

    match result {
        Err(EncodeError::Read { path, .. }) => assert!(path.contains("audio.mp3")),
        Ok(_) => panic!("Reading a nonexistent file should fail"),
    }
}

#[test]
fn test_selected_file_name_from_path() {
    let file = SelectedFile::from_path("/tmp/voices/sample.mp3");
    assert_eq!(file.name, "sample.mp3");
    assert_eq!(file.location(), "/tmp/voices/sample.mp3");
}
