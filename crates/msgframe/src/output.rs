use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// Summary of a frame produced by `encode`.
#[derive(Debug, Serialize)]
pub struct EncodedReport {
    pub id: u32,
    pub length: u32,
    pub payload_size: usize,
    pub frame_size: usize,
    pub frame_hex: String,
    #[serde(skip)]
    pub frame: Vec<u8>,
}

/// Summary of a frame read back by `decode`.
#[derive(Debug, Serialize)]
pub struct DecodedReport {
    pub id: u32,
    pub length: u32,
    pub payload_size: usize,
    pub payload_complete: bool,
    pub trailing_bytes: usize,
    pub payload: String,
    #[serde(skip)]
    pub payload_bytes: Vec<u8>,
}

pub fn print_encoded(report: &EncodedReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ID", "LENGTH", "PAYLOAD SIZE", "FRAME"])
                .add_row(vec![
                    report.id.to_string(),
                    report.length.to_string(),
                    report.payload_size.to_string(),
                    report.frame_hex.clone(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "id={} length={} payload_size={} frame_size={} frame={}",
                report.id,
                report.length,
                report.payload_size,
                report.frame_size,
                report.frame_hex
            );
        }
        OutputFormat::Raw => print_raw(&report.frame),
    }
}

pub fn print_decoded(report: &DecodedReport, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(report),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ID", "LENGTH", "SIZE", "COMPLETE", "TRAILING", "PAYLOAD"])
                .add_row(vec![
                    report.id.to_string(),
                    report.length.to_string(),
                    report.payload_size.to_string(),
                    report.payload_complete.to_string(),
                    report.trailing_bytes.to_string(),
                    report.payload.clone(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "id={} length={} size={} complete={} trailing={} payload={}",
                report.id,
                report.length,
                report.payload_size,
                report.payload_complete,
                report.trailing_bytes,
                report.payload
            );
        }
        OutputFormat::Raw => print_raw(&report.payload_bytes),
    }
}

fn print_json<T: Serialize>(value: &T) {
    println!(
        "{}",
        serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

pub fn payload_preview(payload: &[u8]) -> String {
    match std::str::from_utf8(payload) {
        Ok(text) => text.to_string(),
        Err(_) => format!("<binary {} bytes>", payload.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_shows_text_and_hides_binary() {
        assert_eq!(payload_preview(b"hello goku"), "hello goku");
        assert_eq!(payload_preview(&[0xff, 0xfe, 0x00]), "<binary 3 bytes>");
    }

    #[test]
    fn json_report_omits_raw_bytes() {
        let report = EncodedReport {
            id: 100,
            length: 8,
            payload_size: 10,
            frame_size: 18,
            frame_hex: "0800000064000000".to_string(),
            frame: vec![1, 2, 3],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["id"], 100);
        assert!(json.get("frame").is_none());
    }
}
