use anyhow::Result;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// One status line as written to the journal.
#[derive(Debug, Serialize)]
pub struct StatusRecord<'a> {
    pub mode: &'a str,
    pub ok: bool,
    pub message: &'a str,
}

/// Append-only JSONL log of every status message.
pub struct StatusJournal {
    writer: BufWriter<File>,
}

impl StatusJournal {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    pub fn write(&mut self, record: &StatusRecord<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_one_object_per_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs/status.jsonl");

        let mut journal = StatusJournal::open(&path).unwrap();
        journal
            .write(&StatusRecord {
                mode: "gomoku",
                ok: true,
                message: "Black played 8・8. White to move.",
            })
            .unwrap();
        drop(journal);

        let mut journal = StatusJournal::open(&path).unwrap();
        journal
            .write(&StatusRecord {
                mode: "furniture",
                ok: false,
                message: "no object named 'sofa' in the scene",
            })
            .unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["mode"], "gomoku");
        assert_eq!(lines[0]["ok"], true);
        assert_eq!(lines[1]["ok"], false);
        assert_eq!(lines[1]["message"], "no object named 'sofa' in the scene");
    }
}
