use crate::domain::ports::ResponseSink;
use crate::error::Result;
use async_trait::async_trait;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Records every command line and its response as CSV.
///
/// The output has a `command,response` header followed by one record per
/// processed line. Each record is flushed as it is written so the transcript
/// stays complete if the session is interrupted.
pub struct TranscriptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl TranscriptWriter<File> {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> TranscriptWriter<W> {
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = csv::Writer::from_writer(sink);
        writer.write_record(["command", "response"])?;
        writer.flush()?;
        Ok(Self { writer })
    }

    pub fn write_record(&mut self, line: &str, response: &str) -> Result<()> {
        self.writer.write_record([line.trim(), response])?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()).into())
    }
}

#[async_trait]
impl<W: Write + Send> ResponseSink for TranscriptWriter<W> {
    async fn emit(&mut self, line: &str, response: &str) -> Result<()> {
        self.write_record(line, response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_quotes_multi_token_fields() {
        let mut transcript = TranscriptWriter::new(Vec::new()).unwrap();
        transcript
            .write_record("PUT-DOLLAR, GET-A", "A, QUARTER, DIME")
            .unwrap();
        transcript.write_record("PUT-DIME", "").unwrap();

        let output = String::from_utf8(transcript.into_inner().unwrap()).unwrap();
        assert_eq!(
            output,
            "command,response\n\"PUT-DOLLAR, GET-A\",\"A, QUARTER, DIME\"\nPUT-DIME,\n"
        );
    }

    #[test]
    fn test_transcript_reads_back() {
        let mut transcript = TranscriptWriter::new(Vec::new()).unwrap();
        transcript.write_record("  coin-return ", "DIME, DIME").unwrap();
        let output = transcript.into_inner().unwrap();

        let mut reader = csv::Reader::from_reader(output.as_slice());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 1);
        assert_eq!(&records[0][0], "coin-return");
        assert_eq!(&records[0][1], "DIME, DIME");
    }
}
