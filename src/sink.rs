//! Output sinks for extracted records

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::Result;

/// Destination for the header and data rows.
///
/// Append-only; callers invoke [`RecordSink::flush`] once at the end of a
/// run. Write errors are fatal.
pub trait RecordSink {
    fn write_header(&mut self, columns: &[&str]) -> Result<()>;
    fn write_row(&mut self, fields: &[String]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

/// Delimiter-separated file sink.
///
/// Quoting is disabled: the extractor pre-quotes the one field that needs
/// it, and every field is written verbatim.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Create (truncating) the output file at `path`.
    pub fn create<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::from_writer(file, delimiter))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn from_writer(writer: W, delimiter: char) -> Self {
        let writer = csv::WriterBuilder::new()
            .delimiter(delimiter as u8)
            .quote_style(csv::QuoteStyle::Never)
            .from_writer(writer);
        CsvSink { writer }
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_header(&mut self, columns: &[&str]) -> Result<()> {
        self.writer.write_record(columns)?;
        Ok(())
    }

    fn write_row(&mut self, fields: &[String]) -> Result<()> {
        self.writer.write_record(fields)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) struct MemorySink {
    pub header: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

#[cfg(test)]
impl MemorySink {
    pub fn new() -> Self {
        MemorySink {
            header: None,
            rows: Vec::new(),
        }
    }
}

#[cfg(test)]
impl RecordSink for MemorySink {
    fn write_header(&mut self, columns: &[&str]) -> Result<()> {
        self.header = Some(columns.iter().map(|c| c.to_string()).collect());
        Ok(())
    }

    fn write_row(&mut self, fields: &[String]) -> Result<()> {
        self.rows.push(fields.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl CsvSink<Vec<u8>> {
        fn into_string(mut self) -> String {
            self.writer.flush().unwrap();
            String::from_utf8(self.writer.into_inner().unwrap()).unwrap()
        }
    }

    fn fields(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn writes_header_then_rows() {
        let mut sink = CsvSink::from_writer(Vec::new(), ',');
        sink.write_header(&["Year", "Player", "Tm"]).unwrap();
        sink.write_row(&fields(&["2022", "Patrick Mahomes", "KAN"]))
            .unwrap();

        let out = sink.into_string();
        assert_eq!(out, "Year,Player,Tm\n2022,Patrick Mahomes,KAN\n");
    }

    #[test]
    fn pre_quoted_field_is_written_verbatim() {
        let mut sink = CsvSink::from_writer(Vec::new(), ',');
        sink.write_row(&fields(&["2022", "\"14-3-0\"", "KAN"]))
            .unwrap();

        // no escaping or re-quoting on top of the extractor's quotes
        assert_eq!(sink.into_string(), "2022,\"14-3-0\",KAN\n");
    }

    #[test]
    fn delimiter_is_configurable() {
        let mut sink = CsvSink::from_writer(Vec::new(), '\t');
        sink.write_row(&fields(&["2022", "KAN"])).unwrap();
        assert_eq!(sink.into_string(), "2022\tKAN\n");
    }
}
