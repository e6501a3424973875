use crate::domain::model::AppointmentRecord;
use crate::domain::ports::AppointmentSink;
use crate::utils::error::Result;

/// Collects appointment records as plain text, three lines per appointment.
#[derive(Debug, Default)]
pub struct TextReport {
    lines: Vec<String>,
}

impl TextReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }
}

impl AppointmentSink for TextReport {
    fn accept(&mut self, record: &AppointmentRecord) -> Result<()> {
        self.lines.extend(record.lines());
        Ok(())
    }
}

/// Collects appointment records into a JSON array.
#[derive(Debug, Default)]
pub struct JsonReport {
    records: Vec<serde_json::Value>,
}

impl JsonReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }
}

impl AppointmentSink for JsonReport {
    fn accept(&mut self, record: &AppointmentRecord) -> Result<()> {
        self.records.push(serde_json::to_value(record)?);
        Ok(())
    }
}
