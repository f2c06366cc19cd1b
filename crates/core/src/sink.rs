use reflscope_api::{ApiError, ApiResult, RegistrationRecord, RegistrationSink};
use std::io::Write;

/// Writes each record as one JSON object per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RegistrationSink for JsonLinesSink<W> {
    fn accept(&mut self, record: RegistrationRecord) -> ApiResult<()> {
        serde_json::to_writer(&mut self.writer, &record)
            .map_err(|e| ApiError::Sink(e.to_string()))?;
        self.writer
            .write_all(b"\n")
            .map_err(|e| ApiError::Sink(e.to_string()))
    }
}

/// Adapts a closure into a sink.
pub struct FnSink<F>(pub F);

impl<F> RegistrationSink for FnSink<F>
where
    F: FnMut(RegistrationRecord) -> ApiResult<()>,
{
    fn accept(&mut self, record: RegistrationRecord) -> ApiResult<()> {
        (self.0)(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_lines_one_record_per_line() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.accept(RegistrationRecord::builder("com.acme.A").fields(true).methods(true).build())
            .unwrap();
        sink.accept(
            RegistrationRecord::builder("com.acme.B")
                .fields(true)
                .methods(true)
                .final_fields_writable(true)
                .build(),
        )
        .unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let second: RegistrationRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second.name.as_str(), "com.acme.B");
        assert!(second.final_fields_writable);
    }

    #[test]
    fn test_fn_sink_propagates_errors() {
        let mut sink = FnSink(|_record: RegistrationRecord| -> ApiResult<()> {
            Err(ApiError::Sink("closed".to_string()))
        });
        let err = sink
            .accept(RegistrationRecord::builder("com.acme.A").build())
            .unwrap_err();
        assert!(matches!(err, ApiError::Sink(_)));
    }
}
