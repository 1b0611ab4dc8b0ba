use crate::export::model::ResponseRecord;
use csv::Writer;
use std::path::Path;

/// Write the records as CSV with a header row.
pub fn write_csv(path: &Path, records: &[ResponseRecord]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["timestamp", "group", "rating"])?;

    for rec in records {
        wtr.write_record([&rec.timestamp, &rec.group, &rec.rating])?;
    }

    wtr.flush()?;
    Ok(())
}
