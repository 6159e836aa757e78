use crate::{config::AddressColumn, gateways::Geocoder};
use csv::{ByteRecord, ReaderBuilder, WriterBuilder};
use geoenrich_core::entities::{column_names, detail_column_names, AddressParts};
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Column '{0}' not found in the CSV header")]
    MissingColumn(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Positions of the configured address columns within a record.
#[derive(Debug)]
pub struct ColumnMapping<'a> {
    columns: Vec<(usize, &'a AddressColumn)>,
}

impl<'a> ColumnMapping<'a> {
    pub fn resolve(headers: &ByteRecord, columns: &'a [AddressColumn]) -> Result<Self, Error> {
        let columns = columns
            .iter()
            .map(|column| {
                headers
                    .iter()
                    .position(|h| h == column.name.as_bytes())
                    .map(|idx| (idx, column))
                    .ok_or_else(|| Error::MissingColumn(column.name.clone()))
            })
            .collect::<Result<_, _>>()?;
        Ok(Self { columns })
    }

    pub fn address_parts(&self, record: &ByteRecord) -> AddressParts {
        let mut parts = AddressParts::new();
        for (idx, column) in &self.columns {
            let value = record.get(*idx).unwrap_or_default();
            match column.part {
                Some(part) => {
                    parts.insert(part, value);
                }
                None => {
                    parts.push_unrecognized(value);
                }
            }
        }
        parts
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RowStats {
    pub total: usize,
    pub failed: usize,
}

/// Appends the geocoding columns to every CSV record.
///
/// Rows are never dropped, failures are reported in the status columns.
pub fn enrich_rows<R, W>(
    geocoder: &Geocoder,
    columns: &[AddressColumn],
    extended: bool,
    input: R,
    output: W,
) -> Result<RowStats, Error>
where
    R: io::Read,
    W: io::Write,
{
    let mut reader = ReaderBuilder::new().flexible(true).from_reader(input);
    let mut writer = WriterBuilder::new().flexible(true).from_writer(output);

    let headers = reader.byte_headers()?.clone();
    let mapping = ColumnMapping::resolve(&headers, columns)?;

    let mut out_headers = headers.clone();
    for name in column_names() {
        out_headers.push_field(name.as_bytes());
    }
    if extended {
        for name in detail_column_names() {
            out_headers.push_field(name.as_bytes());
        }
    }
    writer.write_byte_record(&out_headers)?;

    let mut stats = RowStats::default();
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record)? {
        let parts = mapping.address_parts(&record);
        let output = geocoder.geocode(&parts);
        stats.total += 1;
        if !output.is_ok() {
            stats.failed += 1;
        }
        let mut out_record = record.clone();
        for field in output.to_columns() {
            out_record.push_field(field.as_bytes());
        }
        if extended {
            for field in output.to_detail_columns() {
                out_record.push_field(field.as_bytes());
            }
        }
        writer.write_byte_record(&out_record)?;
    }
    writer.flush()?;
    Ok(stats)
}
