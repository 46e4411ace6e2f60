//! CSV output formatting.
//!
//! The export layout is `IP Address,Port,Type,Status`, one row per record.

use crate::batch::ResultRecord;
use std::io::{self, Write};

/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 4] = ["IP Address", "Port", "Type", "Status"];

/// Write records as CSV to any writer.
pub fn write_csv<W: Write>(writer: W, records: &[ResultRecord]) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(CSV_HEADER)?;

    for record in records {
        let class = record.class.to_string();
        let status = record.status();
        wtr.write_record([
            record.address.as_str(),
            record.port_cell(),
            class.as_str(),
            status.as_str(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render records as CSV text.
pub fn to_csv(records: &[ResultRecord]) -> csv::Result<String> {
    let mut buf = Vec::new();
    write_csv(&mut buf, records)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

/// Print records in CSV format.
pub fn print_csv(records: &[ResultRecord]) -> csv::Result<()> {
    let stdout = io::stdout();
    write_csv(stdout.lock(), records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::AddressClass;
    use crate::error::ProbeError;
    use crate::probe::ProbeOutcome;

    fn record(address: &str, port: Option<&str>, class: AddressClass, outcome: ProbeOutcome) -> ResultRecord {
        ResultRecord {
            address: address.to_string(),
            port: port.map(str::to_string),
            class,
            outcome,
        }
    }

    fn sample() -> Vec<ResultRecord> {
        vec![
            record(
                "8.8.8.8",
                None,
                AddressClass::Public,
                ProbeOutcome::Resolved("8.8.8.8".parse().unwrap()),
            ),
            record("1.1.1.1", Some("80"), AddressClass::Public, ProbeOutcome::Connected),
            record(
                "invalid",
                None,
                AddressClass::Invalid,
                ProbeOutcome::Skipped("invalid address".to_string()),
            ),
            record(
                "192.168.1.1",
                Some("22"),
                AddressClass::Private,
                ProbeOutcome::Failed(ProbeError::Refused("Connection refused, try later".to_string())),
            ),
        ]
    }

    #[test]
    fn test_header_and_row_count() {
        let text = to_csv(&sample()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "IP Address,Port,Type,Status");
        assert_eq!(lines[1], "8.8.8.8,N/A,Public,Resolvable to 8.8.8.8");
        assert_eq!(lines[2], "1.1.1.1,80,Public,Reachable");
        assert_eq!(lines[3], "invalid,N/A,Invalid,Invalid IP");
    }

    #[test]
    fn test_causes_with_commas_are_quoted() {
        let text = to_csv(&sample()).unwrap();
        let mut rdr = csv::Reader::from_reader(text.as_bytes());
        let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();

        assert_eq!(rows.len(), 4);
        assert_eq!(&rows[3][0], "192.168.1.1");
        assert_eq!(&rows[3][1], "22");
        assert_eq!(&rows[3][2], "Private");
        assert_eq!(&rows[3][3], "Failed: Connection refused, try later");
    }

    #[test]
    fn test_empty_records_still_have_header() {
        assert_eq!(to_csv(&[]).unwrap(), "IP Address,Port,Type,Status\n");
    }
}
