use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};

use super::model::{Channel, CorrectedLog};

/// Write the vehicle-frame series as `t;long;later;vert` rows.
pub fn write_corrected(path: &Path, log: &CorrectedLog, delimiter: u8) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::from_io(path, e))?;
    write_corrected_to(file, log, delimiter)?;
    log::info!("Exported {} corrected samples to {}", log.len(), path.display());
    Ok(())
}

pub fn write_corrected_to<W: Write>(sink: W, log: &CorrectedLog, delimiter: u8) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(sink);

    writer.write_record(["t", "long", "later", "vert"])?;

    let t = log.device.channel(Channel::Time);
    for i in 0..log.len() {
        writer.write_record(&[
            t[i].to_string(),
            log.long[i].to_string(),
            log.later[i].to_string(),
            log.vert[i].to_string(),
        ])?;
    }
    writer.flush().map_err(|e| Error::Csv(e.into()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MountConfig;
    use crate::data::correction::correct;
    use crate::data::model::{CHANNEL_COUNT, SensorLog};

    fn corrected() -> CorrectedLog {
        let rows = [[3.0, 9.0, -1.0], [-1.0, 9.5, 2.0], [0.5, 10.0, 0.0]]
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let mut row = [0.0; CHANNEL_COUNT];
                row[0..3].copy_from_slice(a);
                row[Channel::Time.index()] = 0.1 * i as f64;
                row
            });
        correct(&SensorLog::from_rows(rows), &MountConfig::default()).unwrap()
    }

    #[test]
    fn test_export_layout() {
        let log = corrected();
        let mut buf = Vec::new();
        write_corrected_to(&mut buf, &log, b';').unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "t;long;later;vert");
        assert!(lines[1].starts_with("0;"));
    }

    #[test]
    fn test_export_reads_back() {
        let log = corrected();
        let file = tempfile::NamedTempFile::new().unwrap();
        write_corrected(file.path(), &log, b';').unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .from_path(file.path())
            .unwrap();
        let rows: Vec<Vec<f64>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|v| v.parse().unwrap()).collect())
            .collect();

        assert_eq!(rows.len(), log.len());
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row[1], log.long[i]);
            assert_eq!(row[2], log.later[i]);
            assert_eq!(row[3], log.vert[i]);
        }
    }
}
