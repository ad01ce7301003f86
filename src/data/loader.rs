use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::config::LoaderConfig;
use crate::error::{Error, Result};

use super::model::{CHANNEL_COUNT, Channel, SensorLog};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a phone logger recording from disk.
///
/// Layout: one header line (ignored), then one row per sample with the
/// columns listed in [`Channel::ALL`], separated by `config.delimiter`.
pub fn load_log(path: &Path, config: &LoaderConfig) -> Result<SensorLog> {
    let file = File::open(path).map_err(|e| Error::from_io(path, e))?;
    let log = read_log(file, config)?;
    log::info!("Loaded {} samples from {}", log.len(), path.display());
    Ok(log)
}

/// Parse a recording from any reader.
pub fn read_log<R: Read>(source: R, config: &LoaderConfig) -> Result<SensorLog> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let mut log = SensorLog::new();

    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        // Whitespace-only line: one field, empty after trimming.
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if record.len() < CHANNEL_COUNT {
            return Err(Error::Parse {
                line,
                message: format!(
                    "expected {CHANNEL_COUNT} columns, found {}",
                    record.len()
                ),
            });
        }
        if record.len() > CHANNEL_COUNT {
            log::debug!(
                "line {line}: ignoring {} trailing columns",
                record.len() - CHANNEL_COUNT
            );
        }

        let mut row = [0.0; CHANNEL_COUNT];
        for (slot, (channel, token)) in row.iter_mut().zip(Channel::ALL.iter().zip(&record)) {
            *slot = parse_value(token, line, *channel)?;
        }
        log.push_row(&row);
    }

    Ok(log)
}

fn parse_value(token: &str, line: u64, channel: Channel) -> Result<f64> {
    token.parse::<f64>().map_err(|_| Error::Parse {
        line,
        message: format!("{channel}: '{token}' is not a number"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    const HEADER: &str = "ax;ay;az;gx;gy;gz;mx;my;mz;ox;oy;oz;T;livB;Volt;t\n";

    fn line(values: &[f64]) -> String {
        let tokens: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        format!("{}\n", tokens.join(";"))
    }

    fn sample_file(rows: usize) -> String {
        let mut text = HEADER.to_string();
        for r in 0..rows {
            let values: Vec<f64> = (0..CHANNEL_COUNT).map(|c| (r * 100 + c) as f64).collect();
            text.push_str(&line(&values));
        }
        text
    }

    #[test]
    fn test_every_channel_has_one_value_per_row() {
        let log = read_log(Cursor::new(sample_file(5)), &LoaderConfig::default()).unwrap();

        assert_eq!(log.len(), 5);
        for c in Channel::ALL {
            assert_eq!(log.channel(c).len(), 5, "channel {c}");
        }
        assert_eq!(log.channel(Channel::Ay), &[1.0, 101.0, 201.0, 301.0, 401.0]);
        assert_eq!(log.channel(Channel::Time)[4], 415.0);
    }

    #[test]
    fn test_header_text_is_ignored() {
        let text = format!("whatever;the;phone;wrote\n{}", line(&[1.5; CHANNEL_COUNT]));
        let log = read_log(Cursor::new(text), &LoaderConfig::default()).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.channel(Channel::Ax), &[1.5]);
    }

    #[test]
    fn test_crlf_and_padding_accepted() {
        let text = format!(
            "{HEADER}{}\r\n",
            (0..CHANNEL_COUNT)
                .map(|c| format!(" {c}.5 "))
                .collect::<Vec<_>>()
                .join(";")
        );
        let log = read_log(Cursor::new(text), &LoaderConfig::default()).unwrap();
        assert_eq!(log.channel(Channel::Az), &[2.5]);
    }

    #[test]
    fn test_blank_and_whitespace_lines_skipped() {
        let text = format!(
            "{HEADER}{}   \n\n\t\n{}",
            line(&[1.0; CHANNEL_COUNT]),
            line(&[2.0; CHANNEL_COUNT])
        );
        let log = read_log(Cursor::new(text), &LoaderConfig::default()).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.channel(Channel::Ax), &[1.0, 2.0]);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let mut values = vec![2.0; CHANNEL_COUNT];
        values.push(99.0);
        let text = format!("{HEADER}{}", line(&values));
        let log = read_log(Cursor::new(text), &LoaderConfig::default()).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log.channel(Channel::Time), &[2.0]);
    }

    #[test]
    fn test_short_row_is_parse_error() {
        let text = format!("{HEADER}{}{}", line(&[0.0; CHANNEL_COUNT]), line(&[0.0; 15]));
        let err = read_log(Cursor::new(text), &LoaderConfig::default()).unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("found 15"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_token_is_parse_error() {
        let mut tokens: Vec<String> = (0..CHANNEL_COUNT).map(|c| c.to_string()).collect();
        tokens[2] = "abc".to_string();
        let text = format!("{HEADER}{}\n", tokens.join(";"));

        let err = read_log(Cursor::new(text), &LoaderConfig::default()).unwrap_err();
        match err {
            Error::Parse { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("az"), "{message}");
                assert!(message.contains("'abc'"), "{message}");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_header_only_gives_empty_log() {
        let log = read_log(Cursor::new(HEADER), &LoaderConfig::default()).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_custom_delimiter() {
        let text = sample_file(2).replace(';', ",");
        let config = LoaderConfig { delimiter: b',' };
        let log = read_log(Cursor::new(text), &config).unwrap();
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample_file(3).as_bytes()).unwrap();

        let log = load_log(file.path(), &LoaderConfig::default()).unwrap();
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_missing_file() {
        let err = load_log(Path::new("/nonexistent/drive.csv"), &LoaderConfig::default())
            .unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
