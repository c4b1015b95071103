//! # Dataset types and CSV I/O
//!
//! Tabular data comes in as headerless numeric CSV: every row is a fixed
//! number of predictor columns followed by one target column. Predictions go
//! out the same way, with the model's prediction in place of the target.
//! Readers and writers are generic over `io::Read`/`io::Write` so tests run
//! on in-memory buffers.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{Result, ResultExt, SwarmError};

/// One row of tabular data: a predictor vector and its observed target.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataPoint {
    pub predictors: Vec<f64>,
    pub target: f64,
}

/// The full tabular dataset.
pub type Dataset = Vec<DataPoint>;

/// Reads a dataset from headerless CSV.
///
/// Every row must hold at least one predictor column plus the target column,
/// and all rows must have the same width.
///
/// # Errors
///
/// Returns `SwarmError::Csv` for unreadable records, non-numeric fields,
/// rows that are too narrow, and ragged rows; `SwarmError::EmptyDataset` if
/// the input holds no rows at all.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut data = Dataset::new();
    let mut row_width = None;

    for record in csv_reader.records() {
        let record =
            record.map_err(|e| SwarmError::Csv(format!("Failed to read record: {}", e)))?;
        let mut values = parse_record(&record)?;

        if values.len() < 2 {
            return Err(SwarmError::Csv(
                "Invalid file format. Datapoint must contain at least one predictor"
                    .to_string(),
            ));
        }

        match row_width {
            None => row_width = Some(values.len()),
            Some(width) if width != values.len() => {
                return Err(SwarmError::Csv(
                    "Invalid file format. All datapoints must have the same number of predictors"
                        .to_string(),
                ));
            }
            Some(_) => {}
        }

        let target = values
            .pop()
            .ok_or_else(|| SwarmError::Csv("Empty record".to_string()))?;
        data.push(DataPoint {
            predictors: values,
            target,
        });
    }

    if data.is_empty() {
        return Err(SwarmError::EmptyDataset);
    }

    Ok(data)
}

/// Reads a dataset from a CSV file.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset> {
    let file = File::open(path.as_ref()).context("Failed to open input file")?;
    read_dataset(file)
}

fn parse_record(record: &csv::StringRecord) -> Result<Vec<f64>> {
    record
        .iter()
        .map(|field| {
            field.trim().parse::<f64>().map_err(|_| {
                SwarmError::Csv(format!("Failed to parse numeric value: {:?}", field))
            })
        })
        .collect()
}

/// Writes one CSV row per data point: the predictors followed by the
/// supplied prediction.
///
/// # Errors
///
/// Returns `SwarmError::DimensionMismatch` if the number of predictions does
/// not match the number of rows.
pub fn write_predictions<W: Write>(
    writer: W,
    data: &Dataset,
    predictions: &[f64],
) -> Result<()> {
    if data.len() != predictions.len() {
        return Err(SwarmError::DimensionMismatch(format!(
            "Dataset holds {} rows, {} predictions supplied",
            data.len(),
            predictions.len()
        )));
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    for (point, prediction) in data.iter().zip(predictions) {
        let row: Vec<String> = point
            .predictors
            .iter()
            .chain(std::iter::once(prediction))
            .map(|value| value.to_string())
            .collect();

        csv_writer
            .write_record(&row)
            .map_err(|e| SwarmError::Csv(format!("Failed to write record: {}", e)))?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Writes predictions to a CSV file.
pub fn save_predictions<P: AsRef<Path>>(
    path: P,
    data: &Dataset,
    predictions: &[f64],
) -> Result<()> {
    let file = File::create(path.as_ref()).context("Failed to open output file")?;
    write_predictions(file, data, predictions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_dataset() {
        let input = "1.0,2.0,3.0\n4.0,5.0,6.0\n";
        let data = read_dataset(Cursor::new(input)).unwrap();

        assert_eq!(
            data,
            vec![
                DataPoint { predictors: vec![1.0, 2.0], target: 3.0 },
                DataPoint { predictors: vec![4.0, 5.0], target: 6.0 },
            ]
        );
    }

    #[test]
    fn test_read_dataset_trims_whitespace() {
        let input = "1.0, 2.0\n 3.5,7.0\n";
        let data = read_dataset(Cursor::new(input)).unwrap();

        assert_eq!(data[0].predictors, vec![1.0]);
        assert_eq!(data[0].target, 2.0);
        assert_eq!(data[1].predictors, vec![3.5]);
    }

    #[test]
    fn test_read_dataset_rejects_ragged_rows() {
        let input = "1.0,2.0,3.0\n4.0,5.0\n";
        let result = read_dataset(Cursor::new(input));
        assert!(matches!(result, Err(SwarmError::Csv(_))));
    }

    #[test]
    fn test_read_dataset_rejects_non_numeric() {
        let input = "1.0,two\n";
        let result = read_dataset(Cursor::new(input));
        assert!(matches!(result, Err(SwarmError::Csv(_))));
    }

    #[test]
    fn test_read_dataset_requires_a_predictor() {
        let input = "1.0\n2.0\n";
        let result = read_dataset(Cursor::new(input));
        assert!(matches!(result, Err(SwarmError::Csv(_))));
    }

    #[test]
    fn test_read_dataset_rejects_empty_input() {
        let result = read_dataset(Cursor::new(""));
        assert!(matches!(result, Err(SwarmError::EmptyDataset)));
    }

    #[test]
    fn test_write_predictions_row_shape() {
        let data = vec![
            DataPoint { predictors: vec![1.0, 2.0], target: 9.0 },
            DataPoint { predictors: vec![3.0, 4.0], target: 9.0 },
        ];

        let mut buffer = Vec::new();
        write_predictions(&mut buffer, &data, &[5.0, 6.0]).unwrap();

        let written = String::from_utf8(buffer).unwrap();
        assert_eq!(written, "1,2,5\n3,4,6\n");
    }

    #[test]
    fn test_write_predictions_length_mismatch() {
        let data = vec![DataPoint { predictors: vec![1.0], target: 2.0 }];
        let mut buffer = Vec::new();

        let result = write_predictions(&mut buffer, &data, &[1.0, 2.0]);
        assert!(matches!(result, Err(SwarmError::DimensionMismatch(_))));
    }
}
