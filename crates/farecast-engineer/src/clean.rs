//! Raw trip record cleaning.
//!
//! Normalizes temporal typing and removes duplicate observations before any
//! feature derivation runs. Column-name heuristics are best-effort: a column
//! that looks like an epoch timestamp but fails to convert is logged and
//! left untouched.

use anyhow::{Context, Result};
use polars::prelude::*;
use tracing::{debug, warn};

use crate::frame_utils::has_column;

/// Clean a raw trip DataFrame in place.
///
/// - `datetime` + `timestamp` both present: the epoch column is dropped and
///   the readable column parsed (unparseable values become null).
/// - only `timestamp`: converted from epoch seconds to a naive `datetime`
///   column, replacing the original.
/// - exact-duplicate rows removed (stable, keep first).
/// - numeric columns whose name contains `Time` reinterpreted as epoch
///   seconds; failures are non-fatal.
/// - columns whose name contains `summary` trimmed of surrounding
///   whitespace.
pub fn clean_trip_data(df: &mut DataFrame) -> Result<()> {
    let has_datetime = has_column(df, "datetime");
    let has_timestamp = has_column(df, "timestamp");

    if has_datetime && has_timestamp {
        df.drop_in_place("timestamp").context("drop timestamp")?;
        parse_datetime_strings(df)?;
    } else if has_timestamp {
        *df = df
            .clone()
            .lazy()
            .with_column(epoch_seconds_to_datetime(col("timestamp")).alias("datetime"))
            .collect()
            .context("convert timestamp to datetime")?;
        df.drop_in_place("timestamp").context("drop timestamp")?;
    } else if has_datetime {
        parse_datetime_strings(df)?;
    }

    *df = df
        .clone()
        .lazy()
        .unique_stable(None, UniqueKeepStrategy::First)
        .collect()
        .context("drop duplicate rows")?;

    reinterpret_epoch_columns(df);
    trim_summary_columns(df)?;

    Ok(())
}

/// Epoch seconds (integer or float) to a naive millisecond datetime.
fn epoch_seconds_to_datetime(expr: Expr) -> Expr {
    (expr.cast(DataType::Int64) * lit(1000)).cast(DataType::Datetime(TimeUnit::Milliseconds, None))
}

fn parse_datetime_strings(df: &mut DataFrame) -> Result<()> {
    let dtype = df.column("datetime")?.dtype().clone();
    let parsed = match dtype {
        DataType::String => col("datetime")
            .str()
            .to_datetime(
                Some(TimeUnit::Milliseconds),
                None,
                StrptimeOptions {
                    strict: false,
                    ..Default::default()
                },
                lit("raise"),
            )
            .alias("datetime"),
        DataType::Int8
        | DataType::Int16
        | DataType::Int32
        | DataType::Int64
        | DataType::UInt8
        | DataType::UInt16
        | DataType::UInt32
        | DataType::UInt64
        | DataType::Float32
        | DataType::Float64 => epoch_seconds_to_datetime(col("datetime")).alias("datetime"),
        _ => return Ok(()),
    };
    *df = df
        .clone()
        .lazy()
        .with_column(parsed)
        .collect()
        .context("parse datetime column")?;
    Ok(())
}

/// Any numeric column whose name contains `Time` is assumed to hold epoch
/// seconds. Schema inference, not ground truth: conversion failures are
/// logged and the column left as-is.
fn reinterpret_epoch_columns(df: &mut DataFrame) {
    let candidates: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|column| {
            column.name().contains("Time")
                && matches!(
                    column.dtype(),
                    DataType::Int8
                        | DataType::Int16
                        | DataType::Int32
                        | DataType::Int64
                        | DataType::UInt8
                        | DataType::UInt16
                        | DataType::UInt32
                        | DataType::UInt64
                        | DataType::Float32
                        | DataType::Float64
                )
        })
        .map(|column| column.name().to_string())
        .collect();

    for name in candidates {
        let converted = df
            .clone()
            .lazy()
            .with_column(epoch_seconds_to_datetime(col(name.as_str())).alias(name.as_str()))
            .collect();
        match converted {
            Ok(new_df) => {
                debug!(column = %name, "reinterpreted epoch column as datetime");
                *df = new_df;
            }
            Err(error) => {
                warn!(column = %name, %error, "skipping epoch reinterpretation");
            }
        }
    }
}

fn trim_summary_columns(df: &mut DataFrame) -> Result<()> {
    let targets: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|column| {
            column.name().contains("summary") && matches!(column.dtype(), DataType::String)
        })
        .map(|column| column.name().to_string())
        .collect();
    if targets.is_empty() {
        return Ok(());
    }
    let exprs: Vec<Expr> = targets
        .iter()
        .map(|name| {
            col(name.as_str())
                .str()
                .strip_chars(lit(Null {}))
                .alias(name.as_str())
        })
        .collect();
    *df = df
        .clone()
        .lazy()
        .with_columns(exprs)
        .collect()
        .context("trim summary columns")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_becomes_naive_datetime() {
        // 2024-03-05 08:00:00 UTC
        let mut df = DataFrame::new(vec![
            Series::new("timestamp".into(), vec![1_709_625_600i64]).into(),
        ])
        .unwrap();

        clean_trip_data(&mut df).unwrap();

        assert!(!has_column(&df, "timestamp"));
        let dtype = df.column("datetime").unwrap().dtype().clone();
        assert!(matches!(dtype, DataType::Datetime(_, _)));
    }

    #[test]
    fn duplicates_are_removed() {
        let mut df = DataFrame::new(vec![
            Series::new("distance".into(), vec![1.0, 1.0, 2.0]).into(),
            Series::new("cab_type".into(), vec!["Uber", "Uber", "Lyft"]).into(),
        ])
        .unwrap();

        clean_trip_data(&mut df).unwrap();

        assert_eq!(df.height(), 2);
    }

    #[test]
    fn summary_columns_are_trimmed() {
        let mut df = DataFrame::new(vec![
            Series::new("short_summary".into(), vec![" Rain ", "Clear "]).into(),
        ])
        .unwrap();

        clean_trip_data(&mut df).unwrap();

        let col = df.column("short_summary").unwrap();
        let ca = col.str().unwrap();
        assert_eq!(ca.get(0), Some("Rain"));
        assert_eq!(ca.get(1), Some("Clear"));
    }

    #[test]
    fn numeric_time_columns_become_datetime() {
        let mut df = DataFrame::new(vec![
            Series::new("sunriseTime".into(), vec![1_709_625_600i64, 1_709_712_000]).into(),
            Series::new("distance".into(), vec![1.0, 2.0]).into(),
        ])
        .unwrap();

        clean_trip_data(&mut df).unwrap();

        let dtype = df.column("sunriseTime").unwrap().dtype().clone();
        assert!(matches!(dtype, DataType::Datetime(_, _)));
        // Non-Time numeric columns are untouched.
        assert!(matches!(
            df.column("distance").unwrap().dtype(),
            DataType::Float64
        ));
    }
}
