use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, info_span};

use farecast_engineer::{EngineerOptions, StageContext, engineer_features, training_matrix};
use farecast_ingest::{ensure_columns, read_trips_csv, write_features_csv};
use farecast_model::{FEATURE_COLUMNS, GenerationMode};
use farecast_predict::FareModel;
use farecast_synth::{EstimateRequest, synthesize};

use crate::cli::{EngineerArgs, EstimateArgs, ModeArg};
use crate::summary::{apply_table_style, header_cell};
use crate::types::{EngineerSummary, EstimateResult};

pub fn run_estimate(args: &EstimateArgs) -> Result<EstimateResult> {
    if !(args.distance > 0.0) {
        anyhow::bail!("distance must be a positive number of kilometers");
    }
    let mode = match args.mode {
        ModeArg::Dynamic => GenerationMode::Dynamic,
        ModeArg::Static => GenerationMode::Static,
    };
    let span = info_span!("estimate", mode = %mode);
    let _guard = span.enter();

    // Fatal path: without a loadable artifact there is nothing to serve.
    let model = FareModel::load(&args.model).context("load model artifact")?;

    let request = EstimateRequest {
        distance: args.distance,
        cab_type: args.cab_type.clone(),
        product_group: args.product_group.clone(),
        surge_flag: args.surge,
        mode,
    };
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let row = synthesize(&request, &mut rng).context("synthesize feature row")?;
    let fare = model.predict(&row);
    info!(fare, distance = args.distance, "estimate complete");

    Ok(EstimateResult { fare, row, mode })
}

pub fn run_engineer(args: &EngineerArgs) -> Result<EngineerSummary> {
    let span = info_span!("engineer", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    // Price is the training target; a file without it cannot be engineered.
    ensure_columns(&args.input, &["price"])?;

    let raw = read_trips_csv(&args.input)?;
    let rows_in = raw.height();
    let mut ctx = StageContext::new(EngineerOptions { seed: args.seed });

    let mut engineered = if args.full {
        let mut df = raw;
        engineer_features(&mut df, &mut ctx)?;
        df
    } else {
        training_matrix(raw, &mut ctx)?
    };

    let output = args.output.clone().unwrap_or_else(|| {
        args.input
            .parent()
            .map(|dir| dir.join("features.csv"))
            .unwrap_or_else(|| "features.csv".into())
    });
    write_features_csv(&mut engineered, &output)?;

    let summary = EngineerSummary {
        input: args.input.clone(),
        output,
        rows_in,
        rows_out: engineered.height(),
        columns_out: engineered.width(),
        full_frame: args.full,
        duration_ms: start.elapsed().as_millis(),
    };
    info!(
        rows_in = summary.rows_in,
        rows_out = summary.rows_out,
        columns = summary.columns_out,
        duration_ms = summary.duration_ms,
        "engineering complete"
    );
    Ok(summary)
}

pub fn run_schema() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Feature"),
        header_cell("Kind"),
    ]);
    apply_table_style(&mut table);
    for (idx, column) in FEATURE_COLUMNS.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            column.name.to_string(),
            column.kind.as_str().to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}
