//! Stage 2: join the exported observations to the resort reference, derive
//! adjusted temperatures and snow-day flags, and print the yearly summary.

use log::info;
use snowdays::{
    adjust, reference_frame, scan_observations, write_table, AdjustError, AdjustedTables,
    SnowdaysError, ADJUSTED_FILE, OBSERVATIONS_FILE,
};
use std::path::Path;

fn main() -> Result<(), SnowdaysError> {
    env_logger::init();

    let observations = scan_observations(Path::new(OBSERVATIONS_FILE))?;
    let reference = reference_frame().map_err(AdjustError::from)?;

    let AdjustedTables { mut table, summary } = adjust(observations, reference)?;
    info!("adjusted {} observation rows", table.height());

    write_table(&mut table, Path::new(ADJUSTED_FILE))?;
    info!("adjusted table written to {ADJUSTED_FILE}");

    println!("{summary}");
    Ok(())
}
