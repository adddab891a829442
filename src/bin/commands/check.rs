// bin/commands/check.rs

use clap::Args;
use std::time::Instant;
use tracing::info;
use variant_core::{BedReader, VcfReader};

use super::{drain, progress_spinner, CliError, FileFormat, InputArgs};

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: CheckArgs) -> Result<(), CliError> {
    let start = Instant::now();
    let format = args.input.format()?;
    let path = &args.input.input;
    info!(path = %path.display(), ?format, "checking records");

    let pb = progress_spinner()?;
    let result = match format {
        FileFormat::Bed => drain(BedReader::new(path), &pb, |_| {}),
        FileFormat::Vcf => drain(VcfReader::new(path), &pb, |_| {}),
    };
    pb.finish_and_clear();
    let n = result?;

    println!("{}: {} valid records", path.display(), n);
    info!("Checked in {:?}", start.elapsed());
    Ok(())
}
