use clap::Args;
use std::time::Instant;
use tracing::info;
use variant_core::{BedReader, BedStats, VcfReader, VcfStats};

use super::{drain, progress_spinner, CliError, FileFormat, InputArgs};

#[derive(Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn run(args: StatsArgs) -> Result<(), CliError> {
    let start = Instant::now();
    let format = args.input.format()?;
    let path = &args.input.input;
    info!(path = %path.display(), ?format, "summarizing records");

    let pb = progress_spinner()?;
    match format {
        FileFormat::Bed => {
            let mut stats = BedStats::new();
            let result = drain(BedReader::new(path), &pb, |region| stats.add(region));
            pb.finish_and_clear();
            result?;
            stats.print_summary();
        }
        FileFormat::Vcf => {
            let mut stats = VcfStats::new();
            let result = drain(VcfReader::new(path), &pb, |variant| stats.add(variant));
            pb.finish_and_clear();
            result?;
            stats.print_summary();
        }
    }

    info!("Summarized in {:?}", start.elapsed());
    Ok(())
}
