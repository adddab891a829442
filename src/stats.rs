// src/stats.rs

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::bed::Region;
use crate::vcf::Variant;

const PASS_FILTER: &str = "PASS";

/// Summary of the regions in a BED file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BedStats {
    pub total_regions: u64,
    /// Sum of `end - start` over all regions. Wide enough that no mix of
    /// `i64` coordinates can overflow it.
    pub total_span: i128,
    /// Regions whose start lies after their end.
    pub inverted_regions: u64,
    pub unnamed_regions: u64,
    // chromosome -> region count, in the order chromosomes first appear
    pub regions_per_chrom: IndexMap<String, u64>,
}

impl BedStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, region: &Region) {
        self.total_regions += 1;
        self.total_span += region.end() as i128 - region.start() as i128;
        if region.start() > region.end() {
            self.inverted_regions += 1;
        }
        if region.name() == crate::bed::MISSING_NAME {
            self.unnamed_regions += 1;
        }
        *self
            .regions_per_chrom
            .entry(region.chrom().to_string())
            .or_insert(0) += 1;
    }

    pub fn mean_length(&self) -> f64 {
        if self.total_regions == 0 {
            return 0.0;
        }
        self.total_span as f64 / self.total_regions as f64
    }

    pub fn print_summary(&self) {
        println!("\nBED Summary");
        println!("===========");
        println!("Total regions: {}", self.total_regions);
        println!("Total span: {} bp", self.total_span);
        println!("Mean length: {:.2} bp", self.mean_length());
        println!("Unnamed regions: {}", self.unnamed_regions);
        println!("Inverted regions (start > end): {}", self.inverted_regions);
        println!("\nRegions per chromosome:");
        for (chrom, count) in &self.regions_per_chrom {
            println!("  {}\t{}", chrom, count);
        }
    }
}

impl<'a> FromIterator<&'a Region> for BedStats {
    fn from_iter<I: IntoIterator<Item = &'a Region>>(iter: I) -> Self {
        let mut stats = BedStats::new();
        iter.into_iter().for_each(|region| stats.add(region));
        stats
    }
}

/// Summary of the variants in a VCF file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct VcfStats {
    pub total_variants: u64,
    pub snps: u64,
    pub multiallelic: u64,
    pub passing: u64,
    pub missing_quality: u64,
    /// Sum of QUAL over the variants that have one.
    pub quality_sum: f64,
    pub max_samples: usize,
    pub variants_per_chrom: IndexMap<String, u64>,
}

impl VcfStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, variant: &Variant) {
        self.total_variants += 1;
        if variant.is_snp() {
            self.snps += 1;
        }
        if variant.is_multiallelic() {
            self.multiallelic += 1;
        }
        if variant.filter() == PASS_FILTER {
            self.passing += 1;
        }
        match variant.qual() {
            Some(qual) => self.quality_sum += qual,
            None => self.missing_quality += 1,
        }
        self.max_samples = self.max_samples.max(variant.samples().len());
        *self
            .variants_per_chrom
            .entry(variant.chrom().to_string())
            .or_insert(0) += 1;
    }

    /// Mean over the variants that have a quality score.
    pub fn mean_quality(&self) -> Option<f64> {
        let scored = self.total_variants - self.missing_quality;
        if scored == 0 {
            return None;
        }
        Some(self.quality_sum / scored as f64)
    }

    pub fn print_summary(&self) {
        println!("\nVCF Summary");
        println!("===========");
        println!("Total variants: {}", self.total_variants);
        println!("SNPs: {}", self.snps);
        println!("Multi-allelic sites: {}", self.multiallelic);
        println!("PASS: {}", self.passing);
        println!("Missing quality: {}", self.missing_quality);
        match self.mean_quality() {
            Some(mean) => println!("Mean quality: {:.2}", mean),
            None => println!("Mean quality: NA"),
        }
        println!("Samples: {}", self.max_samples);
        println!("\nVariants per chromosome:");
        for (chrom, count) in &self.variants_per_chrom {
            println!("  {}\t{}", chrom, count);
        }
    }
}

impl<'a> FromIterator<&'a Variant> for VcfStats {
    fn from_iter<I: IntoIterator<Item = &'a Variant>>(iter: I) -> Self {
        let mut stats = VcfStats::new();
        iter.into_iter().for_each(|variant| stats.add(variant));
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vcf::VariantFields;

    fn variant(chrom: &str, alt: &str, qual: Option<f64>, filter: &str) -> Variant {
        Variant::try_new(VariantFields {
            chrom: chrom.to_string(),
            pos: 1,
            id: ".".to_string(),
            ref_: "A".to_string(),
            alt: alt.to_string(),
            qual,
            filter: filter.to_string(),
            samples: vec!["0/1".to_string(), "1/1".to_string()],
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_bed_stats() {
        let regions = vec![
            Region::new("chr2", 0, 100, "a"),
            Region::new("chr1", 10, 20, "."),
            Region::new("chr2", 500, 400, "b"),
        ];
        let stats: BedStats = regions.iter().collect();

        assert_eq!(stats.total_regions, 3);
        assert_eq!(stats.total_span, 100 + 10 - 100);
        assert_eq!(stats.inverted_regions, 1);
        assert_eq!(stats.unnamed_regions, 1);
        let chroms: Vec<_> = stats.regions_per_chrom.iter().collect();
        assert_eq!(
            chroms,
            vec![(&"chr2".to_string(), &2), (&"chr1".to_string(), &1)]
        );
        assert!((stats.mean_length() - 10.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_bed_stats_extreme_coordinates() {
        let regions = vec![
            Region::new("chr1", i64::MIN, i64::MAX, "wide"),
            Region::new("chr1", i64::MIN, i64::MAX, "wide"),
            Region::new("chr1", i64::MAX, i64::MIN, "inverted"),
        ];
        let stats: BedStats = regions.iter().collect();

        let width = i64::MAX as i128 - i64::MIN as i128;
        assert_eq!(stats.total_span, width);
        assert_eq!(stats.inverted_regions, 1);
    }

    #[test]
    fn test_bed_stats_from_parsed_extreme_line() {
        use crate::bed::BedRecords;
        use std::io::Cursor;

        let regions: Vec<Region> =
            BedRecords::from_reader(Cursor::new("chr1\t-9223372036854775808\t1\n"))
                .collect::<Result<_, _>>()
                .unwrap();
        let stats: BedStats = regions.iter().collect();
        assert_eq!(stats.total_span, 1 - i64::MIN as i128);
    }

    #[test]
    fn test_empty_bed_stats() {
        let stats = BedStats::new();
        assert_eq!(stats.mean_length(), 0.0);
    }

    #[test]
    fn test_vcf_stats() {
        let variants = vec![
            variant("chrX", "G", Some(10.0), "PASS"),
            variant("chr1", "G,T", None, "q10"),
            variant("chrX", "GA", Some(30.0), "PASS"),
        ];
        let stats: VcfStats = variants.iter().collect();

        assert_eq!(stats.total_variants, 3);
        assert_eq!(stats.snps, 1);
        assert_eq!(stats.multiallelic, 1);
        assert_eq!(stats.passing, 2);
        assert_eq!(stats.missing_quality, 1);
        assert_eq!(stats.mean_quality(), Some(20.0));
        assert_eq!(stats.max_samples, 2);
        assert_eq!(
            stats.variants_per_chrom.keys().collect::<Vec<_>>(),
            vec!["chrX", "chr1"]
        );
    }

    #[test]
    fn test_vcf_stats_resume_after_serde() {
        let mut stats: VcfStats = [
            variant("chr1", "G", Some(10.0), "PASS"),
            variant("chr1", "G", Some(20.0), "PASS"),
        ]
        .iter()
        .collect();

        let bytes = bincode::serialize(&stats).unwrap();
        let mut restored: VcfStats = bincode::deserialize(&bytes).unwrap();
        assert_eq!(restored, stats);

        let next = variant("chr2", "T", Some(60.0), "PASS");
        stats.add(&next);
        restored.add(&next);
        assert_eq!(restored.mean_quality(), Some(30.0));
        assert_eq!(restored, stats);
    }

    #[test]
    fn test_vcf_stats_without_quality() {
        let stats: VcfStats = [variant("chr1", "G", None, ".")].iter().collect();
        assert_eq!(stats.mean_quality(), None);
        assert_eq!(stats.missing_quality, 1);
    }
}
