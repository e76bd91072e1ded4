//! Probe-to-gene-product resolution.
//!
//! Given the alignment records produced by the parser and a configuration,
//! the mapper determines which gene products each probe should be
//! associated with. Multiple results for a single probe are analyzed for
//! specificity and redundancy so that at most one association exists
//! between any probe and any gene product.

use std::collections::HashMap;
use std::collections::HashSet;

use nonempty::NonEmpty;

use crate::annotation;
use crate::annotation::GeneProductExonSet;
use crate::annotation::Source;
use crate::core::Strand;
use crate::overlap;
use crate::progress::Progress;
use crate::record::AlignmentRecord;

/// The convention for reducing an alignment's footprint to the single
/// representative point used when computing its distance to a gene
/// product's 3′ end.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ThreePrimeDistanceMethod {
    /// Measure from the leftmost target coordinate of the alignment.
    Leftmost,
    /// Measure from the midpoint of the alignment's target span.
    Midpoint,
    /// Measure from the rightmost target coordinate of the alignment.
    Rightmost,
}

/// Configuration for the probe mapper.
///
/// The defaults reflect the established thresholds of the surrounding
/// system; every value can be overridden.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// The alignment score below which records are ignored.
    score_threshold: f64,

    /// The fractional identity below which records are ignored.
    identity_threshold: f64,

    /// The minimum fraction of aligned bases that must overlap a gene
    /// product's exons for the hit to count.
    minimum_overlap_fraction: f64,

    /// Whether probes hitting more than one distinct gene product are
    /// retained (with reduced confidence) or discarded outright.
    retain_ambiguous: bool,

    /// The 3′-distance convention.
    three_prime_method: ThreePrimeDistanceMethod,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            score_threshold: 0.75,
            identity_threshold: 0.80,
            minimum_overlap_fraction: 0.50,
            retain_ambiguous: true,
            three_prime_method: ThreePrimeDistanceMethod::Rightmost,
        }
    }
}

impl Config {
    /// Sets the alignment score threshold.
    pub fn with_score_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Sets the fractional identity threshold.
    pub fn with_identity_threshold(mut self, threshold: f64) -> Self {
        self.identity_threshold = threshold;
        self
    }

    /// Sets the minimum exon-overlap fraction.
    pub fn with_minimum_overlap_fraction(mut self, fraction: f64) -> Self {
        self.minimum_overlap_fraction = fraction;
        self
    }

    /// Sets whether cross-product ambiguous probes are retained.
    pub fn with_retain_ambiguous(mut self, retain: bool) -> Self {
        self.retain_ambiguous = retain;
        self
    }

    /// Sets the 3′-distance convention.
    pub fn with_three_prime_method(mut self, method: ThreePrimeDistanceMethod) -> Self {
        self.three_prime_method = method;
        self
    }

    /// Gets the alignment score threshold.
    pub fn score_threshold(&self) -> f64 {
        self.score_threshold
    }

    /// Gets the fractional identity threshold.
    pub fn identity_threshold(&self) -> f64 {
        self.identity_threshold
    }

    /// Gets the minimum exon-overlap fraction.
    pub fn minimum_overlap_fraction(&self) -> f64 {
        self.minimum_overlap_fraction
    }

    /// Gets whether cross-product ambiguous probes are retained.
    pub fn retain_ambiguous(&self) -> bool {
        self.retain_ambiguous
    }

    /// Gets the 3′-distance convention.
    pub fn three_prime_method(&self) -> ThreePrimeDistanceMethod {
        self.three_prime_method
    }
}

/// A resolved association between one probe and one gene product.
///
/// After resolution, at most one association exists per probe and gene
/// product pair; alignments of the same probe to different exons of the
/// same product have been merged into it.
#[derive(Clone, Debug, PartialEq)]
pub struct Association {
    /// The probe identifier.
    probe: String,

    /// The gene product identifier.
    gene_product: String,

    /// The total exon-overlapping bases across supporting alignments.
    overlap: u64,

    /// The best individual alignment score among supporting alignments.
    score: f64,

    /// The number of alignments merged into this association.
    supporting_alignments: u64,

    /// The specificity of the probe: the reciprocal of the number of
    /// distinct candidate gene products it hit. Probes retained despite
    /// cross-product ambiguity carry values below one.
    specificity: f64,

    /// The representative distance from the alignment to the gene
    /// product's 3′ end, under the configured convention. Absent for
    /// products without exons.
    three_prime_distance: Option<u64>,
}

impl Association {
    /// Gets the probe identifier.
    pub fn probe(&self) -> &str {
        &self.probe
    }

    /// Gets the gene product identifier.
    pub fn gene_product(&self) -> &str {
        &self.gene_product
    }

    /// Gets the total exon-overlapping bases across supporting alignments.
    pub fn overlap(&self) -> u64 {
        self.overlap
    }

    /// Gets the best individual alignment score among supporting
    /// alignments.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Gets the number of alignments merged into this association.
    pub fn supporting_alignments(&self) -> u64 {
        self.supporting_alignments
    }

    /// Gets the specificity of the probe.
    pub fn specificity(&self) -> f64 {
        self.specificity
    }

    /// Gets the representative 3′-side distance.
    pub fn three_prime_distance(&self) -> Option<u64> {
        self.three_prime_distance
    }
}

/// An error related to probe mapping.
#[derive(Debug)]
pub enum Error {
    /// An annotation source failure.
    Annotation(annotation::Error),

    /// An overlap computation failure.
    Overlap(overlap::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Annotation(err) => write!(f, "annotation error: {}", err),
            Error::Overlap(err) => write!(f, "overlap error: {}", err),
        }
    }
}

impl std::error::Error for Error {}

/// The running totals for one (probe, gene product) pair during
/// resolution.
#[derive(Debug)]
struct Hit {
    /// The summed exon-overlapping bases.
    overlap: u64,

    /// The best individual alignment score seen so far.
    best_score: f64,

    /// The number of supporting alignments.
    supporting: u64,

    /// The 3′-side distance taken from the best-scoring alignment.
    distance: Option<u64>,
}

/// Maps probes to the gene products their alignment evidence supports.
#[derive(Clone, Debug, Default)]
pub struct ProbeMapper {
    /// The mapper configuration.
    config: Config,
}

impl ProbeMapper {
    /// Creates a new [`ProbeMapper`] with the provided configuration.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Gets the mapper configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves a set of alignment records (possibly covering many probes)
    /// into a mapping from probe identifier to associations.
    ///
    /// Records are grouped by probe; each group is resolved independently.
    /// Annotation-source failures are fatal and propagate unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use probemap::annotation::Annotations;
    /// use probemap::annotation::GeneProductExonSet;
    /// use probemap::core::GenomicInterval;
    /// use probemap::core::Strand;
    /// use probemap::mapper::ProbeMapper;
    /// use probemap::record::AlignmentRecord;
    ///
    /// let annotations = Annotations::new(vec![GeneProductExonSet::new(
    ///     "NM_000123",
    ///     vec![GenomicInterval::new("X", 1000, 100, Strand::Positive)],
    /// )]);
    ///
    /// let line = "50\t0\t0\t0\t0\t0\t0\t0\t+\tprobeA\t50\t0\t50\tchrX\t100000\t1020\t1070\t1\t50,\t0,\t1020,";
    /// let record = line.parse::<AlignmentRecord>()?;
    ///
    /// let mapping = ProbeMapper::default().process(&annotations, [record])?;
    ///
    /// let associations = &mapping["probeA"];
    /// assert_eq!(associations.len(), 1);
    /// assert_eq!(associations[0].gene_product(), "NM_000123");
    /// assert_eq!(associations[0].overlap(), 50);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn process<S>(
        &self,
        source: &S,
        records: impl IntoIterator<Item = AlignmentRecord>,
    ) -> Result<HashMap<String, Vec<Association>>, Error>
    where
        S: Source + ?Sized,
    {
        self.process_inner(source, records, None)
    }

    /// Resolves a set of alignment records, ticking the provided
    /// [`Progress`] handle once per resolved probe.
    pub fn process_with_progress<S>(
        &self,
        source: &S,
        records: impl IntoIterator<Item = AlignmentRecord>,
        progress: &mut Progress<'_>,
    ) -> Result<HashMap<String, Vec<Association>>, Error>
    where
        S: Source + ?Sized,
    {
        self.process_inner(source, records, Some(progress))
    }

    /// Resolves a set of alignment records.
    fn process_inner<S>(
        &self,
        source: &S,
        records: impl IntoIterator<Item = AlignmentRecord>,
        mut progress: Option<&mut Progress<'_>>,
    ) -> Result<HashMap<String, Vec<Association>>, Error>
    where
        S: Source + ?Sized,
    {
        let groups = group_by_probe(records);
        tracing::debug!(probes = groups.len(), "grouped alignment records");

        let mut results = HashMap::new();
        let mut skipped_records = 0u64;
        let mut discarded_ambiguous = 0u64;

        for (probe, group) in groups {
            if let Some(progress) = progress.as_deref_mut() {
                progress.tick();
            }

            let mut hits = HashMap::<String, Hit>::new();
            let mut candidates = HashSet::<String>::new();

            for record in group.iter() {
                if record.score() < self.config.score_threshold
                    || record.identity() < self.config.identity_threshold
                {
                    tracing::debug!(
                        probe = probe.as_str(),
                        score = record.score(),
                        identity = record.identity(),
                        "skipping alignment below thresholds"
                    );
                    skipped_records += 1;
                    continue;
                }

                self.resolve_record(source, record, &mut hits, &mut candidates)?;
            }

            if hits.is_empty() {
                continue;
            }

            if hits.len() > 1 && !self.config.retain_ambiguous {
                tracing::debug!(
                    probe = probe.as_str(),
                    products = hits.len(),
                    "discarding cross-product ambiguous probe"
                );
                discarded_ambiguous += 1;
                continue;
            }

            let specificity = 1.0 / candidates.len() as f64;

            let mut associations = hits
                .into_iter()
                .map(|(gene_product, hit)| Association {
                    probe: probe.clone(),
                    gene_product,
                    overlap: hit.overlap,
                    score: hit.best_score,
                    supporting_alignments: hit.supporting,
                    specificity,
                    three_prime_distance: hit.distance,
                })
                .collect::<Vec<_>>();

            associations.sort_by(|a, b| a.gene_product.cmp(&b.gene_product));
            results.insert(probe, associations);
        }

        if skipped_records > 0 || discarded_ambiguous > 0 {
            tracing::info!(
                skipped_records,
                discarded_ambiguous,
                "some alignment evidence did not meet criteria"
            );
        }

        Ok(results)
    }

    /// Folds one alignment record's candidate gene-product hits into the
    /// running per-probe totals.
    fn resolve_record<S>(
        &self,
        source: &S,
        record: &AlignmentRecord,
        hits: &mut HashMap<String, Hit>,
        candidates: &mut HashSet<String>,
    ) -> Result<(), Error>
    where
        S: Source + ?Sized,
    {
        let locus = record.target_interval();

        for candidate in source.overlapping(&locus).map_err(Error::Annotation)? {
            if candidate.chromosome() != Some(record.chromosome()) {
                continue;
            }

            let overlap_bases = overlap::gene_exon_overlap(
                record.target_block_starts(),
                record.block_sizes(),
                candidate.exons(),
            )
            .map_err(Error::Overlap)?;

            if overlap_bases == 0 {
                continue;
            }

            candidates.insert(candidate.id().to_string());

            let fraction = overlap_bases as f64 / record.aligned_length() as f64;
            if fraction < self.config.minimum_overlap_fraction {
                tracing::debug!(
                    probe = record.query_name(),
                    gene_product = candidate.id(),
                    fraction,
                    "hit below minimum exon-overlap fraction"
                );
                continue;
            }

            let distance = three_prime_distance(record, &candidate, self.config.three_prime_method);

            match hits.get_mut(candidate.id()) {
                Some(hit) => {
                    hit.overlap += overlap_bases;
                    hit.supporting += 1;

                    if record.score() > hit.best_score {
                        hit.best_score = record.score();
                        hit.distance = distance;
                    }
                }
                None => {
                    hits.insert(
                        candidate.id().to_string(),
                        Hit {
                            overlap: overlap_bases,
                            best_score: record.score(),
                            supporting: 1,
                            distance,
                        },
                    );
                }
            }
        }

        Ok(())
    }
}

/// Groups alignment records by probe identity, preserving every record and
/// the order of arrival within each group.
fn group_by_probe(
    records: impl IntoIterator<Item = AlignmentRecord>,
) -> HashMap<String, NonEmpty<AlignmentRecord>> {
    let mut groups = HashMap::<String, NonEmpty<AlignmentRecord>>::new();

    for record in records {
        match groups.get_mut(record.query_name()) {
            Some(group) => group.push(record),
            None => {
                groups.insert(record.query_name().to_string(), NonEmpty::new(record));
            }
        }
    }

    groups
}

/// Computes the distance from an alignment's representative point to the
/// 3′ end of a gene product, honoring the product's strand.
fn three_prime_distance(
    record: &AlignmentRecord,
    product: &GeneProductExonSet,
    method: ThreePrimeDistanceMethod,
) -> Option<u64> {
    let extent = product.extent()?;

    let point = match method {
        ThreePrimeDistanceMethod::Leftmost => record.target_start(),
        ThreePrimeDistanceMethod::Midpoint => (record.target_start() + record.target_end()) / 2,
        ThreePrimeDistanceMethod::Rightmost => record.target_end(),
    };

    match product.strand()? {
        Strand::Positive => Some(extent.end().saturating_sub(point)),
        Strand::Negative => Some(point.saturating_sub(extent.start())),
    }
}

#[cfg(test)]
pub mod tests {
    use crate::annotation::Annotations;
    use crate::core::GenomicInterval;
    use crate::record::Row;

    use super::*;

    /// Builds a perfect single-block alignment of `probe` against
    /// chromosome 1.
    fn record(probe: &str, target_start: u64, target_end: u64) -> AlignmentRecord {
        record_with_mismatches(probe, target_start, target_end, 0)
    }

    /// Builds a single-block alignment of `probe` against chromosome 1
    /// with the requested number of mismatching bases.
    fn record_with_mismatches(
        probe: &str,
        target_start: u64,
        target_end: u64,
        mismatches: u64,
    ) -> AlignmentRecord {
        let size = target_end - target_start;

        Row {
            query_name: probe.to_string(),
            query_size: size,
            matches: size - mismatches,
            mismatches,
            rep_matches: 0,
            n_count: 0,
            query_gap_count: 0,
            query_gap_bases: 0,
            target_gap_count: 0,
            target_gap_bases: 0,
            strand: Strand::Positive,
            query_start: 0,
            query_end: size,
            target_name: "chr1".to_string(),
            target_size: 1_000_000,
            target_start,
            target_end,
            block_count: 1,
            block_sizes: vec![size],
            query_block_starts: vec![0],
            target_block_starts: vec![target_start],
        }
        .try_into()
        .expect("test record must be valid")
    }

    /// Builds a gene product on chromosome 1 from `(start, length)` exon
    /// pairs.
    fn product(id: &str, exons: &[(u64, u64)]) -> GeneProductExonSet {
        GeneProductExonSet::new(
            id,
            exons
                .iter()
                .map(|(start, length)| GenomicInterval::new("1", *start, *length, Strand::Positive))
                .collect(),
        )
    }

    /// The annotation set shared by the tests: a two-exon product and a
    /// distant single-exon product.
    fn annotations() -> Annotations {
        Annotations::new(vec![
            product("G1", &[(1000, 100), (2000, 100)]),
            product("G2", &[(5000, 100)]),
        ])
    }

    #[test]
    fn test_redundant_hits_collapse_to_one_association(
    ) -> Result<(), Box<dyn std::error::Error>> {
        // Two alignments of probeA, one per exon of G1, plus one alignment
        // whose overlap with G2 is below the minimum fraction.
        let records = vec![
            record("probeA", 1000, 1050),
            record("probeA", 2000, 2050),
            record("probeA", 5080, 5130),
        ];

        let mapping = ProbeMapper::default().process(&annotations(), records)?;

        assert_eq!(mapping.len(), 1);

        let associations = &mapping["probeA"];
        assert_eq!(associations.len(), 1);

        let association = &associations[0];
        assert_eq!(association.probe(), "probeA");
        assert_eq!(association.gene_product(), "G1");
        assert_eq!(association.overlap(), 100);
        assert_eq!(association.supporting_alignments(), 2);
        assert_eq!(association.score(), 1.0);

        // The sub-threshold G2 hit still counts against specificity.
        assert_eq!(association.specificity(), 0.5);

        Ok(())
    }

    #[test]
    fn test_ambiguous_probe_retained_with_reduced_confidence(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let records = vec![
            record("probeB", 1000, 1050),
            record("probeB", 5000, 5050),
        ];

        let mapping = ProbeMapper::default().process(&annotations(), records)?;
        let associations = &mapping["probeB"];

        assert_eq!(associations.len(), 2);
        assert_eq!(associations[0].gene_product(), "G1");
        assert_eq!(associations[1].gene_product(), "G2");
        assert_eq!(associations[0].specificity(), 0.5);
        assert_eq!(associations[1].specificity(), 0.5);

        Ok(())
    }

    #[test]
    fn test_ambiguous_probe_discarded_when_retention_disabled(
    ) -> Result<(), Box<dyn std::error::Error>> {
        let records = vec![
            record("probeB", 1000, 1050),
            record("probeB", 5000, 5050),
        ];

        let config = Config::default().with_retain_ambiguous(false);
        let mapping = ProbeMapper::new(config).process(&annotations(), records)?;

        assert!(mapping.is_empty());

        Ok(())
    }

    #[test]
    fn test_low_identity_alignment_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
        // 15 mismatches in a 50-base alignment: identity 0.7, below the
        // default threshold.
        let records = vec![record_with_mismatches("probeC", 1000, 1050, 15)];

        let mapping = ProbeMapper::default().process(&annotations(), records)?;
        assert!(mapping.is_empty());

        Ok(())
    }

    #[test]
    fn test_intronic_alignment_yields_no_association() -> Result<(), Box<dyn std::error::Error>> {
        // Entirely within the intron of G1.
        let records = vec![record("probeD", 1200, 1250)];

        let mapping = ProbeMapper::default().process(&annotations(), records)?;
        assert!(mapping.is_empty());

        Ok(())
    }

    #[test]
    fn test_three_prime_distance_conventions() -> Result<(), Box<dyn std::error::Error>> {
        // G1's extent ends at 2100; the alignment covers [1000, 1050).
        let cases = [
            (ThreePrimeDistanceMethod::Leftmost, 1100),
            (ThreePrimeDistanceMethod::Midpoint, 1075),
            (ThreePrimeDistanceMethod::Rightmost, 1050),
        ];

        for (method, expected) in cases {
            let config = Config::default().with_three_prime_method(method);
            let mapping =
                ProbeMapper::new(config).process(&annotations(), [record("probeE", 1000, 1050)])?;

            let association = &mapping["probeE"][0];
            assert_eq!(association.three_prime_distance(), Some(expected));
        }

        Ok(())
    }

    #[test]
    fn test_annotation_failure_is_fatal() -> Result<(), Box<dyn std::error::Error>> {
        /// A source that always fails.
        struct Unreachable;

        impl Source for Unreachable {
            fn overlapping(
                &self,
                _: &GenomicInterval,
            ) -> Result<Vec<GeneProductExonSet>, annotation::Error> {
                Err(annotation::Error::new(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "database unreachable",
                )))
            }
        }

        let err = ProbeMapper::default()
            .process(&Unreachable, [record("probeF", 1000, 1050)])
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "annotation error: annotation source error: database unreachable"
        );

        Ok(())
    }

    #[test]
    fn test_progress_ticks_per_probe() -> Result<(), Box<dyn std::error::Error>> {
        let records = vec![
            record("probeA", 1000, 1050),
            record("probeA", 2000, 2050),
            record("probeG", 1000, 1050),
        ];

        let mut progress = Progress::new(0, |_| {});
        ProbeMapper::default().process_with_progress(&annotations(), records, &mut progress)?;

        assert_eq!(progress.count(), 2);

        Ok(())
    }
}
